//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::logging::SecretScrubber;

/// Log `err` with credentials scrubbed, report it and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    tracing::error!(error = %message, "Run failed");

    if json_mode {
        println!("{}", serde_json::json!({ "error": message }));
    } else {
        eprintln!("Error: {message}");
    }
    std::process::exit(1)
}
