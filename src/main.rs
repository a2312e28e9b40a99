//! sprint-digest CLI entry point.

use chrono::{Datelike, Local};
use clap::Parser;

use sprint_digest::cli::{commands, Cli, Commands};
use sprint_digest::domain::models::LoggingConfig;
use sprint_digest::infrastructure::config::ConfigLoader;
use sprint_digest::infrastructure::logging::LoggerImpl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            let _logger = LoggerImpl::init(&LoggingConfig::default());
            sprint_digest::cli::handle_error(err, cli.json);
        }
    };

    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => sprint_digest::cli::handle_error(err, cli.json),
    };

    let result = match &cli.command {
        Commands::Standup(args) => commands::standup::execute(args, &config, cli.json).await,
        Commands::Weekly(args) => {
            let today = Local::now().weekday();
            commands::weekly::execute(args, &config, today, cli.json).await
        }
    };

    if let Err(err) = result {
        sprint_digest::cli::handle_error(err, cli.json);
    }
}
