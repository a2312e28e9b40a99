//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use chrono::Weekday;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sprint-digest")]
#[command(about = "Sync the active Jira sprint into Notion and post a digest to Slack", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./sprint-digest.yaml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync records and post the daily stand-up digest
    Standup(StandupArgs),

    /// Sync records and post the weekly digest on the report day
    Weekly(WeeklyArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct StandupArgs {}

#[derive(Args, Debug, Clone)]
pub struct WeeklyArgs {
    /// Day of the week the report is sent (mon..sun); other days are a no-op
    #[arg(long, default_value = "fri", value_parser = parse_weekday)]
    pub on: Weekday,
}

impl Default for WeeklyArgs {
    fn default() -> Self {
        Self { on: Weekday::Fri }
    }
}

/// Parse a weekday name such as `fri` or `Friday`.
pub fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| format!("invalid weekday '{s}', expected one of mon, tue, wed, thu, fri, sat, sun"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("fri"), Ok(Weekday::Fri));
        assert_eq!(parse_weekday("Monday"), Ok(Weekday::Mon));
        assert!(parse_weekday("someday").is_err());
    }

    #[test]
    fn test_weekly_defaults_to_friday() {
        let cli = Cli::parse_from(["sprint-digest", "weekly"]);
        match cli.command {
            Commands::Weekly(args) => assert_eq!(args.on, Weekday::Fri),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
