use chrono::Weekday;
use clap::Parser;
use sprint_digest::cli::{Cli, Commands};

#[test]
fn test_parse_standup() {
    let cli = Cli::try_parse_from(["sprint-digest", "standup"]).unwrap();

    assert!(matches!(cli.command, Commands::Standup(_)));
    assert!(cli.config.is_none());
    assert!(!cli.json);
}

#[test]
fn test_parse_weekly_default_day() {
    let cli = Cli::try_parse_from(["sprint-digest", "weekly"]).unwrap();

    match cli.command {
        Commands::Weekly(args) => assert_eq!(args.on, Weekday::Fri),
        Commands::Standup(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_weekly_custom_day() {
    let cli = Cli::try_parse_from(["sprint-digest", "weekly", "--on", "thursday"]).unwrap();

    match cli.command {
        Commands::Weekly(args) => assert_eq!(args.on, Weekday::Thu),
        Commands::Standup(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_weekly_invalid_day() {
    let result = Cli::try_parse_from(["sprint-digest", "weekly", "--on", "funday"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "sprint-digest",
        "standup",
        "--json",
        "--config",
        "/etc/sprint-digest.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("/etc/sprint-digest.yaml"))
    );
}

#[test]
fn test_missing_subcommand_is_error() {
    assert!(Cli::try_parse_from(["sprint-digest"]).is_err());
}
