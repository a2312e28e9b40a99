use std::path::Path;

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::value::UncasedStr;
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "sprint-digest.yaml";

/// Flat environment names accepted for the required settings, with the
/// config key each one sets.
pub const LEGACY_ENV: [(&str, &str); 8] = [
    ("JIRA_URL", "jira.query_url"),
    ("JIRA_BASE_URL", "jira.base_url"),
    ("JIRA_USER_NAME", "jira.user_name"),
    ("JIRA_API_TOKEN", "jira.api_token"),
    ("NOTION_TOKEN", "notion.token"),
    ("DATABASE_ID", "notion.database_id"),
    ("TAGS_DATABASE_ID", "notion.tags_database_id"),
    ("SLACK_WEBHOOK_URL", "slack.webhook_url"),
];

const ENV_PREFIX: &str = "SPRINT_DIGEST_";

/// Config keys holding free-form text. Environment values for these are
/// taken verbatim, so ids like `123456789` or a token of `true` stay strings.
const STRING_KEYS: [&str; 15] = [
    "jira.base_url",
    "jira.query_url",
    "jira.user_name",
    "jira.api_token",
    "jira.sprint_field",
    "notion.base_url",
    "notion.token",
    "notion.database_id",
    "notion.tags_database_id",
    "notion.api_version",
    "slack.webhook_url",
    "logging.level",
    "logging.format",
    "logging.log_dir",
    "logging.rotation",
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required settings: {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid http.timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path`, or `sprint-digest.yaml` in the working directory (optional)
    /// 3. Flat legacy variables (`JIRA_URL`, `NOTION_TOKEN`, ...)
    /// 4. Environment variables (SPRINT_DIGEST_* prefix, highest priority)
    ///
    /// Required settings are not checked here; see [`Self::validate_required`].
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(path) => {
                anyhow::ensure!(
                    path.is_file(),
                    "Config file not found: {}",
                    path.display()
                );
                path
            }
            None => Path::new(DEFAULT_CONFIG_FILE),
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file));
        let figment = Self::merge_verbatim(figment, &Self::legacy_env());
        let figment = figment.merge(Self::prefixed_env().filter(|key| !is_string_key(key)));
        let figment = Self::merge_verbatim(figment, &Self::prefixed_env().filter(is_string_key));

        let config: Config = figment
            .extract()
            .context("Failed to load configuration from defaults, config file and environment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn legacy_env() -> Env {
        let names: Vec<&str> = LEGACY_ENV.iter().map(|(name, _)| *name).collect();
        Env::raw().only(&names).map(|key| {
            LEGACY_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map_or_else(|| key.as_str().to_string().into(), |(_, path)| (*path).into())
        })
    }

    fn prefixed_env() -> Env {
        Env::prefixed(ENV_PREFIX).split("__")
    }

    /// Merge each variable `env` yields as a plain string, bypassing the
    /// scalar parsing `Env` applies to its values.
    fn merge_verbatim(figment: Figment, env: &Env) -> Figment {
        env.iter().fold(figment, |figment, (key, value)| {
            figment.merge(Serialized::default(&key.as_str().to_lowercase(), value))
        })
    }

    /// Validate formats after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        Ok(())
    }

    /// Check that every setting needed to reach Jira, Notion and Slack is
    /// present. The error names all missing settings, not just the first.
    pub fn validate_required(config: &Config) -> Result<(), ConfigError> {
        let values = [
            &config.jira.query_url,
            &config.jira.base_url,
            &config.jira.user_name,
            &config.jira.api_token,
            &config.notion.token,
            &config.notion.database_id,
            &config.notion.tags_database_id,
            &config.slack.webhook_url,
        ];

        let missing: Vec<&'static str> = LEGACY_ENV
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|((name, _), _)| *name)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingSettings(missing))
        }
    }
}

fn is_string_key(key: &UncasedStr) -> bool {
    STRING_KEYS
        .iter()
        .any(|path| key.as_str().eq_ignore_ascii_case(path))
}
