use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure for the sprint digest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Jira connection settings
    #[serde(default)]
    pub jira: JiraConfig,

    /// Notion connection settings
    #[serde(default)]
    pub notion: NotionConfig,

    /// Slack delivery settings
    #[serde(default)]
    pub slack: SlackConfig,

    /// HTTP client settings shared by all services
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Jira configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JiraConfig {
    /// Site root, e.g. `https://acme.atlassian.net`
    #[serde(default)]
    pub base_url: String,

    /// Pre-filtered search URL, e.g. `.../rest/api/3/search?jql=filter=11407`
    #[serde(default)]
    pub query_url: String,

    /// Account used for Basic auth
    #[serde(default)]
    pub user_name: String,

    /// API token used for Basic auth
    #[serde(default)]
    pub api_token: String,

    /// Custom field holding sprint memberships
    #[serde(default = "default_sprint_field")]
    pub sprint_field: String,
}

fn default_sprint_field() -> String {
    "customfield_10008".to_string()
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            query_url: String::new(),
            user_name: String::new(),
            api_token: String::new(),
            sprint_field: default_sprint_field(),
        }
    }
}

/// Notion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NotionConfig {
    /// API root
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,

    /// Integration token, sent as a bearer token
    #[serde(default)]
    pub token: String,

    /// Database holding one page per ticket and sprint
    #[serde(default)]
    pub database_id: String,

    /// Database holding tag pages
    #[serde(default)]
    pub tags_database_id: String,

    /// Value of the `Notion-Version` header
    #[serde(default = "default_notion_version")]
    pub api_version: String,
}

fn default_notion_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_version() -> String {
    "2021-05-13".to_string()
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            base_url: default_notion_base_url(),
            token: String::new(),
            database_id: String::new(),
            tags_database_id: String::new(),
            api_version: default_notion_version(),
        }
    }
}

/// Slack configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SlackConfig {
    /// Incoming webhook URL
    #[serde(default)]
    pub webhook_url: String,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stdout only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation for file logs: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
