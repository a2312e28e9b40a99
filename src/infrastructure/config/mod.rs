//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Legacy flat environment names
//! - Prefixed environment variable overrides
//! - Format and required-setting validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE, LEGACY_ENV};
