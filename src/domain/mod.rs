//! Domain layer for the sprint digest
//!
//! Core models, the error taxonomy and the port traits that the Jira,
//! Notion and Slack adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult, Service};
