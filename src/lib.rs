//! sprint-digest - Jira to Notion sprint sync with Slack digests
//!
//! Reads the tickets of the active Jira sprint, keeps one Notion record per
//! ticket and sprint up to date (status and tags), and posts a stand-up or
//! weekly digest of those records to a Slack webhook.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, errors and port traits
//! - **Adapters** (`adapters`): Jira, Notion and Slack HTTP clients, in-memory fakes
//! - **Service Layer** (`services`): Record sync, tag resolution, formatting, orchestration
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult, Service};
pub use domain::models::{
    Config, FormattedRecord, MappedStatus, ReportKind, RunOutcome, StatusMapping, TagRules, Ticket,
};
pub use domain::ports::{Notifier, RecordStore, TicketSource};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{RecordSyncService, ReportFormatter, SyncAndReport, TagResolver, WeeklyBuckets};
