//! CLI command implementations.

pub mod standup;
pub mod weekly;

use anyhow::{Context, Result};

use crate::adapters::plugins::connect;
use crate::domain::models::{Config, ReportKind, RunOutcome, StatusMapping, TagRules};
use crate::infrastructure::config::ConfigLoader;
use crate::services::{RecordSyncService, ReportFormatter, SyncAndReport};

/// Validate required settings, wire the adapters and run one report.
async fn run_report(config: &Config, kind: ReportKind) -> Result<RunOutcome> {
    ConfigLoader::validate_required(config)?;

    let connectors = connect(config).context("Failed to build HTTP clients")?;
    let sync = RecordSyncService::new(
        connectors.tickets.clone(),
        connectors.records,
        StatusMapping::default(),
        TagRules::default(),
        config.jira.base_url.as_str(),
    );
    let run = SyncAndReport::new(
        connectors.tickets,
        connectors.notifier,
        sync,
        ReportFormatter::default(),
    );

    run.run(kind).await.context("Report run failed")
}
