//! One end-to-end run: fetch tickets, sync records, post the digest.

use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::models::{active_sprint_name, ReportKind, RunOutcome};
use crate::domain::ports::{Notifier, TicketSource};
use crate::services::record_sync::RecordSyncService;
use crate::services::report_formatter::ReportFormatter;

/// Drives a single sync-and-report run.
///
/// Every step is awaited in order; the first error aborts the run and
/// nothing already written is rolled back.
pub struct SyncAndReport {
    tickets: Arc<dyn TicketSource>,
    notifier: Arc<dyn Notifier>,
    sync: RecordSyncService,
    formatter: ReportFormatter,
}

impl SyncAndReport {
    pub fn new(
        tickets: Arc<dyn TicketSource>,
        notifier: Arc<dyn Notifier>,
        sync: RecordSyncService,
        formatter: ReportFormatter,
    ) -> Self {
        Self {
            tickets,
            notifier,
            sync,
            formatter,
        }
    }

    pub async fn run(&self, kind: ReportKind) -> DomainResult<RunOutcome> {
        let tickets = self.tickets.fetch_tickets().await?;

        let Some(sprint) = active_sprint_name(&tickets) else {
            tracing::info!("No active sprint found");
            return Ok(RunOutcome::NoActiveSprint);
        };
        tracing::info!(sprint = %sprint, "Active sprint");

        tracing::info!(sprint = %sprint, "Syncing records");

        let inserted = self.sync.upsert_all_from_tickets(&tickets, &sprint).await?;
        let updated = self.sync.refresh_statuses_for_sprint(&sprint).await?;
        tracing::info!(sprint = %sprint, inserted, updated, "Records synced");

        let records = self.sync.fetch_formatted_records(&sprint).await?;
        let text = match kind {
            ReportKind::Standup => self.formatter.format_standup(&records),
            ReportKind::Weekly => self.formatter.format_weekly(&records),
        };

        self.notifier.post(&text).await?;

        Ok(RunOutcome::Delivered {
            sprint,
            kind,
            records: records.len(),
            inserted,
            updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryRecordStore, InMemoryTicketSource, RecordingNotifier};
    use crate::domain::models::{StatusMapping, TagRules, Ticket};

    struct Harness {
        run: SyncAndReport,
        store: Arc<InMemoryRecordStore>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(tickets: Vec<Ticket>) -> Harness {
        let source = Arc::new(InMemoryTicketSource::new(tickets));
        let store = Arc::new(InMemoryRecordStore::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let sync = RecordSyncService::new(
            source.clone(),
            store.clone(),
            StatusMapping::default(),
            TagRules::default(),
            "https://acme.atlassian.net",
        );
        Harness {
            run: SyncAndReport::new(source, notifier.clone(), sync, ReportFormatter::default()),
            store,
            notifier,
        }
    }

    fn tickets() -> Vec<Ticket> {
        vec![
            Ticket::new("SHOP-2", "Review me", "Code Review", "Task").with_sprint("S7", "active"),
            Ticket::new("SHOP-1", "Start me", "Open", "Bug").with_sprint("S7", "active"),
        ]
    }

    #[tokio::test]
    async fn test_standup_run_posts_sorted_digest() {
        let h = harness(tickets());
        let outcome = h.run.run(ReportKind::Standup).await.unwrap();

        assert_eq!(
            outcome,
            RunOutcome::Delivered {
                sprint: "S7".to_string(),
                kind: ReportKind::Standup,
                records: 2,
                inserted: 2,
                updated: 2,
            }
        );

        let messages = h.notifier.messages().await;
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages[0],
            "- <https://acme.atlassian.net/browse/SHOP-1|SHOP-1> Start me `Open`\n\
             - <https://acme.atlassian.net/browse/SHOP-2|SHOP-2> Review me `Code Review`"
        );
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_run_logs_sync_start_before_result() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let h = harness(tickets());
        h.run.run(ReportKind::Standup).await.unwrap();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        let start = output.find("Syncing records").expect("sync start logged");
        let done = output.find("Records synced").expect("sync result logged");
        assert!(start < done);
        assert!(output[start..].contains("sprint=S7"));
    }

    #[tokio::test]
    async fn test_weekly_run_uses_sections() {
        let h = harness(tickets());
        h.run.run(ReportKind::Weekly).await.unwrap();

        let messages = h.notifier.messages().await;
        assert!(messages[0].starts_with("On Going:\n"));
        assert!(messages[0].ends_with("\nSummary:"));
    }

    #[tokio::test]
    async fn test_no_active_sprint_writes_nothing() {
        let h = harness(vec![
            Ticket::new("SHOP-1", "Old", "Closed", "Task").with_sprint("S6", "closed"),
        ]);
        let outcome = h.run.run(ReportKind::Standup).await.unwrap();

        assert_eq!(outcome, RunOutcome::NoActiveSprint);
        assert_eq!(h.store.calls(), 0);
        assert!(h.notifier.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_second_run_inserts_nothing() {
        let h = harness(tickets());
        h.run.run(ReportKind::Standup).await.unwrap();
        let outcome = h.run.run(ReportKind::Standup).await.unwrap();

        match outcome {
            RunOutcome::Delivered { inserted, updated, .. } => {
                assert_eq!(inserted, 0);
                assert_eq!(updated, 2);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(h.store.records().await.len(), 2);
    }
}
