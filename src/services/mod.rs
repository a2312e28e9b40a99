pub mod orchestrator;
pub mod record_sync;
pub mod report_formatter;
pub mod tag_resolver;

pub use orchestrator::SyncAndReport;
pub use record_sync::RecordSyncService;
pub use report_formatter::{ReportFormatter, WeeklyBuckets};
pub use tag_resolver::TagResolver;
