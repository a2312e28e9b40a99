pub mod config;
pub mod outcome;
pub mod record;
pub mod status;
pub mod tag;
pub mod ticket;

pub use config::{Config, HttpConfig, JiraConfig, LoggingConfig, NotionConfig, SlackConfig};
pub use outcome::{ReportKind, RunOutcome};
pub use record::{FormattedRecord, NewRecord, Record, RecordUpdate};
pub use status::{MappedStatus, StatusMapping, StatusRank};
pub use tag::{Tag, TagRules};
pub use ticket::{active_sprint_name, ParentRef, SprintMembership, Ticket};
