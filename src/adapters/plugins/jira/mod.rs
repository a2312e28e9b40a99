//! Jira adapter.
//!
//! Reads the pre-filtered issue list and single issues from the Jira Cloud
//! REST API v3 and maps them onto domain [`Ticket`](crate::domain::models::Ticket)s.

pub mod client;
pub mod models;
pub mod source;
