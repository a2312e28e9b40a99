//! Notion adapter.
//!
//! Stores one page per (ticket, sprint) in the records database and keeps
//! tag pages in a second database, linked through the `Tags` relation.

pub mod client;
pub mod models;
pub mod store;
