//! Slack adapter.
//!
//! Delivers the digest through an incoming webhook.

pub mod client;
