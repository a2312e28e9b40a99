//! Slack incoming-webhook client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::adapters::plugins::http;
use crate::domain::errors::{DomainResult, Service};
use crate::domain::models::SlackConfig;
use crate::domain::ports::Notifier;

const SEPARATOR_WIDTH: usize = 50;

/// Request body for an incoming webhook.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage<'a> {
    pub text: &'a str,
}

/// [`Notifier`] posting to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhookClient {
    http: Client,
    webhook_url: String,
}

impl SlackWebhookClient {
    pub fn new(config: &SlackConfig, timeout: Duration) -> DomainResult<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            webhook_url: config.webhook_url.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SlackWebhookClient {
    async fn post(&self, text: &str) -> DomainResult<()> {
        let req = self.http.post(&self.webhook_url).json(&SlackMessage { text });
        http::send(Service::Slack, "post_message", req).await?;

        let separator = "=".repeat(SEPARATOR_WIDTH);
        tracing::info!("{separator}");
        tracing::info!("Message sent to Slack as following:");
        for line in text.lines() {
            tracing::info!("  {line}");
        }
        tracing::info!("{separator}");
        Ok(())
    }
}
