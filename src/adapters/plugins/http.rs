//! Request plumbing shared by the Jira, Notion and Slack clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::domain::errors::{DomainError, DomainResult, Service};

/// Build an HTTP client with a bounded per-request timeout.
pub fn build_client(timeout: Duration) -> DomainResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DomainError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Send `request`, turning transport failures and non-2xx statuses into
/// [`DomainError`]s.
pub async fn send(service: Service, operation: &str, request: RequestBuilder) -> DomainResult<Response> {
    let response = request.send().await.map_err(|e| DomainError::Transport {
        service,
        message: format!("{operation}: {e}"),
    })?;

    let status = response.status();
    tracing::debug!(%service, operation, status = status.as_u16(), "response received");

    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        tracing::warn!(%service, operation, status = status.as_u16(), "request rejected");
        return Err(DomainError::Api {
            service,
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}

/// Send `request` and decode a JSON body of type `T`.
pub async fn send_json<T: DeserializeOwned>(
    service: Service,
    operation: &str,
    request: RequestBuilder,
) -> DomainResult<T> {
    let response = send(service, operation, request).await?;
    response.json::<T>().await.map_err(|e| DomainError::Decode {
        service,
        message: format!("{operation}: {e}"),
    })
}
