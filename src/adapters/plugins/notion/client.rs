//! Notion HTTP client.
//!
//! Wraps the four Notion endpoints used by the record store: database
//! query, page creation, page update and page retrieval.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder};
use serde_json::Value;

use crate::adapters::plugins::http;
use crate::domain::errors::{DomainResult, Service};
use crate::domain::models::NotionConfig;

use super::models::{query_body, NotionFilter, NotionPage, NotionQueryResponse};

/// HTTP client for the Notion API.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
    api_version: String,
}

impl NotionClient {
    pub fn new(config: &NotionConfig, timeout: Duration) -> DomainResult<Self> {
        Ok(Self {
            http: http::build_client(timeout)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Build an authorized request against `path`.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.token)
            .header("Notion-Version", &self.api_version)
            .header("Content-Type", "application/json")
    }

    /// Query a database with `filter`. Only the first page of results is read.
    pub async fn query_database(
        &self,
        database_id: &str,
        filter: &NotionFilter,
    ) -> DomainResult<NotionQueryResponse> {
        let req = self
            .request(Method::POST, &format!("/databases/{database_id}/query"))
            .json(&query_body(filter));
        let response: NotionQueryResponse =
            http::send_json(Service::Notion, "query_database", req).await?;

        if response.has_more {
            tracing::warn!(
                database_id,
                returned = response.results.len(),
                "Notion query has more results than one page; the rest are ignored"
            );
        }
        Ok(response)
    }

    pub async fn create_page(&self, body: &Value) -> DomainResult<NotionPage> {
        let req = self.request(Method::POST, "/pages").json(body);
        http::send_json(Service::Notion, "create_page", req).await
    }

    pub async fn update_page(&self, page_id: &str, body: &Value) -> DomainResult<NotionPage> {
        let req = self
            .request(Method::PATCH, &format!("/pages/{page_id}"))
            .json(body);
        http::send_json(Service::Notion, "update_page", req).await
    }

    pub async fn get_page(&self, page_id: &str) -> DomainResult<NotionPage> {
        let req = self.request(Method::GET, &format!("/pages/{page_id}"));
        http::send_json(Service::Notion, "get_page", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::plugins::notion::models::properties;

    fn client_for(server: &mockito::Server) -> NotionClient {
        let config = NotionConfig {
            base_url: server.url(),
            token: "secret_abc".to_string(),
            database_id: "db-1".to_string(),
            tags_database_id: "tags-1".to_string(),
            ..Default::default()
        };
        NotionClient::new(&config, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_query_sends_filter_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/databases/db-1/query")
            .match_header("authorization", "Bearer secret_abc")
            .match_header("notion-version", "2021-05-13")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "filter": { "property": "Sprint", "select": { "equals": "Sprint 12" } }
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"object":"list","results":[],"has_more":false}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let response = client
            .query_database("db-1", &NotionFilter::select(properties::SPRINT, "Sprint 12"))
            .await
            .unwrap();

        assert!(response.results.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_page_error_carries_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PATCH", "/pages/page-1")
            .with_status(400)
            .with_body(r#"{"code":"validation_error"}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let err = client
            .update_page("page-1", &serde_json::json!({ "properties": {} }))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert!(err.to_string().contains("validation_error"));
        mock.assert_async().await;
    }
}
