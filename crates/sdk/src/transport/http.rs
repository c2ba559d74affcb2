//! HTTP transport layer for the Notion SDK.

use crate::config::ClientConfig;
use crate::error::{NotionError, NotionResult};
use reqwest::{header, Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
///
/// One call is one request: no retries, no pagination.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> NotionResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| NotionError::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);

        headers.insert(
            header::HeaderName::from_static("notion-version"),
            header::HeaderValue::from_str(&config.notion_version)
                .map_err(|_| NotionError::Config("Invalid Notion-Version format".to_string()))?,
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("notion-sdk-rs/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path segments. Each segment is
    /// percent-encoded, so ids can never escape their position in the path.
    fn build_url(&self, segments: &[&str]) -> NotionResult<url::Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NotionError::Config("Base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send the request and decode a successful body.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> NotionResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), "Notion API returned an error");
        Err(NotionError::from_response(status.as_u16(), &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> NotionResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request");

        self.execute(self.client.get(url)).await
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize>(
        &self,
        segments: &[&str],
        query: &Q,
    ) -> NotionResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "GET request with query");

        self.execute(self.client.get(url).query(query)).await
    }

    /// Execute a POST request.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> NotionResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "POST request");

        self.execute(self.client.post(url).json(body)).await
    }

    /// Execute a PATCH request.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> NotionResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "PATCH request");

        self.execute(self.client.patch(url).json(body)).await
    }

    /// Execute a DELETE request.
    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> NotionResult<T> {
        let url = self.build_url(segments)?;
        debug!(url = %url, "DELETE request");

        self.execute(self.client.delete(url)).await
    }
}
