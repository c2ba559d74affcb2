//! Main client for the Notion SDK.

use crate::api::*;
use crate::config::{self, ClientConfig, API_KEY_ENV};
use crate::error::{NotionError, NotionResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// Main client for interacting with the Notion API.
///
/// Cloning is cheap; clones share the same connection pool and credential.
#[derive(Debug, Clone)]
pub struct NotionClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl NotionClient {
    /// Create a new client builder.
    pub fn builder() -> NotionClientBuilder {
        NotionClientBuilder::new()
    }

    /// Build a client with default settings, reading the API key from
    /// `NOTION_API_KEY`.
    pub fn from_env() -> NotionResult<Self> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| missing_api_key())?;
        Self::builder().api_key(api_key).build()
    }

    /// Create a client from configuration.
    fn from_config(config: ClientConfig) -> NotionResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Get the databases API.
    pub fn databases(&self) -> DatabasesApi<'_> {
        DatabasesApi::new(self)
    }

    /// Get the pages API.
    pub fn pages(&self) -> PagesApi<'_> {
        PagesApi::new(self)
    }

    /// Get the blocks API.
    pub fn blocks(&self) -> BlocksApi<'_> {
        BlocksApi::new(self)
    }

    /// Get the users API.
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    /// Get the comments API.
    pub fn comments(&self) -> CommentsApi<'_> {
        CommentsApi::new(self)
    }

    /// Get the link previews API.
    pub fn link_previews(&self) -> LinkPreviewsApi<'_> {
        LinkPreviewsApi::new(self)
    }
}

fn missing_api_key() -> NotionError {
    NotionError::Config(format!(
        "Notion API key is required. Provide it as a parameter or set the {} environment variable.",
        API_KEY_ENV
    ))
}

/// Builder for creating a NotionClient.
pub struct NotionClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    notion_version: Option<String>,
    timeout: Duration,
}

impl NotionClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            notion_version: None,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }

    /// Override the base URL of the Notion API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the integration token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the `Notion-Version` header.
    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = Some(version.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> NotionResult<NotionClient> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(missing_api_key)?;

        let mut config = ClientConfig::new(api_key);
        config.timeout = self.timeout;

        if let Some(base_url) = self.base_url {
            config.base_url = config::normalize_base_url(&base_url)?;
        }

        if let Some(version) = self.notion_version {
            config.notion_version = version;
        }

        NotionClient::from_config(config)
    }
}

impl Default for NotionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
