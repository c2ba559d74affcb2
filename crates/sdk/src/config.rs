//! Configuration types for the Notion SDK.

use std::time::Duration;
use url::Url;

/// Default base URL of the Notion REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1/";

/// API version sent in the `Notion-Version` header.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Configuration for the Notion client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto. Always ends with `/`.
    pub base_url: Url,
    /// Integration token sent as a bearer credential.
    pub api_key: String,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with default endpoint, version and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// Keep the token out of logs.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("notion_version", &self.notion_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid")
}

/// Parse a base URL, making sure relative joins land under its path.
pub(crate) fn normalize_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{}/", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("secret_abc");

        assert_eq!(config.base_url.as_str(), "https://api.notion.com/v1/");
        assert_eq!(config.api_key, "secret_abc");
        assert_eq!(config.notion_version, "2022-06-28");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("secret_abc");
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("secret_abc"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:8080").unwrap().as_str(),
            "http://localhost:8080/"
        );
        assert_eq!(
            normalize_base_url("https://api.notion.com/v1").unwrap().as_str(),
            "https://api.notion.com/v1/"
        );
        assert_eq!(
            normalize_base_url("https://api.notion.com/v1/").unwrap().as_str(),
            "https://api.notion.com/v1/"
        );
    }
}
