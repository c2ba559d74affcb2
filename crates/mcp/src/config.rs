use anyhow::{Context, Result};
use notion_sdk::NotionClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "notion-mcp.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub notion: NotionConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// `[notion]`: connection settings. Unset values fall back to the client's
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotionConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub notion_version: Option<String>,

    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: Option<String>,

    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl ServerConfig {
    /// Load the configuration.
    ///
    /// An explicit path must exist and parse. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is read if present, otherwise defaults apply.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => Self::from_file(path),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    tracing::debug!("Configuration file not found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).with_context(|| {
            format!("Failed to read configuration file {}", path.display())
        })?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// The API key to use: the command line (or its environment variable)
    /// wins over the file. Blank values count as unset.
    pub fn resolve_api_key(&self, cli_api_key: Option<&str>) -> Option<String> {
        non_blank(cli_api_key)
            .or_else(|| non_blank(self.notion.api_key.as_deref()))
            .map(str::to_string)
    }

    /// Build the Notion client. Fails when no API key is available.
    pub fn notion_client(&self, cli_api_key: Option<&str>) -> Result<NotionClient> {
        let mut builder = NotionClient::builder();

        if let Some(api_key) = self.resolve_api_key(cli_api_key) {
            builder = builder.api_key(api_key);
        }
        if let Some(base_url) = &self.notion.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(version) = &self.notion.notion_version {
            builder = builder.notion_version(version.as_str());
        }
        if let Some(secs) = self.notion.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder.build()?)
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_filter(&self, verbose: bool) -> String {
        if verbose {
            return "debug".to_string();
        }
        self.log.level.clone().unwrap_or_else(|| "info".to_string())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_full_file() {
        let file = write_config(
            r#"
[notion]
api_key = "secret_file"
base_url = "http://localhost:8080/v1"
notion_version = "2025-01-01"
timeout_secs = 5

[log]
level = "warn"
json = true
"#,
        );

        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.notion.api_key.as_deref(), Some("secret_file"));
        assert_eq!(config.notion.timeout_secs, Some(5));
        assert!(config.log.json);
        assert_eq!(config.log_filter(false), "warn");
        assert_eq!(config.log_filter(true), "debug");

        let client = config.notion_client(None).unwrap();
        assert_eq!(client.config().base_url.as_str(), "http://localhost:8080/v1/");
        assert_eq!(client.config().notion_version, "2025-01-01");
        assert_eq!(client.config().timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let file = write_config("");
        let config = ServerConfig::load(Some(file.path())).unwrap();
        assert!(config.notion.api_key.is_none());
        assert!(!config.log.json);
        assert_eq!(config.log_filter(false), "info");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = ServerConfig::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read configuration file"));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let file = write_config("[notion\napi_key = 1");
        let err = ServerConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse configuration file"));
    }

    #[test]
    fn test_cli_key_wins_over_file() {
        let config = ServerConfig {
            notion: NotionConfig {
                api_key: Some("secret_file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            config.resolve_api_key(Some("secret_cli")).as_deref(),
            Some("secret_cli")
        );
        assert_eq!(config.resolve_api_key(None).as_deref(), Some("secret_file"));
        assert_eq!(
            config.resolve_api_key(Some("  ")).as_deref(),
            Some("secret_file")
        );
        assert_eq!(ServerConfig::default().resolve_api_key(Some("  ")), None);
    }

    #[test]
    fn test_missing_key_is_fatal() {
        let err = ServerConfig::default().notion_client(None).unwrap_err();
        assert!(err.to_string().contains("Notion API key is required"));
    }
}
