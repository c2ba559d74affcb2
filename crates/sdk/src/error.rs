//! Error types for the Notion SDK.
//!
//! Every failure leaving the client is a [`NotionError`]. Callers decide how to
//! report it from [`NotionError::code`] and [`NotionError::status`] alone and
//! never look at HTTP or vendor payloads themselves.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type NotionResult<T> = Result<T, NotionError>;

/// Code attached to local validation failures.
pub const INVALID_REQUEST_PARAMETERS: &str = "invalid_request_parameters";

/// Code attached to capabilities the client does not offer.
pub const NOT_IMPLEMENTED: &str = "not_implemented";

/// Code for a non-2xx response whose body is not a Notion error object.
pub const RESPONSE_ERROR: &str = "notionhq_client_response_error";

/// Code for a request that ran past the configured timeout.
pub const REQUEST_TIMEOUT: &str = "notionhq_client_request_timeout";

/// Errors produced by the Notion client.
///
/// `Display` is the human-readable message only, so callers can embed it in
/// their own sentences.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// A request was rejected locally before reaching the API.
    #[error("{message}")]
    Validation { message: String },

    /// The Notion API answered with an error status.
    #[error("{message}")]
    Api {
        code: String,
        status: u16,
        message: String,
    },

    /// The capability is not offered by this client.
    #[error("{message}")]
    Unimplemented { message: String },

    /// The HTTP request could not be completed or its body not decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("{0}")]
    Config(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl NotionError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::Unimplemented {
            message: message.into(),
        }
    }

    /// Machine-readable error code, when one is known.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Validation { .. } => Some(INVALID_REQUEST_PARAMETERS),
            Self::Api { code, .. } => Some(code),
            Self::Unimplemented { .. } => Some(NOT_IMPLEMENTED),
            Self::Transport(e) if e.is_timeout() => Some(REQUEST_TIMEOUT),
            _ => None,
        }
    }

    /// HTTP status, present only when the API itself rejected the request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the error came back from the remote API rather than from
    /// this process.
    pub fn is_remote(&self) -> bool {
        self.status().is_some()
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error_response) if error_response.object == "error" => Self::Api {
                code: error_response.code,
                status: error_response.status.unwrap_or(status),
                message: error_response.message,
            },
            _ => Self::Api {
                code: RESPONSE_ERROR.to_string(),
                status,
                message: format!("Request to Notion API failed with status: {}", status),
            },
        }
    }
}

/// Error object returned by the Notion API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub code: String,
    pub message: String,
}
