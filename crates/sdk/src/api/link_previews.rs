//! Link previews (unfurling).
//!
//! The public API offers no endpoint for creating link previews, so every
//! call fails with [`NotionError::Unimplemented`] without touching the
//! network.

use crate::client::NotionClient;
use crate::error::{NotionError, NotionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

pub const LINK_PREVIEW_UNAVAILABLE: &str =
    "Link Preview API is not yet available in the official Notion SDK";

/// Link previews API. Nothing is ever sent, so no client is held.
pub struct LinkPreviewsApi<'a> {
    _client: PhantomData<&'a NotionClient>,
}

impl<'a> LinkPreviewsApi<'a> {
    pub(crate) fn new(_client: &'a NotionClient) -> Self {
        Self {
            _client: PhantomData,
        }
    }

    /// Always fails: the capability is not available.
    pub async fn create(&self, request: &LinkPreviewRequest) -> NotionResult<Value> {
        tracing::debug!(url = %request.url, "link preview requested");
        Err(NotionError::unimplemented(LINK_PREVIEW_UNAVAILABLE))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
}
