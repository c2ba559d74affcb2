//! Blocks API endpoints.

use super::PaginationQuery;
use crate::client::NotionClient;
use crate::error::NotionResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Blocks API for reading and editing page content.
pub struct BlocksApi<'a> {
    client: &'a NotionClient,
}

impl<'a> BlocksApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Append child blocks to a block or page.
    pub async fn append_children(
        &self,
        block_id: &str,
        request: &AppendBlockChildrenRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .patch(&["blocks", block_id, "children"], request)
            .await
    }

    /// Retrieve a block object.
    pub async fn retrieve(&self, block_id: &str) -> NotionResult<Value> {
        self.client.http.get(&["blocks", block_id]).await
    }

    /// List one page of the children of a block.
    pub async fn list_children(
        &self,
        block_id: &str,
        query: &PaginationQuery,
    ) -> NotionResult<Value> {
        self.client
            .http
            .get_with_query(&["blocks", block_id, "children"], query)
            .await
    }

    /// Update a block. The body is sent as given, e.g.
    /// `{"paragraph": {"rich_text": [...]}}` or `{"archived": true}`.
    pub async fn update(&self, block_id: &str, body: &Map<String, Value>) -> NotionResult<Value> {
        self.client.http.patch(&["blocks", block_id], body).await
    }

    /// Delete (archive) a block.
    pub async fn delete(&self, block_id: &str) -> NotionResult<Value> {
        self.client.http.delete(&["blocks", block_id]).await
    }
}

/// Request body for `PATCH /blocks/{id}/children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppendBlockChildrenRequest {
    pub children: Vec<Value>,
}
