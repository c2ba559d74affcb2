//! Pages API endpoints.

use super::{PaginationQuery, Parent};
use crate::client::NotionClient;
use crate::error::NotionResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pages API for creating, reading and updating pages.
pub struct PagesApi<'a> {
    client: &'a NotionClient,
}

impl<'a> PagesApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Create a page under a database or another page.
    pub async fn create(&self, request: &CreatePageRequest) -> NotionResult<Value> {
        self.client.http.post(&["pages"], request).await
    }

    /// Retrieve a page object.
    pub async fn retrieve(&self, page_id: &str) -> NotionResult<Value> {
        self.client.http.get(&["pages", page_id]).await
    }

    /// Retrieve a single property item of a page.
    pub async fn retrieve_property(
        &self,
        page_id: &str,
        property_id: &str,
        query: &PaginationQuery,
    ) -> NotionResult<Value> {
        self.client
            .http
            .get_with_query(&["pages", page_id, "properties", property_id], query)
            .await
    }

    /// Update page properties, archive state, icon or cover.
    pub async fn update(&self, page_id: &str, request: &UpdatePageRequest) -> NotionResult<Value> {
        self.client.http.patch(&["pages", page_id], request).await
    }
}

/// Request body for `POST /pages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

impl CreatePageRequest {
    pub fn new(parent: Parent, properties: Map<String, Value>) -> Self {
        Self {
            parent,
            properties,
            children: None,
            icon: None,
            cover: None,
        }
    }
}

/// Request body for `PATCH /pages/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}
