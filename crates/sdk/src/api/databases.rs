//! Databases API endpoints.

use super::{PageSize, Parent, SortDirection};
use crate::client::NotionClient;
use crate::error::NotionResult;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Property used when a sort entry names neither a property nor a timestamp.
pub const FALLBACK_SORT_PROPERTY: &str = "title";

/// Databases API for querying and managing databases.
pub struct DatabasesApi<'a> {
    client: &'a NotionClient,
}

impl<'a> DatabasesApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Query the pages of a database.
    pub async fn query(
        &self,
        database_id: &str,
        request: &QueryDatabaseRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .post(&["databases", database_id, "query"], request)
            .await
    }

    /// Retrieve a database object.
    pub async fn retrieve(&self, database_id: &str) -> NotionResult<Value> {
        self.client.http.get(&["databases", database_id]).await
    }

    /// Create a database as a child of a page.
    pub async fn create(&self, request: &CreateDatabaseRequest) -> NotionResult<Value> {
        self.client.http.post(&["databases"], request).await
    }

    /// Update the title, description or schema of a database.
    pub async fn update(
        &self,
        database_id: &str,
        request: &UpdateDatabaseRequest,
    ) -> NotionResult<Value> {
        self.client
            .http
            .patch(&["databases", database_id], request)
            .await
    }
}

/// Timestamp a database query can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampProperty {
    CreatedTime,
    LastEditedTime,
}

/// A sort entry as supplied by a caller: a property name, a timestamp, or
/// neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<TimestampProperty>,
    pub direction: SortDirection,
}

/// A sort entry in the shape the API accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatabaseSort {
    Property {
        property: String,
        direction: SortDirection,
    },
    Timestamp {
        timestamp: TimestampProperty,
        direction: SortDirection,
    },
}

impl From<SortSpec> for DatabaseSort {
    /// A non-empty property wins over a timestamp; an entry with neither
    /// sorts by the `title` property so the request stays valid.
    fn from(spec: SortSpec) -> Self {
        match (spec.property, spec.timestamp) {
            (Some(property), _) if !property.is_empty() => Self::Property {
                property,
                direction: spec.direction,
            },
            (_, Some(timestamp)) => Self::Timestamp {
                timestamp,
                direction: spec.direction,
            },
            _ => Self::Property {
                property: FALLBACK_SORT_PROPERTY.to_string(),
                direction: spec.direction,
            },
        }
    }
}

/// Request body for `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorts: Option<Vec<DatabaseSort>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

impl QueryDatabaseRequest {
    /// Set the sorts from caller-supplied entries.
    pub fn with_sorts(mut self, sorts: impl IntoIterator<Item = SortSpec>) -> Self {
        self.sorts = Some(sorts.into_iter().map(DatabaseSort::from).collect());
        self
    }
}

/// Request body for `POST /databases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDatabaseRequest {
    pub parent: Parent,
    pub title: Vec<Value>,
    pub properties: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<Value>,
}

/// Request body for `PATCH /databases/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateDatabaseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}
