//! Notion API endpoints, one module per resource.
//!
//! Every endpoint returns the decoded response body as a raw
//! [`serde_json::Value`]; nothing is reshaped on the way back.

mod blocks;
mod comments;
mod databases;
mod link_previews;
mod pages;
mod search;
mod users;

pub use blocks::{AppendBlockChildrenRequest, BlocksApi};
pub use comments::{
    Annotations, Color, CommentParent, CommentsApi, CreateCommentRequest, Link,
    ListCommentsQuery, RichText, TextContent,
};
pub use databases::{
    CreateDatabaseRequest, DatabaseSort, DatabasesApi, QueryDatabaseRequest, SortSpec,
    TimestampProperty, UpdateDatabaseRequest, FALLBACK_SORT_PROPERTY,
};
pub use link_previews::{LinkPreviewRequest, LinkPreviewsApi, LINK_PREVIEW_UNAVAILABLE};
pub use pages::{CreatePageRequest, PagesApi, UpdatePageRequest};
pub use search::{
    FilterProperty, ObjectType, SearchApi, SearchFilter, SearchRequest, SearchSort,
    SearchTimestamp,
};
pub use users::UsersApi;

use serde::{Deserialize, Serialize};

/// Number of results per page, always within 1..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Number")]
pub struct PageSize(u8);

impl PageSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(size: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&size).then_some(Self(size))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u64> for PageSize {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| {
                format!(
                    "page_size must be between {} and {}, got {}",
                    Self::MIN,
                    Self::MAX,
                    value
                )
            })
    }
}

impl TryFrom<serde_json::Number> for PageSize {
    type Error = String;

    /// Whole-number floats such as `50.0` are accepted as integers.
    fn try_from(value: serde_json::Number) -> Result<Self, Self::Error> {
        if let Some(size) = value.as_u64() {
            return Self::try_from(size);
        }
        match value.as_f64() {
            Some(size) if size.fract() == 0.0 && (0.0..=u64::MAX as f64).contains(&size) => {
                Self::try_from(size as u64)
            }
            _ => Err(format!(
                "page_size must be a whole number between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )),
        }
    }
}

/// Cursor-based pagination parameters, passed through to the API as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

/// Sort direction shared by search and database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Discriminator for a page or database parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentType {
    DatabaseId,
    PageId,
}

/// Parent reference of a page or database.
///
/// Serializes as `{"type": "database_id", "database_id": "<id>"}` or
/// `{"type": "page_id", "page_id": "<id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: String },
    PageId { page_id: String },
}

impl Parent {
    pub fn new(parent_type: ParentType, id: impl Into<String>) -> Self {
        match parent_type {
            ParentType::DatabaseId => Self::DatabaseId {
                database_id: id.into(),
            },
            ParentType::PageId => Self::PageId { page_id: id.into() },
        }
    }

    pub fn database(id: impl Into<String>) -> Self {
        Self::new(ParentType::DatabaseId, id)
    }

    pub fn page(id: impl Into<String>) -> Self {
        Self::new(ParentType::PageId, id)
    }
}
