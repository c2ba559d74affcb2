//! Comments API endpoints.

use super::PageSize;
use crate::client::NotionClient;
use crate::error::{NotionError, NotionResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Comments API for reading and writing discussion comments.
pub struct CommentsApi<'a> {
    client: &'a NotionClient,
}

impl<'a> CommentsApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Create a comment on a page, or a reply in an existing discussion.
    pub async fn create(&self, request: &CreateCommentRequest) -> NotionResult<Value> {
        self.client.http.post(&["comments"], request).await
    }

    /// List the unresolved comments of a page or block.
    ///
    /// Pages are blocks in Notion's data model, so either id is sent as the
    /// `block_id` query parameter. A block id wins when both are set.
    pub async fn list(&self, query: &ListCommentsQuery) -> NotionResult<Value> {
        let block_id = query
            .target_id()
            .ok_or_else(|| NotionError::validation(ListCommentsQuery::MISSING_TARGET))?;

        let wire = CommentsWireQuery {
            block_id,
            start_cursor: query.start_cursor.as_deref(),
            page_size: query.page_size,
        };

        self.client.http.get_with_query(&["comments"], &wire).await
    }
}

/// Query for listing comments; one of `page_id` or `block_id` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

impl ListCommentsQuery {
    pub const MISSING_TARGET: &'static str = "Either page_id or block_id must be provided";

    /// The id the request is addressed to, ignoring empty strings.
    pub fn target_id(&self) -> Option<&str> {
        self.block_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.page_id.as_deref().filter(|id| !id.is_empty()))
    }
}

#[derive(Debug, Serialize)]
struct CommentsWireQuery<'q> {
    block_id: &'q str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_cursor: Option<&'q str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<PageSize>,
}

/// Request body for `POST /comments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub parent: CommentParent,
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discussion_id: Option<String>,
}

impl CreateCommentRequest {
    /// A plain-text comment on a page.
    pub fn text(page_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            parent: CommentParent {
                page_id: page_id.into(),
            },
            rich_text: vec![RichText::plain(content)],
            discussion_id: None,
        }
    }

    pub fn in_discussion(mut self, discussion_id: Option<String>) -> Self {
        self.discussion_id = discussion_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentParent {
    pub page_id: String,
}

/// A rich text item. Only the `text` kind can be written through comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text {
        text: TextContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::Text {
            text: TextContent {
                content: content.into(),
                link: None,
            },
            annotations: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
}
