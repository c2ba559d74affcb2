// Comment tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_object, json_schema_page_size, json_schema_string, parse_args, respond, Tool,
};
use anyhow::Result;
use notion_sdk::api::{CreateCommentRequest, ListCommentsQuery};
use notion_sdk::NotionClient;
use serde::Deserialize;
use serde_json::Value;

/// Tool to add a plain-text comment to a page
pub struct CreateCommentTool {
    client: NotionClient,
}

impl CreateCommentTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct CreateCommentArgs {
    page_id: String,
    text: String,
    #[serde(default)]
    discussion_id: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreateCommentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create-comment".to_string(),
            description: "Add a comment to a page, optionally replying in a discussion".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The ID of the page to comment on"),
                    "text": json_schema_string("The comment text"),
                    "discussion_id": json_schema_string(
                        "ID of an existing discussion thread to reply to"
                    )
                }),
                vec!["page_id", "text"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: CreateCommentArgs = parse_args("create-comment", arguments)?;
        let discussion_id = args.discussion_id.filter(|id| !id.is_empty());
        let request =
            CreateCommentRequest::text(args.page_id, args.text).in_discussion(discussion_id);

        let outcome = self.client.comments().create(&request).await;
        Ok(respond("create-comment", "Failed to create comment", outcome))
    }
}

/// Tool to list the unresolved comments of a page or block
pub struct ListCommentsTool {
    client: NotionClient,
}

impl ListCommentsTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListCommentsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list-comments".to_string(),
            description: "List the unresolved comments of a page or block".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The ID of the page"),
                    "block_id": json_schema_string("The ID of the block"),
                    "start_cursor": json_schema_string("Pagination cursor"),
                    "page_size": json_schema_page_size()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let query: ListCommentsQuery = parse_args("list-comments", arguments)?;

        // Checked here so the bare message is reported, not the failure prefix.
        if query.target_id().is_none() {
            return Ok(CallToolResult::error(ListCommentsQuery::MISSING_TARGET));
        }

        let outcome = self.client.comments().list(&query).await;
        Ok(respond("list-comments", "Failed to list comments", outcome))
    }
}
