// Link preview tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, parse_args, respond, Tool};
use anyhow::{Context, Result};
use notion_sdk::api::LinkPreviewRequest;
use notion_sdk::NotionClient;
use serde_json::Value;

/// Tool to unfurl a URL into a page. Notion offers no public endpoint for
/// this, so a well-formed call always reports the capability as unavailable.
pub struct CreateLinkPreviewTool {
    client: NotionClient,
}

impl CreateLinkPreviewTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for CreateLinkPreviewTool {
    fn schema(&self) -> ToolSchema {
        let mut url = json_schema_string("The URL to create a preview for");
        url["format"] = Value::from("uri");

        ToolSchema {
            name: "create-link-preview".to_string(),
            description: "Create a link preview (unfurl) for a URL".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "url": url,
                    "page_id": json_schema_string("ID of the page to attach the preview to")
                }),
                vec!["url"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let request: LinkPreviewRequest = parse_args("create-link-preview", arguments)?;
        url::Url::parse(&request.url)
            .with_context(|| {
                format!("Invalid arguments for create-link-preview: url '{}'", request.url)
            })?;

        let outcome = self.client.link_previews().create(&request).await;
        Ok(respond("create-link-preview", "Failed to create link preview", outcome))
    }
}
