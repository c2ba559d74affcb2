// User tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{json_schema_object, json_schema_string, parse_args, respond, Tool};
use anyhow::Result;
use notion_sdk::NotionClient;
use serde::Deserialize;
use serde_json::Value;

/// Tool to list the users of the workspace
pub struct ListUsersTool {
    client: NotionClient,
}

impl ListUsersTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListUsersTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list-users".to_string(),
            description: "List all users in the workspace".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
        let outcome = self.client.users().list().await;
        Ok(respond("list-users", "Failed to list Notion users", outcome))
    }
}

/// Tool to retrieve a user by id
pub struct GetUserTool {
    client: NotionClient,
}

impl GetUserTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetUserArgs {
    user_id: String,
}

#[async_trait::async_trait]
impl Tool for GetUserTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-user".to_string(),
            description: "Retrieve a user by ID".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "user_id": json_schema_string("The ID of the user to retrieve")
                }),
                vec!["user_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetUserArgs = parse_args("get-user", arguments)?;

        let outcome = self.client.users().retrieve(&args.user_id).await;
        Ok(respond("get-user", "Failed to retrieve Notion user", outcome))
    }
}

/// Tool to retrieve the bot user behind the integration token
pub struct GetMeTool {
    client: NotionClient,
}

impl GetMeTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetMeTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-me".to_string(),
            description: "Retrieve the bot user associated with the API token".to_string(),
            input_schema: json_schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: Value) -> Result<CallToolResult> {
        let outcome = self.client.users().me().await;
        Ok(respond("get-me", "Failed to retrieve bot user", outcome))
    }
}
