// Block tools: read, append, update and delete page content

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    decode_json_arg, json_schema_object, json_schema_page_size, json_schema_string, parse_args,
    respond, Tool,
};
use anyhow::Result;
use notion_sdk::api::AppendBlockChildrenRequest;
use notion_sdk::{NotionClient, NotionResult, PageSize, PaginationQuery};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Arguments shared by the tools addressing a single block
#[derive(Debug, Deserialize)]
struct BlockIdArgs {
    block_id: String,
}

fn block_id_schema(description: &str) -> Value {
    json_schema_object(
        serde_json::json!({ "block_id": json_schema_string(description) }),
        vec!["block_id"],
    )
}

/// Tool to append child blocks to a page or block
pub struct AppendBlocksTool {
    client: NotionClient,
}

impl AppendBlocksTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn append(&self, args: AppendBlocksArgs) -> NotionResult<Value> {
        let request = AppendBlockChildrenRequest {
            children: decode_json_arg("children", &args.children)?,
        };

        self.client
            .blocks()
            .append_children(&args.block_id, &request)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct AppendBlocksArgs {
    block_id: String,
    children: String,
}

#[async_trait::async_trait]
impl Tool for AppendBlocksTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "append-blocks".to_string(),
            description: "Append content blocks to a page or block".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "block_id": json_schema_string("The ID of the parent page or block"),
                    "children": json_schema_string("JSON string of the blocks to append")
                }),
                vec!["block_id", "children"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: AppendBlocksArgs = parse_args("append-blocks", arguments)?;

        let outcome = self.append(args).await;
        Ok(respond("append-blocks", "Failed to append blocks", outcome))
    }
}

/// Tool to retrieve a block
pub struct GetBlockTool {
    client: NotionClient,
}

impl GetBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for GetBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-block".to_string(),
            description: "Retrieve a single block".to_string(),
            input_schema: block_id_schema("The ID of the block to retrieve"),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: BlockIdArgs = parse_args("get-block", arguments)?;

        let outcome = self.client.blocks().retrieve(&args.block_id).await;
        Ok(respond("get-block", "Failed to retrieve block", outcome))
    }
}

/// Tool to list the children of a page or block, one page of results at a time
pub struct GetBlockChildrenTool {
    client: NotionClient,
}

impl GetBlockChildrenTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetBlockChildrenArgs {
    block_id: String,
    #[serde(default)]
    page_size: Option<PageSize>,
    #[serde(default)]
    start_cursor: Option<String>,
}

#[async_trait::async_trait]
impl Tool for GetBlockChildrenTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-block-children".to_string(),
            description: "List the child blocks of a page or block".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "block_id": json_schema_string("The ID of the page or block"),
                    "page_size": json_schema_page_size(),
                    "start_cursor": json_schema_string("Pagination cursor")
                }),
                vec!["block_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetBlockChildrenArgs = parse_args("get-block-children", arguments)?;
        let query = PaginationQuery {
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        let outcome = self
            .client
            .blocks()
            .list_children(&args.block_id, &query)
            .await;
        Ok(respond("get-block-children", "Failed to retrieve block children", outcome))
    }
}

/// Tool to update the content of a block
pub struct UpdateBlockTool {
    client: NotionClient,
}

impl UpdateBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn update(&self, args: UpdateBlockArgs) -> NotionResult<Value> {
        let body: Map<String, Value> = decode_json_arg("properties", &args.properties)?;

        self.client.blocks().update(&args.block_id, &body).await
    }
}

#[derive(Debug, Deserialize)]
struct UpdateBlockArgs {
    block_id: String,
    properties: String,
}

#[async_trait::async_trait]
impl Tool for UpdateBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update-block".to_string(),
            description: "Update the content of a block".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "block_id": json_schema_string("The ID of the block to update"),
                    "properties": json_schema_string(
                        "JSON string of the block fields to update, keyed by block type"
                    )
                }),
                vec!["block_id", "properties"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: UpdateBlockArgs = parse_args("update-block", arguments)?;

        let outcome = self.update(args).await;
        Ok(respond("update-block", "Failed to update block", outcome))
    }
}

/// Tool to delete (archive) a block
pub struct DeleteBlockTool {
    client: NotionClient,
}

impl DeleteBlockTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for DeleteBlockTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "delete-block".to_string(),
            description: "Delete a block by moving it to the trash".to_string(),
            input_schema: block_id_schema("The ID of the block to delete"),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: BlockIdArgs = parse_args("delete-block", arguments)?;

        let outcome = self.client.blocks().delete(&args.block_id).await;
        Ok(respond("delete-block", "Failed to delete block", outcome))
    }
}
