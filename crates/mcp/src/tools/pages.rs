// Page tools: create, retrieve and update pages

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    decode_json_arg, decode_optional_json_arg, json_schema_boolean, json_schema_enum,
    json_schema_object, json_schema_page_size, json_schema_string, parse_args, respond, Tool,
};
use anyhow::Result;
use notion_sdk::api::{CreatePageRequest, UpdatePageRequest};
use notion_sdk::{NotionClient, NotionResult, PageSize, PaginationQuery, Parent, ParentType};
use serde::Deserialize;
use serde_json::Value;

/// Tool to create a page under a database or another page
pub struct CreatePageTool {
    client: NotionClient,
}

impl CreatePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn create(&self, args: CreatePageArgs) -> NotionResult<Value> {
        let mut request = CreatePageRequest::new(
            Parent::new(args.parent_type, args.parent_id),
            decode_json_arg("properties", &args.properties)?,
        );
        request.children = decode_optional_json_arg("children", args.children.as_deref())?;
        request.icon = decode_optional_json_arg("icon", args.icon.as_deref())?;
        request.cover = decode_optional_json_arg("cover", args.cover.as_deref())?;

        self.client.pages().create(&request).await
    }
}

#[derive(Debug, Deserialize)]
struct CreatePageArgs {
    parent_type: ParentType,
    parent_id: String,
    properties: String,
    #[serde(default)]
    children: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    cover: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create-page".to_string(),
            description: "Create a page in a database or as a child of another page".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "parent_type": json_schema_enum(
                        &["database_id", "page_id"],
                        "Type of parent (database or page)"
                    ),
                    "parent_id": json_schema_string("ID of the parent database or page"),
                    "properties": json_schema_string("JSON string of page properties"),
                    "children": json_schema_string("JSON string of page content blocks"),
                    "icon": json_schema_string(
                        "JSON string of the page icon (emoji or external file)"
                    ),
                    "cover": json_schema_string("JSON string of the page cover (external file)")
                }),
                vec!["parent_type", "parent_id", "properties"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: CreatePageArgs = parse_args("create-page", arguments)?;

        let outcome = self.create(args).await;
        Ok(respond("create-page", "Failed to create page", outcome))
    }
}

/// Tool to retrieve a page
pub struct GetPageTool {
    client: NotionClient,
}

impl GetPageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetPageArgs {
    page_id: String,
}

#[async_trait::async_trait]
impl Tool for GetPageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-page".to_string(),
            description: "Retrieve a page and its properties".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The ID of the page to retrieve")
                }),
                vec!["page_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetPageArgs = parse_args("get-page", arguments)?;

        let outcome = self.client.pages().retrieve(&args.page_id).await;
        Ok(respond("get-page", "Failed to retrieve page", outcome))
    }
}

/// Tool to retrieve one property item of a page, paginated for long values
pub struct GetPagePropertyTool {
    client: NotionClient,
}

impl GetPagePropertyTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetPagePropertyArgs {
    page_id: String,
    property_id: String,
    #[serde(default)]
    page_size: Option<PageSize>,
    #[serde(default)]
    start_cursor: Option<String>,
}

#[async_trait::async_trait]
impl Tool for GetPagePropertyTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-page-property".to_string(),
            description: "Retrieve a single property value of a page".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The ID of the page"),
                    "property_id": json_schema_string("The ID of the property to retrieve"),
                    "page_size": json_schema_page_size(),
                    "start_cursor": json_schema_string("Pagination cursor")
                }),
                vec!["page_id", "property_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetPagePropertyArgs = parse_args("get-page-property", arguments)?;
        let query = PaginationQuery {
            start_cursor: args.start_cursor,
            page_size: args.page_size,
        };

        let outcome = self
            .client
            .pages()
            .retrieve_property(&args.page_id, &args.property_id, &query)
            .await;
        Ok(respond("get-page-property", "Failed to retrieve page property", outcome))
    }
}

/// Tool to update page properties or archive a page
pub struct UpdatePageTool {
    client: NotionClient,
}

impl UpdatePageTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn update(&self, args: UpdatePageArgs) -> NotionResult<Value> {
        let request = UpdatePageRequest {
            properties: decode_json_arg("properties", &args.properties)?,
            archived: args.archived,
            icon: decode_optional_json_arg("icon", args.icon.as_deref())?,
            cover: decode_optional_json_arg("cover", args.cover.as_deref())?,
        };

        self.client.pages().update(&args.page_id, &request).await
    }
}

#[derive(Debug, Deserialize)]
struct UpdatePageArgs {
    page_id: String,
    properties: String,
    #[serde(default)]
    archived: Option<bool>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    cover: Option<String>,
}

#[async_trait::async_trait]
impl Tool for UpdatePageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update-page".to_string(),
            description: "Update the properties of a page, or archive it".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_id": json_schema_string("The ID of the page to update"),
                    "properties": json_schema_string("JSON string of page properties to update"),
                    "archived": json_schema_boolean("Whether to archive the page"),
                    "icon": json_schema_string("JSON string of the new page icon"),
                    "cover": json_schema_string("JSON string of the new page cover")
                }),
                vec!["page_id", "properties"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: UpdatePageArgs = parse_args("update-page", arguments)?;

        let outcome = self.update(args).await;
        Ok(respond("update-page", "Failed to update page", outcome))
    }
}
