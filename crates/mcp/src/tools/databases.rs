// Database tools: query, retrieve, create and update databases

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    decode_json_arg, decode_optional_json_arg, json_schema_boolean, json_schema_object,
    json_schema_page_size, json_schema_string, parse_args, respond, Tool,
};
use anyhow::Result;
use notion_sdk::api::{
    CreateDatabaseRequest, QueryDatabaseRequest, SortSpec, UpdateDatabaseRequest,
};
use notion_sdk::{NotionClient, NotionResult, PageSize, Parent};
use serde::Deserialize;
use serde_json::Value;

/// Tool to query the pages of a database
pub struct QueryDatabaseTool {
    client: NotionClient,
}

impl QueryDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn query(&self, args: QueryDatabaseArgs) -> NotionResult<Value> {
        let filter: Option<Value> = decode_optional_json_arg("filter", args.filter.as_deref())?;
        let sorts: Option<Vec<SortSpec>> =
            decode_optional_json_arg("sorts", args.sorts.as_deref())?;

        let mut request = QueryDatabaseRequest {
            filter,
            start_cursor: args.start_cursor,
            page_size: args.page_size,
            ..Default::default()
        };
        if let Some(sorts) = sorts {
            request = request.with_sorts(sorts);
        }

        self.client
            .databases()
            .query(&args.database_id, &request)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct QueryDatabaseArgs {
    database_id: String,
    #[serde(default)]
    filter: Option<String>,
    #[serde(default)]
    sorts: Option<String>,
    #[serde(default)]
    page_size: Option<PageSize>,
    #[serde(default)]
    start_cursor: Option<String>,
}

#[async_trait::async_trait]
impl Tool for QueryDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "query-database".to_string(),
            description: "Query the pages of a database with optional filter and sorts".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "database_id": json_schema_string("The ID of the database to query"),
                    "filter": json_schema_string("JSON string of filter criteria"),
                    "sorts": json_schema_string(
                        "JSON string of sort criteria: an array of {property?, timestamp?, direction}"
                    ),
                    "page_size": json_schema_page_size(),
                    "start_cursor": json_schema_string("Pagination cursor")
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: QueryDatabaseArgs = parse_args("query-database", arguments)?;

        let outcome = self.query(args).await;
        Ok(respond("query-database", "Failed to query database", outcome))
    }
}

/// Tool to retrieve a database object
pub struct GetDatabaseTool {
    client: NotionClient,
}

impl GetDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GetDatabaseArgs {
    database_id: String,
}

#[async_trait::async_trait]
impl Tool for GetDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get-database".to_string(),
            description: "Retrieve a database and its property schema".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "database_id": json_schema_string("The ID of the database to retrieve")
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: GetDatabaseArgs = parse_args("get-database", arguments)?;

        let outcome = self.client.databases().retrieve(&args.database_id).await;
        Ok(respond("get-database", "Failed to retrieve database", outcome))
    }
}

/// Tool to create a database inside a page
pub struct CreateDatabaseTool {
    client: NotionClient,
}

impl CreateDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn create(&self, args: CreateDatabaseArgs) -> NotionResult<Value> {
        let request = CreateDatabaseRequest {
            parent: Parent::page(args.parent_page_id),
            title: decode_json_arg("title", &args.title)?,
            properties: decode_json_arg("properties", &args.properties)?,
            description: decode_optional_json_arg("description", args.description.as_deref())?,
            icon: None,
            cover: None,
        };

        self.client.databases().create(&request).await
    }
}

#[derive(Debug, Deserialize)]
struct CreateDatabaseArgs {
    parent_page_id: String,
    title: String,
    properties: String,
    #[serde(default)]
    description: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreateDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create-database".to_string(),
            description: "Create a database as a child of a page".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "parent_page_id": json_schema_string(
                        "ID of the page that will contain the database"
                    ),
                    "title": json_schema_string("JSON string of the title rich text array"),
                    "properties": json_schema_string("JSON string of the database property schema"),
                    "description": json_schema_string(
                        "JSON string of the description rich text array"
                    )
                }),
                vec!["parent_page_id", "title", "properties"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: CreateDatabaseArgs = parse_args("create-database", arguments)?;

        let outcome = self.create(args).await;
        Ok(respond("create-database", "Failed to create database", outcome))
    }
}

/// Tool to update the title, description or schema of a database
pub struct UpdateDatabaseTool {
    client: NotionClient,
}

impl UpdateDatabaseTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }

    async fn update(&self, args: UpdateDatabaseArgs) -> NotionResult<Value> {
        let request = UpdateDatabaseRequest {
            title: decode_optional_json_arg("title", args.title.as_deref())?,
            description: decode_optional_json_arg("description", args.description.as_deref())?,
            properties: decode_optional_json_arg("properties", args.properties.as_deref())?,
            archived: args.archived,
        };

        self.client
            .databases()
            .update(&args.database_id, &request)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct UpdateDatabaseArgs {
    database_id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    properties: Option<String>,
    #[serde(default)]
    archived: Option<bool>,
}

#[async_trait::async_trait]
impl Tool for UpdateDatabaseTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "update-database".to_string(),
            description: "Update the title, description, property schema or archive state of a database"
                .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "database_id": json_schema_string("The ID of the database to update"),
                    "title": json_schema_string("JSON string of the new title rich text array"),
                    "description": json_schema_string(
                        "JSON string of the new description rich text array"
                    ),
                    "properties": json_schema_string("JSON string of property schema changes"),
                    "archived": json_schema_boolean("Whether to archive the database")
                }),
                vec!["database_id"],
            ),
        }
    }

    async fn execute(&self, arguments: Value) -> Result<CallToolResult> {
        let args: UpdateDatabaseArgs = parse_args("update-database", arguments)?;

        let outcome = self.update(args).await;
        Ok(respond("update-database", "Failed to update database", outcome))
    }
}
