// Search tool

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    json_schema_enum, json_schema_object, json_schema_page_size, json_schema_string, parse_args,
    respond, Tool,
};
use anyhow::Result;
use notion_sdk::api::{ObjectType, SearchFilter, SearchRequest};
use notion_sdk::{NotionClient, PageSize};
use serde::Deserialize;

/// Tool to search pages and databases by title
pub struct SearchTool {
    client: NotionClient,
}

impl SearchTool {
    pub fn new(client: NotionClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    filter_object_type: Option<ObjectType>,
    #[serde(default)]
    page_size: Option<PageSize>,
}

impl From<SearchArgs> for SearchRequest {
    fn from(args: SearchArgs) -> Self {
        Self {
            query: args.query.filter(|q| !q.is_empty()),
            filter: args.filter_object_type.map(SearchFilter::object),
            page_size: args.page_size,
            ..Default::default()
        }
    }
}

#[async_trait::async_trait]
impl Tool for SearchTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search".to_string(),
            description: "Search pages and databases shared with the integration".to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "query": json_schema_string("The search query string"),
                    "filter_object_type": json_schema_enum(
                        &["page", "database"],
                        "Filter by object type"
                    ),
                    "page_size": json_schema_page_size()
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchArgs = parse_args("search", arguments)?;
        let request = SearchRequest::from(args);

        let outcome = self.client.search().query(&request).await;
        Ok(respond("search", "Failed to search Notion", outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::test_support;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_search_builds_object_filter() {
        let server = MockServer::start().await;
        let results = json!({"object": "list", "results": [{"object": "database", "id": "db1"}]});

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(json!({
                "query": "tasks",
                "filter": {"property": "object", "value": "database"},
                "page_size": 20
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(results.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SearchTool::new(test_support::client(&server));
        let result = tool
            .execute(json!({"query": "tasks", "filter_object_type": "database", "page_size": 20}))
            .await
            .unwrap();

        assert!(!result.is_error());
        let echoed: serde_json::Value = serde_json::from_str(result.text().unwrap()).unwrap();
        assert_eq!(echoed, results);
    }

    #[tokio::test]
    async fn test_empty_search_sends_empty_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
            .expect(1)
            .mount(&server)
            .await;

        let tool = SearchTool::new(test_support::client(&server));
        let result = tool.execute(json!({"query": ""})).await.unwrap();
        assert!(!result.is_error());
    }

    #[tokio::test]
    async fn test_schema_violations_are_errors() {
        let tool = SearchTool::new(test_support::offline_client());

        assert!(tool.execute(json!({"page_size": 0})).await.is_err());
        assert!(tool.execute(json!({"page_size": 101})).await.is_err());
        assert!(tool
            .execute(json!({"filter_object_type": "block"}))
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_remote_error_is_flagged() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "object": "error",
                "status": 429,
                "code": "rate_limited",
                "message": "You have been rate limited."
            })))
            .mount(&server)
            .await;

        let tool = SearchTool::new(test_support::client(&server));
        let result = tool.execute(json!({})).await.unwrap();

        assert!(result.is_error());
        assert_eq!(
            result.text(),
            Some("Error: Failed to search Notion - You have been rate limited.")
        );
    }
}
