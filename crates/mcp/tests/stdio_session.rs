//! A full MCP session over in-memory pipes against a mock Notion API.

use notion_mcp::tools::notion_registry;
use notion_mcp::McpServer;
use notion_sdk::NotionClient;
use serde_json::{json, Value};
use tokio::io::AsyncReadExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(notion: &MockServer) -> McpServer {
    let client = NotionClient::builder()
        .api_key("secret_test")
        .base_url(notion.uri())
        .build()
        .unwrap();
    McpServer::new(notion_registry(client))
}

async fn session(server: &McpServer, messages: &[Value]) -> Vec<Value> {
    let mut input = String::new();
    for message in messages {
        input.push_str(&message.to_string());
        input.push('\n');
    }

    let (writer, mut output) = tokio::io::duplex(1 << 20);
    server.serve(input.as_bytes(), writer).await.unwrap();

    let mut raw = String::new();
    output.read_to_string(&mut raw).await.unwrap();
    let mut responses: Vec<Value> = raw
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    responses.sort_by_key(|r| r["id"].as_i64().unwrap_or(-1));
    responses
}

fn call(id: i64, name: &str, arguments: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
}

#[tokio::test]
async fn handshake_lists_every_tool() {
    let notion = MockServer::start().await;
    let server = server_for(&notion);

    let responses = session(
        &server,
        &[
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": {"name": "it", "version": "0"}
            }}),
            json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}),
        ],
    )
    .await;

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "notion");
    assert_eq!(responses[1]["result"]["tools"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn tool_calls_reach_notion_and_report_failures() {
    let notion = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/databases/db1/query"))
        .and(body_json(json!({"sorts": [{"property": "title", "direction": "ascending"}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [{"object": "page", "id": "p1"}],
            "has_more": false
        })))
        .expect(1)
        .mount(&notion)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/missing"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&notion)
        .await;

    let server = server_for(&notion);
    let responses = session(
        &server,
        &[
            call(1, "query-database", json!({
                "database_id": "db1",
                "sorts": r#"[{"direction": "ascending"}]"#
            })),
            call(2, "get-page", json!({"page_id": "missing"})),
            call(3, "list-comments", json!({})),
            call(4, "create-link-preview", json!({"url": "https://example.com"})),
            call(5, "get-page", json!({})),
        ],
    )
    .await;

    assert_eq!(responses.len(), 5);

    let query = &responses[0]["result"];
    assert!(query.get("isError").is_none());
    let echoed: Value =
        serde_json::from_str(query["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(echoed["results"][0]["id"], "p1");

    let page = &responses[1]["result"];
    assert_eq!(page["isError"], true);
    assert_eq!(
        page["content"][0]["text"],
        "Error: Failed to retrieve page - Request to Notion API failed with status: 502"
    );

    assert_eq!(
        responses[2]["result"]["content"][0]["text"],
        "Error: Either page_id or block_id must be provided"
    );

    let preview = responses[3]["result"]["content"][0]["text"].as_str().unwrap();
    assert!(preview.contains("Link Preview API is not yet available"));

    assert_eq!(responses[4]["error"]["code"], -32602);
}
