//! End-to-end checks of every endpoint against a mock Notion API.

use notion_sdk::api::{
    AppendBlockChildrenRequest, CreateCommentRequest, CreatePageRequest, LinkPreviewRequest,
    ListCommentsQuery, ObjectType, QueryDatabaseRequest, SearchFilter, SearchRequest, SortSpec,
    UpdateDatabaseRequest, UpdatePageRequest, LINK_PREVIEW_UNAVAILABLE,
};
use notion_sdk::{NotionClient, NotionError, PageSize, PaginationQuery, Parent};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> NotionClient {
    NotionClient::builder()
        .api_key("secret_test")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn search_posts_filter_and_page_size() {
    let server = MockServer::start().await;
    let results = json!({"object": "list", "results": [], "has_more": false});

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({
            "query": "roadmap",
            "filter": {"property": "object", "value": "page"},
            "page_size": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(results.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let request = SearchRequest {
        query: Some("roadmap".to_string()),
        filter: Some(SearchFilter::object(ObjectType::Page)),
        page_size: PageSize::new(5),
        ..Default::default()
    };

    let response = client(&server).search().query(&request).await.unwrap();
    assert_eq!(response, results);
}

#[tokio::test]
async fn query_database_applies_sort_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/databases/db1/query"))
        .and(body_json(json!({
            "filter": {"property": "Done", "checkbox": {"equals": true}},
            "sorts": [
                {"property": "Due", "direction": "ascending"},
                {"timestamp": "created_time", "direction": "descending"},
                {"property": "title", "direction": "ascending"}
            ],
            "start_cursor": "cursor-1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .expect(1)
        .mount(&server)
        .await;

    let sorts: Vec<SortSpec> = serde_json::from_value(json!([
        {"property": "Due", "direction": "ascending"},
        {"timestamp": "created_time", "direction": "descending"},
        {"direction": "ascending"}
    ]))
    .unwrap();

    let request = QueryDatabaseRequest {
        filter: Some(json!({"property": "Done", "checkbox": {"equals": true}})),
        start_cursor: Some("cursor-1".to_string()),
        ..Default::default()
    }
    .with_sorts(sorts);

    client(&server)
        .databases()
        .query("db1", &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn database_create_retrieve_update() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/databases/db1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "database", "id": "db1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/databases"))
        .and(body_json(json!({
            "parent": {"type": "page_id", "page_id": "p1"},
            "title": [{"type": "text", "text": {"content": "Tasks"}}],
            "properties": {"Name": {"title": {}}}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "database", "id": "db2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/databases/db1"))
        .and(body_json(json!({"archived": true})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "database", "id": "db1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let db = client.databases().retrieve("db1").await.unwrap();
    assert_eq!(db["id"], "db1");

    let created = client
        .databases()
        .create(&notion_sdk::api::CreateDatabaseRequest {
            parent: Parent::page("p1"),
            title: vec![json!({"type": "text", "text": {"content": "Tasks"}})],
            properties: object(json!({"Name": {"title": {}}})),
            description: None,
            icon: None,
            cover: None,
        })
        .await
        .unwrap();
    assert_eq!(created["id"], "db2");

    let update = UpdateDatabaseRequest {
        archived: Some(true),
        ..Default::default()
    };
    client.databases().update("db1", &update).await.unwrap();
}

#[tokio::test]
async fn page_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/pages"))
        .and(body_json(json!({
            "parent": {"type": "database_id", "database_id": "db1"},
            "properties": {"Name": {"title": []}}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "page", "id": "new"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "page", "id": "p1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pages/p1/properties/title"))
        .and(query_param("page_size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/pages/p1"))
        .and(body_json(json!({"properties": {}, "archived": false})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "page", "id": "p1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let request = CreatePageRequest::new(
        Parent::database("db1"),
        object(json!({"Name": {"title": []}})),
    );
    assert_eq!(client.pages().create(&request).await.unwrap()["id"], "new");
    assert_eq!(client.pages().retrieve("p1").await.unwrap()["id"], "p1");

    let query = PaginationQuery {
        page_size: PageSize::new(25),
        ..Default::default()
    };
    client
        .pages()
        .retrieve_property("p1", "title", &query)
        .await
        .unwrap();

    let update = UpdatePageRequest {
        archived: Some(false),
        ..Default::default()
    };
    client.pages().update("p1", &update).await.unwrap();
}

#[tokio::test]
async fn block_children_are_listed_with_one_request() {
    let server = MockServer::start().await;
    let page = json!({
        "object": "list",
        "results": [{"object": "block", "id": "c1", "type": "paragraph"}],
        "next_cursor": null,
        "has_more": false
    });

    Mock::given(method("GET"))
        .and(path("/blocks/abc123/children"))
        .and(query_param("page_size", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let query = PaginationQuery {
        page_size: PageSize::new(50),
        start_cursor: None,
    };
    let response = client(&server)
        .blocks()
        .list_children("abc123", &query)
        .await
        .unwrap();
    assert_eq!(response, page);
}

#[tokio::test]
async fn block_mutations() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/blocks/b1/children"))
        .and(body_json(json!({"children": [{"type": "divider", "divider": {}}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/blocks/b1"))
        .and(body_json(json!({"to_do": {"checked": true}})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "block", "id": "b1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blocks/b1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "block", "id": "b1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/blocks/b1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "block", "archived": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    let append = AppendBlockChildrenRequest {
        children: vec![json!({"type": "divider", "divider": {}})],
    };
    client.blocks().append_children("b1", &append).await.unwrap();
    client
        .blocks()
        .update("b1", &object(json!({"to_do": {"checked": true}})))
        .await
        .unwrap();
    client.blocks().retrieve("b1").await.unwrap();

    let deleted = client.blocks().delete("b1").await.unwrap();
    assert_eq!(deleted["archived"], true);
}

#[tokio::test]
async fn user_endpoints() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "list", "results": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/u1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "user", "id": "u1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users/me"))
        .and(header("Authorization", "Bearer secret_test"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "user", "type": "bot"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client.users().list().await.unwrap();
    assert_eq!(client.users().retrieve("u1").await.unwrap()["id"], "u1");
    assert_eq!(client.users().me().await.unwrap()["type"], "bot");
}

#[tokio::test]
async fn create_comment_posts_rich_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(body_json(json!({
            "parent": {"page_id": "p1"},
            "rich_text": [{"type": "text", "text": {"content": "hello"}}]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "comment", "id": "c1"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let comment = client(&server)
        .comments()
        .create(&CreateCommentRequest::text("p1", "hello"))
        .await
        .unwrap();
    assert_eq!(comment["id"], "c1");
}

#[tokio::test]
async fn list_comments_addresses_page_as_block() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("block_id", "p1"))
        .and(query_param("page_size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "list"})))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListCommentsQuery {
        page_id: Some("p1".to_string()),
        page_size: PageSize::new(10),
        ..Default::default()
    };
    client(&server).comments().list(&query).await.unwrap();
}

#[tokio::test]
async fn list_comments_without_target_fails_locally() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server)
        .comments()
        .list(&ListCommentsQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, NotionError::Validation { .. }));
    assert_eq!(err.to_string(), "Either page_id or block_id must be provided");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn link_preview_is_unimplemented() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let request = LinkPreviewRequest {
        url: "https://example.com".to_string(),
        page_id: None,
    };
    let err = client(&server)
        .link_previews()
        .create(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, NotionError::Unimplemented { .. }));
    assert_eq!(err.to_string(), LINK_PREVIEW_UNAVAILABLE);
    assert_eq!(err.code(), Some("not_implemented"));
}

#[tokio::test]
async fn api_errors_are_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pages/secret"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "object": "error",
            "status": 403,
            "code": "restricted_resource",
            "message": "API token does not have access to this resource."
        })))
        .mount(&server)
        .await;

    let err = client(&server).pages().retrieve("secret").await.unwrap_err();
    assert_eq!(err.code(), Some("restricted_resource"));
    assert_eq!(err.status(), Some(403));
    assert_eq!(
        err.to_string(),
        "API token does not have access to this resource."
    );
}
