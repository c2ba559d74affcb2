//! Basic SDK usage example.
//!
//! Identifies the integration, then lists the databases shared with it and
//! the first few rows of each.
//!
//! Run with: NOTION_API_KEY=secret_... cargo run --example basic_usage

use notion_sdk::api::{ObjectType, QueryDatabaseRequest, SearchFilter, SearchRequest};
use notion_sdk::{NotionClient, NotionResult, PageSize};

#[tokio::main]
async fn main() -> NotionResult<()> {
    tracing_subscriber::fmt::init();

    let client = NotionClient::from_env()?;

    let me = client.users().me().await?;
    println!("Connected as: {}", me["name"].as_str().unwrap_or("<unnamed bot>"));

    let search = SearchRequest {
        filter: Some(SearchFilter::object(ObjectType::Database)),
        page_size: PageSize::new(10),
        ..Default::default()
    };
    let databases = client.search().query(&search).await?;
    let results = databases["results"].as_array().cloned().unwrap_or_default();
    println!("\nFound {} databases", results.len());

    for database in &results {
        let Some(id) = database["id"].as_str() else {
            continue;
        };
        let title = database["title"][0]["plain_text"].as_str().unwrap_or("Untitled");
        println!("  Database {}: {}", id, title);

        let query = QueryDatabaseRequest {
            page_size: PageSize::new(3),
            ..Default::default()
        };
        let rows = client.databases().query(id, &query).await?;
        for row in rows["results"].as_array().into_iter().flatten() {
            println!("    Page {}", row["id"].as_str().unwrap_or("?"));
        }
    }

    Ok(())
}
