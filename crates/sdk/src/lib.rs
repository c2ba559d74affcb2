//! # Notion SDK
//!
//! Thin async client for the Notion REST API. One method per endpoint, one
//! HTTP request per call, responses returned as raw JSON.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notion_sdk::{NotionClient, NotionResult};
//!
//! #[tokio::main]
//! async fn main() -> NotionResult<()> {
//!     let client = NotionClient::builder()
//!         .api_key("secret_your-integration-token")
//!         .build()?;
//!
//!     let me = client.users().me().await?;
//!     println!("{}", serde_json::to_string_pretty(&me).unwrap());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every call returns [`NotionError`]. Remote rejections carry the API's
//! error code and HTTP status; local failures carry a code only.
//!
//! ```rust,no_run
//! # async fn example(client: notion_sdk::NotionClient) {
//! match client.pages().retrieve("missing").await {
//!     Ok(page) => println!("{page}"),
//!     Err(e) if e.status() == Some(404) => println!("not shared with the integration"),
//!     Err(e) => println!("{} ({:?})", e, e.code()),
//! }
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{PageSize, PaginationQuery, Parent, ParentType, SortDirection};
pub use client::{NotionClient, NotionClientBuilder};
pub use config::ClientConfig;
pub use error::{NotionError, NotionResult};
