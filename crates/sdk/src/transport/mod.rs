//! Transport layer for the Notion SDK.

pub mod http;

pub use http::HttpTransport;
