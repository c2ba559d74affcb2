// MCP (Model Context Protocol) server exposing the Notion API as tools
// to agent clients over stdio

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::ServerConfig;
pub use server::McpServer;
