// MCP tool trait, registry and the helpers every Notion tool shares

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::{Context, Result};
use notion_sdk::{NotionError, NotionResult};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Tool executor trait
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool schema for MCP
    fn schema(&self) -> ToolSchema;

    /// Execute the tool with given arguments.
    ///
    /// `Err` means the arguments did not match the schema; the server turns it
    /// into a JSON-RPC error. Failures of the operation itself come back as
    /// `Ok` with an error-flagged result.
    async fn execute(&self, arguments: Value) -> Result<CallToolResult>;
}

/// Tool registry for managing available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name.clone(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// List all tool schemas, sorted by name
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Check if a tool exists
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the raw `arguments` object of a call into the tool's argument type.
pub fn parse_args<T: DeserializeOwned>(tool: &str, arguments: Value) -> Result<T> {
    // Tools without arguments may be called with `null`.
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments).with_context(|| format!("Invalid arguments for {}", tool))
}

/// Decode an argument that carries a JSON document as a string.
pub fn decode_json_arg<T: DeserializeOwned>(name: &str, raw: &str) -> NotionResult<T> {
    serde_json::from_str(raw)
        .map_err(|e| NotionError::validation(format!("Invalid JSON in '{}': {}", name, e)))
}

/// Like [`decode_json_arg`], treating an absent or blank string as not given.
pub fn decode_optional_json_arg<T: DeserializeOwned>(
    name: &str,
    raw: Option<&str>,
) -> NotionResult<Option<T>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => decode_json_arg(name, raw).map(Some),
    }
}

/// Build the envelope for a finished operation. Failures are logged before
/// they are reported as `Error: <failure> - <message>`.
pub fn respond(tool: &str, failure: &str, outcome: NotionResult<Value>) -> CallToolResult {
    match outcome {
        Ok(value) => CallToolResult::json(&value),
        Err(e) => {
            tracing::error!(
                tool,
                code = e.code().unwrap_or("none"),
                status = ?e.status(),
                "Error in {} tool: {}",
                tool,
                e
            );
            CallToolResult::error(format!("{} - {}", failure, e))
        }
    }
}

// Helper functions for creating tool schemas

pub fn json_schema_object(properties: Value, required: Vec<&str>) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn json_schema_string(description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn json_schema_enum(values: &[&str], description: &str) -> Value {
    serde_json::json!({
        "type": "string",
        "enum": values,
        "description": description
    })
}

pub fn json_schema_boolean(description: &str) -> Value {
    serde_json::json!({
        "type": "boolean",
        "description": description
    })
}

/// `page_size`: an integer within 1..=100.
pub fn json_schema_page_size() -> Value {
    serde_json::json!({
        "type": "integer",
        "minimum": notion_sdk::PageSize::MIN,
        "maximum": notion_sdk::PageSize::MAX,
        "description": "Number of results to return (max 100)"
    })
}
