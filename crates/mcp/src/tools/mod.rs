pub mod blocks;
pub mod comments;
pub mod databases;
pub mod link_preview;
pub mod pages;
pub mod search;
pub mod users;
mod registry;

pub use blocks::{
    AppendBlocksTool, DeleteBlockTool, GetBlockChildrenTool, GetBlockTool, UpdateBlockTool,
};
pub use comments::{CreateCommentTool, ListCommentsTool};
pub use databases::{CreateDatabaseTool, GetDatabaseTool, QueryDatabaseTool, UpdateDatabaseTool};
pub use link_preview::CreateLinkPreviewTool;
pub use pages::{CreatePageTool, GetPagePropertyTool, GetPageTool, UpdatePageTool};
pub use registry::{
    decode_json_arg, decode_optional_json_arg, json_schema_boolean, json_schema_enum,
    json_schema_object, json_schema_page_size, json_schema_string, parse_args, respond, Tool,
    ToolRegistry,
};
pub use search::SearchTool;
pub use users::{GetMeTool, GetUserTool, ListUsersTool};

use notion_sdk::NotionClient;
use std::sync::Arc;

/// Registry holding every Notion tool, all sharing one client.
pub fn notion_registry(client: NotionClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(Arc::new(SearchTool::new(client.clone())));

    registry.register(Arc::new(QueryDatabaseTool::new(client.clone())));
    registry.register(Arc::new(GetDatabaseTool::new(client.clone())));
    registry.register(Arc::new(CreateDatabaseTool::new(client.clone())));
    registry.register(Arc::new(UpdateDatabaseTool::new(client.clone())));

    registry.register(Arc::new(CreatePageTool::new(client.clone())));
    registry.register(Arc::new(GetPageTool::new(client.clone())));
    registry.register(Arc::new(GetPagePropertyTool::new(client.clone())));
    registry.register(Arc::new(UpdatePageTool::new(client.clone())));

    registry.register(Arc::new(AppendBlocksTool::new(client.clone())));
    registry.register(Arc::new(GetBlockTool::new(client.clone())));
    registry.register(Arc::new(GetBlockChildrenTool::new(client.clone())));
    registry.register(Arc::new(UpdateBlockTool::new(client.clone())));
    registry.register(Arc::new(DeleteBlockTool::new(client.clone())));

    registry.register(Arc::new(ListUsersTool::new(client.clone())));
    registry.register(Arc::new(GetUserTool::new(client.clone())));
    registry.register(Arc::new(GetMeTool::new(client.clone())));

    registry.register(Arc::new(CreateCommentTool::new(client.clone())));
    registry.register(Arc::new(ListCommentsTool::new(client.clone())));

    registry.register(Arc::new(CreateLinkPreviewTool::new(client)));

    registry
}
