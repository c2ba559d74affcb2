//! Users API endpoints.

use crate::client::NotionClient;
use crate::error::NotionResult;
use serde_json::Value;

/// Users API for workspace members and the integration's bot user.
pub struct UsersApi<'a> {
    client: &'a NotionClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// List users of the workspace.
    pub async fn list(&self) -> NotionResult<Value> {
        self.client.http.get(&["users"]).await
    }

    /// Retrieve a user.
    pub async fn retrieve(&self, user_id: &str) -> NotionResult<Value> {
        self.client.http.get(&["users", user_id]).await
    }

    /// Retrieve the bot user tied to the API key.
    pub async fn me(&self) -> NotionResult<Value> {
        self.client.http.get(&["users", "me"]).await
    }
}
