//! Search API endpoint.

use super::{PageSize, SortDirection};
use crate::client::NotionClient;
use crate::error::NotionResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Search API for finding pages and databases shared with the integration.
pub struct SearchApi<'a> {
    client: &'a NotionClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a NotionClient) -> Self {
        Self { client }
    }

    /// Search pages and databases by title.
    pub async fn query(&self, request: &SearchRequest) -> NotionResult<Value> {
        self.client.http.post(&["search"], request).await
    }
}

/// Request body for `POST /search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SearchSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
}

/// Kind of object a search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Page,
    Database,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterProperty {
    Object,
}

/// Search filter; the API only filters on the `object` property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub property: FilterProperty,
    pub value: ObjectType,
}

impl SearchFilter {
    pub fn object(value: ObjectType) -> Self {
        Self {
            property: FilterProperty::Object,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchTimestamp {
    LastEditedTime,
}

/// Search sort; the API only sorts on `last_edited_time`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSort {
    pub direction: SortDirection,
    pub timestamp: SearchTimestamp,
}

impl SearchSort {
    pub fn last_edited(direction: SortDirection) -> Self {
        Self {
            direction,
            timestamp: SearchTimestamp::LastEditedTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_body() {
        let request = SearchRequest {
            query: Some("roadmap".to_string()),
            filter: Some(SearchFilter::object(ObjectType::Database)),
            sort: Some(SearchSort::last_edited(SortDirection::Descending)),
            page_size: PageSize::new(10),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "query": "roadmap",
                "filter": {"property": "object", "value": "database"},
                "sort": {"direction": "descending", "timestamp": "last_edited_time"},
                "page_size": 10
            })
        );
    }

    #[test]
    fn test_empty_search_request() {
        assert_eq!(
            serde_json::to_value(SearchRequest::default()).unwrap(),
            json!({})
        );
    }
}
