use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{evaluate_response, BaseClient, QueryParams};
use crate::error::ApiError;
use crate::request::RequestType;
use crate::response::Response;
use crate::search_api::query::SearchQuery;

/// A page of search results.
///
/// Items differ per type (dataverse, dataset, file) and are kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_in_response: Option<u64>,

    #[serde(default)]
    pub items: Vec<Value>,

    /// Facets, spelling alternatives and whatever else the installation returns.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Performs a search operation against the Dataverse API.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `query` - A reference to the `SearchQuery` containing all search parameters.
///
/// # Returns
///
/// A `Result` wrapping a `Response<SearchResponse>`, or an [`ApiError`] if the
/// request could not be sent or the answer could not be decoded.
pub async fn search(
    client: &BaseClient,
    query: &SearchQuery,
) -> Result<Response<SearchResponse>, ApiError> {
    let params: QueryParams = query.into();

    let context = RequestType::Plain;
    let response = client.get("api/search", Some(params), context, None).await;

    evaluate_response::<SearchResponse>(response).await
}
