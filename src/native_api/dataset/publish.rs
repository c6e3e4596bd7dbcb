use serde_json::Value;

use crate::{
    client::{evaluate_response, BaseClient},
    datasetversion::VersionType,
    error::ApiError,
    identifier::Identifier,
    request::RequestType,
    response::Response,
};

/// Publishes the draft of a dataset.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - Database id or persistent identifier of the dataset.
/// * `version_type` - Whether the release bumps the major or minor version number.
///
/// # Returns
///
/// The published version as reported by the server. Installations with
/// registration workflows answer `202 Accepted` with a lock in place.
pub async fn publish_dataset(
    client: &BaseClient,
    id: &Identifier,
    version_type: VersionType,
) -> Result<Response<Value>, ApiError> {
    let url = format!("{}/actions/:publish", id.path("api/datasets"));

    let mut parameters = id.query_params().unwrap_or_default();
    parameters.push(("type".to_string(), version_type.to_string()));

    let context = RequestType::Plain;
    let response = client.post(&url, Some(parameters), context, None).await;

    evaluate_response::<Value>(response).await
}
