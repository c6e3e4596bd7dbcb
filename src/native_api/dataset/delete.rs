use serde_json::Value;

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    identifier::Identifier,
    request::RequestType,
    response::Response,
};

/// Deletes the draft version of a dataset.
///
/// A dataset that was never published disappears entirely. Published
/// versions cannot be removed through this call.
pub async fn delete_dataset(
    client: &BaseClient,
    id: &Identifier,
) -> Result<Response<Value>, ApiError> {
    let url = format!("{}/versions/:draft", id.path("api/datasets"));

    let parameters = id.query_params();
    let context = RequestType::Plain;
    let response = client.delete(&url, parameters, context, None).await;

    evaluate_response::<Value>(response).await
}
