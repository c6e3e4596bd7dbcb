use serde_json::Value;

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    request::RequestType,
    response::Response,
};

/// Deletes an empty, unpublished collection (`DELETE api/dataverses/{alias}`).
pub async fn delete_dataverse(
    client: &BaseClient,
    alias: &str,
) -> Result<Response<Value>, ApiError> {
    let url = format!("api/dataverses/{alias}");

    let context = RequestType::Plain;
    let response = client.delete(&url, None, context, None).await;

    evaluate_response::<Value>(response).await
}
