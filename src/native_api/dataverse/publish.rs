use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    native_api::dataverse::get::DataverseInfo,
    request::RequestType,
    response::Response,
};

/// Publishes a collection (`POST api/dataverses/{alias}/actions/:publish`).
///
/// The parent collection has to be published already.
pub async fn publish_dataverse(
    client: &BaseClient,
    alias: &str,
) -> Result<Response<DataverseInfo>, ApiError> {
    let url = format!("api/dataverses/{alias}/actions/:publish");

    let context = RequestType::Plain;
    let response = client.post(&url, None, context, None).await;

    evaluate_response::<DataverseInfo>(response).await
}
