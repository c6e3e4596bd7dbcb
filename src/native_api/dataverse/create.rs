use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    models::{Dataverse, Entity},
    native_api::dataverse::get::DataverseInfo,
    request::RequestType,
    response::Response,
};

/// Creates a collection inside `parent`.
///
/// The request body is a fresh upload document of `dataverse`. It is checked
/// against the bundled upload schema first, so a malformed collection never
/// reaches the server.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `parent` - Alias of the parent collection, e.g. `root`.
/// * `dataverse` - The collection to create.
///
/// # Returns
///
/// The created collection as reported by the server, or an [`ApiError`]. A
/// schema failure surfaces as [`ApiError::Model`].
pub async fn create_dataverse(
    client: &BaseClient,
    parent: &str,
    dataverse: &Dataverse,
) -> Result<Response<DataverseInfo>, ApiError> {
    let url = format!("api/dataverses/{parent}");
    let body = dataverse.upload_body()?;

    let context = RequestType::JSON { body };
    let response = client.post(&url, None, context, None).await;

    evaluate_response::<DataverseInfo>(response).await
}
