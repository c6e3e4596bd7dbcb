use serde_json::Value;

use crate::{
    client::{evaluate_response, BaseClient},
    datasetversion::{determine_version, DatasetVersion},
    engine::{Conversion, DataFormat},
    error::ApiError,
    identifier::Identifier,
    models::{Dataset, Entity},
    request::RequestType,
    response::Response,
};

/// Retrieves one version of a dataset, identified by either a persistent identifier or a numeric ID.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - An `Identifier` enum instance, which can be either a `PersistentId(String)` or an `Id(i64)`.
/// * `version` - The version to fetch. Defaults to `:draft` for authenticated and `:latest`
///   for anonymous clients.
///
/// # Returns
///
/// A `Result` wrapping a `Response<Value>` holding the raw version object, with
/// `metadataBlocks` at its top, or an [`ApiError`].
pub async fn get_dataset(
    client: &BaseClient,
    id: &Identifier,
    version: Option<&DatasetVersion>,
) -> Result<Response<Value>, ApiError> {
    let version = determine_version(version, client.has_api_token());
    let url = format!("{}/versions/{version}", id.path("api/datasets"));

    let parameters = id.query_params();
    let context = RequestType::Plain;
    let response = client.get(&url, parameters, context, None).await;

    evaluate_response::<Value>(response).await
}

/// Like [`get_dataset`], with the version read into a [`Dataset`] record.
///
/// Server bookkeeping keys of the version object (`id`, `versionState`, ...)
/// are skipped without diagnostics. Unknown metadata fields are reported.
pub async fn get_dataset_model(
    client: &BaseClient,
    id: &Identifier,
    version: Option<&DatasetVersion>,
) -> Result<Response<Conversion<Dataset>>, ApiError> {
    let response = get_dataset(client, id, version).await?;

    Ok(response.try_map(|data| Dataset::from_json(&data, DataFormat::Download, false))?)
}
