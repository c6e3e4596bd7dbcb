use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    client::{evaluate_response, BaseClient},
    engine::{Conversion, DataFormat},
    error::{ApiError, ModelError},
    models::{Dataverse, Entity},
    request::RequestType,
    response::Response,
};

/// A collection as the repository describes it.
///
/// Only the addressing keys are typed. The remaining keys (`dataverseContacts`,
/// `ownerId`, `creationDate`, ...) are kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataverseInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DataverseInfo {
    /// Reads the user-facing attributes into a [`Dataverse`] record.
    /// Server bookkeeping keys are skipped silently.
    pub fn to_model(&self) -> Result<Conversion<Dataverse>, ModelError> {
        let document = serde_json::to_value(self)?;
        Dataverse::from_json(&document, DataFormat::Download, false)
    }
}

/// Retrieves a collection by alias or database id (`GET api/dataverses/{alias}`).
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `alias` - Alias or numeric id of the collection. `:root` addresses the root collection.
pub async fn get_dataverse(
    client: &BaseClient,
    alias: &str,
) -> Result<Response<DataverseInfo>, ApiError> {
    let url = format!("api/dataverses/{alias}");

    let context = RequestType::Plain;
    let response = client.get(&url, None, context, None).await;

    evaluate_response::<DataverseInfo>(response).await
}
