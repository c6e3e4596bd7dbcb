use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    client::{evaluate_response, BaseClient},
    engine::{AttributeMap, Conversion},
    error::ApiError,
    identifier::Identifier,
    models::{Datafile, Entity},
    request::RequestType,
    response::Response,
};

/// File metadata within a dataset version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_label: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub restricted: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<DataFileInfo>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The stored file behind a [`FileInfo`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFileInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filesize: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FileInfo {
    /// Reads the user-facing metadata into a [`Datafile`] record.
    ///
    /// `restricted` becomes `restrict`. Drafts carry an empty persistent
    /// identifier, which is left out.
    pub fn to_model(&self) -> Conversion<Datafile> {
        let mut attributes = AttributeMap::new();
        let data_file = self.data_file.as_ref();

        let text = [
            ("pid", data_file.and_then(|f| f.persistent_id.as_ref())),
            ("filename", data_file.and_then(|f| f.filename.as_ref())),
            ("description", self.description.as_ref()),
            ("label", self.label.as_ref()),
            ("directoryLabel", self.directory_label.as_ref()),
        ];
        for (name, value) in text {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                attributes.insert(name.to_string(), Value::from(value.as_str()));
            }
        }

        if !self.categories.is_empty() {
            attributes.insert("categories".to_string(), Value::from(self.categories.clone()));
        }
        attributes.insert("restrict".to_string(), Value::Bool(self.restricted));

        Datafile::from_attributes(attributes)
    }
}

/// Retrieves the metadata for a specific file (`GET api/files/{id}`).
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - Database id or persistent identifier of the file.
///
/// # Returns
///
/// A `Result` wrapping a `Response<FileInfo>`, or an [`ApiError`].
pub async fn get_datafile_metadata(
    client: &BaseClient,
    id: &Identifier,
) -> Result<Response<FileInfo>, ApiError> {
    let url = id.path("api/files");

    let parameters = id.query_params();
    let context = RequestType::Plain;
    let response = client.get(&url, parameters, context, None).await;

    evaluate_response::<FileInfo>(response).await
}
