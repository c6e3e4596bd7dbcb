use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    identifier::Identifier,
    models::{Datafile, Entity},
    native_api::file::metadata::FileInfo,
    request::RequestType,
    response::Response,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub files: Vec<FileInfo>,
}

/// Uploads a file to a dataset.
///
/// The file is sent as the multipart part `file`. When `metadata` is given,
/// its upload document is checked against the datafile schema and sent as
/// the `jsonData` part.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - Database id or persistent identifier of the dataset receiving the file.
/// * `path` - The file on disk.
/// * `metadata` - Optional description, labels, categories and flags for the file.
///
/// # Returns
///
/// The files the server added, or an [`ApiError`]. An unreadable file
/// surfaces as [`ApiError::Io`] before anything is sent.
pub async fn upload_datafile(
    client: &BaseClient,
    id: &Identifier,
    path: impl AsRef<Path>,
    metadata: Option<&Datafile>,
) -> Result<Response<UploadResponse>, ApiError> {
    let url = format!("{}/add", id.path("api/datasets"));

    let bodies = match metadata {
        Some(datafile) => Some(HashMap::from([(
            "jsonData".to_string(),
            datafile.upload_body()?,
        )])),
        None => None,
    };
    let files = HashMap::from([("file".to_string(), path.as_ref().to_path_buf())]);

    let parameters = id.query_params();
    let context = RequestType::Multipart {
        bodies,
        files: Some(files),
    };
    let response = client.post(&url, parameters, context, None).await;

    evaluate_response::<UploadResponse>(response).await
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_upload_datafile_with_metadata() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "beak,length\nfortis,12.1").unwrap();

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/datasets/42/add")
                .header_exists("X-Dataverse-key")
                .body_contains("name=\"jsonData\"")
                .body_contains("\"directoryLabel\":\"data\"")
                .body_contains("fortis,12.1");
            then.status(200).json_body(json!({
                "status": "OK",
                "data": {"files": [{"label": "beaks.csv", "restricted": false, "dataFile": {"id": 12}}]}
            }));
        });
        let client = BaseClient::new(&server.base_url(), Some(&"secret".to_string())).unwrap();

        let mut datafile = Datafile::new();
        datafile.set("directoryLabel", "data").unwrap();
        datafile.set("categories", json!(["Data"])).unwrap();

        // Act
        let response = upload_datafile(&client, &Identifier::Id(42), file.path(), Some(&datafile))
            .await
            .unwrap();

        // Assert
        mock.assert();
        let files = response.data.unwrap().files;
        assert_eq!(files[0].data_file.as_ref().unwrap().id, Some(12));
    }

    #[tokio::test]
    async fn test_upload_datafile_rejects_invalid_metadata() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(200);
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();

        let mut datafile = Datafile::new();
        datafile.set("restrict", "yes").unwrap();

        let result = upload_datafile(&client, &Identifier::Id(42), file.path(), Some(&datafile)).await;

        assert!(matches!(result, Err(ApiError::Model(_))));
        mock.assert_hits(0);
    }
}
