use serde::{Deserialize, Serialize};

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    models::{Dataset, Entity},
    request::RequestType,
    response::Response,
};

/// Identifiers the server assigned to a new dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetCreateResponse {
    pub id: i64,
    pub persistent_id: String,
}

/// Creates a dataset in a collection.
///
/// This asynchronous function serializes `dataset` into the upload envelope,
/// checks the document against the bundled upload schema and posts it to
/// `api/dataverses/{dataverse}/datasets`. The record itself is not touched.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `dataverse` - Alias of the collection that receives the dataset.
/// * `dataset` - The dataset to create.
///
/// # Returns
///
/// A `Result` wrapping a `Response<DatasetCreateResponse>` with the database id
/// and persistent identifier of the new dataset, or an [`ApiError`].
pub async fn create_dataset(
    client: &BaseClient,
    dataverse: &str,
    dataset: &Dataset,
) -> Result<Response<DatasetCreateResponse>, ApiError> {
    let url = format!("api/dataverses/{dataverse}/datasets");
    let body = dataset.upload_body()?;

    let context = RequestType::JSON { body };
    let response = client.post(&url, None, context, None).await;

    evaluate_response::<DatasetCreateResponse>(response).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_create_dataset() {
        // Arrange
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/dataverses/finches/datasets")
                .header("Content-Type", "application/json")
                .json_body(json!({
                    "datasetVersion": {
                        "metadataBlocks": {
                            "citation": {
                                "fields": [{
                                    "typeName": "title",
                                    "typeClass": "primitive",
                                    "multiple": false,
                                    "value": "Darwin's Finches"
                                }]
                            }
                        }
                    }
                }));
            then.status(201).json_body(json!({
                "status": "OK",
                "data": {"id": 42, "persistentId": "doi:10.5072/FK2/ABC123"}
            }));
        });
        let client = BaseClient::new(&server.base_url(), Some(&"secret".to_string())).unwrap();

        let mut dataset = Dataset::new();
        dataset.set("title", "Darwin's Finches").unwrap();

        // Act
        let response = create_dataset(&client, "finches", &dataset).await.unwrap();

        // Assert
        mock.assert();
        assert_eq!(
            response.data,
            Some(DatasetCreateResponse {
                id: 42,
                persistent_id: "doi:10.5072/FK2/ABC123".to_string(),
            })
        );
    }
}
