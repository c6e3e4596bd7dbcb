use serde_json::Value;

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    identifier::Identifier,
    models::Dataset,
    request::RequestType,
    response::Response,
};

/// Edits the metadata of an existing dataset's draft.
///
/// Every populated block attribute of `dataset` is sent as one field entry in
/// the body of `PUT api/datasets/{id}/editMetadata`. Without `replace` the
/// server only fills fields that are still empty and appends to multi-valued
/// ones. With `replace` the sent fields overwrite the stored values.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - Database id or persistent identifier of the dataset.
/// * `dataset` - Record holding the new values.
/// * `replace` - Whether existing values are overwritten.
///
/// # Returns
///
/// The updated version object, or an [`ApiError`].
pub async fn edit_dataset_metadata(
    client: &BaseClient,
    id: &Identifier,
    dataset: &Dataset,
    replace: bool,
) -> Result<Response<Value>, ApiError> {
    let url = format!("{}/editMetadata", id.path("api/datasets"));
    let body = dataset.edit_body()?;

    let mut parameters = id.query_params().unwrap_or_default();
    if replace {
        parameters.push(("replace".to_string(), "true".to_string()));
    }
    let parameters = (!parameters.is_empty()).then_some(parameters);

    let context = RequestType::JSON { body };
    let response = client.put(&url, parameters, context, None).await;

    evaluate_response::<Value>(response).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::models::Entity;

    fn retitled() -> Dataset {
        let mut dataset = Dataset::new();
        dataset.set("title", "Darwin's Finches, revisited").unwrap();
        dataset
    }

    #[tokio::test]
    async fn test_edit_dataset_metadata_replacing() {
        // Arrange
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/datasets/:persistentId/editMetadata")
                .query_param("persistentId", "doi:10.5072/FK2/ABC123")
                .query_param("replace", "true")
                .json_body(json!({
                    "fields": [{
                        "typeName": "title",
                        "typeClass": "primitive",
                        "multiple": false,
                        "value": "Darwin's Finches, revisited"
                    }]
                }));
            then.status(200).json_body(json!({
                "status": "OK",
                "data": {"id": 3, "versionState": "DRAFT"}
            }));
        });
        let client = BaseClient::new(&server.base_url(), Some(&"secret".to_string())).unwrap();
        let id = Identifier::from("doi:10.5072/FK2/ABC123");

        // Act
        let response = edit_dataset_metadata(&client, &id, &retitled(), true)
            .await
            .unwrap();

        // Assert
        mock.assert();
        assert!(response.status.is_ok());
    }

    #[tokio::test]
    async fn test_edit_dataset_metadata_rejects_invalid_records_locally() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/api/datasets/42/editMetadata");
            then.status(200).json_body(json!({"status": "OK", "data": {}}));
        });
        let client = BaseClient::new(&server.base_url(), Some(&"secret".to_string())).unwrap();

        let mut dataset = Dataset::new();
        dataset
            .set("author", json!([{"authorName": {"given": "Fiona"}}]))
            .unwrap();

        let result = edit_dataset_metadata(&client, &Identifier::Id(42), &dataset, false).await;

        assert!(matches!(result, Err(ApiError::Model(_))));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn test_edit_dataset_metadata_nested_error_message() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/api/datasets/42/editMetadata");
            then.status(400).json_body(json!({
                "status": "ERROR",
                "message": {"message": "You may not add data to a field that already has data and does not allow multiples."}
            }));
        });
        let client = BaseClient::new(&server.base_url(), Some(&"secret".to_string())).unwrap();

        let response = edit_dataset_metadata(&client, &Identifier::Id(42), &retitled(), false)
            .await
            .unwrap();

        mock.assert();
        assert!(response.status.is_err());
        assert!(response
            .message
            .unwrap()
            .to_string()
            .starts_with("You may not add data"));
    }
}
