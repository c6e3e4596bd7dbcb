use crate::{
    client::BaseClient,
    error::ApiError,
    identifier::Identifier,
    request::RequestType,
    response::{Message, Response, Status},
};

/// Exports the latest published version of a dataset in the given format.
///
/// Exporters answer with raw content (XML, JSON-LD, ...) instead of the
/// usual envelope. A successful answer is returned as the response data. A
/// failed one keeps the server's error envelope if it sent one.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - An `Identifier` enum instance, which can be either a `PersistentId(String)` or an `Id(i64)`.
/// * `exporter` - The export format, e.g. `ddi`, `oai_datacite` or `dataverse_json`.
pub async fn export_dataset(
    client: &BaseClient,
    id: &Identifier,
    exporter: &str,
) -> Result<Response<String>, ApiError> {
    let url = match id {
        Identifier::PersistentId(_) => "api/datasets/export".to_string(),
        Identifier::Id(_) => format!("{}/export", id.path("api/datasets")),
    };

    let mut parameters = vec![("exporter".to_string(), exporter.to_string())];
    parameters.extend(id.query_params().unwrap_or_default());

    let context = RequestType::Plain;
    let response = client.get(&url, Some(parameters), context, None).await?;

    let status = response.status();
    let content = response.text().await?;

    if status.is_success() {
        return Ok(Response::new(Status::OK, Some(content), None));
    }

    Ok(serde_json::from_str::<Response<String>>(&content)
        .unwrap_or_else(|_| Response::from_message(Message::PlainMessage(content), Status::ERROR)))
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_export_dataset_returns_raw_content() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/datasets/export")
                .query_param("exporter", "ddi")
                .query_param("persistentId", "doi:10.5072/FK2/ABC123");
            then.status(200)
                .header("Content-Type", "application/xml")
                .body("<codeBook/>");
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();
        let id = Identifier::from("doi:10.5072/FK2/ABC123");

        let response = export_dataset(&client, &id, "ddi").await.unwrap();

        mock.assert();
        assert!(response.status.is_ok());
        assert_eq!(response.data.as_deref(), Some("<codeBook/>"));
    }

    #[tokio::test]
    async fn test_export_dataset_keeps_error_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/datasets/42/export");
            then.status(404).json_body(json!({
                "status": "ERROR",
                "message": "Export Failed"
            }));
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();

        let response = export_dataset(&client, &Identifier::Id(42), "nope").await.unwrap();

        assert!(response.status.is_err());
        assert_eq!(response.message.unwrap().to_string(), "Export Failed");
    }
}
