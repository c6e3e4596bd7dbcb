//! Downloading the content of data files.

use std::path::Path;

use crate::{
    client::BaseClient,
    error::ApiError,
    identifier::Identifier,
    request::RequestType,
    response::{Message, Response, Status},
};

/// Downloads the content of a data file (`GET api/access/datafile/{id}`).
///
/// Tabular files are served in their archival format unless the
/// installation is configured otherwise.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
/// * `id` - Database id or persistent identifier of the file.
///
/// # Returns
///
/// The raw bytes as response data. A refused download keeps the server's
/// error envelope, or its body as message if it sent none.
pub async fn download_datafile(
    client: &BaseClient,
    id: &Identifier,
) -> Result<Response<Vec<u8>>, ApiError> {
    let url = id.path("api/access/datafile");

    let parameters = id.query_params();
    let context = RequestType::Plain;
    let response = client.get(&url, parameters, context, None).await?;

    let status = response.status();
    let content = response.bytes().await?.to_vec();

    if status.is_success() {
        return Ok(Response::new(Status::OK, Some(content), None));
    }

    log::debug!("Download of file {} failed with {}", id, status);

    let body = String::from_utf8_lossy(&content).to_string();
    Ok(serde_json::from_str::<Response<Vec<u8>>>(&body)
        .unwrap_or_else(|_| Response::from_message(Message::PlainMessage(body), Status::ERROR)))
}

/// Like [`download_datafile`], writing the content to `out` instead.
///
/// # Returns
///
/// The number of bytes written. Nothing is written for error responses.
pub async fn download_datafile_to(
    client: &BaseClient,
    id: &Identifier,
    out: impl AsRef<Path>,
) -> Result<Response<usize>, ApiError> {
    let response = download_datafile(client, id).await?;

    if let (Status::OK, Some(content)) = (response.status, response.data.as_ref()) {
        tokio::fs::write(out.as_ref(), content).await?;
    }

    Ok(response.map(|content| content.len()))
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_download_datafile_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/access/datafile/12");
            then.status(200)
                .header("Content-Type", "text/csv")
                .body("beak,length\nfortis,12.1\n");
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();

        let response = download_datafile(&client, &Identifier::Id(12)).await.unwrap();

        mock.assert();
        assert_eq!(
            response.data.as_deref(),
            Some("beak,length\nfortis,12.1\n".as_bytes())
        );
    }

    #[tokio::test]
    async fn test_download_restricted_datafile() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/access/datafile/:persistentId")
                .query_param("persistentId", "doi:10.5072/FK2/ABC123/XYZ");
            then.status(403).json_body(json!({
                "status": "ERROR",
                "message": "Not authorized to access this object via this API endpoint."
            }));
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();
        let id = Identifier::from("doi:10.5072/FK2/ABC123/XYZ");

        let response = download_datafile(&client, &id).await.unwrap();

        assert!(response.status.is_err());
        assert!(response.data.is_none());
        assert!(response.message.unwrap().to_string().starts_with("Not authorized"));
    }

    #[tokio::test]
    async fn test_download_datafile_to_disk() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/access/datafile/12");
            then.status(200).body("fortis");
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("beaks.csv");

        let response = download_datafile_to(&client, &Identifier::Id(12), &out)
            .await
            .unwrap();

        assert_eq!(response.data, Some(6));
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "fortis");
    }
}
