use serde::{Deserialize, Serialize};

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    request::RequestType,
    response::Response,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionResponse {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
}

/// Retrieves the version of the Dataverse instance.
///
/// # Arguments
///
/// * `client` - A reference to the `BaseClient` instance used to send the request.
///
/// # Returns
///
/// A `Result` wrapping a `Response<VersionResponse>` with the version and build
/// number, or an [`ApiError`] if the request fails.
pub async fn get_version(client: &BaseClient) -> Result<Response<VersionResponse>, ApiError> {
    let context = RequestType::Plain;
    let response = client.get("api/info/version", None, context, None).await;

    evaluate_response::<VersionResponse>(response).await
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn test_get_version() {
        // Arrange
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/info/version");
            then.status(200).json_body(json!({
                "status": "OK",
                "data": {"version": "6.2", "build": "1234-abcd"}
            }));
        });
        let client = BaseClient::new(&server.base_url(), None).unwrap();

        // Act
        let response = get_version(&client).await.expect("Could not get version");

        // Assert
        mock.assert();
        assert!(response.status.is_ok());
        assert_eq!(
            response.data,
            Some(VersionResponse {
                version: "6.2".to_string(),
                build: Some("1234-abcd".to_string()),
            })
        );
    }
}
