use crate::{client::BaseClient, error::ApiError};

const SERVICE_DOCUMENT: &str = "dvn/api/data-deposit/v1.1/swordv2/service-document";

/// Retrieves the SWORD v2 service document, an Atom XML listing of the
/// collections the token's user may deposit into.
///
/// SWORD authenticates with HTTP basic auth: the API token is the user name
/// and the password is empty.
///
/// # Returns
///
/// The XML document. A refused request is reported as [`ApiError::Decode`]
/// carrying the server's body.
pub async fn get_service_document(client: &BaseClient) -> Result<String, ApiError> {
    let response = client.get_basic_auth(SERVICE_DOCUMENT).await?;

    let status = response.status();
    let content = response.text().await?;

    if status.is_success() {
        Ok(content)
    } else {
        Err(ApiError::Decode {
            message: format!("service document request failed with {status}"),
            body: content,
        })
    }
}
