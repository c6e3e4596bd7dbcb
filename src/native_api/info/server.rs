use serde::{Deserialize, Serialize};

use crate::{
    client::{evaluate_response, BaseClient},
    error::ApiError,
    request::RequestType,
    response::Response,
};

/// The host name the installation reports for itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerResponse {
    pub message: String,
}

/// Retrieves the server name of the Dataverse instance (`GET api/info/server`).
pub async fn get_server(client: &BaseClient) -> Result<Response<ServerResponse>, ApiError> {
    let context = RequestType::Plain;
    let response = client.get("api/info/server", None, context, None).await;

    evaluate_response::<ServerResponse>(response).await
}
