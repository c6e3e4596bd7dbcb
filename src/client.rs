use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use reqwest::Client;
use reqwest::Url;
use serde::Deserialize;

use crate::config::Config;
use crate::error::ApiError;
use crate::request::RequestType;
use crate::response::Response;

/// Query parameters of a request. A list rather than a map, because search
/// options such as `fq` or `type` may be given more than once.
pub type QueryParams = Vec<(String, String)>;

#[derive(Debug, Clone)]
pub struct BaseClient {
    base_url: Url,
    api_token: Option<String>,
    client: Client,
}

impl BaseClient {
    pub(crate) fn has_api_token(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }
}

// This is the base client that will be used to make requests to the API.
// It acts as a wrapper around the reqwest::Client and provides
// methods to make GET, POST, PUT, and DELETE requests.
impl BaseClient {
    /// Creates a client for the installation at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Root URL of the installation, e.g. `https://demo.dataverse.org`
    /// * `api_token` - Optional API token, sent as `X-Dataverse-key` with every request
    ///
    /// # Returns
    ///
    /// The client, or [`ApiError::Url`] if the URL or token cannot be used.
    pub fn new(base_url: &str, api_token: Option<&String>) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Url(format!("{base_url}: {e}")))?;
        let default_headers = Self::default_headers(api_token)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(300))
            .connect_timeout(std::time::Duration::from_secs(60))
            .default_headers(default_headers)
            .build()?;

        Ok(BaseClient {
            base_url,
            api_token: api_token.map(|s| s.to_owned()),
            client,
        })
    }

    /// Creates a client from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        BaseClient::new(&config.base_url, config.api_token.as_ref())
    }

    fn default_headers(api_token: Option<&String>) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();

        if let Some(api_token) = api_token {
            let value = HeaderValue::from_str(api_token)
                .map_err(|_| ApiError::Url("API token contains invalid characters".to_string()))?;
            headers.insert("X-Dataverse-key", value);
        }

        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert(
            "User-Agent",
            HeaderValue::from_static(concat!("dvmodels/", env!("CARGO_PKG_VERSION"))),
        );

        Ok(headers)
    }

    /// Get the base URL of the client
    ///
    /// # Returns
    ///
    /// A reference to the base URL of the client
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get(
        &self,
        path: &str,
        parameters: Option<QueryParams>,
        context: RequestType,
        header_map: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError> {
        self.perform_request(reqwest::Method::GET, path, parameters, context, header_map)
            .await
    }

    pub async fn post(
        &self,
        path: &str,
        parameters: Option<QueryParams>,
        context: RequestType,
        header_map: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError> {
        self.perform_request(reqwest::Method::POST, path, parameters, context, header_map)
            .await
    }

    pub async fn put(
        &self,
        path: &str,
        parameters: Option<QueryParams>,
        context: RequestType,
        header_map: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError> {
        self.perform_request(reqwest::Method::PUT, path, parameters, context, header_map)
            .await
    }

    pub async fn delete(
        &self,
        path: &str,
        parameters: Option<QueryParams>,
        context: RequestType,
        header_map: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError> {
        self.perform_request(
            reqwest::Method::DELETE,
            path,
            parameters,
            context,
            header_map,
        )
        .await
    }

    /// GET with the API token as HTTP basic-auth user name and an empty
    /// password, as the SWORD endpoints expect.
    pub async fn get_basic_auth(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path)?;
        log::debug!("Calling {} with basic auth", url);

        let request = self.client.get(url);
        let request = match self.api_token() {
            Some(token) => request.basic_auth(token, Some("")),
            None => request,
        };

        Ok(request.send().await?)
    }

    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Url(format!("{path}: {e}")))
    }

    async fn perform_request(
        &self,
        method: reqwest::Method,
        path: &str,
        parameters: Option<QueryParams>,
        context: RequestType,
        header_map: Option<HeaderMap>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url_for(path)?;
        log::debug!("Calling {} {}", method, url);

        let request = context
            .to_request(self.client.request(method, url))
            .await?;

        let request = match parameters {
            Some(parameters) => request.query(&parameters),
            None => request,
        };

        let headers = header_map.unwrap_or_default();
        Ok(request.headers(headers).send().await?)
    }
}

/// Reads a Dataverse response envelope from an HTTP response.
///
/// A body with `"status": "ERROR"` is a valid answer and is returned as
/// `Ok`. Only transport failures and bodies that are not an envelope at
/// all are errors.
pub async fn evaluate_response<T>(
    response: Result<reqwest::Response, ApiError>,
) -> Result<Response<T>, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let response = response?;
    let status = response.status();
    let raw_content = response.text().await?;

    serde_json::from_str::<Response<T>>(&raw_content).map_err(|err| {
        log::error!("Failed to decode a {} response: {}", status, err);
        ApiError::Decode {
            message: err.to_string(),
            body: raw_content,
        }
    })
}
