use std::collections::HashMap;
use std::path::{Path, PathBuf};

use reqwest::multipart::Part;
use reqwest::{multipart, RequestBuilder};

use crate::error::ApiError;

pub enum RequestType {
    /// A plain request with no body.
    Plain,

    /// Raw request body with non-json and non-file content.
    Raw(String),

    /// A JSON request with a JSON body and the content type set to application/json.
    JSON { body: String },

    /// A multipart request with text parts and files read from disk.
    Multipart {
        bodies: Option<HashMap<String, String>>,
        files: Option<HashMap<String, PathBuf>>,
    },
}

impl RequestType {
    /// Convert the request type to a request builder.
    ///
    /// # Arguments
    /// * `self` - The request type.
    /// * `request` - The request builder.
    ///
    /// # Returns
    /// A `Result` containing the modified request builder or an error.
    pub async fn to_request(self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        match self {
            RequestType::Plain => Ok(request),
            RequestType::Raw(body) => Ok(request.body(body)),
            RequestType::JSON { body } => Ok(request
                .header("Content-Type", "application/json")
                .body(body)),
            RequestType::Multipart { bodies, files } => {
                Self::build_form_request(bodies, files, request).await
            }
        }
    }

    /// Build a multipart form request.
    ///
    /// # Arguments
    /// * `bodies` - Optional map of text parts.
    /// * `files` - Optional map of files to be uploaded.
    /// * `request` - The request builder.
    ///
    /// # Returns
    /// A `Result` containing the modified request builder or an error.
    async fn build_form_request(
        bodies: Option<HashMap<String, String>>,
        files: Option<HashMap<String, PathBuf>>,
        request: RequestBuilder,
    ) -> Result<RequestBuilder, ApiError> {
        let mut form = multipart::Form::new();

        if let Some(bodies) = bodies {
            for (key, value) in bodies {
                form = form.part(key, Part::text(value));
            }
        }

        if let Some(files) = files {
            for (key, path) in files {
                let part = Self::assemble_file_part(&path).await?;
                form = form.part(key, part);
            }
        }

        Ok(request.multipart(form))
    }

    /// Reads a file into a multipart part named after the file.
    async fn assemble_file_part(path: &Path) -> Result<Part, ApiError> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());
        let content = tokio::fs::read(path).await?;

        Ok(Part::bytes(content)
            .file_name(name)
            .mime_str("application/octet-stream")?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use reqwest::Client;

    use super::*;

    /// Test converting a plain request type to a request builder.
    #[tokio::test]
    async fn test_request_type_to_request_plain() {
        // Arrange
        let request = RequestType::Plain
            .to_request(Client::new().request(reqwest::Method::GET, "http://localhost"))
            .await
            .expect("Could not convert request");

        // Act
        let request = request.build().expect("Could not build request");

        assert_eq!(request.url().as_str(), "http://localhost/");
        assert_eq!(request.method(), reqwest::Method::GET);
    }

    /// Test converting a JSON request type to a request builder.
    #[tokio::test]
    async fn test_request_type_to_request_json() {
        // Arrange
        let request = RequestType::JSON {
            body: "{}".to_string(),
        }
        .to_request(Client::new().request(reqwest::Method::POST, "http://localhost"))
        .await
        .expect("Could not convert request");

        // Act
        let request = request.build().expect("Could not build request");

        // Assert
        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request
                .body()
                .expect("Could not get body")
                .as_bytes()
                .expect("Could not get bytes"),
            "{}".as_bytes()
        );
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_request_type_to_request_raw() {
        let request = RequestType::Raw("doi:10.5072/FK2/ABC123".to_string())
            .to_request(Client::new().request(reqwest::Method::PUT, "http://localhost"))
            .await
            .expect("Could not convert request")
            .build()
            .expect("Could not build request");

        assert!(request.headers().get("Content-Type").is_none());
        assert_eq!(
            request.body().unwrap().as_bytes().unwrap(),
            "doi:10.5072/FK2/ABC123".as_bytes()
        );
    }

    /// Test converting a multipart form request type to a request builder.
    #[tokio::test]
    async fn test_request_type_to_request_form() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Hello, finches!").unwrap();

        let context = RequestType::Multipart {
            bodies: Some(HashMap::from([("jsonData".to_string(), "{}".to_string())])),
            files: Some(HashMap::from([(
                "file".to_string(),
                file.path().to_path_buf(),
            )])),
        };

        let request = context
            .to_request(Client::new().request(reqwest::Method::POST, "http://localhost"))
            .await
            .expect("Could not convert request");

        // Act
        let request = request.build().expect("Could not build request");

        // Assert
        assert!(request
            .headers()
            .get("Content-Type")
            .expect("Content-Type not found")
            .to_str()
            .unwrap()
            .contains("multipart/form-data"));
        assert!(
            request.body().is_some(),
            "Body not found in request: {request:?}"
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let context = RequestType::Multipart {
            bodies: None,
            files: Some(HashMap::from([(
                "file".to_string(),
                PathBuf::from("does/not/exist.csv"),
            )])),
        };

        let result = context
            .to_request(Client::new().request(reqwest::Method::POST, "http://localhost"))
            .await;

        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
