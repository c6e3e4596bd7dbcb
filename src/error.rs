//! Error types shared by the metadata engine and the API wrappers.
//!
//! Only structural problems and caller misuse are errors. Unknown attributes
//! and incomplete groups are reported as [`Diagnostic`](crate::engine::Diagnostic)s
//! next to the result instead.

use thiserror::Error;

/// Hard failures of the metadata engine.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document does not satisfy the upload JSON Schema.
    #[error("schema validation failed at path '{path}': {message}")]
    SchemaViolation { path: String, message: String },

    /// A bundled or user-supplied JSON Schema could not be loaded or compiled.
    #[error("failed to load schema: {0}")]
    SchemaLoad(String),

    /// The caller passed a value of the wrong shape.
    #[error("invalid argument: {0}")]
    Misuse(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ModelError {
    pub(crate) fn misuse(message: impl Into<String>) -> Self {
        ModelError::Misuse(message.into())
    }

    pub(crate) fn violation(path: impl Into<String>, message: impl Into<String>) -> Self {
        ModelError::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Failures of an HTTP call against the repository.
///
/// A response with `"status": "ERROR"` is not an `ApiError`; it is returned
/// as a regular [`Response`](crate::response::Response).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(String),

    /// The body could not be read into the expected response type.
    #[error("failed to decode response: {message} - {body}")]
    Decode { message: String, body: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_violation_names_the_path() {
        let error = ModelError::violation("/datasetVersion", "missing");
        assert_eq!(
            error.to_string(),
            "schema validation failed at path '/datasetVersion': missing"
        );
    }

    #[test]
    fn model_errors_convert_into_api_errors() {
        let error: ApiError = ModelError::misuse("not a map").into();
        assert!(matches!(error, ApiError::Model(ModelError::Misuse(_))));
        assert_eq!(error.to_string(), "invalid argument: not a map");
    }
}
