use std::path::Path;

use jsonschema::Validator;
use lazy_static::lazy_static;
use serde_json::Value;

use crate::error::ModelError;
use crate::schema::EntityKind;

static DATASET_SCHEMA: &str = include_str!("../../schemas/dataset_upload_default_schema.json");
static DATAVERSE_SCHEMA: &str = include_str!("../../schemas/dataverse_upload_schema.json");
static DATAFILE_SCHEMA: &str = include_str!("../../schemas/datafile_upload_schema.json");

lazy_static! {
    static ref DATASET: Result<UploadSchema, String> = UploadSchema::compile(DATASET_SCHEMA);
    static ref DATAVERSE: Result<UploadSchema, String> = UploadSchema::compile(DATAVERSE_SCHEMA);
    static ref DATAFILE: Result<UploadSchema, String> = UploadSchema::compile(DATAFILE_SCHEMA);
}

/// A compiled JSON Schema describing an upload document.
///
/// The bundled schemas are compiled once on first use. [`UploadSchema::from_path`]
/// loads a custom one, e.g. for an installation with additional metadata blocks.
pub struct UploadSchema {
    validator: Validator,
}

impl UploadSchema {
    /// The bundled schema of the given entity kind.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SchemaLoad`] if the bundled schema fails to compile.
    pub fn for_kind(kind: EntityKind) -> Result<&'static UploadSchema, ModelError> {
        let compiled = match kind {
            EntityKind::Dataset => &*DATASET,
            EntityKind::Dataverse => &*DATAVERSE,
            EntityKind::Datafile => &*DATAFILE,
        };

        compiled
            .as_ref()
            .map_err(|message| ModelError::SchemaLoad(message.clone()))
    }

    /// Loads and compiles a JSON Schema from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<UploadSchema, ModelError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        UploadSchema::compile(&content).map_err(ModelError::SchemaLoad)
    }

    fn compile(content: &str) -> Result<UploadSchema, String> {
        let schema: Value =
            serde_json::from_str(content).map_err(|e| format!("Failed to parse schema: {}", e))?;
        let validator =
            Validator::new(&schema).map_err(|e| format!("Failed to compile schema: {}", e))?;

        Ok(UploadSchema { validator })
    }

    /// Checks `document` and reports the first violation with its instance path.
    pub fn check(&self, document: &Value) -> Result<(), ModelError> {
        if let Err(error) = self.validator.validate(document) {
            let path = error.instance_path().to_string();
            let path = if path == "/" || path.is_empty() {
                "root".to_string()
            } else {
                path
            };

            return Err(ModelError::SchemaViolation {
                path,
                message: error.to_string(),
            });
        }

        Ok(())
    }

    pub fn is_valid(&self, document: &Value) -> bool {
        self.validator.is_valid(document)
    }
}
