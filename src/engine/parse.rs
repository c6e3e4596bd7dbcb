use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::schema::{AttributeSpec, EntityKind, FieldShape, Location, MetadataBlock, Registry};

use super::serialize::{is_raw, type_name};
use super::upload_schema::UploadSchema;
use super::{is_empty_value, AttributeMap, Conversion, DiagnosticKind, Diagnostics};

/// Shape of the document handed to [`from_nested_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// The body accepted by the repository's create endpoints.
    #[default]
    Upload,
    /// What the repository returns when metadata is fetched. For datasets
    /// this is a version object with `metadataBlocks` at its top, or a
    /// dataset object carrying it under `latestVersion`.
    Download,
}

impl FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upload" | "dataverse_upload" => Ok(DataFormat::Upload),
            "download" | "dataverse_download" => Ok(DataFormat::Download),
            _ => Err(format!("Invalid data format: {}", s)),
        }
    }
}

impl Display for DataFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Upload => write!(f, "upload"),
            DataFormat::Download => write!(f, "download"),
        }
    }
}

/// Extracts the flat attribute map of `kind` from a nested document.
///
/// Field entries, blocks and sub-keys the registry does not know are reported
/// and skipped. With `validate` set the document is checked against the
/// upload JSON Schema first.
///
/// # Errors
///
/// * [`ModelError::Misuse`] if the document is not a JSON object.
/// * [`ModelError::SchemaViolation`] if the schema check fails, or the
///   envelope, `metadataBlocks`, a block or its `fields` has the wrong type.
pub fn from_nested_document(
    document: &Value,
    kind: EntityKind,
    format: DataFormat,
    validate: bool,
) -> Result<Conversion<AttributeMap>, ModelError> {
    let root = document.as_object().ok_or_else(|| {
        ModelError::misuse(format!(
            "a {kind} document must be a JSON object, got {}",
            type_name(document)
        ))
    })?;

    let mut collector = Collector {
        registry: Registry::for_kind(kind),
        diagnostics: Diagnostics::new(),
        attributes: AttributeMap::new(),
        strict: format == DataFormat::Upload,
    };

    match kind {
        EntityKind::Dataset => {
            let (version, base) = locate_version(root, format)?;

            if validate {
                let schema = UploadSchema::for_kind(kind)?;
                match format {
                    DataFormat::Upload => schema.check(document)?,
                    DataFormat::Download => schema.check(&json!({ "datasetVersion": version }))?,
                }
            }

            collector.dataset(version, &base)?;
        }
        EntityKind::Dataverse | EntityKind::Datafile => {
            if validate {
                UploadSchema::for_kind(kind)?.check(document)?;
            }

            collector.root(root);
        }
    }

    Ok(Conversion::new(collector.attributes, collector.diagnostics))
}

fn locate_version(
    root: &Map<String, Value>,
    format: DataFormat,
) -> Result<(&Map<String, Value>, String), ModelError> {
    let candidates: &[&str] = match format {
        DataFormat::Upload => &["datasetVersion"],
        DataFormat::Download => &["", "latestVersion", "datasetVersion"],
    };

    for key in candidates {
        if key.is_empty() {
            if root.contains_key("metadataBlocks") {
                return Ok((root, String::new()));
            }
            continue;
        }

        if let Some(version) = root.get(*key).and_then(Value::as_object) {
            return Ok((version, format!("/{key}")));
        }
    }

    match format {
        DataFormat::Upload => Err(ModelError::violation(
            "/datasetVersion",
            "expected a datasetVersion object",
        )),
        DataFormat::Download => Err(ModelError::violation(
            "root",
            "no dataset version with metadataBlocks found",
        )),
    }
}

struct Collector {
    registry: &'static Registry,
    diagnostics: Diagnostics,
    attributes: AttributeMap,
    /// Download documents carry server bookkeeping keys that are not worth reporting.
    strict: bool,
}

impl Collector {
    fn dataset(&mut self, version: &Map<String, Value>, base: &str) -> Result<(), ModelError> {
        for (key, value) in version {
            if key == "metadataBlocks" {
                continue;
            }

            match self.registry.lookup(key) {
                Some(entry) if entry.location == Location::Version => self.insert(key, value),
                _ => self.bookkeeping(
                    format!("{base}/{key}"),
                    format!("'{key}' is not a dataset version term and was skipped"),
                ),
            }
        }

        let Some(blocks) = version.get("metadataBlocks") else {
            return Ok(());
        };

        let blocks = blocks.as_object().ok_or_else(|| {
            ModelError::violation(
                format!("{base}/metadataBlocks"),
                "expected an object keyed by block name",
            )
        })?;

        for (block_name, content) in blocks {
            let path = format!("{base}/metadataBlocks/{block_name}");

            let Some(block) = MetadataBlock::from_name(block_name) else {
                self.diagnostics.push(
                    DiagnosticKind::UnknownBlock,
                    path,
                    format!("metadata block '{block_name}' is not supported and was skipped"),
                );
                continue;
            };

            let content = content
                .as_object()
                .ok_or_else(|| ModelError::violation(path.as_str(), "expected a block object"))?;

            if let Some(display_name) = content.get("displayName") {
                self.insert(block.display_name_attribute(), display_name);
            }

            let fields = match content.get("fields") {
                None => continue,
                Some(Value::Array(fields)) => fields,
                Some(_) => {
                    return Err(ModelError::violation(
                        format!("{path}/fields"),
                        "expected a list of field entries",
                    ))
                }
            };

            for (position, field) in fields.iter().enumerate() {
                self.field(block, field, &format!("{path}/fields/{position}"));
            }
        }

        Ok(())
    }

    fn field(&mut self, block: MetadataBlock, field: &Value, path: &str) {
        let Some(name) = field.get("typeName").and_then(Value::as_str) else {
            self.malformed(path, "field entry has no typeName");
            return;
        };

        let entry = match self.registry.lookup(name) {
            Some(entry) if matches!(entry.location, Location::Block(_)) => *entry,
            _ => {
                self.diagnostics.push(
                    DiagnosticKind::UnknownAttribute,
                    path,
                    format!("field '{name}' is not part of the {block} schema and was skipped"),
                );
                return;
            }
        };

        if let Location::Block(home) = entry.location {
            if home != block {
                self.diagnostics.push(
                    DiagnosticKind::MisplacedField,
                    path,
                    format!("field '{name}' belongs to the {home} block but was found in {block}"),
                );
            }
        }

        if self.attributes.contains_key(name) {
            self.malformed(
                path,
                format!("duplicate field entry for '{name}' was skipped, the first one is kept"),
            );
            return;
        }

        let Some(value) = field.get("value") else {
            self.malformed(path, format!("field '{name}' has no value"));
            return;
        };

        match entry.spec.shape {
            FieldShape::Scalar | FieldShape::ListOfScalar => {
                if !is_raw(value) {
                    self.malformed(
                        path,
                        format!(
                            "field '{name}' expects a scalar or a list of scalars, got {}",
                            type_name(value)
                        ),
                    );
                    return;
                }
                self.insert(name, value);
            }
            FieldShape::ListOfStruct => {
                let items: Vec<&Value> = match value {
                    Value::Array(items) => items.iter().collect(),
                    Value::Object(_) => vec![value],
                    _ => {
                        self.malformed(path, format!("field '{name}' expects a list of compounds"));
                        return;
                    }
                };

                let structs: Vec<Value> = items
                    .into_iter()
                    .enumerate()
                    .filter_map(|(position, item)| {
                        self.compound(entry.spec, item, &format!("{path}/value/{position}"))
                    })
                    .map(Value::Object)
                    .collect();

                self.insert(name, &Value::Array(structs));
            }
            FieldShape::SingleStruct => {
                let item = match value {
                    Value::Array(items) if items.len() == 1 => &items[0],
                    Value::Object(_) => value,
                    _ => {
                        self.malformed(path, format!("field '{name}' expects a single compound"));
                        return;
                    }
                };

                if let Some(compound) = self.compound(entry.spec, item, &format!("{path}/value")) {
                    self.insert(name, &Value::Object(compound));
                }
            }
        }
    }

    /// Reads the `value` of each declared sub-field entry.
    fn compound(
        &mut self,
        spec: &AttributeSpec,
        item: &Value,
        path: &str,
    ) -> Option<Map<String, Value>> {
        let Some(object) = item.as_object() else {
            self.malformed(path, format!("'{}' expects objects of sub-fields", spec.name));
            return None;
        };

        let mut result = Map::new();
        for (key, leaf) in object {
            if spec.subfield(key).is_none() {
                self.diagnostics.push(
                    DiagnosticKind::UnknownSubfield,
                    format!("{path}/{key}"),
                    format!("'{key}' is not a sub-field of '{}' and was skipped", spec.name),
                );
                continue;
            }

            match leaf.get("value") {
                Some(value) if !is_raw(value) => self.malformed(
                    &format!("{path}/{key}"),
                    format!("sub-field '{key}' expects a scalar, got {}", type_name(value)),
                ),
                Some(value) if !is_empty_value(value) => {
                    result.insert(key.clone(), value.clone());
                }
                Some(_) => {}
                None => self.malformed(&format!("{path}/{key}"), "sub-field has no value"),
            }
        }

        (!result.is_empty()).then_some(result)
    }

    fn root(&mut self, root: &Map<String, Value>) {
        for (key, value) in root {
            let Some(entry) = self.registry.lookup(key).copied() else {
                self.bookkeeping(
                    format!("/{key}"),
                    format!(
                        "'{key}' is not a {} attribute and was skipped",
                        self.registry.kind()
                    ),
                );
                continue;
            };

            match entry.spec.shape {
                FieldShape::ListOfStruct => {
                    let Some(items) = value.as_array() else {
                        self.malformed(&format!("/{key}"), format!("'{key}' expects a list"));
                        continue;
                    };

                    let structs: Vec<Value> = items
                        .iter()
                        .enumerate()
                        .filter_map(|(position, item)| {
                            self.plain_struct(entry.spec, item, &format!("/{key}/{position}"))
                        })
                        .map(Value::Object)
                        .collect();

                    self.insert(key, &Value::Array(structs));
                }
                FieldShape::SingleStruct => {
                    if let Some(object) = self.plain_struct(entry.spec, value, &format!("/{key}")) {
                        self.insert(key, &Value::Object(object));
                    }
                }
                FieldShape::Scalar | FieldShape::ListOfScalar => {
                    if is_raw(value) {
                        self.insert(key, value);
                    } else {
                        self.malformed(
                            &format!("/{key}"),
                            format!("'{key}' expects a scalar or a list of scalars"),
                        );
                    }
                }
            }
        }
    }

    /// Keeps the declared sub-keys of a struct stored without field wrappers.
    fn plain_struct(
        &mut self,
        spec: &AttributeSpec,
        item: &Value,
        path: &str,
    ) -> Option<Map<String, Value>> {
        let Some(object) = item.as_object() else {
            self.malformed(path, format!("'{}' expects objects", spec.name));
            return None;
        };

        let mut result = Map::new();
        for (key, value) in object {
            if spec.subfield(key).is_none() {
                self.bookkeeping(
                    format!("{path}/{key}"),
                    format!("'{key}' is not a sub-attribute of '{}' and was skipped", spec.name),
                );
            } else if !is_raw(value) {
                self.malformed(
                    &format!("{path}/{key}"),
                    format!("'{key}' expects a scalar, got {}", type_name(value)),
                );
            } else if !is_empty_value(value) {
                result.insert(key.clone(), value.clone());
            }
        }

        (!result.is_empty()).then_some(result)
    }

    fn insert(&mut self, name: &str, value: &Value) {
        if !is_empty_value(value) {
            self.attributes.insert(name.to_string(), value.clone());
        }
    }

    fn malformed(&mut self, path: &str, message: impl Into<String>) {
        self.diagnostics
            .push(DiagnosticKind::MalformedEntry, path, message);
    }

    /// Unknown keys outside of field entries: reported for uploads, ignored for downloads.
    fn bookkeeping(&mut self, path: String, message: String) {
        if self.strict {
            self.diagnostics
                .push(DiagnosticKind::UnknownAttribute, path, message);
        } else {
            log::debug!("{path}: {message}");
        }
    }
}
