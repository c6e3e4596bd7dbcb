use serde_json::{json, Map, Value};

use crate::error::ModelError;
use crate::schema::{
    AttributeSpec, EntityKind, FieldShape, Location, MetadataBlock, Registry, TypeClass,
};

use super::{present, AttributeMap, Conversion, DiagnosticKind, Diagnostics};

/// Builds the upload document for `kind` from a flat attribute map.
///
/// Datasets produce the `{"datasetVersion": {..., "metadataBlocks": {...}}}`
/// envelope; collections and datafiles produce a flat object. Fields are
/// emitted in the registry's canonical order, so the same map always yields
/// the same document.
///
/// # Errors
///
/// Returns [`ModelError::Misuse`] when a recognized attribute holds a value
/// of the wrong shape, e.g. a struct attribute given a plain string.
pub fn to_nested_document(
    attributes: &AttributeMap,
    kind: EntityKind,
) -> Result<Conversion<Value>, ModelError> {
    let registry = Registry::for_kind(kind);
    let mut diagnostics = Diagnostics::new();

    for name in attributes.keys() {
        if !registry.is_recognized(name) {
            diagnostics.push(
                DiagnosticKind::UnknownAttribute,
                format!("/{name}"),
                format!("'{name}' is not a {kind} attribute and was skipped"),
            );
        }
    }

    let document = match kind {
        EntityKind::Dataset => dataset_document(attributes, registry, &mut diagnostics)?,
        EntityKind::Dataverse | EntityKind::Datafile => {
            root_document(attributes, registry, &mut diagnostics)?
        }
    };

    Ok(Conversion::new(document, diagnostics))
}

/// Collects every block's field entries into the `{"fields": [...]}` body
/// used to edit the metadata of an existing dataset.
pub fn edit_fields(attributes: &AttributeMap) -> Result<Conversion<Value>, ModelError> {
    let conversion = to_nested_document(attributes, EntityKind::Dataset)?;

    let blocks = conversion
        .value
        .pointer("/datasetVersion/metadataBlocks")
        .and_then(Value::as_object);

    let mut fields = Vec::new();
    for block in MetadataBlock::ALL {
        let entries = blocks
            .and_then(|blocks| blocks.get(block.name()))
            .and_then(|content| content.get("fields"))
            .and_then(Value::as_array);

        if let Some(entries) = entries {
            fields.extend(entries.iter().cloned());
        }
    }

    Ok(conversion.map(|_| json!({ "fields": fields })))
}

fn dataset_document(
    attributes: &AttributeMap,
    registry: &Registry,
    diagnostics: &mut Diagnostics,
) -> Result<Value, ModelError> {
    let mut version = Map::new();
    for entry in registry.entries_at(Location::Version) {
        if let Some(value) = present(attributes, entry.name()) {
            version.insert(entry.name().to_string(), value.clone());
        }
    }

    let mut blocks = Map::new();
    for block in MetadataBlock::ALL {
        let mut fields = Vec::new();
        for entry in registry.entries_at(Location::Block(block)) {
            if let Some(value) = present(attributes, entry.name()) {
                if let Some(field) = field_entry(entry.spec, value, diagnostics)? {
                    fields.push(field);
                }
            }
        }

        let display_name = present(attributes, block.display_name_attribute());
        if fields.is_empty() && display_name.is_none() {
            continue;
        }

        let mut content = Map::new();
        if let Some(display_name) = display_name {
            content.insert("displayName".to_string(), display_name.clone());
        }
        content.insert("fields".to_string(), Value::Array(fields));
        blocks.insert(block.name().to_string(), Value::Object(content));
    }

    version.insert("metadataBlocks".to_string(), Value::Object(blocks));

    Ok(json!({ "datasetVersion": version }))
}

fn root_document(
    attributes: &AttributeMap,
    registry: &Registry,
    diagnostics: &mut Diagnostics,
) -> Result<Value, ModelError> {
    let mut document = Map::new();

    for entry in registry.entries_at(Location::Root) {
        let name = entry.name();
        let Some(value) = present(attributes, name) else {
            continue;
        };

        let value = match entry.spec.shape {
            FieldShape::ListOfStruct => {
                let items = struct_items(entry.spec, value)?;
                let mut structs = Vec::new();
                for (position, item) in items.iter().enumerate() {
                    let path = format!("/{name}/{position}");
                    if let Some(object) =
                        struct_value(entry.spec, item, &path, diagnostics, Wrap::Plain)?
                    {
                        structs.push(Value::Object(object));
                    }
                }
                (!structs.is_empty()).then_some(Value::Array(structs))
            }
            FieldShape::SingleStruct => {
                struct_value(entry.spec, value, &format!("/{name}"), diagnostics, Wrap::Plain)?
                    .map(Value::Object)
            }
            FieldShape::Scalar | FieldShape::ListOfScalar => {
                ensure_raw(name, value)?;
                Some(value.clone())
            }
        };

        if let Some(value) = value {
            document.insert(name.to_string(), value);
        }
    }

    Ok(Value::Object(document))
}

/// Field entry for one block attribute, or `None` if nothing is left to emit.
fn field_entry(
    spec: &AttributeSpec,
    value: &Value,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Value>, ModelError> {
    let name = spec.name;

    match spec.shape {
        FieldShape::Scalar | FieldShape::ListOfScalar => {
            ensure_raw(name, value)?;
            Ok(Some(leaf(name, spec.type_class, value)))
        }
        FieldShape::ListOfStruct => {
            let items = struct_items(spec, value)?;
            let mut compounds = Vec::new();
            for (position, item) in items.iter().enumerate() {
                let path = format!("/{name}/{position}");
                if let Some(compound) = struct_value(spec, item, &path, diagnostics, Wrap::Field)? {
                    compounds.push(Value::Object(compound));
                }
            }

            if compounds.is_empty() {
                return Ok(None);
            }

            Ok(Some(field(name, TypeClass::Compound, true, Value::Array(compounds))))
        }
        FieldShape::SingleStruct => {
            let compound = struct_value(spec, value, &format!("/{name}"), diagnostics, Wrap::Field)?;
            Ok(compound.map(|c| field(name, TypeClass::Compound, false, Value::Object(c))))
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Wrap {
    /// Each sub-value becomes a full field entry.
    Field,
    /// Sub-values are copied as they are.
    Plain,
}

fn struct_items<'a>(spec: &AttributeSpec, value: &'a Value) -> Result<&'a Vec<Value>, ModelError> {
    value.as_array().ok_or_else(|| {
        ModelError::misuse(format!(
            "'{}' expects a list of objects, got {}",
            spec.name,
            type_name(value)
        ))
    })
}

/// Keeps only the declared sub-keys that carry a value.
fn struct_value(
    spec: &AttributeSpec,
    item: &Value,
    path: &str,
    diagnostics: &mut Diagnostics,
    wrap: Wrap,
) -> Result<Option<Map<String, Value>>, ModelError> {
    let object = item.as_object().ok_or_else(|| {
        ModelError::misuse(format!(
            "{path} must be an object keyed by sub-attribute, got {}",
            type_name(item)
        ))
    })?;

    for key in object.keys() {
        if spec.subfield(key).is_none() {
            diagnostics.push(
                DiagnosticKind::UnknownSubfield,
                format!("{path}/{key}"),
                format!("'{key}' is not a sub-attribute of '{}' and was skipped", spec.name),
            );
        }
    }

    let mut result = Map::new();
    for sub in spec.subfields {
        let Some(value) = present(object, sub.name) else {
            continue;
        };

        ensure_raw(sub.name, value)?;
        let value = match wrap {
            Wrap::Field => leaf(sub.name, sub.type_class, value),
            Wrap::Plain => value.clone(),
        };
        result.insert(sub.name.to_string(), value);
    }

    Ok((!result.is_empty()).then_some(result))
}

/// Leaf values are scalars or lists of scalars.
/// Whether `value` is a scalar or a flat list of scalars.
pub(crate) fn is_raw(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(items) => !items.iter().any(|i| i.is_object() || i.is_array()),
        _ => true,
    }
}

fn ensure_raw(name: &str, value: &Value) -> Result<(), ModelError> {
    if !is_raw(value) {
        return Err(ModelError::misuse(format!(
            "'{name}' expects a scalar or a list of scalars, got {}",
            type_name(value)
        )));
    }

    Ok(())
}

fn leaf(name: &str, type_class: TypeClass, value: &Value) -> Value {
    field(name, type_class, value.is_array(), value.clone())
}

fn field(name: &str, type_class: TypeClass, multiple: bool, value: Value) -> Value {
    json!({
        "typeName": name,
        "typeClass": type_class.as_str(),
        "multiple": multiple,
        "value": value,
    })
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn attributes(value: Value) -> AttributeMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn empty_map_produces_no_blocks() {
        let document = to_nested_document(&AttributeMap::new(), EntityKind::Dataset)
            .unwrap()
            .value;

        assert_eq!(document, json!({"datasetVersion": {"metadataBlocks": {}}}));
    }

    #[test]
    fn scalar_and_list_fields_use_runtime_multiplicity() {
        let flat = attributes(json!({
            "title": "Darwin's Finches",
            "subject": ["Medicine, Health and Life Sciences"],
            "kindOfData": "Survey",
        }));

        let document = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;
        let fields = document
            .pointer("/datasetVersion/metadataBlocks/citation/fields")
            .unwrap();

        assert_eq!(
            fields,
            &json!([
                {"typeName": "title", "typeClass": "primitive", "multiple": false, "value": "Darwin's Finches"},
                {"typeName": "subject", "typeClass": "controlledVocabulary", "multiple": true, "value": ["Medicine, Health and Life Sciences"]},
                {"typeName": "kindOfData", "typeClass": "primitive", "multiple": false, "value": "Survey"},
            ])
        );
    }

    #[test]
    fn struct_fields_only_carry_present_subkeys() {
        let flat = attributes(json!({
            "author": [
                {"authorName": "Finch, Fiona", "authorAffiliation": "Birds Inc."},
                {"authorName": "Crow, Carl", "authorAffiliation": null},
            ],
        }));

        let document = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;
        let author = document
            .pointer("/datasetVersion/metadataBlocks/citation/fields/0")
            .unwrap();

        assert_eq!(author["typeClass"], "compound");
        assert_eq!(author["multiple"], true);
        assert_eq!(
            author["value"][1],
            json!({
                "authorName": {"typeName": "authorName", "typeClass": "primitive", "multiple": false, "value": "Crow, Carl"}
            })
        );
        assert_eq!(
            author["value"][0]["authorAffiliation"]["value"],
            "Birds Inc."
        );
    }

    #[test]
    fn single_structs_are_not_lists() {
        let flat = attributes(json!({
            "series": {"seriesName": "Galapagos"},
            "socialScienceNotes": {"socialScienceNotesText": "Field notes"},
        }));

        let document = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;
        let series = document
            .pointer("/datasetVersion/metadataBlocks/citation/fields/0")
            .unwrap();
        let notes = document
            .pointer("/datasetVersion/metadataBlocks/socialscience/fields/0")
            .unwrap();

        assert_eq!(series["multiple"], false);
        assert_eq!(series["value"]["seriesName"]["value"], "Galapagos");
        assert_eq!(notes["typeName"], "socialScienceNotes");
        assert!(notes["value"].is_object());
    }

    #[test]
    fn version_terms_and_display_names_are_placed() {
        let flat = attributes(json!({
            "license": "CC0 1.0",
            "fileAccessRequest": true,
            "journal_displayName": "Journal Metadata",
        }));

        let document = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;

        assert_eq!(
            document,
            json!({
                "datasetVersion": {
                    "license": "CC0 1.0",
                    "fileAccessRequest": true,
                    "metadataBlocks": {
                        "journal": {"displayName": "Journal Metadata", "fields": []}
                    }
                }
            })
        );
    }

    #[test]
    fn unknown_keys_are_reported_and_skipped() {
        let flat = attributes(json!({
            "title": "T",
            "favouriteColour": "green",
            "author": [{"authorName": "A", "authorShoeSize": "44"}],
        }));

        let conversion = to_nested_document(&flat, EntityKind::Dataset).unwrap();
        let rendered = conversion.value.to_string();

        assert!(!rendered.contains("favouriteColour"));
        assert!(!rendered.contains("authorShoeSize"));
        assert_eq!(
            conversion
                .diagnostics
                .of_kind(DiagnosticKind::UnknownAttribute)
                .count(),
            1
        );
        assert_eq!(
            conversion
                .diagnostics
                .of_kind(DiagnosticKind::UnknownSubfield)
                .next()
                .unwrap()
                .path,
            "/author/0/authorShoeSize"
        );
    }

    #[test]
    fn empty_values_are_omitted() {
        let flat = attributes(json!({
            "title": "",
            "subject": [],
            "author": [{"authorName": ""}],
            "series": {},
            "notesText": null,
        }));

        let document = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;
        assert_eq!(document, json!({"datasetVersion": {"metadataBlocks": {}}}));
    }

    #[test]
    fn wrong_shapes_are_misuse() {
        let flat = attributes(json!({"author": "Finch, Fiona"}));
        let error = to_nested_document(&flat, EntityKind::Dataset).unwrap_err();
        assert!(matches!(error, ModelError::Misuse(_)));

        let flat = attributes(json!({"title": {"value": "x"}}));
        let error = to_nested_document(&flat, EntityKind::Dataset).unwrap_err();
        assert!(matches!(error, ModelError::Misuse(_)));

        let flat = attributes(json!({"author": ["Finch, Fiona"]}));
        let error = to_nested_document(&flat, EntityKind::Dataset).unwrap_err();
        assert!(error.to_string().contains("/author/0"));
    }

    #[test]
    fn dataverse_documents_are_flat() {
        let flat = attributes(json!({
            "alias": "finches",
            "name": "Darwin's Finches",
            "dataverseContacts": [{"contactEmail": "finch@mailinator.com", "displayOrder": 0}],
        }));

        let conversion = to_nested_document(&flat, EntityKind::Dataverse).unwrap();

        assert_eq!(
            conversion.value,
            json!({
                "alias": "finches",
                "name": "Darwin's Finches",
                "dataverseContacts": [{"contactEmail": "finch@mailinator.com"}],
            })
        );
        assert_eq!(conversion.diagnostics.len(), 1);
    }

    #[test]
    fn edit_fields_concatenates_blocks() {
        let flat = attributes(json!({
            "title": "T",
            "geographicUnit": ["km"],
            "license": "CC0 1.0",
            "citation_displayName": "Citation Metadata",
        }));

        let body = edit_fields(&flat).unwrap().value;
        let names: Vec<&str> = body["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["typeName"].as_str().unwrap())
            .collect();

        assert_eq!(names, vec!["title", "geographicUnit"]);
    }

    #[test]
    fn serialization_is_deterministic() {
        let flat = attributes(json!({
            "subject": ["Other"],
            "title": "T",
            "geographicBoundingBox": [{"southLongitude": "1", "westLongitude": "2"}],
        }));

        let first = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;
        let second = to_nested_document(&flat, EntityKind::Dataset).unwrap().value;

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
