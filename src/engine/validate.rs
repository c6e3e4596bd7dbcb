use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::schema::{CompletenessRule, EntityKind, FieldShape, Registry};

use super::parse::{from_nested_document, DataFormat};
use super::serialize::to_nested_document;
use super::upload_schema::UploadSchema;
use super::{present, AttributeMap, DiagnosticKind, Diagnostics, ValidationReport};

/// Validates a flat attribute map.
///
/// The map is serialized and checked against the upload JSON Schema of
/// `kind`, then the required attributes and completeness rules are
/// evaluated on the map itself. Every element of every struct attribute is
/// checked, so the report lists all problems at once.
///
/// # Errors
///
/// Structural failures ([`ModelError::SchemaViolation`], [`ModelError::Misuse`])
/// are returned as errors. Missing or incomplete data is reported through
/// [`ValidationReport::is_valid`].
pub fn validate_attributes(
    attributes: &AttributeMap,
    kind: EntityKind,
) -> Result<ValidationReport, ModelError> {
    let conversion = to_nested_document(attributes, kind)?;
    UploadSchema::for_kind(kind)?.check(&conversion.value)?;

    let mut diagnostics = conversion.diagnostics;
    diagnostics.extend(check_completeness(attributes, kind));

    Ok(ValidationReport { diagnostics })
}

/// Validates a nested document by checking its schema, parsing it and
/// evaluating the completeness rules on the result.
pub fn validate_document(
    document: &Value,
    kind: EntityKind,
    format: DataFormat,
) -> Result<ValidationReport, ModelError> {
    let conversion = from_nested_document(document, kind, format, true)?;

    let mut diagnostics = conversion.diagnostics;
    diagnostics.extend(check_completeness(&conversion.value, kind));

    Ok(ValidationReport { diagnostics })
}

/// Like [`validate_attributes`], but never fails: structural errors become
/// [`DiagnosticKind::Structure`] entries of the returned report.
pub fn is_valid(attributes: &AttributeMap, kind: EntityKind) -> ValidationReport {
    validate_attributes(attributes, kind).unwrap_or_else(|error| {
        let path = match &error {
            ModelError::SchemaViolation { path, .. } => path.clone(),
            _ => "root".to_string(),
        };

        let mut diagnostics = Diagnostics::new();
        diagnostics.push(DiagnosticKind::Structure, path, error.to_string());
        ValidationReport { diagnostics }
    })
}

/// Evaluates the required attributes and completeness rules of `kind`.
///
/// Values of the wrong shape are left to the serializer and are not
/// reported here.
pub fn check_completeness(attributes: &AttributeMap, kind: EntityKind) -> Diagnostics {
    let registry = Registry::for_kind(kind);
    let mut diagnostics = Diagnostics::new();

    for name in registry.required_attributes() {
        if present(attributes, name).is_none() {
            diagnostics.push(
                DiagnosticKind::MissingRequired,
                format!("/{name}"),
                format!("'{name}' is required for a {kind}"),
            );
        }
    }

    for rule in registry.completeness_rules() {
        let name = rule.attribute();
        let Some(value) = present(attributes, name) else {
            continue;
        };

        match registry.shape_of(name) {
            Some(FieldShape::ListOfStruct) => {
                let Some(items) = value.as_array() else {
                    continue;
                };

                for (position, item) in items.iter().enumerate() {
                    if let Some(element) = item.as_object() {
                        check_rule(rule, element, &format!("/{name}/{position}"), &mut diagnostics);
                    }
                }
            }
            Some(FieldShape::SingleStruct) => {
                if let Some(element) = value.as_object() {
                    check_rule(rule, element, &format!("/{name}"), &mut diagnostics);
                }
            }
            _ => {}
        }
    }

    diagnostics
}

fn check_rule(
    rule: &CompletenessRule,
    element: &Map<String, Value>,
    path: &str,
    diagnostics: &mut Diagnostics,
) {
    let has = |sub: &str| present(element, sub).is_some();

    match rule {
        CompletenessRule::Mandatory {
            attribute,
            subfield,
        } => {
            if !has(*subfield) {
                diagnostics.push(
                    DiagnosticKind::IncompleteGroup,
                    path,
                    format!("every '{attribute}' entry needs '{subfield}'"),
                );
            }
        }
        CompletenessRule::Requires {
            attribute,
            when,
            then,
        } => {
            let given: Vec<&str> = when.iter().copied().filter(|sub| has(sub)).collect();
            if !given.is_empty() && !has(*then) {
                diagnostics.push(
                    DiagnosticKind::IncompleteGroup,
                    path,
                    format!(
                        "'{attribute}' entry has {} but no '{then}'",
                        given.join(", ")
                    ),
                );
            }
        }
        CompletenessRule::AllOrNone { attribute, members } => {
            let missing: Vec<&str> = members.iter().copied().filter(|sub| !has(sub)).collect();
            if !missing.is_empty() && missing.len() < members.len() {
                diagnostics.push(
                    DiagnosticKind::IncompleteGroup,
                    path,
                    format!(
                        "'{attribute}' entry must give all of {} or none, missing {}",
                        members.join(", "),
                        missing.join(", ")
                    ),
                );
            }
        }
    }
}
