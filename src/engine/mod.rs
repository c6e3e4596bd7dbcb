//! The bidirectional mapping between flat attribute maps and nested
//! metadata documents, plus the validation that guards both directions.

use serde_json::{Map, Value};

pub use diagnostics::{Conversion, Diagnostic, DiagnosticKind, Diagnostics, ValidationReport};
pub use parse::{from_nested_document, DataFormat};
pub use serialize::{edit_fields, to_nested_document};
pub use upload_schema::UploadSchema;
pub use validate::{check_completeness, is_valid, validate_attributes, validate_document};

mod diagnostics;
mod parse;
mod serialize;
mod upload_schema;
mod validate;

/// Flat, user-facing attribute representation of an entity.
///
/// Values are raw scalars, lists of scalars, objects (single structs) or
/// lists of objects (array fields), keyed by sub-attribute name.
pub type AttributeMap = Map<String, Value>;

/// Absent-equivalent values are never emitted.
pub(crate) fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Looks up `name` and returns its value unless it is empty.
pub(crate) fn present<'a>(attributes: &'a AttributeMap, name: &str) -> Option<&'a Value> {
    attributes.get(name).filter(|value| !is_empty_value(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_values_are_recognized() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&json!("")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!(" ")));
    }

    #[test]
    fn present_skips_empty_values() {
        let attributes = json!({"title": "", "subject": ["Other"]});
        let attributes = attributes.as_object().unwrap();

        assert!(present(attributes, "title").is_none());
        assert!(present(attributes, "author").is_none());
        assert_eq!(present(attributes, "subject"), Some(&json!(["Other"])));
    }
}
