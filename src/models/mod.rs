//! Entity records holding user attributes, and the [`Entity`] trait that
//! connects them to the mapping engine.
//!
//! A record stores nothing but its flat attribute map. Everything that
//! describes the entity kind (recognized names, shapes, rules) lives in the
//! shared [`Registry`](crate::schema::Registry).

use serde_json::{json, Value};

use crate::engine::{
    self, from_nested_document, to_nested_document, AttributeMap, Conversion, DataFormat,
    DiagnosticKind, Diagnostics, UploadSchema, ValidationReport,
};
use crate::error::ModelError;
use crate::macros::entity;
use crate::schema::{EntityKind, FieldShape, Location, Registry};

pub(crate) mod private {
    use crate::engine::AttributeMap;

    pub trait Store {
        fn wrap(attributes: AttributeMap) -> Self;
        fn store(&self) -> &AttributeMap;
        fn store_mut(&mut self) -> &mut AttributeMap;
        fn into_store(self) -> AttributeMap;
    }
}

entity!(
    /// A collection that holds datasets and other collections.
    Dataverse,
    EntityKind::Dataverse
);

entity!(
    /// A versioned research object described by metadata blocks.
    Dataset,
    EntityKind::Dataset
);

entity!(
    /// Metadata of a file attached to a dataset.
    Datafile,
    EntityKind::Datafile
);

impl Dataset {
    /// The `{"fields": [...]}` body used to edit an existing dataset's metadata.
    pub fn edit_fields(&self) -> Result<Conversion<Value>, ModelError> {
        engine::edit_fields(self.attributes())
    }

    /// The serialized edit-metadata body, with every field entry checked
    /// against the dataset upload schema first.
    pub fn edit_body(&self) -> Result<String, ModelError> {
        let body = self.edit_fields()?.into_value();
        let fields = body.get("fields").cloned().unwrap_or_else(|| json!([]));

        // The schema only knows whole documents, so the entries are checked
        // inside a throwaway block.
        let wrapped = json!({"datasetVersion": {"metadataBlocks": {"edit": {"fields": fields}}}});
        UploadSchema::for_kind(EntityKind::Dataset)?.check(&wrapped)?;

        Ok(serde_json::to_string(&body)?)
    }
}

/// Common behaviour of [`Dataverse`], [`Dataset`] and [`Datafile`].
///
/// Only attributes recognized for [`Entity::KIND`] can be stored. Documents
/// are produced fresh on every call to [`Entity::to_json`], so a record is
/// never shared with a request body or a response.
pub trait Entity: private::Store + Sized {
    const KIND: EntityKind;

    /// An empty record.
    fn new() -> Self {
        Self::wrap(AttributeMap::new())
    }

    /// Builds a record from a flat map. Unknown keys are dropped and reported.
    fn from_attributes(attributes: AttributeMap) -> Conversion<Self> {
        let registry = Registry::for_kind(Self::KIND);
        let mut diagnostics = Diagnostics::new();
        let mut kept = AttributeMap::new();

        for (name, value) in attributes {
            if registry.is_recognized(&name) {
                kept.insert(name, value);
            } else {
                diagnostics.push(
                    DiagnosticKind::UnknownAttribute,
                    format!("/{name}"),
                    format!("'{name}' is not a {} attribute and was dropped", Self::KIND),
                );
            }
        }

        Conversion::new(Self::wrap(kept), diagnostics)
    }

    /// Assigns an attribute. `null` removes it.
    ///
    /// # Returns
    ///
    /// Whether a previous value was replaced.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Misuse`] if `name` is not an attribute of this
    /// kind or the value does not fit the attribute's shape.
    fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<bool, ModelError> {
        let value = value.into();
        let entry = Registry::for_kind(Self::KIND).lookup(name).ok_or_else(|| {
            ModelError::misuse(format!("'{name}' is not a {} attribute", Self::KIND))
        })?;

        if value.is_null() {
            return Ok(self.store_mut().remove(name).is_some());
        }

        if entry.location != Location::Version {
            check_shape(name, entry.spec.shape, &value)?;
        }

        Ok(self.store_mut().insert(name.to_string(), value).is_some())
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.store().get(name)
    }

    fn remove(&mut self, name: &str) -> Option<Value> {
        self.store_mut().remove(name)
    }

    /// The flat attribute map.
    fn attributes(&self) -> &AttributeMap {
        self.store()
    }

    fn into_attributes(self) -> AttributeMap {
        self.into_store()
    }

    /// The upload document of this record.
    fn to_json(&self) -> Result<Conversion<Value>, ModelError> {
        to_nested_document(self.store(), Self::KIND)
    }

    /// The serialized upload document, checked against the upload schema
    /// before it leaves the process.
    fn upload_body(&self) -> Result<String, ModelError> {
        let document = self.to_json()?.into_value();
        UploadSchema::for_kind(Self::KIND)?.check(&document)?;
        Ok(serde_json::to_string(&document)?)
    }

    /// Reads a record from a nested document.
    fn from_json(
        document: &Value,
        format: DataFormat,
        validate: bool,
    ) -> Result<Conversion<Self>, ModelError> {
        Ok(from_nested_document(document, Self::KIND, format, validate)?.map(Self::wrap))
    }

    fn from_json_str(
        content: &str,
        format: DataFormat,
        validate: bool,
    ) -> Result<Conversion<Self>, ModelError> {
        let document: Value = serde_json::from_str(content)?;
        Self::from_json(&document, format, validate)
    }

    /// Schema check plus completeness rules. See [`engine::validate_attributes`].
    fn validate(&self) -> Result<ValidationReport, ModelError> {
        engine::validate_attributes(self.store(), Self::KIND)
    }

    /// Like [`Entity::validate`], with structural errors folded into the report.
    fn is_valid(&self) -> ValidationReport {
        engine::is_valid(self.store(), Self::KIND)
    }
}

fn check_shape(name: &str, shape: FieldShape, value: &Value) -> Result<(), ModelError> {
    let fits = match shape {
        FieldShape::Scalar => !value.is_array() && !value.is_object(),
        FieldShape::ListOfScalar => value
            .as_array()
            .is_some_and(|items| items.iter().all(|i| !i.is_array() && !i.is_object())),
        FieldShape::ListOfStruct => value
            .as_array()
            .is_some_and(|items| items.iter().all(Value::is_object)),
        FieldShape::SingleStruct => value.is_object(),
    };

    if fits {
        return Ok(());
    }

    let expected = match shape {
        FieldShape::Scalar => "a scalar",
        FieldShape::ListOfScalar => "a list of scalars",
        FieldShape::ListOfStruct => "a list of objects",
        FieldShape::SingleStruct => "an object",
    };

    Err(ModelError::misuse(format!("'{name}' expects {expected}")))
}
