//! Static classification tables for every attribute the metadata models know about.
//!
//! Each entity kind (collection, dataset, datafile) owns a fixed vocabulary of
//! attribute names. For datasets the vocabulary is split across the metadata
//! blocks of the repository's metadata standard plus a handful of terms that
//! live directly on the dataset version. The tables never change at runtime;
//! [`Registry`] indexes them for lookups.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use registry::{CompletenessRule, Entry, Registry};

pub(crate) mod citation;
pub(crate) mod datafile;
pub(crate) mod dataverse;
pub(crate) mod geospatial;
pub(crate) mod journal;
pub(crate) mod registry;
pub(crate) mod socialscience;
pub(crate) mod terms;

/// The three kinds of objects the repository stores metadata for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A collection node.
    Dataverse,
    /// A versioned research object.
    Dataset,
    /// A file attached to a dataset version.
    Datafile,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Dataverse,
        EntityKind::Dataset,
        EntityKind::Datafile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Dataverse => "dataverse",
            EntityKind::Dataset => "dataset",
            EntityKind::Datafile => "datafile",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dataverse" | "collection" => Ok(EntityKind::Dataverse),
            "dataset" => Ok(EntityKind::Dataset),
            "datafile" | "file" => Ok(EntityKind::Datafile),
            _ => Err(format!("Invalid entity kind: {}", s)),
        }
    }
}

/// Named groupings of dataset attributes.
///
/// The order of [`MetadataBlock::ALL`] is the order blocks are emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetadataBlock {
    Citation,
    Geospatial,
    SocialScience,
    Journal,
}

impl MetadataBlock {
    pub const ALL: [MetadataBlock; 4] = [
        MetadataBlock::Citation,
        MetadataBlock::Geospatial,
        MetadataBlock::SocialScience,
        MetadataBlock::Journal,
    ];

    /// The key this block is stored under in `metadataBlocks`.
    pub fn name(&self) -> &'static str {
        match self {
            MetadataBlock::Citation => "citation",
            MetadataBlock::Geospatial => "geospatial",
            MetadataBlock::SocialScience => "socialscience",
            MetadataBlock::Journal => "journal",
        }
    }

    /// Human label the repository uses for the block.
    pub fn default_display_name(&self) -> &'static str {
        match self {
            MetadataBlock::Citation => "Citation Metadata",
            MetadataBlock::Geospatial => "Geospatial Metadata",
            MetadataBlock::SocialScience => "Social Science and Humanities Metadata",
            MetadataBlock::Journal => "Journal Metadata",
        }
    }

    /// Flat attribute that carries the block's `displayName`.
    pub fn display_name_attribute(&self) -> &'static str {
        match self {
            MetadataBlock::Citation => "citation_displayName",
            MetadataBlock::Geospatial => "geospatial_displayName",
            MetadataBlock::SocialScience => "socialscience_displayName",
            MetadataBlock::Journal => "journal_displayName",
        }
    }

    pub fn from_name(name: &str) -> Option<MetadataBlock> {
        MetadataBlock::ALL.into_iter().find(|b| b.name() == name)
    }

    pub(crate) fn fields(&self) -> &'static [AttributeSpec] {
        match self {
            MetadataBlock::Citation => citation::FIELDS,
            MetadataBlock::Geospatial => geospatial::FIELDS,
            MetadataBlock::SocialScience => socialscience::FIELDS,
            MetadataBlock::Journal => journal::FIELDS,
        }
    }
}

impl Display for MetadataBlock {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Where an attribute lives inside the exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Directly on the document root (collections and datafiles).
    Root,
    /// On the `datasetVersion` object, outside of any block.
    Version,
    /// A field entry inside the given block.
    Block(MetadataBlock),
    /// The `displayName` of the given block.
    DisplayName(MetadataBlock),
}

impl Location {
    pub fn block(&self) -> Option<MetadataBlock> {
        match self {
            Location::Block(block) | Location::DisplayName(block) => Some(*block),
            Location::Root | Location::Version => None,
        }
    }
}

/// The structural category of an attribute's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldShape {
    /// One raw value.
    Scalar,
    /// A list of raw values.
    ListOfScalar,
    /// A list of objects keyed by sub-attribute name.
    ListOfStruct,
    /// One object keyed by sub-attribute name.
    SingleStruct,
}

impl FieldShape {
    pub fn is_struct(&self) -> bool {
        matches!(self, FieldShape::ListOfStruct | FieldShape::SingleStruct)
    }
}

/// Classification carried by every field entry as `typeClass`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeClass {
    Primitive,
    Compound,
    ControlledVocabulary,
}

impl TypeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeClass::Primitive => "primitive",
            TypeClass::Compound => "compound",
            TypeClass::ControlledVocabulary => "controlledVocabulary",
        }
    }
}

impl Display for TypeClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sub-attribute of a struct-shaped attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubfieldSpec {
    pub name: &'static str,
    pub type_class: TypeClass,
}

impl SubfieldSpec {
    pub(crate) const fn primitive(name: &'static str) -> Self {
        SubfieldSpec {
            name,
            type_class: TypeClass::Primitive,
        }
    }

    pub(crate) const fn vocabulary(name: &'static str) -> Self {
        SubfieldSpec {
            name,
            type_class: TypeClass::ControlledVocabulary,
        }
    }
}

/// Declaration of one top-level attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub shape: FieldShape,
    pub type_class: TypeClass,
    /// Declared sub-attributes in canonical order. Empty unless struct-shaped.
    pub subfields: &'static [SubfieldSpec],
}

impl AttributeSpec {
    pub(crate) const fn primitive(name: &'static str) -> Self {
        Self::leaf(name, FieldShape::Scalar, TypeClass::Primitive)
    }

    pub(crate) const fn primitive_list(name: &'static str) -> Self {
        Self::leaf(name, FieldShape::ListOfScalar, TypeClass::Primitive)
    }

    pub(crate) const fn vocabulary(name: &'static str) -> Self {
        Self::leaf(name, FieldShape::Scalar, TypeClass::ControlledVocabulary)
    }

    pub(crate) const fn vocabulary_list(name: &'static str) -> Self {
        Self::leaf(
            name,
            FieldShape::ListOfScalar,
            TypeClass::ControlledVocabulary,
        )
    }

    pub(crate) const fn compound_list(
        name: &'static str,
        subfields: &'static [SubfieldSpec],
    ) -> Self {
        AttributeSpec {
            name,
            shape: FieldShape::ListOfStruct,
            type_class: TypeClass::Compound,
            subfields,
        }
    }

    pub(crate) const fn compound(name: &'static str, subfields: &'static [SubfieldSpec]) -> Self {
        AttributeSpec {
            name,
            shape: FieldShape::SingleStruct,
            type_class: TypeClass::Compound,
            subfields,
        }
    }

    const fn leaf(name: &'static str, shape: FieldShape, type_class: TypeClass) -> Self {
        AttributeSpec {
            name,
            shape,
            type_class,
            subfields: &[],
        }
    }

    pub fn subfield(&self, name: &str) -> Option<&'static SubfieldSpec> {
        self.subfields.iter().find(|s| s.name == name)
    }
}
