use std::collections::HashMap;

use lazy_static::lazy_static;

use super::{
    datafile, dataverse, terms, AttributeSpec, EntityKind, FieldShape, Location, MetadataBlock,
    SubfieldSpec, TypeClass,
};

/// Cross-field rule checked element by element on struct-shaped attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletenessRule {
    /// Every element must carry `subfield`.
    Mandatory {
        attribute: &'static str,
        subfield: &'static str,
    },
    /// An element carrying any of `when` must also carry `then`.
    Requires {
        attribute: &'static str,
        when: &'static [&'static str],
        then: &'static str,
    },
    /// An element carries either all of `members` or none of them.
    AllOrNone {
        attribute: &'static str,
        members: &'static [&'static str],
    },
}

impl CompletenessRule {
    pub fn attribute(&self) -> &'static str {
        match self {
            CompletenessRule::Mandatory { attribute, .. }
            | CompletenessRule::Requires { attribute, .. }
            | CompletenessRule::AllOrNone { attribute, .. } => attribute,
        }
    }
}

static DATASET_REQUIRED: &[&str] = &["title", "author", "datasetContact", "dsDescription", "subject"];

static DATASET_RULES: &[CompletenessRule] = &[
    CompletenessRule::Requires {
        attribute: "otherId",
        when: &["otherIdAgency"],
        then: "otherIdValue",
    },
    CompletenessRule::Requires {
        attribute: "author",
        when: &["authorAffiliation", "authorIdentifierScheme", "authorIdentifier"],
        then: "authorName",
    },
    CompletenessRule::Requires {
        attribute: "datasetContact",
        when: &["datasetContactAffiliation", "datasetContactEmail"],
        then: "datasetContactName",
    },
    CompletenessRule::Requires {
        attribute: "dsDescription",
        when: &["dsDescriptionDate"],
        then: "dsDescriptionValue",
    },
    CompletenessRule::Requires {
        attribute: "keyword",
        when: &["keywordVocabulary", "keywordVocabularyURI"],
        then: "keywordValue",
    },
    CompletenessRule::Requires {
        attribute: "topicClassification",
        when: &["topicClassVocab", "topicClassVocabURI"],
        then: "topicClassValue",
    },
    CompletenessRule::Requires {
        attribute: "publication",
        when: &["publicationIDType", "publicationIDNumber", "publicationURL"],
        then: "publicationCitation",
    },
    CompletenessRule::Requires {
        attribute: "producer",
        when: &[
            "producerAffiliation",
            "producerAbbreviation",
            "producerURL",
            "producerLogoURL",
        ],
        then: "producerName",
    },
    CompletenessRule::Requires {
        attribute: "contributor",
        when: &["contributorType"],
        then: "contributorName",
    },
    CompletenessRule::Requires {
        attribute: "grantNumber",
        when: &["grantNumberValue"],
        then: "grantNumberAgency",
    },
    CompletenessRule::Requires {
        attribute: "distributor",
        when: &[
            "distributorAffiliation",
            "distributorAbbreviation",
            "distributorURL",
            "distributorLogoURL",
        ],
        then: "distributorName",
    },
    CompletenessRule::AllOrNone {
        attribute: "timePeriodCovered",
        members: &["timePeriodCoveredStart", "timePeriodCoveredEnd"],
    },
    CompletenessRule::AllOrNone {
        attribute: "dateOfCollection",
        members: &["dateOfCollectionStart", "dateOfCollectionEnd"],
    },
    CompletenessRule::Requires {
        attribute: "series",
        when: &["seriesInformation"],
        then: "seriesName",
    },
    CompletenessRule::Requires {
        attribute: "software",
        when: &["softwareVersion"],
        then: "softwareName",
    },
    CompletenessRule::AllOrNone {
        attribute: "geographicBoundingBox",
        members: &[
            "westLongitude",
            "eastLongitude",
            "northLongitude",
            "southLongitude",
        ],
    },
    CompletenessRule::Requires {
        attribute: "targetSampleSize",
        when: &["targetSampleSizeFormula"],
        then: "targetSampleActualSize",
    },
];

static DATAVERSE_RULES: &[CompletenessRule] = &[CompletenessRule::Mandatory {
    attribute: "dataverseContacts",
    subfield: "contactEmail",
}];

/// Per-block `displayName` attributes, modelled as plain scalars.
static DISPLAY_NAMES: [AttributeSpec; 4] = [
    AttributeSpec::primitive("citation_displayName"),
    AttributeSpec::primitive("geospatial_displayName"),
    AttributeSpec::primitive("socialscience_displayName"),
    AttributeSpec::primitive("journal_displayName"),
];

lazy_static! {
    static ref DATAVERSE: Registry = Registry::build(
        EntityKind::Dataverse,
        dataverse::FIELDS
            .iter()
            .map(|spec| Entry::new(Location::Root, spec))
            .collect(),
        dataverse::REQUIRED,
        DATAVERSE_RULES,
    );
    static ref DATASET: Registry = Registry::build(
        EntityKind::Dataset,
        dataset_entries(),
        DATASET_REQUIRED,
        DATASET_RULES,
    );
    static ref DATAFILE: Registry = Registry::build(
        EntityKind::Datafile,
        datafile::FIELDS
            .iter()
            .map(|spec| Entry::new(Location::Root, spec))
            .collect(),
        datafile::REQUIRED,
        &[],
    );
}

fn dataset_entries() -> Vec<Entry> {
    let mut entries: Vec<Entry> = terms::FIELDS
        .iter()
        .map(|spec| Entry::new(Location::Version, spec))
        .collect();

    for (block, display_name) in MetadataBlock::ALL.into_iter().zip(DISPLAY_NAMES.iter()) {
        entries.push(Entry::new(Location::DisplayName(block), display_name));
        entries.extend(
            block
                .fields()
                .iter()
                .map(|spec| Entry::new(Location::Block(block), spec)),
        );
    }

    entries
}

/// A recognized attribute together with where it is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub location: Location,
    pub spec: &'static AttributeSpec,
}

impl Entry {
    fn new(location: Location, spec: &'static AttributeSpec) -> Self {
        Entry { location, spec }
    }

    pub fn name(&self) -> &'static str {
        self.spec.name
    }
}

/// Read-only index over the attribute tables of one entity kind.
///
/// Lookups on names the registry does not know return `None` (or an empty
/// slice); deciding what to do with unknown names is up to the caller.
#[derive(Debug)]
pub struct Registry {
    kind: EntityKind,
    entries: Vec<Entry>,
    index: HashMap<&'static str, usize>,
    subfield_classes: HashMap<&'static str, TypeClass>,
    required: &'static [&'static str],
    rules: &'static [CompletenessRule],
}

impl Registry {
    fn build(
        kind: EntityKind,
        entries: Vec<Entry>,
        required: &'static [&'static str],
        rules: &'static [CompletenessRule],
    ) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.name(), position))
            .collect();

        let subfield_classes = entries
            .iter()
            .flat_map(|entry| entry.spec.subfields.iter())
            .map(|sub| (sub.name, sub.type_class))
            .collect();

        Registry {
            kind,
            entries,
            index,
            subfield_classes,
            required,
            rules,
        }
    }

    /// The shared registry of the given entity kind.
    pub fn for_kind(kind: EntityKind) -> &'static Registry {
        match kind {
            EntityKind::Dataverse => &DATAVERSE,
            EntityKind::Dataset => &DATASET,
            EntityKind::Datafile => &DATAFILE,
        }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// All recognized attributes in canonical emission order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Recognized attributes stored at `location`, in canonical order.
    pub fn entries_at(&self, location: Location) -> impl Iterator<Item = &Entry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.location == location)
    }

    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|position| &self.entries[*position])
    }

    pub fn is_recognized(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn location_of(&self, name: &str) -> Option<Location> {
        self.lookup(name).map(|entry| entry.location)
    }

    /// The metadata block owning `name`, if it is a block attribute.
    pub fn block_of(&self, name: &str) -> Option<MetadataBlock> {
        self.location_of(name).and_then(|location| location.block())
    }

    pub fn shape_of(&self, name: &str) -> Option<FieldShape> {
        self.lookup(name).map(|entry| entry.spec.shape)
    }

    /// Declared sub-attributes of a struct-shaped attribute, in canonical order.
    pub fn subfields_of(&self, name: &str) -> &'static [SubfieldSpec] {
        self.lookup(name)
            .map(|entry| entry.spec.subfields)
            .unwrap_or(&[])
    }

    /// Type class of either a top-level attribute or a sub-attribute.
    pub fn type_class_of(&self, name: &str) -> Option<TypeClass> {
        self.lookup(name)
            .map(|entry| entry.spec.type_class)
            .or_else(|| self.subfield_classes.get(name).copied())
    }

    pub fn required_attributes(&self) -> &'static [&'static str] {
        self.required
    }

    pub fn completeness_rules(&self) -> &'static [CompletenessRule] {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn attribute_names_are_unique_per_kind() {
        for kind in EntityKind::ALL {
            let registry = Registry::for_kind(kind);
            assert_eq!(
                registry.entries().len(),
                registry.index.len(),
                "duplicate attribute name in the {kind} tables"
            );
        }
    }

    #[test]
    fn subfield_names_do_not_shadow_attributes() {
        let registry = Registry::for_kind(EntityKind::Dataset);
        let mut seen = HashSet::new();

        for entry in registry.entries() {
            for sub in entry.spec.subfields {
                assert!(!registry.is_recognized(sub.name), "{} is both", sub.name);
                assert!(seen.insert(sub.name), "{} declared twice", sub.name);
            }
        }
    }

    #[test]
    fn classifies_dataset_attributes() {
        let registry = Registry::for_kind(EntityKind::Dataset);

        assert_eq!(registry.block_of("title"), Some(MetadataBlock::Citation));
        assert_eq!(
            registry.block_of("geographicBoundingBox"),
            Some(MetadataBlock::Geospatial)
        );
        assert_eq!(
            registry.block_of("socialScienceNotes"),
            Some(MetadataBlock::SocialScience)
        );
        assert_eq!(
            registry.block_of("journal_displayName"),
            Some(MetadataBlock::Journal)
        );
        assert_eq!(registry.block_of("license"), None);
        assert_eq!(registry.location_of("license"), Some(Location::Version));
        assert_eq!(registry.block_of("unknownThing"), None);

        assert_eq!(registry.shape_of("title"), Some(FieldShape::Scalar));
        assert_eq!(registry.shape_of("subject"), Some(FieldShape::ListOfScalar));
        assert_eq!(registry.shape_of("author"), Some(FieldShape::ListOfStruct));
        assert_eq!(registry.shape_of("series"), Some(FieldShape::SingleStruct));
        assert_eq!(
            registry.shape_of("targetSampleSize"),
            Some(FieldShape::SingleStruct)
        );
        assert_eq!(registry.shape_of("authorName"), None);
    }

    #[test]
    fn lists_subfields_in_canonical_order() {
        let registry = Registry::for_kind(EntityKind::Dataset);
        let names: Vec<&str> = registry
            .subfields_of("author")
            .iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "authorName",
                "authorAffiliation",
                "authorIdentifierScheme",
                "authorIdentifier"
            ]
        );
        assert!(registry.subfields_of("title").is_empty());
        assert!(registry.subfields_of("nope").is_empty());
    }

    #[test]
    fn resolves_type_classes_for_attributes_and_subfields() {
        let registry = Registry::for_kind(EntityKind::Dataset);

        assert_eq!(registry.type_class_of("title"), Some(TypeClass::Primitive));
        assert_eq!(registry.type_class_of("author"), Some(TypeClass::Compound));
        assert_eq!(
            registry.type_class_of("subject"),
            Some(TypeClass::ControlledVocabulary)
        );
        assert_eq!(
            registry.type_class_of("authorIdentifierScheme"),
            Some(TypeClass::ControlledVocabulary)
        );
        assert_eq!(
            registry.type_class_of("country"),
            Some(TypeClass::ControlledVocabulary)
        );
        assert_eq!(
            registry.type_class_of("authorName"),
            Some(TypeClass::Primitive)
        );
        assert_eq!(registry.type_class_of("nope"), None);
    }

    #[test]
    fn required_attributes_are_recognized() {
        for kind in EntityKind::ALL {
            let registry = Registry::for_kind(kind);
            for name in registry.required_attributes() {
                assert!(registry.is_recognized(name), "{name} is not in {kind}");
            }
        }
    }

    #[test]
    fn completeness_rules_reference_declared_subfields() {
        for kind in EntityKind::ALL {
            let registry = Registry::for_kind(kind);
            for rule in registry.completeness_rules() {
                let entry = registry
                    .lookup(rule.attribute())
                    .unwrap_or_else(|| panic!("{} is not recognized", rule.attribute()));
                assert!(entry.spec.shape.is_struct());

                let named: Vec<&str> = match rule {
                    CompletenessRule::Mandatory { subfield, .. } => vec![*subfield],
                    CompletenessRule::Requires { when, then, .. } => {
                        when.iter().copied().chain([*then]).collect()
                    }
                    CompletenessRule::AllOrNone { members, .. } => members.to_vec(),
                };

                for sub in named {
                    assert!(entry.spec.subfield(sub).is_some(), "{sub} not declared");
                }
            }
        }
    }

    #[test]
    fn dataset_canonical_order_starts_with_version_terms() {
        let registry = Registry::for_kind(EntityKind::Dataset);
        let first_block = registry
            .entries()
            .iter()
            .position(|e| e.location != Location::Version)
            .unwrap();

        assert_eq!(first_block, terms::FIELDS.len());
        assert_eq!(
            registry.entries()[first_block].location,
            Location::DisplayName(MetadataBlock::Citation)
        );
        assert_eq!(registry.entries_at(Location::Block(MetadataBlock::Journal)).count(), 2);
    }
}
