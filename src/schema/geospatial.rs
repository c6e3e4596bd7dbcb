use super::{AttributeSpec, SubfieldSpec};

const GEOGRAPHIC_COVERAGE: &[SubfieldSpec] = &[
    SubfieldSpec::vocabulary("country"),
    SubfieldSpec::primitive("state"),
    SubfieldSpec::primitive("city"),
    SubfieldSpec::primitive("otherGeographicCoverage"),
];

// The repository spells the latitude bounds as `*Longitude`.
const GEOGRAPHIC_BOUNDING_BOX: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("westLongitude"),
    SubfieldSpec::primitive("eastLongitude"),
    SubfieldSpec::primitive("northLongitude"),
    SubfieldSpec::primitive("southLongitude"),
];

pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::compound_list("geographicCoverage", GEOGRAPHIC_COVERAGE),
    AttributeSpec::primitive_list("geographicUnit"),
    AttributeSpec::compound_list("geographicBoundingBox", GEOGRAPHIC_BOUNDING_BOX),
];
