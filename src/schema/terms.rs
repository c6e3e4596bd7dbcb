use super::AttributeSpec;

/// Terms stored directly on `datasetVersion`, outside of the metadata blocks.
///
/// `fileAccessRequest` is a boolean and `license` may be a name or a
/// `{name, uri}` object; both are passed through untouched.
pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::primitive("license"),
    AttributeSpec::primitive("termsOfUse"),
    AttributeSpec::primitive("termsOfAccess"),
    AttributeSpec::primitive("fileAccessRequest"),
    AttributeSpec::primitive("confidentialityDeclaration"),
    AttributeSpec::primitive("specialPermissions"),
    AttributeSpec::primitive("restrictions"),
    AttributeSpec::primitive("citationRequirements"),
    AttributeSpec::primitive("depositorRequirements"),
    AttributeSpec::primitive("conditions"),
    AttributeSpec::primitive("disclaimer"),
    AttributeSpec::primitive("dataAccessPlace"),
    AttributeSpec::primitive("originalArchive"),
    AttributeSpec::primitive("availabilityStatus"),
    AttributeSpec::primitive("contactForAccess"),
    AttributeSpec::primitive("sizeOfCollection"),
    AttributeSpec::primitive("studyCompletion"),
];
