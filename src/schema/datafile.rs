use super::AttributeSpec;

pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::primitive("pid"),
    AttributeSpec::primitive("filename"),
    AttributeSpec::primitive("description"),
    AttributeSpec::primitive("label"),
    AttributeSpec::primitive("directoryLabel"),
    AttributeSpec::primitive_list("categories"),
    AttributeSpec::primitive("restrict"),
    AttributeSpec::primitive("tabIngest"),
];

pub(crate) static REQUIRED: &[&str] = &["pid", "filename"];
