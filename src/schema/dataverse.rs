use super::{AttributeSpec, SubfieldSpec};

const DATAVERSE_CONTACTS: &[SubfieldSpec] = &[SubfieldSpec::primitive("contactEmail")];

pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::primitive("alias"),
    AttributeSpec::primitive("name"),
    AttributeSpec::compound_list("dataverseContacts", DATAVERSE_CONTACTS),
    AttributeSpec::primitive("affiliation"),
    AttributeSpec::primitive("description"),
    AttributeSpec::vocabulary("dataverseType"),
];

pub(crate) static REQUIRED: &[&str] = &["alias", "name", "dataverseContacts"];
