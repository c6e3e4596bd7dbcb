use super::{AttributeSpec, SubfieldSpec};

const JOURNAL_VOLUME_ISSUE: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("journalVolume"),
    SubfieldSpec::primitive("journalIssue"),
    SubfieldSpec::primitive("journalPubDate"),
];

pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::compound_list("journalVolumeIssue", JOURNAL_VOLUME_ISSUE),
    AttributeSpec::vocabulary("journalArticleType"),
];
