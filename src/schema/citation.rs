use super::{AttributeSpec, SubfieldSpec};

const OTHER_ID: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("otherIdAgency"),
    SubfieldSpec::primitive("otherIdValue"),
];

const AUTHOR: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("authorName"),
    SubfieldSpec::primitive("authorAffiliation"),
    SubfieldSpec::vocabulary("authorIdentifierScheme"),
    SubfieldSpec::primitive("authorIdentifier"),
];

const DATASET_CONTACT: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("datasetContactName"),
    SubfieldSpec::primitive("datasetContactAffiliation"),
    SubfieldSpec::primitive("datasetContactEmail"),
];

const DS_DESCRIPTION: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("dsDescriptionValue"),
    SubfieldSpec::primitive("dsDescriptionDate"),
];

const KEYWORD: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("keywordValue"),
    SubfieldSpec::primitive("keywordVocabulary"),
    SubfieldSpec::primitive("keywordVocabularyURI"),
];

const TOPIC_CLASSIFICATION: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("topicClassValue"),
    SubfieldSpec::primitive("topicClassVocab"),
    SubfieldSpec::primitive("topicClassVocabURI"),
];

const PUBLICATION: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("publicationCitation"),
    SubfieldSpec::vocabulary("publicationIDType"),
    SubfieldSpec::primitive("publicationIDNumber"),
    SubfieldSpec::primitive("publicationURL"),
];

const PRODUCER: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("producerName"),
    SubfieldSpec::primitive("producerAffiliation"),
    SubfieldSpec::primitive("producerAbbreviation"),
    SubfieldSpec::primitive("producerURL"),
    SubfieldSpec::primitive("producerLogoURL"),
];

const CONTRIBUTOR: &[SubfieldSpec] = &[
    SubfieldSpec::vocabulary("contributorType"),
    SubfieldSpec::primitive("contributorName"),
];

const GRANT_NUMBER: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("grantNumberAgency"),
    SubfieldSpec::primitive("grantNumberValue"),
];

const DISTRIBUTOR: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("distributorName"),
    SubfieldSpec::primitive("distributorAffiliation"),
    SubfieldSpec::primitive("distributorAbbreviation"),
    SubfieldSpec::primitive("distributorURL"),
    SubfieldSpec::primitive("distributorLogoURL"),
];

const TIME_PERIOD_COVERED: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("timePeriodCoveredStart"),
    SubfieldSpec::primitive("timePeriodCoveredEnd"),
];

const DATE_OF_COLLECTION: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("dateOfCollectionStart"),
    SubfieldSpec::primitive("dateOfCollectionEnd"),
];

const SERIES: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("seriesName"),
    SubfieldSpec::primitive("seriesInformation"),
];

const SOFTWARE: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("softwareName"),
    SubfieldSpec::primitive("softwareVersion"),
];

/// Citation block, in the order the repository lists its fields.
pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::primitive("title"),
    AttributeSpec::primitive("subtitle"),
    AttributeSpec::primitive("alternativeTitle"),
    AttributeSpec::primitive("alternativeURL"),
    AttributeSpec::compound_list("otherId", OTHER_ID),
    AttributeSpec::compound_list("author", AUTHOR),
    AttributeSpec::compound_list("datasetContact", DATASET_CONTACT),
    AttributeSpec::compound_list("dsDescription", DS_DESCRIPTION),
    AttributeSpec::vocabulary_list("subject"),
    AttributeSpec::compound_list("keyword", KEYWORD),
    AttributeSpec::compound_list("topicClassification", TOPIC_CLASSIFICATION),
    AttributeSpec::compound_list("publication", PUBLICATION),
    AttributeSpec::primitive("notesText"),
    AttributeSpec::vocabulary_list("language"),
    AttributeSpec::compound_list("producer", PRODUCER),
    AttributeSpec::primitive("productionDate"),
    AttributeSpec::primitive("productionPlace"),
    AttributeSpec::compound_list("contributor", CONTRIBUTOR),
    AttributeSpec::compound_list("grantNumber", GRANT_NUMBER),
    AttributeSpec::compound_list("distributor", DISTRIBUTOR),
    AttributeSpec::primitive("distributionDate"),
    AttributeSpec::primitive("depositor"),
    AttributeSpec::primitive("dateOfDeposit"),
    AttributeSpec::compound_list("timePeriodCovered", TIME_PERIOD_COVERED),
    AttributeSpec::compound_list("dateOfCollection", DATE_OF_COLLECTION),
    AttributeSpec::primitive_list("kindOfData"),
    AttributeSpec::compound("series", SERIES),
    AttributeSpec::compound_list("software", SOFTWARE),
    AttributeSpec::primitive_list("relatedMaterial"),
    AttributeSpec::primitive_list("relatedDatasets"),
    AttributeSpec::primitive_list("otherReferences"),
    AttributeSpec::primitive_list("dataSources"),
    AttributeSpec::primitive("originOfSources"),
    AttributeSpec::primitive("characteristicOfSources"),
    AttributeSpec::primitive("accessToSources"),
];
