use super::{AttributeSpec, SubfieldSpec};

const TARGET_SAMPLE_SIZE: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("targetSampleActualSize"),
    SubfieldSpec::primitive("targetSampleSizeFormula"),
];

const SOCIAL_SCIENCE_NOTES: &[SubfieldSpec] = &[
    SubfieldSpec::primitive("socialScienceNotesType"),
    SubfieldSpec::primitive("socialScienceNotesSubject"),
    SubfieldSpec::primitive("socialScienceNotesText"),
];

pub(crate) static FIELDS: &[AttributeSpec] = &[
    AttributeSpec::primitive_list("unitOfAnalysis"),
    AttributeSpec::primitive_list("universe"),
    AttributeSpec::primitive("timeMethod"),
    AttributeSpec::primitive("dataCollector"),
    AttributeSpec::primitive("collectorTraining"),
    AttributeSpec::primitive("frequencyOfDataCollection"),
    AttributeSpec::primitive("samplingProcedure"),
    AttributeSpec::compound("targetSampleSize", TARGET_SAMPLE_SIZE),
    AttributeSpec::primitive("deviationsFromSampleDesign"),
    AttributeSpec::primitive("collectionMode"),
    AttributeSpec::primitive("researchInstrument"),
    AttributeSpec::primitive("dataCollectionSituation"),
    AttributeSpec::primitive("actionsToMinimizeLoss"),
    AttributeSpec::primitive("controlOperations"),
    AttributeSpec::primitive("weighting"),
    AttributeSpec::primitive("cleaningOperations"),
    AttributeSpec::primitive("datasetLevelErrorNotes"),
    AttributeSpec::primitive("responseRate"),
    AttributeSpec::primitive("samplingErrorEstimates"),
    AttributeSpec::primitive("otherDataAppraisal"),
    AttributeSpec::compound("socialScienceNotes", SOCIAL_SCIENCE_NOTES),
];
