use serde_json::{json, Value};

use dvmodels::engine::{
    check_completeness, from_nested_document, to_nested_document, AttributeMap, DataFormat,
    DiagnosticKind,
};
use dvmodels::models::{Dataset, Entity};
use dvmodels::schema::{AttributeSpec, EntityKind, FieldShape, Registry};

const FINCHES_FLAT: &str = include_str!("fixtures/finches_flat.json");
const FINCHES_UPLOAD: &str = include_str!("fixtures/finches_upload.json");
const FINCHES_DOWNLOAD: &str = include_str!("fixtures/finches_download.json");

fn flat(content: &str) -> AttributeMap {
    serde_json::from_str(content).expect("fixture is not a JSON object")
}

fn document(content: &str) -> Value {
    serde_json::from_str(content).expect("fixture is not valid JSON")
}

fn citation_fields(document: &Value) -> &Vec<Value> {
    document
        .pointer("/datasetVersion/metadataBlocks/citation/fields")
        .and_then(Value::as_array)
        .expect("no citation fields")
}

#[test]
fn finches_serialize_to_the_expected_citation_block() {
    let attributes = flat(FINCHES_FLAT);

    let conversion = to_nested_document(&attributes, EntityKind::Dataset).unwrap();

    assert!(conversion.diagnostics.is_empty());
    assert_eq!(conversion.value, document(FINCHES_UPLOAD));

    let names: Vec<&str> = citation_fields(&conversion.value)
        .iter()
        .filter_map(|field| field["typeName"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["title", "author", "datasetContact", "dsDescription", "subject"]
    );
}

#[test]
fn finches_round_trip() {
    let attributes = flat(FINCHES_FLAT);

    let nested = to_nested_document(&attributes, EntityKind::Dataset)
        .unwrap()
        .value;
    let parsed =
        from_nested_document(&nested, EntityKind::Dataset, DataFormat::Upload, true).unwrap();

    assert!(parsed.diagnostics.is_empty());
    assert_eq!(parsed.value, attributes);
}

#[test]
fn serialization_is_byte_identical() {
    let attributes = flat(FINCHES_FLAT);

    let first = to_nested_document(&attributes, EntityKind::Dataset).unwrap().value;
    let second = to_nested_document(&attributes, EntityKind::Dataset).unwrap().value;

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn empty_values_produce_no_entries() {
    let mut attributes = flat(FINCHES_FLAT);
    attributes.insert("subtitle".to_string(), json!(""));
    attributes.insert("keyword".to_string(), json!([]));
    attributes.insert("series".to_string(), json!({}));
    attributes.insert("productionPlace".to_string(), Value::Null);
    attributes.insert("kindOfData".to_string(), json!([]));

    let nested = to_nested_document(&attributes, EntityKind::Dataset).unwrap().value;

    assert_eq!(citation_fields(&nested).len(), 5);
    assert_eq!(nested, document(FINCHES_UPLOAD));
}

#[test]
fn absent_sub_keys_are_not_emitted() {
    let mut attributes = flat(FINCHES_FLAT);
    attributes.insert("author".to_string(), json!([{"authorName": "Finch, Fiona"}]));

    let nested = to_nested_document(&attributes, EntityKind::Dataset).unwrap().value;
    let author = &citation_fields(&nested)[1]["value"][0];

    assert!(author.get("authorName").is_some());
    assert!(author.get("authorAffiliation").is_none());
}

#[test]
fn one_unknown_field_is_skipped() {
    let mut nested = document(FINCHES_UPLOAD);
    nested
        .pointer_mut("/datasetVersion/metadataBlocks/citation/fields")
        .and_then(Value::as_array_mut)
        .unwrap()
        .push(json!({
            "typeName": "beakColor",
            "typeClass": "primitive",
            "multiple": false,
            "value": "grey"
        }));

    let parsed =
        from_nested_document(&nested, EntityKind::Dataset, DataFormat::Upload, true).unwrap();

    assert_eq!(parsed.value, flat(FINCHES_FLAT));
    assert_eq!(parsed.diagnostics.len(), 1);
    let diagnostic = parsed.diagnostics.iter().next().unwrap();
    assert_eq!(diagnostic.kind, DiagnosticKind::UnknownAttribute);
    assert_eq!(
        diagnostic.path,
        "/datasetVersion/metadataBlocks/citation/fields/5"
    );
}

#[test]
fn required_attributes_are_enforced() {
    let mut dataset = Dataset::from_attributes(flat(FINCHES_FLAT)).into_value();
    assert!(dataset.validate().unwrap().is_valid());

    let title = dataset.remove("title").unwrap();
    let report = dataset.validate().unwrap();
    assert!(!report.is_valid());
    assert_eq!(
        report
            .violations()
            .map(|d| d.path.as_str())
            .collect::<Vec<_>>(),
        vec!["/title"]
    );

    dataset.set("title", title).unwrap();
    assert!(dataset.validate().unwrap().is_valid());
}

#[test]
fn bounding_box_elements_are_checked_one_by_one() {
    let mut attributes = AttributeMap::new();
    attributes.insert(
        "geographicBoundingBox".to_string(),
        json!([{"westLongitude": "10", "eastLongitude": "20", "northLongitude": "30", "southLongitude": "40"}]),
    );

    let nested = to_nested_document(&attributes, EntityKind::Dataset).unwrap().value;
    let fields = nested
        .pointer("/datasetVersion/metadataBlocks/geospatial/fields")
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["typeName"], "geographicBoundingBox");
    let element = fields[0]["value"][0].as_object().unwrap();
    for key in ["westLongitude", "eastLongitude", "northLongitude", "southLongitude"] {
        assert!(element.contains_key(key), "{key} is missing");
    }

    attributes.insert(
        "geographicBoundingBox".to_string(),
        json!([
            {"westLongitude": "10", "eastLongitude": "20", "northLongitude": "30", "southLongitude": "40"},
            {"westLongitude": "11", "eastLongitude": "21", "northLongitude": "31"},
            {"westLongitude": "12", "eastLongitude": "22", "northLongitude": "32", "southLongitude": "42"}
        ]),
    );
    let diagnostics = check_completeness(&attributes, EntityKind::Dataset);
    let paths: Vec<&str> = diagnostics
        .of_kind(DiagnosticKind::IncompleteGroup)
        .map(|d| d.path.as_str())
        .collect();

    assert_eq!(paths, vec!["/geographicBoundingBox/1"]);
}

#[test]
fn empty_attributes_have_no_blocks() {
    let nested = to_nested_document(&AttributeMap::new(), EntityKind::Dataset)
        .unwrap()
        .value;

    assert_eq!(nested, json!({"datasetVersion": {"metadataBlocks": {}}}));
}

#[test]
fn download_documents_are_read() {
    let downloaded = document(FINCHES_DOWNLOAD);

    let dataset = Dataset::from_json(&downloaded, DataFormat::Download, true).unwrap();

    assert!(dataset.diagnostics.is_empty());
    let dataset = dataset.into_value();
    assert_eq!(dataset.get("title"), Some(&json!("Darwin's Finches")));
    assert_eq!(dataset.get("depositor"), Some(&json!("Finch, Fiona")));
    assert_eq!(dataset.get("fileAccessRequest"), Some(&json!(true)));
    assert_eq!(
        dataset.get("geospatial_displayName"),
        Some(&json!("Geospatial Metadata"))
    );
    assert!(dataset.get("versionState").is_none());
    assert!(dataset.is_valid().is_valid());
}

#[test]
fn downloaded_datasets_can_be_uploaded_again() {
    let downloaded = Dataset::from_json(&document(FINCHES_DOWNLOAD), DataFormat::Download, false)
        .unwrap()
        .into_value();

    let upload = downloaded.to_json().unwrap().value;
    let again = Dataset::from_json(&upload, DataFormat::Upload, true)
        .unwrap()
        .into_value();

    assert_eq!(again, downloaded);
    assert_eq!(
        upload.pointer("/datasetVersion/license/name"),
        Some(&json!("CC0 1.0"))
    );
}

/// A value for every declared sub-field of a struct attribute.
fn full_struct(spec: &AttributeSpec, tag: &str) -> Value {
    spec.subfields
        .iter()
        .map(|sub| (sub.name.to_string(), json!(format!("{}-{tag}", sub.name))))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// A schema-valid value of the declared shape for `spec`.
fn sample_value(spec: &AttributeSpec) -> Value {
    match (spec.name, spec.shape) {
        ("restrict" | "tabIngest" | "fileAccessRequest", _) => json!(true),
        ("dataverseType", _) => json!("RESEARCH_GROUP"),
        (name, FieldShape::Scalar) => json!(format!("{name}-value")),
        (name, FieldShape::ListOfScalar) => json!([format!("{name}-1"), format!("{name}-2")]),
        (_, FieldShape::ListOfStruct) => json!([full_struct(spec, "1"), full_struct(spec, "2")]),
        (_, FieldShape::SingleStruct) => full_struct(spec, "only"),
    }
}

#[test]
fn every_registered_attribute_round_trips_for_every_kind() {
    for kind in EntityKind::ALL {
        let attributes: AttributeMap = Registry::for_kind(kind)
            .entries()
            .iter()
            .map(|entry| (entry.name().to_string(), sample_value(entry.spec)))
            .collect();

        let nested = to_nested_document(&attributes, kind).unwrap();
        assert!(nested.diagnostics.is_empty(), "{kind}: {:?}", nested.diagnostics);

        let parsed = from_nested_document(&nested.value, kind, DataFormat::Upload, true)
            .unwrap_or_else(|error| panic!("{kind}: {error}"));

        assert!(parsed.diagnostics.is_empty(), "{kind}: {:?}", parsed.diagnostics);
        assert_eq!(parsed.value, attributes, "{kind} did not round trip");
    }
}
