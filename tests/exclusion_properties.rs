//! Exclusion Property Tests
//!
//! Randomized flag combinations checked against the exclusion rules:
//! - no output-excluded name is ever serialized
//! - no input-excluded field is ever assigned
//! - unflagged fields round-trip unchanged
//! - lists keep their order and length

use std::sync::Arc;

use aerojson::{codec, Direction, Document, DocumentType, ExclusionFlags, FieldDef};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn flags() -> impl Strategy<Value = ExclusionFlags> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(to, from, both)| ExclusionFlags::new(to, from, both))
}

fn flat_model(cases: &[(ExclusionFlags, i64)]) -> (Arc<DocumentType>, Map<String, Value>) {
    let fields = cases
        .iter()
        .enumerate()
        .map(|(i, (flags, _))| {
            FieldDef::int(format!("f{}", i)).annotate(
                flags.exclude_to_json,
                flags.exclude_from_json,
                flags.exclude_json,
            )
        })
        .collect();
    let values = cases
        .iter()
        .enumerate()
        .map(|(i, (_, value))| (format!("f{}", i), json!(value)))
        .collect();

    (Arc::new(DocumentType::new("prop", "v1", fields)), values)
}

fn flag_cases() -> impl Strategy<Value = Vec<(ExclusionFlags, i64)>> {
    prop::collection::vec((flags(), any::<i64>()), 1..12)
}

proptest! {
    #[test]
    fn output_contains_exactly_visible_fields(cases in flag_cases()) {
        let (doc_type, values) = flat_model(&cases);
        let document = Document::with_values(doc_type, Value::Object(values)).unwrap();
        let output = codec::to_json_value(&document);
        let output = output.as_object().unwrap();

        for (i, (flags, value)) in cases.iter().enumerate() {
            let name = format!("f{}", i);
            if flags.excludes(Direction::Output) {
                prop_assert!(!output.contains_key(&name));
            } else {
                let expected = json!(value);
                prop_assert_eq!(output.get(&name), Some(&expected));
            }
        }
    }

    #[test]
    fn input_never_assigns_excluded_fields(cases in flag_cases()) {
        let (doc_type, values) = flat_model(&cases);
        let document = codec::from_json_value(doc_type, &Value::Object(values)).unwrap();

        for (i, (flags, value)) in cases.iter().enumerate() {
            let name = format!("f{}", i);
            if flags.excludes(Direction::Input) {
                prop_assert!(document.get(&name).is_none());
            } else {
                let expected = json!(value);
                prop_assert_eq!(document.get(&name), Some(&expected));
            }
        }
    }

    #[test]
    fn unflagged_fields_round_trip(values in prop::collection::vec(any::<i64>(), 1..12)) {
        let cases: Vec<(ExclusionFlags, i64)> =
            values.iter().map(|v| (ExclusionFlags::NONE, *v)).collect();
        let (doc_type, values) = flat_model(&cases);

        let document =
            Document::with_values(Arc::clone(&doc_type), Value::Object(values.clone())).unwrap();
        let text = document.to_json().unwrap();
        let back = Document::from_json(doc_type, &text).unwrap();

        prop_assert_eq!(back.stored_values(), values);
    }

    #[test]
    fn list_elements_filtered_in_place(
        list_flags in flags(),
        element_flags in flags(),
        names in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let element_fields = vec![
            FieldDef::string("name"),
            FieldDef::string("extra").annotate(
                element_flags.exclude_to_json,
                element_flags.exclude_from_json,
                element_flags.exclude_json,
            ),
        ];
        let doc_type = Arc::new(DocumentType::new(
            "prop",
            "v1",
            vec![FieldDef::list_of_embedded("items", element_fields).annotate(
                list_flags.exclude_to_json,
                list_flags.exclude_from_json,
                list_flags.exclude_json,
            )],
        ));
        let items: Vec<Value> = names.iter().map(|n| json!({ "name": n, "extra": "x" })).collect();
        let input = json!({ "items": items });

        let document = Document::with_values(Arc::clone(&doc_type), input.clone()).unwrap();
        let output = codec::to_json_value(&document);
        check_list(&output, &names, list_flags, element_flags, Direction::Output)?;

        let document = codec::from_json_value(doc_type, &input).unwrap();
        let stored = Value::Object(document.stored_values());
        check_list(&stored, &names, list_flags, element_flags, Direction::Input)?;
    }
}

fn check_list(
    container: &Value,
    names: &[String],
    list_flags: ExclusionFlags,
    element_flags: ExclusionFlags,
    direction: Direction,
) -> Result<(), TestCaseError> {
    if list_flags.excludes(direction) {
        prop_assert!(container.get("items").is_none());
        return Ok(());
    }

    let items = container["items"].as_array().unwrap();
    prop_assert_eq!(items.len(), names.len());
    for (item, name) in items.iter().zip(names) {
        let expected = json!(name);
        prop_assert_eq!(&item["name"], &expected);
        prop_assert_eq!(item.get("extra").is_some(), !element_flags.excludes(direction));
    }
    Ok(())
}
