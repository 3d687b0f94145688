//! Property-based shape and policy invariants.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use crate::common::*;

const TARGET: &str = "__annotation";

/// One array member: an object with optional identifier, or a scalar.
#[derive(Debug, Clone)]
enum Member {
    Object {
        id: Option<String>,
        payload: i64,
        note: String,
    },
    Scalar(i64),
}

impl Member {
    fn to_value(&self) -> Value {
        match self {
            Member::Object { id, payload, note } => {
                let mut obj = serde_json::Map::new();
                if let Some(id) = id {
                    obj.insert("id".into(), json!(id));
                }
                obj.insert("payload".into(), json!(payload));
                obj.insert("note".into(), json!(note));
                Value::Object(obj)
            }
            Member::Scalar(n) => json!(n),
        }
    }
}

fn member() -> impl Strategy<Value = Member> {
    prop_oneof![
        4 => (
            prop::option::weighted(0.9, "[a-e]"),
            any::<i64>(),
            "[a-z가-힣 ]{0,8}",
        )
            .prop_map(|(id, payload, note)| Member::Object { id, payload, note }),
        1 => any::<i64>().prop_map(Member::Scalar),
    ]
}

fn document(members: &[Member]) -> (String, Vec<Value>) {
    let values: Vec<Value> = members.iter().map(Member::to_value).collect();
    let doc = json!({"outer": {"before": true, "list": values.clone(), "after": "x"}});
    (doc.to_string(), values)
}

fn input_objects(values: &[Value]) -> Vec<&serde_json::Map<String, Value>> {
    values.iter().filter_map(Value::as_object).collect()
}

proptest! {
    #[test]
    fn properties_membership_shape_and_determinism(
        members in prop::collection::vec(member(), 0..20),
        identifiers in prop::collection::btree_set("[a-e]", 0..4),
        default in prop::option::of("[x-z]{1,3}"),
    ) {
        let (json, values) = document(&members);
        let out = lenient_annotator()
            .modify_by_identifier_set(
                &json,
                "outer/list",
                identifiers.iter().cloned(),
                "id",
                TARGET,
                "MATCH",
                default.as_deref(),
            )
            .unwrap();

        let doc = parse(&out);
        let output = elements_at(&doc, "outer/list");
        let inputs = input_objects(&values);

        // Non-object members are gone, objects keep their order
        prop_assert_eq!(output.len(), inputs.len());

        for (input, written) in inputs.iter().zip(output) {
            let written = written.as_object().unwrap();
            let id = input.get("id").and_then(Value::as_str);
            let expected = match (id.filter(|id| identifiers.contains(*id)), &default) {
                (Some(_), _) => json!("MATCH"),
                (None, Some(d)) => json!(d),
                (None, None) => Value::Null,
            };
            prop_assert_eq!(&written[TARGET], &expected);

            // Every other field is untouched
            let mut rest = written.clone();
            rest.remove(TARGET);
            prop_assert_eq!(&rest, *input);
        }

        // Siblings of the target are untouched
        prop_assert_eq!(&doc["outer"]["before"], &json!(true));
        prop_assert_eq!(&doc["outer"]["after"], &json!("x"));
    }

    #[test]
    fn properties_lookup_determinism(
        members in prop::collection::vec(member(), 0..20),
        mapping in prop::collection::btree_map("[a-e]", "[A-Z]{1,4}", 0..5),
        default in prop::option::of("[x-z]{1,3}"),
    ) {
        let (json, values) = document(&members);
        let out = annotator()
            .modify_by_identifier_map(
                &json,
                "outer/list",
                mapping.clone(),
                "id",
                TARGET,
                default.as_deref(),
            )
            .unwrap();

        let doc = parse(&out);
        let output = elements_at(&doc, "outer/list");
        let inputs = input_objects(&values);
        prop_assert_eq!(output.len(), inputs.len());

        for (input, written) in inputs.iter().zip(output) {
            let id = input.get("id").and_then(Value::as_str);
            let expected = match (id.and_then(|id| mapping.get(id)), &default) {
                (Some(v), _) => json!(v),
                (None, Some(d)) => json!(d),
                (None, None) => Value::Null,
            };
            prop_assert_eq!(&written[TARGET], &expected);
        }
    }

    #[test]
    fn properties_failure_produces_no_document(
        members in prop::collection::vec(member(), 1..10),
        missing in "[a-z]{1,6}",
    ) {
        let (json, _) = document(&members);
        let path = format!("outer/{}_missing", missing);
        let annotator = annotator();
        let err = annotator
            .modify_by_identifier_map(&json, &path, BTreeMap::<String, String>::new(), "id", TARGET, None)
            .unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::NotFound);

        let legacy = annotator.modify_by_identifier_set_or_message(
            &json,
            &path,
            BTreeSet::<String>::new(),
            "id",
            TARGET,
            "MATCH",
            None,
        );
        prop_assert_eq!(legacy, err.legacy_message());
    }

    #[test]
    fn properties_annotating_twice_is_stable(
        members in prop::collection::vec(member(), 0..12),
        identifiers in prop::collection::btree_set("[a-e]", 0..4),
    ) {
        let (json, _) = document(&members);
        let annotator = lenient_annotator();
        let once = annotator
            .modify_by_identifier_set(&json, "outer/list", identifiers.clone(), "id", TARGET, "M", Some("D"))
            .unwrap();
        let twice = annotator
            .modify_by_identifier_set(&once, "outer/list", identifiers, "id", TARGET, "M", Some("D"))
            .unwrap();
        prop_assert_eq!(once, twice);
    }
}
