//! Documented input/output pairs.

use crate::common::*;

#[test]
fn test_membership_marks_listed_projects() {
    let out = annotator()
        .modify_by_identifier_set(
            PROJECTS,
            "test/project",
            ["BackOffice"],
            "name",
            "status",
            "true",
            Some("false"),
        )
        .unwrap();
    assert_eq!(
        out,
        r#"{"test":{"name":"hazel","project":[{"name":"BackOffice","language":"JAVA","status":"true"},{"name":"API","language":"JAVA","status":"false"}]}}"#
    );
}

#[test]
fn test_lookup_with_default_for_unmapped_manager() {
    let out = annotator()
        .modify_by_identifier_map(
            ROSTER,
            "team/members",
            [("kelvin", "휴가중"), ("hazel", "근무중")],
            "manager",
            "status",
            Some("퇴사"),
        )
        .unwrap();
    assert_eq!(
        out,
        r#"{"team":{"name":"platform","members":[{"manager":"kelvin","role":"lead","status":"휴가중"},{"manager":"hazel","role":"dev","status":"근무중"},{"manager":"jeibi","role":"dev","status":"퇴사"}]}}"#
    );
}

#[test]
fn test_single_object_becomes_one_element_array() {
    let out = annotator()
        .modify_by_identifier_set(
            r#"{"test":{"project":{"name":"API","language":"RUST"}}}"#,
            "test/project",
            ["API"],
            "name",
            "status",
            "true",
            Some("false"),
        )
        .unwrap();
    assert_eq!(
        out,
        r#"{"test":{"project":[{"name":"API","language":"RUST","status":"true"}]}}"#
    );
}

#[test]
fn test_missing_default_writes_json_null() {
    let out = annotator()
        .modify_by_identifier_set(PROJECTS, "test/project", ["API"], "name", "status", "true", None)
        .unwrap();
    let doc = parse(&out);
    let projects = elements_at(&doc, "test/project");
    assert_eq!(projects[0]["status"], Value::Null);
    assert_eq!(projects[1]["status"], json!("true"));
    assert!(out.contains(r#""status":null"#));
}

#[test]
fn test_non_object_members_are_dropped() {
    let out = annotator()
        .modify_by_identifier_map(
            r#"{"a":{"b":[{"k":"1"},"text",42,null,[1],{"k":"2"}]}}"#,
            "a/b",
            [("2", "two")],
            "k",
            "v",
            None,
        )
        .unwrap();
    assert_eq!(out, r#"{"a":{"b":[{"k":"1","v":null},{"k":"2","v":"two"}]}}"#);
}

#[test]
fn test_existing_target_field_is_overwritten_in_place() {
    let out = annotator()
        .modify_by_identifier_set(
            r#"{"a":[{"status":"old","id":"x"}]}"#,
            "a",
            ["x"],
            "id",
            "status",
            "new",
            None,
        )
        .unwrap();
    assert_eq!(out, r#"{"a":[{"status":"new","id":"x"}]}"#);
}

#[test]
fn test_numeric_and_boolean_identifiers_match_their_text() {
    let out = annotator()
        .modify_by_identifier_map(
            r#"{"a":[{"id":7},{"id":1.50},{"id":true},{"id":"7"}]}"#,
            "a",
            [("7", "seven"), ("1.50", "price"), ("true", "yes")],
            "id",
            "label",
            None,
        )
        .unwrap();
    assert_eq!(
        out,
        r#"{"a":[{"id":7,"label":"seven"},{"id":1.50,"label":"price"},{"id":true,"label":"yes"},{"id":"7","label":"seven"}]}"#
    );
}

#[test]
fn test_sibling_members_keep_order_and_text() {
    let out = annotator()
        .modify_by_identifier_set(
            r#"{"z":1.000,"target":[{"id":"a"}],"a":"한글"}"#,
            "target",
            ["a"],
            "id",
            "hit",
            "y",
            None,
        )
        .unwrap();
    assert_eq!(out, r#"{"z":1.000,"target":[{"id":"a","hit":"y"}],"a":"한글"}"#);
}

#[test]
fn test_trailing_slash_is_ignored() {
    let annotator = annotator();
    let with = annotator
        .modify_by_identifier_set(PROJECTS, "test/project/", ["API"], "name", "s", "1", None)
        .unwrap();
    let without = annotator
        .modify_by_identifier_set(PROJECTS, "test/project", ["API"], "name", "s", "1", None)
        .unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_empty_array_stays_empty() {
    let out = annotator()
        .modify_by_identifier_set(r#"{"a":[]}"#, "a", ["x"], "id", "t", "y", None)
        .unwrap();
    assert_eq!(out, r#"{"a":[]}"#);
}

#[test]
fn test_annotate_reports_counts() {
    use json_annotate::{FieldRule, MutationPolicy, Output};

    let rule = FieldRule::new(
        "manager",
        "status",
        MutationPolicy::lookup([("kelvin", "휴가중")]),
        MissingIdentifier::TreatAsNoMatch,
    );
    match annotator().annotate(ROSTER, "team/members", rule).unwrap() {
        Output::Annotated { summary, .. } => {
            assert_eq!(summary.matched, 1);
            assert_eq!(summary.defaulted, 0);
            assert_eq!(summary.nulled, 2);
        }
        other => panic!("Expected Annotated output, got {:?}", other),
    }
}
