//! `annotate.toml` driven behavior.

use crate::common::*;
use json_annotate::{ContainerMode, OutputFormat, CONFIG_FILE_NAME};

#[test]
fn test_default_config_file_reproduces_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);

    let annotator = Annotator::from_config_file(&path).unwrap();
    assert_eq!(annotator.config(), &AnnotateConfig::default());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, AnnotateConfig::default_toml());
}

#[test]
fn test_existing_config_file_is_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "output = \"pretty\"\n").unwrap();

    let annotator = Annotator::from_config_file(&path).unwrap();
    assert_eq!(annotator.config().output, OutputFormat::Pretty);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "output = \"pretty\"\n");
}

#[test]
fn test_preserve_keeps_single_object_target() {
    let annotator = Annotator::with_config(AnnotateConfig {
        container: ContainerMode::Preserve,
        ..AnnotateConfig::default()
    });
    let out = annotator
        .modify_by_identifier_set(
            r#"{"test":{"project":{"name":"API"}}}"#,
            "test/project",
            ["API"],
            "name",
            "status",
            "true",
            None,
        )
        .unwrap();
    assert_eq!(out, r#"{"test":{"project":{"name":"API","status":"true"}}}"#);

    // Arrays are arrays either way
    let out = annotator
        .modify_by_identifier_set(PROJECTS, "test/project", ["API"], "name", "status", "true", None)
        .unwrap();
    assert!(out.contains(r#""project":["#));
}

#[test]
fn test_pretty_output_parses_to_compact_equivalent() {
    let pretty = Annotator::with_config(AnnotateConfig {
        output: OutputFormat::Pretty,
        ..AnnotateConfig::default()
    });
    let a = pretty
        .modify_by_identifier_set(PROJECTS, "test/project", ["API"], "name", "s", "1", Some("0"))
        .unwrap();
    let b = annotator()
        .modify_by_identifier_set(PROJECTS, "test/project", ["API"], "name", "s", "1", Some("0"))
        .unwrap();
    assert!(a.contains('\n'));
    assert_eq!(parse(&a), parse(&b));
}

#[test]
fn test_lenient_set_config_defaults_missing_identifiers() {
    let out = lenient_annotator()
        .modify_by_identifier_set(
            r#"{"a":[{"id":"x"},{"other":1}]}"#,
            "a",
            ["x"],
            "id",
            "t",
            "y",
            Some("n"),
        )
        .unwrap();
    assert_eq!(out, r#"{"a":[{"id":"x","t":"y"},{"other":1,"t":"n"}]}"#);
}

#[test]
fn test_strict_map_config_fails_missing_identifiers() {
    let strict = Annotator::with_config(AnnotateConfig {
        missing_identifier: MissingIdentifierConfig {
            map: MissingIdentifier::Fail,
            ..MissingIdentifierConfig::default()
        },
        ..AnnotateConfig::default()
    });
    let err = strict
        .modify_by_identifier_map(r#"{"a":[{"other":1}]}"#, "a", [("x", "y")], "id", "t", None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingIdentifier);
}

#[test]
fn test_invalid_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "container = \"sideways\"\n").unwrap();

    let err = Annotator::from_config_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}
