//! Shared test utilities for all integration test suites.
//!
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use std::sync::Once;

pub use json_annotate::{
    AnnotateConfig, Annotator, ErrorKind, MissingIdentifier, MissingIdentifierConfig,
};
pub use serde_json::{json, Value};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Route library `tracing` events to the test harness output.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

// ============================================================================
// Annotators
// ============================================================================

/// Annotator with the default configuration.
pub fn annotator() -> Annotator {
    init_tracing();
    Annotator::new()
}

/// Annotator that treats missing identifiers as unmatched in both operations.
pub fn lenient_annotator() -> Annotator {
    init_tracing();
    Annotator::with_config(AnnotateConfig {
        missing_identifier: MissingIdentifierConfig {
            set: MissingIdentifier::TreatAsNoMatch,
            map: MissingIdentifier::TreatAsNoMatch,
        },
        ..AnnotateConfig::default()
    })
}

// ============================================================================
// Fixtures
// ============================================================================

/// Project list used by the membership scenarios.
pub const PROJECTS: &str = r#"{"test":{"name":"hazel","project":[{"name":"BackOffice","language":"JAVA"},{"name":"API","language":"JAVA"}]}}"#;

/// Team roster used by the lookup scenarios, with insignificant whitespace.
pub const ROSTER: &str = r#"{
    "team": {
        "name": "platform",
        "members": [
            {"manager": "kelvin", "role": "lead"},
            {"manager": "hazel", "role": "dev"},
            {"manager": "jeibi", "role": "dev"}
        ]
    }
}"#;

// ============================================================================
// Assertions
// ============================================================================

/// Parse an output document, failing the test with the raw text otherwise.
pub fn parse(output: &str) -> Value {
    serde_json::from_str(output)
        .unwrap_or_else(|e| panic!("output is not JSON ({}): {}", e, output))
}

/// Elements of the array at a slash-delimited path of an output document.
pub fn elements_at<'a>(doc: &'a Value, path: &str) -> &'a Vec<Value> {
    let mut node = doc;
    for segment in path.split('/') {
        node = &node[segment];
    }
    node.as_array()
        .unwrap_or_else(|| panic!("expected array at '{}', found {}", path, node))
}
