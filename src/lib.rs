//! json-annotate - annotate the objects at a JSON path by identifier
//!
//! Given a JSON document, a slash-delimited path to an array (or a single
//! object), and a field that identifies each element, json-annotate writes a
//! new field on every element: a match value for identifiers in a set, or the
//! value an identifier maps to, with a default for the rest.
//!
//! # Quick Start
//!
//! ```
//! use json_annotate::Annotator;
//!
//! let json = r#"{"test":{"project":[{"name":"BackOffice"},{"name":"API"}]}}"#;
//! let out = Annotator::new()
//!     .modify_by_identifier_set(json, "test/project", ["BackOffice"], "name", "status", "true", Some("false"))
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     r#"{"test":{"project":[{"name":"BackOffice","status":"true"},{"name":"API","status":"false"}]}}"#
//! );
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`] which provides a command-based API.
//! The [`Annotator`] struct provides a convenient high-level interface.
//!
//! Traversal, mutation and rewrite live in the engine crate and are not
//! exposed beyond the types the API needs.

// Re-export the public API from annotate-executor
pub use annotate_executor::*;
