//! # Annotate Executor
//!
//! The public API for annotating JSON documents by identifier.
//!
//! This is the only crate users need to import. It provides:
//! - [`Annotator`] - typed methods for the two annotation operations
//! - [`Command`]/[`Output`]/[`Executor`] - serializable command interface
//! - [`Error`]/[`ErrorKind`] - structured errors, with the legacy message strings
//!
//! ## Quick Start
//!
//! ```
//! use annotate_executor::Annotator;
//!
//! let annotator = Annotator::new();
//! let json = r#"{"org": {"members": [{"manager": "kelvin"}, {"manager": "bob"}]}}"#;
//! let out = annotator
//!     .modify_by_identifier_map(json, "org/members", [("kelvin", "away")], "manager", "status", Some("here"))
//!     .unwrap();
//! assert_eq!(
//!     out,
//!     r#"{"org":{"members":[{"manager":"kelvin","status":"away"},{"manager":"bob","status":"here"}]}}"#
//! );
//! ```
//!
//! ## Operations
//!
//! | Operation | Written value |
//! |-----------|---------------|
//! | `modify_by_identifier_set` | match value if the identifier is in the set, else the default |
//! | `modify_by_identifier_map` | the identifier's mapped value, else the default |
//!
//! A single object at the path is rewritten as a one-element array unless the
//! config says `container = "preserve"`.

#![warn(missing_docs)]

mod api;
pub(crate) mod bridge;
mod command;
mod executor;
mod output;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use api::Annotator;
pub use command::Command;
pub use executor::Executor;
pub use output::Output;

pub use annotate_core::{
    Error, ErrorKind, JsonValue, LimitError, Result, SlashPath, LEGACY_MESSAGE_FAIL,
    LEGACY_MESSAGE_FORMAT_FAIL, LEGACY_MESSAGE_NO_DATA,
};
pub use annotate_engine::{
    AnnotateConfig, ContainerMode, FieldRule, MissingIdentifier, MissingIdentifierConfig,
    MutationPolicy, MutationSummary, OutputFormat, CONFIG_FILE_NAME,
};
