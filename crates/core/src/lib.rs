//! Core types for json-annotate
//!
//! This crate defines the foundational types used throughout the pipeline:
//! - JsonValue: the document tree (newtype over serde_json::Value)
//! - SlashPath: slash-delimited object-key path
//! - resolve / try_resolve / resolve_mut / resolve_parent_mut: path resolution
//! - Error / ErrorKind: error hierarchy shared by every crate
//! - Limits: MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH, MAX_PATH_LENGTH, MAX_ARRAY_SIZE

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod path;

pub use error::{
    Error, ErrorKind, Result, LEGACY_MESSAGE_FAIL, LEGACY_MESSAGE_FORMAT_FAIL,
    LEGACY_MESSAGE_NO_DATA,
};
pub use json::{
    type_name, JsonValue, LimitError, MAX_ARRAY_SIZE, MAX_DOCUMENT_SIZE, MAX_NESTING_DEPTH,
    MAX_PATH_LENGTH,
};
pub use path::{
    resolve, resolve_mut, resolve_parent_mut, try_resolve, PathParseError, ResolveError, SlashPath,
};
