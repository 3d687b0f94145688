//! Error types for json-annotate
//!
//! All failures of the resolve → extract → mutate → rewrite pipeline are
//! represented by the [`Error`] enum. Errors are:
//! - **Structured**: each variant carries typed fields (path, field, found type)
//! - **Serializable**: can be converted to/from JSON for command clients
//! - **Classified**: [`Error::kind`] groups variants into an [`ErrorKind`]
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::json::LimitError;

/// Result type alias for annotate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned by the legacy string channel for malformed input.
pub const LEGACY_MESSAGE_FORMAT_FAIL: &str = "데이터 형식이 잘못되었습니다.";

/// Message returned by the legacy string channel for missing data.
pub const LEGACY_MESSAGE_NO_DATA: &str = "데이터가 존재하지 않습니다.";

/// Message returned by the legacy string channel for any other failure.
pub const LEGACY_MESSAGE_FAIL: &str = "실패 하였습니다.";

/// Broad classification of an [`Error`].
///
/// | Kind | Variants |
/// |------|----------|
/// | `Format` | `InvalidJson`, `NotAnObject`, `InvalidPath`, `StaleElements` |
/// | `NotFound` | `NotFound` |
/// | `Type` | `WrongType`, `InvalidIdentifier` |
/// | `MissingIdentifier` | `MissingIdentifier` |
/// | `Limit` | `Limit` |
/// | `Config` | `Config` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input is not valid JSON or has the wrong shape along the path
    Format,
    /// Path resolves to nothing
    NotFound,
    /// Resolved node or identifier has an unsupported type
    Type,
    /// Identifier field absent on an element under the strict policy
    MissingIdentifier,
    /// Document limit exceeded
    Limit,
    /// Configuration could not be read or is invalid
    Config,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Format => "format",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Type => "type",
            ErrorKind::MissingIdentifier => "missing_identifier",
            ErrorKind::Limit => "limit",
            ErrorKind::Config => "config",
        };
        f.write_str(name)
    }
}

/// Annotation errors.
///
/// # Example
///
/// ```
/// use annotate_core::{Error, ErrorKind};
///
/// let err = Error::NotFound { path: "test/project".to_string() };
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "path not found: test/project");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Format Errors ====================
    /// Input could not be parsed as JSON
    #[error("invalid JSON: {reason}")]
    InvalidJson {
        /// Parser message
        reason: String,
    },

    /// Traversal met a non-object where an object was expected
    #[error("expected object at '{path}', found {found}")]
    NotAnObject {
        /// Path prefix up to and including the offending segment (empty for the root)
        path: String,
        /// JSON type actually found
        found: String,
    },

    /// Path string is malformed
    #[error("invalid path: {reason}")]
    InvalidPath {
        /// Why the path was rejected
        reason: String,
    },

    /// Element handles no longer match the document they were extracted from
    #[error("element set is stale for path '{path}'")]
    StaleElements {
        /// Path the set was extracted from
        path: String,
    },

    // ==================== Not Found ====================
    /// Path resolves to nothing
    #[error("path not found: {path}")]
    NotFound {
        /// The path that was resolved
        path: String,
    },

    // ==================== Type Errors ====================
    /// Target node is neither an object nor an array
    #[error("wrong type at '{path}': expected object or array, found {found}")]
    WrongType {
        /// The path that was resolved
        path: String,
        /// JSON type actually found
        found: String,
    },

    /// Identifier value cannot be coerced to a string
    #[error("identifier field '{field}' must be a string, number or boolean, found {found}")]
    InvalidIdentifier {
        /// Identifier field name
        field: String,
        /// JSON type actually found
        found: String,
    },

    // ==================== Identifier Errors ====================
    /// Identifier field absent on an element
    #[error("identifier field '{field}' missing on element {position}")]
    MissingIdentifier {
        /// Identifier field name
        field: String,
        /// Zero-based position of the element within the extracted set
        position: usize,
    },

    // ==================== System Errors ====================
    /// Document limit exceeded
    #[error("limit exceeded: {0}")]
    Limit(#[from] LimitError),

    /// Configuration error
    #[error("config error: {reason}")]
    Config {
        /// Why the configuration was rejected
        reason: String,
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidJson { .. }
            | Error::NotAnObject { .. }
            | Error::InvalidPath { .. }
            | Error::StaleElements { .. } => ErrorKind::Format,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::WrongType { .. } | Error::InvalidIdentifier { .. } => ErrorKind::Type,
            Error::MissingIdentifier { .. } => ErrorKind::MissingIdentifier,
            Error::Limit(_) => ErrorKind::Limit,
            Error::Config { .. } => ErrorKind::Config,
        }
    }

    /// Message used by the string-returning compatibility operations.
    ///
    /// Those operations put the message in place of the output document, so
    /// the text is fixed per kind rather than derived from `Display`.
    pub fn legacy_message(&self) -> String {
        match self {
            Error::MissingIdentifier { field, .. } => format!("{}{}", LEGACY_MESSAGE_NO_DATA, field),
            _ => match self.kind() {
                ErrorKind::Format => LEGACY_MESSAGE_FORMAT_FAIL.to_string(),
                ErrorKind::NotFound => LEGACY_MESSAGE_NO_DATA.to_string(),
                _ => LEGACY_MESSAGE_FAIL.to_string(),
            },
        }
    }

    /// Create an `InvalidJson` error from a parser error.
    pub fn invalid_json(err: impl fmt::Display) -> Self {
        Error::InvalidJson {
            reason: err.to_string(),
        }
    }

    /// Create a `Config` error.
    pub fn config(reason: impl Into<String>) -> Self {
        Error::Config {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::invalid_json(e)
    }
}
