//! JSON document type and document limits
//!
//! This module defines the tree the annotation pipeline operates on:
//! - JsonValue: Newtype wrapper around serde_json::Value
//! - LimitError: Document limit violations
//!
//! # Document Size Limits
//!
//! Inputs are checked against the following limits when limit enforcement is on:
//!
//! | Limit | Value | Constant |
//! |-------|-------|----------|
//! | Max document size | 16 MB | [`MAX_DOCUMENT_SIZE`] |
//! | Max nesting depth | 100 levels | [`MAX_NESTING_DEPTH`] |
//! | Max path length | 256 segments | [`MAX_PATH_LENGTH`] |
//! | Max array size | 1M elements | [`MAX_ARRAY_SIZE`] |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;
use thiserror::Error;

use crate::error::{Error, Result};

// =============================================================================
// Document Size Limits
// =============================================================================

/// Maximum document size in bytes (16 MB)
///
/// Checked against the raw input before parsing.
pub const MAX_DOCUMENT_SIZE: usize = 16 * 1024 * 1024; // 16 MB

/// Maximum nesting depth in a JSON document (100 levels)
pub const MAX_NESTING_DEPTH: usize = 100;

/// Maximum path length in segments (256 segments)
pub const MAX_PATH_LENGTH: usize = 256;

/// Maximum array size in elements (1 million elements)
pub const MAX_ARRAY_SIZE: usize = 1_000_000;

/// Error type for document limit violations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LimitError {
    /// Document exceeds maximum size
    #[error("document size {size} exceeds maximum of {max} bytes")]
    DocumentTooLarge {
        /// Actual document size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Document nesting exceeds maximum depth
    #[error("document nesting depth {depth} exceeds maximum of {max} levels")]
    NestingTooDeep {
        /// Actual nesting depth
        depth: usize,
        /// Maximum allowed depth
        max: usize,
    },

    /// Path exceeds maximum length
    #[error("path length {length} exceeds maximum of {max} segments")]
    PathTooLong {
        /// Actual path length
        length: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Array exceeds maximum size
    #[error("array size {size} exceeds maximum of {max} elements")]
    ArrayTooLarge {
        /// Actual array size
        size: usize,
        /// Maximum allowed size
        max: usize,
    },
}

/// JSON document tree
///
/// Newtype around serde_json::Value providing:
/// - Direct access to underlying serde_json::Value via Deref/DerefMut
/// - Parsing with optional limit validation
/// - Compact and pretty serialization
///
/// Object members keep their insertion order, and numbers keep their source
/// text, so fields the pipeline does not touch serialize exactly as they were read.
///
/// # Examples
///
/// ```
/// use annotate_core::JsonValue;
///
/// let doc: JsonValue = r#"{"b": 1, "a": 2.50}"#.parse().unwrap();
/// assert!(doc.is_object());
/// assert_eq!(doc.to_json_string(), r#"{"b":1,"a":2.50}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct JsonValue(serde_json::Value);

impl JsonValue {
    /// Create a null JSON value
    pub fn null() -> Self {
        JsonValue(serde_json::Value::Null)
    }

    /// Create an empty JSON object
    pub fn object() -> Self {
        JsonValue(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Create an empty JSON array
    pub fn array() -> Self {
        JsonValue(serde_json::Value::Array(Vec::new()))
    }

    /// Create from a serde_json::Value
    pub fn from_value(value: serde_json::Value) -> Self {
        JsonValue(value)
    }

    /// Parse a document, rejecting it if it violates any document limit.
    ///
    /// The size limit is checked before parsing; depth and array limits
    /// are checked on the parsed tree.
    pub fn parse_validated(input: &str) -> Result<Self> {
        if input.len() > MAX_DOCUMENT_SIZE {
            return Err(LimitError::DocumentTooLarge {
                size: input.len(),
                max: MAX_DOCUMENT_SIZE,
            }
            .into());
        }
        let value: JsonValue = input.parse().map_err(Error::invalid_json)?;
        value.validate_depth()?;
        value.validate_array_size()?;
        Ok(value)
    }

    /// Get a reference to the underlying serde_json::Value
    pub fn as_inner(&self) -> &serde_json::Value {
        &self.0
    }

    /// Get a mutable reference to the underlying serde_json::Value
    pub fn as_inner_mut(&mut self) -> &mut serde_json::Value {
        &mut self.0
    }

    /// Serialize to compact JSON string
    pub fn to_json_string(&self) -> String {
        self.0.to_string()
    }

    /// Serialize to pretty JSON string
    pub fn to_json_string_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.to_json_string())
    }

    /// Calculate the maximum nesting depth of this JSON value
    ///
    /// Returns 0 for primitives (null, bool, number, string),
    /// and counts nested objects/arrays.
    pub fn nesting_depth(&self) -> usize {
        fn depth_of(value: &serde_json::Value) -> usize {
            match value {
                serde_json::Value::Array(arr) => 1 + arr.iter().map(depth_of).max().unwrap_or(0),
                serde_json::Value::Object(obj) => 1 + obj.values().map(depth_of).max().unwrap_or(0),
                _ => 0,
            }
        }
        depth_of(&self.0)
    }

    /// Find the maximum array size in this JSON value (including nested arrays)
    pub fn max_array_size(&self) -> usize {
        fn max_arr_size(value: &serde_json::Value) -> usize {
            match value {
                serde_json::Value::Array(arr) => {
                    let nested_max = arr.iter().map(max_arr_size).max().unwrap_or(0);
                    arr.len().max(nested_max)
                }
                serde_json::Value::Object(obj) => obj.values().map(max_arr_size).max().unwrap_or(0),
                _ => 0,
            }
        }
        max_arr_size(&self.0)
    }

    /// Validate document nesting depth limit
    pub fn validate_depth(&self) -> std::result::Result<(), LimitError> {
        let depth = self.nesting_depth();
        if depth > MAX_NESTING_DEPTH {
            Err(LimitError::NestingTooDeep {
                depth,
                max: MAX_NESTING_DEPTH,
            })
        } else {
            Ok(())
        }
    }

    /// Validate array size limits
    pub fn validate_array_size(&self) -> std::result::Result<(), LimitError> {
        let size = self.max_array_size();
        if size > MAX_ARRAY_SIZE {
            Err(LimitError::ArrayTooLarge {
                size,
                max: MAX_ARRAY_SIZE,
            })
        } else {
            Ok(())
        }
    }
}

/// Name of a value's JSON type, for error messages
pub fn type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl FromStr for JsonValue {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s).map(JsonValue)
    }
}

impl Deref for JsonValue {
    type Target = serde_json::Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for JsonValue {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Default is null
impl Default for JsonValue {
    fn default() -> Self {
        Self::null()
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        JsonValue(v)
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(v: JsonValue) -> Self {
        v.0
    }
}
