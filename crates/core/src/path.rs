//! Slash-delimited paths and tree resolution
//!
//! A [`SlashPath`] is a sequence of literal object keys written as
//! `segment(/segment)*`. Every segment but the last must name an object;
//! the last names the target member, whatever its type.
//!
//! Resolution is iterative over the segments, so its cost is bounded by the
//! path length and never by the size of the document.
//!
//! | Input | Result |
//! |-------|--------|
//! | `test/project` | `["test", "project"]` |
//! | `test/project/` | `["test", "project"]` (trailing slashes ignored) |
//! | `` or `/` | [`PathParseError::Empty`] |
//! | `/test`, `a//b` | [`PathParseError::EmptySegment`] |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::error::Error;
use crate::json::{type_name, JsonValue, LimitError, MAX_PATH_LENGTH};

/// Error type for path parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// Path has no segments
    #[error("empty path")]
    Empty,
    /// Two separators with nothing between them, or a leading separator
    #[error("empty segment at index {0}")]
    EmptySegment(usize),
}

impl From<PathParseError> for Error {
    fn from(e: PathParseError) -> Self {
        match e {
            // An empty path cannot name anything
            PathParseError::Empty => Error::NotFound {
                path: String::new(),
            },
            PathParseError::EmptySegment(_) => Error::InvalidPath {
                reason: e.to_string(),
            },
        }
    }
}

/// A path of object keys into a JSON document
///
/// # Examples
///
/// ```
/// use annotate_core::SlashPath;
///
/// let path: SlashPath = "test/project".parse().unwrap();
/// assert_eq!(path.segments(), ["test", "project"]);
/// assert_eq!(path.last_segment(), "project");
/// assert_eq!(path.to_string(), "test/project");
///
/// assert!("".parse::<SlashPath>().is_err());
/// assert!("a//b".parse::<SlashPath>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlashPath {
    segments: Vec<String>,
}

impl SlashPath {
    /// Create a path from already-split segments
    pub fn from_segments(segments: Vec<String>) -> Result<Self, PathParseError> {
        if segments.is_empty() {
            return Err(PathParseError::Empty);
        }
        if let Some(idx) = segments.iter().position(|s| s.is_empty()) {
            return Err(PathParseError::EmptySegment(idx));
        }
        Ok(SlashPath { segments })
    }

    /// Get the path segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments in the path
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false: a parsed path has at least one segment
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The key the path targets
    pub fn last_segment(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The first `depth` segments joined back into a path string
    pub fn prefix(&self, depth: usize) -> String {
        self.segments[..depth.min(self.segments.len())].join("/")
    }

    /// Validate path length limit
    pub fn validate(&self) -> Result<(), LimitError> {
        let length = self.segments.len();
        if length > MAX_PATH_LENGTH {
            Err(LimitError::PathTooLong {
                length,
                max: MAX_PATH_LENGTH,
            })
        } else {
            Ok(())
        }
    }
}

impl FromStr for SlashPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(PathParseError::Empty);
        }
        Self::from_segments(trimmed.split('/').map(str::to_string).collect())
    }
}

impl TryFrom<String> for SlashPath {
    type Error = PathParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SlashPath> for String {
    fn from(path: SlashPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for SlashPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Why a path failed to resolve
///
/// `depth` counts the segments consumed before the failure; the root is depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The object at `depth` has no member named by segment `depth`
    Missing {
        /// Segments consumed before the failure
        depth: usize,
    },
    /// The node reached after `depth` segments is not an object
    NotAnObject {
        /// Segments consumed before the failure
        depth: usize,
        /// JSON type actually found
        found: &'static str,
    },
}

impl ResolveError {
    /// Convert into a pipeline [`Error`], naming the offending part of `path`
    pub fn into_error(self, path: &SlashPath) -> Error {
        match self {
            ResolveError::Missing { .. } => Error::NotFound {
                path: path.to_string(),
            },
            ResolveError::NotAnObject { depth, found } => Error::NotAnObject {
                path: path.prefix(depth),
                found: found.to_string(),
            },
        }
    }
}

/// Resolve `path` against `tree`.
///
/// Returns `None` when any segment is missing, when an intermediate node is
/// not an object, or when the tree is empty. The final value is returned
/// without type checks.
///
/// # Examples
///
/// ```
/// use annotate_core::{resolve, JsonValue, SlashPath};
///
/// let doc: JsonValue = r#"{"test": {"project": [1, 2]}}"#.parse().unwrap();
/// let path: SlashPath = "test/project".parse().unwrap();
/// assert!(resolve(&doc, &path).unwrap().is_array());
///
/// let missing: SlashPath = "test/people".parse().unwrap();
/// assert!(resolve(&doc, &missing).is_none());
/// ```
pub fn resolve<'a>(tree: &'a JsonValue, path: &SlashPath) -> Option<&'a serde_json::Value> {
    try_resolve(tree, path).ok()
}

/// Resolve `path` against `tree`, reporting why resolution failed.
pub fn try_resolve<'a>(
    tree: &'a JsonValue,
    path: &SlashPath,
) -> Result<&'a serde_json::Value, ResolveError> {
    let mut current: &serde_json::Value = tree.as_inner();

    for (depth, segment) in path.segments().iter().enumerate() {
        current = match current {
            serde_json::Value::Object(obj) => {
                obj.get(segment).ok_or(ResolveError::Missing { depth })?
            }
            // Empty tree
            serde_json::Value::Null if depth == 0 => return Err(ResolveError::Missing { depth }),
            other => {
                return Err(ResolveError::NotAnObject {
                    depth,
                    found: type_name(other),
                })
            }
        };
    }

    Ok(current)
}

/// Mutable counterpart of [`try_resolve`].
pub fn resolve_mut<'a>(
    tree: &'a mut JsonValue,
    path: &SlashPath,
) -> Result<&'a mut serde_json::Value, ResolveError> {
    let mut current: &mut serde_json::Value = tree.as_inner_mut();

    for (depth, segment) in path.segments().iter().enumerate() {
        current = match current {
            serde_json::Value::Object(obj) => {
                obj.get_mut(segment).ok_or(ResolveError::Missing { depth })?
            }
            serde_json::Value::Null if depth == 0 => return Err(ResolveError::Missing { depth }),
            other => {
                return Err(ResolveError::NotAnObject {
                    depth,
                    found: type_name(other),
                })
            }
        };
    }

    Ok(current)
}

/// Resolve the object holding the final segment of `path`.
///
/// Returns the parent object and the final key. The final key itself need
/// not exist.
pub fn resolve_parent_mut<'a, 'p>(
    tree: &'a mut JsonValue,
    path: &'p SlashPath,
) -> Result<(&'a mut serde_json::Map<String, serde_json::Value>, &'p str), ResolveError> {
    let (last, parents) = path
        .segments()
        .split_last()
        .ok_or(ResolveError::Missing { depth: 0 })?;

    let mut current: &mut serde_json::Value = tree.as_inner_mut();
    for (depth, segment) in parents.iter().enumerate() {
        current = match current {
            serde_json::Value::Object(obj) => {
                obj.get_mut(segment).ok_or(ResolveError::Missing { depth })?
            }
            other => {
                return Err(ResolveError::NotAnObject {
                    depth,
                    found: type_name(other),
                })
            }
        };
    }

    match current {
        serde_json::Value::Object(obj) => Ok((obj, last.as_str())),
        other => Err(ResolveError::NotAnObject {
            depth: parents.len(),
            found: type_name(other),
        }),
    }
}
