//! High-level typed wrapper for the Executor.
//!
//! The [`Annotator`] struct provides a convenient Rust API that wraps the
//! [`Executor`] and [`Command`]/[`Output`] enums with typed method calls.
//!
//! # Example
//!
//! ```
//! use annotate_executor::Annotator;
//!
//! let annotator = Annotator::new();
//! let out = annotator
//!     .modify_by_identifier_set(
//!         r#"{"a": {"b": [{"id": "x"}, {"id": "y"}]}}"#,
//!         "a/b",
//!         ["x"],
//!         "id",
//!         "flag",
//!         "T",
//!         Some("F"),
//!     )
//!     .unwrap();
//! assert_eq!(out, r#"{"a":{"b":[{"id":"x","flag":"T"},{"id":"y","flag":"F"}]}}"#);
//! ```

mod legacy;

use std::path::Path;

use annotate_engine::{AnnotateConfig, FieldRule};

use crate::{Command, Executor, Output, Result};

/// Typed entry point for annotating documents.
///
/// Holds only immutable configuration; one instance can serve any number of
/// calls from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    executor: Executor,
}

impl Annotator {
    /// Annotator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotator with an explicit configuration.
    pub fn with_config(config: AnnotateConfig) -> Self {
        Self {
            executor: Executor::new(config),
        }
    }

    /// Annotator configured from an `annotate.toml` file.
    ///
    /// Writes the commented default config first if the file does not exist.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        AnnotateConfig::write_default_if_missing(path)?;
        let config = AnnotateConfig::from_file(path)?;
        tracing::debug!(target: "annotate::executor", path = %path.display(), "loaded config");
        Ok(Self::with_config(config))
    }

    /// The configuration in effect.
    pub fn config(&self) -> &AnnotateConfig {
        self.executor.config()
    }

    /// The underlying command executor.
    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    /// Mark the elements at `path` by identifier membership.
    ///
    /// Each object element gets `target_field` set to `match_value` when its
    /// `identifier_field` is one of `identifiers`, otherwise to
    /// `default_value` (JSON null when `None`). Non-object array members are
    /// dropped from the output array.
    ///
    /// # Arguments
    ///
    /// * `json` - Input document; the root must be an object
    /// * `path` - Slash-delimited member names, e.g. `"a/b/c"`
    /// * `identifiers` - Identifiers that match
    /// * `identifier_field` - Field read from each element
    /// * `target_field` - Field written on each element
    /// * `match_value` - Value for matching elements
    /// * `default_value` - Value for the rest
    ///
    /// # Errors
    ///
    /// Elements without the identifier field fail the call under the default
    /// configuration (`missing_identifier.set = "fail"`).
    #[allow(clippy::too_many_arguments)]
    pub fn modify_by_identifier_set<I, S>(
        &self,
        json: &str,
        path: &str,
        identifiers: I,
        identifier_field: &str,
        target_field: &str,
        match_value: &str,
        default_value: Option<&str>,
    ) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let output = self.executor.execute(Command::ModifyByIdentifierSet {
            json: json.to_string(),
            path: path.to_string(),
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            identifier_field: identifier_field.to_string(),
            target_field: target_field.to_string(),
            match_value: match_value.to_string(),
            default_value: default_value.map(str::to_string),
            on_missing: None,
        })?;
        Ok(output.into_json())
    }

    /// Annotate the elements at `path` by identifier lookup.
    ///
    /// Each object element gets `target_field` set to
    /// `identifier_to_value[identifier]`, or `default_value` (JSON null when
    /// `None`) when the identifier is not a key or is missing.
    ///
    /// # Errors
    ///
    /// Format, not-found and type errors as for
    /// [`modify_by_identifier_set`](Self::modify_by_identifier_set).
    pub fn modify_by_identifier_map<I, K, V>(
        &self,
        json: &str,
        path: &str,
        identifier_to_value: I,
        identifier_field: &str,
        target_field: &str,
        default_value: Option<&str>,
    ) -> Result<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let output = self.executor.execute(Command::ModifyByIdentifierMap {
            json: json.to_string(),
            path: path.to_string(),
            identifier_to_value: identifier_to_value
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            identifier_field: identifier_field.to_string(),
            target_field: target_field.to_string(),
            default_value: default_value.map(str::to_string),
            on_missing: None,
        })?;
        Ok(output.into_json())
    }

    /// Apply a fully specified rule, returning the document and counts.
    pub fn annotate(&self, json: &str, path: &str, rule: FieldRule) -> Result<Output> {
        self.executor.execute(Command::Annotate {
            json: json.to_string(),
            path: path.to_string(),
            rule,
        })
    }
}
