//! Annotation configuration via `annotate.toml`
//!
//! Every setting has a default that reproduces the established behavior, so
//! an empty file (or no file at all) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use annotate_core::{Error, Result};

use crate::mutate::MissingIdentifier;
use crate::rewrite::{ContainerMode, OutputFormat};

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "annotate.toml";

/// Missing-identifier handling per operation.
///
/// The set-membership operation has always rejected elements without the
/// identifier field; the mapping operation has always treated them as
/// unmatched. Both are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingIdentifierConfig {
    /// Policy for `modify_by_identifier_set`
    #[serde(default = "default_set_missing")]
    pub set: MissingIdentifier,
    /// Policy for `modify_by_identifier_map`
    #[serde(default = "default_map_missing")]
    pub map: MissingIdentifier,
}

fn default_set_missing() -> MissingIdentifier {
    MissingIdentifier::Fail
}

fn default_map_missing() -> MissingIdentifier {
    MissingIdentifier::TreatAsNoMatch
}

impl Default for MissingIdentifierConfig {
    fn default() -> Self {
        Self {
            set: default_set_missing(),
            map: default_map_missing(),
        }
    }
}

/// Annotation configuration loaded from `annotate.toml`.
///
/// # Example
///
/// ```toml
/// container = "array"
/// output = "compact"
/// enforce_limits = true
///
/// [missing_identifier]
/// set = "fail"
/// map = "treat_as_no_match"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotateConfig {
    /// Container written back at the target path: `"array"` or `"preserve"`.
    #[serde(default)]
    pub container: ContainerMode,
    /// Output serialization: `"compact"` or `"pretty"`.
    #[serde(default)]
    pub output: OutputFormat,
    /// Reject documents and paths that exceed the document limits.
    #[serde(default = "default_enforce_limits")]
    pub enforce_limits: bool,
    /// Missing-identifier handling per operation.
    #[serde(default)]
    pub missing_identifier: MissingIdentifierConfig,
}

fn default_enforce_limits() -> bool {
    true
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            container: ContainerMode::default(),
            output: OutputFormat::default(),
            enforce_limits: default_enforce_limits(),
            missing_identifier: MissingIdentifierConfig::default(),
        }
    }
}

impl AnnotateConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# json-annotate configuration
#
# Container written back at the target path:
#   "array"    = always an array; a single-object target becomes [object]
#   "preserve" = a single-object target stays an object
container = "array"

# Output serialization: "compact" or "pretty"
output = "compact"

# Reject documents over 16 MB, nested over 100 levels, with arrays over
# 1M elements, or paths over 256 segments
enforce_limits = true

# Elements without the identifier field:
#   "fail"              = abort the whole call
#   "treat_as_no_match" = write the default value
[missing_identifier]
set = "fail"
map = "treat_as_no_match"
"#
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        toml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
