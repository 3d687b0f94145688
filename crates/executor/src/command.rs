//! Command enum defining all annotation operations.
//!
//! Commands are:
//! - **Self-contained**: the input document and every parameter travel in the variant
//! - **Serializable**: can be converted to/from JSON for cross-language use
//! - **Pure data**: no closures or executable code

use std::collections::BTreeMap;

use annotate_engine::{FieldRule, MissingIdentifier};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// | Command | Policy | Missing identifier default |
/// |---------|--------|----------------------------|
/// | `ModifyByIdentifierSet` | membership | `missing_identifier.set` from config |
/// | `ModifyByIdentifierMap` | lookup | `missing_identifier.map` from config |
/// | `Annotate` | any | carried in the rule |
///
/// Every command returns `Output::Annotated`.
///
/// # Example
///
/// ```
/// use annotate_executor::Command;
///
/// let cmd = Command::ModifyByIdentifierSet {
///     json: r#"{"team": [{"id": "a"}]}"#.into(),
///     path: "team".into(),
///     identifiers: vec!["a".into()],
///     identifier_field: "id".into(),
///     target_field: "picked".into(),
///     match_value: "true".into(),
///     default_value: Some("false".into()),
///     on_missing: None,
/// };
/// let wire = serde_json::to_string(&cmd).unwrap();
/// assert_eq!(serde_json::from_str::<Command>(&wire).unwrap(), cmd);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Write `match_value` on elements whose identifier is in `identifiers`,
    /// `default_value` (or null) on the rest.
    ModifyByIdentifierSet {
        /// Input document
        json: String,
        /// Slash-delimited path to the target object or array
        path: String,
        /// Identifiers that match
        identifiers: Vec<String>,
        /// Field holding each element's identifier
        identifier_field: String,
        /// Field to write
        target_field: String,
        /// Value for matching elements
        match_value: String,
        /// Value for the rest; `None` writes null
        #[serde(default)]
        default_value: Option<String>,
        /// Override of the configured missing-identifier handling
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_missing: Option<MissingIdentifier>,
    },

    /// Write `identifier_to_value[identifier]` on each element,
    /// `default_value` (or null) when the identifier is not a key.
    ModifyByIdentifierMap {
        /// Input document
        json: String,
        /// Slash-delimited path to the target object or array
        path: String,
        /// Identifier to written value
        identifier_to_value: BTreeMap<String, String>,
        /// Field holding each element's identifier
        identifier_field: String,
        /// Field to write
        target_field: String,
        /// Value for unmapped elements; `None` writes null
        #[serde(default)]
        default_value: Option<String>,
        /// Override of the configured missing-identifier handling
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_missing: Option<MissingIdentifier>,
    },

    /// Apply a fully specified rule.
    Annotate {
        /// Input document
        json: String,
        /// Slash-delimited path to the target object or array
        path: String,
        /// Fields, policy and missing-identifier handling
        rule: FieldRule,
    },
}

impl Command {
    /// Name of the command variant, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::ModifyByIdentifierSet { .. } => "ModifyByIdentifierSet",
            Command::ModifyByIdentifierMap { .. } => "ModifyByIdentifierMap",
            Command::Annotate { .. } => "Annotate",
        }
    }
}
