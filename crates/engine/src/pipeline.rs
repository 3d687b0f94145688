//! Extract → mutate → rewrite over one tree

use annotate_core::{JsonValue, Result, SlashPath};
use serde::{Deserialize, Serialize};

use crate::extract::extract;
use crate::mutate::{mutate, MissingIdentifier, MutationPolicy, MutationSummary};
use crate::rewrite::{rewrite, ContainerMode};

/// Which field identifies an element, which field to write, and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field compared against the policy
    pub identifier_field: String,
    /// Field written on every element
    pub target_field: String,
    /// How the written value is chosen
    pub policy: MutationPolicy,
    /// What to do with elements lacking the identifier field
    pub on_missing: MissingIdentifier,
}

impl FieldRule {
    /// Create a rule
    pub fn new(
        identifier_field: impl Into<String>,
        target_field: impl Into<String>,
        policy: MutationPolicy,
        on_missing: MissingIdentifier,
    ) -> Self {
        FieldRule {
            identifier_field: identifier_field.into(),
            target_field: target_field.into(),
            policy,
            on_missing,
        }
    }
}

/// Annotate the elements at `path` in place.
///
/// If extraction or mutation fails the tree is unchanged; rewrite cannot
/// fail once mutation succeeded on the same tree.
///
/// # Examples
///
/// ```
/// use annotate_core::JsonValue;
/// use annotate_engine::{annotate_document, ContainerMode, FieldRule, MissingIdentifier, MutationPolicy};
///
/// let mut doc: JsonValue = r#"{"team": [{"id": "a"}, {"id": "b"}]}"#.parse().unwrap();
/// let rule = FieldRule::new(
///     "id",
///     "picked",
///     MutationPolicy::membership(["a"], "yes").with_default("no"),
///     MissingIdentifier::Fail,
/// );
/// annotate_document(&mut doc, &"team".parse().unwrap(), &rule, ContainerMode::Array).unwrap();
/// assert_eq!(doc.to_json_string(), r#"{"team":[{"id":"a","picked":"yes"},{"id":"b","picked":"no"}]}"#);
/// ```
pub fn annotate_document(
    tree: &mut JsonValue,
    path: &SlashPath,
    rule: &FieldRule,
    container: ContainerMode,
) -> Result<MutationSummary> {
    let set = extract(tree, path)?;
    let summary = mutate(
        tree,
        &set,
        &rule.identifier_field,
        &rule.target_field,
        &rule.policy,
        rule.on_missing,
    )?;
    rewrite(tree, set, container)?;
    Ok(summary)
}
