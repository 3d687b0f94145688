//! Writing an element set back into its document
//!
//! Field edits made through handles are already part of the tree; the
//! rewriter only replaces the container at the set's path with a freshly
//! built array holding the handled elements in order. Members that were
//! skipped at extraction (non-objects) do not appear in the new array.
//!
//! A path that named a single object becomes a one-element array under
//! [`ContainerMode::Array`]; [`ContainerMode::Preserve`] writes the object back
//! as it was found.

use annotate_core::{resolve_parent_mut, JsonValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extract::{Container, ElementSet};

/// Container written at the target path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerMode {
    /// Always write an array, even for a single-object target
    #[default]
    Array,
    /// Keep a single-object target an object
    Preserve,
}

/// Serialized form of the output document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// No insignificant whitespace
    #[default]
    Compact,
    /// Two-space indented
    Pretty,
}

impl OutputFormat {
    /// Serialize `tree` in this format
    pub fn render(&self, tree: &JsonValue) -> String {
        match self {
            OutputFormat::Compact => tree.to_json_string(),
            OutputFormat::Pretty => tree.to_json_string_pretty(),
        }
    }
}

/// Replace the node at the set's path with the handled elements.
///
/// The key keeps its position among its siblings. On error the tree is
/// unchanged.
///
/// # Errors
///
/// - `NotAnObject` / `NotFound` when the parent of the final segment cannot be reached
/// - `StaleElements` when `tree` no longer matches the set
pub fn rewrite(tree: &mut JsonValue, set: ElementSet, mode: ContainerMode) -> Result<()> {
    set.verify(tree)?;

    let path = set.path().clone();
    let (parent, key) = resolve_parent_mut(tree, &path).map_err(|e| e.into_error(&path))?;

    let replacement = match (set.container(), parent.get_mut(key).map(std::mem::take)) {
        (Container::Object, Some(obj @ Value::Object(_))) => match mode {
            ContainerMode::Preserve => obj,
            ContainerMode::Array => Value::Array(vec![obj]),
        },
        (Container::Array, Some(Value::Array(items))) => {
            let mut slots: Vec<Option<Value>> = items.into_iter().map(Some).collect();
            let elements = set
                .handles()
                .iter()
                .filter_map(|h| slots.get_mut(h.position()?)?.take())
                .collect();
            Value::Array(elements)
        }
        // verify() rules out every other shape
        (_, previous) => previous.unwrap_or_default(),
    };

    parent.insert(key.to_string(), replacement);

    tracing::debug!(
        target: "annotate::rewrite",
        path = %path,
        elements = set.len(),
        dropped = set.skipped(),
        ?mode,
        "rewrote target"
    );

    Ok(())
}

/// Rewrite `tree` and serialize it.
pub fn rewrite_to_string(
    mut tree: JsonValue,
    set: ElementSet,
    mode: ContainerMode,
    format: OutputFormat,
) -> Result<String> {
    rewrite(&mut tree, set, mode)?;
    Ok(format.render(&tree))
}
