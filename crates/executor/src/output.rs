//! Output enum for command execution results.

use annotate_engine::MutationSummary;
use serde::{Deserialize, Serialize};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Output {
    /// The rewritten document and what was written into it
    Annotated {
        /// Serialized output document
        json: String,
        /// Counts of matched, defaulted and nulled elements
        summary: MutationSummary,
    },
}

impl Output {
    /// The serialized document carried by this output
    pub fn json(&self) -> &str {
        match self {
            Output::Annotated { json, .. } => json,
        }
    }

    /// Consume the output, keeping the serialized document
    pub fn into_json(self) -> String {
        match self {
            Output::Annotated { json, .. } => json,
        }
    }
}
