//! Annotation engine for json-annotate
//!
//! This crate runs the three stages over a caller-owned tree:
//! - extract: resolve a path and collect handles to its object elements
//! - mutate: write a target field on every element from an identifier policy
//! - rewrite: put the handled elements back at the path as a fresh array
//!
//! It also owns the configuration file format (`annotate.toml`).
//!
//! Nothing here keeps state between calls; a tree must not be shared by
//! concurrent calls, since mutation writes into it without synchronization.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod extract;
pub mod mutate;
pub mod pipeline;
pub mod rewrite;

pub use config::{AnnotateConfig, MissingIdentifierConfig, CONFIG_FILE_NAME};
pub use extract::{extract, Container, ElementHandle, ElementSet};
pub use mutate::{
    identifier_of, mutate, Annotation, MissingIdentifier, MutationPolicy, MutationSummary,
};
pub use pipeline::{annotate_document, FieldRule};
pub use rewrite::{rewrite, rewrite_to_string, ContainerMode, OutputFormat};
