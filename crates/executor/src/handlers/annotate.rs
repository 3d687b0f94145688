//! Annotation command handlers.

use annotate_engine::{annotate_document, AnnotateConfig, FieldRule};

use crate::bridge::{parse_document, parse_path};
use crate::{Output, Result};

/// Handle every annotation command once its rule is built.
///
/// Parses the document and path, runs extract → mutate → rewrite, and
/// renders the result in the configured output format.
pub fn annotate(
    config: &AnnotateConfig,
    json: &str,
    path: &str,
    rule: &FieldRule,
) -> Result<Output> {
    let mut tree = parse_document(config, json)?;
    let path = parse_path(config, path)?;
    let summary = annotate_document(&mut tree, &path, rule, config.container)?;
    tracing::debug!(
        target: "annotate::executor",
        path = %path,
        matched = summary.matched,
        defaulted = summary.defaulted,
        nulled = summary.nulled,
        "annotated document"
    );
    Ok(Output::Annotated {
        json: config.output.render(&tree),
        summary,
    })
}
