//! Bridge module: turning command strings into engine inputs.
//!
//! - [`parse_document`]: input JSON → [`JsonValue`], with limits when configured
//! - [`parse_path`]: path string → [`SlashPath`], with the length limit when configured

use annotate_core::{Error, JsonValue, Result, SlashPath};
use annotate_engine::AnnotateConfig;

/// Parse the input document.
pub fn parse_document(config: &AnnotateConfig, json: &str) -> Result<JsonValue> {
    if config.enforce_limits {
        JsonValue::parse_validated(json)
    } else {
        json.parse().map_err(Error::invalid_json)
    }
}

/// Parse a slash-delimited path.
pub fn parse_path(config: &AnnotateConfig, path: &str) -> Result<SlashPath> {
    let parsed: SlashPath = path.parse()?;
    if config.enforce_limits {
        parsed.validate()?;
    }
    Ok(parsed)
}
