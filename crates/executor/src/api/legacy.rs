//! String-only variants for callers that expect the error text in place of
//! the document.
//!
//! These return the annotated document on success and
//! [`Error::legacy_message`](annotate_core::Error::legacy_message) on
//! failure. Prefer the `Result` methods; the output cannot be told apart from
//! a document without parsing it.

use super::Annotator;
use crate::Result;

fn or_message(operation: &'static str, result: Result<String>) -> String {
    result.unwrap_or_else(|e| {
        tracing::warn!(
            target: "annotate::executor",
            operation,
            kind = %e.kind(),
            error = %e,
            "returning legacy error message in place of document"
        );
        e.legacy_message()
    })
}

impl Annotator {
    /// [`modify_by_identifier_set`](Self::modify_by_identifier_set) with the
    /// error message in place of the document.
    ///
    /// ```
    /// use annotate_executor::Annotator;
    ///
    /// let out = Annotator::new().modify_by_identifier_set_or_message(
    ///     r#"{"a": 1}"#, "missing", ["x"], "id", "flag", "T", None,
    /// );
    /// assert_eq!(out, "데이터가 존재하지 않습니다.");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn modify_by_identifier_set_or_message<I, S>(
        &self,
        json: &str,
        path: &str,
        identifiers: I,
        identifier_field: &str,
        target_field: &str,
        match_value: &str,
        default_value: Option<&str>,
    ) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        or_message(
            "modify_by_identifier_set",
            self.modify_by_identifier_set(
                json,
                path,
                identifiers,
                identifier_field,
                target_field,
                match_value,
                default_value,
            ),
        )
    }

    /// [`modify_by_identifier_map`](Self::modify_by_identifier_map) with the
    /// error message in place of the document.
    pub fn modify_by_identifier_map_or_message<I, K, V>(
        &self,
        json: &str,
        path: &str,
        identifier_to_value: I,
        identifier_field: &str,
        target_field: &str,
        default_value: Option<&str>,
    ) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        or_message(
            "modify_by_identifier_map",
            self.modify_by_identifier_map(
                json,
                path,
                identifier_to_value,
                identifier_field,
                target_field,
                default_value,
            ),
        )
    }
}
