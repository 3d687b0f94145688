//! Identifier-driven field mutation
//!
//! For every element of an [`ElementSet`] the mutator reads the identifier
//! field, asks the [`MutationPolicy`] what the target field should hold and
//! writes it:
//!
//! | Policy | Identifier matches | Otherwise |
//! |--------|--------------------|-----------|
//! | `Membership` | `match_value` | `default_value`, or JSON `null` |
//! | `Lookup` | `mapping[identifier]` | `default_value`, or JSON `null` |
//!
//! Written values are always JSON strings; only the fallback without a
//! default writes a `null` literal.
//!
//! A batch is all or nothing: every element is evaluated before the first
//! write, so an element that fails leaves the document untouched.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use annotate_core::{type_name, Error, JsonValue, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extract::ElementSet;

/// What to do with an element that has no identifier field
///
/// Only an absent field is missing; a present `null` is an invalid identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingIdentifier {
    /// Abort the batch with `MissingIdentifier`
    Fail,
    /// Treat the element as matching nothing
    TreatAsNoMatch,
}

/// How the target field value is chosen
///
/// # Examples
///
/// ```
/// use annotate_engine::{Annotation, MutationPolicy};
///
/// let policy = MutationPolicy::membership(["BackOffice"], "true").with_default("false");
/// assert_eq!(policy.evaluate(Some("BackOffice")), Annotation::Matched("true"));
/// assert_eq!(policy.evaluate(Some("API")), Annotation::Defaulted("false"));
///
/// let policy = MutationPolicy::lookup([("kelvin", "휴가중")]);
/// assert_eq!(policy.evaluate(Some("kelvin")), Annotation::Matched("휴가중"));
/// assert_eq!(policy.evaluate(None), Annotation::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum MutationPolicy {
    /// Identifier in a fixed set
    Membership {
        /// Identifiers that match
        identifiers: BTreeSet<String>,
        /// Value written on a match
        match_value: String,
        /// Value written otherwise; `None` writes JSON null
        #[serde(default)]
        default_value: Option<String>,
    },
    /// Identifier used as a key into a mapping
    Lookup {
        /// Identifier to value
        mapping: BTreeMap<String, String>,
        /// Value written when the identifier is not a key; `None` writes JSON null
        #[serde(default)]
        default_value: Option<String>,
    },
}

impl MutationPolicy {
    /// Membership policy without a default
    pub fn membership<I, S>(identifiers: I, match_value: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MutationPolicy::Membership {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            match_value: match_value.into(),
            default_value: None,
        }
    }

    /// Lookup policy without a default
    pub fn lookup<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        MutationPolicy::Lookup {
            mapping: mapping
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            default_value: None,
        }
    }

    /// Set the value written for non-matching elements
    pub fn with_default(self, default: impl Into<String>) -> Self {
        self.with_optional_default(Some(default.into()))
    }

    /// Set or clear the value written for non-matching elements
    pub fn with_optional_default(mut self, default: Option<String>) -> Self {
        match &mut self {
            MutationPolicy::Membership { default_value, .. }
            | MutationPolicy::Lookup { default_value, .. } => *default_value = default,
        }
        self
    }

    /// Value written for non-matching elements
    pub fn default_value(&self) -> Option<&str> {
        match self {
            MutationPolicy::Membership { default_value, .. }
            | MutationPolicy::Lookup { default_value, .. } => default_value.as_deref(),
        }
    }

    /// Decide the annotation for an identifier (`None` = no identifier)
    pub fn evaluate(&self, identifier: Option<&str>) -> Annotation<'_> {
        let matched = identifier.and_then(|id| match self {
            MutationPolicy::Membership {
                identifiers,
                match_value,
                ..
            } => identifiers.contains(id).then_some(match_value.as_str()),
            MutationPolicy::Lookup { mapping, .. } => mapping.get(id).map(String::as_str),
        });

        match (matched, self.default_value()) {
            (Some(value), _) => Annotation::Matched(value),
            (None, Some(default)) => Annotation::Defaulted(default),
            (None, None) => Annotation::Null,
        }
    }
}

/// Outcome of evaluating a policy for one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation<'a> {
    /// Identifier matched
    Matched(&'a str),
    /// No match, default written
    Defaulted(&'a str),
    /// No match and no default
    Null,
}

impl Annotation<'_> {
    /// JSON value written to the target field
    pub fn to_value(&self) -> Value {
        match self {
            Annotation::Matched(v) | Annotation::Defaulted(v) => Value::String((*v).to_string()),
            Annotation::Null => Value::Null,
        }
    }
}

/// Counts of what a mutation wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationSummary {
    /// Elements whose identifier matched
    pub matched: usize,
    /// Elements that received the default value
    pub defaulted: usize,
    /// Elements that received JSON null
    pub nulled: usize,
}

impl MutationSummary {
    /// Total elements written
    pub fn total(&self) -> usize {
        self.matched + self.defaulted + self.nulled
    }

    fn record(&mut self, annotation: &Annotation<'_>) {
        match annotation {
            Annotation::Matched(_) => self.matched += 1,
            Annotation::Defaulted(_) => self.defaulted += 1,
            Annotation::Null => self.nulled += 1,
        }
    }
}

/// String form of an identifier value.
///
/// Strings are taken verbatim, numbers in their source text, booleans as
/// `true`/`false`. `Ok(None)` means the field is absent; `null`, objects and
/// arrays are `InvalidIdentifier`.
pub fn identifier_of<'a>(
    element: &'a Map<String, Value>,
    identifier_field: &str,
) -> Result<Option<Cow<'a, str>>> {
    match element.get(identifier_field) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(Cow::Borrowed(s.as_str()))),
        Some(Value::Number(n)) => Ok(Some(Cow::Owned(n.to_string()))),
        Some(Value::Bool(b)) => Ok(Some(Cow::Owned(b.to_string()))),
        Some(other) => Err(Error::InvalidIdentifier {
            field: identifier_field.to_string(),
            found: type_name(other).to_string(),
        }),
    }
}

/// Write `target_field` on every element of `set` according to `policy`.
///
/// # Errors
///
/// - `MissingIdentifier` for an element without the identifier field when
///   `on_missing` is [`MissingIdentifier::Fail`]
/// - `InvalidIdentifier` when an identifier is null, an object or an array
/// - `StaleElements` when `tree` is not the tree `set` was extracted from
///
/// On error nothing has been written.
pub fn mutate(
    tree: &mut JsonValue,
    set: &ElementSet,
    identifier_field: &str,
    target_field: &str,
    policy: &MutationPolicy,
    on_missing: MissingIdentifier,
) -> Result<MutationSummary> {
    let mut objects = set.objects_mut(tree)?;

    let annotations = objects
        .iter()
        .enumerate()
        .map(|(position, obj)| {
            let identifier = identifier_of(obj, identifier_field)?;
            if identifier.is_none() && on_missing == MissingIdentifier::Fail {
                return Err(Error::MissingIdentifier {
                    field: identifier_field.to_string(),
                    position,
                });
            }
            Ok(policy.evaluate(identifier.as_deref()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut summary = MutationSummary::default();
    for (obj, annotation) in objects.iter_mut().zip(&annotations) {
        obj.insert(target_field.to_string(), annotation.to_value());
        summary.record(annotation);
    }

    tracing::debug!(
        target: "annotate::mutate",
        path = %set.path(),
        identifier_field,
        target_field,
        matched = summary.matched,
        defaulted = summary.defaulted,
        nulled = summary.nulled,
        "annotated elements"
    );

    Ok(summary)
}
