//! The Executor - single entry point to the annotation engine.
//!
//! The Executor is a stateless dispatcher that turns commands into field
//! rules and routes them to the annotation handler.

use std::sync::Arc;

use annotate_engine::{AnnotateConfig, FieldRule, MutationPolicy};

use crate::{Command, Output, Result};

/// The command executor.
///
/// The Executor holds only its configuration. Every command carries its own
/// document, so executions are independent of each other.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```
/// use annotate_executor::{Command, Executor};
///
/// let executor = Executor::default();
/// let out = executor
///     .execute(Command::ModifyByIdentifierSet {
///         json: r#"{"team": {"id": "a"}}"#.into(),
///         path: "team".into(),
///         identifiers: vec!["a".into()],
///         identifier_field: "id".into(),
///         target_field: "picked".into(),
///         match_value: "true".into(),
///         default_value: None,
///         on_missing: None,
///     })
///     .unwrap();
/// assert_eq!(out.json(), r#"{"team":[{"id":"a","picked":"true"}]}"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Executor {
    config: Arc<AnnotateConfig>,
}

impl Executor {
    /// Create a new executor with the given configuration.
    pub fn new(config: AnnotateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the rewritten document or an error. On error nothing is
    /// produced; the input string is never partially annotated.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let name = cmd.name();
        let (json, path, rule) = self.build_rule(cmd);
        let result = crate::handlers::annotate::annotate(&self.config, &json, &path, &rule);
        if let Err(e) = &result {
            tracing::debug!(
                target: "annotate::executor",
                command = name,
                path = %path,
                kind = %e.kind(),
                error = %e,
                "command failed"
            );
        }
        result
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &AnnotateConfig {
        &self.config
    }

    fn build_rule(&self, cmd: Command) -> (String, String, FieldRule) {
        let missing = self.config.missing_identifier;
        match cmd {
            Command::ModifyByIdentifierSet {
                json,
                path,
                identifiers,
                identifier_field,
                target_field,
                match_value,
                default_value,
                on_missing,
            } => {
                let policy = MutationPolicy::membership(identifiers, match_value)
                    .with_optional_default(default_value);
                let rule = FieldRule::new(
                    identifier_field,
                    target_field,
                    policy,
                    on_missing.unwrap_or(missing.set),
                );
                (json, path, rule)
            }
            Command::ModifyByIdentifierMap {
                json,
                path,
                identifier_to_value,
                identifier_field,
                target_field,
                default_value,
                on_missing,
            } => {
                let policy =
                    MutationPolicy::lookup(identifier_to_value).with_optional_default(default_value);
                let rule = FieldRule::new(
                    identifier_field,
                    target_field,
                    policy,
                    on_missing.unwrap_or(missing.map),
                );
                (json, path, rule)
            }
            Command::Annotate { json, path, rule } => (json, path, rule),
        }
    }
}
