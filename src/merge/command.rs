//! `postCreateCommand` combination

use crate::domain::{value_kind, MergePolicy};
use serde_json::Value;

/// Make sure the shared bootstrap runs before the project's own post-create step.
///
/// A command that already contains the bootstrap is returned untouched, so
/// feeding a generated descriptor back through the merger never grows it.
pub fn combine_post_create(policy: &MergePolicy, project: Option<&Value>) -> Value {
    let bootstrap = policy.bootstrap_command.as_str();

    match project {
        None | Some(Value::Null) => Value::String(bootstrap.to_string()),
        Some(Value::String(cmd)) if cmd.trim().is_empty() => Value::String(bootstrap.to_string()),
        Some(Value::String(cmd)) if cmd.contains(bootstrap) => Value::String(cmd.clone()),
        Some(Value::String(cmd)) => Value::String(format!("{bootstrap} && {cmd}")),
        Some(Value::Array(steps)) => {
            let already_bootstrapped =
                steps.first().and_then(Value::as_str).is_some_and(|first| first.contains(bootstrap));
            if already_bootstrapped {
                return Value::Array(steps.clone());
            }
            let mut combined = Vec::with_capacity(steps.len() + 1);
            combined.push(Value::String(bootstrap.to_string()));
            combined.extend(steps.iter().cloned());
            Value::Array(combined)
        }
        Some(other) => {
            tracing::warn!(
                "postCreateCommand is {}, which cannot be sequenced; using the bootstrap command only",
                value_kind(other)
            );
            Value::String(bootstrap.to_string())
        }
    }
}
