//! Shape guards over untrusted payloads.
//!
//! A payload stays a raw `serde_json::Value` until its adapter's guard
//! chain has passed; only then does it become a typed props object. Each
//! required guard either yields the value at a dot-separated path with the
//! right primitive type, or a [`GuardError`] naming the path - the first
//! failure short-circuits the adapter into its error outcome. Defaulting
//! accessors fill in absent or null fields while preserving `false`, `0`,
//! and `""` as given.

use serde_json::{Map, Value};
use thiserror::Error;

/// A required field was absent or had the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Field '{path}' {problem}")]
pub struct GuardError {
    pub path: String,
    pub problem: &'static str,
}

impl GuardError {
    pub fn new(path: impl Into<String>, problem: &'static str) -> Self {
        Self {
            path: path.into(),
            problem,
        }
    }
}

/// Walk a dot-separated path. `Null` counts as absent.
fn lookup<'a>(payload: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = payload;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

fn as_int(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

/// Require the field to exist (and not be null).
pub fn require<'a>(payload: &'a Value, path: &str) -> Result<&'a Value, GuardError> {
    lookup(payload, path).ok_or_else(|| GuardError::new(path, "is missing"))
}

pub fn require_object<'a>(
    payload: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, GuardError> {
    require(payload, path)?
        .as_object()
        .ok_or_else(|| GuardError::new(path, "is not an object"))
}

/// Require a string of any content.
pub fn require_str<'a>(payload: &'a Value, path: &str) -> Result<&'a str, GuardError> {
    require(payload, path)?
        .as_str()
        .ok_or_else(|| GuardError::new(path, "is not a string"))
}

/// Require a non-empty string.
pub fn require_non_empty_str<'a>(payload: &'a Value, path: &str) -> Result<&'a str, GuardError> {
    let value = require_str(payload, path)?;
    if value.is_empty() {
        return Err(GuardError::new(path, "is empty"));
    }
    Ok(value)
}

/// Require any JSON number.
pub fn require_number(payload: &Value, path: &str) -> Result<f64, GuardError> {
    require(payload, path)?
        .as_f64()
        .ok_or_else(|| GuardError::new(path, "is not numeric"))
}

/// Require a JSON number, read as an integer (floats truncate).
pub fn require_int(payload: &Value, path: &str) -> Result<i64, GuardError> {
    let value = require(payload, path)?;
    as_int(value).ok_or_else(|| GuardError::new(path, "is not numeric"))
}

pub fn require_array<'a>(payload: &'a Value, path: &str) -> Result<&'a Vec<Value>, GuardError> {
    require(payload, path)?
        .as_array()
        .ok_or_else(|| GuardError::new(path, "is not an array"))
}

/// String with a default; absent, null, or non-string yields the default.
pub fn string_or(payload: &Value, path: &str, default: &str) -> String {
    lookup(payload, path)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Bool with a default; `false` is preserved as given.
pub fn bool_or(payload: &Value, path: &str, default: bool) -> bool {
    lookup(payload, path)
        .and_then(Value::as_bool)
        .unwrap_or(default)
}

/// Integer with a default; `0` is preserved as given.
pub fn int_or(payload: &Value, path: &str, default: i64) -> i64 {
    lookup(payload, path).and_then(as_int).unwrap_or(default)
}

/// Number with a default.
pub fn number_or(payload: &Value, path: &str, default: f64) -> f64 {
    lookup(payload, path)
        .and_then(Value::as_f64)
        .unwrap_or(default)
}

/// Optional number; absent or null yields `None`.
pub fn opt_number(payload: &Value, path: &str) -> Option<f64> {
    lookup(payload, path).and_then(Value::as_f64)
}

/// Array with an empty default; absent or non-array yields `[]`.
pub fn array_or(payload: &Value, path: &str) -> Vec<Value> {
    lookup(payload, path)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Object with an empty default.
pub fn object_or(payload: &Value, path: &str) -> Map<String, Value> {
    lookup(payload, path)
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Optional string; absent or null yields `None`.
pub fn opt_string(payload: &Value, path: &str) -> Option<String> {
    lookup(payload, path)
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Optional raw value; absent or null yields `None`.
pub fn opt_value(payload: &Value, path: &str) -> Option<Value> {
    lookup(payload, path).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dot_paths_walk_nested_objects() {
        let payload = json!({"task": {"id": "t-1", "poster": {"name": "Dana"}}});
        assert_eq!(require_str(&payload, "task.id").unwrap(), "t-1");
        assert_eq!(require_str(&payload, "task.poster.name").unwrap(), "Dana");
    }

    #[test]
    fn test_missing_and_null_are_equivalent() {
        let payload = json!({"a": null});
        assert_eq!(
            require(&payload, "a").unwrap_err(),
            GuardError::new("a", "is missing")
        );
        assert_eq!(
            require(&payload, "b").unwrap_err(),
            GuardError::new("b", "is missing")
        );
    }

    #[test]
    fn test_wrong_type_names_the_path() {
        let payload = json!({"task": {"id": 42}});
        let err = require_str(&payload, "task.id").unwrap_err();
        assert_eq!(err.path, "task.id");
        assert_eq!(err.problem, "is not a string");
    }

    #[test]
    fn test_empty_string_fails_non_empty_guard() {
        let payload = json!({"task": {"id": ""}});
        assert_eq!(
            require_non_empty_str(&payload, "task.id").unwrap_err(),
            GuardError::new("task.id", "is empty")
        );
    }

    #[test]
    fn test_numeric_guards_accept_floats() {
        let payload = json!({"xp": 120.0, "amount": 8.5});
        assert_eq!(require_int(&payload, "xp").unwrap(), 120);
        assert_eq!(require_number(&payload, "amount").unwrap(), 8.5);
        assert!(require_int(&payload, "missing").is_err());
    }

    #[test]
    fn test_defaults_fill_absent_and_null_only() {
        let payload = json!({"hasMore": false, "count": 0, "label": "", "absent": null});
        // Falsy-but-present values pass through.
        assert!(!bool_or(&payload, "hasMore", true));
        assert_eq!(int_or(&payload, "count", 7), 0);
        assert_eq!(string_or(&payload, "label", "x"), "");
        // Absent and null take the default.
        assert!(bool_or(&payload, "absent", true));
        assert!(bool_or(&payload, "missing", true));
    }

    #[test]
    fn test_array_or_defaults_on_wrong_type() {
        let payload = json!({"tasks": "not-an-array"});
        assert!(array_or(&payload, "tasks").is_empty());
        let payload = json!({"tasks": [1, 2]});
        assert_eq!(array_or(&payload, "tasks").len(), 2);
    }

    #[test]
    fn test_opt_value_treats_null_as_none() {
        let payload = json!({"systemStatus": null});
        assert_eq!(opt_value(&payload, "systemStatus"), None);
        let payload = json!({"systemStatus": {"banner": "ok"}});
        assert!(opt_value(&payload, "systemStatus").is_some());
    }
}
