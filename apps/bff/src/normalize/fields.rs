//! Tolerant accessors over untyped backend JSON.
//!
//! Each accessor takes a list of candidate keys and returns the first one that
//! is present and non-null, so callers can cover snake_case, camelCase and
//! Go-style spellings in one place.

use serde_json::Value;

pub fn field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
}

/// Strings come back as-is; numbers and booleans are stringified.
pub fn str_field(value: &Value, keys: &[&str]) -> Option<String> {
    field(value, keys).and_then(|v| match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

pub fn int_field(value: &Value, keys: &[&str]) -> Option<i32> {
    field(value, keys).and_then(as_int)
}

pub fn bool_field(value: &Value, keys: &[&str]) -> Option<bool> {
    field(value, keys).and_then(|v| match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Integers, integral floats and numeric strings that fit in a GraphQL `Int`.
pub fn as_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .and_then(|i| i32::try_from(i).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A scalar as it would read to a person: strings unquoted, everything else JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
