//! Path lookups over loosely shaped provider JSON.
//!
//! The provider only sends fields that were requested or apply to the
//! target, and is not consistent about scalar types (`"risk": 66` and
//! `"risk": "66"` both occur). Every reader here returns `None` when any
//! path segment is missing or the leaf has an unusable type.

use serde_json::Value;

/// Walk `path` from `value`, returning `None` at the first missing segment.
pub(crate) fn at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
        .filter(|v| !v.is_null())
}

/// Read a string leaf. Numbers are rendered so codes like `"asn": 13335` still read.
pub(crate) fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    match at(value, path)? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn u64_at(value: &Value, path: &[&str]) -> Option<u64> {
    match at(value, path)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn f64_at(value: &Value, path: &[&str]) -> Option<f64> {
    match at(value, path)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('s').parse().ok(),
        _ => None,
    }
}

/// Read a yes/no flag. Accepts `"yes"`/`"no"`, booleans and `1`/`0`.
pub(crate) fn flag_at(value: &Value, path: &[&str]) -> Option<bool> {
    match at(value, path)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_u64().map(|n| n != 0),
        Value::String(s) => parse_flag(s),
        _ => None,
    }
}

pub(crate) fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Read an array of strings, skipping non-string members.
pub(crate) fn strings_at(value: &Value, path: &[&str]) -> Option<Vec<String>> {
    let items: Vec<String> = at(value, path)?
        .as_array()?
        .iter()
        .filter_map(|v| v.as_str().map(str::to_string))
        .collect();
    (!items.is_empty()).then_some(items)
}
