//! JSON flattening.
//!
//! A secret whose value is a JSON object can be split into one variable per
//! leaf. Object keys join the path with `_` and array elements append `[i]`,
//! so `{"a": {"b": 1, "c": [2, 3]}}` stored under `S` becomes `S_a_b`,
//! `S_a_c[0]` and `S_a_c[1]`.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::core::domain::{Entry, Secret};
use crate::core::types::VarName;

/// Check whether a string is valid JSON with an object at the top level.
///
/// Arrays, scalars and `null` are rejected.
pub fn is_json_object_string(s: &str) -> bool {
    parse_object(s).is_some()
}

fn parse_object(s: &str) -> Option<Value> {
    match serde_json::from_str::<Value>(s) {
        Ok(object @ Value::Object(_)) => Some(object),
        _ => None,
    }
}

/// Turn a secret into the entries it contributes.
///
/// With `parse_json` off, or when the value is not a JSON object, the secret
/// becomes a single entry under its own identifier with the value untouched.
pub fn flatten(secret: &Secret, parse_json: bool) -> Vec<Entry> {
    if !parse_json {
        return vec![Entry::new(secret.id(), secret.value())];
    }

    match parse_object(secret.value()) {
        Some(object) => {
            let entries = flatten_value(secret.id(), &object);
            trace!(id = %secret.id(), entries = entries.len(), "flattened JSON secret");
            entries
        }
        None => vec![Entry::new(secret.id(), secret.value())],
    }
}

/// Flatten an already parsed JSON value rooted at `root`.
///
/// Later paths that collide with an earlier one overwrite its value but keep
/// its position.
pub fn flatten_value(root: &str, value: &Value) -> Vec<Entry> {
    let mut out = IndexMap::new();
    walk(root, value, &mut out);
    out.into_iter()
        .map(|(name, value)| Entry::new(name, value))
        .collect()
}

fn walk(path: &str, value: &Value, out: &mut IndexMap<VarName, String>) {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                out.insert(path.to_string(), "[]".to_string());
            }
            for (i, item) in items.iter().enumerate() {
                walk(&format!("{}[{}]", path, i), item, out);
            }
        }
        Value::Object(map) => {
            if map.is_empty() && !path.is_empty() {
                out.insert(path.to_string(), "{}".to_string());
            }
            for (key, item) in map {
                walk(&join_key(path, key), item, out);
            }
        }
        leaf => {
            out.insert(path.to_string(), render(leaf));
        }
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}_{}", path, key)
    }
}

/// Largest integer an f64 holds exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Strings are injected verbatim, everything else as compact JSON.
///
/// Integral floats such as `5432.0` or `1e3` render without a fraction.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
