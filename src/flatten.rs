//! Flattening of nested JSON objects into dotted key-value pairs.
//!
//! Nested objects are walked depth-first and every non-object leaf becomes
//! one entry whose key is the dot-joined chain of keys leading to it:
//!
//! ```
//! use json_card::flatten::flatten;
//! use serde_json::json;
//!
//! let doc = json!({"user": {"name": "Alice", "age": 30}, "tags": ["x", "y"]});
//! let flat = flatten(doc.as_object().unwrap());
//!
//! let entries: Vec<_> = flat.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
//! assert_eq!(
//!     entries,
//!     [("user.name", "Alice"), ("user.age", "30"), ("tags", "x, y")]
//! );
//! ```
//!
//! # Rendering
//!
//! Leaves are rendered to text with fixed rules:
//! - `null` becomes `"null"`, booleans become `"true"` / `"false"`
//! - strings are used as-is, without quotes
//! - integral floats below `1e21` drop their fractional part (`2.0` → `"2"`)
//! - arrays are joined with `", "`; a nested array inside an array is joined
//!   with `","` and an object inside an array is rendered as compact JSON

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Separator placed between the keys of a flattened path.
pub const PATH_SEPARATOR: char = '.';

/// Separator placed between rendered array elements.
pub const ARRAY_SEPARATOR: &str = ", ";

/// Insertion-ordered mapping from dotted path to rendered leaf value.
pub type FlattenedMap = IndexMap<String, String>;

/// Flattens a JSON object into an ordered map of dotted paths to strings.
///
/// Entries appear in the order their leaves occur in the source document.
/// Intermediate objects produce no entry of their own, so an empty nested
/// object contributes nothing.
#[must_use]
pub fn flatten(object: &Map<String, Value>) -> FlattenedMap {
    let mut out = FlattenedMap::with_capacity(object.len());
    flatten_into(object, "", &mut out);
    out
}

fn flatten_into(object: &Map<String, Value>, prefix: &str, out: &mut FlattenedMap) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{PATH_SEPARATOR}{key}")
        };

        match value {
            Value::Object(child) => flatten_into(child, &path, out),
            Value::Array(items) => {
                out.insert(path, render_array(items));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                out.insert(path, render_scalar(value));
            }
        }
    }
}

fn render_array(items: &[Value]) -> String {
    items
        .iter()
        .map(render_element)
        .collect::<Vec<_>>()
        .join(ARRAY_SEPARATOR)
}

fn render_element(value: &Value) -> String {
    match value {
        Value::Array(inner) => inner
            .iter()
            .map(render_element)
            .collect::<Vec<_>>()
            .join(","),
        other => render_scalar(other),
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        // Only reachable for array elements.
        Value::Object(_) | Value::Array(_) => value.to_string(),
    }
}

fn render_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }

    match number.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => number.to_string(),
    }
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;
