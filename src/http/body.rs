//! Tolerant field access over schema-less response bodies.
//!
//! The backend's responses are treated as loose key/value maps: every helper
//! returns a default when a key is absent or has an unexpected shape, so a
//! reachable endpoint with a surprising body stays inspectable instead of
//! failing the whole run.

use serde_json::{Map, Value};

const EMPTY: &[Value] = &[];

/// String field, or `default` when absent or not a string.
pub fn str_field<'a>(body: &'a Map<String, Value>, key: &str, default: &'a str) -> &'a str {
    body.get(key).and_then(Value::as_str).unwrap_or(default)
}

/// Boolean field, defaulting to false.
pub fn bool_field(body: &Map<String, Value>, key: &str) -> bool {
    body.get(key).and_then(Value::as_bool).unwrap_or(false)
}

/// Array field as a slice, empty when absent or not an array.
pub fn array_field<'a>(body: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    body.get(key)
        .and_then(Value::as_array)
        .map_or(EMPTY, Vec::as_slice)
}

/// Number of elements in an array field, 0 when absent.
pub fn array_len(body: &Map<String, Value>, key: &str) -> usize {
    array_field(body, key).len()
}

/// Number of keys in an object field, 0 when absent or not an object.
pub fn object_len(body: &Map<String, Value>, key: &str) -> usize {
    body.get(key).and_then(Value::as_object).map_or(0, Map::len)
}

/// String field nested one object deep, e.g. `user._id`.
pub fn nested_str<'a>(body: &'a Map<String, Value>, outer: &str, inner: &str) -> Option<&'a str> {
    body.get(outer)
        .and_then(Value::as_object)
        .and_then(|object| object.get(inner))
        .and_then(Value::as_str)
}

/// Integer field nested one object deep, e.g. `compatibility.score`.
pub fn nested_i64(body: &Map<String, Value>, outer: &str, inner: &str, default: i64) -> i64 {
    body.get(outer)
        .and_then(Value::as_object)
        .and_then(|object| object.get(inner))
        .and_then(Value::as_i64)
        .unwrap_or(default)
}

/// Whether a field is present and non-empty: nulls, empty strings, empty
/// arrays, empty objects, zero, and false all count as absent.
pub fn truthy_field(body: &Map<String, Value>, key: &str) -> bool {
    match body.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|value| value != 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(object)) => !object.is_empty(),
    }
}
