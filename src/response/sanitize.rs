//! Recursive null removal from decoded JSON.

use serde_json::Value;

/// Remove null entries from a JSON tree, at every depth.
///
/// Arrays drop their null elements (remaining elements keep their relative
/// order); objects drop null-valued keys (remaining key order preserved).
/// A bare null is only removed when it sits inside a container: passed a
/// top-level `Value::Null`, this returns it unchanged.
///
/// Recursion depth is bounded by the nesting of the decoded document, which
/// the decoder already limits to realistic depths.
pub fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|item| !item.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        scalar => scalar,
    }
}
