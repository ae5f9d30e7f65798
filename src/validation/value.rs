//! JSON value inspection helpers.

use serde_json::{Number, Value};

/// JSON type name of a value, for logs.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// String length in Unicode scalar values, not bytes.
pub fn string_length(s: &str) -> usize {
    s.chars().count()
}

/// The JSON number held by a value.
///
/// Numeric-looking strings are not numbers.
pub fn as_number(value: &Value) -> Option<&Number> {
    match value {
        Value::Number(n) => Some(n),
        _ => None,
    }
}

/// Numeric equality: exact when both sides are integers, `f64` otherwise.
///
/// `1` and `1.0` are equal; `2^53` and `2^53 + 1` are not.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if (a.is_i64() || a.is_u64()) && (b.is_i64() || b.is_u64()) {
        // One side negative, the other beyond i64::MAX
        return false;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
