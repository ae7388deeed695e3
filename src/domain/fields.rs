//! Field predicates shared by the dish and order validators.

use serde_json::Value;

use super::errors::DomainError;

/// Presence follows the loose rules of the public API: a field is absent
/// when it is missing, `null`, `false`, zero, or an empty string. Arrays
/// and objects always count as present, even when empty.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integer shape check: any JSON number with a zero fractional part counts,
/// so `5` and `5.0` both pass while `5.5` and `"5"` do not.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        _ => None,
    }
}

/// Require a non-empty text field, rejecting with `message` otherwise.
pub fn require_text(value: Option<&str>, message: &str) -> Result<String, DomainError> {
    value
        .filter(|text| !text.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DomainError::validation(message))
}

/// Require a present raw value, rejecting with `message` otherwise.
pub fn require_present<'v>(
    value: Option<&'v Value>,
    message: &str,
) -> Result<&'v Value, DomainError> {
    value
        .filter(|v| is_present(v))
        .ok_or_else(|| DomainError::validation(message))
}
