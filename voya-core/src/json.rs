//! Defensive accessors over untyped provider JSON.
//!
//! Provider payloads drift; every lookup returns an `Option` (or a safe
//! default) instead of panicking or erroring on a missing link in the path.

use rust_decimal::Decimal;
use serde_json::Value;

/// String at a JSON pointer path, `None` if absent or not a string.
pub fn str_at<'v>(value: &'v Value, pointer: &str) -> Option<&'v str> {
    value.pointer(pointer).and_then(Value::as_str)
}

/// Owned string at a pointer path, empty string if absent.
pub fn string_at(value: &Value, pointer: &str) -> String {
    str_at(value, pointer).unwrap_or_default().to_string()
}

/// Fixed-point decimal at a pointer path. Accepts both string-encoded
/// amounts (the provider's usual form) and bare JSON numbers.
pub fn decimal_at(value: &Value, pointer: &str) -> Option<Decimal> {
    match value.pointer(pointer)? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

/// Small unsigned integer at a pointer path, string-encoded or numeric.
pub fn u8_at(value: &Value, pointer: &str) -> Option<u8> {
    match value.pointer(pointer)? {
        Value::String(s) => s.trim().parse().ok(),
        Value::Number(n) => n.as_u64().and_then(|v| u8::try_from(v).ok()),
        _ => None,
    }
}
