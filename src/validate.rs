//! Structural validity checks for duck-typed message fields.
//!
//! Inbound messages carry loosely shaped JSON; these gates decide which
//! fields are eligible for reporting. Invalid values are skipped, never
//! reported as errors.

use serde_json::Value;

/// Returns true iff `value` is a non-null JSON object with at least one key.
/// Used for generic payloads such as the per-message `sentry` configuration.
pub fn is_valid_record(value: &Value) -> bool {
  value.as_object().is_some_and(|map| !map.is_empty())
}

/// Returns true iff `value` is an object whose `message` is a string and
/// whose `source` is a non-null object. Gates whether an error record (or
/// its "previous error" companion) is eligible for reporting.
pub fn is_valid_error_record(value: &Value) -> bool {
  let Some(obj) = value.as_object() else {
    return false;
  };
  obj.get("message").is_some_and(Value::is_string) && obj.get("source").is_some_and(Value::is_object)
}
