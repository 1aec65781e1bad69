//! Tests for `validate`.

use serde_json::json;

use crate::validate::{is_valid_error_record, is_valid_record};

#[test]
fn valid_record_accepts_non_empty_object() {
  assert!(is_valid_record(&json!({"user": {"id": "u1"}})));
  assert!(is_valid_record(&json!({"anything": 1})));
}

#[test]
fn valid_record_rejects_empty_object() {
  assert!(!is_valid_record(&json!({})));
}

#[test]
fn valid_record_rejects_non_objects() {
  assert!(!is_valid_record(&json!(null)));
  assert!(!is_valid_record(&json!("sentry")));
  assert!(!is_valid_record(&json!(42)));
  assert!(!is_valid_record(&json!([1, 2, 3])));
}

#[test]
fn valid_error_record_accepts_message_and_source() {
  let value = json!({"message": "boom", "source": {"id": "n1"}});
  assert!(is_valid_error_record(&value));
}

#[test]
fn valid_error_record_rejects_missing_message() {
  assert!(!is_valid_error_record(&json!({"source": {"id": "n1"}})));
}

#[test]
fn valid_error_record_rejects_non_string_message() {
  let value = json!({"message": 42, "source": {"id": "n1"}});
  assert!(!is_valid_error_record(&value));
}

#[test]
fn valid_error_record_rejects_null_or_missing_source() {
  assert!(!is_valid_error_record(&json!({"message": "boom"})));
  assert!(!is_valid_error_record(&json!({"message": "boom", "source": null})));
  assert!(!is_valid_error_record(&json!({"message": "boom", "source": "n1"})));
}

#[test]
fn valid_error_record_rejects_non_objects() {
  assert!(!is_valid_error_record(&json!(null)));
  assert!(!is_valid_error_record(&json!("boom")));
  assert!(!is_valid_error_record(&json!(["boom"])));
}
