//! Tests for `FlowError` / `ErrorSource` parsing.

use serde_json::json;

use super::flow_error::FlowError;

#[test]
fn from_value_parses_full_record() {
  let value = json!({
    "message": "TypeError: bad thing happened",
    "source": {"id": "n1", "name": "Check", "type": "switch", "count": 2}
  });
  let err = FlowError::from_value(&value).expect("valid record");
  assert_eq!(err.message, "TypeError: bad thing happened");
  assert_eq!(err.source.id, "n1");
  assert_eq!(err.source.name.as_deref(), Some("Check"));
  assert_eq!(err.source.kind.as_deref(), Some("switch"));
  assert_eq!(err.source.count, Some(2));
}

#[test]
fn from_value_allows_sparse_source() {
  let value = json!({"message": "boom", "source": {"id": "n1"}});
  let err = FlowError::from_value(&value).expect("valid record");
  assert_eq!(err.source.name, None);
  assert_eq!(err.source.kind, None);
  assert_eq!(err.source.count, None);
}

#[test]
fn from_value_ignores_unknown_fields() {
  let value = json!({
    "message": "boom",
    "source": {"id": "n1", "wires": [["n2"]]},
    "timestamp": 123
  });
  assert!(FlowError::from_value(&value).is_some());
}

#[test]
fn from_value_rejects_invalid_records() {
  assert!(FlowError::from_value(&json!(null)).is_none());
  assert!(FlowError::from_value(&json!("boom")).is_none());
  assert!(FlowError::from_value(&json!({"message": "boom"})).is_none());
  assert!(FlowError::from_value(&json!({"message": 42, "source": {"id": "n1"}})).is_none());
  assert!(FlowError::from_value(&json!({"message": "boom", "source": null})).is_none());
}

#[test]
fn from_value_rejects_source_without_id() {
  let value = json!({"message": "boom", "source": {"name": "Check"}});
  assert!(FlowError::from_value(&value).is_none());
}

#[test]
fn source_serializes_kind_as_type() {
  let value = json!({"message": "boom", "source": {"id": "n1", "type": "switch"}});
  let err = FlowError::from_value(&value).expect("valid record");
  let round = json!(err.source);
  assert_eq!(round.get("type"), Some(&json!("switch")));
  assert_eq!(round.get("kind"), None);
}
