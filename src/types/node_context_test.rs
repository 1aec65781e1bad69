//! Tests for `NodeContext`.

use serde_json::json;

use super::node_context::{NodeContext, UNKNOWN};

#[test]
fn deserializes_type_into_kind() {
  let ctx: NodeContext = serde_json::from_value(json!({
    "id": "n1",
    "type": "function",
    "name": "Check",
    "func": "return msg;",
    "flow_id": "f1"
  }))
  .expect("parse");
  assert_eq!(ctx.kind, "function");
  assert_eq!(ctx.func.as_deref(), Some("return msg;"));
}

#[test]
fn optional_fields_default_to_none() {
  let ctx: NodeContext =
    serde_json::from_value(json!({"id": "n1", "type": "switch"})).expect("parse");
  assert_eq!(ctx.name, None);
  assert_eq!(ctx.func, None);
  assert_eq!(ctx.flow_id, None);
}

#[test]
fn display_name_prefers_label() {
  let ctx: NodeContext =
    serde_json::from_value(json!({"id": "n1", "type": "switch", "name": "Check"})).expect("parse");
  assert_eq!(ctx.display_name(), "Check");
}

#[test]
fn display_name_falls_back_to_id() {
  let ctx: NodeContext =
    serde_json::from_value(json!({"id": "n1", "type": "switch"})).expect("parse");
  assert_eq!(ctx.display_name(), "n1");
}

#[test]
fn unknown_placeholder_is_stable() {
  // Stack frames and grouping keys embed this literal.
  assert_eq!(UNKNOWN, "unknown");
}
