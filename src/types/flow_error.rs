//! Raw error record raised by a node in the flow graph.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validate::is_valid_error_record;

/// Structural reference to the node that raised an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSource {
  pub id: String,
  /// Optional human label.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// Node-kind identifier (`type` on the wire).
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  /// Occurrence counter maintained by the runtime.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub count: Option<i64>,
}

/// Error record as delivered on a flow message. Only obtainable through
/// [FlowError::from_value], so holders are always structurally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowError {
  pub message: String,
  pub source: ErrorSource,
}

impl FlowError {
  /// Discriminated parse of a duck-typed `error` field: `Some` iff the value
  /// is a valid error record (non-null object, string `message`, non-null
  /// object `source` carrying an `id`). Unknown fields are ignored.
  pub fn from_value(value: &Value) -> Option<FlowError> {
    if !is_valid_error_record(value) {
      return None;
    }
    serde_json::from_value(value.clone()).ok()
  }
}
