//! Node context resolved from the flow-runtime lookup.

use serde::{Deserialize, Serialize};

/// Placeholder rendered in synthetic stack frames when a context field
/// cannot be resolved.
pub const UNKNOWN: &str = "unknown";

/// What the host runtime knows about a node, looked up by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeContext {
  pub id: String,
  /// Node-kind identifier (`type` on the wire).
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// The node's source text; absent for non-code nodes.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub func: Option<String>,
  /// Id of the owning flow.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub flow_id: Option<String>,
}

impl NodeContext {
  /// Display name for stack frames: the human label when set, else the id.
  pub fn display_name(&self) -> &str {
    self.name.as_deref().unwrap_or(&self.id)
  }
}
