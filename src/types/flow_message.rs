//! Message shape flowing through the reporting node.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Outbound payload: whether an exception was captured for this message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
  pub sent: bool,
}

/// A flow message as delivered to the reporting node.
///
/// Fields the node does not interpret are carried through untouched in
/// `rest`; the node never drops a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowMessage {
  /// Error record raised by an upstream node, if any.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<Value>,
  /// Companion "previous error" left by an upstream catch node.
  #[serde(default, rename = "_error", skip_serializing_if = "Option::is_none")]
  pub previous_error: Option<Value>,
  /// Per-message reporting configuration (user identity).
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sentry: Option<Value>,
  #[serde(default)]
  pub payload: Value,
  #[serde(flatten)]
  pub rest: Map<String, Value>,
}

impl FlowMessage {
  /// The outbound message: this message with `payload` replaced by
  /// `{ "sent": <sent> }`. All other fields are forwarded as-is.
  pub fn with_delivery(&self, sent: bool) -> FlowMessage {
    let mut out = self.clone();
    out.payload = json!(Delivery { sent });
    out
  }
}
