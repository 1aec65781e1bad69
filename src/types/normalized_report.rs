//! Output of error normalization: exception shape plus scope intents.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Reportable exception produced from a raw flow error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedException {
  /// Message with any leading `<WordError>: ` prefix stripped.
  pub message: String,
  /// Captured `\w+Error` token, when the message carried one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_type: Option<String>,
  /// Synthetic multi-line stack text mapping flow/node coordinates.
  pub stack_text: String,
}

/// Exception plus the scope intents (tags, extras) to apply before capture.
///
/// The normalizer never mutates sink scope itself; the orchestration layer
/// applies these. Maps are ordered so normalizing the same record twice
/// yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedReport {
  pub exception: NormalizedException,
  pub tags: BTreeMap<String, String>,
  pub extras: BTreeMap<String, Value>,
}
