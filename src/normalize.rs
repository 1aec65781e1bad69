//! Error normalization and synthetic stack-trace construction.
//!
//! The flow runtime raises loosely structured error records, not typed
//! exceptions. [normalize] turns one record into a reportable exception
//! (error-family tag, cleaned message, synthetic stack text) plus the scope
//! intents (tags, extras) to apply before capture. Everything here is pure:
//! parse misses fall back to documented defaults and lookup misses degrade
//! to placeholders; nothing fails.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;
use tracing::instrument;

use crate::lookup::NodeLookup;
use crate::types::{
  ErrorSource, FlowError, NodeContext, NormalizedException, NormalizedReport, UNKNOWN,
};

/// Anchored `<WordError>: ` prefix, e.g. `TypeError: ` in
/// `TypeError: bad thing happened`. Case-sensitive.
static ERROR_TYPE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^(\w+Error): ").expect("error-type pattern"));

/// `line N, col M` coordinates embedded in runtime error messages.
static LINE_COL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)line (\d+), col (\d+)").expect("line/col pattern"));

/// Splits an error-family tag off the front of a message.
///
/// Returns the captured `\w+Error` token and the message with the first
/// prefix occurrence removed; non-matching messages come back unchanged with
/// no tag.
pub fn extract_error_type(message: &str) -> (Option<String>, String) {
  match ERROR_TYPE_RE.captures(message) {
    Some(caps) => {
      let prefix_end = caps.get(0).map_or(0, |m| m.end());
      (Some(caps[1].to_string()), message[prefix_end..].to_string())
    }
    None => (None, message.to_string()),
  }
}

/// Display label for the node that raised the error: `(name)` when the
/// source carries a non-empty name, else the id followed by one space. The
/// trailing space is kept as-is; existing grouping keys include it.
pub fn source_node_label(source: &ErrorSource) -> String {
  match source.name.as_deref() {
    Some(name) if !name.is_empty() => format!("({name})"),
    _ => format!("{} ", source.id),
  }
}

/// Extracts `line N, col M` coordinates from a message (case-insensitive);
/// `(0, 0)` when the message carries none.
pub fn parse_line_col(message: &str) -> (u32, u32) {
  LINE_COL_RE
    .captures(message)
    .and_then(|caps| {
      let line = caps[1].parse().ok()?;
      let col = caps[2].parse().ok()?;
      Some((line, col))
    })
    .unwrap_or((0, 0))
}

/// Best-effort selection of the 1-based `line` from the node's source text.
/// Any miss (no source text, line 0, out of range) yields the empty string.
pub fn error_line(func: Option<&str>, line: u32) -> String {
  let Some(func) = func else {
    return String::new();
  };
  let Some(index) = (line as usize).checked_sub(1) else {
    return String::new();
  };
  func.lines().nth(index).unwrap_or("").to_string()
}

/// Builds the synthetic stack text for a flow error.
///
/// The frame shape mimics a call stack so grouping and display heuristics
/// built for call-stack traces surface flow-graph locations instead:
///
/// ```text
/// Error: <message>
///     at "<errorLine>" (node/<nodeId>:<line>:<col>)
///     at @node(<type>:<name>) (flows/<flowId>/nodes/<nodeId>:<line>:<col>)
///     at @flow (flows/<flowId>:0:0)
/// ```
///
/// The `:0:0` sentinel on the flow frame is fixed. Unresolved context fields
/// render as `unknown`; this function never fails.
#[instrument(level = "trace", skip(context))]
pub fn build_stack_text(message: &str, node_id: &str, context: Option<&NodeContext>) -> String {
  let (line, col) = parse_line_col(message);

  let err_line = context.map_or_else(String::new, |ctx| error_line(ctx.func.as_deref(), line));
  let kind = context.map_or(UNKNOWN, |ctx| ctx.kind.as_str());
  let name = context.map_or(UNKNOWN, NodeContext::display_name);
  let flow_id = context
    .and_then(|ctx| ctx.flow_id.as_deref())
    .unwrap_or(UNKNOWN);

  format!(
    "Error: {message}\n    at \"{err_line}\" (node/{node_id}:{line}:{col})\n    at @node({kind}:{name}) (flows/{flow_id}/nodes/{node_id}:{line}:{col})\n    at @flow (flows/{flow_id}:0:0)"
  )
}

/// Normalizes a raw flow error into a reportable exception plus scope
/// intents. Pure given `lookup`: the same record always yields the same
/// report.
#[instrument(level = "trace", skip(lookup))]
pub fn normalize(error: &FlowError, lookup: &dyn NodeLookup) -> NormalizedReport {
  let (error_type, message) = extract_error_type(&error.message);
  let context = lookup.resolve_node(&error.source.id);
  let stack_text = build_stack_text(&message, &error.source.id, context.as_ref());

  let mut tags = BTreeMap::new();
  if let Some(ref tag) = error_type {
    tags.insert("error_type".to_string(), tag.clone());
  }
  tags.insert("source_node".to_string(), source_node_label(&error.source));
  // The runtime offers no handled/unhandled signal; existing dashboards
  // filter on the fixed value.
  tags.insert("handled".to_string(), "false".to_string());

  let mut extras = BTreeMap::new();
  extras.insert("source.id".to_string(), json!(error.source.id));
  extras.insert("source.name".to_string(), json!(error.source.name));
  extras.insert("source.type".to_string(), json!(error.source.kind));
  extras.insert("source.count".to_string(), json!(error.source.count));
  extras.insert("source".to_string(), json!(error.source));
  if let Some(ref ctx) = context {
    extras.insert("node".to_string(), json!(ctx));
  }

  NormalizedReport {
    exception: NormalizedException {
      message,
      error_type,
      stack_text,
    },
    tags,
    extras,
  }
}
