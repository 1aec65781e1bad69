//! Reporting node: normalizes flow errors and forwards them to the sink.
//!
//! Pure orchestration lives in [process_message]; [SentryNode] wraps it for
//! the stream graph. No failure here ever reaches the message sender; the
//! outcome is reflected only in the outbound `{ sent }` payload.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, error, info, instrument};

use crate::config::SentryConfig;
use crate::lookup::NodeLookup;
use crate::node::{InputStreams, Node, NodeExecutionError, OutputStreams, PortStream};
use crate::normalize::normalize;
use crate::sink::{Breadcrumb, ReportingSink, SinkError};
use crate::types::{FlowError, FlowMessage, UserIdentity};
use crate::validate::is_valid_record;

/// Applies per-message user identity from a `sentry` config payload.
/// Malformed payloads (non-object config, non-object or empty `user`) leave
/// the scope untouched.
fn apply_user_config(config: &Value, sink: &dyn ReportingSink) -> Result<(), SinkError> {
  if !is_valid_record(config) {
    return Ok(());
  }
  let Some(user_value) = config.get("user") else {
    return Ok(());
  };
  let Some(user) = UserIdentity::from_value(user_value) else {
    return Ok(());
  };
  sink.set_user(&user)
}

/// Normalizes and reports the message's `error`, recording a
/// `previous_error` breadcrumb first when the message also carries a valid
/// companion error. Returns `true` iff an exception was captured.
fn report_errors(
  msg: &FlowMessage,
  lookup: &dyn NodeLookup,
  sink: &dyn ReportingSink,
) -> Result<bool, SinkError> {
  let Some(error) = msg.error.as_ref().and_then(FlowError::from_value) else {
    return Ok(false);
  };
  let report = normalize(&error, lookup);

  let has_previous = msg
    .previous_error
    .as_ref()
    .is_some_and(|value| FlowError::from_value(value).is_some());
  if has_previous {
    // The breadcrumb carries the current error, not the companion one.
    // Kept as-is: existing event timelines are built around it.
    sink.add_breadcrumb(&Breadcrumb::error(
      "previous_error",
      report.exception.message.clone(),
    ))?;
  }

  for (key, value) in &report.tags {
    sink.set_tag(key, value)?;
  }
  for (key, value) in &report.extras {
    sink.set_extra(key, value)?;
  }
  let event_id = sink.capture_exception(&report.exception)?;
  debug!(%event_id, source = %error.source.id, "exception captured");
  Ok(true)
}

/// One message end to end: user identity, then error reporting.
fn handle(
  msg: &FlowMessage,
  lookup: &dyn NodeLookup,
  sink: &dyn ReportingSink,
) -> Result<bool, SinkError> {
  if let Some(config) = msg.sentry.as_ref() {
    apply_user_config(config, sink)?;
  }
  report_errors(msg, lookup, sink)
}

/// Processes one inbound message and returns the outbound message with
/// `payload` replaced by `{ sent }`.
///
/// This is the absorbing boundary: sink failures are logged and force
/// `sent: false`, and the message is always forwarded, never dropped.
#[instrument(level = "trace", skip_all)]
pub fn process_message(
  msg: &FlowMessage,
  lookup: &dyn NodeLookup,
  sink: &dyn ReportingSink,
) -> FlowMessage {
  let sent = handle(msg, lookup, sink).unwrap_or_else(|err| {
    error!(%err, "error report failed; forwarding message unreported");
    false
  });
  msg.with_delivery(sent)
}

/// Stream node that reports flow errors carried on [FlowMessage] items.
/// Items of any other type pass through unchanged.
pub struct SentryNode {
  /// Node display name.
  name: String,
  /// Input port names (e.g. `in`).
  input_ports: Vec<String>,
  /// Output port names (e.g. `out`).
  output_ports: Vec<String>,
  /// Endpoint configuration; initialization itself is owned by the host.
  config: SentryConfig,
  lookup: Arc<dyn NodeLookup>,
  sink: Arc<dyn ReportingSink>,
}

impl SentryNode {
  pub fn new(
    name: impl Into<String>,
    config: SentryConfig,
    lookup: Arc<dyn NodeLookup>,
    sink: Arc<dyn ReportingSink>,
  ) -> Self {
    Self {
      name: name.into(),
      input_ports: vec!["in".to_string()],
      output_ports: vec!["out".to_string()],
      config,
      lookup,
      sink,
    }
  }

  pub fn config(&self) -> &SentryConfig {
    &self.config
  }
}

#[async_trait]
impl Node for SentryNode {
  fn name(&self) -> &str {
    &self.name
  }

  fn set_name(&mut self, name: &str) {
    self.name = name.to_string();
  }

  fn input_port_names(&self) -> &[String] {
    &self.input_ports
  }

  fn output_port_names(&self) -> &[String] {
    &self.output_ports
  }

  fn has_input_port(&self, name: &str) -> bool {
    name == "in"
  }

  fn has_output_port(&self, name: &str) -> bool {
    name == "out"
  }

  async fn execute(&self, mut inputs: InputStreams) -> Result<OutputStreams, NodeExecutionError> {
    info!(
      node = %self.name,
      dsn = %self.config.dsn,
      environment = self.config.environment_or_default(),
      "sentry reporting node starting"
    );
    let in_stream = inputs
      .remove("in")
      .ok_or_else(|| NodeExecutionError::MissingInputPort("in".to_string()))?;
    let (out_tx, out_rx) = tokio::sync::mpsc::channel(16);
    let lookup = Arc::clone(&self.lookup);
    let sink = Arc::clone(&self.sink);

    tokio::spawn(async move {
      use futures::StreamExt;
      let mut s = in_stream;
      while let Some(item) = s.next().await {
        let out_item: Arc<dyn Any + Send + Sync> = match item.downcast::<FlowMessage>() {
          Ok(msg) => Arc::new(process_message(&msg, lookup.as_ref(), sink.as_ref())),
          Err(other) => other,
        };
        let _ = out_tx.send(out_item).await;
      }
    });

    let mut outputs = HashMap::new();
    outputs.insert(
      "out".to_string(),
      Box::pin(ReceiverStream::new(out_rx)) as PortStream,
    );
    Ok(outputs)
  }
}
