//! Reporting sink collaborator: scope mutation, breadcrumbs, capture.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use crate::types::{NormalizedException, UserIdentity};

/// Severity attached to breadcrumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Debug,
  Info,
  Warning,
  Error,
  Fatal,
}

/// Contextual event attached to the reporting scope, shown alongside a
/// captured exception to aid debugging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breadcrumb {
  pub category: String,
  pub message: String,
  /// Breadcrumb type understood by the aggregation service (`error`,
  /// `default`, ...).
  #[serde(rename = "type")]
  pub kind: String,
  pub level: Severity,
  pub timestamp: DateTime<Utc>,
}

impl Breadcrumb {
  /// Error-level breadcrumb in the given category, stamped now.
  pub fn error(category: impl Into<String>, message: impl Into<String>) -> Self {
    Self {
      category: category.into(),
      message: message.into(),
      kind: "error".to_string(),
      level: Severity::Error,
      timestamp: Utc::now(),
    }
  }
}

/// Failure surfaced by a sink call. Transport is fire-and-forget inside the
/// sink; these cover local hand-off problems only.
#[derive(Debug, Error)]
pub enum SinkError {
  /// The sink refused the call (e.g. its buffer is gone or it is shut down).
  #[error("reporting sink rejected {call}: {reason}")]
  Rejected { call: &'static str, reason: String },
}

/// The error-aggregation service as seen by the reporting node.
///
/// All calls are synchronous from the caller's point of view; transport,
/// batching and retry live behind the implementation. Scope state is
/// process-wide and last-write-wins.
pub trait ReportingSink: Send + Sync {
  fn set_tag(&self, key: &str, value: &str) -> Result<(), SinkError>;

  fn set_extra(&self, key: &str, value: &Value) -> Result<(), SinkError>;

  /// Applies end-user identity to the scope.
  fn set_user(&self, user: &UserIdentity) -> Result<(), SinkError>;

  fn add_breadcrumb(&self, breadcrumb: &Breadcrumb) -> Result<(), SinkError>;

  /// Submits an exception for aggregation; returns the assigned event id.
  fn capture_exception(&self, exception: &NormalizedException) -> Result<Uuid, SinkError>;
}

/// Sink that emits structured tracing events instead of talking to a real
/// aggregation service. Default wiring for local runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ReportingSink for TracingSink {
  fn set_tag(&self, key: &str, value: &str) -> Result<(), SinkError> {
    info!(key, value, "scope tag");
    Ok(())
  }

  fn set_extra(&self, key: &str, value: &Value) -> Result<(), SinkError> {
    info!(key, %value, "scope extra");
    Ok(())
  }

  fn set_user(&self, user: &UserIdentity) -> Result<(), SinkError> {
    info!(user = ?user, "scope user");
    Ok(())
  }

  fn add_breadcrumb(&self, breadcrumb: &Breadcrumb) -> Result<(), SinkError> {
    info!(
      category = %breadcrumb.category,
      message = %breadcrumb.message,
      "breadcrumb"
    );
    Ok(())
  }

  fn capture_exception(&self, exception: &NormalizedException) -> Result<Uuid, SinkError> {
    let event_id = Uuid::new_v4();
    error!(
      %event_id,
      error_type = exception.error_type.as_deref().unwrap_or(""),
      message = %exception.message,
      stack = %exception.stack_text,
      "captured exception"
    );
    Ok(event_id)
  }
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
  Tag { key: String, value: String },
  Extra { key: String, value: Value },
  User(UserIdentity),
  Breadcrumb(Breadcrumb),
  Capture(NormalizedException),
}

/// Sink that records every call in order. Backs this crate's tests; also
/// usable by hosts that buffer reports themselves.
#[derive(Debug, Default)]
pub struct RecordingSink {
  calls: Mutex<Vec<SinkCall>>,
}

impl RecordingSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Snapshot of all calls so far, in call order.
  pub fn calls(&self) -> Vec<SinkCall> {
    self.calls.lock().expect("sink call log").clone()
  }

  fn push(&self, call: SinkCall) {
    self.calls.lock().expect("sink call log").push(call);
  }
}

impl ReportingSink for RecordingSink {
  fn set_tag(&self, key: &str, value: &str) -> Result<(), SinkError> {
    self.push(SinkCall::Tag {
      key: key.to_string(),
      value: value.to_string(),
    });
    Ok(())
  }

  fn set_extra(&self, key: &str, value: &Value) -> Result<(), SinkError> {
    self.push(SinkCall::Extra {
      key: key.to_string(),
      value: value.clone(),
    });
    Ok(())
  }

  fn set_user(&self, user: &UserIdentity) -> Result<(), SinkError> {
    self.push(SinkCall::User(user.clone()));
    Ok(())
  }

  fn add_breadcrumb(&self, breadcrumb: &Breadcrumb) -> Result<(), SinkError> {
    self.push(SinkCall::Breadcrumb(breadcrumb.clone()));
    Ok(())
  }

  fn capture_exception(&self, exception: &NormalizedException) -> Result<Uuid, SinkError> {
    self.push(SinkCall::Capture(exception.clone()));
    Ok(Uuid::new_v4())
  }
}
