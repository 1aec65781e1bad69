//! Reporting endpoint configuration carried by the node.

use serde::{Deserialize, Serialize};

/// Environment label used when the config carries none.
pub const DEFAULT_ENVIRONMENT: &str = "debug";

/// Endpoint and environment for the error-aggregation service.
///
/// SDK initialization itself is owned by the host (one-time, process-wide);
/// this type only carries the values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentryConfig {
  /// DSN-equivalent endpoint identifier.
  pub dsn: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub environment: Option<String>,
}

impl SentryConfig {
  pub fn new(dsn: impl Into<String>) -> Self {
    Self {
      dsn: dsn.into(),
      environment: None,
    }
  }

  pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
    self.environment = Some(environment.into());
    self
  }

  /// Environment label, defaulting to [DEFAULT_ENVIRONMENT] when unset or
  /// empty.
  pub fn environment_or_default(&self) -> &str {
    match self.environment.as_deref() {
      Some(env) if !env.is_empty() => env,
      _ => DEFAULT_ENVIRONMENT,
    }
  }
}
