//! Port abstraction the reporting node plugs into.
//!
//! Mirrors the host runtime's node seam: named input/output ports carrying
//! dynamically typed items over boxed streams. Hosts that already have their
//! own node trait can ignore this module and call
//! [crate::nodes::process_message] directly.

use std::any::Any;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use futures::Stream;
use thiserror::Error;

/// Boxed stream of dynamically typed items flowing through one port.
pub type PortStream = Pin<Box<dyn Stream<Item = Arc<dyn Any + Send + Sync>> + Send>>;

/// Input streams keyed by port name.
pub type InputStreams = HashMap<String, PortStream>;

/// Output streams keyed by port name.
pub type OutputStreams = HashMap<String, PortStream>;

/// Error raised when a node cannot start executing.
#[derive(Debug, Error)]
pub enum NodeExecutionError {
  /// A required input port was not connected.
  #[error("missing input port '{0}'")]
  MissingInputPort(String),
}

/// A processing node in the flow graph.
///
/// `execute` consumes the connected input streams and returns the output
/// streams; per-item processing happens on spawned tasks and the returned
/// streams complete once the inputs are drained.
#[async_trait]
pub trait Node: Send + Sync {
  fn name(&self) -> &str;

  fn set_name(&mut self, name: &str);

  fn input_port_names(&self) -> &[String];

  fn output_port_names(&self) -> &[String];

  fn has_input_port(&self, name: &str) -> bool;

  fn has_output_port(&self, name: &str) -> bool;

  async fn execute(&self, inputs: InputStreams) -> Result<OutputStreams, NodeExecutionError>;
}
