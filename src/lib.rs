//! # streamweave-sentry
//!
//! Sentry-style error reporting node for StreamWeave flow graphs.
//!
//! Flow runtimes surface node failures as loosely structured error records
//! rather than typed exceptions. This crate normalizes those records into a
//! reportable exception shape (error-family tag, cleaned message, and a
//! synthetic stack trace that maps flow/node coordinates instead of call
//! frames) and forwards them to an error-aggregation sink. Messages may
//! also identify an end user for attribution.
//!
//! ## Architecture
//!
//! Pure normalization lives in [normalize::normalize]; the runtime collaborators are
//! traits ([lookup::NodeLookup] for node/flow context,
//! [sink::ReportingSink] for the aggregation service);
//! [nodes::SentryNode] wires both into the stream graph.

pub mod config;
pub mod lookup;
pub mod node;
pub mod nodes;
pub mod normalize;
pub mod sink;
pub mod types;
pub mod validate;
#[cfg(test)]
mod validate_test;

pub use config::SentryConfig;
pub use lookup::{MapNodeLookup, NoLookup, NodeLookup};
pub use nodes::{SentryNode, process_message};
pub use normalize::normalize;
pub use sink::{
  Breadcrumb, RecordingSink, ReportingSink, Severity, SinkCall, SinkError, TracingSink,
};
pub use types::{
  Delivery, ErrorSource, FlowError, FlowMessage, NodeContext, NormalizedException,
  NormalizedReport, UserIdentity,
};
