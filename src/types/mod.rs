//! Message and report types flowing through the reporting node.
//!
//! These travel through the stream graph as `Arc<dyn Any>`.

mod flow_error;
#[cfg(test)]
mod flow_error_test;
mod flow_message;
mod node_context;
#[cfg(test)]
mod node_context_test;
mod normalized_report;
mod user_identity;

pub use flow_error::{ErrorSource, FlowError};
pub use flow_message::{Delivery, FlowMessage};
pub use node_context::{NodeContext, UNKNOWN};
pub use normalized_report::{NormalizedException, NormalizedReport};
pub use user_identity::UserIdentity;
