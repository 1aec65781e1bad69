//! Stream nodes provided by this crate.

mod report_error;

pub use report_error::{SentryNode, process_message};
