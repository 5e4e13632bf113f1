//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure. They
//! contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No process or console-capture details in any signature
//! - Intent-based methods for the driver store (not tool-flag-leaking)
//! - Result delivery is a port too, so adapters choose where completions run

mod driver_store;
mod list_parser;
mod result_sink;

pub use driver_store::{DriverStoreError, DriverStorePort};
pub use list_parser::{DriverListParserPort, NoopDriverListParser};
pub use result_sink::{NoopResultSink, OperationResultSink};

#[cfg(test)]
pub use list_parser::MockDriverListParserPort;
