//! Core domain types and port definitions for drvstore.
//!
//! drvstore manages the operating system's driver store through the native
//! enumeration/installation tool. This crate holds everything adapters share:
//! the driver package domain model, the port traits the core expects from
//! infrastructure, and the [`OperationCoordinator`] that serializes store
//! operations and hands finished results back to the caller.
//!
//! Process spawning, output capture, and UI concerns live outside this crate.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    DriverPackage, DriverVersion, OperationRequest, OperationResult, VersionParseError,
    superseded_packages,
};
pub use ports::{
    DriverListParserPort, DriverStoreError, DriverStorePort, NoopDriverListParser, NoopResultSink,
    OperationResultSink,
};
pub use services::{CoordinatorError, OperationCoordinator};
