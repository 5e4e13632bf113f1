//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (process spawning, text capture, UI state).
//!
//! # Structure
//!
//! - `package` - Driver package records and supersession analysis
//! - `version` - Four-part driver version numbers
//! - `operation` - Requests and results exchanged with the coordinator

mod operation;
mod package;
mod version;

// Re-export at the domain level for convenience
pub use operation::{OperationRequest, OperationResult};
pub use package::{DriverPackage, superseded_packages};
pub use version::{DriverVersion, VersionParseError};
