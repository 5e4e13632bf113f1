//! Operation requests and results exchanged with the coordinator.
//!
//! # Wire Format
//!
//! Both unions serialize with a `type` tag so GUI adapters can consume them
//! as discriminated unions:
//!
//! ```json
//! { "type": "packages_deleted", "succeeded": false, "report": "oem4.inf: failed" }
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::DriverPackage;

/// A unit of work submitted to the coordinator.
///
/// Exactly one request may be outstanding at a time; submissions while one
/// is in flight are rejected, not queued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationRequest {
    /// Re-read the store and produce the full package list.
    Enumerate,

    /// Stage a driver package in the store.
    AddPackage {
        /// Path of the INF file to stage.
        path: PathBuf,
        /// Also install the driver on matching devices after staging.
        install: bool,
    },

    /// Remove one or more staged packages, in the order given.
    DeletePackages {
        packages: Vec<DriverPackage>,
        /// Also uninstall the driver from devices currently using it.
        force: bool,
    },
}

impl OperationRequest {
    /// Short request name for logging.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Enumerate => "enumerate",
            Self::AddPackage { .. } => "add_package",
            Self::DeletePackages { .. } => "delete_packages",
        }
    }
}

/// The outcome of a completed operation, delivered exactly once per
/// accepted request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperationResult {
    /// Full package list produced by an [`OperationRequest::Enumerate`].
    Enumerated { packages: Vec<DriverPackage> },

    /// Result of staging a single package.
    PackageAdded {
        /// The path that was submitted, for message composition.
        path: PathBuf,
        succeeded: bool,
    },

    /// Aggregate result of a delete batch.
    PackagesDeleted {
        /// `true` only when every individual delete succeeded.
        succeeded: bool,
        /// One `"<name>: succeeded|failed"` line per package, in
        /// submission order.
        report: String,
    },
}
