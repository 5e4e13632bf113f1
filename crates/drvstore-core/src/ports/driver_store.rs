//! Driver store capability port.
//!
//! The store is backed by the platform's native driver tooling; the adapter
//! that locates and spawns that tool lives outside this crate. The
//! coordinator is the only caller of this port, which is what lets the
//! store be treated as a serially reentrant resource without any further
//! synchronization.

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

use crate::domain::DriverPackage;

/// Failures of the store adapter itself (spawn, capture, decode).
///
/// The native tool reports its own failures in-band (`false` from a
/// mutation, empty text from an enumeration), so these variants only cover
/// the adapter's side of the call.
#[derive(Debug, Error)]
pub enum DriverStoreError {
    /// The native tool could not be launched.
    #[error("failed to launch driver store tool: {0}")]
    Spawn(String),

    /// The tool's console output could not be captured or decoded.
    #[error("failed to capture tool output: {0}")]
    Capture(String),

    /// Any other adapter-side failure.
    #[error("driver store failure: {0}")]
    Other(String),
}

/// Capability interface over the operating system's driver store.
///
/// Calls may take as long as the underlying tool runs; no timeout is
/// imposed at this layer.
#[async_trait]
pub trait DriverStorePort: Send + Sync {
    /// Run an enumeration and return the captured console output verbatim.
    async fn enumerate(&self) -> Result<String, DriverStoreError>;

    /// Stage the package at `path`, optionally installing it on matching
    /// devices. `Ok(false)` means the tool itself reported failure.
    async fn add_package(&self, path: &Path, install: bool) -> Result<bool, DriverStoreError>;

    /// Remove a staged package. With `force`, the driver is also removed
    /// from devices currently using it. `Ok(false)` means the tool itself
    /// reported failure.
    async fn delete_package(
        &self,
        package: &DriverPackage,
        force: bool,
    ) -> Result<bool, DriverStoreError>;
}
