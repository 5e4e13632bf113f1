//! Operation coordinator - serialized access to the driver store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{OperationRequest, OperationResult};
use crate::ports::{DriverListParserPort, DriverStorePort, OperationResultSink};

/// Errors returned synchronously by [`OperationCoordinator::submit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinatorError {
    /// Another operation is still in flight; nothing was dispatched and no
    /// state changed.
    #[error("an operation is already in flight")]
    Busy,
}

/// Scope guard that returns the coordinator to idle on drop.
///
/// Created on the worker task so the flag clears even when the store call
/// panics, and only after the sink has seen the result.
struct BusyGuard {
    busy: Arc<AtomicBool>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
    }
}

/// Serializes driver store operations.
///
/// At most one enumerate/add/delete runs at a time, on a worker task off
/// the caller's path, and its result is delivered exactly once to the
/// configured [`OperationResultSink`]. A [`submit`](Self::submit) while an
/// operation is running is rejected with [`CoordinatorError::Busy`] and
/// spawns nothing. The coordinator is the sole caller of the store port,
/// so this single-flight guard is all the synchronization the store needs.
///
/// The guard is an atomic compare-and-set, not a checked-then-set flag, so
/// concurrent callers cannot both win the idle slot. It is released only
/// after the sink call returns; a sink that hands the result off to its
/// owning context therefore observes the idle state by the time its
/// handler runs and may submit a follow-up refresh.
///
/// There is no cancellation: once dispatched, a request runs to completion.
pub struct OperationCoordinator {
    store: Arc<dyn DriverStorePort>,
    parser: Arc<dyn DriverListParserPort>,
    sink: Arc<dyn OperationResultSink>,
    busy: Arc<AtomicBool>,
}

impl OperationCoordinator {
    /// Create a coordinator over the given store, parser, and sink.
    pub fn new(
        store: Arc<dyn DriverStorePort>,
        parser: Arc<dyn DriverListParserPort>,
        sink: Arc<dyn OperationResultSink>,
    ) -> Self {
        Self {
            store,
            parser,
            sink,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether an operation is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Dispatch a request onto a worker task.
    ///
    /// Returns immediately; the outcome arrives through the sink. Must be
    /// called from within a Tokio runtime.
    pub fn submit(&self, request: OperationRequest) -> Result<(), CoordinatorError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!(request = request.kind(), "rejecting submission while busy");
            return Err(CoordinatorError::Busy);
        }

        let guard = BusyGuard {
            busy: Arc::clone(&self.busy),
        };
        let store = Arc::clone(&self.store);
        let parser = Arc::clone(&self.parser);
        let sink = Arc::clone(&self.sink);

        debug!(request = request.kind(), "dispatching store operation");
        tokio::spawn(async move {
            let result = execute(store.as_ref(), parser.as_ref(), request).await;
            sink.deliver(result);
            drop(guard);
        });

        Ok(())
    }
}

/// Run one request against the store and fold every failure into the
/// result value.
async fn execute(
    store: &dyn DriverStorePort,
    parser: &dyn DriverListParserPort,
    request: OperationRequest,
) -> OperationResult {
    match request {
        OperationRequest::Enumerate => {
            let output = match store.enumerate().await {
                Ok(output) => output,
                Err(err) => {
                    warn!(%err, "driver store enumeration failed");
                    String::new()
                }
            };
            let packages = parser.parse(&output);
            debug!(count = packages.len(), "enumeration complete");
            OperationResult::Enumerated { packages }
        }

        OperationRequest::AddPackage { path, install } => {
            let succeeded = match store.add_package(&path, install).await {
                Ok(succeeded) => succeeded,
                Err(err) => {
                    warn!(%err, path = %path.display(), "add package failed");
                    false
                }
            };
            OperationResult::PackageAdded { path, succeeded }
        }

        OperationRequest::DeletePackages { packages, force } => {
            // Partial failure is expected: keep going and report per package.
            let mut succeeded = true;
            let mut report = Vec::with_capacity(packages.len());
            for package in &packages {
                let deleted = match store.delete_package(package, force).await {
                    Ok(deleted) => deleted,
                    Err(err) => {
                        warn!(%err, package = %package.published_name, "delete package failed");
                        false
                    }
                };
                succeeded &= deleted;
                report.push(format!(
                    "{}: {}",
                    package.published_name,
                    if deleted { "succeeded" } else { "failed" }
                ));
            }
            OperationResult::PackagesDeleted {
                succeeded,
                report: report.join("\n"),
            }
        }
    }
}
