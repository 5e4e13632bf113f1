//! Completion delivery port.

use crate::domain::OperationResult;

/// Receives the result of a completed operation, exactly once per accepted
/// request.
///
/// `deliver` runs on the coordinator's worker task. The implementation owns
/// the hop onto whatever context holds caller-visible state (a UI event
/// loop, a channel drained elsewhere) and should hand the value off rather
/// than process it in place: the coordinator stays busy until `deliver`
/// returns.
pub trait OperationResultSink: Send + Sync {
    /// Accept a completed result.
    fn deliver(&self, result: OperationResult);
}

/// Sink that drops results, for fire-and-forget wiring in tests and tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResultSink;

impl OperationResultSink for NoopResultSink {
    fn deliver(&self, _result: OperationResult) {}
}
