//! Enumeration-output parser port.

use crate::domain::DriverPackage;

/// Turns captured enumeration output into driver package records.
///
/// Implementations must be total and deterministic: malformed records are
/// omitted rather than surfaced as errors, and repeated calls on the same
/// input return structurally identical output, in source order.
#[cfg_attr(test, mockall::automock)]
pub trait DriverListParserPort: Send + Sync {
    /// Parse the full captured output of one enumeration run.
    fn parse(&self, output: &str) -> Vec<DriverPackage>;
}

/// Parser that yields no records, for wiring paths that never enumerate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDriverListParser;

impl DriverListParserPort for NoopDriverListParser {
    fn parse(&self, _output: &str) -> Vec<DriverPackage> {
        Vec::new()
    }
}
