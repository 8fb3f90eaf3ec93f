//! Operation status signal.

use std::fmt;

/// Coarse status of one in-flight asynchronous operation.
///
/// A transient signal delivered to a status callback, not stored state.
/// Per operation, the callback sees at most one of each variant, in one of
/// three orders: `[Completed]`, `[Failed]`, or `[Executing, Completed |
/// Failed]` when the operation outlives the debounce window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    /// Still running after the debounce window elapsed.
    Executing,

    /// Terminated successfully.
    Completed,

    /// Terminated with an error.
    Failed,
}

impl OperationStatus {
    /// Returns true for `Completed` or `Failed`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Executing => write!(f, "executing"),
            OperationStatus::Completed => write!(f, "completed"),
            OperationStatus::Failed => write!(f, "failed"),
        }
    }
}
