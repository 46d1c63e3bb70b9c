use crate::model::Side;

/// Errors that can occur while reconstructing hierarchical diff context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A line-number reference required for ancestor resolution was outside
    /// the referenced side's line sequence. This indicates a violated line
    /// differ contract, not a recoverable input condition.
    #[error("{side} config has no line {line_number}; ancestor resolution aborted")]
    LineOutOfBounds { side: Side, line_number: usize },
}

/// Convenience alias for engine results.
pub type DiffResult<T> = Result<T, DiffError>;
