//! Error types for the helper layer.
//!
//! The binding helpers themselves are infallible by design: malformed input
//! is coerced (values cast, empty entries dropped) rather than rejected.
//! The error type covers the remaining fallible surfaces, which are all
//! name-to-enum parses.

use thiserror::Error;

/// Result type for fallible dqlkit operations.
pub type DqlResult<T> = Result<T, DqlError>;

/// Errors produced by the helper layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DqlError {
    /// A time-diff unit name did not match any known unit.
    #[error("unknown time-diff unit: {0}")]
    UnknownDiffUnit(String),

    /// A parameter type name did not match any known binding type.
    #[error("unknown parameter type: {0}")]
    UnknownParamType(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DqlError::UnknownDiffUnit("fortnight".into());
        assert_eq!(err.to_string(), "unknown time-diff unit: fortnight");

        let err = DqlError::UnknownParamType("money".into());
        assert_eq!(err.to_string(), "unknown parameter type: money");
    }
}
