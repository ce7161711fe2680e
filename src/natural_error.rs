use thiserror::Error;

/// Failures reported by [`Natural`](crate::Natural) operations.
///
/// The operator traits panic with the `Display` text of these values; the
/// `checked_*` methods return them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalError {
    #[error("invalid argument: cannot build a natural number from {0}")]
    InvalidConstruction(i64),
    #[error("invalid operation: negative result")]
    NegativeResult,
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid argument: base must be at least 2")]
    InvalidBase,
}
