//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// All variants are local and synchronous: they surface immediately to the
/// caller and are never retried or recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// A die was constructed with a face count outside the supported set.
    #[error("unsupported die type: {0} faces")]
    InvalidDieType(u32),

    /// A batch roll was requested with a non-positive roll count.
    #[error("number of rolls must be a positive integer, got {0}")]
    InvalidArgument(i64),

    /// An ordering comparison was attempted against a non-die operand.
    #[error("can only compare a die with another die")]
    TypeMismatch,
}
