use thiserror::Error;

/// Represents failures of the statistics engine.
///
/// These carry no source location; the interpreter wraps them into
/// [`RuntimeError::Statistics`](crate::error::RuntimeError::Statistics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StatError {
    /// The sample has no elements.
    #[error("sample is empty")]
    EmptySample,
    /// Paired statistics need samples of equal length.
    #[error("samples have different lengths ({left} and {right})")]
    LengthMismatch {
        /// Length of the first sample.
        left:  usize,
        /// Length of the second sample.
        right: usize,
    },
    /// Correlation is undefined when a standard deviation is zero or not
    /// finite.
    #[error("standard deviation must be finite and greater than zero")]
    DegenerateDeviation,
    /// The moment order does not fit the exponent range.
    #[error("moment order {order} is too large")]
    OrderTooLarge {
        /// The requested order.
        order: usize,
    },
}
