use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Converts a `repeat` count into an iteration count.
///
/// The value is truncated toward zero after checking it is finite and not
/// negative, so `2.9` runs twice and `-0.5` is rejected.
///
/// ## Errors
/// - `RuntimeError::NegativeRepeatCount` for values below zero.
/// - `RuntimeError::RepeatCountTooLarge` for values beyond `2^53 - 1`.
///
/// ## Example
/// ```
/// use probscript::{error::RuntimeError, util::num::repeat_count};
///
/// assert_eq!(repeat_count(3.0, 1).unwrap(), 3);
/// assert_eq!(repeat_count(2.9, 1).unwrap(), 2);
/// assert_eq!(repeat_count(0.0, 1).unwrap(), 0);
///
/// let err = repeat_count(-1.0, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::NegativeRepeatCount { line: 4, .. }));
///
/// let err = repeat_count(1e300, 5).unwrap_err();
/// assert!(matches!(err, RuntimeError::RepeatCountTooLarge { line: 5, .. }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn repeat_count(value: f64, line: usize) -> EvalResult<usize> {
    if value < 0.0 {
        return Err(RuntimeError::NegativeRepeatCount { count: value,
                                                       line });
    }
    if !value.is_finite() || value > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::RepeatCountTooLarge { count: value,
                                                       line });
    }
    usize::try_from(value.trunc() as u64).map_err(|_| RuntimeError::RepeatCountTooLarge { count: value,
                                                                                          line })
}

/// Converts a moment order into a `usize`.
///
/// The value must be finite, non-negative and integral.
///
/// ## Errors
/// Returns `RuntimeError::InvalidStatArguments` otherwise.
///
/// ## Example
/// ```
/// use probscript::{error::RuntimeError, util::num::moment_order};
///
/// assert_eq!(moment_order(2.0, 1).unwrap(), 2);
///
/// let err = moment_order(1.5, 7).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidStatArguments { line: 7, .. }));
/// assert!(moment_order(-1.0, 7).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn moment_order(value: f64, line: usize) -> EvalResult<usize> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > MAX_SAFE_U64_INT as f64
    {
        return Err(RuntimeError::InvalidStatArguments { details: format!("k must be a non-negative integer, e.g. 2 (got {value})"),
                                                        line });
    }
    usize::try_from(value as u64).map_err(|_| RuntimeError::InvalidStatArguments {
        details: format!("k = {value} is too large"),
        line,
    })
}

/// Converts a count into an `f64`.
///
/// ## Errors
/// Returns `RuntimeError::NonFiniteResult` if the count exceeds
/// `MAX_SAFE_U64_INT` and would lose precision.
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, line: usize) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(RuntimeError::NonFiniteResult { operation: "count".to_string(),
                                                   line });
    }
    Ok(value as f64)
}
