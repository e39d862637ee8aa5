use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// Only numbers exist today. Values are immutable; operators build new ones.
/// A `Value` is always finite: operations that would produce infinity or NaN
/// fail instead (see [`Value::finite`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A double precision number. Comparisons yield `1` or `0`.
    Number(f64),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Number(if v { 1.0 } else { 0.0 })
    }
}

impl Value {
    /// Wraps `value`, failing if it is infinite or NaN.
    ///
    /// # Parameters
    /// - `value`: The raw result of an operation.
    /// - `operation`: Name of the operation, used in the error message.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use probscript::{error::RuntimeError, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::finite(2.5, "add", 1).unwrap(), Value::Number(2.5));
    ///
    /// let err = Value::finite(f64::INFINITY, "multiply", 3).unwrap_err();
    /// assert!(matches!(err, RuntimeError::NonFiniteResult { line: 3, .. }));
    /// ```
    pub fn finite(value: f64, operation: &str, line: usize) -> EvalResult<Self> {
        if value.is_finite() {
            return Ok(Self::Number(value));
        }
        Err(RuntimeError::NonFiniteResult { operation: operation.to_string(),
                                            line })
    }

    /// Returns the numeric payload.
    #[must_use]
    pub const fn as_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
        }
    }

    /// Truthiness used by `if`: any non-zero number is true.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.as_number() != 0.0
    }
}

impl std::fmt::Display for Value {
    /// Formats numbers with the shortest representation that round-trips,
    /// so `6.0` prints as `6` and `0.1` as `0.1`. Negative zero prints as
    /// `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) if *n == 0.0 => write!(f, "0"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}
