use thiserror::Error;

use crate::error::StatError;

/// Represents all errors that can occur during execution.
///
/// Every variant except [`RuntimeError::Output`] carries the source line of
/// the statement or expression that failed.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    #[error("Runtime error on line {line}: undefined variable '{name}'")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Division with an exact zero divisor.
    #[error("Runtime error on line {line}: division by zero")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `repeat` count that evaluated below zero.
    #[error("Runtime error on line {line}: repeat count cannot be negative (got {count})")]
    NegativeRepeatCount {
        /// The evaluated count.
        count: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `repeat` count that is infinite or beyond `2^53 - 1`.
    #[error("Runtime error on line {line}: repeat count {count} is too large")]
    RepeatCountTooLarge {
        /// The evaluated count.
        count: f64,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Called a function that is not built in.
    #[error("Runtime error on line {line}: unknown function '{name}'")]
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a statistic directly instead of through `get_stat`.
    #[error("Runtime error on line {line}: implicit statistics are disabled, use get_stat(\"{name}\", <sample>)")]
    ImplicitStatistic {
        /// The statistic that was called as a function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    #[error("Runtime error on line {line}: {function}() expects {expected} argument(s), got {found}")]
    ArgumentCountMismatch {
        /// The name of the built-in.
        function: String,
        /// Human readable description of the accepted counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument outside the domain of a math built-in.
    #[error("Runtime error on line {line}: {function}(): {details}")]
    InvalidArgument {
        /// The name of the built-in.
        function: String,
        /// Why the argument was rejected.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Distribution parameters that do not describe a valid distribution.
    #[error("Runtime error on line {line}: {function}(): {details}")]
    InvalidDistribution {
        /// The distribution built-in.
        function: String,
        /// Why the parameters were rejected.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Argument count or kinds do not match the requested statistic.
    #[error("Runtime error on line {line}: get_stat(): {details}")]
    InvalidStatArguments {
        /// What was wrong with the call.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// `get_stat` was asked for a statistic it does not know.
    #[error("Runtime error on line {line}: unknown statistic '{name}'")]
    UnknownStatistic {
        /// The requested statistic.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The statistics engine rejected the sample(s).
    #[error("Runtime error on line {line}: {statistic} of '{sample}': {source}")]
    Statistics {
        /// The statistic being computed.
        statistic: String,
        /// The sample name(s) involved.
        sample:    String,
        /// The underlying failure.
        source:    StatError,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// An operation produced infinity or NaN.
    #[error("Runtime error on line {line}: {operation} produced a non-finite result")]
    NonFiniteResult {
        /// The operation that overflowed.
        operation: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A string literal used where a number is required.
    #[error("Runtime error on line {line}: string literal \"{text}\" is only valid as a get_stat argument")]
    StringNotEvaluable {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing program output failed.
    #[error("Runtime error: failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
