/// Binary operator evaluation.
///
/// Arithmetic with division-by-zero and overflow checks, and comparisons
/// that yield `1` or `0`.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements numeric negation.
pub mod unary;

/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter), its environment and
/// random generator, and the expression dispatcher.
pub mod core;

/// Statement execution.
///
/// Runs assignments, `print`, `collect`, `if`, `repeat` and bare blocks
/// against the environment.
pub mod statement;

/// Built-in function evaluation.
///
/// Dispatches calls by name to the random distributions, math helpers and
/// the `get_stat` statistics query.
pub mod function;
