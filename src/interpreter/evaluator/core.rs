use std::io::Write;

use rand::{RngCore, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 123;

/// Tree-walking interpreter for parsed programs.
///
/// Each instance exclusively owns its [`Environment`] and its pseudo-random
/// generator, so independent instances can run side by side without sharing
/// state. The generator is pluggable; [`Interpreter::new`] seeds a
/// [`StdRng`], while [`Interpreter::with_rng`] accepts any [`RngCore`].
///
/// # Example
/// ```
/// use probscript::{interpreter::evaluator::core::Interpreter, parse_program};
///
/// let program = parse_program("x = 3\ny = x * 2\nprint y\n").unwrap();
///
/// let mut out = Vec::new();
/// Interpreter::new(42).execute_program(&program, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "6\n");
/// ```
pub struct Interpreter<R: RngCore = StdRng> {
    pub(in crate::interpreter::evaluator) environment: Environment,
    pub(in crate::interpreter::evaluator) rng:         R,
}

impl Interpreter<StdRng> {
    /// Creates an interpreter with an empty environment and a [`StdRng`]
    /// seeded from `seed`. The same seed always yields the same draws.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Interpreter<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl<R: RngCore> Interpreter<R> {
    /// Creates an interpreter that draws random numbers from `rng`.
    #[must_use]
    pub fn with_rng(rng: R) -> Self {
        Self { environment: Environment::new(),
               rng }
    }

    /// Read-only view of the variables and samples.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Executes every top-level statement of `program` in order.
    ///
    /// `print` output goes to `out`, which is only borrowed for the duration
    /// of the call. The first failure aborts the run; effects of statements
    /// that already completed are kept.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised by any statement.
    pub fn execute_program<W: Write>(&mut self, program: &Program, out: &mut W) -> EvalResult<()> {
        info!(statements = program.statements.len(), "executing program");

        for statement in &program.statements {
            self.execute_statement(statement, out)?;
        }
        out.flush()?;

        for (name, len) in self.environment.sample_sizes() {
            debug!(sample = name, len, "final sample size");
        }
        info!("program finished");
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Operands are
    /// evaluated left to right. Only random built-ins change interpreter
    /// state (the generator); everything else is pure with respect to the
    /// environment.
    ///
    /// # Errors
    /// Returns a `RuntimeError` for undefined variables, division by zero,
    /// non-finite results, bare string literals, and failing built-in calls.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { text, line } => Err(RuntimeError::StringNotEvaluable { text: text.clone(),
                                                                               line: *line, }),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, .. } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_function_call(name, arguments, *line),
        }
    }

    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.environment
            .variable(name)
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.to_string(),
                                                             line })
    }
}
