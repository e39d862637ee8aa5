use rand::RngCore;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::{math, random},
        },
        parser::unary::GET_STAT,
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the interpreter's generator, a slice of evaluated
/// argument values and the line number.
type BuiltinFn = fn(&mut dyn RngCore, &[Value], usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "uniform" => { arity: Arity::OneOf(&[0, 1, 2]), func: random::uniform },
    "normal"  => { arity: Arity::OneOf(&[0, 1, 2]), func: random::normal },
    "sqrt"    => { arity: Arity::Exact(1), func: |_, args, line| math::sqrt(args, line) },
    "pow"     => { arity: Arity::Exact(2), func: |_, args, line| math::pow(args, line) },
}

/// Statistics that used to be callable as plain functions. Calling them
/// directly is rejected with a pointer to `get_stat`.
const IMPLICIT_STATISTICS: &[&str] = &["mean", "variance", "stddev", "median", "count"];

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(arr) => match arr.split_last() {
                Some((last, [])) => last.to_string(),
                Some((last, rest)) => {
                    let rest: Vec<String> = rest.iter().map(ToString::to_string).collect();
                    format!("{} or {last}", rest.join(", "))
                },
                None => "no".to_string(),
            },
        }
    }
}

impl<R: RngCore> Interpreter<R> {
    /// Evaluates a function call.
    ///
    /// `get_stat` receives its argument expressions unevaluated, since its
    /// sample arguments are names rather than values. Every other built-in
    /// gets its arguments evaluated left to right, then has its arity
    /// checked before it runs.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Argument expressions in source order.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The function result or an error if lookup, arity or the builtin fails.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &str,
                                     arguments: &[Expr],
                                     line: usize)
                                     -> EvalResult<Value> {
        if name == GET_STAT {
            return self.eval_get_stat(arguments, line);
        }

        let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
            if IMPLICIT_STATISTICS.contains(&name) {
                return Err(RuntimeError::ImplicitStatistic { name: name.to_string(),
                                                              line });
            }
            return Err(RuntimeError::UnknownFunction { name: name.to_string(),
                                                       line });
        };

        let arg_vals = arguments.iter()
                                .map(|arg| self.eval(arg))
                                .collect::<EvalResult<Vec<_>>>()?;

        if !builtin.arity.check(arg_vals.len()) {
            return Err(RuntimeError::ArgumentCountMismatch { function: name.to_string(),
                                                             expected: builtin.arity.describe(),
                                                             found:    arg_vals.len(),
                                                             line });
        }

        (builtin.func)(&mut self.rng, &arg_vals, line)
    }
}
