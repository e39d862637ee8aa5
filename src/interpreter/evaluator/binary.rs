use rand::RngCore;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<R: RngCore> Interpreter<R> {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// Arithmetic fails on an exact zero divisor and on results that
    /// overflow to infinity. Comparisons produce `1` for true and `0` for
    /// false.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use probscript::{
    ///     ast::BinaryOperator,
    ///     error::RuntimeError,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let sum = <Interpreter>::eval_binary(BinaryOperator::Add,
    ///                                      Value::Number(1.5),
    ///                                      Value::Number(2.0),
    ///                                      1).unwrap();
    /// assert_eq!(sum, Value::Number(3.5));
    ///
    /// let gt = <Interpreter>::eval_binary(BinaryOperator::Greater,
    ///                                     Value::Number(3.0),
    ///                                     Value::Number(2.0),
    ///                                     1).unwrap();
    /// assert_eq!(gt, Value::Number(1.0));
    ///
    /// let err = <Interpreter>::eval_binary(BinaryOperator::Div,
    ///                                      Value::Number(1.0),
    ///                                      Value::Number(0.0),
    ///                                      9).unwrap_err();
    /// assert!(matches!(err, RuntimeError::DivisionByZero { line: 9 }));
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Sub,
        };

        let (l, r) = (left.as_number(), right.as_number());
        match op {
            Add => arithmetic(l + r, op, line),
            Sub => arithmetic(l - r, op, line),
            Mul => arithmetic(l * r, op, line),
            Div => {
                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                arithmetic(l / r, op, line)
            },
            Greater => Ok((l > r).into()),
            Less => Ok((l < r).into()),
            Equal => Ok((l == r).into()),
            NotEqual => Ok((l != r).into()),
            GreaterEqual => Ok((l >= r).into()),
            LessEqual => Ok((l <= r).into()),
        }
    }
}

/// Wraps an arithmetic result, naming the operator when it overflowed.
fn arithmetic(result: f64, op: BinaryOperator, line: usize) -> EvalResult<Value> {
    if result.is_finite() {
        return Ok(Value::Number(result));
    }
    Err(RuntimeError::NonFiniteResult { operation: format!("'{op}'"),
                                        line })
}
