use rand::RngCore;

use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl<R: RngCore> Interpreter<R> {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// # Example
    /// ```
    /// use probscript::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let v = <Interpreter>::eval_unary(UnaryOperator::Negate, Value::Number(5.0)).unwrap();
    /// assert_eq!(v, Value::Number(-5.0));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(Value::Number(-value.as_number())),
        }
    }
}
