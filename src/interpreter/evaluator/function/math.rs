use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Square root of a finite, non-negative number.
///
/// # Example
/// ```
/// use probscript::interpreter::{evaluator::function::math::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&[Value::Number(9.0)], 1).unwrap(), Value::Number(3.0));
/// assert!(sqrt(&[Value::Number(-1.0)], 1).is_err());
/// ```
pub fn sqrt(args: &[Value], line: usize) -> EvalResult<Value> {
    let x = args[0].as_number();
    if !x.is_finite() || x < 0.0 {
        return Err(RuntimeError::InvalidArgument { function: "sqrt".to_string(),
                                                   details: format!("expected a finite number >= 0, got {x}"),
                                                   line });
    }
    Ok(Value::Number(x.sqrt()))
}

/// Raises `args[0]` to the power `args[1]`.
///
/// Both inputs must be finite, and so must the result; `pow(10, 400)`
/// fails rather than producing infinity.
///
/// # Example
/// ```
/// use probscript::interpreter::{evaluator::function::math::pow, value::core::Value};
///
/// assert_eq!(pow(&[Value::Number(2.0), Value::Number(10.0)], 1).unwrap(),
///            Value::Number(1024.0));
/// assert!(pow(&[Value::Number(10.0), Value::Number(400.0)], 1).is_err());
/// ```
pub fn pow(args: &[Value], line: usize) -> EvalResult<Value> {
    let (x, y) = (args[0].as_number(), args[1].as_number());
    if !x.is_finite() || !y.is_finite() {
        return Err(RuntimeError::InvalidArgument { function: "pow".to_string(),
                                                   details: format!("arguments must be finite, got {x} and {y}"),
                                                   line });
    }
    Value::finite(x.powf(y), "pow", line)
}
