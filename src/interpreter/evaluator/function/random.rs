use rand::{Rng, RngCore};
use rand_distr::{Distribution, Normal};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

fn invalid(function: &str, details: String, line: usize) -> RuntimeError {
    RuntimeError::InvalidDistribution { function: function.to_string(),
                                        details,
                                        line }
}

/// Draws from a continuous uniform distribution over `[a, b)`.
///
/// - `uniform()` draws from `[0, 1)`.
/// - `uniform(b)` draws from `[0, b)`.
/// - `uniform(a, b)` draws from `[a, b)`.
///
/// The bounds must satisfy `a < b` and the width `b - a` must be finite.
///
/// # Example
/// ```
/// use probscript::interpreter::{evaluator::function::random::uniform, value::core::Value};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let x = uniform(&mut rng, &[Value::Number(2.0), Value::Number(3.0)], 1).unwrap();
/// assert!((2.0..3.0).contains(&x.as_number()));
///
/// assert!(uniform(&mut rng, &[Value::Number(5.0), Value::Number(5.0)], 1).is_err());
/// ```
pub fn uniform(rng: &mut dyn RngCore, args: &[Value], line: usize) -> EvalResult<Value> {
    let (a, b) = match args {
        [] => (0.0, 1.0),
        [b] => (0.0, b.as_number()),
        [a, b, ..] => (a.as_number(), b.as_number()),
    };

    if a >= b {
        return Err(invalid("uniform", format!("requires a < b, got a = {a}, b = {b}"), line));
    }
    if !(b - a).is_finite() {
        return Err(invalid("uniform", format!("range [{a}, {b}) is too wide"), line));
    }

    Value::finite(rng.gen_range(a..b), "uniform", line)
}

/// Draws from a normal distribution with mean `mu` and standard deviation
/// `sigma`.
///
/// - `normal()` uses `mu = 0`, `sigma = 1`.
/// - `normal(mu)` uses `sigma = 1`.
/// - `normal(mu, sigma)` requires `sigma` finite and greater than zero.
pub fn normal(rng: &mut dyn RngCore, args: &[Value], line: usize) -> EvalResult<Value> {
    let (mu, sigma) = match args {
        [] => (0.0, 1.0),
        [mu] => (mu.as_number(), 1.0),
        [mu, sigma, ..] => (mu.as_number(), sigma.as_number()),
    };

    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(invalid("normal", format!("sigma must be finite and > 0, got {sigma}"), line));
    }

    let distribution =
        Normal::new(mu, sigma).map_err(|e| invalid("normal", e.to_string(), line))?;
    Value::finite(distribution.sample(rng), "normal", line)
}
