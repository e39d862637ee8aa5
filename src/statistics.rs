use ordered_float::OrderedFloat;

use crate::error::StatError;

/// Result type used by the statistics engine.
pub type StatResult<T> = Result<T, StatError>;

/// Fails with [`StatError::EmptySample`] for an empty slice.
const fn non_empty(sample: &[f64]) -> StatResult<&[f64]> {
    if sample.is_empty() {
        return Err(StatError::EmptySample);
    }
    Ok(sample)
}

#[allow(clippy::cast_precision_loss)]
fn average(sample: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    sample.iter().copied().map(f).sum::<f64>() / sample.len() as f64
}

fn exponent(k: usize) -> StatResult<i32> {
    i32::try_from(k).map_err(|_| StatError::OrderTooLarge { order: k })
}

/// Number of elements.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample.
pub const fn count(sample: &[f64]) -> StatResult<usize> {
    match non_empty(sample) {
        Ok(sample) => Ok(sample.len()),
        Err(e) => Err(e),
    }
}

/// Raw moment of order `k`: the average of `x^k`.
///
/// Order zero is `1` by convention.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample, or
/// [`StatError::OrderTooLarge`] if `k` does not fit an exponent.
///
/// # Example
/// ```
/// use probscript::statistics::moment;
///
/// assert_eq!(moment(&[1.0, 2.0, 3.0], 2).unwrap(), 14.0 / 3.0);
/// assert_eq!(moment(&[5.0], 0).unwrap(), 1.0);
/// assert!(moment(&[], 0).is_err());
/// ```
pub fn moment(sample: &[f64], k: usize) -> StatResult<f64> {
    let sample = non_empty(sample)?;
    if k == 0 {
        return Ok(1.0);
    }
    let k = exponent(k)?;
    Ok(average(sample, |x| x.powi(k)))
}

/// Central moment of order `k`: the average of `(x - mean)^k`.
///
/// Order zero is `1` by convention.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample, or
/// [`StatError::OrderTooLarge`] if `k` does not fit an exponent.
pub fn central_moment(sample: &[f64], k: usize) -> StatResult<f64> {
    let sample = non_empty(sample)?;
    if k == 0 {
        return Ok(1.0);
    }
    let k = exponent(k)?;
    let mean = mean(sample)?;
    Ok(average(sample, |x| (x - mean).powi(k)))
}

/// Arithmetic mean, the first raw moment.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample.
pub fn mean(sample: &[f64]) -> StatResult<f64> {
    moment(sample, 1)
}

/// Population variance (divides by `n`), the second central moment.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample.
///
/// # Example
/// ```
/// use probscript::statistics::variance;
///
/// assert_eq!(variance(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 1.25);
/// ```
pub fn variance(sample: &[f64]) -> StatResult<f64> {
    central_moment(sample, 2)
}

/// Population standard deviation.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample.
pub fn stddev(sample: &[f64]) -> StatResult<f64> {
    Ok(variance(sample)?.sqrt())
}

/// Median of a sorted copy; the average of the two middle values when the
/// count is even.
///
/// # Errors
/// Returns [`StatError::EmptySample`] for an empty sample.
///
/// # Example
/// ```
/// use probscript::statistics::median;
///
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
/// assert_eq!(median(&[10.0, 1.0, 3.0, 2.0, 4.0]).unwrap(), 3.0);
/// ```
pub fn median(sample: &[f64]) -> StatResult<f64> {
    let sample = non_empty(sample)?;
    let mut sorted: Vec<OrderedFloat<f64>> = sample.iter().copied().map(OrderedFloat).collect();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        return Ok(sorted[mid].0);
    }
    Ok(f64::midpoint(sorted[mid - 1].0, sorted[mid].0))
}

/// Population covariance of two paired samples.
///
/// # Errors
/// Returns [`StatError::EmptySample`] if either sample is empty and
/// [`StatError::LengthMismatch`] if their lengths differ.
pub fn covariance(x: &[f64], y: &[f64]) -> StatResult<f64> {
    let x = non_empty(x)?;
    let y = non_empty(y)?;
    if x.len() != y.len() {
        return Err(StatError::LengthMismatch { left:  x.len(),
                                               right: y.len(), });
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;

    Ok(x.iter()
        .zip(y)
        .map(|(xi, yi)| (xi - mean_x) * (yi - mean_y))
        .sum::<f64>()
       / n)
}

/// Pearson correlation: covariance divided by both standard deviations.
///
/// # Errors
/// Fails like [`covariance`], and with [`StatError::DegenerateDeviation`]
/// when either standard deviation is zero or not finite.
///
/// # Example
/// ```
/// use probscript::{error::StatError, statistics::correlation};
///
/// let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// let flat = correlation(&[1.0, 1.0], &[1.0, 2.0]);
/// assert_eq!(flat, Err(StatError::DegenerateDeviation));
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> StatResult<f64> {
    let cov = covariance(x, y)?;
    let sx = stddev(x)?;
    let sy = stddev(y)?;

    if !(sx.is_finite() && sy.is_finite() && sx > 0.0 && sy > 0.0) {
        return Err(StatError::DegenerateDeviation);
    }
    Ok(cov / (sx * sy))
}
