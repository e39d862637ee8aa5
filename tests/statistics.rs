use probscript::{error::StatError, statistics};

const EPS: f64 = 1e-12;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn mean_variance_stddev() {
    let xs = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(statistics::mean(&xs), Ok(2.5));
    assert_eq!(statistics::variance(&xs), Ok(1.25));
    assert!(close(statistics::stddev(&xs).unwrap(), 1.25_f64.sqrt()));
}

#[test]
fn variance_is_population_variance() {
    assert_eq!(statistics::variance(&[2.0, 4.0]), Ok(1.0));
    assert_eq!(statistics::variance(&[7.0]), Ok(0.0));
}

#[test]
fn median_of_odd_and_even_counts() {
    assert_eq!(statistics::median(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    assert_eq!(statistics::median(&[1.0, 2.0, 3.0, 4.0, 10.0]), Ok(3.0));
    assert_eq!(statistics::median(&[5.0]), Ok(5.0));
    assert_eq!(statistics::median(&[-1.0, -3.0, -2.0]), Ok(-2.0));
}

#[test]
fn median_does_not_reorder_the_input() {
    let xs = vec![3.0, 1.0, 2.0];
    statistics::median(&xs).unwrap();
    assert_eq!(xs, vec![3.0, 1.0, 2.0]);
}

#[test]
fn count() {
    assert_eq!(statistics::count(&[1.0, 1.0, 1.0]), Ok(3));
}

#[test]
fn raw_and_central_moments() {
    let xs = [1.0, 2.0, 3.0, 4.0];

    assert_eq!(statistics::moment(&xs, 0), Ok(1.0));
    assert_eq!(statistics::moment(&xs, 1), Ok(2.5));
    assert_eq!(statistics::moment(&xs, 2), Ok(7.5));
    assert_eq!(statistics::central_moment(&xs, 0), Ok(1.0));
    assert_eq!(statistics::central_moment(&xs, 1), Ok(0.0));
    assert_eq!(statistics::central_moment(&xs, 2), Ok(1.25));
    assert_eq!(statistics::central_moment(&xs, 3), Ok(0.0));
}

#[test]
fn huge_moment_order_is_rejected() {
    assert_eq!(statistics::moment(&[1.0], usize::MAX),
               Err(StatError::OrderTooLarge { order: usize::MAX }));
}

#[test]
fn covariance_and_correlation() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let ys = [2.0, 4.0, 6.0, 8.0];
    let zs = [8.0, 6.0, 4.0, 2.0];

    assert_eq!(statistics::covariance(&xs, &ys), Ok(2.5));
    assert_eq!(statistics::covariance(&xs, &xs), statistics::variance(&xs));
    assert!(close(statistics::correlation(&xs, &ys).unwrap(), 1.0));
    assert!(close(statistics::correlation(&xs, &zs).unwrap(), -1.0));
}

#[test]
fn every_statistic_rejects_an_empty_sample() {
    let empty: [f64; 0] = [];

    assert_eq!(statistics::count(&empty), Err(StatError::EmptySample));
    assert_eq!(statistics::mean(&empty), Err(StatError::EmptySample));
    assert_eq!(statistics::variance(&empty), Err(StatError::EmptySample));
    assert_eq!(statistics::stddev(&empty), Err(StatError::EmptySample));
    assert_eq!(statistics::median(&empty), Err(StatError::EmptySample));
    assert_eq!(statistics::moment(&empty, 0), Err(StatError::EmptySample));
    assert_eq!(statistics::central_moment(&empty, 0), Err(StatError::EmptySample));
    assert_eq!(statistics::covariance(&empty, &[1.0]), Err(StatError::EmptySample));
    assert_eq!(statistics::correlation(&[1.0], &empty), Err(StatError::EmptySample));
}

#[test]
fn paired_statistics_need_equal_lengths() {
    assert_eq!(statistics::covariance(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
               Err(StatError::LengthMismatch { left: 2, right: 3 }));
    assert_eq!(statistics::correlation(&[1.0, 2.0, 3.0], &[1.0]),
               Err(StatError::LengthMismatch { left: 3, right: 1 }));
}

#[test]
fn correlation_needs_spread_in_both_samples() {
    assert_eq!(statistics::correlation(&[1.0, 2.0], &[3.0, 3.0]),
               Err(StatError::DegenerateDeviation));
    assert_eq!(statistics::correlation(&[5.0], &[5.0]), Err(StatError::DegenerateDeviation));
}
