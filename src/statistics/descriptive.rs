//! Descriptive statistics over slices of measurements.
//!
//! These are the primitives both corrections are built from: sample mean,
//! sample variance and standard deviation (divisor N−1), and the standard
//! error of the mean. Preconditions are asserted; the public API in
//! [`crate::statistics`] validates input before reaching these functions.

/// Arithmetic mean of a slice.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance with divisor N−1.
///
/// # Panics
///
/// Panics if `data` has fewer than 2 elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    assert!(
        data.len() >= 2,
        "Sample variance requires at least 2 values"
    );
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    sum_sq / (data.len() - 1) as f64
}

/// Sample standard deviation with divisor N−1.
///
/// # Panics
///
/// Panics if `data` has fewer than 2 elements.
pub fn sample_std(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

/// Standard error of the mean: sample standard deviation divided by √N.
///
/// # Panics
///
/// Panics if `data` has fewer than 2 elements.
pub fn standard_error_of_mean(data: &[f64]) -> f64 {
    sample_std(data) / (data.len() as f64).sqrt()
}
