//! Morey's (2005) bias-corrected standard errors of normalized data.
//!
//! Each subject's mean over all conditions is subtracted from that
//! subject's measurements, removing the additive subject effect. Standard
//! errors of the centered rows underestimate the true variability by a
//! factor of √((M−1)/M), which the bias correction undoes.
//!
//! # References
//!
//! - R. D. Morey, "Confidence intervals from normalized data: A correction
//!   to Cousineau (2005)", Tutorials in Quantitative Methods for
//!   Psychology 4(2), 2008 (originally circulated 2005).

use nalgebra::{DMatrix, DVector};

use super::{descriptive::standard_error_of_mean, validate};
use crate::error::Result;

/// Remove each subject's mean from their measurements.
///
/// Computes the mean of every column (one subject measured under all M
/// conditions) and subtracts it from that column, returning the centered
/// M×N matrix. Every column of the result sums to zero.
///
/// # Errors
///
/// Returns [`SemError::InvalidShape`](crate::SemError::InvalidShape) if the
/// input has fewer than 2 conditions or 2 subjects, and
/// [`SemError::NonFinite`](crate::SemError::NonFinite) if any cell is NaN or
/// infinite.
pub fn normalize_subjects(values: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    validate(values)?;

    let (conditions, subjects) = values.shape();
    let mut centered = values.clone();

    for subject in 0..subjects {
        let subject_mean = values.column(subject).mean();
        for condition in 0..conditions {
            centered[(condition, subject)] -= subject_mean;
        }
    }

    Ok(centered)
}

/// Compute bias-corrected standard errors from normalized data.
///
/// Returns one standard error per condition, computed from the
/// per-subject-centered matrix (see [`normalize_subjects`]) and multiplied
/// by Morey's bias correction factor √(M/(M−1)).
///
/// `values` is an M×N matrix where M is the number of conditions and N the
/// number of subjects.
///
/// # Errors
///
/// Returns [`SemError::InvalidShape`](crate::SemError::InvalidShape) if the
/// input has fewer than 2 conditions or 2 subjects, and
/// [`SemError::NonFinite`](crate::SemError::NonFinite) if any cell is NaN or
/// infinite.
///
/// # Example
///
/// ```
/// use nalgebra::DMatrix;
/// use within_sem::normalized_sem;
///
/// let values = DMatrix::from_row_slice(2, 3, &[
///     1.0, 2.0, 3.0,
///     3.0, 5.0, 4.0,
/// ]);
/// let sem = normalized_sem(&values).unwrap();
/// assert_eq!(sem.len(), 2);
/// assert!(sem.iter().all(|&s| s >= 0.0));
/// ```
pub fn normalized_sem(values: &DMatrix<f64>) -> Result<DVector<f64>> {
    let centered = normalize_subjects(values)?;

    let (conditions, subjects) = centered.shape();
    let correction = (conditions as f64 / (conditions as f64 - 1.0)).sqrt();

    let mut sem = DVector::zeros(conditions);
    let mut row = vec![0.0; subjects];

    for condition in 0..conditions {
        for (subject, r) in row.iter_mut().enumerate() {
            *r = centered[(condition, subject)];
        }
        sem[condition] = standard_error_of_mean(&row) * correction;
    }

    Ok(sem)
}
