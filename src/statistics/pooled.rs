//! Loftus & Masson's (1994) pooled within-subject standard error.
//!
//! The pooled SEM summarizes the variability of all pairwise condition
//! differences in a single number: the standard error of each difference
//! vector is computed per pair, and the pair values are pooled as
//! √(mean(SEM²/2)). Dividing by 2 converts the variance of a difference
//! into the variance attributable to a single condition.
//!
//! # References
//!
//! - G. R. Loftus and M. E. J. Masson, "Using confidence intervals in
//!   within-subject designs", Psychonomic Bulletin & Review 1(4), 1994.
//! - V. H. Franz and G. R. Loftus, "Standard errors and confidence intervals
//!   in within-subjects designs", Psychonomic Bulletin & Review 19(3), 2012.

use nalgebra::DMatrix;

use super::{descriptive::standard_error_of_mean, validate};
use crate::error::Result;

/// Compute the standard error of the mean difference for every condition pair.
///
/// For each pair of conditions (i, j) with i < j, the per-subject difference
/// vector `row_i − row_j` is formed and its standard error of the mean
/// (sample standard deviation over √N) stored at entry (i, j). The result is
/// an M×M matrix with the lower triangle and diagonal zero.
///
/// # Errors
///
/// Returns [`SemError::InvalidShape`](crate::SemError::InvalidShape) if the
/// input has fewer than 2 conditions or 2 subjects, and
/// [`SemError::NonFinite`](crate::SemError::NonFinite) if any cell is NaN or
/// infinite.
pub fn sem_difference_matrix(values: &DMatrix<f64>) -> Result<DMatrix<f64>> {
    validate(values)?;

    let (conditions, subjects) = values.shape();
    let mut sem_diff = DMatrix::zeros(conditions, conditions);
    let mut diff = vec![0.0; subjects];

    for i in 0..conditions {
        for j in (i + 1)..conditions {
            for (s, d) in diff.iter_mut().enumerate() {
                *d = values[(i, s)] - values[(j, s)];
            }
            sem_diff[(i, j)] = standard_error_of_mean(&diff);
        }
    }

    Ok(sem_diff)
}

/// Compute Loftus & Masson's (1994) pooled standard error.
///
/// A single error bar applicable to all conditions. The 3-SEM rule can be
/// used to gauge significance: condition means separated by 3 or more
/// pooled SEMs differ significantly at roughly the p = 0.05 level.
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
/// use within_sem::loftus_mason_sem;
///
/// // Each subject is exactly 1 unit slower in condition 2: no
/// // within-subject variability, so the pooled SEM is zero.
/// let values = DMatrix::from_row_slice(2, 4, &[
///     1.0, 2.0, 3.0, 4.0,
///     2.0, 3.0, 4.0, 5.0,
/// ]);
/// assert_eq!(loftus_mason_sem(&values).unwrap(), 0.0);
/// ```
pub fn loftus_mason_sem(values: &DMatrix<f64>) -> Result<f64> {
    let sem_diff = sem_difference_matrix(values)?;

    let conditions = sem_diff.nrows();
    let pairs = conditions * (conditions - 1) / 2;

    let mut sum = 0.0;
    for i in 0..conditions {
        for j in (i + 1)..conditions {
            let sem = sem_diff[(i, j)];
            sum += sem * sem / 2.0;
        }
    }

    Ok((sum / pairs as f64).sqrt())
}
