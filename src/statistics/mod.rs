//! Statistical methods for within-subject error bars.
//!
//! This module provides the two corrections and their building blocks:
//! - Pooled standard error over pairwise condition differences
//!   (Loftus & Masson 1994)
//! - Bias-corrected standard errors of per-subject-centered data
//!   (Morey 2005)
//! - Descriptive primitives shared by both

mod descriptive;
mod normalized;
mod pooled;

pub use descriptive::{mean, sample_std, sample_variance, standard_error_of_mean};
pub use normalized::{normalize_subjects, normalized_sem};
pub use pooled::{loftus_mason_sem, sem_difference_matrix};

use nalgebra::DMatrix;

use crate::error::{Result, SemError};

/// Validate a measurement matrix against the shared preconditions.
///
/// Checks shape (at least 2 conditions and 2 subjects) first, then scans
/// condition-major for the first non-finite cell.
pub(crate) fn validate(values: &DMatrix<f64>) -> Result<()> {
    let (conditions, subjects) = values.shape();
    if conditions < 2 || subjects < 2 {
        return Err(SemError::InvalidShape {
            conditions,
            subjects,
        });
    }

    for condition in 0..conditions {
        for subject in 0..subjects {
            let value = values[(condition, subject)];
            if !value.is_finite() {
                return Err(SemError::NonFinite {
                    condition,
                    subject,
                    value,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_minimal_matrix() {
        let values = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(validate(&values).is_ok());
    }

    #[test]
    fn validate_rejects_single_condition() {
        let values = DMatrix::from_row_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(
            validate(&values),
            Err(SemError::InvalidShape {
                conditions: 1,
                subjects: 4,
            })
        );
    }

    #[test]
    fn validate_rejects_single_subject() {
        let values = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        assert_eq!(
            validate(&values),
            Err(SemError::InvalidShape {
                conditions: 3,
                subjects: 1,
            })
        );
    }

    #[test]
    fn validate_reports_first_non_finite_cell() {
        let values = DMatrix::from_row_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, f64::NAN, 6.0]);
        match validate(&values) {
            Err(SemError::NonFinite {
                condition, subject, ..
            }) => {
                assert_eq!((condition, subject), (1, 1));
            }
            other => panic!("expected NonFinite, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_infinity() {
        let values = DMatrix::from_row_slice(2, 2, &[1.0, f64::INFINITY, 3.0, 4.0]);
        assert!(matches!(
            validate(&values),
            Err(SemError::NonFinite {
                condition: 0,
                subject: 1,
                ..
            })
        ));
    }
}
