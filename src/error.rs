//! Error types for measurement-matrix validation.

use std::fmt;

/// Errors returned when a measurement matrix fails validation.
///
/// Both corrections share the same preconditions: at least two conditions,
/// at least two subjects, and all cells finite. Invalid input is a caller
/// bug and is surfaced immediately; no partial computation is attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SemError {
    /// Matrix has too few conditions or subjects.
    ///
    /// At least two conditions are needed to form pairwise differences
    /// (and for Morey's bias correction), and at least two subjects for a
    /// sample standard deviation with divisor N−1.
    InvalidShape {
        /// Number of conditions (rows) in the input.
        conditions: usize,
        /// Number of subjects (columns) in the input.
        subjects: usize,
    },

    /// A cell holds a NaN or infinite value.
    NonFinite {
        /// Condition (row) index of the first offending cell.
        condition: usize,
        /// Subject (column) index of the first offending cell.
        subject: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for SemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemError::InvalidShape {
                conditions,
                subjects,
            } => {
                write!(
                    f,
                    "Invalid matrix shape {}x{}: need at least 2 conditions and 2 subjects",
                    conditions, subjects
                )
            }
            SemError::NonFinite {
                condition,
                subject,
                value,
            } => {
                write!(
                    f,
                    "Non-finite value {} at condition {}, subject {}",
                    value, condition, subject
                )
            }
        }
    }
}

impl std::error::Error for SemError {}

/// Convenience alias for results of this crate's functions.
pub type Result<T> = std::result::Result<T, SemError>;
