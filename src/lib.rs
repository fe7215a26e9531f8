//! # within-sem
//!
//! Within-subject error bars for repeated-measures data.
//!
//! In a within-subject design every subject is measured under every
//! condition, and the comparisons of interest are made within a subject.
//! Ordinary standard errors mix in the variability *between* subjects and
//! overstate the uncertainty of the condition means. This crate implements
//! two published corrections that remove the between-subject component:
//!
//! - [`loftus_mason_sem`]: Loftus & Masson's (1994) pooled standard error
//!   of pairwise condition differences. One error bar for all conditions;
//!   means separated by 3 or more of these SEMs differ significantly at
//!   roughly the p = 0.05 level.
//! - [`normalized_sem`]: Morey's (2005) bias-corrected standard errors of
//!   per-subject-centered data. One error bar per condition.
//!
//! Measurements are an M×N [`nalgebra::DMatrix`]: rows are conditions,
//! columns are subjects, and cell (m, n) is the value measured for subject
//! n under condition m. Both functions require M ≥ 2, N ≥ 2 and finite
//! cells, and return [`SemError`] otherwise.
//!
//! ## Quick Start
//!
//! ```
//! use nalgebra::DMatrix;
//! use within_sem::{loftus_mason_sem, normalized_sem};
//!
//! // 2 conditions, 4 subjects. Subjects differ in overall level, but
//! // every subject shows the same +1 effect of condition 2.
//! let values = DMatrix::from_row_slice(2, 4, &[
//!     1.0, 2.0, 3.0, 4.0,
//!     2.0, 3.0, 4.0, 5.0,
//! ]);
//!
//! // The within-subject error bar is zero: the effect is perfectly
//! // consistent across subjects.
//! assert_eq!(loftus_mason_sem(&values).unwrap(), 0.0);
//!
//! let per_condition = normalized_sem(&values).unwrap();
//! assert_eq!(per_condition.len(), 2);
//! ```
//!
//! ## References
//!
//! - G. R. Loftus and M. E. J. Masson, "Using confidence intervals in
//!   within-subject designs", Psychonomic Bulletin & Review 1(4), 1994.
//! - V. H. Franz and G. R. Loftus, "Standard errors and confidence intervals
//!   in within-subjects designs", Psychonomic Bulletin & Review 19(3), 2012.
//! - R. D. Morey, "Confidence intervals from normalized data: A correction
//!   to Cousineau (2005)", Tutorials in Quantitative Methods for
//!   Psychology 4(2), 2008.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub mod statistics;

pub use error::{Result, SemError};
pub use statistics::{loftus_mason_sem, normalize_subjects, normalized_sem, sem_difference_matrix};
