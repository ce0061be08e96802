//! Error types for Cholesky factorization and derived operations.
//!
//! ## Purpose
//!
//! This module defines the single error enum returned by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **Validation vs. numerics**: Shape and configuration problems are errors at
//!   the boundary. A non-positive-definite input is *not* an error of
//!   `factorize`; it is recorded in the result status and only becomes
//!   [`CholeskyError::NotPositiveDefinite`] when a derived operation needs a
//!   valid factor.
//! * **no_std**: Derived with `thiserror` without the `std` feature, so the
//!   type works in `alloc`-only builds.

use thiserror::Error;

/// Errors returned by factorization, configuration and derived operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CholeskyError {
    /// The input matrix is not square.
    #[error("Matrix is not square: got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The input deviates from symmetry by more than the configured tolerance.
    #[error(
        "Matrix is not symmetric: |a[{row},{col}] - a[{col},{row}]| = {deviation} exceeds tolerance {tolerance}"
    )]
    AsymmetricInput {
        /// Row of the offending entry (lower triangle)
        row: usize,
        /// Column of the offending entry (lower triangle)
        col: usize,
        /// Relative deviation between the mirrored entries
        deviation: f64,
        /// Configured tolerance
        tolerance: f64,
    },

    /// The factorization did not succeed, so no derived quantity exists.
    #[error("Matrix is not positive definite: pivot {pivot} is not strictly positive")]
    NotPositiveDefinite {
        /// Index of the first failing pivot
        pivot: usize,
    },

    /// The triangular factor could not be inverted.
    #[error("Triangular factor is singular")]
    SingularFactor,

    /// A right-hand side or operand has the wrong dimension.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        got: usize,
    },

    /// Symmetry tolerance is negative or not finite.
    #[error("Invalid symmetry tolerance: {0} (must be >= 0 and finite)")]
    InvalidTolerance(f64),

    /// Diagonal shift of an enforcement strategy is negative or not finite.
    #[error("Invalid diagonal shift: {0} (must be >= 0 and finite)")]
    InvalidShift(f64),

    /// A builder parameter was set more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the duplicated parameter
        parameter: &'static str,
    },
}
