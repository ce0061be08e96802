//! Symmetrization policies for near-symmetric input.
//!
//! ## Purpose
//!
//! The safe factorization path accepts matrices that are symmetric only up to
//! rounding. This module decides which symmetric matrix is actually factorized
//! and measures how far an input is from symmetry.
//!
//! ## Key concepts
//!
//! * **Lower**: Only the lower triangle is read (default). The in-place kernels
//!   read the same triangle, so both entry points agree on the same input.
//! * **Upper**: Only the upper triangle is read.
//! * **Average**: Mirrored entries are replaced by their mean, `(A + A^T) / 2`.
//!
//! ## Invariants
//!
//! * After [`Symmetrization::apply`] the matrix is exactly symmetric.
//! * The diagonal is never changed.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// ============================================================================
// Symmetrization
// ============================================================================

/// Which symmetric matrix the safe path factorizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Symmetrization {
    /// Mirror the lower triangle onto the upper one (default).
    #[default]
    Lower,

    /// Mirror the upper triangle onto the lower one.
    Upper,

    /// Replace each off-diagonal pair by its mean.
    Average,
}

impl Symmetrization {
    /// Make a square matrix exactly symmetric in place.
    pub fn apply<T: Float + Scalar>(&self, matrix: &mut DMatrix<T>) {
        let n = matrix.nrows().min(matrix.ncols());

        for j in 0..n {
            for i in (j + 1)..n {
                let lower = matrix[(i, j)];
                let upper = matrix[(j, i)];
                let value = self.pick(lower, upper);
                matrix[(i, j)] = value;
                matrix[(j, i)] = value;
            }
        }
    }

    /// Symmetric value for a mirrored pair of entries.
    #[inline]
    pub fn pick<T: Float>(&self, lower: T, upper: T) -> T {
        match self {
            Symmetrization::Lower => lower,
            Symmetrization::Upper => upper,
            Symmetrization::Average => (lower + upper) / (T::one() + T::one()),
        }
    }
}

// ============================================================================
// Asymmetry Measurement
// ============================================================================

/// A mirrored pair found outside the symmetry tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Asymmetry<T> {
    /// Row of the worst entry (lower triangle).
    pub row: usize,
    /// Column of the worst entry (lower triangle).
    pub col: usize,
    /// `|a_ij - a_ji| / max(1, |a_ij|, |a_ji|)`.
    pub deviation: T,
}

/// Find the first mirrored pair whose relative deviation exceeds `tolerance`.
///
/// Relative deviation is `|a_ij - a_ji| / max(1, |a_ij|, |a_ji|)`, so the
/// tolerance is absolute for small entries and relative for large ones. A NaN
/// on either side always counts as a violation.
pub fn find_asymmetry<T: Float + Scalar>(
    matrix: &DMatrix<T>,
    tolerance: T,
) -> Option<Asymmetry<T>> {
    let n = matrix.nrows().min(matrix.ncols());
    for j in 0..n {
        for i in (j + 1)..n {
            let lower = matrix[(i, j)];
            let upper = matrix[(j, i)];
            let scale = T::one().max(lower.abs()).max(upper.abs());
            let deviation = (lower - upper).abs() / scale;
            if !(deviation <= tolerance) {
                return Some(Asymmetry {
                    row: i,
                    col: j,
                    deviation,
                });
            }
        }
    }
    None
}
