//! Positive-definiteness enforcement strategies.
//!
//! ## Purpose
//!
//! An enforcement strategy is a pre-processing step applied to the private,
//! symmetrized copy of a dense input right before it is factorized. It lets a
//! caller trade exactness for robustness on inputs that are only
//! positive-semidefinite or slightly indefinite because of rounding.
//!
//! ## Design notes
//!
//! * **Explicit**: The strategy is passed into the dense kernel by the engine;
//!   there is no global default other than [`PositiveEnforcement::None`].
//! * **Substitutable**: [`PositiveEnforcement::Custom`] accepts any function
//!   with the right signature.
//!
//! ## Invariants
//!
//! * Strategies only touch the diagonal, so symmetry is preserved.
//! * `None` leaves the matrix bit-for-bit unchanged.
//!
//! ## Non-goals
//!
//! * Modified Cholesky variants that alter pivots during the factorization.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

/// Signature of a caller-supplied enforcement step.
pub type EnforceFn<T> = fn(&mut DMatrix<T>);

// ============================================================================
// PositiveEnforcement
// ============================================================================

/// Pre-processing applied to a symmetric matrix before factorization.
#[derive(Debug, Clone, Copy, Default)]
pub enum PositiveEnforcement<T> {
    /// Factorize the matrix as given (default).
    #[default]
    None,

    /// Add `shift * I` (diagonal loading, "jitter").
    DiagonalShift(T),

    /// Raise each diagonal entry to at least the absolute sum of the other
    /// entries in its row plus `margin`.
    ///
    /// A symmetric, strictly diagonally dominant matrix with a positive
    /// diagonal is positive definite, so with `margin > 0` the factorization
    /// always succeeds. Rows that are already dominant are left alone.
    DiagonalDominance {
        /// Extra amount added on top of the off-diagonal row sum.
        margin: T,
    },

    /// Caller-supplied step.
    Custom(EnforceFn<T>),
}

impl<T: Float + Scalar> PositiveEnforcement<T> {
    /// Apply the strategy in place. Returns `true` if any entry may have changed.
    pub fn enforce(&self, matrix: &mut DMatrix<T>) -> bool {
        let n = matrix.nrows().min(matrix.ncols());
        match *self {
            PositiveEnforcement::None => false,
            PositiveEnforcement::DiagonalShift(shift) => {
                if shift == T::zero() {
                    return false;
                }
                for i in 0..n {
                    matrix[(i, i)] = matrix[(i, i)] + shift;
                }
                n > 0
            }
            PositiveEnforcement::DiagonalDominance { margin } => {
                let mut changed = false;
                for i in 0..n {
                    let mut off_diagonal = T::zero();
                    for j in 0..n {
                        if j != i {
                            off_diagonal = off_diagonal + matrix[(i, j)].abs();
                        }
                    }
                    let floor = off_diagonal + margin;
                    if !(matrix[(i, i)] >= floor) {
                        matrix[(i, i)] = floor;
                        changed = true;
                    }
                }
                changed
            }
            PositiveEnforcement::Custom(step) => {
                step(matrix);
                true
            }
        }
    }

    /// Shift parameter carried by the strategy, if any.
    pub fn shift(&self) -> Option<T> {
        match *self {
            PositiveEnforcement::DiagonalShift(shift) => Some(shift),
            PositiveEnforcement::DiagonalDominance { margin } => Some(margin),
            _ => None,
        }
    }
}
