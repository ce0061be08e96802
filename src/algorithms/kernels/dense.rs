//! Generic dense kernels.
//!
//! ## Purpose
//!
//! Two dense paths, one per entry point:
//!
//! * [`factorize_dense`] (safe path): applies the enforcement strategy to an
//!   owned, already symmetrized copy and hands it to the library routine (or a
//!   caller-supplied kernel).
//! * [`factorize_dense_in_place`] (unchecked path): left-looking column
//!   Cholesky directly on the caller's buffer, with no allocation.
//!
//! ## Design notes
//!
//! * Column-major storage makes the left-looking update a sequence of
//!   contiguous `y -= alpha * x` column operations, dispatched to
//!   `FloatLinalg::axpy_sub` (SIMD for f64).
//! * The in-place kernel stops at the first invalid pivot; later columns keep
//!   their input values.

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::enforcement::PositiveEnforcement;
use crate::math::linalg::FloatLinalg;
use crate::primitives::status::{FactorStatus, is_valid_pivot};

/// Signature of a dense factorization kernel: symmetric matrix in, lower factor out.
pub type DenseKernelFn<T> = fn(DMatrix<T>) -> DMatrix<T>;

// ============================================================================
// Safe Path
// ============================================================================

/// Factorize an owned symmetric matrix with the library routine.
///
/// `kernel` overrides the library routine when set. The result is the lower
/// factor; its status is decided by the caller from the diagonal.
pub fn factorize_dense<T: FloatLinalg>(
    mut matrix: DMatrix<T>,
    enforcement: &PositiveEnforcement<T>,
    kernel: Option<DenseKernelFn<T>>,
) -> DMatrix<T> {
    if enforcement.enforce(&mut matrix) {
        log::debug!(
            target: "fastcholesky",
            "enforcement {:?} applied to {}x{} matrix",
            enforcement,
            matrix.nrows(),
            matrix.ncols()
        );
    }

    match kernel {
        Some(kernel) => kernel(matrix),
        None => T::dense_cholesky(matrix),
    }
}

// ============================================================================
// Unchecked Path
// ============================================================================

/// Left-looking Cholesky on column-major storage, in place.
///
/// Reads the lower triangle, writes `L` into it and zeroes the strictly upper
/// triangle. Non-square storage is factorized over its leading square block.
pub fn factorize_dense_in_place<T: FloatLinalg>(matrix: &mut DMatrix<T>) -> FactorStatus {
    let rows = matrix.nrows();
    let n = rows.min(matrix.ncols());
    let data = matrix.as_mut_slice();
    let mut status = FactorStatus::Success;

    for j in 0..n {
        let (left, right) = data.split_at_mut(j * rows);
        let col_j = &mut right[j..n];

        // col_j -= L[j, k] * col_k for every finished column k
        for k in 0..j {
            let col_k = &left[k * rows + j..k * rows + n];
            let l_jk = col_k[0];
            if l_jk != T::zero() {
                T::axpy_sub(l_jk, col_k, col_j);
            }
        }

        let pivot = col_j[0];
        if !is_valid_pivot(pivot) {
            status = FactorStatus::Failed { pivot: j };
            break;
        }

        let l_jj = pivot.sqrt();
        col_j[0] = l_jj;
        let inv = l_jj.recip();
        for v in col_j[1..].iter_mut() {
            *v = *v * inv;
        }
    }

    for j in 1..n {
        for v in data[j * rows..j * rows + j].iter_mut() {
            *v = T::zero();
        }
    }

    status
}
