//! Unrolled kernels for small dense matrices.
//!
//! ## Purpose
//!
//! Closed-form Cholesky recurrences for 2x2 and 3x3 matrices stored as
//! column-major arrays. The code is straight-line with no loops, so there is no
//! loop overhead and independent products can execute in parallel.
//!
//! ## Key concepts
//!
//! * Only the lower triangle of the input array is read.
//! * The output array is the full column-major factor with a zero upper part.
//! * Pivots are computed unconditionally; a failed pivot yields NaN downstream,
//!   and the returned status names the first failing one.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::primitives::status::FactorStatus;

// ============================================================================
// 2x2
// ============================================================================

/// Cholesky factor of a column-major 2x2 matrix `[a00, a10, a01, a11]`.
#[inline]
pub fn factorize_2x2<T: Float>(a: [T; 4]) -> ([T; 4], FactorStatus) {
    let zero = T::zero();

    let p0 = a[0];
    let l00 = p0.sqrt();
    let l10 = a[1] / l00;

    let p1 = a[3] - l10 * l10;
    let l11 = p1.sqrt();

    ([l00, l10, zero, l11], FactorStatus::from_pivots([p0, p1]))
}

// ============================================================================
// 3x3
// ============================================================================

/// Cholesky factor of a column-major 3x3 matrix.
///
/// Layout: `[a00, a10, a20, a01, a11, a21, a02, a12, a22]`.
#[inline]
pub fn factorize_3x3<T: Float>(a: [T; 9]) -> ([T; 9], FactorStatus) {
    let zero = T::zero();

    // Column 0
    let p0 = a[0];
    let l00 = p0.sqrt();
    let inv00 = l00.recip();
    let l10 = a[1] * inv00;
    let l20 = a[2] * inv00;

    // Column 1
    let p1 = a[4] - l10 * l10;
    let l11 = p1.sqrt();
    let l21 = (a[5] - l20 * l10) / l11;

    // Column 2
    let p2 = a[8] - l20 * l20 - l21 * l21;
    let l22 = p2.sqrt();

    (
        [l00, l10, l20, zero, l11, l21, zero, zero, l22],
        FactorStatus::from_pivots([p0, p1, p2]),
    )
}

// ============================================================================
// Dense adapters
// ============================================================================

/// Run the 2x2 kernel on dense storage in place.
pub fn factorize_2x2_in_place<T: Float + Scalar>(matrix: &mut DMatrix<T>) -> FactorStatus {
    debug_assert_eq!(matrix.shape(), (2, 2));
    let data = matrix.as_mut_slice();
    let (factor, status) = factorize_2x2([data[0], data[1], data[2], data[3]]);
    data.copy_from_slice(&factor);
    status
}

/// Run the 3x3 kernel on dense storage in place.
pub fn factorize_3x3_in_place<T: Float + Scalar>(matrix: &mut DMatrix<T>) -> FactorStatus {
    debug_assert_eq!(matrix.shape(), (3, 3));
    let data = matrix.as_mut_slice();
    let mut a = [T::zero(); 9];
    a.copy_from_slice(data);
    let (factor, status) = factorize_3x3(a);
    data.copy_from_slice(&factor);
    status
}
