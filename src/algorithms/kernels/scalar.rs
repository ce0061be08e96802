//! Scalar, diagonal and scaled-identity kernels.
//!
//! ## Purpose
//!
//! These shapes factorize entry by entry: the factor of a diagonal matrix is
//! the element-wise square root, with no off-diagonal storage at all.
//!
//! ## Key concepts
//!
//! * **Safe variants** clamp at zero before the square root, so a negative
//!   entry produces a zero pivot (reported as failure) rather than NaN.
//! * **In-place variants** take the square root of the raw value and report the
//!   first entry that was not a valid pivot.

// External dependencies
use nalgebra::{DVector, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::primitives::status::{FactorStatus, is_valid_pivot};
use crate::primitives::structure::ScaledIdentity;

// ============================================================================
// Scalar
// ============================================================================

/// Factor of a 1x1 matrix: `sqrt(max(a, 0))`.
#[inline]
pub fn factorize_scalar<T: Float>(a: T) -> T {
    a.max(T::zero()).sqrt()
}

/// In-place factor of a 1x1 matrix: `sqrt(a)`, NaN for negative `a`.
#[inline]
pub fn factorize_scalar_in_place<T: Float>(a: &mut T) -> FactorStatus {
    let pivot = *a;
    *a = pivot.sqrt();
    if is_valid_pivot(pivot) {
        FactorStatus::Success
    } else {
        FactorStatus::Failed { pivot: 0 }
    }
}

// ============================================================================
// Diagonal
// ============================================================================

/// Factor of a diagonal matrix, stored as its diagonal.
pub fn factorize_diagonal<T: Float + Scalar>(diagonal: &DVector<T>) -> DVector<T> {
    diagonal.map(factorize_scalar)
}

/// In-place factor of a diagonal matrix.
pub fn factorize_diagonal_in_place<T: Float + Scalar>(diagonal: &mut DVector<T>) -> FactorStatus {
    let mut status = FactorStatus::Success;
    for (i, d) in diagonal.iter_mut().enumerate() {
        if !is_valid_pivot(*d) && status.is_success() {
            status = FactorStatus::Failed { pivot: i };
        }
        *d = d.sqrt();
    }
    status
}

// ============================================================================
// Scaled Identity
// ============================================================================

/// Factor of `s * I`: `sqrt(max(s, 0)) * I`.
#[inline]
pub fn factorize_scaled_identity<T: Float + Scalar>(
    identity: &ScaledIdentity<T>,
) -> ScaledIdentity<T> {
    ScaledIdentity::new(factorize_scalar(identity.scale), identity.dim)
}

/// In-place factor of `s * I`.
#[inline]
pub fn factorize_scaled_identity_in_place<T: Float + Scalar>(
    identity: &mut ScaledIdentity<T>,
) -> FactorStatus {
    let status = factorize_scalar_in_place(&mut identity.scale);
    if identity.dim == 0 {
        FactorStatus::Success
    } else {
        status
    }
}
