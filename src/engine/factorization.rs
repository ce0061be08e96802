//! Factorization result types.
//!
//! ## Purpose
//!
//! This module defines what the engine hands back to callers:
//!
//! * [`Cholesky`]: owned result of the safe path.
//! * [`CholeskyView`]: borrowed result of the in-place path, pointing into the
//!   caller's storage.
//!
//! Both carry the lower factor, the [`FactorStatus`] and the [`ShapeTag`] that
//! produced them. Derived operations (inverse, log-determinant, ...) are
//! implemented on both types in the `derived` layer.
//!
//! ## Invariants
//!
//! * If the status is `Success`, every diagonal entry of the factor is strictly
//!   positive and finite.
//! * If the status is `Failed`, the factor contents are unspecified.
//! * A dense factor has a zero strictly upper triangle.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::classifier::ShapeTag;
use crate::primitives::status::FactorStatus;
use crate::primitives::structure::{MatrixRef, Structured, SymmetricInput};

// ============================================================================
// Cholesky (owned)
// ============================================================================

/// Owned Cholesky factorization `A = L * L^T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cholesky<T: Scalar> {
    /// Lower factor.
    factor: Structured<T>,

    /// Outcome of the factorization.
    status: FactorStatus,

    /// Kernel family that produced the factor.
    shape: ShapeTag,
}

impl<T: Float + Scalar> Cholesky<T> {
    pub(crate) fn new(factor: Structured<T>, status: FactorStatus, shape: ShapeTag) -> Self {
        Self {
            factor,
            status,
            shape,
        }
    }

    /// Whether the factorization succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Outcome of the factorization.
    #[inline]
    pub fn status(&self) -> FactorStatus {
        self.status
    }

    /// Kernel family that produced the factor.
    #[inline]
    pub fn shape(&self) -> ShapeTag {
        self.shape
    }

    /// Dimension of the factorized matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor.nrows()
    }

    /// The lower factor in its own storage.
    ///
    /// Contents are unspecified unless [`Cholesky::is_success`] holds.
    #[inline]
    pub fn factor(&self) -> &Structured<T> {
        &self.factor
    }

    /// Borrowed view of the lower factor.
    #[inline]
    pub fn factor_ref(&self) -> MatrixRef<'_, T> {
        self.factor.as_matrix_ref()
    }

    /// Consume into the lower factor.
    pub fn into_factor(self) -> Structured<T> {
        self.factor
    }

    /// Dense copy of `L`.
    pub fn l(&self) -> DMatrix<T> {
        self.factor.to_dense()
    }

    /// Dense copy of `U = L^T`.
    pub fn u(&self) -> DMatrix<T> {
        self.factor.to_dense().transpose()
    }
}

// ============================================================================
// CholeskyView (borrowed)
// ============================================================================

/// Cholesky factorization stored in caller-owned memory.
///
/// Returned by the in-place entry point. The borrowed storage now holds the
/// attempted factor; its previous contents are gone.
#[derive(Debug, Clone, Copy)]
pub struct CholeskyView<'a, T: Scalar> {
    /// Lower factor, in the caller's storage.
    factor: MatrixRef<'a, T>,

    /// Outcome observed by the kernel.
    status: FactorStatus,

    /// Kernel family that produced the factor.
    shape: ShapeTag,
}

impl<'a, T: Float + Scalar> CholeskyView<'a, T> {
    pub(crate) fn new(factor: MatrixRef<'a, T>, status: FactorStatus, shape: ShapeTag) -> Self {
        Self {
            factor,
            status,
            shape,
        }
    }

    /// Whether the factorization succeeded.
    ///
    /// This is the only check performed on the in-place path.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Outcome of the factorization.
    #[inline]
    pub fn status(&self) -> FactorStatus {
        self.status
    }

    /// Kernel family that produced the factor.
    #[inline]
    pub fn shape(&self) -> ShapeTag {
        self.shape
    }

    /// Dimension of the factorized matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.factor.dim()
    }

    /// Borrowed view of the lower factor.
    #[inline]
    pub fn factor_ref(&self) -> MatrixRef<'a, T> {
        self.factor
    }

    /// Copy into an owned [`Cholesky`].
    pub fn to_cholesky(&self) -> Cholesky<T> {
        Cholesky::new(self.factor.to_structured(), self.status, self.shape)
    }
}
