//! Derived operations on `Cholesky` and `CholeskyView`.

// External dependencies
use nalgebra::DVector;

// Internal dependencies
use crate::derived::ops;
use crate::engine::factorization::{Cholesky, CholeskyView};
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::CholeskyError;
use crate::primitives::structure::Structured;

impl<T: FloatLinalg> Cholesky<T> {
    /// The factor `L`, i.e. a matrix square root of the input.
    pub fn square_root(&self) -> Result<Structured<T>, CholeskyError> {
        ops::square_root(self.factor_ref(), self.status())
    }

    /// Consume into the factor `L`, without copying.
    pub fn into_square_root(self) -> Result<Structured<T>, CholeskyError> {
        self.status().check()?;
        Ok(self.into_factor())
    }

    /// Natural logarithm of the determinant of the input.
    pub fn log_determinant(&self) -> Result<T, CholeskyError> {
        ops::log_determinant(self.factor_ref(), self.status())
    }

    /// Determinant of the input.
    pub fn determinant(&self) -> Result<T, CholeskyError> {
        self.log_determinant().map(T::exp)
    }

    /// Inverse of the input.
    pub fn inverse(&self) -> Result<Structured<T>, CholeskyError> {
        ops::inverse(self.factor_ref(), self.status())
    }

    /// Inverse and log-determinant of the input.
    pub fn inverse_and_log_determinant(&self) -> Result<(Structured<T>, T), CholeskyError> {
        ops::inverse_and_log_determinant(self.factor_ref(), self.status())
    }

    /// Solve `A x = b`.
    pub fn solve(&self, rhs: &DVector<T>) -> Result<DVector<T>, CholeskyError> {
        ops::solve(self.factor_ref(), self.status(), rhs)
    }

    /// `L * L^T`; available on failed factorizations for diagnostics.
    pub fn reconstruct(&self) -> Structured<T> {
        ops::reconstruct(self.factor_ref())
    }
}

impl<T: FloatLinalg> CholeskyView<'_, T> {
    /// The factor `L` copied out of the caller's storage.
    pub fn square_root(&self) -> Result<Structured<T>, CholeskyError> {
        ops::square_root(self.factor_ref(), self.status())
    }

    /// Natural logarithm of the determinant of the original input.
    pub fn log_determinant(&self) -> Result<T, CholeskyError> {
        ops::log_determinant(self.factor_ref(), self.status())
    }

    /// Determinant of the original input.
    pub fn determinant(&self) -> Result<T, CholeskyError> {
        self.log_determinant().map(T::exp)
    }

    /// Inverse of the original input.
    pub fn inverse(&self) -> Result<Structured<T>, CholeskyError> {
        ops::inverse(self.factor_ref(), self.status())
    }

    /// Inverse and log-determinant of the original input.
    pub fn inverse_and_log_determinant(&self) -> Result<(Structured<T>, T), CholeskyError> {
        ops::inverse_and_log_determinant(self.factor_ref(), self.status())
    }

    /// Solve `A x = b` for the original input `A`.
    pub fn solve(&self, rhs: &DVector<T>) -> Result<DVector<T>, CholeskyError> {
        ops::solve(self.factor_ref(), self.status(), rhs)
    }

    /// `L * L^T`; available on failed factorizations for diagnostics.
    pub fn reconstruct(&self) -> Structured<T> {
        ops::reconstruct(self.factor_ref())
    }
}
