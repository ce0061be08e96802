//! Linear algebra backend abstraction.
//!
//! ## Purpose
//!
//! This module bridges generic `Float` code to the dense kernels the crate does
//! not implement itself: the library Cholesky routine, triangular solves and
//! matrix products, all provided by nalgebra.
//!
//! ## Design notes
//!
//! * Generic code is written against `num_traits::Float`; nalgebra kernels need
//!   `RealField`. Mixing both bounds makes method calls like `sqrt` ambiguous,
//!   so the bridge is a trait implemented for `f32` and `f64` that calls
//!   monomorphic backend functions.
//! * The column update `y -= alpha * x` of the in-place dense kernel lives here
//!   too, with a `wide` SIMD path for `f64` and a scalar path for `f32`.

// External dependencies
use core::fmt::Debug;
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;
use wide::f64x2;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Scalar + Debug + Send + Sync + 'static {
    /// Library Cholesky of a symmetric matrix, returning the lower factor.
    ///
    /// Never fails: entries past a non-positive pivot are NaN or infinite. The
    /// strictly upper triangle of the result is zero.
    fn dense_cholesky(matrix: DMatrix<Self>) -> DMatrix<Self>;

    /// Inverse of `L * L^T` given the lower factor `L`.
    ///
    /// Returns `None` if `L` has a zero on its diagonal.
    fn inverse_from_lower(factor: &DMatrix<Self>) -> Option<DMatrix<Self>>;

    /// Product `L * L^T`.
    fn lower_gram(factor: &DMatrix<Self>) -> DMatrix<Self>;

    /// Solve `L * L^T * x = b`.
    fn solve_lower(factor: &DMatrix<Self>, rhs: &DVector<Self>) -> Option<DVector<Self>>;

    /// Column update `y -= alpha * x` over equal-length slices.
    fn axpy_sub(alpha: Self, x: &[Self], y: &mut [Self]);
}

impl FloatLinalg for f64 {
    #[inline]
    fn dense_cholesky(matrix: DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::dense_cholesky(matrix)
    }
    #[inline]
    fn inverse_from_lower(factor: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::inverse_from_lower(factor)
    }
    #[inline]
    fn lower_gram(factor: &DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::lower_gram(factor)
    }
    #[inline]
    fn solve_lower(factor: &DMatrix<Self>, rhs: &DVector<Self>) -> Option<DVector<Self>> {
        nalgebra_backend::solve_lower(factor, rhs)
    }
    #[inline]
    fn axpy_sub(alpha: Self, x: &[Self], y: &mut [Self]) {
        axpy_sub_simd(alpha, x, y)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn dense_cholesky(matrix: DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::dense_cholesky(matrix)
    }
    #[inline]
    fn inverse_from_lower(factor: &DMatrix<Self>) -> Option<DMatrix<Self>> {
        nalgebra_backend::inverse_from_lower(factor)
    }
    #[inline]
    fn lower_gram(factor: &DMatrix<Self>) -> DMatrix<Self> {
        nalgebra_backend::lower_gram(factor)
    }
    #[inline]
    fn solve_lower(factor: &DMatrix<Self>, rhs: &DVector<Self>) -> Option<DVector<Self>> {
        nalgebra_backend::solve_lower(factor, rhs)
    }
    #[inline]
    fn axpy_sub(alpha: Self, x: &[Self], y: &mut [Self]) {
        axpy_sub_scalar(alpha, x, y)
    }
}

// ============================================================================
// Column Update
// ============================================================================

/// Column update `y -= alpha * x` (Scalar).
#[inline]
pub fn axpy_sub_scalar<T: Float>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (dst, &src) in y.iter_mut().zip(x) {
        *dst = *dst - alpha * src;
    }
}

/// Column update `y -= alpha * x` (SIMD, two lanes).
#[inline]
pub fn axpy_sub_simd(alpha: f64, x: &[f64], y: &mut [f64]) {
    debug_assert_eq!(x.len(), y.len());
    let n = x.len().min(y.len());
    let a = f64x2::splat(alpha);
    let mut i = 0;

    while i + 2 <= n {
        let xv = f64x2::new([x[i], x[i + 1]]);
        let yv = f64x2::new([y[i], y[i + 1]]);
        let out = (yv - a * xv).to_array();
        y[i] = out[0];
        y[i + 1] = out[1];
        i += 2;
    }

    // Tail
    if i < n {
        y[i] -= alpha * x[i];
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based dense kernels.
pub mod nalgebra_backend {
    use nalgebra::{Cholesky, DMatrix, DVector, RealField};

    /// Library Cholesky without the positive-definiteness check.
    pub fn dense_cholesky<T: RealField + Copy>(matrix: DMatrix<T>) -> DMatrix<T> {
        Cholesky::new_unchecked(matrix).unpack()
    }

    /// `L^-T * L^-1`, symmetrized from its lower triangle.
    pub fn inverse_from_lower<T: RealField + Copy>(factor: &DMatrix<T>) -> Option<DMatrix<T>> {
        let n = factor.nrows();
        let mut l_inv = DMatrix::identity(n, n);
        if !factor.solve_lower_triangular_mut(&mut l_inv) {
            return None;
        }

        let mut inverse = l_inv.tr_mul(&l_inv);
        inverse.fill_upper_triangle_with_lower_triangle();
        Some(inverse)
    }

    /// `L * L^T`.
    pub fn lower_gram<T: RealField + Copy>(factor: &DMatrix<T>) -> DMatrix<T> {
        factor * factor.transpose()
    }

    /// Forward then backward substitution with the lower factor.
    pub fn solve_lower<T: RealField + Copy>(
        factor: &DMatrix<T>,
        rhs: &DVector<T>,
    ) -> Option<DVector<T>> {
        let y = factor.solve_lower_triangular(rhs)?;
        factor.tr_solve_lower_triangular(&y)
    }
}
