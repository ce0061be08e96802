#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, dmatrix, dvector};

use fastcholesky_rs::internals::math::linalg::{FloatLinalg, axpy_sub_scalar, axpy_sub_simd};

// ============================================================================
// Column Update Tests
// ============================================================================

#[test]
fn test_axpy_sub_simd_matches_scalar() {
    for len in 0..8 {
        let x: Vec<f64> = (0..len).map(|i| i as f64 + 0.5).collect();
        let mut y_simd: Vec<f64> = (0..len).map(|i| 10.0 - i as f64).collect();
        let mut y_scalar = y_simd.clone();

        axpy_sub_simd(1.5, &x, &mut y_simd);
        axpy_sub_scalar(1.5, &x, &mut y_scalar);

        assert_eq!(y_simd, y_scalar, "length {}", len);
    }
}

#[test]
fn test_axpy_sub_f32() {
    let x = [1.0f32, 2.0, 3.0];
    let mut y = [1.0f32, 1.0, 1.0];
    f32::axpy_sub(2.0, &x, &mut y);
    assert_eq!(y, [-1.0, -3.0, -5.0]);
}

// ============================================================================
// Backend Tests
// ============================================================================

#[test]
fn test_dense_cholesky_backend() {
    let a = dmatrix![4.0, 2.0; 2.0, 5.0];
    let l = f64::dense_cholesky(a);
    assert_relative_eq!(l, dmatrix![2.0, 0.0; 1.0, 2.0], epsilon = 1e-12);
}

#[test]
fn test_inverse_from_lower_is_symmetric() {
    let l = dmatrix![
        2.0, 0.0, 0.0;
        1.0, 3.0, 0.0;
        0.5, -1.0, 1.5
    ];
    let a = &l * l.transpose();
    let inv = f64::inverse_from_lower(&l).expect("non-singular factor");

    assert_eq!(inv, inv.transpose());
    assert_relative_eq!(&a * &inv, DMatrix::identity(3, 3), epsilon = 1e-12);
}

#[test]
fn test_inverse_from_lower_singular() {
    let l = dmatrix![1.0, 0.0; 1.0, 0.0];
    assert!(f64::inverse_from_lower(&l).is_none());
}

#[test]
fn test_lower_gram_and_solve() {
    let l = dmatrix![2.0, 0.0; 1.0, 2.0];
    let a = f64::lower_gram(&l);
    assert_relative_eq!(a, dmatrix![4.0, 2.0; 2.0, 5.0]);

    let b = dvector![2.0, 3.0];
    let x: DVector<f64> = f64::solve_lower(&l, &b).expect("non-singular factor");
    assert_relative_eq!(&a * &x, b, epsilon = 1e-12);
}
