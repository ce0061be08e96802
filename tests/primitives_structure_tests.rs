#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector, dmatrix};

use fastcholesky_rs::internals::primitives::status::{FactorStatus, is_valid_pivot};
use fastcholesky_rs::internals::primitives::structure::{
    Diagonal, MatrixRef, ScaledIdentity, ShapeDescriptor, Structure, Structured, SymmetricInput,
};

// ============================================================================
// FactorStatus Tests
// ============================================================================

#[test]
fn test_valid_pivot() {
    assert!(is_valid_pivot(1.0));
    assert!(is_valid_pivot(f64::MIN_POSITIVE));
    assert!(!is_valid_pivot(0.0));
    assert!(!is_valid_pivot(-0.0));
    assert!(!is_valid_pivot(-1.0));
    assert!(!is_valid_pivot(f64::NAN));
    assert!(!is_valid_pivot(f64::INFINITY));
}

#[test]
fn test_status_from_pivots() {
    assert_eq!(
        FactorStatus::from_pivots([1.0, 2.0, 3.0]),
        FactorStatus::Success
    );
    assert_eq!(
        FactorStatus::from_pivots([1.0, -2.0, f64::NAN]),
        FactorStatus::Failed { pivot: 1 }
    );
    assert_eq!(
        FactorStatus::from_pivots(core::iter::empty::<f64>()),
        FactorStatus::Success
    );
}

#[test]
fn test_status_accessors() {
    let ok = FactorStatus::Success;
    assert!(ok.is_success());
    assert_eq!(ok.failed_pivot(), None);
    assert!(ok.check().is_ok());

    let failed = FactorStatus::Failed { pivot: 2 };
    assert!(!failed.is_success());
    assert_eq!(failed.failed_pivot(), Some(2));
    assert_eq!(
        failed.check().unwrap_err().to_string(),
        "Matrix is not positive definite: pivot 2 is not strictly positive"
    );

    assert_eq!(FactorStatus::default(), FactorStatus::Success);
}

// ============================================================================
// Storage Tests
// ============================================================================

#[test]
fn test_diagonal_storage() {
    let mut d = Diagonal::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(d.dim(), 3);
    assert_eq!(d.diagonal()[1], 2.0);

    d.diagonal_mut()[1] = 5.0;
    assert_eq!(d.to_dense(), dmatrix![1.0, 0.0, 0.0; 0.0, 5.0, 0.0; 0.0, 0.0, 3.0]);
    assert_eq!(d.into_vector(), DVector::from_vec(vec![1.0, 5.0, 3.0]));
}

#[test]
fn test_scaled_identity_storage() {
    let s = ScaledIdentity::new(2.5, 3);
    assert_eq!(s.to_dense(), DMatrix::from_diagonal_element(3, 3, 2.5));
    assert_eq!(ScaledIdentity::<f64>::identity(2).to_dense(), DMatrix::identity(2, 2));
}

#[test]
fn test_structured_accessors() {
    let dense: Structured<f64> = dmatrix![1.0, 2.0; 3.0, 4.0].into();
    assert_eq!(dense.structure(), Structure::Dense);
    assert_eq!(dense.get(1, 0), 3.0);
    assert!(dense.as_dense().is_some());

    let diag: Structured<f64> = Diagonal::new(vec![7.0, 8.0]).into();
    assert_eq!(diag.structure(), Structure::Diagonal);
    assert_eq!((diag.nrows(), diag.ncols()), (2, 2));
    assert_eq!(diag.get(1, 1), 8.0);
    assert_eq!(diag.get(0, 1), 0.0);
    assert!(diag.as_dense().is_none());

    let scaled: Structured<f64> = ScaledIdentity::new(4.0, 5).into();
    assert_eq!(scaled.structure(), Structure::ScaledIdentity);
    assert_eq!(scaled.get(3, 3), 4.0);
    assert_eq!(scaled.get(3, 2), 0.0);
    assert_relative_eq!(scaled.into_dense(), DMatrix::from_diagonal_element(5, 5, 4.0));
}

// ============================================================================
// View Tests
// ============================================================================

#[test]
fn test_descriptors() {
    let dense = DMatrix::<f64>::zeros(2, 3);
    assert_eq!(
        dense.as_matrix_ref().descriptor(),
        ShapeDescriptor {
            structure: Structure::Dense,
            rows: 2,
            cols: 3
        }
    );
    assert!(!dense.as_matrix_ref().descriptor().is_square());

    let diag = Diagonal::new(vec![1.0, 1.0]);
    assert_eq!(
        diag.as_matrix_ref().descriptor(),
        ShapeDescriptor::square(Structure::Diagonal, 2)
    );

    let mut scaled = ScaledIdentity::new(1.0, 4);
    assert_eq!(
        scaled.as_matrix_mut().descriptor(),
        ShapeDescriptor::square(Structure::ScaledIdentity, 4)
    );
}

#[test]
fn test_matrix_ref_entries() {
    let m = dmatrix![1.0, 2.0; 3.0, 4.0];
    let view = m.as_matrix_ref();
    assert_eq!(view.dim(), 2);
    assert_eq!(view.diag(1), 4.0);
    assert_eq!(view.get(0, 1), 2.0);

    let scaled = MatrixRef::ScaledIdentity(ScaledIdentity::new(3.0, 2));
    assert_eq!(scaled.diag(1), 3.0);
    assert_eq!(scaled.to_structured(), Structured::ScaledIdentity(ScaledIdentity::new(3.0, 2)));
}

#[test]
fn test_structured_views_follow_variant() {
    let mut s: Structured<f64> = Diagonal::new(vec![1.0, 4.0]).into();
    assert!(matches!(s.as_matrix_ref(), MatrixRef::Diagonal(_)));

    let view = s.as_matrix_mut().into_ref();
    assert_eq!(view.diag(1), 4.0);
}
