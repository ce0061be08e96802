#![cfg(feature = "dev")]

use nalgebra::dmatrix;

use fastcholesky_rs::internals::engine::validator::Validator;
use fastcholesky_rs::internals::math::enforcement::PositiveEnforcement;
use fastcholesky_rs::internals::primitives::errors::CholeskyError;
use fastcholesky_rs::internals::primitives::structure::{ShapeDescriptor, Structure};

#[test]
fn test_validate_square() {
    assert!(Validator::validate_square(&ShapeDescriptor::square(Structure::Dense, 3)).is_ok());

    let err = Validator::validate_square(&ShapeDescriptor {
        structure: Structure::Dense,
        rows: 2,
        cols: 3,
    })
    .unwrap_err();
    assert_eq!(err, CholeskyError::NotSquare { rows: 2, cols: 3 });
}

#[test]
fn test_validate_symmetry() {
    let symmetric = dmatrix![2.0, 1.0; 1.0, 2.0];
    assert!(Validator::validate_symmetry(&symmetric, 0.0).is_ok());

    let skewed = dmatrix![2.0, 1.0; 1.5, 2.0];
    match Validator::validate_symmetry(&skewed, 0.1) {
        Err(CholeskyError::AsymmetricInput {
            row,
            col,
            deviation,
            tolerance,
        }) => {
            assert_eq!((row, col), (1, 0));
            assert!((deviation - 0.5 / 1.5).abs() < 1e-12);
            assert_eq!(tolerance, 0.1);
        }
        other => panic!("expected AsymmetricInput, got {:?}", other),
    }
}

#[test]
fn test_validate_tolerance() {
    assert!(Validator::validate_tolerance(0.0).is_ok());
    assert!(Validator::validate_tolerance(1e-8).is_ok());
    assert_eq!(
        Validator::validate_tolerance(-1.0),
        Err(CholeskyError::InvalidTolerance(-1.0))
    );
    assert!(Validator::validate_tolerance(f64::INFINITY).is_err());
    assert!(Validator::validate_tolerance(f64::NAN).is_err());
}

#[test]
fn test_validate_enforcement() {
    assert!(Validator::validate_enforcement(&PositiveEnforcement::<f64>::None).is_ok());
    assert!(Validator::validate_enforcement(&PositiveEnforcement::DiagonalShift(0.0)).is_ok());
    assert!(
        Validator::validate_enforcement(&PositiveEnforcement::DiagonalDominance { margin: 1.0 })
            .is_ok()
    );

    assert_eq!(
        Validator::validate_enforcement(&PositiveEnforcement::DiagonalShift(-0.5)),
        Err(CholeskyError::InvalidShift(-0.5))
    );
    assert!(
        Validator::validate_enforcement(&PositiveEnforcement::DiagonalDominance {
            margin: f64::NAN
        })
        .is_err()
    );
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("symmetrization")),
        Err(CholeskyError::DuplicateParameter {
            parameter: "symmetrization"
        })
    );
}
