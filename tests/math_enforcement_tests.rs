#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use nalgebra::{DMatrix, dmatrix};

use fastcholesky_rs::internals::math::enforcement::PositiveEnforcement;

#[test]
fn test_enforcement_none() {
    let mut m = dmatrix![1.0, 2.0; 2.0, 1.0];
    assert!(!PositiveEnforcement::None.enforce(&mut m));
    assert_eq!(m, dmatrix![1.0, 2.0; 2.0, 1.0]);
    assert_eq!(PositiveEnforcement::<f64>::None.shift(), None);
}

#[test]
fn test_enforcement_diagonal_shift() {
    let mut m = dmatrix![1.0, 2.0; 2.0, 1.0];
    assert!(PositiveEnforcement::DiagonalShift(0.5).enforce(&mut m));
    assert_relative_eq!(m, dmatrix![1.5, 2.0; 2.0, 1.5]);

    let mut unchanged = dmatrix![1.0, 2.0; 2.0, 1.0];
    assert!(!PositiveEnforcement::DiagonalShift(0.0).enforce(&mut unchanged));
    assert_eq!(PositiveEnforcement::DiagonalShift(0.5).shift(), Some(0.5));
}

#[test]
fn test_enforcement_diagonal_dominance() {
    let mut m = dmatrix![
        1.0, 2.0, -1.0;
        2.0, 9.0, 0.5;
        -1.0, 0.5, 0.0
    ];
    let strategy = PositiveEnforcement::DiagonalDominance { margin: 0.1 };
    assert!(strategy.enforce(&mut m));

    // Row 0: |2| + |-1| + 0.1
    assert_relative_eq!(m[(0, 0)], 3.1);
    // Row 1 already dominant
    assert_relative_eq!(m[(1, 1)], 9.0);
    // Row 2: |-1| + |0.5| + 0.1
    assert_relative_eq!(m[(2, 2)], 1.6);
    assert_relative_eq!(m[(0, 1)], 2.0);
    assert_eq!(strategy.shift(), Some(0.1));
}

#[test]
fn test_enforcement_diagonal_dominance_no_change() {
    let mut m = dmatrix![4.0, 1.0; 1.0, 4.0];
    let strategy = PositiveEnforcement::DiagonalDominance { margin: 1.0 };
    assert!(!strategy.enforce(&mut m));
}

#[test]
fn test_enforcement_custom() {
    fn clamp_diagonal(m: &mut DMatrix<f64>) {
        for i in 0..m.nrows() {
            m[(i, i)] = m[(i, i)].max(1.0);
        }
    }

    let mut m = dmatrix![-3.0, 0.0; 0.0, 2.0];
    assert!(PositiveEnforcement::Custom(clamp_diagonal).enforce(&mut m));
    assert_eq!(m, dmatrix![1.0, 0.0; 0.0, 2.0]);
}
