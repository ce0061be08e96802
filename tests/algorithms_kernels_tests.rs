#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use nalgebra::{DMatrix, dmatrix, dvector};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use fastcholesky_rs::internals::algorithms::kernels::fixed::{factorize_2x2, factorize_3x3};
use fastcholesky_rs::internals::algorithms::kernels::{
    factorize_2x2_in_place, factorize_3x3_in_place, factorize_dense, factorize_dense_in_place, factorize_diagonal, factorize_diagonal_in_place,
    factorize_scalar, factorize_scalar_in_place, factorize_scaled_identity,
    factorize_scaled_identity_in_place,
};
use fastcholesky_rs::internals::math::enforcement::PositiveEnforcement;
use fastcholesky_rs::internals::primitives::status::FactorStatus;
use fastcholesky_rs::internals::primitives::structure::ScaledIdentity;

fn random_spd(n: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let b = DMatrix::<f64>::from_fn(n, n, |_, _| StandardNormal.sample(&mut rng));
    &b * b.transpose() + DMatrix::identity(n, n) * (n as f64)
}

// ============================================================================
// Scalar, Diagonal, ScaledIdentity
// ============================================================================

#[test]
fn test_scalar_kernels() {
    assert_eq!(factorize_scalar(4.0), 2.0);
    assert_eq!(factorize_scalar(-4.0), 0.0);

    let mut a = 9.0;
    assert_eq!(factorize_scalar_in_place(&mut a), FactorStatus::Success);
    assert_eq!(a, 3.0);

    let mut b: f64 = -1.0;
    assert_eq!(
        factorize_scalar_in_place(&mut b),
        FactorStatus::Failed { pivot: 0 }
    );
    assert!(b.is_nan());
}

#[test]
fn test_diagonal_kernels() {
    let d = dvector![4.0, 9.0, -1.0];
    assert_eq!(factorize_diagonal(&d), dvector![2.0, 3.0, 0.0]);

    let mut ok = dvector![1.0, 16.0];
    assert_eq!(factorize_diagonal_in_place(&mut ok), FactorStatus::Success);
    assert_eq!(ok, dvector![1.0, 4.0]);

    let mut bad = dvector![1.0, 0.0, -2.0];
    assert_eq!(
        factorize_diagonal_in_place(&mut bad),
        FactorStatus::Failed { pivot: 1 }
    );
}

#[test]
fn test_scaled_identity_kernels() {
    let s = ScaledIdentity::new(25.0, 4);
    assert_eq!(factorize_scaled_identity(&s), ScaledIdentity::new(5.0, 4));

    let mut t = ScaledIdentity::new(0.25, 3);
    assert_eq!(
        factorize_scaled_identity_in_place(&mut t),
        FactorStatus::Success
    );
    assert_eq!(t.scale, 0.5);

    let mut empty = ScaledIdentity::new(-1.0, 0);
    assert_eq!(
        factorize_scaled_identity_in_place(&mut empty),
        FactorStatus::Success
    );

    let mut neg = ScaledIdentity::new(-1.0, 2);
    assert_eq!(
        factorize_scaled_identity_in_place(&mut neg),
        FactorStatus::Failed { pivot: 0 }
    );
}

// ============================================================================
// Unrolled Kernels
// ============================================================================

#[test]
fn test_factorize_2x2() {
    // [[1, .5], [.5, 1]] column-major
    let (l, status) = factorize_2x2([1.0, 0.5, 0.5, 1.0]);
    assert_eq!(status, FactorStatus::Success);
    assert_relative_eq!(l[0], 1.0);
    assert_relative_eq!(l[1], 0.5);
    assert_eq!(l[2], 0.0);
    assert_relative_eq!(l[3], 0.75f64.sqrt());
}

#[test]
fn test_factorize_2x2_reads_lower_only() {
    let (l, _) = factorize_2x2([4.0, 2.0, 1000.0, 5.0]);
    assert_eq!(l, [2.0, 1.0, 0.0, 2.0]);
}

#[test]
fn test_factorize_2x2_failure() {
    let (_, status) = factorize_2x2([1.0, 2.0, 2.0, 1.0]);
    assert_eq!(status, FactorStatus::Failed { pivot: 1 });

    let (_, status) = factorize_2x2([0.0, 0.0, 0.0, 1.0]);
    assert_eq!(status, FactorStatus::Failed { pivot: 0 });
}

#[test]
fn test_factorize_3x3_matches_library() {
    let a = random_spd(3, 7);
    let mut data = [0.0; 9];
    data.copy_from_slice(a.as_slice());

    let (l, status) = factorize_3x3(data);
    assert_eq!(status, FactorStatus::Success);

    let expected = a.clone().cholesky().expect("SPD").l();
    assert_relative_eq!(
        DMatrix::from_column_slice(3, 3, &l),
        expected,
        epsilon = 1e-12
    );
}

#[test]
fn test_fixed_in_place_adapters() {
    let mut a2 = dmatrix![4.0, 2.0; 2.0, 5.0];
    assert_eq!(factorize_2x2_in_place(&mut a2), FactorStatus::Success);
    assert_eq!(a2, dmatrix![2.0, 0.0; 1.0, 2.0]);

    let mut a3 = dmatrix![
        4.0, 0.0, 0.0;
        0.0, 9.0, 0.0;
        0.0, 0.0, -1.0
    ];
    assert_eq!(
        factorize_3x3_in_place(&mut a3),
        FactorStatus::Failed { pivot: 2 }
    );
}

// ============================================================================
// Dense Kernels
// ============================================================================

#[test]
fn test_factorize_dense_library_routine() {
    let a = random_spd(6, 11);
    let l = factorize_dense(a.clone(), &PositiveEnforcement::None, None);
    assert_relative_eq!(&l * l.transpose(), a, epsilon = 1e-10);
    for j in 1..6 {
        for i in 0..j {
            assert_eq!(l[(i, j)], 0.0);
        }
    }
}

#[test]
fn test_factorize_dense_uses_supplied_kernel() {
    fn identity_kernel(_: DMatrix<f64>) -> DMatrix<f64> {
        DMatrix::identity(4, 4)
    }

    let l = factorize_dense(random_spd(4, 1), &PositiveEnforcement::None, Some(identity_kernel));
    assert_eq!(l, DMatrix::identity(4, 4));
}

#[test]
fn test_factorize_dense_applies_enforcement() {
    // Indefinite without the shift, positive definite with it.
    let a = DMatrix::from_diagonal_element(4, 4, -1.0);
    let l = factorize_dense(a, &PositiveEnforcement::DiagonalShift(5.0), None);
    assert_relative_eq!(l, DMatrix::identity(4, 4) * 2.0, epsilon = 1e-12);
}

#[test]
fn test_factorize_dense_in_place_matches_library() {
    for (n, seed) in [(4, 1), (5, 2), (9, 3), (16, 4)] {
        let a = random_spd(n, seed);
        let expected = a.clone().cholesky().expect("SPD").l();

        let mut work = a.clone();
        assert_eq!(factorize_dense_in_place(&mut work), FactorStatus::Success);
        assert_relative_eq!(work, expected, epsilon = 1e-10);
    }
}

#[test]
fn test_factorize_dense_in_place_reads_lower_only() {
    let a = random_spd(5, 21);
    let mut work = a.clone();
    for j in 1..5 {
        for i in 0..j {
            work[(i, j)] = f64::NAN;
        }
    }

    assert_eq!(factorize_dense_in_place(&mut work), FactorStatus::Success);
    assert_relative_eq!(work, a.cholesky().expect("SPD").l(), epsilon = 1e-10);
}

#[test]
fn test_factorize_dense_in_place_stops_at_first_failure() {
    let mut a = DMatrix::<f64>::identity(5, 5);
    a[(2, 2)] = -3.0;
    a[(4, 4)] = 7.0;

    assert_eq!(
        factorize_dense_in_place(&mut a),
        FactorStatus::Failed { pivot: 2 }
    );
    // Columns past the failure keep their input values.
    assert_eq!(a[(4, 4)], 7.0);
}

#[test]
fn test_factorize_dense_in_place_f32() {
    let mut a = DMatrix::<f32>::from_diagonal_element(5, 5, 4.0);
    a[(1, 0)] = 1.0;
    a[(0, 1)] = 1.0;

    assert_eq!(factorize_dense_in_place(&mut a), FactorStatus::Success);
    assert_relative_eq!(a[(0, 0)], 2.0f32);
    assert_relative_eq!(a[(1, 0)], 0.5f32);
    assert_eq!(a[(0, 1)], 0.0f32);
    assert_relative_eq!(a[(1, 1)], (4.0f32 - 0.25).sqrt());
}
