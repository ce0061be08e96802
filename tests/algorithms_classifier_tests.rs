#![cfg(feature = "dev")]

use fastcholesky_rs::internals::algorithms::classifier::{ShapeTag, classify};
use fastcholesky_rs::internals::primitives::structure::{ShapeDescriptor, Structure};

fn dense(rows: usize, cols: usize) -> ShapeDescriptor {
    ShapeDescriptor {
        structure: Structure::Dense,
        rows,
        cols,
    }
}

#[test]
fn test_classify_dense_by_size() {
    assert_eq!(classify(&dense(1, 1)), ShapeTag::Scalar);
    assert_eq!(classify(&dense(2, 2)), ShapeTag::Fixed2);
    assert_eq!(classify(&dense(3, 3)), ShapeTag::Fixed3);
    assert_eq!(classify(&dense(4, 4)), ShapeTag::Dense);
    assert_eq!(classify(&dense(100, 100)), ShapeTag::Dense);
}

#[test]
fn test_classify_empty_and_non_square() {
    assert_eq!(classify(&dense(0, 0)), ShapeTag::Dense);
    assert_eq!(classify(&dense(2, 3)), ShapeTag::Dense);
    assert_eq!(classify(&dense(1, 2)), ShapeTag::Dense);
}

#[test]
fn test_classify_structure_wins_over_size() {
    for dim in [0, 1, 2, 3, 10] {
        assert_eq!(
            classify(&ShapeDescriptor::square(Structure::Diagonal, dim)),
            ShapeTag::Diagonal
        );
        assert_eq!(
            classify(&ShapeDescriptor::square(Structure::ScaledIdentity, dim)),
            ShapeTag::ScaledIdentity
        );
    }
}

#[test]
fn test_classify_is_const() {
    const TAG: ShapeTag = classify(&ShapeDescriptor::square(Structure::Dense, 2));
    assert_eq!(TAG, ShapeTag::Fixed2);
}

#[test]
fn test_shape_tag_names() {
    assert_eq!(ShapeTag::Scalar.name(), "scalar");
    assert_eq!(ShapeTag::Diagonal.name(), "diagonal");
    assert_eq!(ShapeTag::ScaledIdentity.name(), "scaled-identity");
    assert_eq!(ShapeTag::Fixed2.name(), "fixed-2x2");
    assert_eq!(ShapeTag::Fixed3.name(), "fixed-3x3");
    assert_eq!(ShapeTag::Dense.name(), "dense");
    assert_eq!(ShapeTag::MAX_FIXED_DIM, 3);
}
