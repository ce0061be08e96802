//! Specialized Factorizers
//!
//! ## Purpose
//!
//! One Cholesky kernel per shape class: scalar, diagonal, scaled identity,
//! unrolled 2x2 / 3x3, and generic dense (library routine or in-place
//! left-looking recurrence).

/// Generic dense kernels.
pub mod dense;

/// Unrolled small dense kernels.
pub mod fixed;

/// Scalar, diagonal and scaled-identity kernels.
pub mod scalar;

pub use dense::{DenseKernelFn, factorize_dense, factorize_dense_in_place};
pub use fixed::{factorize_2x2_in_place, factorize_3x3_in_place};
pub use scalar::{
    factorize_diagonal, factorize_diagonal_in_place, factorize_scalar, factorize_scalar_in_place,
    factorize_scaled_identity, factorize_scaled_identity_in_place,
};
