//! # FastCholesky — Structure-specialized Cholesky factorization for Rust
//!
//! A small, fast Cholesky library that picks a specialized kernel from the
//! shape of its input, and builds inverse, log-determinant and matrix square
//! root on top of a single factorization.
//!
//! ## What is a Cholesky factorization?
//!
//! Every symmetric positive-definite matrix `A` can be written uniquely as
//! `A = L * L^T`, where `L` is lower-triangular with a strictly positive
//! diagonal. Once `L` is known, many quantities become cheap:
//!
//! - `ln det A = 2 * sum(ln L_ii)`
//! - `A^-1 = L^-T * L^-1`
//! - `A x = b` by one forward and one backward substitution
//! - `L` itself is a matrix square root of `A`
//!
//! **Why shape dispatch?**
//!
//! General-purpose routines pay for loops, bounds and workspaces even when the
//! input is a scalar, a diagonal, or a 2x2 block. This crate classifies the
//! input first and routes it to the cheapest correct kernel:
//!
//! | Input                        | Kernel             |
//! |------------------------------|--------------------|
//! | 1x1 dense                    | `sqrt`             |
//! | [`Diagonal`](prelude::Diagonal) | elementwise `sqrt` |
//! | [`ScaledIdentity`](prelude::ScaledIdentity) | `sqrt` of the scale |
//! | 2x2 / 3x3 dense              | closed form        |
//! | anything else                | dense (nalgebra)   |
//!
//! ## Quick Start
//!
//! ```rust
//! use fastcholesky_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let a: nalgebra::DMatrix<f64> = dmatrix![
//!     4.0, 2.0, 0.4;
//!     2.0, 5.0, 1.0;
//!     0.4, 1.0, 3.0
//! ];
//!
//! // Safe path: `a` is left untouched.
//! let chol = factorize(&a)?;
//! assert!(chol.is_success());
//! assert_eq!(chol.shape(), ShapeTag::Fixed3);
//!
//! // Derived quantities reuse the factor.
//! let logdet = chol.log_determinant()?;
//! let inv = chol.inverse()?.into_dense();
//! assert!((&a * &inv - nalgebra::DMatrix::identity(3, 3)).norm() < 1e-12);
//! assert!((logdet - a.determinant().ln()).abs() < 1e-12);
//! # Result::<(), CholeskyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! The safe entry point distinguishes misuse from numerical failure:
//!
//! - A non-square matrix, or an asymmetric one when a tolerance is configured,
//!   is an `Err(CholeskyError)`.
//! - A symmetric matrix that is not positive definite is `Ok`, with
//!   `is_success() == false` and the failing pivot in `status()`.
//!
//! Derived operations never return NaN for such matrices; they fail with
//! `CholeskyError::NotPositiveDefinite`.
//!
//! ```rust
//! use fastcholesky_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let indefinite = dmatrix![1.0, 2.0; 2.0, 1.0];
//!
//! let chol = factorize(&indefinite)?;
//! assert!(!chol.is_success());
//! assert_eq!(chol.status(), FactorStatus::Failed { pivot: 1 });
//!
//! match log_determinant(&indefinite) {
//!     Err(CholeskyError::NotPositiveDefinite { pivot }) => assert_eq!(pivot, 1),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! # Result::<(), CholeskyError>::Ok(())
//! ```
//!
//! ## In-place factorization
//!
//! [`factorize_in_place`](prelude::factorize_in_place) overwrites the caller's
//! storage with `L` and allocates nothing. It does not check symmetry or
//! definiteness, and non-square storage is left untouched and reported as a
//! failed factorization. The returned view borrows the storage and reports the
//! status observed by the kernel:
//!
//! ```rust
//! use fastcholesky_rs::prelude::*;
//!
//! let mut d = Diagonal::new(vec![4.0, 9.0, 16.0]);
//! let view = factorize_in_place(&mut d);
//! assert!(view.is_success());
//! let logdet = view.log_determinant().unwrap_or(f64::NAN);
//! assert!((logdet - (4.0_f64 * 9.0 * 16.0).ln()).abs() < 1e-12);
//! ```
//!
//! ## Builder
//!
//! The free functions use the default configuration. For anything else,
//! configure a [`Factorizer`](prelude::Factorizer):
//!
//! ```rust
//! use fastcholesky_rs::prelude::*;
//! use nalgebra::dmatrix;
//!
//! let factorizer = Factorizer::new()
//!     .symmetrization(Average)                  // Use (A + A^T) / 2
//!     .enforcement(DiagonalShift(1e-9))         // Add a jitter to the diagonal
//!     .symmetry_tolerance(1e-8)                 // Reject visibly asymmetric input
//!     .build()?;
//!
//! let a = dmatrix![2.0, 1.0; 1.0, 2.0];
//! let (inv, logdet) = factorizer.inverse_and_log_determinant(&a)?;
//! assert!((logdet - 3.0_f64.ln()).abs() < 1e-8);
//! assert!((inv.get(0, 1) + 1.0 / 3.0).abs() < 1e-8);
//! # Result::<(), CholeskyError>::Ok(())
//! ```
//!
//! ### Parameters
//!
//! | Parameter              | Default | Meaning                                             |
//! |------------------------|---------|-----------------------------------------------------|
//! | `symmetrization`       | `Lower` | Which triangle defines the symmetric matrix         |
//! | `enforcement`          | `None`  | Pre-processing towards positive definiteness        |
//! | `symmetry_tolerance`   | off     | Maximum relative asymmetry accepted on dense input  |
//!
//! Setting a parameter twice is a `CholeskyError::DuplicateParameter`.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate builds without `std` (it needs `alloc`). Disable default
//! features and everything above stays available:
//!
//! ```toml
//! [dependencies]
//! fastcholesky-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade under the `fastcholesky` target:
//! kernel selection at `trace`, failed pivots and enforcement at `debug`.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic types.
//
// Contains the error type, the factorization status and the structured
// matrix storages (`Diagonal`, `ScaledIdentity`, `Structured`).
mod primitives;

// Layer 2: Math - pure numerical helpers.
//
// Contains the nalgebra bridge (`FloatLinalg`), symmetrization and
// positive-definiteness enforcement.
mod math;

// Layer 3: Algorithms - shape classification and kernels.
//
// Contains the `ShapeTag` classifier and the scalar, diagonal,
// fixed-size and dense kernels.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains input validation, the dispatch point and the result types.
mod engine;

// Layer 5: Derived - operations on a factor.
//
// Contains inverse, log-determinant, square root, solve and reconstruction.
mod derived;

// High-level fluent API.
//
// Provides the `Factorizer` builder and the free functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard FastCholesky prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use fastcholesky_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Cholesky, CholeskyError, CholeskyView, DenseKernelFn, Diagonal, EnforceFn, FactorStatus,
        FactorizationConfig, Factorizer, FactorizerBuilder, FloatLinalg, MatrixMut, MatrixRef,
        PositiveEnforcement::{self, DiagonalDominance, DiagonalShift},
        ScaledIdentity, ShapeTag, Structure, Structured,
        Symmetrization::{self, Average, Lower, Upper},
        SymmetricInput, factorize, factorize_in_place, inverse, inverse_and_log_determinant,
        log_determinant, shape_of, square_root,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal shape classifier and kernels.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal derived operations.
    pub mod derived {
        pub use crate::derived::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
