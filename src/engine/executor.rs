//! Factorization engine.
//!
//! ## Purpose
//!
//! This module is the single dispatch point between inputs and kernels. It
//! validates the input, asks the classifier for a [`ShapeTag`], runs the
//! matching kernel and packages the result.
//!
//! ## Design notes
//!
//! * **Safe path** ([`CholeskyExecutor::factorize`]): read-only input, private
//!   copy, symmetrization, enforcement, kernel, then a diagonal scan to set the
//!   status. Only shape and symmetry-tolerance violations are errors.
//! * **Unchecked path** ([`CholeskyExecutor::factorize_in_place`]): exclusive
//!   borrow of the caller's storage, no validation, no copy, no scan. The
//!   status is whatever the kernel observed while running.
//! * Dispatch is one `match` over `(ShapeTag, storage)`; structured storages
//!   keep their own kernels, dense storage is routed by size.
//!
//! ## Invariants
//!
//! * The safe path never mutates the caller's matrix.
//! * The unchecked path never allocates.
//! * Non-square storage is never reported as a success.
//!
//! ## Non-goals
//!
//! * This module does not compute derived quantities (handled by `derived`).

// External dependencies
use nalgebra::DMatrix;

// Internal dependencies
use crate::algorithms::classifier::{ShapeTag, classify};
use crate::algorithms::kernels::{
    DenseKernelFn, factorize_2x2_in_place, factorize_3x3_in_place, factorize_dense,
    factorize_dense_in_place, factorize_diagonal, factorize_diagonal_in_place, factorize_scalar,
    factorize_scalar_in_place, factorize_scaled_identity, factorize_scaled_identity_in_place,
};
use crate::engine::factorization::{Cholesky, CholeskyView};
use crate::engine::validator::Validator;
use crate::math::enforcement::PositiveEnforcement;
use crate::math::linalg::FloatLinalg;
use crate::math::symmetry::Symmetrization;
use crate::primitives::errors::CholeskyError;
use crate::primitives::status::FactorStatus;
use crate::primitives::structure::{Diagonal, MatrixMut, MatrixRef, Structured, SymmetricInput};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration of the safe factorization path.
#[derive(Debug, Clone, Copy)]
pub struct FactorizationConfig<T: FloatLinalg> {
    /// Which symmetric matrix is factorized.
    pub symmetrization: Symmetrization,

    /// Pre-processing applied to dense input before factorization.
    pub enforcement: PositiveEnforcement<T>,

    /// Reject dense input whose relative asymmetry exceeds this value.
    pub symmetry_tolerance: Option<T>,

    /// Replacement for the library dense routine.
    #[doc(hidden)]
    pub dense_kernel: Option<DenseKernelFn<T>>,
}

impl<T: FloatLinalg> Default for FactorizationConfig<T> {
    fn default() -> Self {
        Self {
            symmetrization: Symmetrization::default(),
            enforcement: PositiveEnforcement::None,
            symmetry_tolerance: None,
            dense_kernel: None,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless dispatcher for both entry points.
pub struct CholeskyExecutor;

impl CholeskyExecutor {
    /// Safe factorization: validates, copies, and reports failure in the status.
    pub fn factorize<T: FloatLinalg>(
        input: MatrixRef<'_, T>,
        config: &FactorizationConfig<T>,
    ) -> Result<Cholesky<T>, CholeskyError> {
        let descriptor = input.descriptor();
        Validator::validate_square(&descriptor)?;
        if let (Some(tolerance), MatrixRef::Dense(matrix)) = (config.symmetry_tolerance, input) {
            Validator::validate_symmetry(matrix, tolerance)?;
        }

        let shape = classify(&descriptor);
        log::trace!(
            target: "fastcholesky",
            "factorizing {}x{} input with {} kernel",
            descriptor.rows,
            descriptor.cols,
            shape.name()
        );

        let factor = match (shape, input) {
            (ShapeTag::Diagonal, MatrixRef::Diagonal(diagonal)) => {
                Structured::Diagonal(Diagonal::from_vector(factorize_diagonal(diagonal)))
            }
            (ShapeTag::ScaledIdentity, MatrixRef::ScaledIdentity(identity)) => {
                Structured::ScaledIdentity(factorize_scaled_identity(&identity))
            }
            (ShapeTag::Scalar, MatrixRef::Dense(matrix)) => {
                let mut copy = matrix.clone();
                config.enforcement.enforce(&mut copy);
                copy[(0, 0)] = factorize_scalar(copy[(0, 0)]);
                Structured::Dense(copy)
            }
            (ShapeTag::Fixed2, MatrixRef::Dense(matrix)) => {
                let mut copy = Self::prepare(matrix, config);
                factorize_2x2_in_place(&mut copy);
                Structured::Dense(copy)
            }
            (ShapeTag::Fixed3, MatrixRef::Dense(matrix)) => {
                let mut copy = Self::prepare(matrix, config);
                factorize_3x3_in_place(&mut copy);
                Structured::Dense(copy)
            }
            (_, other) => {
                let mut copy = other.to_structured().into_dense();
                config.symmetrization.apply(&mut copy);
                Structured::Dense(factorize_dense(
                    copy,
                    &config.enforcement,
                    config.dense_kernel,
                ))
            }
        };

        let factor_ref = factor.as_matrix_ref();
        let status = FactorStatus::from_pivots((0..factor_ref.dim()).map(|i| factor_ref.diag(i)));
        if let FactorStatus::Failed { pivot } = status {
            log::debug!(
                target: "fastcholesky",
                "{} kernel: pivot {} of {} is not strictly positive",
                shape.name(),
                pivot,
                descriptor.rows
            );
        }

        Ok(Cholesky::new(factor, status, shape))
    }

    /// Unchecked factorization: overwrites the caller's storage with the factor.
    ///
    /// Non-square dense storage is left as is and reported as failed at
    /// `min(rows, cols)`.
    pub fn factorize_in_place<T: FloatLinalg>(input: MatrixMut<'_, T>) -> CholeskyView<'_, T> {
        let shape = classify(&input.descriptor());
        let mut input = input;

        let status = match (shape, &mut input) {
            (_, MatrixMut::Dense(matrix)) if !matrix.is_square() => {
                let pivot = matrix.nrows().min(matrix.ncols());
                log::debug!(
                    target: "fastcholesky",
                    "in-place input is {}x{}, not square",
                    matrix.nrows(),
                    matrix.ncols()
                );
                FactorStatus::Failed { pivot }
            }
            (_, MatrixMut::Scalar(value)) => factorize_scalar_in_place(*value),
            (_, MatrixMut::Diagonal(diagonal)) => factorize_diagonal_in_place(diagonal),
            (_, MatrixMut::ScaledIdentity(identity)) => {
                factorize_scaled_identity_in_place(identity)
            }
            (ShapeTag::Scalar, MatrixMut::Dense(matrix)) => {
                factorize_scalar_in_place(&mut matrix[(0, 0)])
            }
            (ShapeTag::Fixed2, MatrixMut::Dense(matrix)) => factorize_2x2_in_place(matrix),
            (ShapeTag::Fixed3, MatrixMut::Dense(matrix)) => factorize_3x3_in_place(matrix),
            (_, MatrixMut::Dense(matrix)) => factorize_dense_in_place(matrix),
        };

        CholeskyView::new(input.into_ref(), status, shape)
    }

    /// Private symmetrized, enforced copy of a small dense input.
    fn prepare<T: FloatLinalg>(matrix: &DMatrix<T>, config: &FactorizationConfig<T>) -> DMatrix<T> {
        let mut copy = matrix.clone();
        config.symmetrization.apply(&mut copy);
        config.enforcement.enforce(&mut copy);
        copy
    }
}
