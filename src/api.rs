//! High-level API for Cholesky factorization.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for a
//! configured [`Factorizer`], and free functions that use the default
//! configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `f32` and `f64` through `FloatLinalg`.
//!
//! ## Key concepts
//!
//! * **Safe path**: `factorize` takes `&input`, never mutates it, and reports a
//!   non-positive-definite input through the result status.
//! * **Unchecked path**: `factorize_in_place` takes `&mut input` and turns it
//!   into the factor. It validates nothing; check `is_success` on the view.
//! * **Derived operations**: `inverse`, `log_determinant`,
//!   `inverse_and_log_determinant` and `square_root` factorize once and fail
//!   with `NotPositiveDefinite` rather than returning NaN.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`FactorizerBuilder`] via `Factorizer::new()`.
//! 2. Chain configuration methods (`.symmetrization()`, `.enforcement()`, ...).
//! 3. Call `.build()` to validate and obtain a [`Factorizer`].

// Internal dependencies
use crate::engine::executor::CholeskyExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::classifier::ShapeTag;
pub use crate::algorithms::kernels::DenseKernelFn;
pub use crate::engine::executor::FactorizationConfig;
pub use crate::engine::factorization::{Cholesky, CholeskyView};
pub use crate::math::enforcement::{EnforceFn, PositiveEnforcement};
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::symmetry::Symmetrization;
pub use crate::primitives::errors::CholeskyError;
pub use crate::primitives::status::FactorStatus;
pub use crate::primitives::structure::{
    Diagonal, MatrixMut, MatrixRef, ScaledIdentity, Structure, Structured, SymmetricInput,
};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a configured [`Factorizer`].
#[derive(Debug, Clone)]
pub struct FactorizerBuilder<T: FloatLinalg> {
    /// Which triangle (or average) of the input is factorized.
    pub symmetrization: Option<Symmetrization>,

    /// Pre-processing applied before dense factorization.
    pub enforcement: Option<PositiveEnforcement<T>>,

    /// Maximum relative asymmetry accepted by the safe path.
    pub symmetry_tolerance: Option<T>,

    // ++++++++++++++++++++++++++++++++++++++
    // +               DEV                  +
    // ++++++++++++++++++++++++++++++++++++++
    /// Custom dense kernel replacing the library routine.
    #[doc(hidden)]
    pub dense_kernel: Option<DenseKernelFn<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for FactorizerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> FactorizerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            symmetrization: None,
            enforcement: None,
            symmetry_tolerance: None,
            dense_kernel: None,
            duplicate_param: None,
        }
    }

    fn mark_duplicate(&mut self, already_set: bool, parameter: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(parameter);
        }
    }

    /// Choose which symmetric matrix the safe path factorizes (default `Lower`).
    pub fn symmetrization(mut self, symmetrization: Symmetrization) -> Self {
        self.mark_duplicate(self.symmetrization.is_some(), "symmetrization");
        self.symmetrization = Some(symmetrization);
        self
    }

    /// Set the enforcement strategy for dense input (default `None`).
    pub fn enforcement(mut self, enforcement: PositiveEnforcement<T>) -> Self {
        self.mark_duplicate(self.enforcement.is_some(), "enforcement");
        self.enforcement = Some(enforcement);
        self
    }

    /// Reject dense input whose relative asymmetry exceeds `tolerance`.
    pub fn symmetry_tolerance(mut self, tolerance: T) -> Self {
        self.mark_duplicate(self.symmetry_tolerance.is_some(), "symmetry_tolerance");
        self.symmetry_tolerance = Some(tolerance);
        self
    }

    /// Replace the library dense routine.
    #[doc(hidden)]
    pub fn dense_kernel(mut self, kernel: DenseKernelFn<T>) -> Self {
        self.mark_duplicate(self.dense_kernel.is_some(), "dense_kernel");
        self.dense_kernel = Some(kernel);
        self
    }

    /// Validate the configuration and build the factorizer.
    pub fn build(self) -> Result<Factorizer<T>, CholeskyError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        if let Some(tolerance) = self.symmetry_tolerance {
            Validator::validate_tolerance(tolerance)?;
        }
        let enforcement = self.enforcement.unwrap_or_default();
        Validator::validate_enforcement(&enforcement)?;

        Ok(Factorizer {
            config: FactorizationConfig {
                symmetrization: self.symmetrization.unwrap_or_default(),
                enforcement,
                symmetry_tolerance: self.symmetry_tolerance,
                dense_kernel: self.dense_kernel,
            },
        })
    }
}

// ============================================================================
// Factorizer
// ============================================================================

/// Configured Cholesky factorizer.
///
/// Stateless apart from its configuration; one instance can be shared across
/// threads and reused for any number of inputs.
#[derive(Debug, Clone, Copy)]
pub struct Factorizer<T: FloatLinalg> {
    config: FactorizationConfig<T>,
}

impl<T: FloatLinalg> Default for Factorizer<T> {
    fn default() -> Self {
        Self {
            config: FactorizationConfig::default(),
        }
    }
}

impl<T: FloatLinalg> Factorizer<T> {
    /// Start configuring a factorizer.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> FactorizerBuilder<T> {
        FactorizerBuilder::new()
    }

    /// Configuration in effect.
    pub fn config(&self) -> &FactorizationConfig<T> {
        &self.config
    }

    /// Safe factorization of `input`.
    ///
    /// Fails only for non-square input or, when configured, an asymmetric one.
    /// A matrix that is not positive definite yields `Ok` with a failed status.
    pub fn factorize<I>(&self, input: &I) -> Result<Cholesky<T>, CholeskyError>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        CholeskyExecutor::factorize(input.as_matrix_ref(), &self.config)
    }

    /// Unchecked in-place factorization of `input`.
    ///
    /// The configuration does not apply: no symmetrization, no enforcement, no
    /// validation. See [`factorize_in_place`].
    pub fn factorize_in_place<'a, I>(&self, input: &'a mut I) -> CholeskyView<'a, T>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        CholeskyExecutor::factorize_in_place(input.as_matrix_mut())
    }

    /// Inverse of `input` through its Cholesky factor.
    pub fn inverse<I>(&self, input: &I) -> Result<Structured<T>, CholeskyError>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        self.factorize(input)?.inverse()
    }

    /// Log-determinant of `input` through its Cholesky factor.
    pub fn log_determinant<I>(&self, input: &I) -> Result<T, CholeskyError>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        self.factorize(input)?.log_determinant()
    }

    /// Inverse and log-determinant of `input` from a single factorization.
    pub fn inverse_and_log_determinant<I>(
        &self,
        input: &I,
    ) -> Result<(Structured<T>, T), CholeskyError>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        self.factorize(input)?.inverse_and_log_determinant()
    }

    /// Lower Cholesky factor of `input`, a matrix square root.
    pub fn square_root<I>(&self, input: &I) -> Result<Structured<T>, CholeskyError>
    where
        I: SymmetricInput<T> + ?Sized,
    {
        self.factorize(input)?.into_square_root()
    }
}

// ============================================================================
// Free functions (default configuration)
// ============================================================================

/// Safe Cholesky factorization with the default configuration.
///
/// Reads the lower triangle, never mutates `input`, and reports a
/// non-positive-definite input through [`Cholesky::is_success`].
///
/// ```
/// use fastcholesky_rs::prelude::*;
/// use nalgebra::dmatrix;
///
/// let a = dmatrix![1.0, 0.5; 0.5, 1.0];
/// let chol = factorize(&a)?;
/// assert!(chol.is_success());
/// assert!((chol.l()[(1, 1)] - 0.75_f64.sqrt()).abs() < 1e-12);
/// # Result::<(), CholeskyError>::Ok(())
/// ```
pub fn factorize<T, I>(input: &I) -> Result<Cholesky<T>, CholeskyError>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    Factorizer::default().factorize(input)
}

/// Unchecked in-place Cholesky factorization.
///
/// Overwrites `input` with its lower factor (strictly upper part zeroed) and
/// returns a view over it. Nothing is allocated and symmetry is not checked; a
/// matrix that is not positive definite leaves unspecified contents behind,
/// which only [`CholeskyView::is_success`] reveals. Non-square storage is not
/// touched and reports `Failed { pivot: min(rows, cols) }`. The exclusive
/// borrow lasts as long as the view.
///
/// ```
/// use fastcholesky_rs::prelude::*;
/// use nalgebra::dmatrix;
///
/// let mut a = dmatrix![4.0, 2.0; 2.0, 5.0];
/// let view = factorize_in_place(&mut a);
/// assert!(view.is_success());
/// assert_eq!(a, dmatrix![2.0, 0.0; 1.0, 2.0]);
/// ```
pub fn factorize_in_place<T, I>(input: &mut I) -> CholeskyView<'_, T>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    CholeskyExecutor::factorize_in_place(input.as_matrix_mut())
}

/// Inverse of `input` through its Cholesky factor.
pub fn inverse<T, I>(input: &I) -> Result<Structured<T>, CholeskyError>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    Factorizer::default().inverse(input)
}

/// Log-determinant of `input` through its Cholesky factor.
///
/// ```
/// use fastcholesky_rs::prelude::*;
/// use nalgebra::dmatrix;
///
/// let logdet = log_determinant(&dmatrix![1.0, 0.5; 0.5, 1.0])?;
/// assert!((logdet - 0.75_f64.ln()).abs() < 1e-12);
///
/// let err = log_determinant(&dmatrix![1.0, 2.0; 2.0, 1.0]).unwrap_err();
/// assert_eq!(err, CholeskyError::NotPositiveDefinite { pivot: 1 });
/// # Result::<(), CholeskyError>::Ok(())
/// ```
pub fn log_determinant<T, I>(input: &I) -> Result<T, CholeskyError>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    Factorizer::default().log_determinant(input)
}

/// Inverse and log-determinant of `input` from a single factorization.
pub fn inverse_and_log_determinant<T, I>(input: &I) -> Result<(Structured<T>, T), CholeskyError>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    Factorizer::default().inverse_and_log_determinant(input)
}

/// Lower Cholesky factor of `input`.
pub fn square_root<T, I>(input: &I) -> Result<Structured<T>, CholeskyError>
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    Factorizer::default().square_root(input)
}

/// Name of an input's kernel, without factorizing it.
pub fn shape_of<T, I>(input: &I) -> ShapeTag
where
    T: FloatLinalg,
    I: SymmetricInput<T> + ?Sized,
{
    crate::algorithms::classifier::classify(&input.as_matrix_ref().descriptor())
}
