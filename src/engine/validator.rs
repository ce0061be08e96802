//! Input and configuration validation.
//!
//! ## Purpose
//!
//! This module provides the checks run at the boundary of the safe path and
//! when a `Factorizer` is built.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the symmetry
//!   scan only runs when a tolerance is configured.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not test positive-definiteness (the factorization does).
//! * This module does not symmetrize or otherwise correct inputs.

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::math::enforcement::PositiveEnforcement;
use crate::math::symmetry::find_asymmetry;
use crate::primitives::errors::CholeskyError;
use crate::primitives::structure::ShapeDescriptor;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for factorization input and configuration.
///
/// All methods return `Result<(), CholeskyError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Require a square matrix.
    #[inline]
    pub fn validate_square(descriptor: &ShapeDescriptor) -> Result<(), CholeskyError> {
        if !descriptor.is_square() {
            return Err(CholeskyError::NotSquare {
                rows: descriptor.rows,
                cols: descriptor.cols,
            });
        }
        Ok(())
    }

    /// Require every mirrored pair to agree within `tolerance` (relative).
    pub fn validate_symmetry<T: Float + Scalar>(
        matrix: &DMatrix<T>,
        tolerance: T,
    ) -> Result<(), CholeskyError> {
        match find_asymmetry(matrix, tolerance) {
            None => Ok(()),
            Some(asymmetry) => Err(CholeskyError::AsymmetricInput {
                row: asymmetry.row,
                col: asymmetry.col,
                deviation: asymmetry.deviation.to_f64().unwrap_or(f64::NAN),
                tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
            }),
        }
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the symmetry tolerance.
    pub fn validate_tolerance<T: Float>(tolerance: T) -> Result<(), CholeskyError> {
        if !tolerance.is_finite() || tolerance < T::zero() {
            return Err(CholeskyError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the parameter of an enforcement strategy.
    pub fn validate_enforcement<T: Float + Scalar>(
        enforcement: &PositiveEnforcement<T>,
    ) -> Result<(), CholeskyError> {
        match enforcement.shift() {
            Some(shift) if !shift.is_finite() || shift < T::zero() => Err(
                CholeskyError::InvalidShift(shift.to_f64().unwrap_or(f64::NAN)),
            ),
            _ => Ok(()),
        }
    }

    /// Reject a builder on which a parameter was set twice.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), CholeskyError> {
        if let Some(parameter) = duplicate_param {
            return Err(CholeskyError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
