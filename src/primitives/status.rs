//! Factorization status.
//!
//! ## Purpose
//!
//! This module defines the two-valued outcome carried by every factorization
//! result, and the pivot test used to decide it.
//!
//! ## Key concepts
//!
//! * **Valid pivot**: strictly positive and finite. NaN is never valid.
//! * **Failed pivot**: index of the first diagonal entry of the factor that is
//!   not a valid pivot.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CholeskyError;

/// Whether a value may appear on the diagonal of a valid Cholesky factor.
#[inline]
pub fn is_valid_pivot<T: Float>(pivot: T) -> bool {
    pivot > T::zero() && pivot.is_finite()
}

/// Outcome of a factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FactorStatus {
    /// Every diagonal entry of the factor is strictly positive and finite.
    #[default]
    Success,

    /// The factor is not usable; `pivot` is the first offending diagonal index.
    Failed {
        /// Index of the first failing pivot
        pivot: usize,
    },
}

impl FactorStatus {
    /// Status from a sequence of pivots (or diagonal entries of the factor).
    pub fn from_pivots<T, I>(pivots: I) -> Self
    where
        T: Float,
        I: IntoIterator<Item = T>,
    {
        pivots
            .into_iter()
            .position(|p| !is_valid_pivot(p))
            .map_or(FactorStatus::Success, |pivot| FactorStatus::Failed { pivot })
    }

    /// Whether the factorization succeeded.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, FactorStatus::Success)
    }

    /// Index of the failing pivot, if any.
    #[inline]
    pub const fn failed_pivot(&self) -> Option<usize> {
        match self {
            FactorStatus::Success => None,
            FactorStatus::Failed { pivot } => Some(*pivot),
        }
    }

    /// Escalate a failure into [`CholeskyError::NotPositiveDefinite`].
    #[inline]
    pub fn check(&self) -> Result<(), CholeskyError> {
        match *self {
            FactorStatus::Success => Ok(()),
            FactorStatus::Failed { pivot } => Err(CholeskyError::NotPositiveDefinite { pivot }),
        }
    }
}
