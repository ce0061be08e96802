//! Shape classification.
//!
//! ## Purpose
//!
//! This module maps a [`ShapeDescriptor`] to exactly one [`ShapeTag`], which
//! names the kernel the engine runs.
//!
//! ## Design notes
//!
//! * **Structure only**: Classification reads the structural kind and the
//!   dimensions, never matrix values.
//! * **Closed set**: `ShapeTag` is exhaustive; adding a shape means adding a
//!   variant here and one arm in the executor's dispatch.
//!
//! ## Key concepts
//!
//! Priority order:
//! 1. Explicit structural kinds (`Diagonal`, `ScaledIdentity`).
//! 2. Small dense dimensions: 1 (`Scalar`), 2 (`Fixed2`), 3 (`Fixed3`).
//! 3. Everything else (`Dense`), including empty and non-square matrices.
//!
//! ## Invariants
//!
//! * Classification always succeeds and has no side effects.

// Internal dependencies
use crate::primitives::structure::{ShapeDescriptor, Structure};

/// Algorithm family selected for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeTag {
    /// 1x1 dense matrix.
    Scalar,

    /// Diagonal storage.
    Diagonal,

    /// Multiple of the identity.
    ScaledIdentity,

    /// 2x2 dense matrix, unrolled kernel.
    Fixed2,

    /// 3x3 dense matrix, unrolled kernel.
    Fixed3,

    /// Any other dense matrix.
    Dense,
}

impl ShapeTag {
    /// Largest dimension handled by an unrolled kernel.
    pub const MAX_FIXED_DIM: usize = 3;

    /// Short name, used in log messages.
    pub const fn name(&self) -> &'static str {
        match self {
            ShapeTag::Scalar => "scalar",
            ShapeTag::Diagonal => "diagonal",
            ShapeTag::ScaledIdentity => "scaled-identity",
            ShapeTag::Fixed2 => "fixed-2x2",
            ShapeTag::Fixed3 => "fixed-3x3",
            ShapeTag::Dense => "dense",
        }
    }
}

/// Select the kernel for a matrix from its descriptor.
pub const fn classify(descriptor: &ShapeDescriptor) -> ShapeTag {
    match descriptor.structure {
        Structure::Diagonal => ShapeTag::Diagonal,
        Structure::ScaledIdentity => ShapeTag::ScaledIdentity,
        Structure::Dense => {
            if !descriptor.is_square() {
                return ShapeTag::Dense;
            }
            match descriptor.rows {
                1 => ShapeTag::Scalar,
                2 => ShapeTag::Fixed2,
                3 => ShapeTag::Fixed3,
                _ => ShapeTag::Dense,
            }
        }
    }
}
