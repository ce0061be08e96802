//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks used by the kernels:
//! - The `FloatLinalg` bridge to nalgebra's dense routines
//! - Symmetrization of near-symmetric input
//! - Positive-definiteness enforcement strategies
//!
//! These are reusable mathematical building blocks with no dispatch logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Derived
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra bridge, SIMD column update).
pub mod linalg;

/// Symmetrization policies.
pub mod symmetry;

/// Positive-definiteness enforcement strategies.
pub mod enforcement;
