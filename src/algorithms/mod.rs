//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the Shape Classifier and the Specialized Factorizers:
//! - `classifier`: structure and size to `ShapeTag`
//! - `kernels`: one Cholesky algorithm per `ShapeTag`
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
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Shape classification.
pub mod classifier;

/// Specialized factorization kernels.
pub mod kernels;
