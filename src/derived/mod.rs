//! Layer 5: Derived
//!
//! # Purpose
//!
//! Quantities computed from one Cholesky factor, never by factorizing again:
//! - square root (`L` itself)
//! - log-determinant, `2 * sum(ln L_ii)`
//! - inverse, `L^-T * L^-1`
//! - inverse and log-determinant together
//! - linear solve and reconstruction `L * L^T`
//!
//! Every operation requires a successful factorization and returns
//! `CholeskyError::NotPositiveDefinite` otherwise, instead of NaN.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Derived ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Operations over a borrowed factor.
pub mod ops;

// Implementations on the engine's result types.
mod impls;
