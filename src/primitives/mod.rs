//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types shared by every other layer:
//! - The crate error type
//! - The factorization status flag
//! - Structured matrix storage (`Diagonal`, `ScaledIdentity`, `Structured`)
//! - Borrowed views and the `SymmetricInput` trait
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types.
pub mod errors;

/// Factorization status and pivot test.
pub mod status;

/// Structured matrix storage and views.
pub mod structure;
