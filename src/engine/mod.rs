//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer is the Factorization Engine:
//! - `validator`: boundary checks for input and configuration
//! - `factorization`: result types (`Cholesky`, `CholeskyView`)
//! - `executor`: dispatch of the safe and in-place entry points
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Derived
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Factorization dispatch.
pub mod executor;

/// Factorization result types.
pub mod factorization;

/// Input and configuration validation.
pub mod validator;
