//! Derived operations over a borrowed factor.
//!
//! ## Purpose
//!
//! Each function takes the lower factor and the status of the factorization
//! that produced it, so the owned [`Cholesky`](crate::engine::factorization::Cholesky)
//! and the borrowed [`CholeskyView`](crate::engine::factorization::CholeskyView)
//! share one implementation.
//!
//! ## Design notes
//!
//! * Structured factors give structured results: the inverse of a diagonal
//!   matrix stays diagonal, the inverse of `s * I` stays a scaled identity.
//! * Dense work (triangular inverse, products, substitution) goes through
//!   `FloatLinalg`, i.e. nalgebra.
//!
//! ## Invariants
//!
//! * Every operation except [`reconstruct`] checks the status first.
//! * The dense inverse is exactly symmetric.

// External dependencies
use nalgebra::DVector;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::CholeskyError;
use crate::primitives::status::FactorStatus;
use crate::primitives::structure::{Diagonal, MatrixRef, ScaledIdentity, Structured};

/// The factor `L` itself, copied out.
pub fn square_root<T: FloatLinalg>(
    factor: MatrixRef<'_, T>,
    status: FactorStatus,
) -> Result<Structured<T>, CholeskyError> {
    status.check()?;
    Ok(factor.to_structured())
}

/// `ln det A = 2 * sum(ln L_ii)`.
pub fn log_determinant<T: FloatLinalg>(
    factor: MatrixRef<'_, T>,
    status: FactorStatus,
) -> Result<T, CholeskyError> {
    status.check()?;
    let two = T::one() + T::one();

    let half_logdet = match factor {
        MatrixRef::ScaledIdentity(identity) if identity.dim == 0 => T::zero(),
        MatrixRef::ScaledIdentity(identity) => {
            let dim = T::from(identity.dim).unwrap_or_else(T::infinity);
            dim * identity.scale.ln()
        }
        _ => (0..factor.dim()).fold(T::zero(), |acc, i| acc + factor.diag(i).ln()),
    };

    Ok(two * half_logdet)
}

/// `A^-1 = L^-T * L^-1`.
pub fn inverse<T: FloatLinalg>(
    factor: MatrixRef<'_, T>,
    status: FactorStatus,
) -> Result<Structured<T>, CholeskyError> {
    status.check()?;

    match factor {
        MatrixRef::Dense(lower) => T::inverse_from_lower(lower)
            .map(Structured::Dense)
            .ok_or(CholeskyError::SingularFactor),
        MatrixRef::Diagonal(diagonal) => Ok(Structured::Diagonal(Diagonal::from_vector(
            diagonal.map(|l| (l * l).recip()),
        ))),
        MatrixRef::ScaledIdentity(identity) => Ok(Structured::ScaledIdentity(
            ScaledIdentity::new((identity.scale * identity.scale).recip(), identity.dim),
        )),
    }
}

/// Inverse and log-determinant from the same factor.
pub fn inverse_and_log_determinant<T: FloatLinalg>(
    factor: MatrixRef<'_, T>,
    status: FactorStatus,
) -> Result<(Structured<T>, T), CholeskyError> {
    let inv = inverse(factor, status)?;
    let logdet = log_determinant(factor, status)?;
    Ok((inv, logdet))
}

/// Solve `A x = b` by forward and backward substitution.
pub fn solve<T: FloatLinalg>(
    factor: MatrixRef<'_, T>,
    status: FactorStatus,
    rhs: &DVector<T>,
) -> Result<DVector<T>, CholeskyError> {
    status.check()?;
    let n = factor.dim();
    if rhs.len() != n {
        return Err(CholeskyError::DimensionMismatch {
            expected: n,
            got: rhs.len(),
        });
    }

    match factor {
        MatrixRef::Dense(lower) => {
            T::solve_lower(lower, rhs).ok_or(CholeskyError::SingularFactor)
        }
        MatrixRef::Diagonal(diagonal) => Ok(rhs.zip_map(diagonal, |b, l| b / (l * l))),
        MatrixRef::ScaledIdentity(identity) => {
            let a = identity.scale * identity.scale;
            Ok(rhs.map(|b| b / a))
        }
    }
}

/// `L * L^T`, in the storage of `L`.
///
/// Does not check the status, so a failed factor can be inspected.
pub fn reconstruct<T: FloatLinalg>(factor: MatrixRef<'_, T>) -> Structured<T> {
    match factor {
        MatrixRef::Dense(lower) => Structured::Dense(T::lower_gram(lower)),
        MatrixRef::Diagonal(diagonal) => {
            Structured::Diagonal(Diagonal::from_vector(diagonal.map(|l| l * l)))
        }
        MatrixRef::ScaledIdentity(identity) => Structured::ScaledIdentity(ScaledIdentity::new(
            identity.scale * identity.scale,
            identity.dim,
        )),
    }
}
