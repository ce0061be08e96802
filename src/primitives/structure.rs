//! Structured matrix storage and borrowed views.
//!
//! ## Purpose
//!
//! This module defines the matrix types accepted by the factorization engine
//! and returned by the derived operations:
//!
//! * `DMatrix<T>` (nalgebra) for general dense input.
//! * [`Diagonal`] for diagonal matrices, stored as their diagonal only.
//! * [`ScaledIdentity`] for `scale * I`, stored as two values.
//! * [`Structured`] as the owned sum of the three.
//!
//! ## Design notes
//!
//! * **Closed set**: Every storage kind is a variant of [`Structure`]. The
//!   engine never inspects Rust types at runtime, only the descriptor.
//! * **Views**: [`MatrixRef`] and [`MatrixMut`] let one dispatch point handle
//!   every input type without copying. `MatrixMut` is the only way the engine
//!   mutates caller storage.
//! * **Column-major**: Dense storage follows nalgebra's column-major layout.
//!
//! ## Key concepts
//!
//! * **SymmetricInput**: Trait implemented by every accepted input type.
//! * **ShapeDescriptor**: Structural kind plus dimensions; the only input of the
//!   shape classifier.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, DVector, Scalar};
use num_traits::Float;

// ============================================================================
// Structure and Descriptor
// ============================================================================

/// Structural kind of a matrix, independent of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Structure {
    /// General dense storage.
    Dense,

    /// Diagonal storage (off-diagonal entries are implicitly zero).
    Diagonal,

    /// A multiple of the identity.
    ScaledIdentity,
}

/// Static description of a matrix used to select an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeDescriptor {
    /// Structural kind.
    pub structure: Structure,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl ShapeDescriptor {
    /// Descriptor of a square matrix with the given structure.
    #[inline]
    pub const fn square(structure: Structure, dim: usize) -> Self {
        Self {
            structure,
            rows: dim,
            cols: dim,
        }
    }

    /// Whether the described matrix is square.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}

// ============================================================================
// Diagonal
// ============================================================================

/// Diagonal matrix stored as its diagonal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagonal<T: Scalar> {
    diagonal: DVector<T>,
}

impl<T: Float + Scalar> Diagonal<T> {
    /// Create a diagonal matrix from its diagonal entries.
    pub fn new(entries: Vec<T>) -> Self {
        Self {
            diagonal: DVector::from_vec(entries),
        }
    }

    /// Create a diagonal matrix from an nalgebra vector.
    pub fn from_vector(diagonal: DVector<T>) -> Self {
        Self { diagonal }
    }

    /// Dimension of the (square) matrix.
    #[inline]
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Diagonal entries.
    #[inline]
    pub fn diagonal(&self) -> &DVector<T> {
        &self.diagonal
    }

    /// Mutable diagonal entries.
    #[inline]
    pub fn diagonal_mut(&mut self) -> &mut DVector<T> {
        &mut self.diagonal
    }

    /// Consume into the diagonal vector.
    pub fn into_vector(self) -> DVector<T> {
        self.diagonal
    }

    /// Expand into dense storage.
    pub fn to_dense(&self) -> DMatrix<T> {
        DMatrix::from_diagonal(&self.diagonal)
    }
}

// ============================================================================
// Scaled Identity
// ============================================================================

/// The matrix `scale * I` of dimension `dim`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledIdentity<T> {
    /// Value of every diagonal entry.
    pub scale: T,
    /// Dimension of the matrix.
    pub dim: usize,
}

impl<T: Float + Scalar> ScaledIdentity<T> {
    /// Create `scale * I_dim`.
    pub const fn new(scale: T, dim: usize) -> Self {
        Self { scale, dim }
    }

    /// The identity of dimension `dim`.
    pub fn identity(dim: usize) -> Self {
        Self::new(T::one(), dim)
    }

    /// Expand into dense storage.
    pub fn to_dense(&self) -> DMatrix<T> {
        DMatrix::from_diagonal_element(self.dim, self.dim, self.scale)
    }
}

// ============================================================================
// Structured (owned)
// ============================================================================

/// Owned matrix in one of the supported storages.
///
/// This is the type of every factor and of every matrix-valued derived result.
/// A dense factor is lower-triangular with an explicitly zeroed upper part.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Structured<T: Scalar> {
    /// General dense matrix.
    Dense(DMatrix<T>),

    /// Diagonal matrix.
    Diagonal(Diagonal<T>),

    /// Multiple of the identity.
    ScaledIdentity(ScaledIdentity<T>),
}

impl<T: Float + Scalar> Structured<T> {
    /// Structural kind of this matrix.
    pub fn structure(&self) -> Structure {
        match self {
            Structured::Dense(_) => Structure::Dense,
            Structured::Diagonal(_) => Structure::Diagonal,
            Structured::ScaledIdentity(_) => Structure::ScaledIdentity,
        }
    }

    /// Number of rows (equal to the number of columns for non-dense storage).
    pub fn nrows(&self) -> usize {
        match self {
            Structured::Dense(m) => m.nrows(),
            Structured::Diagonal(d) => d.dim(),
            Structured::ScaledIdentity(s) => s.dim,
        }
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        match self {
            Structured::Dense(m) => m.ncols(),
            Structured::Diagonal(d) => d.dim(),
            Structured::ScaledIdentity(s) => s.dim,
        }
    }

    /// Entry `(i, j)`, regardless of storage.
    pub fn get(&self, i: usize, j: usize) -> T {
        self.as_matrix_ref().get(i, j)
    }

    /// Copy into dense storage.
    pub fn to_dense(&self) -> DMatrix<T> {
        match self {
            Structured::Dense(m) => m.clone(),
            Structured::Diagonal(d) => d.to_dense(),
            Structured::ScaledIdentity(s) => s.to_dense(),
        }
    }

    /// Convert into dense storage, reusing the buffer when already dense.
    pub fn into_dense(self) -> DMatrix<T> {
        match self {
            Structured::Dense(m) => m,
            other => other.to_dense(),
        }
    }

    /// Borrow the dense storage, if this matrix is dense.
    pub fn as_dense(&self) -> Option<&DMatrix<T>> {
        match self {
            Structured::Dense(m) => Some(m),
            _ => None,
        }
    }
}

impl<T: Scalar> From<DMatrix<T>> for Structured<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        Structured::Dense(matrix)
    }
}

impl<T: Scalar> From<Diagonal<T>> for Structured<T> {
    fn from(diagonal: Diagonal<T>) -> Self {
        Structured::Diagonal(diagonal)
    }
}

impl<T: Scalar> From<ScaledIdentity<T>> for Structured<T> {
    fn from(identity: ScaledIdentity<T>) -> Self {
        Structured::ScaledIdentity(identity)
    }
}

// ============================================================================
// Borrowed Views
// ============================================================================

/// Read-only view of a matrix in any supported storage.
#[derive(Debug, Clone, Copy)]
pub enum MatrixRef<'a, T: Scalar> {
    /// Dense storage.
    Dense(&'a DMatrix<T>),

    /// Diagonal entries of a diagonal matrix.
    Diagonal(&'a DVector<T>),

    /// Multiple of the identity.
    ScaledIdentity(ScaledIdentity<T>),
}

impl<T: Float + Scalar> MatrixRef<'_, T> {
    /// Structure and dimensions of the viewed matrix.
    pub fn descriptor(&self) -> ShapeDescriptor {
        match self {
            MatrixRef::Dense(m) => ShapeDescriptor {
                structure: Structure::Dense,
                rows: m.nrows(),
                cols: m.ncols(),
            },
            MatrixRef::Diagonal(d) => ShapeDescriptor::square(Structure::Diagonal, d.len()),
            MatrixRef::ScaledIdentity(s) => {
                ShapeDescriptor::square(Structure::ScaledIdentity, s.dim)
            }
        }
    }

    /// Dimension along the diagonal.
    pub fn dim(&self) -> usize {
        match self {
            MatrixRef::Dense(m) => m.nrows().min(m.ncols()),
            MatrixRef::Diagonal(d) => d.len(),
            MatrixRef::ScaledIdentity(s) => s.dim,
        }
    }

    /// Diagonal entry `i`.
    #[inline]
    pub fn diag(&self, i: usize) -> T {
        match self {
            MatrixRef::Dense(m) => m[(i, i)],
            MatrixRef::Diagonal(d) => d[i],
            MatrixRef::ScaledIdentity(s) => s.scale,
        }
    }

    /// Entry `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> T {
        match self {
            MatrixRef::Dense(m) => m[(i, j)],
            MatrixRef::Diagonal(d) if i == j => d[i],
            MatrixRef::ScaledIdentity(s) if i == j => s.scale,
            _ => T::zero(),
        }
    }

    /// Copy into owned storage of the same structure.
    pub fn to_structured(&self) -> Structured<T> {
        match *self {
            MatrixRef::Dense(m) => Structured::Dense(m.clone()),
            MatrixRef::Diagonal(d) => Structured::Diagonal(Diagonal::from_vector(d.clone())),
            MatrixRef::ScaledIdentity(s) => Structured::ScaledIdentity(s),
        }
    }
}

/// Mutable view of a matrix in any supported storage.
#[derive(Debug)]
pub enum MatrixMut<'a, T: Scalar> {
    /// Dense storage.
    Dense(&'a mut DMatrix<T>),

    /// Diagonal entries of a diagonal matrix.
    Diagonal(&'a mut DVector<T>),

    /// Multiple of the identity.
    ScaledIdentity(&'a mut ScaledIdentity<T>),

    /// A bare number, i.e. a 1x1 matrix.
    Scalar(&'a mut T),
}

impl<'a, T: Float + Scalar> MatrixMut<'a, T> {
    /// Structure and dimensions of the viewed matrix.
    pub fn descriptor(&self) -> ShapeDescriptor {
        match self {
            MatrixMut::Dense(m) => ShapeDescriptor {
                structure: Structure::Dense,
                rows: m.nrows(),
                cols: m.ncols(),
            },
            MatrixMut::Diagonal(d) => ShapeDescriptor::square(Structure::Diagonal, d.len()),
            MatrixMut::ScaledIdentity(s) => {
                ShapeDescriptor::square(Structure::ScaledIdentity, s.dim)
            }
            MatrixMut::Scalar(_) => ShapeDescriptor::square(Structure::ScaledIdentity, 1),
        }
    }

    /// Give up mutable access, keeping the borrow for `'a`.
    pub fn into_ref(self) -> MatrixRef<'a, T> {
        match self {
            MatrixMut::Dense(m) => MatrixRef::Dense(m),
            MatrixMut::Diagonal(d) => MatrixRef::Diagonal(d),
            MatrixMut::ScaledIdentity(s) => MatrixRef::ScaledIdentity(*s),
            MatrixMut::Scalar(value) => MatrixRef::ScaledIdentity(ScaledIdentity::new(*value, 1)),
        }
    }
}

// ============================================================================
// SymmetricInput Trait
// ============================================================================

/// A matrix that can be handed to the factorization engine.
pub trait SymmetricInput<T: Scalar> {
    /// Borrow as a read-only view.
    fn as_matrix_ref(&self) -> MatrixRef<'_, T>;

    /// Borrow as a mutable view.
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T>;
}

impl<T: Scalar> SymmetricInput<T> for DMatrix<T> {
    #[inline]
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        MatrixRef::Dense(self)
    }

    #[inline]
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        MatrixMut::Dense(self)
    }
}

impl<T: Scalar> SymmetricInput<T> for Diagonal<T> {
    #[inline]
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        MatrixRef::Diagonal(&self.diagonal)
    }

    #[inline]
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        MatrixMut::Diagonal(&mut self.diagonal)
    }
}

impl<T: Scalar + Copy> SymmetricInput<T> for ScaledIdentity<T> {
    #[inline]
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        MatrixRef::ScaledIdentity(*self)
    }

    #[inline]
    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        MatrixMut::ScaledIdentity(self)
    }
}

impl<T: Scalar + Copy> SymmetricInput<T> for Structured<T> {
    fn as_matrix_ref(&self) -> MatrixRef<'_, T> {
        match self {
            Structured::Dense(m) => m.as_matrix_ref(),
            Structured::Diagonal(d) => d.as_matrix_ref(),
            Structured::ScaledIdentity(s) => s.as_matrix_ref(),
        }
    }

    fn as_matrix_mut(&mut self) -> MatrixMut<'_, T> {
        match self {
            Structured::Dense(m) => m.as_matrix_mut(),
            Structured::Diagonal(d) => d.as_matrix_mut(),
            Structured::ScaledIdentity(s) => s.as_matrix_mut(),
        }
    }
}

// A bare number is the 1x1 scaled identity.
macro_rules! impl_symmetric_input_for_float {
    ($($t:ty),*) => {
        $(
            impl SymmetricInput<$t> for $t {
                #[inline]
                fn as_matrix_ref(&self) -> MatrixRef<'_, $t> {
                    MatrixRef::ScaledIdentity(ScaledIdentity::new(*self, 1))
                }

                #[inline]
                fn as_matrix_mut(&mut self) -> MatrixMut<'_, $t> {
                    MatrixMut::Scalar(self)
                }
            }
        )*
    };
}

impl_symmetric_input_for_float!(f32, f64);
