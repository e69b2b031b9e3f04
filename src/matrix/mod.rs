//! Runtime-dimensioned dense matrix with row-major `Vec` storage.
//!
//! [`Matrix<T>`] is a plain value type: deep-copied on clone, exclusively
//! owning its buffer, with dimensions fixed between full replacements.
//! Arithmetic lives in checked methods ([`Matrix::checked_add`],
//! [`Matrix::checked_mul`], ...) with operator sugar layered on top, and
//! text I/O is `Display` plus [`Matrix::read_from`].

mod io;
mod ops;

pub use io::ReadError;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

/// Errors from matrix element access and checked arithmetic.
///
/// Returned by [`Matrix::at`] / [`Matrix::at_mut`] and the checked
/// arithmetic methods (`checked_add`, `checked_sub`, `checked_mul`).
///
/// # Example
///
/// ```
/// use densemat::{Matrix, MatrixError};
///
/// let m = Matrix::<f64>::zeros(3, 3);
/// assert_eq!(
///     m.at(5, 0).unwrap_err(),
///     MatrixError::OutOfBounds { index: (5, 0), shape: (3, 3) },
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Elementwise operands differ in shape.
    ShapeMismatch {
        /// Left operand `(rows, cols)`.
        lhs: (usize, usize),
        /// Right operand `(rows, cols)`.
        rhs: (usize, usize),
    },
    /// Matrix product with `lhs.ncols() != rhs.nrows()`.
    InnerDimMismatch {
        /// Left operand `(rows, cols)`.
        lhs: (usize, usize),
        /// Right operand `(rows, cols)`.
        rhs: (usize, usize),
    },
    /// Element access outside `[0, nrows) x [0, ncols)`.
    OutOfBounds {
        /// Requested `(row, col)`.
        index: (usize, usize),
        /// Matrix `(rows, cols)`.
        shape: (usize, usize),
    },
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::ShapeMismatch { lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::InnerDimMismatch { lhs, rhs } => write!(
                f,
                "dimension mismatch: cannot multiply {}x{} by {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::OutOfBounds { index, shape } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                index.0, index.1, shape.0, shape.1
            ),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage: the element at `(row, col)` lives at
/// `data[row * ncols + col]`. Dimensions are fixed at construction; the
/// only way to change them is to replace the whole value (assignment or
/// [`Clone::clone_from`]), which swaps dimensions and contents together.
///
/// Not internally synchronized: sharing a matrix across threads for
/// mutation requires external locking.
///
/// # Examples
///
/// ```
/// use densemat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix with every element zero.
    ///
    /// `0 x n` and `m x 0` matrices are valid and hold no elements.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::OutOfBounds {
                index: (row, col),
                shape: (self.nrows, self.ncols),
            });
        }
        Ok(row * self.ncols + col)
    }

    /// Bounds-checked element access.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(*m.at(0, 1).unwrap(), 2.0);
    /// assert!(m.at(2, 0).is_err());
    /// ```
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let idx = self.check_bounds(row, col)?;
        Ok(&self.data[idx])
    }

    /// Bounds-checked mutable element access.
    ///
    /// Resolves to the same element as [`Matrix::at`] for the same indices.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// *m.at_mut(0, 1).unwrap() = 5.0;
    /// assert_eq!(m[(0, 1)], 5.0);
    /// ```
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let idx = self.check_bounds(row, col)?;
        Ok(&mut self.data[idx])
    }

    /// Row `i` as a contiguous slice.
    ///
    /// Panics if `i >= nrows()`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of bounds for {} rows", i, self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// The whole buffer in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

// ── Copy / assignment ───────────────────────────────────────────────

impl<T: Clone> Clone for Matrix<T> {
    /// Deep copy: the new matrix owns an independent buffer.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Replace dimensions and contents together, reusing the existing
    /// allocation when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.nrows = source.nrows;
        self.ncols = source.ncols;
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics with a descriptive message when the index is out of bounds.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.at(row, col) {
            Ok(x) => x,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.check_bounds(row, col) {
            Ok(idx) => &mut self.data[idx],
            Err(e) => panic!("{}", e),
        }
    }
}
