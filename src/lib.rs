//! # densemat
//!
//! Dense runtime-dimensioned real matrices: construction, bounds-checked
//! element access, the arithmetic operators, and human-readable text I/O.
//! Storage is a single contiguous row-major `Vec`, deep-copied on clone.
//!
//! ## Quick start
//!
//! ```
//! use densemat::Matrix;
//!
//! let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
//! let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
//!
//! let sum = &a + &b;
//! assert_eq!(sum[(1, 1)], 12.0);
//!
//! let product = &a * &b;
//! assert_eq!(product[(0, 0)], 19.0);
//!
//! let doubled = 2.0 * &a;
//! assert_eq!(doubled, &a * 2.0);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — [`Matrix<T>`] with runtime dimensions and row-major
//!   `Vec<T>` storage. Elementwise add/subtract, matrix and scalar
//!   multiplication (checked methods plus operator sugar), `Display`
//!   output in fixed-width columns, and whitespace-delimited input via
//!   [`Matrix::read_from`].
//!
//! - [`traits`] — the [`Scalar`] element trait
//!   (`Copy + PartialEq + Debug + Zero + One + Num`), blanket-implemented
//!   for floats and integers.
//!
//! ## Error handling
//!
//! Shape violations and out-of-bounds access surface as [`MatrixError`]
//! from the checked methods (`checked_add`, `checked_mul`, `at`, ...);
//! the operator and indexing sugar panics with the same message. Stream
//! input reports [`ReadError`] and leaves partially-read contents in
//! place for the caller to discard.
//!
//! ## Threading
//!
//! A `Matrix` exclusively owns its buffer and carries no internal
//! synchronization; share one across threads for mutation only under
//! external locking.

pub mod matrix;
pub mod traits;

pub use matrix::{Matrix, MatrixError, ReadError};
pub use traits::Scalar;
