use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::{Matrix, MatrixError};

// ── Checked arithmetic ──────────────────────────────────────────────
//
// These are the authoritative operations; the operator impls below are
// sugar that panics with the same message on a shape violation.

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::ShapeMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }

    /// Elementwise sum. Neither operand is mutated.
    ///
    /// Fails with [`MatrixError::ShapeMismatch`] unless both operands have
    /// identical dimensions.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    /// let c = a.checked_add(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 6.0);
    /// assert!(a.checked_add(&Matrix::<f64>::zeros(3, 3)).is_err());
    /// ```
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Elementwise difference. Same shape rule as [`Matrix::checked_add`].
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs)?;
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Matrix product: `(M x N) * (N x P) -> (M x P)`.
    ///
    /// Fails with [`MatrixError::InnerDimMismatch`] unless
    /// `self.ncols() == rhs.nrows()`. Each output element is accumulated
    /// over `k` in ascending order, so the rounding of the result is
    /// reproducible.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    /// let c = a.checked_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 19.0);
    /// assert_eq!(c[(1, 1)], 50.0);
    /// ```
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::InnerDimMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = Vec::with_capacity(m * p);
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k] * rhs.data[k * p + j];
                }
                data.push(acc);
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Multiply every element by `scalar`, producing a new matrix.
    ///
    /// ```
    /// use densemat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = a.scale(2.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// ```
    pub fn scale(&self, scalar: T) -> Self {
        let data = self.data.iter().map(|&x| x * scalar).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

fn unwrap_shape<T>(result: Result<Matrix<T>, MatrixError>) -> Matrix<T> {
    match result {
        Ok(m) => m,
        Err(e) => panic!("{}", e),
    }
}

// ── Elementwise addition ────────────────────────────────────────────

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        unwrap_shape(self.checked_add(&rhs))
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_add(rhs))
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_add(&rhs))
    }
}

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_add(rhs))
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.check_same_shape(rhs) {
            panic!("{}", e);
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

// ── Elementwise subtraction ─────────────────────────────────────────

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        unwrap_shape(self.checked_sub(&rhs))
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_sub(rhs))
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_sub(&rhs))
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_sub(rhs))
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(e) = self.check_same_shape(rhs) {
            panic!("{}", e);
        }
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        unwrap_shape(self.checked_mul(&rhs))
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_mul(rhs))
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_mul(&rhs))
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        unwrap_shape(self.checked_mul(rhs))
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        self.scale(rhs)
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
