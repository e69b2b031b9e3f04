use core::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

use super::Matrix;

/// Errors from [`Matrix::read_from`].
///
/// The matrix keeps any elements that were parsed before the failure
/// point; callers must treat its contents as partial until `read_from`
/// returns `Ok`.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// A token could not be parsed as an element value.
    InvalidToken {
        /// The offending token.
        token: String,
        /// Row-major index of the element it was meant to fill.
        index: usize,
    },
    /// The input ran out before `nrows * ncols` values were read.
    UnexpectedEnd {
        /// Number of elements successfully read.
        read: usize,
        /// Number of elements required.
        expected: usize,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "read failed: {}", e),
            ReadError::InvalidToken { token, index } => {
                write!(f, "invalid token {:?} for element {}", token, index)
            }
            ReadError::UnexpectedEnd { read, expected } => {
                write!(f, "input ended after {} of {} values", read, expected)
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

// ── Formatted output ────────────────────────────────────────────────

/// Row-major display, one row per line, each element right-aligned in a
/// width-10 field. A display format, not a serialization format, though
/// [`Matrix::read_from`] will re-read the token sequence.
///
/// ```
/// use densemat::Matrix;
/// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
/// let s = format!("{}", m);
/// assert_eq!(s.lines().count(), 2);
/// assert!(s.lines().next().unwrap().ends_with("2"));
/// ```
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                write!(f, "{:>10}", self.data[i * self.ncols + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ── Formatted input ─────────────────────────────────────────────────

impl<T: FromStr> Matrix<T> {
    /// Fill the matrix from whitespace-separated text, row-major.
    ///
    /// Reads exactly `nrows() * ncols()` values; the matrix must already
    /// have the dimensions the data is expected to fill, and they are
    /// never altered by this call. Whitespace, including newlines, is the
    /// only separator, so the row framing of the input text is irrelevant.
    /// Tokens remaining on the last consumed line after the final value
    /// are discarded with that line.
    ///
    /// On failure, elements read before the failure point are retained;
    /// check the result before trusting the contents.
    ///
    /// ```
    /// use densemat::Matrix;
    /// use std::io::Cursor;
    ///
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// m.read_from(Cursor::new("1 2\n3 4\n")).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<(), ReadError> {
        let expected = self.nrows * self.ncols;
        let mut filled = 0;
        let mut line = String::new();
        while filled < expected {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Err(ReadError::UnexpectedEnd {
                    read: filled,
                    expected,
                });
            }
            for token in line.split_whitespace() {
                if filled == expected {
                    break;
                }
                match token.parse::<T>() {
                    Ok(value) => {
                        self.data[filled] = value;
                        filled += 1;
                    }
                    Err(_) => {
                        return Err(ReadError::InvalidToken {
                            token: token.to_string(),
                            index: filled,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
