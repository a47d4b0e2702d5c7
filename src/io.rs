//! Flat-text load/store for [`Vector`] and [`Matrix`].
//!
//! Vector files carry a header line with the element count, then the
//! elements whitespace-separated. Matrix files carry a `rows cols`
//! header line, then one line per row. `save` writes through `Display`
//! (shortest round-trip formatting), so store → load reproduces the
//! value exactly.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

/// Errors from loading a vector or matrix from a text file.
#[derive(Debug, Error)]
pub enum ReadError {
    /// Underlying file I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The file content does not match the expected format.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

fn malformed(line: usize, reason: impl Into<String>) -> ReadError {
    ReadError::Malformed {
        line,
        reason: reason.into(),
    }
}

/// Parse every whitespace-separated token on `text`'s lines starting at
/// 1-based line number `first_line`.
fn parse_values<T: Real>(
    lines: &[(usize, &str)],
    expected: usize,
) -> Result<Vec<T>, ReadError> {
    let mut values = Vec::with_capacity(expected);
    for &(line_no, line) in lines {
        for token in line.split_whitespace() {
            let value = token
                .parse::<T>()
                .map_err(|_| malformed(line_no, format!("invalid number '{}'", token)))?;
            values.push(value);
        }
    }
    let last = lines.last().map(|&(n, _)| n).unwrap_or(1);
    if values.len() != expected {
        return Err(malformed(
            last,
            format!("expected {} values, found {}", expected, values.len()),
        ));
    }
    Ok(values)
}

impl<T: Real> Vector<T> {
    /// Load a vector from a text file: a header line with the element
    /// count, then that many whitespace-separated numbers.
    ///
    /// ```no_run
    /// use linmat::Vector;
    /// let v = Vector::<f64>::load("v.txt").unwrap();
    /// assert!(v.len() > 0);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        let text = fs::read_to_string(path)?;
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (_, header) = lines
            .next()
            .ok_or_else(|| malformed(1, "missing element count header"))?;
        let n: usize = header
            .trim()
            .parse()
            .map_err(|_| malformed(1, format!("invalid element count '{}'", header.trim())))?;

        let rest: Vec<(usize, &str)> = lines.collect();
        let values = parse_values(&rest, n)?;
        Ok(Self::from_vec(values))
    }

    /// Store the vector in the format [`Vector::load`] reads.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut out = format!("{}\n", self.len());
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}", x);
        }
        out.push('\n');
        fs::write(path, out)
    }
}

impl<T: Real> Matrix<T> {
    /// Load a matrix from a text file: a `rows cols` header line, then
    /// `rows` lines of `cols` whitespace-separated numbers.
    ///
    /// ```no_run
    /// use linmat::Matrix;
    /// let m = Matrix::<f64>::load("m.txt").unwrap();
    /// assert!(m.nrows() > 0);
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReadError> {
        let text = fs::read_to_string(path)?;
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (_, header) = lines
            .next()
            .ok_or_else(|| malformed(1, "missing 'rows cols' header"))?;
        let dims: Vec<&str> = header.split_whitespace().collect();
        if dims.len() != 2 {
            return Err(malformed(1, "header must be 'rows cols'"));
        }
        let rows: usize = dims[0]
            .parse()
            .map_err(|_| malformed(1, format!("invalid row count '{}'", dims[0])))?;
        let cols: usize = dims[1]
            .parse()
            .map_err(|_| malformed(1, format!("invalid column count '{}'", dims[1])))?;
        if rows == 0 || cols == 0 {
            return Err(malformed(1, "matrix dimensions must be at least 1x1"));
        }

        let rest: Vec<(usize, &str)> = lines.collect();
        let values = parse_values(&rest, rows * cols)?;
        Ok(Self::from_rows(rows, cols, &values))
    }

    /// Store the matrix in the format [`Matrix::load`] reads.
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let mut out = format!("{} {}\n", self.nrows(), self.ncols());
        for i in 0..self.nrows() {
            for (j, x) in self.row_slice(i).iter().enumerate() {
                if j > 0 {
                    out.push(' ');
                }
                let _ = write!(out, "{}", x);
            }
            out.push('\n');
        }
        fs::write(path, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("linmat-io-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn vector_round_trip() {
        let path = temp_path("vec.txt");
        let v = Vector::from_slice(&[1.5_f64, -2.0, 3.25e-3, 0.1]);
        v.save(&path).unwrap();
        let loaded = Vector::<f64>::load(&path).unwrap();
        assert_eq!(loaded, v);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn matrix_round_trip() {
        let path = temp_path("mat.txt");
        let m = Matrix::from_rows(2, 3, &[1.0_f64, -2.5, 3.0, 0.25, 5.0e6, -0.125]);
        m.save(&path).unwrap();
        let loaded = Matrix::<f64>::load(&path).unwrap();
        assert_eq!(loaded, m);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn vector_format_on_disk() {
        let path = temp_path("vec-format.txt");
        let v = Vector::from_slice(&[3.0_f64, 4.0]);
        v.save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "2\n3 4\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn matrix_format_on_disk() {
        let path = temp_path("mat-format.txt");
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        m.save(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "2 2\n1 2\n3 4\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_reports_bad_token() {
        let path = temp_path("bad-token.txt");
        fs::write(&path, "2\n1.0 oops\n").unwrap();
        let err = Vector::<f64>::load(&path).unwrap_err();
        match err {
            ReadError::Malformed { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("oops"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_reports_count_mismatch() {
        let path = temp_path("short.txt");
        fs::write(&path, "3\n1.0 2.0\n").unwrap();
        assert!(matches!(
            Vector::<f64>::load(&path).unwrap_err(),
            ReadError::Malformed { .. }
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_rejects_degenerate_matrix_header() {
        let path = temp_path("degenerate.txt");
        fs::write(&path, "0 2\n").unwrap();
        assert!(matches!(
            Matrix::<f64>::load(&path).unwrap_err(),
            ReadError::Malformed { line: 1, .. }
        ));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Vector::<f64>::load("/nonexistent/linmat.txt").unwrap_err();
        assert!(matches!(err, ReadError::Io(_)));
    }
}
