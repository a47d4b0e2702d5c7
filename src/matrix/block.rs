use crate::error::LinAlgError;
use crate::matrix::Matrix;
use crate::traits::Real;

impl<T: Real> Matrix<T> {
    /// Extract the sub-matrix spanning rows `r0..=r1` and columns
    /// `c0..=c1`, bounds inclusive.
    ///
    /// Returns [`LinAlgError::Shape`] when a bound is out of range or a
    /// range is reversed. Inclusive bounds mean the result is always at
    /// least 1×1.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
    /// let b = m.submatrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(b.nrows(), 2);
    /// assert_eq!(b[(0, 0)], 4.0);
    /// assert_eq!(b[(1, 1)], 8.0);
    /// assert!(m.submatrix(0, 0, 3, 1).is_err());
    /// ```
    pub fn submatrix(
        &self,
        r0: usize,
        c0: usize,
        r1: usize,
        c1: usize,
    ) -> Result<Self, LinAlgError> {
        if r0 > r1 || c0 > c1 || r1 >= self.nrows() || c1 >= self.ncols() {
            return Err(LinAlgError::Shape("submatrix bounds out of range"));
        }
        Ok(Self::from_fn(r1 - r0 + 1, c1 - c0 + 1, |i, j| {
            self[(r0 + i, c0 + j)]
        }))
    }

    /// Write a sub-matrix into self starting at position `(i, j)`.
    ///
    /// Panics if the block extends beyond the matrix bounds.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let mut m = Matrix::<f64>::zeros(3, 3);
    /// let patch = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// m.set_block(1, 1, &patch);
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(2, 2)], 4.0);
    /// ```
    pub fn set_block(&mut self, i: usize, j: usize, src: &Matrix<T>) {
        assert!(
            i + src.nrows() <= self.nrows() && j + src.ncols() <= self.ncols(),
            "set_block ({},{}) size {}x{} out of bounds for {}x{} matrix",
            i,
            j,
            src.nrows(),
            src.ncols(),
            self.nrows(),
            self.ncols(),
        );
        for r in 0..src.nrows() {
            for c in 0..src.ncols() {
                self[(i + r, j + c)] = src[(r, c)];
            }
        }
    }

    /// Return a copy resized to `nrows x ncols`: new cells are
    /// zero-filled, removed cells are truncated, retained cells are
    /// unchanged. Degenerate dimensions are floored to 1.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let grown = m.resized(3, 2);
    /// assert_eq!(grown[(1, 1)], 4.0);
    /// assert_eq!(grown[(2, 0)], 0.0);
    /// let shrunk = m.resized(2, 1);
    /// assert_eq!(shrunk[(1, 0)], 3.0);
    /// ```
    pub fn resized(&self, nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |i, j| {
            if i < self.nrows() && j < self.ncols() {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }
}
