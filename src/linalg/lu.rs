use crate::error::LinAlgError;
use crate::linalg::Tolerances;
use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

/// LU decomposition with partial pivoting: `P·A = L·U`.
///
/// `L` is unit-lower-triangular, `U` upper-triangular, and the
/// permutation records the row swaps made while pivoting. The input is
/// defensively copied, and each call produces a fresh, self-contained
/// value: mutating the source matrix afterwards does not disturb the
/// stored factors.
///
/// # Example
///
/// ```
/// use linmat::{Lu, Matrix, Vector};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = Lu::new(&a).unwrap();
///
/// let x = lu.solve(&Vector::from_slice(&[4.0, 11.0])).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
///
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Lu<T> {
    /// Packed factors: upper triangle (with diagonal) is U, strict
    /// lower triangle holds the elimination multipliers of L.
    lu: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

impl<T: Real> Lu<T> {
    /// Decompose with the default [`Tolerances`].
    ///
    /// Returns [`LinAlgError::Shape`] for non-square input and
    /// [`LinAlgError::Singular`] when the best available pivot falls
    /// below the threshold.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinAlgError> {
        Self::with_tolerances(a, &Tolerances::default())
    }

    /// Decompose with explicit [`Tolerances`].
    pub fn with_tolerances(a: &Matrix<T>, tol: &Tolerances<T>) -> Result<Self, LinAlgError> {
        if !a.is_square() {
            return Err(LinAlgError::Shape("LU decomposition requires a square matrix"));
        }
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut even = true;

        for col in 0..n {
            // Partial pivoting: largest-magnitude entry in this column
            let mut max_row = col;
            let mut max_val = lu[(col, col)].abs();
            for row in (col + 1)..n {
                let val = lu[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val < tol.pivot {
                return Err(LinAlgError::Singular);
            }

            if max_row != col {
                lu.swap_rows(col, max_row);
                perm.swap(col, max_row);
                even = !even;
            }

            let pivot = lu[(col, col)];
            for row in (col + 1)..n {
                let factor = lu[(row, col)] / pivot;
                lu[(row, col)] = factor;
                for j in (col + 1)..n {
                    let val = lu[(col, j)];
                    lu[(row, j)] -= factor * val;
                }
            }
        }

        Ok(Self { lu, perm, even })
    }

    /// Matrix order.
    #[inline]
    pub fn order(&self) -> usize {
        self.lu.nrows()
    }

    /// Extract the unit-lower-triangular factor L.
    pub fn l(&self) -> Matrix<T> {
        let n = self.order();
        Matrix::from_fn(n, n, |i, j| {
            if i == j {
                T::one()
            } else if i > j {
                self.lu[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Extract the upper-triangular factor U.
    pub fn u(&self) -> Matrix<T> {
        let n = self.order();
        Matrix::from_fn(n, n, |i, j| if i <= j { self.lu[(i, j)] } else { T::zero() })
    }

    /// Row permutation: position `i` of the factored matrix holds row
    /// `permutation()[i]` of the original.
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.perm
    }

    /// The permutation as a matrix P, so that `P·A = L·U`.
    ///
    /// ```
    /// use linmat::{Lu, Matrix};
    /// let a = Matrix::from_rows(2, 2, &[0.0_f64, 1.0, 2.0, 0.0]);
    /// let lu = Lu::new(&a).unwrap();
    /// let pa = &lu.permutation_matrix() * &a;
    /// let rebuilt = &lu.l() * &lu.u();
    /// assert!((pa[(0, 0)] - rebuilt[(0, 0)]).abs() < 1e-12);
    /// assert!((pa[(1, 1)] - rebuilt[(1, 1)]).abs() < 1e-12);
    /// ```
    pub fn permutation_matrix(&self) -> Matrix<T> {
        let n = self.order();
        let mut p = Matrix::zeros(n, n);
        for (i, &src) in self.perm.iter().enumerate() {
            p[(i, src)] = T::one();
        }
        p
    }

    /// Solve `A·x = b` by permuting b, forward-substituting against L,
    /// then back-substituting against U.
    ///
    /// Returns [`LinAlgError::Shape`] when `b.len()` differs from the
    /// matrix order.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        if b.len() != self.order() {
            return Err(LinAlgError::Shape(
                "right-hand side length must match the matrix order",
            ));
        }
        Ok(self.substitute(b))
    }

    /// Permute, forward-substitute against L, back-substitute against
    /// U. `b` must have matching length.
    fn substitute(&self, b: &Vector<T>) -> Vector<T> {
        let n = self.order();
        let mut x = Vector::zeros(n);

        // Forward substitution: L·y = P·b
        for i in 0..n {
            let mut sum = b[self.perm[i]];
            for j in 0..i {
                sum -= self.lu[(i, j)] * x[j];
            }
            x[i] = sum;
        }

        // Back substitution: U·x = y
        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.lu[(i, j)] * x[j];
            }
            x[i] = sum / self.lu[(i, i)];
        }

        x
    }

    /// Matrix inverse, solving the n unit right-hand sides.
    pub fn inverse(&self) -> Matrix<T> {
        let n = self.order();
        let mut inv = Matrix::zeros(n, n);
        let mut e = Vector::zeros(n);

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();
            inv.set_col(col, &self.substitute(&e));
        }

        inv
    }

    /// Determinant: signed product of the pivots.
    pub fn det(&self) -> T {
        let n = self.order();
        let mut d = if self.even { T::one() } else { -T::one() };
        for i in 0..n {
            d *= self.lu[(i, i)];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: Real> Matrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<Lu<T>, LinAlgError> {
        Lu::new(self)
    }

    /// LU decomposition with explicit [`Tolerances`].
    pub fn lu_with(&self, tol: &Tolerances<T>) -> Result<Lu<T>, LinAlgError> {
        Lu::with_tolerances(self, tol)
    }

    /// Solve `A·x = b` for `x` via LU decomposition.
    ///
    /// ```
    /// use linmat::{Matrix, Vector};
    /// let a = Matrix::from_rows(3, 3, &[
    ///     2.0_f64, 1.0, -1.0,
    ///     -3.0, -1.0, 2.0,
    ///     -2.0, 1.0, 2.0,
    /// ]);
    /// let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] - (-1.0)).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        self.lu()?.solve(b)
    }
}
