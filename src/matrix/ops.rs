use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Real> Add for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)] + rhs[(i, j)])
    }
}

impl<T: Real> Add for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        &self + &rhs
    }
}

impl<T: Real> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Real> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Real> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self[(i, j)] += rhs[(i, j)];
            }
        }
    }
}

impl<T: Real> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Real> Sub for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        Matrix::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)] - rhs[(i, j)])
    }
}

impl<T: Real> Sub for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        &self - &rhs
    }
}

impl<T: Real> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Real> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Real> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows(), self.ncols()),
            (rhs.nrows(), rhs.ncols()),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                self[(i, j)] -= rhs[(i, j)];
            }
        }
    }
}

impl<T: Real> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Real> Mul for &Matrix<T> {
    type Output = Matrix<T>;

    /// Matrix product. Panics unless `self.ncols() == rhs.nrows()`.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    /// let c = &a * &b;
    /// assert_eq!(c[(0, 0)], 19.0);
    /// assert_eq!(c[(1, 1)], 50.0);
    /// ```
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols(),
            rhs.nrows(),
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows(),
            self.ncols(),
            rhs.nrows(),
            rhs.ncols(),
        );
        let mut out = Matrix::zeros(self.nrows(), rhs.ncols());
        for i in 0..self.nrows() {
            for k in 0..self.ncols() {
                let aik = self[(i, k)];
                for j in 0..rhs.ncols() {
                    out[(i, j)] += aik * rhs[(k, j)];
                }
            }
        }
        out
    }
}

impl<T: Real> Mul for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Real> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Real> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Matrix-vector multiplication ────────────────────────────────────

impl<T: Real> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    /// Matrix-vector product. Panics unless `self.ncols() == rhs.len()`.
    ///
    /// ```
    /// use linmat::{Matrix, Vector};
    /// let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let v = Vector::from_slice(&[1.0, 1.0]);
    /// let y = &a * &v;
    /// assert_eq!(y.as_slice(), &[3.0, 7.0]);
    /// ```
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols(),
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows(),
            self.ncols(),
            rhs.len(),
        );
        Vector::from_fn(self.nrows(), |i| {
            let mut sum = T::zero();
            for j in 0..self.ncols() {
                sum += self[(i, j)] * rhs[j];
            }
            sum
        })
    }
}

impl<T: Real> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Real> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Real> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

// ── Scalar scale and negation ───────────────────────────────────────

impl<T: Real> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Real> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: T) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Real> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

impl<T: Real> Neg for Matrix<T> {
    type Output = Matrix<T>;
    fn neg(self) -> Matrix<T> {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let sum = &a + &b;
        assert_eq!(sum[(0, 0)], 6.0);
        assert_eq!(sum[(1, 1)], 12.0);
        let diff = &b - &a;
        assert_eq!(diff[(0, 0)], 4.0);
        assert_eq!(diff[(1, 1)], 4.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        let b = Matrix::<f64>::zeros(2, 3);
        let _ = &a + &b;
    }

    #[test]
    fn add_assign() {
        let mut a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        a += Matrix::identity(2);
        assert_eq!(a[(0, 0)], 2.0);
        assert_eq!(a[(0, 1)], 2.0);
        assert_eq!(a[(1, 1)], 5.0);
    }

    #[test]
    fn matmul() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c[(0, 0)], 58.0);
        assert_eq!(c[(0, 1)], 64.0);
        assert_eq!(c[(1, 0)], 139.0);
        assert_eq!(c[(1, 1)], 154.0);
    }

    #[test]
    fn matmul_identity() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let id = Matrix::identity(2);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn matmul_shape_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    fn matvec() {
        let a = Matrix::from_rows(2, 3, &[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y = &a * &v;
        assert_eq!(y.as_slice(), &[7.0, 6.0]);
    }

    #[test]
    fn scale_and_neg() {
        let a = Matrix::from_rows(2, 2, &[1.0, -2.0, 3.0, -4.0]);
        let s = &a * 2.0;
        assert_eq!(s[(0, 1)], -4.0);
        let n = -a;
        assert_eq!(n[(1, 1)], 4.0);
    }

    #[test]
    fn ops_return_fresh_values() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::identity(2);
        let _ = &a + &b;
        // operands untouched
        assert_eq!(a[(0, 0)], 1.0);
        assert_eq!(b[(0, 1)], 0.0);
    }
}
