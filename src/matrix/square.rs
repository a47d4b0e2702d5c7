use crate::error::LinAlgError;
use crate::linalg::{Lu, Tolerances};
use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

impl<T: Real> Matrix<T> {
    /// Sum of the diagonal elements. Panics unless square.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        assert!(self.is_square(), "trace requires a square matrix");
        let mut sum = T::zero();
        for i in 0..self.nrows() {
            sum += self[(i, i)];
        }
        sum
    }

    /// Extract the diagonal as a [`Vector`]. Panics unless square.
    pub fn diag(&self) -> Vector<T> {
        assert!(self.is_square(), "diagonal requires a square matrix");
        Vector::from_fn(self.nrows(), |i| self[(i, i)])
    }

    /// Integer matrix power by repeated multiplication (via squaring).
    ///
    /// `pow(0)` returns the identity. Panics unless square.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]);
    /// assert_eq!(m.pow(3)[(0, 1)], 3.0);
    /// ```
    pub fn pow(&self, mut n: u32) -> Self {
        assert!(self.is_square(), "pow requires a square matrix");
        let mut result = Self::identity(self.nrows());
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            n >>= 1;
        }
        result
    }

    /// Check symmetry: `|a[i][j] - a[j][i]| <= tol` for all pairs.
    /// Non-square matrices are never symmetric.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let sym = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
    /// assert!(sym.is_symmetric(1e-12));
    /// ```
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for i in 0..self.nrows() {
            for j in (i + 1)..self.ncols() {
                if (self[(i, j)] - self[(j, i)]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Check column orthogonality: every pair of distinct columns has a
    /// dot product within `tol` of zero.
    pub fn is_orthogonal(&self, tol: T) -> bool {
        for a in 0..self.ncols() {
            for b in (a + 1)..self.ncols() {
                if self.col(a).dot(&self.col(b)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Check orthonormality: orthogonal columns, each with norm within
    /// `tol` of one.
    ///
    /// ```
    /// use linmat::Matrix;
    /// assert!(Matrix::<f64>::identity(3).is_orthonormal(1e-12));
    /// let scaled = Matrix::<f64>::identity(3) * 2.0;
    /// assert!(scaled.is_orthogonal(1e-12));
    /// assert!(!scaled.is_orthonormal(1e-12));
    /// ```
    pub fn is_orthonormal(&self, tol: T) -> bool {
        if !self.is_orthogonal(tol) {
            return false;
        }
        for j in 0..self.ncols() {
            if (self.col(j).norm() - T::one()).abs() > tol {
                return false;
            }
        }
        true
    }
}

// ── Determinants, cofactors, inverses ───────────────────────────────

impl<T: Real> Matrix<T> {
    /// Determinant via Gaussian elimination with partial pivoting
    /// (signed product of pivots). Panics unless square.
    ///
    /// This is the default determinant; [`Matrix::det_laplace`] is the
    /// cofactor-expansion form kept for small orders.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((m.det() - (-14.0)).abs() < 1e-12);
    /// assert!((Matrix::<f64>::identity(4).det() - 1.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> T {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.nrows();
        let mut a = self.clone();
        let mut sign = T::one();

        for col in 0..n {
            let mut max_row = col;
            let mut max_val = a[(col, col)].abs();
            for row in (col + 1)..n {
                let val = a[(row, col)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = row;
                }
            }

            if max_val < T::epsilon() {
                return T::zero();
            }

            if max_row != col {
                a.swap_rows(col, max_row);
                sign = -sign;
            }

            let pivot = a[(col, col)];
            for row in (col + 1)..n {
                let factor = a[(row, col)] / pivot;
                for j in (col + 1)..n {
                    let val = a[(col, j)];
                    a[(row, j)] -= factor * val;
                }
                a[(row, col)] = T::zero();
            }
        }

        let mut det = sign;
        for i in 0..n {
            det *= a[(i, i)];
        }
        det
    }

    /// Determinant by recursive cofactor expansion along column 0.
    ///
    /// Factorial-time; only sensible for small orders. Agrees with
    /// [`Matrix::det`] up to rounding. Panics unless square.
    pub fn det_laplace(&self) -> T {
        assert!(self.is_square(), "determinant requires a square matrix");
        let n = self.nrows();
        if n == 1 {
            return self[(0, 0)];
        }
        if n == 2 {
            return self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)];
        }
        let mut det = T::zero();
        let mut sign = T::one();
        for i in 0..n {
            let a = self[(i, 0)];
            if a != T::zero() {
                det += sign * a * self.removed(i, 0).det_laplace();
            }
            sign = -sign;
        }
        det
    }

    /// Copy of the matrix with row `k` and column `q` removed.
    fn removed(&self, k: usize, q: usize) -> Self {
        Self::from_fn(self.nrows() - 1, self.ncols() - 1, |i, j| {
            let r = if i < k { i } else { i + 1 };
            let c = if j < q { j } else { j + 1 };
            self[(r, c)]
        })
    }

    /// Minor `M(k, q)`: determinant of the matrix with row `k` and
    /// column `q` removed. Panics unless square with order ≥ 2.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((m.minor(0, 0) - 4.0).abs() < 1e-12);
    /// assert!((m.minor(1, 0) - 2.0).abs() < 1e-12);
    /// ```
    pub fn minor(&self, k: usize, q: usize) -> T {
        assert!(self.is_square(), "minor requires a square matrix");
        assert!(self.nrows() >= 2, "minor requires order >= 2");
        self.removed(k, q).det()
    }

    /// Cofactor matrix: minors with checkerboard sign `(-1)^(i+j)`.
    ///
    /// The cofactor matrix of a 1×1 matrix is `[1]` by convention.
    pub fn cofactor_matrix(&self) -> Self {
        assert!(self.is_square(), "cofactors require a square matrix");
        if self.nrows() == 1 {
            return Self::identity(1);
        }
        Self::from_fn(self.nrows(), self.ncols(), |i, j| {
            let m = self.minor(i, j);
            if (i + j) % 2 == 0 {
                m
            } else {
                -m
            }
        })
    }

    /// Adjugate: transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        self.cofactor_matrix().transpose()
    }

    /// Inverse via the adjugate formula `A⁻¹ = adj(A) / det(A)`.
    ///
    /// Returns [`LinAlgError::Shape`] for non-square input and
    /// [`LinAlgError::Singular`] when the determinant magnitude is below
    /// the default pivot threshold. Cofactor-based, so only sensible
    /// for small orders; [`Matrix::inverse`] is the LU-backed default.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let inv = a.adjugate_inverse().unwrap();
    /// let id = &a * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn adjugate_inverse(&self) -> Result<Self, LinAlgError> {
        if !self.is_square() {
            return Err(LinAlgError::Shape("inverse requires a square matrix"));
        }
        let det = self.det();
        if det.abs() < Tolerances::<T>::default().pivot {
            return Err(LinAlgError::Singular);
        }
        Ok(self.adjugate() * (T::one() / det))
    }

    /// Inverse via LU decomposition, solving the `n` unit right-hand
    /// sides. Returns [`LinAlgError::Shape`] for non-square input and
    /// [`LinAlgError::Singular`] when elimination finds no usable pivot.
    ///
    /// ```
    /// use linmat::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let inv = a.inverse().unwrap();
    /// let id = &a * &inv;
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(1, 0)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinAlgError> {
        Ok(Lu::new(self)?.inverse())
    }

    /// Rotation matrix about `axis` by `angle` radians, via Rodrigues'
    /// formula. The axis is normalized internally.
    ///
    /// Returns [`LinAlgError::Shape`] unless the axis has exactly three
    /// elements, and [`LinAlgError::Singular`] for a zero axis.
    ///
    /// ```
    /// use linmat::{Matrix, Vector};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let z = Vector::from_slice(&[0.0, 0.0, 1.0]);
    /// let r = Matrix::rotation(&z, FRAC_PI_2).unwrap();
    /// let x = Vector::from_slice(&[1.0, 0.0, 0.0]);
    /// let y = &r * &x;
    /// assert!(y[0].abs() < 1e-12);
    /// assert!((y[1] - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotation(axis: &Vector<T>, angle: T) -> Result<Self, LinAlgError> {
        if axis.len() != 3 {
            return Err(LinAlgError::Shape("rotation axis must have 3 elements"));
        }
        if axis.norm() <= T::zero() {
            return Err(LinAlgError::Singular);
        }
        let k = axis.normalized();
        let (kx, ky, kz) = (k[0], k[1], k[2]);
        let (s, c) = angle.sin_cos();
        let v = T::one() - c;

        let mut r = Self::zeros(3, 3);
        r[(0, 0)] = c + kx * kx * v;
        r[(0, 1)] = kx * ky * v - kz * s;
        r[(0, 2)] = kx * kz * v + ky * s;
        r[(1, 0)] = ky * kx * v + kz * s;
        r[(1, 1)] = c + ky * ky * v;
        r[(1, 2)] = ky * kz * v - kx * s;
        r[(2, 0)] = kz * kx * v - ky * s;
        r[(2, 1)] = kz * ky * v + kx * s;
        r[(2, 2)] = c + kz * kz * v;
        Ok(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_and_diag() {
        let m = Matrix::from_rows(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.trace(), 15.0);
        assert_eq!(m.diag().as_slice(), &[1.0, 5.0, 9.0]);
    }

    #[test]
    fn pow() {
        let m = Matrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        assert_eq!(m.pow(0), Matrix::identity(2));
        assert_eq!(m.pow(1), m);
        let m4 = m.pow(4);
        assert_eq!(m4[(0, 1)], 4.0);
        assert_eq!(m4[(0, 0)], 1.0);
    }

    #[test]
    fn symmetry() {
        let sym = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 3.0]);
        assert!(sym.is_symmetric(1e-12));
        let asym = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert!(!asym.is_symmetric(1e-12));
        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(!rect.is_symmetric(1e-12));
    }

    #[test]
    fn orthogonality() {
        let id = Matrix::<f64>::identity(3);
        assert!(id.is_orthogonal(1e-12));
        assert!(id.is_orthonormal(1e-12));

        let scaled = id * 3.0;
        assert!(scaled.is_orthogonal(1e-12));
        assert!(!scaled.is_orthonormal(1e-12));

        let slanted = Matrix::from_rows(2, 2, &[1.0, 1.0, 0.0, 1.0]);
        assert!(!slanted.is_orthogonal(1e-12));
    }

    #[test]
    fn det_2x2_and_3x3() {
        let m = Matrix::from_rows(2, 2, &[3.0_f64, 8.0, 4.0, 6.0]);
        assert!((m.det() - (-14.0)).abs() < 1e-12);

        let m3 = Matrix::from_rows(3, 3, &[6.0_f64, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
        assert!((m3.det() - (-306.0)).abs() < 1e-10);
    }

    #[test]
    fn det_identity_all_orders() {
        for n in 1..6 {
            assert!((Matrix::<f64>::identity(n).det() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn det_zero_row() {
        let m = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.det(), 0.0);
        assert_eq!(m.det_laplace(), 0.0);
    }

    #[test]
    fn det_laplace_agrees_with_det() {
        let m = Matrix::from_rows(
            4,
            4,
            &[
                1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 2.0, 6.0, 4.0, 1.0, 3.0, 1.0, 9.0, 2.0,
            ],
        );
        assert!((m.det() - m.det_laplace()).abs() < 1e-9);
    }

    #[test]
    fn minor_cofactor_adjugate() {
        let m = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
        assert!((m.minor(0, 0) - 4.0).abs() < 1e-12);
        assert!((m.minor(0, 1) - 3.0).abs() < 1e-12);

        let cof = m.cofactor_matrix();
        assert!((cof[(0, 0)] - 4.0).abs() < 1e-12);
        assert!((cof[(0, 1)] - (-3.0)).abs() < 1e-12);
        assert!((cof[(1, 0)] - (-2.0)).abs() < 1e-12);
        assert!((cof[(1, 1)] - 1.0).abs() < 1e-12);

        let adj = m.adjugate();
        assert!((adj[(0, 1)] - (-2.0)).abs() < 1e-12);
        assert!((adj[(1, 0)] - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn adjugate_inverse_matches_lu_inverse() {
        let a = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let adj_inv = a.adjugate_inverse().unwrap();
        let lu_inv = a.inverse().unwrap();
        for i in 0..3 {
            for j in 0..3 {
                assert!((adj_inv[(i, j)] - lu_inv[(i, j)]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn adjugate_inverse_singular() {
        let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
        assert_eq!(a.adjugate_inverse().unwrap_err(), LinAlgError::Singular);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let a = Matrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let inv = a.inverse().unwrap();
        let id = &a * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (id[(i, j)] - expected).abs() < 1e-6,
                    "id[({},{})] = {}",
                    i,
                    j,
                    id[(i, j)]
                );
            }
        }
    }

    #[test]
    fn inverse_errors() {
        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            rect.inverse().unwrap_err(),
            LinAlgError::Shape(_)
        ));

        let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
        assert_eq!(singular.inverse().unwrap_err(), LinAlgError::Singular);
    }

    #[test]
    fn rotation_about_z() {
        let z = Vector::from_slice(&[0.0_f64, 0.0, 1.0]);
        let r = Matrix::rotation(&z, core::f64::consts::FRAC_PI_2).unwrap();
        let x = Vector::from_slice(&[1.0_f64, 0.0, 0.0]);
        let y = &r * &x;
        assert!(y[0].abs() < 1e-12);
        assert!((y[1] - 1.0).abs() < 1e-12);
        assert!(y[2].abs() < 1e-12);
    }

    #[test]
    fn rotation_is_orthonormal() {
        let axis = Vector::from_slice(&[1.0_f64, 2.0, 2.0]);
        let r = Matrix::rotation(&axis, 0.7).unwrap();
        assert!(r.is_orthonormal(1e-10));
        assert!((r.det() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn rotation_errors() {
        let short = Vector::from_slice(&[1.0_f64, 0.0]);
        assert!(matches!(
            Matrix::<f64>::rotation(&short, 1.0).unwrap_err(),
            LinAlgError::Shape(_)
        ));
        let zero = Vector::<f64>::zeros(3);
        assert_eq!(
            Matrix::<f64>::rotation(&zero, 1.0).unwrap_err(),
            LinAlgError::Singular
        );
    }
}
