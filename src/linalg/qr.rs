use crate::error::LinAlgError;
use crate::linalg::Tolerances;
use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

/// QR decomposition via Givens rotations: `A ≈ Q·R` with orthogonal Q
/// and upper-triangular R.
///
/// Each sub-diagonal entry is annihilated by a plane rotation of its
/// row against the pivot row; the accumulated rotation product,
/// transposed, is Q. The input is defensively copied and each call
/// yields a fresh value.
///
/// # Example
///
/// ```
/// use linmat::{Matrix, Qr, Vector};
///
/// let a = Matrix::from_rows(3, 3, &[
///     12.0_f64, -51.0, 4.0,
///     6.0, 167.0, -68.0,
///     -4.0, 24.0, -41.0,
/// ]);
/// let qr = Qr::new(&a).unwrap();
///
/// // Q·R rebuilds A
/// let rebuilt = qr.q() * qr.r();
/// assert!((rebuilt[(0, 0)] - 12.0).abs() < 1e-10);
/// assert!((rebuilt[(2, 1)] - 24.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Qr<T> {
    q: Matrix<T>,
    r: Matrix<T>,
    pivot: T,
}

/// Rotate rows `i` and `j` of `m` by the plane rotation `(c, s)`.
fn rotate_rows<T: Real>(m: &mut Matrix<T>, i: usize, j: usize, c: T, s: T) {
    for k in 0..m.ncols() {
        let a = m[(i, k)];
        let b = m[(j, k)];
        m[(i, k)] = c * a - s * b;
        m[(j, k)] = s * a + c * b;
    }
}

impl<T: Real> Qr<T> {
    /// Decompose with the default [`Tolerances`].
    ///
    /// Returns [`LinAlgError::Shape`] for non-square input.
    pub fn new(a: &Matrix<T>) -> Result<Self, LinAlgError> {
        Self::with_tolerances(a, &Tolerances::default())
    }

    /// Decompose with explicit [`Tolerances`]. The pivot threshold is
    /// kept for the singularity check in [`Qr::solve`].
    pub fn with_tolerances(a: &Matrix<T>, tol: &Tolerances<T>) -> Result<Self, LinAlgError> {
        if !a.is_square() {
            return Err(LinAlgError::Shape("QR decomposition requires a square matrix"));
        }
        let n = a.nrows();
        let mut r = a.clone();
        // Accumulates the product of the rotations; Q is its transpose.
        let mut qt = Matrix::identity(n);

        for i in 0..n {
            for j in ((i + 1)..n).rev() {
                if r[(j, i)] != T::zero() {
                    let theta = (-r[(j, i)]).atan2(r[(i, i)]);
                    let (s, c) = theta.sin_cos();
                    rotate_rows(&mut r, i, j, c, s);
                    rotate_rows(&mut qt, i, j, c, s);
                    // Mathematically exact zero; clear the rounding dust.
                    r[(j, i)] = T::zero();
                }
            }
        }

        Ok(Self {
            q: qt.transpose(),
            r,
            pivot: tol.pivot,
        })
    }

    /// The orthogonal factor Q.
    #[inline]
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// The upper-triangular factor R.
    #[inline]
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Solve `A·x = b`: project b through Qᵗ, then back-substitute
    /// against R.
    ///
    /// Returns [`LinAlgError::Shape`] on a wrong-length right-hand side
    /// and [`LinAlgError::Singular`] when a diagonal entry of R is below
    /// the pivot threshold.
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
        let n = self.r.nrows();
        if b.len() != n {
            return Err(LinAlgError::Shape(
                "right-hand side length must match the matrix order",
            ));
        }

        // Qᵗ·b
        let mut x = Vector::from_fn(n, |i| {
            let mut sum = T::zero();
            for k in 0..n {
                sum += self.q[(k, i)] * b[k];
            }
            sum
        });

        // Back substitution against R
        for i in (0..n).rev() {
            if self.r[(i, i)].abs() < self.pivot {
                return Err(LinAlgError::Singular);
            }
            let mut sum = x[i];
            for j in (i + 1)..n {
                sum -= self.r[(i, j)] * x[j];
            }
            x[i] = sum / self.r[(i, i)];
        }

        Ok(x)
    }

    /// Determinant: product of R's diagonal (each Givens rotation has
    /// determinant +1).
    pub fn det(&self) -> T {
        let n = self.r.nrows();
        let mut d = T::one();
        for i in 0..n {
            d *= self.r[(i, i)];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: Real> Matrix<T> {
    /// QR decomposition via Givens rotations.
    pub fn qr(&self) -> Result<Qr<T>, LinAlgError> {
        Qr::new(self)
    }

    /// QR decomposition with explicit [`Tolerances`].
    pub fn qr_with(&self, tol: &Tolerances<T>) -> Result<Qr<T>, LinAlgError> {
        Qr::with_tolerances(self, tol)
    }
}
