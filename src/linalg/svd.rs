use crate::error::LinAlgError;
use crate::linalg::eigen::{eigen_system_with, EigenPair};
use crate::linalg::Tolerances;
use crate::matrix::Matrix;
use crate::traits::Real;

/// Singular value decomposition `M ≈ U·Σ·Vᵗ`, built on the QR-algorithm
/// eigensolver.
///
/// U's columns are the eigenvectors of `M·Mᵗ`, V's columns the
/// eigenvectors of `Mᵗ·M`, both ordered by descending eigenvalue. Σ is
/// rectangular-diagonal (same shape as M); its entries are the square
/// roots of the eigenvalues taken from whichever Gram matrix matches
/// the smaller of M's dimensions, which avoids the rank-deficient side.
///
/// # Example
///
/// ```
/// use linmat::{Matrix, Svd};
///
/// let m = Matrix::from_rows(3, 2, &[3.0_f64, 0.0, 0.0, 2.0, 0.0, 0.0]);
/// let svd = Svd::new(&m).unwrap();
/// let sv = svd.sigma();
/// assert!((sv[(0, 0)] - 3.0).abs() < 1e-6);
/// assert!((sv[(1, 1)] - 2.0).abs() < 1e-6);
///
/// // U·Σ·Vᵗ rebuilds M
/// let rebuilt = svd.u() * svd.sigma() * svd.v().transpose();
/// assert!((rebuilt[(0, 0)] - 3.0).abs() < 1e-4);
/// assert!((rebuilt[(1, 1)] - 2.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Svd<T> {
    u: Matrix<T>,
    sigma: Matrix<T>,
    v: Matrix<T>,
}

/// Sort eigenpairs by descending eigenvalue.
fn sort_descending<T: Real>(pairs: &mut [EigenPair<T>]) {
    pairs.sort_by(|a, b| {
        b.value
            .partial_cmp(&a.value)
            .unwrap_or(core::cmp::Ordering::Equal)
    });
}

/// Pack eigenvectors as the columns of an `n x n` matrix.
fn columns_from_pairs<T: Real>(pairs: &[EigenPair<T>]) -> Matrix<T> {
    let n = pairs.len();
    let mut m = Matrix::zeros(n, n);
    for (j, pair) in pairs.iter().enumerate() {
        m.set_col(j, &pair.vector);
    }
    m
}

impl<T: Real> Svd<T> {
    /// Decompose with the default [`Tolerances`].
    ///
    /// Propagates [`LinAlgError::IterationLimit`] when either Gram
    /// matrix's eigensystem fails to converge.
    pub fn new(m: &Matrix<T>) -> Result<Self, LinAlgError> {
        Self::with_tolerances(m, &Tolerances::default())
    }

    /// Decompose with explicit [`Tolerances`].
    pub fn with_tolerances(m: &Matrix<T>, tol: &Tolerances<T>) -> Result<Self, LinAlgError> {
        let mt = m.transpose();
        let left_gram = m * &mt; // M·Mᵗ, rows x rows
        let right_gram = &mt * m; // Mᵗ·M, cols x cols

        let mut left = eigen_system_with(&left_gram, tol)?;
        let mut right = eigen_system_with(&right_gram, tol)?;
        sort_descending(&mut left);
        sort_descending(&mut right);

        let rows = m.nrows();
        let cols = m.ncols();
        let k = rows.min(cols);

        // Singular values from the smaller Gram matrix; clamp the tiny
        // negatives eigen iteration can leave on a rank-deficient side.
        let small_side = if rows <= cols { &left } else { &right };
        let mut sigma = Matrix::zeros(rows, cols);
        for i in 0..k {
            sigma[(i, i)] = small_side[i].value.max(T::zero()).sqrt();
        }

        let u = columns_from_pairs(&left);
        let mut v = columns_from_pairs(&right);

        // Eigenvectors carry an arbitrary sign; align each V column so
        // uᵢᵗ·M·vᵢ ≥ 0, which makes U·Σ·Vᵗ reproduce M.
        for j in 0..k {
            if sigma[(j, j)] > tol.pivot {
                let mv = m * &v.col(j);
                if u.col(j).dot(&mv) < T::zero() {
                    for i in 0..v.nrows() {
                        v[(i, j)] = -v[(i, j)];
                    }
                }
            }
        }

        Ok(Self { u, sigma, v })
    }

    /// Left singular vectors (rows×rows; columns are the vectors).
    #[inline]
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// The rectangular-diagonal singular value matrix (same shape as
    /// the input).
    #[inline]
    pub fn sigma(&self) -> &Matrix<T> {
        &self.sigma
    }

    /// Right singular vectors (cols×cols; columns are the vectors).
    #[inline]
    pub fn v(&self) -> &Matrix<T> {
        &self.v
    }
}

/// SVD-derived matrix operations.
impl<T: Real> Matrix<T> {
    /// Singular value decomposition.
    pub fn svd(&self) -> Result<Svd<T>, LinAlgError> {
        Svd::new(self)
    }

    /// SVD with explicit [`Tolerances`].
    pub fn svd_with(&self, tol: &Tolerances<T>) -> Result<Svd<T>, LinAlgError> {
        Svd::with_tolerances(self, tol)
    }

    /// Moore-Penrose pseudoinverse `V·Σ⁺·Uᵗ`, inverting only the
    /// singular values above the pivot threshold.
    ///
    /// For square invertible input this agrees with
    /// [`Matrix::inverse`]; for rectangular or rank-deficient input it
    /// is the least-squares generalized inverse.
    pub fn pseudoinverse(&self) -> Result<Matrix<T>, LinAlgError> {
        self.pseudoinverse_with(&Tolerances::default())
    }

    /// [`Matrix::pseudoinverse`] with explicit [`Tolerances`].
    pub fn pseudoinverse_with(&self, tol: &Tolerances<T>) -> Result<Matrix<T>, LinAlgError> {
        let svd = Svd::with_tolerances(self, tol)?;
        let rows = self.nrows();
        let cols = self.ncols();

        // Σ⁺: transpose shape, reciprocal nonzero diagonal
        let mut sigma_pinv = Matrix::zeros(cols, rows);
        for i in 0..rows.min(cols) {
            let s = svd.sigma[(i, i)];
            if s > tol.pivot {
                sigma_pinv[(i, i)] = T::one() / s;
            }
        }

        Ok(svd.v() * &sigma_pinv * &svd.u().transpose())
    }

    /// Nearest orthogonal matrix `U·Vᵗ` (orthogonal Procrustes with the
    /// identity). Square input only.
    ///
    /// Inherits the eigensolver's limits: with tied singular values the
    /// two Gram eigenbases decouple and the result is unreliable.
    ///
    /// ```
    /// use linmat::Matrix;
    /// // Rotation times diag(2, 1): the nearest orthogonal matrix is
    /// // the rotation itself.
    /// let (s, c) = (0.5_f64, 0.75_f64.sqrt());
    /// let m = Matrix::from_rows(2, 2, &[2.0 * c, -s, 2.0 * s, c]);
    /// let q = m.nearest_orthogonal().unwrap();
    /// assert!(q.is_orthonormal(1e-4));
    /// assert!((q[(0, 0)] - c).abs() < 1e-4);
    /// assert!((q[(0, 1)] - (-s)).abs() < 1e-4);
    /// ```
    pub fn nearest_orthogonal(&self) -> Result<Matrix<T>, LinAlgError> {
        self.nearest_orthogonal_with(&Tolerances::default())
    }

    /// [`Matrix::nearest_orthogonal`] with explicit [`Tolerances`].
    pub fn nearest_orthogonal_with(&self, tol: &Tolerances<T>) -> Result<Matrix<T>, LinAlgError> {
        if !self.is_square() {
            return Err(LinAlgError::Shape(
                "nearest orthogonal requires a square matrix",
            ));
        }
        let svd = Svd::with_tolerances(self, tol)?;
        Ok(svd.u() * &svd.v().transpose())
    }
}
