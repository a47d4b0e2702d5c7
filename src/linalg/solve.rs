//! Direct solvers: Gaussian elimination and Cramer's rule.
//!
//! Both accept either a square coefficient matrix plus right-hand side
//! or an `n x (n+1)` augmented matrix whose last column is the
//! right-hand side.

use crate::error::LinAlgError;
use crate::linalg::Tolerances;
use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

/// Solve `A·x = b` by Gaussian elimination with partial pivoting.
///
/// ```
/// use linmat::{gaussian, Matrix, Vector};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
/// let b = Vector::from_slice(&[3.0, 5.0]);
/// let x = gaussian(&a, &b).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn gaussian<T: Real>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
    gaussian_with(a, b, &Tolerances::default())
}

/// [`gaussian`] with explicit [`Tolerances`].
pub fn gaussian_with<T: Real>(
    a: &Matrix<T>,
    b: &Vector<T>,
    tol: &Tolerances<T>,
) -> Result<Vector<T>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::Shape("Gaussian solver requires a square matrix"));
    }
    if b.len() != a.nrows() {
        return Err(LinAlgError::Shape(
            "right-hand side length must match the matrix order",
        ));
    }
    let n = a.nrows();
    let mut work = Matrix::from_fn(n, n + 1, |i, j| if j < n { a[(i, j)] } else { b[i] });
    reduce_and_substitute(&mut work, tol)
}

/// Solve an `n x (n+1)` augmented system `[A | b]` by Gaussian
/// elimination with partial pivoting.
pub fn gaussian_augmented<T: Real>(aug: &Matrix<T>) -> Result<Vector<T>, LinAlgError> {
    gaussian_augmented_with(aug, &Tolerances::default())
}

/// [`gaussian_augmented`] with explicit [`Tolerances`].
pub fn gaussian_augmented_with<T: Real>(
    aug: &Matrix<T>,
    tol: &Tolerances<T>,
) -> Result<Vector<T>, LinAlgError> {
    if aug.ncols() != aug.nrows() + 1 {
        return Err(LinAlgError::Shape(
            "augmented system must have shape n x (n+1)",
        ));
    }
    let mut work = aug.clone();
    reduce_and_substitute(&mut work, tol)
}

/// Row-reduce an `n x (n+1)` augmented matrix to upper-triangular form
/// with partial pivoting, then back-substitute.
fn reduce_and_substitute<T: Real>(
    work: &mut Matrix<T>,
    tol: &Tolerances<T>,
) -> Result<Vector<T>, LinAlgError> {
    let n = work.nrows();

    for col in 0..n {
        let mut max_row = col;
        let mut max_val = work[(col, col)].abs();
        for row in (col + 1)..n {
            let val = work[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_val < tol.pivot {
            return Err(LinAlgError::Singular);
        }

        work.swap_rows(col, max_row);

        let pivot = work[(col, col)];
        for row in (col + 1)..n {
            let factor = work[(row, col)] / pivot;
            for j in col..=n {
                let val = work[(col, j)];
                work[(row, j)] -= factor * val;
            }
        }
    }

    let mut x = Vector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = work[(i, n)];
        for j in (i + 1)..n {
            sum -= work[(i, j)] * x[j];
        }
        x[i] = sum / work[(i, i)];
    }

    Ok(x)
}

/// Solve `A·x = b` by Cramer's rule: each unknown is the ratio of a
/// column-substituted determinant to the base determinant.
///
/// Determinants make this cost n+1 full eliminations; prefer
/// [`gaussian`] or [`crate::Lu`] beyond small orders.
///
/// ```
/// use linmat::{cramer, Matrix, Vector};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
/// let b = Vector::from_slice(&[3.0, 5.0]);
/// let x = cramer(&a, &b).unwrap();
/// assert!((x[0] - 0.8).abs() < 1e-12);
/// assert!((x[1] - 1.4).abs() < 1e-12);
/// ```
pub fn cramer<T: Real>(a: &Matrix<T>, b: &Vector<T>) -> Result<Vector<T>, LinAlgError> {
    cramer_with(a, b, &Tolerances::default())
}

/// [`cramer`] with explicit [`Tolerances`].
pub fn cramer_with<T: Real>(
    a: &Matrix<T>,
    b: &Vector<T>,
    tol: &Tolerances<T>,
) -> Result<Vector<T>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::Shape("Cramer solver requires a square matrix"));
    }
    if b.len() != a.nrows() {
        return Err(LinAlgError::Shape(
            "right-hand side length must match the matrix order",
        ));
    }

    let base = a.det();
    if base.abs() < tol.pivot {
        return Err(LinAlgError::Singular);
    }

    let n = a.nrows();
    let mut x = Vector::zeros(n);
    for i in 0..n {
        let mut substituted = a.clone();
        substituted.set_col(i, b);
        x[i] = substituted.det() / base;
    }
    Ok(x)
}

/// Cramer's rule on an `n x (n+1)` augmented system `[A | b]`.
pub fn cramer_augmented<T: Real>(aug: &Matrix<T>) -> Result<Vector<T>, LinAlgError> {
    cramer_augmented_with(aug, &Tolerances::default())
}

/// [`cramer_augmented`] with explicit [`Tolerances`].
pub fn cramer_augmented_with<T: Real>(
    aug: &Matrix<T>,
    tol: &Tolerances<T>,
) -> Result<Vector<T>, LinAlgError> {
    if aug.ncols() != aug.nrows() + 1 {
        return Err(LinAlgError::Shape(
            "augmented system must have shape n x (n+1)",
        ));
    }
    let n = aug.nrows();
    let a = aug.submatrix(0, 0, n - 1, n - 1)?;
    let b = aug.col(n);
    cramer_with(&a, &b, tol)
}
