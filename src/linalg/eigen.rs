//! Iterative eigensolvers: power iteration for the dominant eigenpair
//! and the (unshifted) QR algorithm for the full eigensystem.

use crate::error::LinAlgError;
use crate::linalg::{Qr, Tolerances};
use crate::matrix::Matrix;
use crate::traits::Real;
use crate::vector::Vector;

/// One eigenvalue bound to one eigenvector.
///
/// The vector is an owned copy, never shared with the matrix or solver
/// that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenPair<T> {
    /// The eigenvalue.
    pub value: T,
    /// The associated eigenvector, unit-normalized.
    pub vector: Vector<T>,
}

/// Dominant eigenpair by power iteration, with default [`Tolerances`].
///
/// Starting from an all-ones vector, repeatedly multiplies by the
/// matrix and rescales by the largest-magnitude component; that
/// component's value converges to the dominant eigenvalue. Converges
/// when consecutive estimates differ by less than the convergence
/// tolerance; returns [`LinAlgError::IterationLimit`] at the cap.
///
/// ```
/// use linmat::{power_iteration, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
/// let pair = power_iteration(&a).unwrap();
/// // Dominant eigenvalue is (5 + sqrt(5)) / 2
/// assert!((pair.value - 3.618).abs() < 1e-2);
/// ```
pub fn power_iteration<T: Real>(a: &Matrix<T>) -> Result<EigenPair<T>, LinAlgError> {
    power_iteration_with(a, &Tolerances::default())
}

/// [`power_iteration`] with explicit [`Tolerances`].
pub fn power_iteration_with<T: Real>(
    a: &Matrix<T>,
    tol: &Tolerances<T>,
) -> Result<EigenPair<T>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::Shape("power iteration requires a square matrix"));
    }
    let n = a.nrows();
    let mut x = Vector::<T>::ones(n);
    let mut prev: Option<T> = None;

    for _ in 0..tol.max_iterations {
        let y = a * &x;

        // Largest-magnitude component sets the scale
        let mut k = 0;
        for i in 1..n {
            if y[i].abs() > y[k].abs() {
                k = i;
            }
        }
        let estimate = y[k];
        if estimate.abs() < tol.pivot {
            // The matrix collapsed the iterate; no dominant direction.
            return Err(LinAlgError::Singular);
        }

        x = &y * (T::one() / estimate);

        if let Some(p) = prev {
            if (estimate - p).abs() < tol.convergence {
                return Ok(EigenPair {
                    value: estimate,
                    vector: x.normalized(),
                });
            }
        }
        prev = Some(estimate);
    }

    Err(LinAlgError::IterationLimit(tol.max_iterations))
}

/// Full eigensystem by the unshifted QR algorithm, with default
/// [`Tolerances`].
///
/// Iterates `A ← R·Q` until the orthogonal factor is within tolerance
/// of a signed permutation of the identity; the converged product's
/// diagonal carries the eigenvalues. Each eigenvector is then recovered
/// from the null space of the shifted matrix `A − λI` by seeded
/// back-substitution. Best-effort for repeated or tightly clustered
/// eigenvalues.
///
/// ```
/// use linmat::{eigen_system, Matrix};
///
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 3.0]);
/// let pairs = eigen_system(&a).unwrap();
/// let mut values: Vec<f64> = pairs.iter().map(|p| p.value).collect();
/// values.sort_by(|a, b| a.partial_cmp(b).unwrap());
/// assert!((values[0] - 2.0).abs() < 1e-6);
/// assert!((values[1] - 3.0).abs() < 1e-6);
/// ```
pub fn eigen_system<T: Real>(a: &Matrix<T>) -> Result<Vec<EigenPair<T>>, LinAlgError> {
    eigen_system_with(a, &Tolerances::default())
}

/// [`eigen_system`] with explicit [`Tolerances`].
pub fn eigen_system_with<T: Real>(
    a: &Matrix<T>,
    tol: &Tolerances<T>,
) -> Result<Vec<EigenPair<T>>, LinAlgError> {
    if !a.is_square() {
        return Err(LinAlgError::Shape("eigen system requires a square matrix"));
    }
    let n = a.nrows();

    let mut ak = a.clone();
    let mut converged = false;
    for _ in 0..tol.max_iterations {
        let qr = Qr::with_tolerances(&ak, tol)?;
        ak = qr.r() * qr.q();
        if is_signed_permutation(qr.q(), tol.convergence) {
            converged = true;
            break;
        }
    }
    if !converged {
        return Err(LinAlgError::IterationLimit(tol.max_iterations));
    }

    let mut pairs: Vec<EigenPair<T>> = Vec::with_capacity(n);
    for i in 0..n {
        let value = ak[(i, i)];
        // k-th member of a cluster of (numerically) equal eigenvalues;
        // steers the recovery toward a distinct basis vector per member.
        let occurrence = pairs
            .iter()
            .filter(|p| (p.value - value).abs() <= tol.convergence)
            .count();
        let vector = recover_eigenvector(a, value, occurrence, tol);
        pairs.push(EigenPair { value, vector });
    }
    Ok(pairs)
}

/// Whether every entry of `q` is within `tol` of 0 or ±1, i.e. the
/// matrix is (numerically) a signed permutation of the identity.
fn is_signed_permutation<T: Real>(q: &Matrix<T>, tol: T) -> bool {
    for x in q.iter() {
        let m = x.abs();
        if m > tol && (m - T::one()).abs() > tol {
            return false;
        }
    }
    true
}

/// Recover an eigenvector for `value` from the null space of
/// `A − λI`.
///
/// The shifted matrix is reduced to upper-triangular form with partial
/// pivoting (row operations preserve the null space of a homogeneous
/// system), then back-substituted with the right-hand side implied by
/// seeding a free component: the position with the
/// `occurrence`-smallest pivot magnitude, so a repeated eigenvalue's
/// members spread across the degenerate subspace instead of collapsing
/// onto one vector. The seed takes the shifted matrix's trace, bounded
/// into a safe range so it can never be exactly zero; its magnitude
/// washes out in the final normalization.
fn recover_eigenvector<T: Real>(
    a: &Matrix<T>,
    value: T,
    occurrence: usize,
    tol: &Tolerances<T>,
) -> Vector<T> {
    let n = a.nrows();
    let mut shifted = a.clone();
    for i in 0..n {
        shifted[(i, i)] -= value;
    }

    let trace = shifted.trace();

    // Triangularize with partial pivoting; zero columns are skipped
    // (nothing to eliminate).
    for col in 0..n {
        let mut max_row = col;
        let mut max_val = shifted[(col, col)].abs();
        for row in (col + 1)..n {
            let val = shifted[(row, col)].abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }
        if max_val < T::epsilon() {
            continue;
        }
        shifted.swap_rows(col, max_row);

        let pivot = shifted[(col, col)];
        for row in (col + 1)..n {
            let factor = shifted[(row, col)] / pivot;
            for j in col..n {
                let val = shifted[(col, j)];
                shifted[(row, j)] -= factor * val;
            }
        }
    }

    // Diagonal positions ranked by pivot magnitude; an exact eigenvalue
    // drives at least one to zero. The free variable is the
    // occurrence-th smallest (stable sort keeps ties in index order).
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        shifted[(i, i)]
            .abs()
            .partial_cmp(&shifted[(j, j)].abs())
            .unwrap_or(core::cmp::Ordering::Equal)
    });
    let free = order[occurrence.min(n - 1)];

    // Seed from the shifted trace, bounded into [convergence, 1/convergence]
    // so the start value is neither zero nor extreme.
    let lo = tol.convergence;
    let hi = T::one() / tol.convergence;
    let seed = if trace.abs() < lo {
        T::one()
    } else if trace.abs() > hi {
        trace.signum() * hi
    } else {
        trace
    };

    let mut x = Vector::zeros(n);
    x[free] = seed;
    for i in (0..n).rev() {
        if i == free {
            continue;
        }
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += shifted[(i, j)] * x[j];
        }
        let mut pivot = shifted[(i, i)];
        if pivot.abs() < tol.pivot {
            pivot = pivot.signum() * tol.pivot;
        }
        x[i] = -sum / pivot;
    }

    x.normalize();
    x
}

/// Convenience methods on square matrices.
impl<T: Real> Matrix<T> {
    /// Dominant eigenpair by power iteration.
    pub fn dominant_eigen(&self) -> Result<EigenPair<T>, LinAlgError> {
        power_iteration(self)
    }

    /// Full eigensystem by the QR algorithm.
    pub fn eigen_system(&self) -> Result<Vec<EigenPair<T>>, LinAlgError> {
        eigen_system(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Residual `‖A·v − λ·v‖` of an eigenpair.
    fn residual(a: &Matrix<f64>, pair: &EigenPair<f64>) -> f64 {
        let av = a * &pair.vector;
        let lv = &pair.vector * pair.value;
        (&av - &lv).norm()
    }

    fn tight() -> Tolerances<f64> {
        Tolerances {
            convergence: 1e-10,
            ..Tolerances::default()
        }
    }

    #[test]
    fn power_iteration_dominant_value() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
        let pair = power_iteration_with(&a, &tight()).unwrap();
        let expected = (5.0 + 5.0_f64.sqrt()) / 2.0;
        assert!((pair.value - expected).abs() < 1e-6);
        assert!((pair.vector.norm() - 1.0).abs() < 1e-10);
        assert!(residual(&a, &pair) < 1e-4);
    }

    #[test]
    fn power_iteration_shape_error() {
        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            power_iteration(&rect).unwrap_err(),
            LinAlgError::Shape(_)
        ));
    }

    #[test]
    fn power_iteration_iteration_limit() {
        // Rotation matrix: complex eigenvalues, the real estimate never
        // settles.
        let rot = Matrix::from_rows(2, 2, &[0.0_f64, -1.0, 1.0, 0.0]);
        let tol = Tolerances {
            convergence: 1e-12,
            max_iterations: 100,
            ..Tolerances::default()
        };
        assert_eq!(
            power_iteration_with(&rot, &tol).unwrap_err(),
            LinAlgError::IterationLimit(100)
        );
    }

    #[test]
    fn eigen_system_diagonal() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 3.0]);
        let mut pairs = eigen_system(&a).unwrap();
        pairs.sort_by(|p, q| p.value.partial_cmp(&q.value).unwrap());

        assert!((pairs[0].value - 2.0).abs() < 1e-9);
        assert!((pairs[1].value - 3.0).abs() < 1e-9);

        // Eigenvectors aligned to the coordinate axes, unit norm
        assert!((pairs[0].vector[0].abs() - 1.0).abs() < 1e-9);
        assert!(pairs[0].vector[1].abs() < 1e-9);
        assert!((pairs[1].vector[1].abs() - 1.0).abs() < 1e-9);
        assert!(pairs[1].vector[0].abs() < 1e-9);
    }

    #[test]
    fn eigen_system_symmetric_2x2() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
        let pairs = eigen_system_with(&a, &tight()).unwrap();

        let mut values: Vec<f64> = pairs.iter().map(|p| p.value).collect();
        values.sort_by(|x, y| x.partial_cmp(y).unwrap());
        let lo = (5.0 - 5.0_f64.sqrt()) / 2.0;
        let hi = (5.0 + 5.0_f64.sqrt()) / 2.0;
        assert!((values[0] - lo).abs() < 1e-6);
        assert!((values[1] - hi).abs() < 1e-6);

        for pair in &pairs {
            assert!((pair.vector.norm() - 1.0).abs() < 1e-9);
            assert!(residual(&a, pair) < 1e-4, "residual {}", residual(&a, pair));
        }
    }

    #[test]
    fn eigen_system_symmetric_3x3() {
        // Eigenvalues 1, 2, 4 (symmetric, well separated)
        let a = Matrix::from_rows(3, 3, &[2.0_f64, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0]);
        let pairs = eigen_system_with(&a, &tight()).unwrap();

        let mut values: Vec<f64> = pairs.iter().map(|p| p.value).collect();
        values.sort_by(|x, y| x.partial_cmp(y).unwrap());
        assert!((values[0] - 1.0).abs() < 1e-6);
        assert!((values[1] - 2.0).abs() < 1e-6);
        assert!((values[2] - 4.0).abs() < 1e-6);

        for pair in &pairs {
            assert!(residual(&a, pair) < 1e-4, "residual {}", residual(&a, pair));
        }
    }

    #[test]
    fn eigen_system_iteration_limit() {
        // 45° rotation: eigenvalues are complex, each QR step
        // reproduces the same rotation and the orthogonal factor never
        // approaches a signed permutation.
        let c = core::f64::consts::FRAC_1_SQRT_2;
        let rot = Matrix::from_rows(2, 2, &[c, -c, c, c]);
        let tol = Tolerances {
            max_iterations: 50,
            ..Tolerances::default()
        };
        assert_eq!(
            eigen_system_with(&rot, &tol).unwrap_err(),
            LinAlgError::IterationLimit(50)
        );
    }

    #[test]
    fn eigen_system_shape_error() {
        let rect = Matrix::<f64>::zeros(2, 3);
        assert!(matches!(
            eigen_system(&rect).unwrap_err(),
            LinAlgError::Shape(_)
        ));
    }

    #[test]
    fn eigen_pair_vector_is_owned() {
        let a = Matrix::from_rows(2, 2, &[2.0_f64, 0.0, 0.0, 3.0]);
        let pairs = eigen_system(&a).unwrap();
        let mut copy = pairs[0].vector.clone();
        copy[0] = 99.0;
        assert_ne!(copy[0], pairs[0].vector[0]);
    }
}
