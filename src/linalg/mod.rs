pub(crate) mod eigen;
pub(crate) mod lu;
pub(crate) mod qr;
pub(crate) mod solve;
pub(crate) mod svd;

pub use eigen::{eigen_system, eigen_system_with, power_iteration, power_iteration_with, EigenPair};
pub use lu::Lu;
pub use qr::Qr;
pub use solve::{
    cramer, cramer_augmented, cramer_augmented_with, cramer_with, gaussian, gaussian_augmented,
    gaussian_augmented_with, gaussian_with,
};
pub use svd::Svd;

use crate::traits::{real, Real};

/// Numerical tuning knobs shared by the decompositions and iterative
/// solvers.
///
/// Every decomposition and solver has a plain entry point that uses
/// `Tolerances::default()` and a `*_with` / `with_tolerances` variant
/// taking an explicit value, so near-singular and non-converging paths
/// can be exercised deterministically in tests.
///
/// ```
/// use linmat::{Matrix, Tolerances};
///
/// // A pivot threshold loose enough to reject this well-conditioned
/// // matrix as "singular".
/// let tol = Tolerances { pivot: 10.0, ..Tolerances::default() };
/// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 1.0, 3.0]);
/// assert!(a.lu_with(&tol).is_err());
/// assert!(a.lu().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T> {
    /// Pivots (and base determinants) below this magnitude are treated
    /// as zero.
    pub pivot: T,
    /// Convergence tolerance for the iterative eigensolvers.
    pub convergence: T,
    /// Hard cap on eigensolver iterations; hitting it yields
    /// [`crate::LinAlgError::IterationLimit`].
    pub max_iterations: usize,
}

impl<T: Real> Default for Tolerances<T> {
    fn default() -> Self {
        Self {
            pivot: real(1e-6),
            convergence: real(1e-3),
            max_iterations: 50_000,
        }
    }
}
