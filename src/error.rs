use thiserror::Error;

/// Errors from linear-algebra operations.
///
/// Returned by decomposition constructors ([`crate::Lu::new`],
/// [`crate::Qr::new`], [`crate::Svd::new`]), the direct solvers, the
/// iterative eigensolvers, and the derived matrix operations (`inverse`,
/// `pseudoinverse`, `rotation`, ...). The three kinds are structurally
/// distinct so a shape misuse can never be mistaken for a numerically
/// singular input or a convergence failure.
///
/// ```
/// use linmat::{LinAlgError, Matrix};
///
/// let singular = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.lu().unwrap_err(), LinAlgError::Singular);
///
/// let rect = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert!(matches!(rect.lu().unwrap_err(), LinAlgError::Shape(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinAlgError {
    /// Operand dimensions disagree with the operation's requirement.
    #[error("shape mismatch: {0}")]
    Shape(&'static str),
    /// Best available pivot or determinant magnitude fell below the
    /// singularity threshold.
    #[error("matrix is singular or nearly singular")]
    Singular,
    /// An iterative solver reached its iteration cap without converging.
    #[error("no convergence within {0} iterations")]
    IterationLimit(usize),
}
