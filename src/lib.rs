//! # linmat
//!
//! Dense real linear algebra: matrix/vector primitives, LU and Givens-QR
//! factorizations, direct solvers, iterative eigensolvers, and an
//! eigendecomposition-based SVD.
//!
//! ## Quick start
//!
//! ```
//! use linmat::{Matrix, Vector};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::from_rows(3, 3, &[
//!     2.0_f64, 1.0, -1.0,
//!     -3.0, -1.0, 2.0,
//!     -2.0, 1.0, 2.0,
//! ]);
//! let b = Vector::from_slice(&[8.0, -11.0, -3.0]);
//! let x = a.solve(&b).unwrap(); // x = [2, 3, -1]
//! assert!((x[0] - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`vector`] — [`Vector<T>`]: dense real vector with dot/cross
//!   products, norms, in-place `normalize`, inclusive sub-ranges, and
//!   zero-padding resize.
//!
//! - [`matrix`] — [`Matrix<T>`]: row-major dense matrix with the full
//!   arithmetic operator set, transpose, inclusive sub-blocks, resize,
//!   determinants (elimination default, cofactor expansion for small
//!   orders), minors/cofactors/adjugate, LU-backed `inverse`,
//!   symmetry/orthogonality checks, and a Rodrigues rotation builder.
//!
//! - [`linalg`] — decompositions and solvers: [`Lu`] (partial
//!   pivoting), [`Qr`] (Givens rotations), [`gaussian`]/[`cramer`]
//!   direct solvers, [`power_iteration`]/[`eigen_system`]
//!   eigensolvers, and [`Svd`] with `pseudoinverse` and
//!   `nearest_orthogonal` derived from it. All thresholds and
//!   iteration caps live in [`Tolerances`].
//!
//! - [`io`] — flat-text load/store for vectors and matrices.
//!
//! ## Error handling
//!
//! Fallible operations return [`LinAlgError`], which keeps shape
//! misuse, numerical singularity, and iteration-limit failures
//! structurally distinct. Arithmetic operators panic on dimension
//! mismatch, like any out-of-bounds indexing.
//!
//! ## Concurrency
//!
//! Everything is synchronous and single-threaded. Values own their
//! storage (`Vec`), decompositions defensively copy their input, and
//! nothing synchronizes internally; share across threads by cloning or
//! with external synchronization.

pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use error::LinAlgError;
pub use io::ReadError;
pub use linalg::{
    cramer, cramer_augmented, cramer_augmented_with, cramer_with, eigen_system, eigen_system_with,
    gaussian, gaussian_augmented, gaussian_augmented_with, gaussian_with, power_iteration,
    power_iteration_with, EigenPair, Lu, Qr, Svd, Tolerances,
};
pub use matrix::Matrix;
pub use traits::Real;
pub use vector::Vector;
