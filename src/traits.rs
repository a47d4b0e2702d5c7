use core::fmt::{Debug, Display};
use core::str::FromStr;

use num_traits::{Float, NumAssign};

/// Trait for real scalars the engine operates on.
///
/// Blanket-implemented for `f32` and `f64`. Vectors, matrices,
/// decompositions, and solvers are all generic over `Real`. `Display`
/// and `FromStr` are required by the flat-text load/store routines in
/// [`crate::io`].
pub trait Real: Float + NumAssign + Debug + Display + FromStr + 'static {}

impl<T: Float + NumAssign + Debug + Display + FromStr + 'static> Real for T {}

/// Cast an `f64` constant into any `Real` type.
///
/// Infallible for the blanket impls (`f32`, `f64`).
#[inline]
pub(crate) fn real<T: Real>(x: f64) -> T {
    T::from(x).expect("constant must be representable as a real float")
}
