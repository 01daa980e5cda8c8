//! The float types curves and easings are generic over.

pub(crate) use num_traits::{Float, FloatConst};

use core::fmt::Debug;

/// `f32` or `f64`, with the handful of constants the easing formulas need.
pub trait Scalar: Float + FloatConst + Debug {
    const ZERO: Self;
    const HALF: Self;
    const ONE: Self;
    const TWO: Self;
    const FOUR: Self;
    const TEN: Self;

    /// Below this length a vector has no usable direction.
    const EPSILON: Self;

    fn value(v: f32) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty, $epsilon:expr) => {
        impl Scalar for $ty {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const FOUR: Self = 4.0;
            const TEN: Self = 10.0;
            const EPSILON: Self = $epsilon;

            #[inline]
            fn value(v: f32) -> Self {
                v as $ty
            }
        }
    };
}

impl_scalar!(f32, 1e-4);
impl_scalar!(f64, 1e-8);
