use core::fmt::Debug;
use core::ops::{Add, Sub};

use num_traits::{Float, Zero};

/// Trait defined over generic points the curves are built from.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so implementing it mostly means wrapping.
/// The trait is kept minimal to make integration with other libraries easy.
pub trait Point: Add<Output = Self> + Sub<Output = Self> + Copy + PartialEq + Default + Debug {
    type Scalar: Float + Default + Debug;

    /// Number of coordinate axes
    const DIM: usize;

    /// Returns the component of the Point on its axis corresponding to index e.g. [0, 1] -> [x, y]
    fn axis(&self, index: usize) -> Self::Scalar;

    /// Multiplies every component by `factor`
    fn scale(self, factor: Self::Scalar) -> Self;

    /// Returns the squared L2 norm of the Point interpreted as a vector
    fn squared_length(&self) -> Self::Scalar {
        (0..Self::DIM).fold(Self::Scalar::zero(), |acc, i| {
            let a = self.axis(i);
            acc + a * a
        })
    }

    /// Returns the euclidean distance between the two Points self and other
    fn distance(&self, other: Self) -> Self::Scalar {
        (*self - other).squared_length().sqrt()
    }

    /// True if no component is NaN or infinite
    fn is_finite(&self) -> bool {
        (0..Self::DIM).all(|i| self.axis(i).is_finite())
    }
}
