//! spline.rs
//! Trait for common abstractions over the curve types and the sampling helpers they share
use alloc::vec::Vec;

use num_traits::{Float, NumCast};

use super::{CurveError, Point};

pub trait Spline<P: Point> {
    /// The closed parameter interval the curve is sampled over
    fn domain(&self) -> (P::Scalar, P::Scalar);

    /// Evaluate the curve at parameter `t`
    fn eval(&self, t: P::Scalar) -> P;

    /// Evaluate `n_points` evenly spaced parameters covering the closed [`Spline::domain`],
    /// in increasing order. Both ends are sampled exactly if `n_points >= 2`,
    /// a single sample is taken at the start of the domain.
    ///
    /// # Errors
    /// [`CurveError::InvalidSampleCount`] if `n_points` is zero.
    fn sample(&self, n_points: usize) -> Result<Vec<P>, CurveError> {
        if n_points == 0 {
            return Err(CurveError::InvalidSampleCount);
        }
        let (start, end) = self.domain();
        Ok(linspace(start, end, n_points).map(|t| self.eval(t)).collect())
    }
}

/// `n` evenly spaced values from `start` to `end`, both included.
pub(crate) fn linspace<F: Float>(start: F, end: F, n: usize) -> impl Iterator<Item = F> {
    let last = n.saturating_sub(1);
    let step = if last == 0 {
        F::zero()
    } else {
        (end - start) / cast::<F>(last)
    };
    (0..n).map(move |i| {
        if i > 0 && i == last {
            end
        } else {
            start + step * cast::<F>(i)
        }
    })
}

// every usize is representable (if rounded) by a float
fn cast<F: Float>(n: usize) -> F {
    <F as NumCast>::from(n).unwrap_or_else(F::infinity)
}
