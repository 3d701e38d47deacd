//! Knot parameters of a four point Catmull-Rom window.

use core::ops::Index;

use num_traits::Float;

use crate::error::CurveError;
use crate::point::Point;

/// How the knot spacing follows the distance between consecutive control points.
/// The spacing between knots `t_i` and `t_j` is `|P_j - P_i|^alpha`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Parameterization {
    /// alpha = 0, equally spaced knots (the classic Catmull-Rom spline)
    Uniform,
    /// alpha = 0.5, avoids cusps and self-intersections within a segment
    #[default]
    Centripetal,
    /// alpha = 1, knots spaced by chord length
    Chordal,
}

impl Parameterization {
    /// Knot interval for two control points `distance` apart.
    pub fn spacing<F: Float>(&self, distance: F) -> F {
        match self {
            Parameterization::Uniform => F::one(),
            Parameterization::Centripetal => distance.sqrt(),
            Parameterization::Chordal => distance,
        }
    }
}

/// The knots `t0 < t1 < t2 < t3` assigned to the four control points of a window, with `t0 = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Knots<F>([F; 4]);

impl<F: Float> Knots<F> {
    /// Accumulate the knot spacing of `parameterization` along the window.
    ///
    /// # Errors
    /// [`CurveError::NonFiniteControlPoint`] if a coordinate is NaN or infinite and
    /// [`CurveError::DegenerateInput`] if a knot does not strictly exceed its predecessor,
    /// which happens for coincident consecutive points unless the spacing is uniform, or
    /// for an interval lost to rounding against a much larger knot.
    pub fn new<P>(points: &[P; 4], parameterization: Parameterization) -> Result<Self, CurveError>
    where
        P: Point<Scalar = F>,
    {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(CurveError::NonFiniteControlPoint { index });
        }

        let mut knots = [F::zero(); 4];
        for j in 1..knots.len() {
            let interval = parameterization.spacing(points[j - 1].distance(points[j]));
            let knot = knots[j - 1] + interval;
            // an interval too small to move the knot is as empty as a zero one,
            // overflow to infinity is rejected as well
            if !(knot > knots[j - 1] && knot.is_finite()) {
                return Err(CurveError::DegenerateInput { index: j - 1 });
            }
            knots[j] = knot;
        }
        Ok(Knots(knots))
    }

    pub fn values(&self) -> [F; 4] {
        self.0
    }

    /// The parameter range `[t1, t2]` covering the curve between the two inner control points
    pub fn domain(&self) -> (F, F) {
        (self.0[1], self.0[2])
    }
}

impl<F> Index<usize> for Knots<F> {
    type Output = F;

    fn index(&self, index: usize) -> &F {
        &self.0[index]
    }
}
