use alloc::vec::Vec;

use super::*;
use crate::knots::Knots;

/// Knot index pairs `(a, b)` spanned by each blend of the evaluation pyramid, level by level.
/// Level one blends neighbouring control points, every further level blends
/// neighbouring results of the previous one.
const PYRAMID: [&[(usize, usize)]; 3] = [&[(0, 1), (1, 2), (2, 3)], &[(0, 2), (1, 3)], &[(1, 2)]];

/// A single Catmull-Rom segment defined by a window of four control points.
/// The curve runs from the second to the third control point, the outer two
/// only steer the tangents at both ends.
///
/// Points are evaluated with the Barry-Goldman pyramid: three levels of affine
/// blends weighted by the position of `t` within the knot intervals.
///
/// # Examples
/// ```rust
/// use catrom::{CatmullRom, Point, Point2, Spline};
///
/// let segment = CatmullRom::new([
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
/// ])
/// .unwrap();
///
/// let samples = segment.sample(10).unwrap();
/// assert_eq!(samples.len(), 10);
/// assert!(samples[0].distance(Point2::new(1.0, 0.0)) < 1e-12);
/// assert!(samples[9].distance(Point2::new(1.0, 1.0)) < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatmullRom<P>
where
    P: Point,
{
    control_points: [P; 4],
    knots: Knots<P::Scalar>,
}

impl<P> Spline<P> for CatmullRom<P>
where
    P: Point,
{
    fn domain(&self) -> (P::Scalar, P::Scalar) {
        self.knots.domain()
    }

    fn eval(&self, t: P::Scalar) -> P {
        self.eval(t)
    }
}

impl<P> CatmullRom<P>
where
    P: Point,
{
    /// Create a centripetal Catmull-Rom segment.
    ///
    /// # Errors
    /// See [`Knots::new`].
    pub fn new(control_points: [P; 4]) -> Result<Self, CurveError> {
        Self::with_parameterization(control_points, Parameterization::Centripetal)
    }

    /// Create a segment with the given knot spacing.
    pub fn with_parameterization(
        control_points: [P; 4],
        parameterization: Parameterization,
    ) -> Result<Self, CurveError> {
        let knots = Knots::new(&control_points, parameterization)?;
        Ok(CatmullRom {
            control_points,
            knots,
        })
    }

    pub fn control_points(&self) -> [P; 4] {
        self.control_points
    }

    pub fn knots(&self) -> Knots<P::Scalar> {
        self.knots
    }

    /// Evaluate the segment at `t`. The visible part of the curve lies in
    /// [`Spline::domain`], values outside of it extrapolate the same cubic.
    pub fn eval(&self, t: P::Scalar) -> P {
        let mut level: ArrayVec<[P; 4]> = ArrayVec::from(self.control_points);
        for spans in PYRAMID.iter() {
            level = level
                .windows(2)
                .zip(spans.iter())
                .map(|(pair, &(a, b))| self.blend(pair[0], pair[1], a, b, t))
                .collect();
        }
        level[0]
    }

    /// Affine interpolation between `qa` at knot `a` and `qb` at knot `b`
    fn blend(&self, qa: P, qb: P, a: usize, b: usize, t: P::Scalar) -> P {
        let (ta, tb) = (self.knots[a], self.knots[b]);
        let width = tb - ta;
        qa.scale((tb - t) / width) + qb.scale((t - ta) / width)
    }
}

/// Sample `n_points` points of the centripetal Catmull-Rom segment between `p1` and `p2`,
/// with `p0` and `p3` shaping the tangents at either end.
///
/// The samples are evenly spaced in the knot parameter over the closed interval `[t1, t2]`,
/// so for `n_points >= 2` the first sample is `p1` and the last one is `p2`.
///
/// # Errors
/// - [`CurveError::InvalidSampleCount`] if `n_points` is zero
/// - [`CurveError::DegenerateInput`] if two consecutive points coincide
/// - [`CurveError::NonFiniteControlPoint`] if a coordinate is NaN or infinite
pub fn evaluate<P: Point>(
    p0: P,
    p1: P,
    p2: P,
    p3: P,
    n_points: usize,
) -> Result<Vec<P>, CurveError> {
    if n_points == 0 {
        return Err(CurveError::InvalidSampleCount);
    }
    CatmullRom::new([p0, p1, p2, p3])?.sample(n_points)
}
