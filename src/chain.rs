//! Chains of Catmull-Rom segments through an ordered sequence of control points.

use alloc::vec::Vec;

use log::{debug, trace, warn};

use super::*;

/// What to do with a window whose control points give an empty knot interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DegeneratePolicy {
    /// Abort the whole chain with the error
    #[default]
    Fail,
    /// Leave the window out of the curve and carry on with the next one.
    /// Non-finite control points still fail the chain.
    Skip,
}

/// Settings for sampling a [`CatmullRomChain`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainOptions {
    /// Number of samples taken from every window, must be at least 1
    pub samples_per_segment: usize,
    pub parameterization: Parameterization,
    pub on_degenerate: DegeneratePolicy,
}

impl Default for ChainOptions {
    fn default() -> Self {
        ChainOptions {
            samples_per_segment: DEFAULT_SAMPLES,
            parameterization: Parameterization::Centripetal,
            on_degenerate: DegeneratePolicy::Fail,
        }
    }
}

/// A curve through an ordered sequence of control points, made of one
/// [`CatmullRom`] segment per window of four consecutive points.
///
/// The first and the last control point are never part of the sampled curve,
/// they only set the direction in which it starts and ends. A sequence of
/// fewer than four points has no windows and samples to an empty curve.
///
/// # Examples
/// ```rust
/// use catrom::{CatmullRomChain, ChainOptions, Point2};
///
/// let points = [
///     Point2::new(24.0, 24.0),
///     Point2::new(25.0, 25.0),
///     Point2::new(125.0, 125.0),
///     Point2::new(250.0, 25.0),
///     Point2::new(251.0, 25.0),
/// ];
/// let options = ChainOptions {
///     samples_per_segment: 20,
///     ..Default::default()
/// };
/// let chain = CatmullRomChain::with_options(&points, options);
/// assert_eq!(chain.segment_count(), 2);
/// assert_eq!(chain.sample().unwrap().len(), 40);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatmullRomChain<'a, P>
where
    P: Point,
{
    control_points: &'a [P],
    options: ChainOptions,
}

impl<'a, P> CatmullRomChain<'a, P>
where
    P: Point,
{
    /// Create a chain with the default [`ChainOptions`]
    pub fn new(control_points: &'a [P]) -> Self {
        Self::with_options(control_points, ChainOptions::default())
    }

    pub fn with_options(control_points: &'a [P], options: ChainOptions) -> Self {
        CatmullRomChain {
            control_points,
            options,
        }
    }

    pub fn options(&self) -> &ChainOptions {
        &self.options
    }

    pub fn control_points(&self) -> &'a [P] {
        self.control_points
    }

    /// Return the number of windows, which is zero for fewer than four control points.
    pub fn segment_count(&self) -> usize {
        self.control_points.len().saturating_sub(3)
    }

    /// Iterate over the segments of all windows in order.
    /// Point indices in errors refer to the whole control point sequence.
    pub fn segments(&self) -> impl Iterator<Item = Result<CatmullRom<P>, CurveError>> + 'a {
        let control_points = self.control_points;
        let parameterization = self.options.parameterization;
        control_points
            .windows(4)
            .enumerate()
            .map(move |(start, w)| {
                CatmullRom::with_parameterization([w[0], w[1], w[2], w[3]], parameterization)
                    .map_err(|err| err.offset(start))
            })
    }

    /// Sample every window and concatenate the results in window order.
    /// Samples at window boundaries are neither merged nor deduplicated, so a
    /// chain without degenerate windows yields `samples_per_segment * segment_count()` points.
    ///
    /// # Errors
    /// - [`CurveError::InvalidSampleCount`] if `samples_per_segment` is zero, checked first
    /// - the first [`CurveError::DegenerateInput`] if the policy is [`DegeneratePolicy::Fail`]
    /// - the first [`CurveError::NonFiniteControlPoint`] whatever the policy
    pub fn sample(&self) -> Result<Vec<P>, CurveError> {
        let n_points = self.options.samples_per_segment;
        if n_points == 0 {
            return Err(CurveError::InvalidSampleCount);
        }

        let windows = self.segment_count();
        if windows == 0 {
            debug!(
                "{} control points are too few for a Catmull-Rom window, curve is empty",
                self.control_points.len()
            );
            return Ok(Vec::new());
        }
        debug!(
            "sampling {} windows over {} control points, {} samples each",
            windows,
            self.control_points.len(),
            n_points
        );

        let mut curve = Vec::with_capacity(windows * n_points);
        for (index, segment) in self.segments().enumerate() {
            let segment = match (segment, self.options.on_degenerate) {
                (Ok(segment), _) => segment,
                (Err(err @ CurveError::DegenerateInput { .. }), DegeneratePolicy::Skip) => {
                    warn!("skipping window {}: {}", index, err);
                    continue;
                }
                (Err(err), _) => return Err(err),
            };
            trace!("window {} knots {:?}", index, segment.knots().values());
            curve.extend(segment.sample(n_points)?);
        }
        Ok(curve)
    }
}

/// Sample a centripetal Catmull-Rom curve through `control_points`, taking `n_points`
/// samples per window of four consecutive points and concatenating them.
///
/// Returns an empty curve for fewer than four control points.
///
/// # Errors
/// - [`CurveError::InvalidSampleCount`] if `n_points` is zero, whatever the number of points
/// - [`CurveError::DegenerateInput`] for coincident consecutive points, aborting the whole chain
/// - [`CurveError::NonFiniteControlPoint`] if a coordinate is NaN or infinite
pub fn assemble<P: Point>(control_points: &[P], n_points: usize) -> Result<Vec<P>, CurveError> {
    let options = ChainOptions {
        samples_per_segment: n_points,
        ..ChainOptions::default()
    };
    CatmullRomChain::with_options(control_points, options).sample()
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn line(xs: &[f64]) -> Vec<Point2<f64>> {
        xs.iter().map(|&x| Point2::new(x, 0.0)).collect()
    }

    fn close(a: Point2<f64>, b: Point2<f64>, eps: f64) -> bool {
        a.distance(b) < eps
    }

    #[test]
    fn two_window_scenario() {
        let points: Vec<Point2<f64>> = vec![
            (24.0, 24.0).into(),
            (25.0, 25.0).into(),
            (125.0, 125.0).into(),
            (250.0, 25.0).into(),
            (251.0, 25.0).into(),
        ];
        let curve = assemble(&points, 100).unwrap();
        assert_eq!(curve.len(), 200);

        assert!(close(curve[0], Point2::new(25.0, 25.0), 1e-9));
        assert!(close(curve[99], Point2::new(125.0, 125.0), 1e-9));
        // the second window starts over at its own first inner point
        assert!(close(curve[100], Point2::new(125.0, 125.0), 1e-9));
        assert!(close(curve[199], Point2::new(250.0, 25.0), 1e-9));

        assert!(close(curve[50], Point2::new(64.31224404888506, 77.24859989546977), 1e-6));
        assert!(close(curve[150], Point2::new(200.08945633017584, 75.9580410028544), 1e-6));
        assert!(curve.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn chain_length_law() {
        for size in 0usize..12 {
            let xs: Vec<f64> = (0..size).map(|i| (i * i) as f64).collect();
            let points = line(&xs);
            for n in [1, 2, 7, 100] {
                let curve = assemble(&points, n).unwrap();
                assert_eq!(curve.len(), n * size.saturating_sub(3));
            }
        }
    }

    #[test]
    fn too_few_points_give_empty_curve() {
        let points = vec![Point2::new(0f64, 0f64), Point2::new(1.0, 1.0), Point2::new(2.0, 2.0)];
        assert_eq!(assemble(&points, 100), Ok(vec![]));
        assert_eq!(CatmullRomChain::new(&points).segment_count(), 0);
        assert_eq!(CatmullRomChain::new(&points).segments().count(), 0);
        assert_eq!(assemble::<Point2<f64>>(&[], 100), Ok(vec![]));
    }

    #[test]
    fn zero_samples_fail_before_point_count() {
        let points = line(&[0.0, 1.0, 2.0]);
        assert_eq!(assemble(&points, 0), Err(CurveError::InvalidSampleCount));
        let points = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(assemble(&points, 0), Err(CurveError::InvalidSampleCount));
    }

    #[test]
    fn concatenates_window_samples_in_order() {
        let points: Vec<Point2<f64>> = vec![
            (0.0, 1.77).into(),
            (1.1, -1.0).into(),
            (4.3, 3.0).into(),
            (3.2, -4.0).into(),
            (6.0, 0.5).into(),
            (8.0, 2.0).into(),
        ];
        let curve = assemble(&points, 33).unwrap();
        let expected: Vec<Point2<f64>> = points
            .windows(4)
            .flat_map(|w| evaluate(w[0], w[1], w[2], w[3], 33).unwrap())
            .collect();
        assert_eq!(curve, expected);
    }

    #[test]
    fn degenerate_window_fails_whole_chain() {
        let points = line(&[0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(assemble(&points, 10), Err(CurveError::DegenerateInput { index: 1 }));

        let errors: Vec<Option<CurveError>> =
            CatmullRomChain::new(&points).segments().map(|s| s.err()).collect();
        assert_eq!(
            errors,
            vec![
                Some(CurveError::DegenerateInput { index: 1 }),
                Some(CurveError::DegenerateInput { index: 1 }),
                None,
                None,
            ]
        );
    }

    #[test]
    fn degenerate_window_can_be_skipped() {
        let points = line(&[0.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        let options = ChainOptions {
            samples_per_segment: 10,
            on_degenerate: DegeneratePolicy::Skip,
            ..ChainOptions::default()
        };
        let curve = CatmullRomChain::with_options(&points, options).sample().unwrap();
        assert_eq!(curve.len(), 20);
        assert!(close(curve[0], Point2::new(2.0, 0.0), 1e-9));
        assert!(close(curve[19], Point2::new(4.0, 0.0), 1e-9));
        assert!(curve.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn non_finite_point_is_reported_by_sequence_index() {
        let mut points = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        points[4] = Point2::new(f64::INFINITY, 0.0);
        // window 1 is the first to contain point 4
        assert_eq!(
            assemble(&points, 5),
            Err(CurveError::NonFiniteControlPoint { index: 4 })
        );
    }

    #[test]
    fn skip_policy_still_fails_on_non_finite_point() {
        let mut points = line(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        points[2] = Point2::new(f64::NAN, 0.0);
        let options = ChainOptions {
            samples_per_segment: 5,
            on_degenerate: DegeneratePolicy::Skip,
            ..ChainOptions::default()
        };
        assert_eq!(
            CatmullRomChain::with_options(&points, options).sample(),
            Err(CurveError::NonFiniteControlPoint { index: 2 })
        );
    }

    #[test]
    fn default_options() {
        let options = ChainOptions::default();
        assert_eq!(options.samples_per_segment, 100);
        assert_eq!(options.parameterization, Parameterization::Centripetal);
        assert_eq!(options.on_degenerate, DegeneratePolicy::Fail);

        let points = line(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let chain = CatmullRomChain::new(&points);
        assert_eq!(chain.options(), &options);
        assert_eq!(chain.control_points().len(), 5);
        assert_eq!(chain.sample().unwrap().len(), 200);
    }

    #[test]
    fn uniform_chain_tolerates_coincident_points() {
        let points = line(&[0.0, 1.0, 1.0, 2.0, 3.0]);
        let options = ChainOptions {
            samples_per_segment: 8,
            parameterization: Parameterization::Uniform,
            ..ChainOptions::default()
        };
        let curve = CatmullRomChain::with_options(&points, options).sample().unwrap();
        assert_eq!(curve.len(), 16);
        assert!(curve.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn deterministic() {
        let points = line(&[0.0, 0.5, 2.0, 2.2, 7.0]);
        assert_eq!(assemble(&points, 50), assemble(&points, 50));
    }
}
