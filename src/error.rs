use core::fmt;

/// Reasons a segment or chain cannot be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Two consecutive control points give a zero length knot interval.
    /// `index` is the first point of the pair, relative to the evaluated input.
    DegenerateInput { index: usize },
    /// A control point has a NaN or infinite coordinate.
    NonFiniteControlPoint { index: usize },
    /// The requested number of samples per segment is zero.
    InvalidSampleCount,
}

impl CurveError {
    /// Shift the point index by `offset`, used to report a window's error
    /// relative to the whole control point sequence.
    pub(crate) fn offset(self, offset: usize) -> Self {
        match self {
            CurveError::DegenerateInput { index } => CurveError::DegenerateInput {
                index: index + offset,
            },
            CurveError::NonFiniteControlPoint { index } => CurveError::NonFiniteControlPoint {
                index: index + offset,
            },
            CurveError::InvalidSampleCount => CurveError::InvalidSampleCount,
        }
    }
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::DegenerateInput { index } => write!(
                f,
                "control points {} and {} produce an empty knot interval",
                index,
                index + 1
            ),
            CurveError::NonFiniteControlPoint { index } => {
                write!(f, "control point {} has a non-finite coordinate", index)
            }
            CurveError::InvalidSampleCount => write!(f, "sample count must be at least 1"),
        }
    }
}

impl core::error::Error for CurveError {}
