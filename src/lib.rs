//! Sampling of centripetal Catmull-Rom splines through ordered sequences of control points.
//!
//! A [`CatmullRom`] segment is defined by a window of four control points and covers the
//! curve between the inner two. A [`CatmullRomChain`] stitches one segment per window of
//! consecutive points together. The free functions [`evaluate`] and [`assemble`] cover the
//! common case of centripetal spacing (alpha = 0.5).
//!
//! All types are generic over the [`Point`] trait, [`Point2`] is provided for convenience.
//!
//! # Example
//! ```
//! use catrom::{assemble, Point, Point2};
//!
//! let points = [
//!     Point2::new(24.0, 24.0),
//!     Point2::new(25.0, 25.0),
//!     Point2::new(125.0, 125.0),
//!     Point2::new(250.0, 25.0),
//!     Point2::new(251.0, 25.0),
//! ];
//! let curve = assemble(&points, 100).unwrap();
//!
//! assert_eq!(curve.len(), 200);
//! assert!(curve[0].distance(Point2::new(25.0, 25.0)) < 1e-9);
//! assert!(curve[199].distance(Point2::new(250.0, 25.0)) < 1e-9);
//! ```
#![no_std]

extern crate alloc;

use tinyvec::ArrayVec;

pub mod catmull_rom;
pub mod chain;
pub mod error;
pub mod knots;
pub mod point;
pub mod point2;
pub mod spline;

pub use catmull_rom::{evaluate, CatmullRom};
pub use chain::{assemble, CatmullRomChain, ChainOptions, DegeneratePolicy};
pub use error::CurveError;
pub use knots::{Knots, Parameterization};
pub use point::Point;
pub use point2::Point2;
pub use spline::Spline;

/// Samples taken per segment unless configured otherwise
pub const DEFAULT_SAMPLES: usize = 100;

// tolerance for exact-arithmetic comparisons in tests
#[cfg(test)]
pub(crate) const EPSILON: f64 = 1e-9;
