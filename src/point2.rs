use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// Immutable 2D point, the value type the curves are usually sampled into.
///
/// Converts from and into `(x, y)` tuples, which is what most plotting
/// and drawing backends consume.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
    const DIM: usize = 2;

    fn axis(&self, index: usize) -> T {
        [self.x, self.y][index]
    }

    fn scale(self, factor: T) -> Self {
        self * factor
    }

    fn distance(&self, other: Self) -> T {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let p = Point2::new(1.5f64, -2.0);
        let q = Point2::new(0.5f64, 4.0);
        assert_eq!(p + q, Point2::new(2.0, 2.0));
        assert_eq!(p - q, Point2::new(1.0, -6.0));
        assert_eq!(p * 2.0, Point2::new(3.0, -4.0));
        assert_eq!(p.scale(-1.0), Point2::new(-1.5, 2.0));
    }

    #[test]
    fn tuple_conversion() {
        let p: Point2<f64> = (25.0, 125.0).into();
        assert_eq!(p.axis(0), 25.0);
        assert_eq!(p.axis(1), 125.0);
        let (x, y): (f64, f64) = p.into();
        assert_eq!((x, y), (25.0, 125.0));
        assert_eq!(Point2::from([1f32, 2f32]), Point2::new(1.0, 2.0));
    }

    #[test]
    fn hypot_matches_generic_distance() {
        let p = Point2::new(24f64, 24f64);
        let q = Point2::new(125f64, 125f64);
        let generic = (p - q).squared_length().sqrt();
        assert!((p.distance(q) - generic).abs() < crate::EPSILON);
    }
}
