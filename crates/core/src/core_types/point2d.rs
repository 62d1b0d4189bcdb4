//! Planar point with `f64` coordinates
//!
//! Arithmetic is componentwise and follows IEEE-754: dividing by zero yields
//! infinities or NaN rather than an error. Equality is exact on both
//! components with no tolerance, so `Point2D` is `PartialEq` but not `Eq`.
//!
//! ```
//! use geometry_core::Point2D;
//!
//! let origin = Point2D::ORIGIN;
//! let corner = Point2D::new(3.0, 4.0);
//! assert_eq!(Point2D::distance_between(&origin, &corner), 5.0);
//! assert_eq!(origin.calculate_distance(&corner), 5.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use super::error::{ensure_finite, ensure_nonzero, DomainError};

/// 2D point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// The point (0, 0)
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Create a point. Coordinates are not validated.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// Create a point, rejecting NaN or infinite coordinates.
    ///
    /// # Errors
    /// Returns [`DomainError::NonFinite`] naming the first non-finite coordinate.
    pub fn try_new(x: f64, y: f64) -> Result<Self, DomainError> {
        Ok(Point2D {
            x: ensure_finite("x", x)?,
            y: ensure_finite("y", y)?,
        })
    }

    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Euclidean distance from this point to `target`.
    #[inline]
    #[must_use]
    pub fn calculate_distance(&self, target: &Point2D) -> f64 {
        Point2D::distance_between(self, target)
    }

    /// Euclidean distance between `lhs` and `rhs`.
    #[must_use]
    pub fn distance_between(lhs: &Point2D, rhs: &Point2D) -> f64 {
        let dx = lhs.x - rhs.x;
        let dy = lhs.y - rhs.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Divide both coordinates by `scalar`, rejecting a zero or non-finite divisor.
    ///
    /// # Errors
    /// - [`DomainError::NonFinite`] if `scalar` is NaN or infinite
    /// - [`DomainError::ZeroDivisor`] if `scalar` is zero
    pub fn try_div(self, scalar: f64) -> Result<Self, DomainError> {
        let scalar = ensure_nonzero(ensure_finite("scalar", scalar)?)?;
        Ok(self / scalar)
    }
}

impl Add for Point2D {
    type Output = Point2D;
    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;
    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point2D {
    fn sub_assign(&mut self, rhs: Point2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;
    fn mul(self, rhs: f64) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;
    fn div(self, rhs: f64) -> Point2D {
        Point2D::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// nalgebra interop
#[cfg(feature = "nalgebra")]
impl From<Point2D> for nalgebra::Point2<f64> {
    fn from(p: Point2D) -> Self {
        nalgebra::Point2::new(p.x, p.y)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Point2<f64>> for Point2D {
    fn from(p: nalgebra::Point2<f64>) -> Self {
        Point2D::new(p.x, p.y)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Point2D> for nalgebra::Vector2<f64> {
    fn from(p: Point2D) -> Self {
        nalgebra::Vector2::new(p.x, p.y)
    }
}
