//! Points, circles, and squares in the plane
#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::impl_display;
use crate::random::uniform_unchecked;
use crate::result::{Error, ErrorKind, Result};
use rand::Rng;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// The point (0, 0)
    #[inline]
    pub fn origin() -> Self {
        Point::new(0.0, 0.0)
    }

    /// Euclidean distance between `self` and `other`
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geometry::Point;
    /// let p = Point::new(3.0, 4.0);
    /// assert_eq!(p.distance_to(&Point::origin()), 5.0);
    /// ```
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<&Point> for String {
    fn from(p: &Point) -> String {
        format!("({}, {})", p.x, p.y)
    }
}

impl_display!(Point);

fn check_center(center: &Point) -> Result<()> {
    if center.x.is_finite() && center.y.is_finite() {
        Ok(())
    } else {
        let msg = format!("center must be finite, got {}", center);
        Err(Error::new(ErrorKind::InvalidConfiguration, &msg))
    }
}

fn check_length(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        let msg = format!("{} must be positive and finite, got {}", name, value);
        Err(Error::new(ErrorKind::InvalidConfiguration, &msg))
    }
}

/// A circle defined by its center and radius
///
/// # Example
///
/// Points on the boundary are inside.
///
/// ```
/// use mcpi::geometry::{Circle, Point};
///
/// let circle = Circle::new(Point::origin(), 1.0).unwrap();
///
/// assert!(circle.contains(&Point::new(0.5, 0.5)));
/// assert!(circle.contains(&Point::new(0.0, 1.0)));
/// assert!(!circle.contains(&Point::new(1.0, 1.0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a new circle. The center must be finite and the radius
    /// positive and finite.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        check_center(&center)?;
        check_length("radius", radius)?;
        Ok(Circle::new_unchecked(center, radius))
    }

    /// Creates a new Circle without checking whether the radius is valid.
    #[inline]
    pub fn new_unchecked(center: Point, radius: f64) -> Self {
        Circle { center, radius }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        crate::consts::PI * self.radius * self.radius
    }

    /// Returns `true` if `point` is no farther from the center than the
    /// radius
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.center.distance_to(point) <= self.radius
    }
}

impl From<&Circle> for String {
    fn from(c: &Circle) -> String {
        format!("Circle(center: {}, radius: {})", c.center, c.radius)
    }
}

impl_display!(Circle);

/// An axis-aligned square defined by its center and side length
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde1", serde(rename_all = "snake_case"))]
pub struct Square {
    center: Point,
    side: f64,
}

impl Square {
    /// Create a new square. The center must be finite, the side length
    /// positive and finite, and every edge of the square representable.
    pub fn new(center: Point, side: f64) -> Result<Self> {
        check_center(&center)?;
        check_length("side", side)?;

        let square = Square::new_unchecked(center, side);
        let (x_min, x_max, y_min, y_max) = square.bounds();
        let finite = [x_min, x_max, y_min, y_max, x_max - x_min, y_max - y_min]
            .iter()
            .all(|v| v.is_finite());
        if finite {
            Ok(square)
        } else {
            let msg = format!("{} does not have finite bounds", square);
            Err(Error::new(ErrorKind::InvalidConfiguration, &msg))
        }
    }

    /// Creates a new Square without checking whether the side is valid.
    #[inline]
    pub fn new_unchecked(center: Point, side: f64) -> Self {
        Square { center, side }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn area(&self) -> f64 {
        self.side * self.side
    }

    /// The sampling box `(x_min, x_max, y_min, y_max)`
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half = self.side / 2.0;
        (
            self.center.x - half,
            self.center.x + half,
            self.center.y - half,
            self.center.y + half,
        )
    }

    /// The largest circle that fits inside the square
    ///
    /// # Example
    ///
    /// ```
    /// # use mcpi::geometry::{Point, Square};
    /// let square = Square::new(Point::new(1.0, -1.0), 4.0).unwrap();
    /// let circle = square.inscribed_circle();
    ///
    /// assert_eq!(circle.center(), square.center());
    /// assert_eq!(circle.radius(), 2.0);
    /// ```
    pub fn inscribed_circle(&self) -> Circle {
        Circle::new_unchecked(self.center, self.side / 2.0)
    }

    /// Draw a point uniformly from the square, boundary included
    pub fn random_inside_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let (x_min, x_max, y_min, y_max) = self.bounds();
        let x = uniform_unchecked(rng, x_min, x_max);
        let y = uniform_unchecked(rng, y_min, y_max);
        Point::new(x, y)
    }
}

impl From<&Square> for String {
    fn from(s: &Square) -> String {
        format!("Square(center: {}, side: {})", s.center, s.side)
    }
}

impl_display!(Square);
