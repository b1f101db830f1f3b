//! Bounding box type for the diagram boundary rectangle

use super::Vector2;
use std::fmt;

/// 2D axis-aligned bounding box
///
/// The mesh stores the builder-supplied boundary as origin + size and
/// assembles it into this type on demand; clipping against it is the
/// builder's job, the mesh only records it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum point (lower-left corner)
    pub min: Vector2,
    /// Maximum point (upper-right corner)
    pub max: Vector2,
}

impl BoundingBox2D {
    /// Create a new bounding box from min and max points
    pub fn new(min: Vector2, max: Vector2) -> Self {
        BoundingBox2D { min, max }
    }

    /// Create a bounding box from an origin and a size extent
    pub fn from_origin_size(origin: Vector2, size: Vector2) -> Self {
        BoundingBox2D {
            min: origin,
            max: origin + size,
        }
    }

    /// Create a bounding box that contains all given points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = BoundingBox2D::new(*first, *first);
        for point in points.iter().skip(1) {
            bounds.expand_to_include(*point);
        }
        Some(bounds)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Get the size extent (width, height)
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Vector2 {
        self.min.midpoint(&self.max)
    }

    /// The four corners in counterclockwise order, starting lower-left
    pub fn corners(&self) -> [Vector2; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Check if this bounding box contains a point (boundary inclusive)
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Vector2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

impl fmt::Display for BoundingBox2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let b = BoundingBox2D::from_origin_size(Vector2::new(1.0, 2.0), Vector2::new(10.0, 20.0));
        assert_eq!(b.min, Vector2::new(1.0, 2.0));
        assert_eq!(b.max, Vector2::new(11.0, 22.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 20.0);
        assert_eq!(b.size(), Vector2::new(10.0, 20.0));
    }

    #[test]
    fn test_from_points() {
        let points = [
            Vector2::new(3.0, 1.0),
            Vector2::new(-2.0, 5.0),
            Vector2::new(0.0, 0.0),
        ];
        let b = BoundingBox2D::from_points(&points).unwrap();
        assert_eq!(b.min, Vector2::new(-2.0, 0.0));
        assert_eq!(b.max, Vector2::new(3.0, 5.0));

        assert!(BoundingBox2D::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let b = BoundingBox2D::new(Vector2::ZERO, Vector2::new(10.0, 10.0));
        assert!(b.contains(Vector2::new(5.0, 5.0)));
        assert!(b.contains(Vector2::new(0.0, 10.0))); // Boundary inclusive
        assert!(!b.contains(Vector2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_corners_winding() {
        let b = BoundingBox2D::new(Vector2::ZERO, Vector2::new(2.0, 1.0));
        let c = b.corners();
        assert_eq!(c[0], Vector2::new(0.0, 0.0));
        assert_eq!(c[1], Vector2::new(2.0, 0.0));
        assert_eq!(c[2], Vector2::new(2.0, 1.0));
        assert_eq!(c[3], Vector2::new(0.0, 1.0));
    }
}
