//! Geometry primitives shared by the layout generator and canvas layer.

use serde::{Deserialize, Serialize};

/// A position on the map plane, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        debug_assert!(x.is_finite(), "x must be finite, got {x}");
        debug_assert!(y.is_finite(), "y must be finite, got {y}");
        Self { x, y }
    }

    /// Returns this point offset by (dx, dy).
    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// A width/height pair, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(
            width.is_finite() && width >= 0.0,
            "width must be non-negative and finite, got {width}"
        );
        debug_assert!(
            height.is_finite() && height >= 0.0,
            "height must be non-negative and finite, got {height}"
        );
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_offset() {
        let p = Point::new(10.0, 20.0).offset(5.0, -5.0);
        assert_eq!(p, Point::new(15.0, 15.0));
    }

    #[test]
    fn test_size_construction() {
        let s = Size::new(30.0, 45.0);
        assert_eq!((s.width, s.height), (30.0, 45.0));
    }
}
