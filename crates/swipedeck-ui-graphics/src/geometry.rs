//! Geometric primitives: Point, Size, Rect, GraphicsLayer

use std::ops::{Add, Mul, Neg, Sub};

/// A position or offset in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self::from_origin_size(Point::ZERO, size)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Per-card render transform, applied around the card's center.
///
/// Rotation is in degrees; positive values turn clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct GraphicsLayer {
    pub translation_x: f32,
    pub translation_y: f32,
    pub rotation_z: f32,
}

impl GraphicsLayer {
    pub fn translation(offset: Point) -> Self {
        Self {
            translation_x: offset.x,
            translation_y: offset.y,
            rotation_z: 0.0,
        }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_z = degrees;
        self
    }

    pub fn translation_offset(&self) -> Point {
        Point::new(self.translation_x, self.translation_y)
    }

    pub fn is_identity(&self) -> bool {
        self.translation_x == 0.0 && self.translation_y == 0.0 && self.rotation_z == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(3.0, 4.0);
        assert_eq!(a + Point::new(1.0, 1.0), Point::new(4.0, 5.0));
        assert_eq!(a - a, Point::ZERO);
        assert_eq!(a * 2.0, Point::new(6.0, 8.0));
        assert_eq!(-a, Point::new(-3.0, -4.0));
        assert_eq!(Point::ZERO.distance_to(a), 5.0);
    }

    #[test]
    fn rect_translate_keeps_size() {
        let rect = Rect::from_size(Size::new(100.0, 50.0)).translate(10.0, -5.0);
        assert_eq!(rect.origin(), Point::new(10.0, -5.0));
        assert_eq!(rect.size(), Size::new(100.0, 50.0));
        assert!(rect.contains(60.0, 20.0));
        assert!(!rect.contains(5.0, 20.0));
        assert_eq!(rect.center(), Point::new(60.0, 20.0));
    }

    #[test]
    fn graphics_layer_identity() {
        assert!(GraphicsLayer::default().is_identity());
        let layer = GraphicsLayer::translation(Point::new(1.0, 2.0)).with_rotation(15.0);
        assert!(!layer.is_identity());
        assert_eq!(layer.translation_offset(), Point::new(1.0, 2.0));
        assert_eq!(layer.rotation_z, 15.0);
    }
}
