//! Value types produced by the sampler.

use std::fmt;

use shardfall_engine::paint::Color;

/// A point in normalized coordinates, nominally inside the unit square.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` in direction `angle` (radians).
    #[inline]
    pub fn offset(self, angle: f64, distance: f64) -> Self {
        Self::new(self.x + angle.cos() * distance, self.y + angle.sin() * distance)
    }
}

/// Straight 8-bit channels plus a straight alpha in `[0, 1)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_rgb_u8_alpha(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
    pub color: Rgba,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
    pub color: Rgba,
}

impl Triangle {
    /// Unsigned area from the cross product of two edges.
    pub fn area(&self) -> f64 {
        let (ax, ay) = (self.p2.x - self.p1.x, self.p2.y - self.p1.y);
        let (bx, by) = (self.p3.x - self.p1.x, self.p3.y - self.p1.y);
        0.5 * (ax * by - ay * bx).abs()
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        [self.p1, self.p2, self.p3]
    }
}
