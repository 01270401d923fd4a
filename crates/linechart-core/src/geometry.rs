// File: crates/linechart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, content box).

use std::ops::{Add, Sub};

use crate::types::LayoutBox;

/// Screen-space position in pixels. Recomputed every render pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn scale(self, k: f32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point { Point::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point { Point::new(self.x - rhs.x, self.y - rhs.y) }
}

/// Plot area left after subtracting the label offsets from the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBox {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl ContentBox {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub const fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }

    /// Content box of a `width` x `height` surface. Offsets larger than the
    /// surface collapse the box to zero size instead of inverting it.
    pub fn from_surface(width: f32, height: f32, offsets: &LayoutBox) -> Self {
        let w = (width - offsets.hsum()).max(0.0);
        let h = (height - offsets.vsum()).max(0.0);
        Self::from_ltwh(offsets.left, offsets.top, w, h)
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
