//! Grid coordinate system - converts cell-unit placement into scene pixels
//!
//! All layout data (zones, machines, roam bounds) is expressed in cells on a
//! fixed 32x22 grid and converted once to pixel rectangles. Scene pixel
//! coordinates are x-right / y-down with the origin at the canvas top-left.

use serde::{Deserialize, Serialize};

use crate::constants::CELL_SIZE;

/// 2D position vector in scene pixels
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self {
                x: self.x / len,
                y: self.y / len,
            }
        } else {
            Self::ZERO
        }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.w
            && point.y >= self.y
            && point.y <= self.y + self.h
    }

    /// Shrink by per-edge margins. Collapses to a zero-size rectangle
    /// rather than inverting when the margins exceed the extent.
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        let w = (self.w - left - right).max(0.0);
        let h = (self.h - top - bottom).max(0.0);
        Self {
            x: self.x + left.min(self.w / 2.0),
            y: self.y + top.min(self.h / 2.0),
            w,
            h,
        }
    }

    /// Uniformly-random point inside this rectangle
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> Vec2 {
        Vec2::new(
            self.x + rng.gen::<f32>() * self.w,
            self.y + rng.gen::<f32>() * self.h,
        )
    }
}

/// Rectangular placement in grid-cell units
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellRect {
    pub col: u32,
    pub row: u32,
    pub w: u32,
    pub h: u32,
}

impl CellRect {
    pub fn new(col: u32, row: u32, w: u32, h: u32) -> Self {
        Self { col, row, w, h }
    }

    /// Convert to a pixel rectangle using the fixed cell size
    pub fn to_pixels(&self) -> Rect {
        Rect::new(
            self.col as f32 * CELL_SIZE,
            self.row as f32 * CELL_SIZE,
            self.w as f32 * CELL_SIZE,
            self.h as f32 * CELL_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FLOOR_HEIGHT, FLOOR_WIDTH, GRID_COLS, GRID_ROWS};

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 8.0);

        let diff = b - a;
        assert_eq!(diff.x, 3.0);

        let scaled = a * 2.0;
        assert_eq!(scaled.x, 2.0);
        assert_eq!(scaled.y, 4.0);
    }

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 0.001);

        // Zero vector stays zero instead of dividing by zero
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Vec2::new(15.0, 15.0)));
        assert!(rect.contains(Vec2::new(10.0, 10.0))); // edges inclusive
        assert!(!rect.contains(Vec2::new(35.0, 15.0)));
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = rect.inset(20.0, 30.0, 20.0, 10.0);
        assert_eq!(inner.x, 20.0);
        assert_eq!(inner.y, 30.0);
        assert_eq!(inner.w, 60.0);
        assert_eq!(inner.h, 10.0);
    }

    #[test]
    fn test_random_point_inside() {
        let rect = Rect::new(50.0, 80.0, 30.0, 12.0);
        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let p = rect.random_point(&mut rng);
            assert!(rect.contains(p));
        }
    }

    #[test]
    fn test_cell_rect_to_pixels() {
        let cells = CellRect::new(20, 18, 12, 4);
        let px = cells.to_pixels();
        assert_eq!(px.x, 560.0);
        assert_eq!(px.y, 504.0);
        assert_eq!(px.w, 336.0);
        assert_eq!(px.h, 112.0);
    }

    #[test]
    fn test_canvas_dimensions() {
        let full = CellRect::new(0, 0, GRID_COLS, GRID_ROWS).to_pixels();
        assert_eq!(full.w, FLOOR_WIDTH);
        assert_eq!(full.h, FLOOR_HEIGHT);
        assert_eq!(full.w, 896.0);
        assert_eq!(full.h, 616.0);
    }
}
