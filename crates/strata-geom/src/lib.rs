//! Minimal 2D geometry and grid-alignment types for the world crates.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    /// Screen convention: y grows downward, so "down" is +y.
    pub const DOWN: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Largest multiple of `step` that is `<= v`. Euclidean flooring, so
/// negative coordinates align toward negative infinity rather than zero.
#[inline]
pub fn align_down(v: f32, step: i32) -> i32 {
    align_down_i(v.floor() as i32, step)
}

#[inline]
pub fn align_down_i(v: i32, step: i32) -> i32 {
    debug_assert!(step > 0);
    v.div_euclid(step) * step
}

/// A half-open, grid-aligned horizontal interval `[min_x, max_x)` stepped
/// by the block size. Unaligned bounds are floored; inverted bounds
/// normalize to an empty range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridRange {
    min_x: i32,
    max_x: i32,
    step: i32,
}

impl GridRange {
    pub fn new(min_x: i32, max_x: i32, step: i32) -> Self {
        let min_x = align_down_i(min_x, step);
        let max_x = align_down_i(max_x, step);
        Self {
            min_x,
            max_x: max_x.max(min_x),
            step,
        }
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn step(&self) -> i32 {
        self.step
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x == self.max_x
    }

    #[inline]
    pub fn contains(&self, x: i32) -> bool {
        x >= self.min_x && x < self.max_x
    }

    /// Column x coordinates in `[min_x, max_x)`, ascending.
    pub fn columns(&self) -> impl Iterator<Item = i32> + use<> {
        let (min, max, step) = (self.min_x, self.max_x, self.step);
        (min..max).step_by(step as usize)
    }

    /// Number of columns in the range.
    #[inline]
    pub fn len(&self) -> usize {
        ((self.max_x - self.min_x) / self.step) as usize
    }
}
