// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer geometry for device-space bounds.

use crate::kurbo::Rect;

/// An integer offset, in pixels.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    /// The zero offset.
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Neg for IntPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

/// Axis-aligned rectangle with integer edges.
///
/// `x0`/`y0` are inclusive and `x1`/`y1` exclusive, so `IntRect::new(0, 0, 50, 50)`
/// covers 50 by 50 pixels.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct IntRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl IntRect {
    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The rectangle from the origin to `(width, height)`.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    /// The smallest integer rectangle containing `rect`.
    ///
    /// Coordinates beyond the `i32` range saturate, and NaN maps to zero.
    pub fn round_out(rect: Rect) -> Self {
        Self::new(
            rect.x0.floor() as i32,
            rect.y0.floor() as i32,
            rect.x1.ceil() as i32,
            rect.y1.ceil() as i32,
        )
    }

    pub fn width(&self) -> i32 {
        self.x1.saturating_sub(self.x0).max(0)
    }

    pub fn height(&self) -> i32 {
        self.y1.saturating_sub(self.y0).max(0)
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Move the rectangle by `offset`.
    #[must_use]
    pub fn translate(self, offset: IntPoint) -> Self {
        Self::new(
            self.x0.saturating_add(offset.x),
            self.y0.saturating_add(offset.y),
            self.x1.saturating_add(offset.x),
            self.y1.saturating_add(offset.y),
        )
    }

    /// The intersection of two rectangles.
    ///
    /// Like [`Rect::intersect`], a disjoint pair produces a zero-area rectangle anchored
    /// at the larger of the two origins.
    #[must_use]
    pub fn intersect(self, other: Self) -> Self {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1).max(x0);
        let y1 = self.y1.min(other.y1).max(y0);
        Self::new(x0, y0, x1, y1)
    }

    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.x0),
            f64::from(self.y0),
            f64::from(self.x1),
            f64::from(self.y1),
        )
    }
}

impl From<IntRect> for Rect {
    fn from(rect: IntRect) -> Self {
        rect.to_rect()
    }
}

fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
