// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip elements.

use crate::kurbo::{BezPath, Rect};
use peniko::Fill;

/// How a clip element combines with the region produced by the elements below it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClipOp {
    /// Keep the existing region minus this element.
    Difference,
    /// Keep the overlap of the existing region and this element.
    #[default]
    Intersect,
    /// Add this element to the existing region.
    Union,
    /// Keep whatever is covered by exactly one of the two.
    Xor,
    /// Keep this element minus the existing region.
    ReverseDifference,
    /// Discard the existing region and use this element alone.
    Replace,
}

impl ClipOp {
    /// Whether applying this op makes every element below it irrelevant.
    pub fn discards_below(self) -> bool {
        matches!(self, Self::Replace)
    }
}

/// The geometry of a clip element.
#[derive(Clone, Debug, PartialEq)]
pub enum ClipShape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    Path {
        /// The closed outline.
        path: BezPath,
        /// Fill rule used to decide which parts of the outline are inside.
        fill: Fill,
    },
}

/// One clip shape pushed onto a [`ClipStack`](crate::ClipStack).
///
/// Elements are immutable once built. Two elements are equal when shape kind, op,
/// anti-aliasing and geometry all match; paths compare element by element, including
/// their fill rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipElement {
    shape: ClipShape,
    op: ClipOp,
    anti_alias: bool,
}

impl ClipElement {
    /// Create an element from any shape.
    pub fn new(shape: ClipShape, op: ClipOp, anti_alias: bool) -> Self {
        Self {
            shape,
            op,
            anti_alias,
        }
    }

    /// A rectangle element.
    pub fn rect(rect: Rect, op: ClipOp, anti_alias: bool) -> Self {
        Self::new(ClipShape::Rect(rect), op, anti_alias)
    }

    /// A path element.
    pub fn path(path: BezPath, fill: Fill, op: ClipOp, anti_alias: bool) -> Self {
        Self::new(ClipShape::Path { path, fill }, op, anti_alias)
    }

    /// The geometry of this element.
    pub fn shape(&self) -> &ClipShape {
        &self.shape
    }

    /// The rectangle, if this is a rectangle element.
    pub fn as_rect(&self) -> Option<&Rect> {
        match &self.shape {
            ClipShape::Rect(rect) => Some(rect),
            ClipShape::Path { .. } => None,
        }
    }

    /// The outline, if this is a path element.
    pub fn as_path(&self) -> Option<&BezPath> {
        match &self.shape {
            ClipShape::Rect(_) => None,
            ClipShape::Path { path, .. } => Some(path),
        }
    }

    /// The fill rule, if this is a path element.
    pub fn fill(&self) -> Option<Fill> {
        match &self.shape {
            ClipShape::Rect(_) => None,
            ClipShape::Path { fill, .. } => Some(*fill),
        }
    }

    /// How this element combines with the elements below it.
    pub fn op(&self) -> ClipOp {
        self.op
    }

    /// Whether this element's edges should be anti-aliased.
    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    /// The rectangle, if this element alone would clip to exactly that rectangle.
    pub(crate) fn simple_rect(&self) -> Option<&Rect> {
        match self.op {
            ClipOp::Intersect | ClipOp::Replace => self.as_rect(),
            _ => None,
        }
    }
}
