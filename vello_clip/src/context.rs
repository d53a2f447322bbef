// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip state for a single drawing scope.

use crate::geometry::{IntPoint, IntRect};
use crate::stack::ClipStack;

/// Something with a pixel extent that can be drawn into.
pub trait RenderSurface {
    /// Width in pixels.
    fn width(&self) -> u32;
    /// Height in pixels.
    fn height(&self) -> u32;

    /// The pixel rectangle of the surface, anchored at the origin.
    fn bounds(&self) -> IntRect {
        IntRect::from_size(self.width(), self.height())
    }
}

impl RenderSurface for IntRect {
    fn width(&self) -> u32 {
        IntRect::width(self).unsigned_abs()
    }

    fn height(&self) -> u32 {
        IntRect::height(self).unsigned_abs()
    }

    fn bounds(&self) -> IntRect {
        *self
    }
}

/// The result of [`ClipContext::conservative_bounds`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeviceBounds {
    /// Integer rectangle containing everything the clip lets through on the surface.
    ///
    /// It is in the stack's coordinate space, not surface pixels. Translate it by the
    /// context's origin to get surface pixels.
    pub rect: IntRect,
    /// Whether the clip is exactly `rect`, so a scissor rectangle can replace a mask.
    pub is_exact_rect: bool,
}

/// A borrowed clip stack together with the pixel origin of the layer it applies to.
///
/// The origin is only nonzero for layers created with an offset bounding box. A
/// context without a stack clips nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ClipContext<'a> {
    stack: Option<&'a ClipStack>,
    origin: IntPoint,
}

impl<'a> ClipContext<'a> {
    pub fn new(stack: &'a ClipStack, origin: IntPoint) -> Self {
        Self {
            stack: Some(stack),
            origin,
        }
    }

    /// A context that clips nothing.
    pub fn unclipped(origin: IntPoint) -> Self {
        Self {
            stack: None,
            origin,
        }
    }

    pub fn stack(&self) -> Option<&'a ClipStack> {
        self.stack
    }

    pub fn origin(&self) -> IntPoint {
        self.origin
    }

    /// Integer bounds of the clip on `surface`, in the stack's coordinate space.
    ///
    /// The surface's pixel grid sits at `-origin` in the stack's coordinate space. The
    /// result is the stack's conservative bounds, rounded out to whole pixels, cropped to
    /// that grid. A missing or wide-open stack yields the whole grid. With origin
    /// `(10, 10)`, a `(0, 0, 100, 100)` rect clip on a 50 by 50 surface gives
    /// `(0, 0, 40, 40)`, which is surface pixels `(10, 10, 50, 50)`.
    ///
    /// `is_exact_rect` holds when the stack is a single pixel-aligned rectangle. Cropping
    /// to the surface keeps it a rectangle, so the flag survives it.
    pub fn conservative_bounds(&self, surface: &impl RenderSurface) -> DeviceBounds {
        let target = surface.bounds().translate(-self.origin);
        // A wide-open stack has no bounds.
        let clip = self
            .stack
            .and_then(|stack| Some((stack, stack.conservative_bounds()?)));
        let Some((stack, bounds)) = clip else {
            return DeviceBounds {
                rect: target,
                is_exact_rect: false,
            };
        };
        let rounded = IntRect::round_out(bounds);
        DeviceBounds {
            rect: rounded.intersect(target),
            is_exact_rect: stack.is_rect() && rounded.to_rect() == bounds,
        }
    }
}
