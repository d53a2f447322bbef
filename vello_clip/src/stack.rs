// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clip stack value type.

use crate::element::{ClipElement, ClipOp};
use crate::iter::{IterStart, StackIter};
use crate::kurbo::Rect;
use crate::{ClipError, IntRect, Result};
use log::{debug, trace, warn};
use smallvec::SmallVec;

/// Number of elements stored inline before spilling to the heap.
const INLINE_ELEMENTS: usize = 4;

/// An ordered record of clip elements, earliest pushed first.
///
/// A stack with no elements is *wide open*: nothing is clipped. It does not mean that
/// nothing is visible.
///
/// Stacks have value semantics. The `set_*` methods replace the whole value rather
/// than editing it, and cannot be called while a [`StackIter`] borrows the stack.
#[derive(Clone, Debug, Default)]
pub struct ClipStack {
    elements: SmallVec<[ClipElement; INLINE_ELEMENTS]>,
    /// `None` iff the stack is wide open.
    bounds: Option<Rect>,
    requires_aa: bool,
}

impl ClipStack {
    /// Create a wide-open stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack holding a single non-antialiased rectangle intersection.
    ///
    /// A rectangle with NaN coordinates is kept as given, and is also the stack's bounds.
    pub fn from_rect(rect: Rect) -> Self {
        if rect.is_nan() {
            warn!("Clip rect {rect:?} contains NaN.");
        }
        let mut elements = SmallVec::new();
        elements.push(ClipElement::rect(rect, ClipOp::Intersect, false));
        let stack = Self {
            elements,
            bounds: Some(rect),
            requires_aa: false,
        };
        stack.debug_validate();
        stack
    }

    /// Create a stack holding a single pixel-aligned rectangle.
    pub fn from_int_rect(rect: IntRect) -> Self {
        Self::from_rect(rect.to_rect())
    }

    /// Create a stack from a sequence of elements, bottom first.
    ///
    /// `conservative_bounds` must contain the region the elements describe. It is
    /// stored as given, except that:
    /// - an empty sequence produces a wide-open stack with no bounds;
    /// - a sequence that is a single rectangle (intersect or replace) uses that
    ///   rectangle as its bounds, even when it contains NaN.
    ///
    /// Rectangle elements with NaN coordinates are kept. Supplied bounds with NaN
    /// coordinates are a caller bug and fail [`ClipStack::validate`].
    pub fn from_elements<I>(elements: I, conservative_bounds: Rect) -> Self
    where
        I: IntoIterator<Item = ClipElement>,
    {
        let elements: SmallVec<[ClipElement; INLINE_ELEMENTS]> =
            elements.into_iter().collect();
        let requires_aa = elements.iter().any(ClipElement::anti_alias);

        for rect in elements.iter().filter_map(ClipElement::as_rect) {
            if rect.is_nan() {
                warn!("Clip rect {rect:?} contains NaN.");
            }
        }

        let bounds = match elements.as_slice() {
            [] => None,
            [only] => match only.simple_rect() {
                Some(rect) => {
                    if !same_rect(*rect, conservative_bounds) {
                        debug!(
                            "Using clip rect {rect:?} instead of supplied bounds {conservative_bounds:?}."
                        );
                    }
                    Some(*rect)
                }
                None => Some(conservative_bounds),
            },
            _ => Some(conservative_bounds),
        };
        if bounds.is_some_and(|b| b.is_nan()) && !is_single_simple_rect(&elements) {
            warn!("Conservative clip bounds {conservative_bounds:?} contain NaN.");
        }

        trace!(
            "Built clip stack with {} elements, requires_aa = {requires_aa}.",
            elements.len()
        );
        let stack = Self {
            elements,
            bounds,
            requires_aa,
        };
        stack.debug_validate();
        stack
    }

    /// Reset to the wide-open state.
    pub fn set_empty(&mut self) {
        *self = Self::new();
    }

    /// Replace the contents with a single rectangle. See [`ClipStack::from_rect`].
    pub fn set_from_rect(&mut self, rect: Rect) {
        *self = Self::from_rect(rect);
    }

    /// Replace the contents with a single pixel-aligned rectangle.
    pub fn set_from_int_rect(&mut self, rect: IntRect) {
        *self = Self::from_int_rect(rect);
    }

    /// Replace the contents with a sequence of elements. See [`ClipStack::from_elements`].
    pub fn set_from_elements<I>(&mut self, elements: I, conservative_bounds: Rect)
    where
        I: IntoIterator<Item = ClipElement>,
    {
        *self = Self::from_elements(elements, conservative_bounds);
    }

    /// A rectangle guaranteed to contain the clipped region.
    ///
    /// Returns `None` for a wide-open stack, which is unbounded.
    pub fn conservative_bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// Whether any element asks for anti-aliased edges.
    pub fn requires_aa(&self) -> bool {
        self.requires_aa
    }

    /// Whether the stack has no elements, i.e. it clips nothing.
    ///
    /// This is about having no constraints, not about having no area.
    pub fn is_wide_open(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether the clip is exactly one rectangle.
    ///
    /// When this holds, [`ClipStack::conservative_bounds`] is that rectangle.
    pub fn is_rect(&self) -> bool {
        match self.elements.as_slice() {
            [only] => match only.simple_rect() {
                Some(rect) => {
                    debug_assert!(
                        self.bounds.is_some_and(|b| same_rect(b, *rect)),
                        "a single rect clip must be its own bounds"
                    );
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// An iterator starting below the bottom element.
    pub fn iter(&self) -> StackIter<'_> {
        StackIter::new(self, IterStart::Bottom)
    }

    /// An iterator starting at either end.
    pub fn iter_from(&self, start: IterStart) -> StackIter<'_> {
        StackIter::new(self, start)
    }

    /// Check the invariants tying the cached state to the elements.
    ///
    /// NaN is only rejected in bounds that were supplied separately from the elements.
    /// A single rectangle stack's bounds are its rectangle, compared bit for bit.
    pub fn validate(&self) -> Result<()> {
        let supplied = match (self.elements.as_slice(), self.bounds) {
            ([], Some(bounds)) => return Err(ClipError::UnexpectedBounds(bounds)),
            ([], None) => None,
            (elements, None) => return Err(ClipError::MissingBounds(elements.len())),
            ([only], Some(bounds)) => match only.simple_rect() {
                Some(rect) if same_rect(*rect, bounds) => None,
                Some(rect) => {
                    return Err(ClipError::RectBoundsMismatch {
                        rect: *rect,
                        bounds: Some(bounds),
                    });
                }
                None => Some(bounds),
            },
            (_, Some(bounds)) => Some(bounds),
        };

        if let Some(bounds) = supplied {
            if bounds.is_nan() {
                return Err(ClipError::NanBounds(bounds));
            }
        }

        let actual = self.elements.iter().any(ClipElement::anti_alias);
        if actual != self.requires_aa {
            return Err(ClipError::AntiAliasMismatch {
                cached: self.requires_aa,
                actual,
            });
        }
        Ok(())
    }

    pub(crate) fn elements(&self) -> &[ClipElement] {
        &self.elements
    }

    fn debug_validate(&self) {
        if cfg!(debug_assertions) {
            if let Err(e) = self.validate() {
                panic!("inconsistent clip stack: {e}");
            }
        }
    }
}

fn is_single_simple_rect(elements: &[ClipElement]) -> bool {
    matches!(elements, [only] if only.simple_rect().is_some())
}

/// Bitwise rectangle equality, so a NaN rectangle matches itself.
fn same_rect(a: Rect, b: Rect) -> bool {
    let bits = |r: Rect| [r.x0, r.y0, r.x1, r.y1].map(f64::to_bits);
    bits(a) == bits(b)
}

impl PartialEq for ClipStack {
    /// Stacks are equal when their elements are, in order. Cached state is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}
