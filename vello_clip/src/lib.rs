// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clip stack bookkeeping for Vello.
//!
//! A [`ClipStack`] records the sequence of clip shapes pushed by a canvas, in the order
//! they were applied. It answers the cheap questions a renderer asks before doing any
//! real work:
//!
//! - Is anything clipped at all? ([`ClipStack::is_wide_open`])
//! - Is the clip exactly one rectangle, so a scissor rect suffices? ([`ClipStack::is_rect`])
//! - What rectangle is guaranteed to contain the clipped region? ([`ClipStack::conservative_bounds`])
//!
//! Mask builders walk the stack with a [`StackIter`], which can move in both directions
//! and can jump forward to the next element with a given [`ClipOp`]. That jump lets a
//! builder skip everything below a [`ClipOp::Replace`].
//!
//! A [`ClipContext`] pairs a borrowed stack with the pixel origin of the layer being
//! drawn into, and computes the integer device bounds for a [`RenderSurface`].
//!
//! This crate does not rasterize anything.
//!
//! # Example
//!
//! ```
//! use vello_clip::kurbo::Rect;
//! use vello_clip::{ClipContext, ClipStack, IntPoint, IntRect};
//!
//! let stack = ClipStack::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
//! assert!(stack.is_rect());
//!
//! let context = ClipContext::new(&stack, IntPoint::new(10, 10));
//! let bounds = context.conservative_bounds(&IntRect::new(0, 0, 50, 50));
//! assert_eq!(bounds.rect, IntRect::new(0, 0, 40, 40));
//! assert!(bounds.is_exact_rect);
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]

mod context;
mod element;
mod geometry;
mod iter;
mod stack;

pub use context::{ClipContext, DeviceBounds, RenderSurface};
pub use element::{ClipElement, ClipOp, ClipShape};
pub use geometry::{IntPoint, IntRect};
pub use iter::{IterStart, StackIter};
pub use stack::ClipStack;

pub use peniko;
pub use peniko::kurbo;

use crate::kurbo::Rect;
use thiserror::Error;

/// Invariant violations reported by [`ClipStack::validate`].
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ClipError {
    /// A wide-open stack recorded bounds; it must be unbounded.
    #[error("wide open clip recorded bounds {0:?}")]
    UnexpectedBounds(Rect),
    /// A stack with elements has no bounds.
    #[error("clip with {0} elements has no conservative bounds")]
    MissingBounds(usize),
    /// A single-rectangle stack whose bounds are not that rectangle.
    #[error("single rect clip {rect:?} recorded with bounds {bounds:?}")]
    RectBoundsMismatch {
        /// The only element's rectangle.
        rect: Rect,
        /// The recorded conservative bounds.
        bounds: Option<Rect>,
    },
    /// The cached anti-aliasing requirement disagrees with the elements.
    #[error("cached anti-aliasing requirement is {cached} but elements require {actual}")]
    AntiAliasMismatch {
        /// The cached value.
        cached: bool,
        /// The value derived from the elements.
        actual: bool,
    },
    /// Conservative bounds supplied alongside the elements contain NaN.
    ///
    /// A single rectangle stack may carry a NaN rectangle as its bounds.
    ///
    /// Infinite bounds are allowed; they describe a clip that reaches the edge of the plane.
    #[error("conservative bounds {0:?} contain NaN")]
    NanBounds(Rect),
}

pub(crate) type Result<T, E = ClipError> = std::result::Result<T, E>;
