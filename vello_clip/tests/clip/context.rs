// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for device bounds of a clip context.

use crate::util::{mixed_stack, star_element, TestSurface};
use vello_clip::kurbo::Rect;
use vello_clip::{ClipContext, ClipOp, ClipStack, IntPoint, IntRect};

#[test]
fn scenario_e_offset_layer() {
    let stack = ClipStack::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
    let context = ClipContext::new(&stack, IntPoint::new(10, 10));
    let bounds = context.conservative_bounds(&IntRect::new(0, 0, 50, 50));
    assert_eq!(bounds.rect, IntRect::new(0, 0, 40, 40));
    assert!(bounds.is_exact_rect);
}

#[test]
fn rect_inside_surface_is_exact() {
    let stack = ClipStack::from_int_rect(IntRect::new(8, 8, 24, 24));
    let context = ClipContext::new(&stack, IntPoint::ZERO);
    let surface = TestSurface {
        width: 32,
        height: 32,
    };
    let bounds = context.conservative_bounds(&surface);
    assert_eq!(bounds.rect, IntRect::new(8, 8, 24, 24));
    assert!(bounds.is_exact_rect);
}

#[test]
fn path_clip_is_not_exact() {
    let stack = ClipStack::from_elements(
        [star_element(ClipOp::Intersect, true)],
        Rect::new(5.0, 5.0, 95.0, 95.0),
    );
    let context = ClipContext::new(&stack, IntPoint::ZERO);
    let bounds = context.conservative_bounds(&TestSurface {
        width: 200,
        height: 200,
    });
    assert_eq!(bounds.rect, IntRect::new(5, 5, 95, 95));
    assert!(!bounds.is_exact_rect);
}

#[test]
fn origin_shifts_surface_window() {
    let stack = mixed_stack();
    let surface = TestSurface {
        width: 30,
        height: 30,
    };
    let at_zero = ClipContext::new(&stack, IntPoint::ZERO).conservative_bounds(&surface);
    let shifted = ClipContext::new(&stack, IntPoint::new(-20, -20)).conservative_bounds(&surface);
    assert_eq!(at_zero.rect, IntRect::new(0, 0, 30, 30));
    assert_eq!(shifted.rect, IntRect::new(20, 20, 50, 50));
    assert!(!shifted.is_exact_rect);
}

#[test]
fn unclipped_context_covers_surface() {
    let surface = TestSurface {
        width: 16,
        height: 9,
    };
    let bounds = ClipContext::default().conservative_bounds(&surface);
    assert_eq!(bounds.rect, IntRect::new(0, 0, 16, 9));
    assert!(!bounds.is_exact_rect);
}

#[test]
fn contexts_compare_referenced_stacks() {
    let a = mixed_stack();
    let b = mixed_stack();
    let origin = IntPoint::new(2, 3);
    assert_eq!(ClipContext::new(&a, origin), ClipContext::new(&b, origin));
    assert_ne!(
        ClipContext::new(&a, origin),
        ClipContext::new(&ClipStack::new(), origin)
    );
    assert_eq!(
        ClipContext::unclipped(origin),
        ClipContext::unclipped(origin)
    );
}
