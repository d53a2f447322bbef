// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for walking a stack.

use crate::util::{mixed_stack, rect_element, star_element};
use vello_clip::kurbo::Rect;
use vello_clip::{ClipElement, ClipOp, ClipStack, IterStart, StackIter};

const ALL_OPS: [ClipOp; 6] = [
    ClipOp::Difference,
    ClipOp::Intersect,
    ClipOp::Union,
    ClipOp::Xor,
    ClipOp::ReverseDifference,
    ClipOp::Replace,
];

#[test]
fn next_then_prev_is_reversed() {
    let stack = mixed_stack();
    let n = stack.element_count();
    let mut iter = stack.iter();

    let forward: Vec<&ClipElement> = (0..n).map(|_| iter.next().unwrap()).collect();
    let mut backward: Vec<&ClipElement> = (0..n).map(|_| iter.prev().unwrap()).collect();
    backward.reverse();

    assert_eq!(forward, backward);
    assert!(iter.prev().is_none());
}

#[test]
fn top_start_mirrors_bottom_start() {
    let stack = mixed_stack();
    let mut from_top = stack.iter_from(IterStart::Top);
    let mut down = Vec::new();
    while let Some(element) = from_top.prev() {
        down.push(element);
    }
    down.reverse();
    assert_eq!(down, stack.iter().collect::<Vec<_>>());
}

#[test]
fn exactly_one_shape_per_element() {
    for element in mixed_stack().iter() {
        assert_ne!(element.as_rect().is_some(), element.as_path().is_some());
    }
}

#[test]
fn skip_to_topmost_visits_ascending_matches() {
    let stack = mixed_stack();
    for op in ALL_OPS {
        let expected: Vec<usize> = stack
            .iter()
            .enumerate()
            .filter(|(_, e)| e.op() == op)
            .map(|(i, _)| i)
            .collect();

        let mut iter = stack.iter();
        let mut visited = Vec::new();
        while let Some(element) = iter.skip_to_topmost(op) {
            assert_eq!(element.op(), op);
            let ix = stack
                .iter()
                .position(|e| std::ptr::eq(e, element))
                .unwrap();
            visited.push(ix);
        }
        assert_eq!(visited, expected, "{op:?}");
    }
}

#[test]
fn skip_to_topmost_from_top_finds_nothing() {
    let stack = mixed_stack();
    let mut iter = stack.iter_from(IterStart::Top);
    assert!(iter.skip_to_topmost(ClipOp::Intersect).is_none());
}

#[test]
fn reset_reattaches_to_another_stack() {
    let a = mixed_stack();
    let b = ClipStack::from_rect(Rect::new(0., 0., 1., 1.));
    let mut iter = StackIter::default();
    iter.reset(&a, IterStart::Bottom);
    assert_eq!(iter.next().map(ClipElement::op), Some(ClipOp::Intersect));
    iter.reset(&b, IterStart::Top);
    assert_eq!(
        iter.prev().and_then(ClipElement::as_rect),
        Some(&Rect::new(0., 0., 1., 1.))
    );
    assert!(iter.prev().is_none());
}

#[test]
fn scenario_d_skip_on_rect_then_path() {
    let stack = ClipStack::from_elements(
        [
            rect_element(0., 0., 50., 50., ClipOp::Intersect),
            star_element(ClipOp::Union, true),
        ],
        Rect::new(0., 0., 95., 95.),
    );

    let mut iter = stack.iter();
    let union = iter.skip_to_topmost(ClipOp::Union).unwrap();
    assert!(union.as_path().is_some());
    assert!(union.as_rect().is_none());
    assert!(union.anti_alias());

    let mut iter = stack.iter();
    assert!(iter.skip_to_topmost(ClipOp::Replace).is_none());
    assert!(iter.next().is_none());
}
