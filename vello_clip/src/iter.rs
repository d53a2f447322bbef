// Copyright 2025 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking a clip stack.

use crate::element::{ClipElement, ClipOp};
use crate::stack::ClipStack;

/// Which end of the stack a [`StackIter`] starts from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IterStart {
    /// Below the earliest pushed element; walk with [`Iterator::next`].
    #[default]
    Bottom,
    /// Above the latest pushed element; walk with [`StackIter::prev`].
    Top,
}

/// A bidirectional cursor over the elements of a [`ClipStack`].
///
/// The cursor sits *between* elements. [`next`](Iterator::next) returns the element above
/// it and moves up, [`prev`](StackIter::prev) returns the element below it and moves
/// down. So `n` calls to `next` followed by `n` calls to `prev` visit the same elements
/// in reverse.
///
/// `None` means the cursor ran off an end. It does not say anything about the clip
/// region: a wide-open stack and an exhausted iterator both yield `None`.
///
/// A default-constructed iterator is not attached to any stack and must be
/// [`reset`](StackIter::reset) before use.
#[derive(Clone, Debug, Default)]
pub struct StackIter<'a> {
    stack: Option<&'a ClipStack>,
    /// Index of the element `next` would return.
    cursor: usize,
}

impl<'a> StackIter<'a> {
    pub fn new(stack: &'a ClipStack, start: IterStart) -> Self {
        let mut iter = Self::default();
        iter.reset(stack, start);
        iter
    }

    /// Attach to `stack` and move to one of its ends.
    pub fn reset(&mut self, stack: &'a ClipStack, start: IterStart) {
        self.stack = Some(stack);
        self.cursor = match start {
            IterStart::Bottom => 0,
            IterStart::Top => stack.element_count(),
        };
    }

    /// Step toward the bottom of the stack.
    pub fn prev(&mut self) -> Option<&'a ClipElement> {
        let elements = self.elements()?;
        let ix = self.cursor.checked_sub(1)?;
        self.cursor = ix;
        elements.get(ix)
    }

    /// Move up to the nearest element at or above the cursor whose op is `op`.
    ///
    /// On a match the cursor ends up just above the returned element, as if `next` had
    /// returned it, so calling this repeatedly visits every match from the bottom up.
    /// Without a match the cursor is left at the top and `None` is returned.
    ///
    /// Only elements above the cursor are searched. Mask builders use this with
    /// [`ClipOp::Replace`] to skip everything below the most recent replacement.
    pub fn skip_to_topmost(&mut self, op: ClipOp) -> Option<&'a ClipElement> {
        let elements = self.elements()?;
        let start = self.cursor.min(elements.len());
        match elements[start..].iter().position(|e| e.op() == op) {
            Some(offset) => {
                let ix = start + offset;
                self.cursor = ix + 1;
                Some(&elements[ix])
            }
            None => {
                self.cursor = elements.len();
                None
            }
        }
    }

    fn elements(&self) -> Option<&'a [ClipElement]> {
        debug_assert!(
            self.stack.is_some(),
            "clip stack iterator used before reset"
        );
        self.stack.map(ClipStack::elements)
    }
}

impl<'a> Iterator for StackIter<'a> {
    type Item = &'a ClipElement;

    /// Step toward the top of the stack.
    fn next(&mut self) -> Option<Self::Item> {
        let element = self.elements()?.get(self.cursor)?;
        self.cursor += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .stack
            .map_or(0, |s| s.element_count().saturating_sub(self.cursor));
        (remaining, Some(remaining))
    }
}
