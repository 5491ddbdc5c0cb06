// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core extent model trait and the visible-strip computation.

use core::cmp;

use crate::Scalar;

/// Result of a visibility query over a 1D strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleStrip<S: Scalar> {
    /// First realized index (inclusive), overscan included.
    pub start: usize,
    /// One past the last realized index (exclusive), overscan included.
    pub end: usize,

    /// Total extent of items before `start`.
    pub before_extent: S,
    /// Total extent of items after `end`.
    pub after_extent: S,
    /// Total extent of the entire strip (all items `0..len`).
    pub content_extent: S,
}

impl<S: Scalar> VisibleStrip<S> {
    /// A strip with nothing realized and no content.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            start: 0,
            end: 0,
            before_extent: S::zero(),
            after_extent: S::zero(),
            content_extent: S::zero(),
        }
    }

    /// Returns `true` if there are no realized items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of realized items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// A 1D model over a dense strip of items, indexed `0..len`.
///
/// All extents and offsets are in the same coordinate space as your scroll offset
/// and viewport extent (typically logical pixels).
///
/// Methods that logically consult prefix sums take `&mut self` so implementations
/// are free to maintain internal caches without exposing interior mutability at
/// the call site.
pub trait ExtentModel {
    /// Scalar type used for extents and offsets.
    type Scalar: Scalar;

    /// Number of items in this strip.
    fn len(&self) -> usize;

    /// Returns `true` if there are no items in this strip.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total extent of the entire strip.
    fn total_extent(&mut self) -> Self::Scalar;

    /// Size of a single item. Must be non-negative.
    fn extent_of(&mut self, index: usize) -> Self::Scalar;

    /// Offset of the start of the given item from the start of the strip.
    ///
    /// Implementations must guarantee that:
    /// - if `len() > 0`, `offset_of(0) == 0`,
    /// - for all valid `i`, `offset_of(i + 1) >= offset_of(i) + extent_of(i)`.
    fn offset_of(&mut self, index: usize) -> Self::Scalar;

    /// Given an offset, find the index of the item containing it, clamped into `0..len()`.
    fn index_at_offset(&mut self, offset: Self::Scalar) -> usize;

    /// Ensures that the model represents `len` items.
    fn set_len(&mut self, len: usize);
}

/// Compute the realized slice of a strip from scroll position, viewport size, and
/// overscan counted in items.
///
/// - `scroll_offset`: top of the viewport in strip coordinates. Offsets past the
///   end of the content are clamped so the last page stays realized.
/// - `viewport_extent`: size of the viewport in strip coordinates.
/// - `overscan_before` / `overscan_after`: extra items realized on each side.
///
/// Every item intersecting the viewport is realized. The trailing overscan absorbs
/// a partially visible last item, so for uniform extents and `overscan_after >= 1`
/// the realized count never exceeds
/// `ceil(viewport_extent / extent) + overscan_before + overscan_after`.
pub fn compute_visible_strip<M>(
    model: &mut M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan_before: usize,
    overscan_after: usize,
) -> VisibleStrip<M::Scalar>
where
    M: ExtentModel,
{
    type S<M> = <M as ExtentModel>::Scalar;
    let zero = S::<M>::zero();
    let len = model.len();
    if len == 0 {
        return VisibleStrip::empty();
    }

    let content_extent = model.total_extent().max(zero);
    if content_extent == zero {
        // All items collapsed; treat as empty strip.
        return VisibleStrip::empty();
    }

    let viewport_extent = viewport_extent.max(zero);
    let max_scroll = (content_extent - viewport_extent).max(zero);
    let scroll_offset = scroll_offset.max(zero).min(max_scroll);
    let view_end = scroll_offset + viewport_extent;

    let mut first = cmp::min(model.index_at_offset(scroll_offset), len - 1);
    while first > 0 && model.offset_of(first) > scroll_offset {
        first -= 1;
    }

    // Items actually intersecting the viewport.
    let mut visible_end = first;
    while visible_end < len && model.offset_of(visible_end) < view_end {
        visible_end += 1;
    }

    // Items needed to cover one viewport measured from the top of `first`.
    let mut fit = 0;
    let mut covered = zero;
    while first + fit < len && covered < viewport_extent {
        covered = covered + model.extent_of(first + fit);
        fit += 1;
    }

    let start = first.saturating_sub(overscan_before);
    let end = cmp::min(
        cmp::max(first + fit + overscan_after, visible_end),
        len,
    );

    let before_extent = model.offset_of(start);
    let end_start = if end < len {
        model.offset_of(end)
    } else {
        content_extent
    };

    VisibleStrip {
        start,
        end,
        before_extent,
        after_extent: (content_extent - end_start).max(zero),
        content_extent,
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ExtentModel, VisibleStrip, compute_visible_strip};
    use crate::FixedExtentModel;

    #[derive(Clone, Debug)]
    struct SimpleModel {
        extents: Vec<f32>,
    }

    impl SimpleModel {
        fn new(extents: &[f32]) -> Self {
            Self {
                extents: extents.to_vec(),
            }
        }
    }

    impl ExtentModel for SimpleModel {
        type Scalar = f32;

        fn len(&self) -> usize {
            self.extents.len()
        }

        fn total_extent(&mut self) -> Self::Scalar {
            self.extents.iter().copied().sum()
        }

        fn extent_of(&mut self, index: usize) -> Self::Scalar {
            self.extents.get(index).copied().unwrap_or(0.0)
        }

        fn offset_of(&mut self, index: usize) -> Self::Scalar {
            self.extents.iter().take(index).copied().sum()
        }

        fn index_at_offset(&mut self, offset: Self::Scalar) -> usize {
            let mut pos = 0.0;
            for (i, extent) in self.extents.iter().copied().enumerate() {
                if pos + extent > offset {
                    return i;
                }
                pos += extent;
            }
            self.extents.len().saturating_sub(1)
        }

        fn set_len(&mut self, len: usize) {
            self.extents.resize(len, 0.0);
        }
    }

    #[test]
    fn empty_model_yields_empty_strip() {
        let mut model = SimpleModel::new(&[]);
        let strip = compute_visible_strip(&mut model, 0.0, 100.0, 2, 2);
        assert_eq!(strip, VisibleStrip::empty());
    }

    #[test]
    fn simple_visible_range() {
        // Three items, each 10 units tall; the viewport straddles items 0 and 1.
        let mut model = SimpleModel::new(&[10.0, 10.0, 10.0]);
        let strip = compute_visible_strip(&mut model, 5.0, 10.0, 0, 0);
        assert_eq!(strip.start, 0);
        assert_eq!(strip.end, 2);
        assert_eq!(strip.before_extent, 0.0);
        assert_eq!(strip.after_extent, 10.0);
        assert_eq!(strip.content_extent, 30.0);
    }

    #[test]
    fn overscan_extends_in_item_counts() {
        let mut model = SimpleModel::new(&[10.0; 10]);
        // Viewport covers items 4 and 5 exactly.
        let strip = compute_visible_strip(&mut model, 40.0, 20.0, 1, 2);
        assert_eq!(strip.start, 3);
        assert_eq!(strip.end, 8);
        assert_eq!(strip.before_extent, 30.0);
        assert_eq!(strip.after_extent, 20.0);
    }

    #[test]
    fn scroll_past_end_keeps_last_page_realized() {
        let mut model = SimpleModel::new(&[10.0; 5]);
        let strip = compute_visible_strip(&mut model, 500.0, 20.0, 0, 1);
        assert_eq!(strip.start, 3);
        assert_eq!(strip.end, 5);
        assert_eq!(strip.after_extent, 0.0);
    }

    #[test]
    fn realized_count_is_bounded_at_every_offset() {
        let mut model = FixedExtentModel::new(500, 48.0_f64);
        let viewport = 400.0;
        let overscan = 2;
        // ceil(400 / 48) = 9.
        let bound = 9 + 2 * overscan;
        let mut offset = 0.0;
        while offset < 500.0 * 48.0 {
            let strip = compute_visible_strip(&mut model, offset, viewport, overscan, overscan);
            assert!(
                strip.len() <= bound,
                "offset {offset} realized {} rows",
                strip.len()
            );
            assert!(strip.len() >= 9, "viewport must stay covered at {offset}");
            offset += 7.0;
        }
    }

    #[test]
    fn large_list_realizes_a_handful_of_rows() {
        let mut model = FixedExtentModel::new(500, 48.0_f64);
        let strip = compute_visible_strip(&mut model, 4800.0, 400.0, 2, 2);
        assert_eq!(strip.start, 98);
        assert_eq!(strip.end, 111);
        assert_eq!(strip.len(), 13);
    }
}
