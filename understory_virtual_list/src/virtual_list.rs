// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state over an [`ExtentModel`], with a cached visible strip.

use crate::{ExtentModel, Scalar, VisibleStrip, compute_visible_strip};

/// Scroll controller for a virtualized list of rows.
///
/// Owns the model, the scroll offset, the viewport extent and a row overscan
/// applied on both sides of the viewport. The last [`VisibleStrip`] is cached
/// until one of those inputs changes.
///
/// Hosts wrap it and turn the strip into realized rows and spacers.
#[derive(Debug)]
pub struct VirtualList<M: ExtentModel> {
    model: M,
    scroll_offset: M::Scalar,
    viewport_extent: M::Scalar,
    overscan: usize,

    dirty: bool,
    last_strip: VisibleStrip<M::Scalar>,
}

impl<M: ExtentModel> VirtualList<M> {
    /// Creates a list scrolled to the top, realizing `overscan` extra rows on
    /// each side of the viewport.
    #[must_use]
    pub fn new(model: M, viewport_extent: M::Scalar, overscan: usize) -> Self {
        Self {
            model,
            scroll_offset: M::Scalar::zero(),
            viewport_extent: viewport_extent.max(M::Scalar::zero()),
            overscan,
            dirty: true,
            last_strip: VisibleStrip::empty(),
        }
    }

    /// The underlying model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutable access to the model. Invalidates the cached strip.
    pub fn model_mut(&mut self) -> &mut M {
        self.dirty = true;
        &mut self.model
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.model.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.model.len() == 0
    }

    /// Sets the number of rows.
    ///
    /// The scroll offset is left alone; see
    /// [`clamp_scroll_to_content`](Self::clamp_scroll_to_content).
    pub fn set_len(&mut self, len: usize) {
        if len != self.model.len() {
            self.model.set_len(len);
            self.dirty = true;
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> M::Scalar {
        self.scroll_offset
    }

    /// Moves the viewport to `offset`, never above the top.
    pub fn set_scroll_offset(&mut self, offset: M::Scalar) {
        let offset = offset.max(M::Scalar::zero());
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Sets the viewport extent. Negative extents become zero.
    pub fn set_viewport_extent(&mut self, extent: M::Scalar) {
        let extent = extent.max(M::Scalar::zero());
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Sets how many rows are realized beyond each edge of the viewport.
    pub fn set_overscan(&mut self, overscan: usize) {
        if overscan != self.overscan {
            self.overscan = overscan;
            self.dirty = true;
        }
    }

    /// The rows to realize for the current scroll position.
    #[must_use]
    pub fn visible_strip(&mut self) -> VisibleStrip<M::Scalar> {
        if self.dirty {
            self.last_strip = compute_visible_strip(
                &mut self.model,
                self.scroll_offset,
                self.viewport_extent,
                self.overscan,
                self.overscan,
            );
            self.dirty = false;
        }
        self.last_strip
    }

    /// Largest offset at which the viewport still ends inside the content.
    #[must_use]
    pub fn max_scroll_offset(&mut self) -> M::Scalar {
        (self.model.total_extent() - self.viewport_extent).max(M::Scalar::zero())
    }

    /// Content left below the viewport; zero once the bottom is in view.
    #[must_use]
    pub fn distance_to_end(&mut self) -> M::Scalar {
        let bottom = self.scroll_offset + self.viewport_extent;
        (self.model.total_extent() - bottom).max(M::Scalar::zero())
    }

    /// Pulls the scroll offset back to [`max_scroll_offset`](Self::max_scroll_offset)
    /// if it lies past it.
    pub fn clamp_scroll_to_content(&mut self) {
        let max_offset = self.max_scroll_offset();
        if self.scroll_offset > max_offset {
            self.set_scroll_offset(max_offset);
        }
    }

    /// Scrolls the least distance that shows row `index` in full.
    ///
    /// Rows already inside the viewport do not move it. Out-of-range indices
    /// target the last row.
    pub fn scroll_into_view(&mut self, index: usize) {
        let Some(last) = self.model.len().checked_sub(1) else {
            self.set_scroll_offset(M::Scalar::zero());
            return;
        };
        let index = index.min(last);
        let top = self.model.offset_of(index);
        let bottom = top + self.model.extent_of(index);
        if top < self.scroll_offset {
            self.set_scroll_offset(top);
        } else if bottom > self.scroll_offset + self.viewport_extent {
            self.set_scroll_offset(bottom - self.viewport_extent);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedExtentModel, VirtualList};

    #[test]
    fn strip_follows_scroll_and_viewport() {
        let mut list = VirtualList::new(FixedExtentModel::new(100, 10.0_f32), 50.0, 0);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (0, 5));

        list.set_scroll_offset(10.0);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (1, 6));

        list.set_viewport_extent(20.0);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (1, 3));

        list.set_overscan(2);
        let strip = list.visible_strip();
        assert_eq!((strip.start, strip.end), (0, 5));
    }

    #[test]
    fn resizing_invalidates_cached_strip() {
        let mut list = VirtualList::new(FixedExtentModel::new(2, 10.0_f64), 50.0, 1);
        assert_eq!(list.visible_strip().end, 2);

        list.set_len(20);
        let strip = list.visible_strip();
        assert_eq!(strip.end, 6);
        assert_eq!(strip.content_extent, 200.0);
    }

    #[test]
    fn scroll_into_view_moves_the_least_distance() {
        let mut list = VirtualList::new(FixedExtentModel::new(10, 10.0_f64), 30.0, 0);

        list.scroll_into_view(2);
        assert_eq!(list.scroll_offset(), 0.0);

        list.scroll_into_view(5);
        assert_eq!(list.scroll_offset(), 30.0);

        list.scroll_into_view(1);
        assert_eq!(list.scroll_offset(), 10.0);

        list.scroll_into_view(42);
        assert_eq!(list.scroll_offset(), 70.0);

        list.set_len(0);
        list.scroll_into_view(3);
        assert_eq!(list.scroll_offset(), 0.0);
        assert!(list.is_empty());
    }

    #[test]
    fn clamp_and_distance_to_end() {
        // 50 of content in a 30 viewport.
        let mut list = VirtualList::new(FixedExtentModel::new(5, 10.0_f64), 30.0, 1);
        assert_eq!(list.distance_to_end(), 20.0);

        list.set_scroll_offset(100.0);
        list.clamp_scroll_to_content();
        assert_eq!(list.scroll_offset(), 20.0);
        assert_eq!(list.distance_to_end(), 0.0);

        list.set_len(1);
        list.clamp_scroll_to_content();
        assert_eq!(list.scroll_offset(), 0.0);
        assert_eq!(list.max_scroll_offset(), 0.0);
    }
}
