// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Virtual list and pagination latch for the flattened rows.

use tracing::trace;
use understory_virtual_list::{
    EndReached, ExtentModel, FixedExtentModel, VirtualList, VisibleStrip,
};

use crate::config::MenuConfig;

#[derive(Debug)]
pub(crate) struct MenuWindow {
    list: VirtualList<FixedExtentModel<f64>>,
    end_reached: EndReached<f64>,
}

impl MenuWindow {
    pub(crate) fn new(config: &MenuConfig) -> Self {
        let model = FixedExtentModel::new(0, config.virtual_list_item_height);
        Self {
            list: VirtualList::new(model, config.viewport_height, config.virtual_list_overscan),
            end_reached: EndReached::new(config.end_reached_threshold),
        }
    }

    pub(crate) fn configure(&mut self, config: &MenuConfig) {
        self.list
            .model_mut()
            .set_row_height(config.virtual_list_item_height);
        self.list.set_viewport_extent(config.viewport_height);
        self.list.set_overscan(config.virtual_list_overscan);
        self.end_reached.set_threshold(config.end_reached_threshold);
    }

    /// Resizes to `len` rows, pulling the scroll offset back inside the content.
    pub(crate) fn sync_len(&mut self, len: usize) {
        self.list.set_len(len);
        self.list.clamp_scroll_to_content();
    }

    pub(crate) fn set_viewport_height(&mut self, height: f64) {
        self.list.set_viewport_extent(height);
    }

    pub(crate) fn strip(&mut self) -> VisibleStrip<f64> {
        let strip = self.list.visible_strip();
        trace!(
            start = strip.start,
            end = strip.end,
            scroll = self.list.scroll_offset(),
            "window recomputed"
        );
        strip
    }

    pub(crate) fn row_height(&self) -> f64 {
        self.list.model().row_height()
    }

    pub(crate) fn row_top(&mut self, index: usize) -> f64 {
        self.list.model_mut().offset_of(index)
    }

    pub(crate) fn scroll_offset(&self) -> f64 {
        self.list.scroll_offset()
    }

    pub(crate) fn scroll_to(&mut self, offset: f64) {
        self.list.set_scroll_offset(offset);
        self.list.clamp_scroll_to_content();
    }

    pub(crate) fn scroll_into_view(&mut self, row: usize) {
        self.list.scroll_into_view(row);
    }

    /// Returns `true` when a pagination request should go out now.
    pub(crate) fn poll_end_reached(&mut self, has_more: bool) -> bool {
        let distance = self.list.distance_to_end();
        self.end_reached.check(distance, self.list.len(), has_more)
    }

    pub(crate) fn reset(&mut self) {
        self.list.set_scroll_offset(0.0);
        self.end_reached.reset();
    }
}
