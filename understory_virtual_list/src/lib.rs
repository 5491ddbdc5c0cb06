// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Virtual List: core 1D virtualization primitives.
//!
//! This crate provides a small, renderer-agnostic core for virtualizing a dense strip
//! of rows indexed `0..len`, such as the rows of a long dropdown or picker.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents, offsets,
//!   and scroll positions.
//! - [`ExtentModel`]: a trait describing a 1D strip of items with per-item extents
//!   and offset queries. [`FixedExtentModel`] implements it for uniform rows.
//! - [`compute_visible_strip`]: given a scroll offset, viewport extent, and overscan
//!   counted in rows, returns which indices should be realized plus how much padding
//!   exists before and after them.
//! - [`VirtualList`]: a controller that wraps an [`ExtentModel`], scroll state,
//!   viewport extent, and overscan, and caches the most recent [`VisibleStrip`].
//!   It also scrolls a row into view and clamps the offset to the content.
//! - [`EndReached`]: a latch that turns "the viewport is near the end" into a single
//!   pagination request per crossing.
//!
//! This crate deliberately does **not** know about widgets, display trees, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Owning the actual data and view/widget instances.
//! - Calling [`VirtualList::visible_strip`] when scroll or viewport changes.
//! - Diffing the returned `[start, end)` index range to create/destroy rows.
//! - Requesting more data when [`EndReached::check`] says so.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_list::{EndReached, FixedExtentModel, VirtualList};
//!
//! // 500 rows, each 48 logical pixels tall, in a 400px viewport with 2 rows of overscan.
//! let model = FixedExtentModel::new(500, 48.0);
//! let mut list = VirtualList::new(model, 400.0, 2);
//!
//! let strip = list.visible_strip();
//! assert_eq!(strip.start, 0);
//! assert!(strip.len() <= 9 + 4);
//!
//! // Jump to the bottom and ask whether to load more.
//! let mut end_reached = EndReached::new(96.0);
//! let bottom = list.max_scroll_offset();
//! list.set_scroll_offset(bottom);
//! assert!(end_reached.check(list.distance_to_end(), list.len(), true));
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite and non-negative.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod end_reached;
mod fixed;
mod model;
mod scalar;
mod virtual_list;

pub use end_reached::EndReached;
pub use fixed::FixedExtentModel;
pub use model::{ExtentModel, VisibleStrip, compute_visible_strip};
pub use scalar::Scalar;
pub use virtual_list::VirtualList;
