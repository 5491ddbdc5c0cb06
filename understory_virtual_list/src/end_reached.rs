// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latch for infinite-scroll pagination requests.

use crate::Scalar;

/// Decides when a host should request more items.
///
/// The latch fires once when the viewport comes within `threshold` of the end of
/// the content while more items are available. It then stays latched, so that
/// continued scrolling past the threshold does not fire again, until one of:
///
/// - the item count changes (new items arrived, or the list was replaced),
/// - the `has_more` flag changes,
/// - the viewport moves back beyond the threshold (the next approach is a new crossing),
/// - [`EndReached::reset`] is called.
///
/// ```rust
/// use understory_virtual_list::EndReached;
///
/// let mut latch = EndReached::new(50.0_f64);
/// assert!(latch.check(10.0, 100, true));
/// // Still near the end with the same items: latched.
/// assert!(!latch.check(0.0, 100, true));
/// // More items arrived.
/// assert!(!latch.check(400.0, 150, true));
/// assert!(latch.check(20.0, 150, true));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EndReached<S: Scalar> {
    threshold: S,
    armed: bool,
    seen_len: Option<usize>,
    seen_has_more: bool,
}

impl<S: Scalar> EndReached<S> {
    /// Creates an armed latch with the given distance `threshold`.
    ///
    /// Negative thresholds are clamped to zero.
    #[must_use]
    pub fn new(threshold: S) -> Self {
        Self {
            threshold: threshold.max(S::zero()),
            armed: true,
            seen_len: None,
            seen_has_more: false,
        }
    }

    /// Returns the distance threshold.
    #[must_use]
    pub const fn threshold(&self) -> S {
        self.threshold
    }

    /// Sets the distance threshold. Negative thresholds are clamped to zero.
    pub fn set_threshold(&mut self, threshold: S) {
        self.threshold = threshold.max(S::zero());
    }

    /// Returns `true` if the next qualifying [`check`](Self::check) would fire.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.armed
    }

    /// Re-arms the latch and forgets the observed item count.
    pub fn reset(&mut self) {
        self.armed = true;
        self.seen_len = None;
        self.seen_has_more = false;
    }

    /// Feeds the current scroll state and returns `true` if a pagination request
    /// should be issued now.
    ///
    /// - `distance_to_end`: distance from the bottom of the viewport to the end of
    ///   the content, as returned by [`VirtualList::distance_to_end`](crate::VirtualList::distance_to_end).
    /// - `len`: current item count.
    /// - `has_more`: whether the host can supply more items.
    pub fn check(&mut self, distance_to_end: S, len: usize, has_more: bool) -> bool {
        if self.seen_len != Some(len) || self.seen_has_more != has_more {
            self.seen_len = Some(len);
            self.seen_has_more = has_more;
            self.armed = true;
        }

        if distance_to_end > self.threshold {
            self.armed = true;
            return false;
        }

        if !has_more || !self.armed {
            return false;
        }

        self.armed = false;
        true
    }
}
