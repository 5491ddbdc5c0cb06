// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outbound notifications from the menu to its host.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Receiver for menu notifications.
///
/// All methods default to doing nothing, so hosts implement only what they use.
/// The engine never mutates selection or open state on the caller's behalf: it
/// reports intent through these methods and the caller re-supplies state.
pub trait MenuCallbacks {
    /// A selection gesture (click, Enter, or Space) landed on an enabled item.
    fn on_select(&mut self, value: &str) {
        let _ = value;
    }

    /// The menu opened (`true`) or closed (`false`).
    fn on_open_change(&mut self, open: bool) {
        let _ = open;
    }

    /// The list scrolled within the pagination threshold of its end while the
    /// host reported more items.
    fn on_end_reached(&mut self) {}
}

/// A notification, as recorded by the [`MenuCallbacks`] impl on `Vec<MenuEvent>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuEvent {
    /// See [`MenuCallbacks::on_select`].
    Select(String),
    /// See [`MenuCallbacks::on_open_change`].
    OpenChange(bool),
    /// See [`MenuCallbacks::on_end_reached`].
    EndReached,
}

impl MenuCallbacks for Vec<MenuEvent> {
    fn on_select(&mut self, value: &str) {
        self.push(MenuEvent::Select(value.to_string()));
    }

    fn on_open_change(&mut self, open: bool) {
        self.push(MenuEvent::OpenChange(open));
    }

    fn on_end_reached(&mut self) {
        self.push(MenuEvent::EndReached);
    }
}

/// Ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCallbacks;

impl MenuCallbacks for NoCallbacks {}
