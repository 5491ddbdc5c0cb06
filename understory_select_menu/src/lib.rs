// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Select Menu: a headless selectable-menu engine.
//!
//! The crate turns caller-owned groups of items plus caller-owned selection state
//! into render-ready rows, and turns user input back into notifications. It draws
//! nothing and owns no items; hosts draw [`MenuContent`] and re-supply state.
//!
//! The pieces, bottom-up:
//!
//! - [`MenuItem`] / [`MenuGroup`]: the item model. Items may carry a submenu of
//!   further items. [`MenuItem::value`] is the only key for selection.
//! - [`filter`]: case-insensitive substring search over labels and sub-labels,
//!   recursive through submenus, plus the optional custom-value entry.
//! - [`flatten`]: groups to a single row sequence of headings, items, and
//!   separators, for the virtual list.
//! - [`Selection`] / [`resolve_decoration`]: membership and the checkbox or
//!   checkmark drawn on each item.
//! - [`MenuPass`]: one set of `{groups, search text, config}`, filtered and
//!   flattened.
//! - [`MenuController`]: open state, search text, keyboard focus, submenus,
//!   scrolling, and pagination. Rows go through
//!   [`understory_virtual_list`] when virtualization is enabled or a search is
//!   in progress.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_select_menu::{
//!     Key, MenuConfig, MenuContent, MenuController, MenuEvent, MenuGroup, MenuItem,
//!     Selection,
//! };
//!
//! let groups = vec![MenuGroup::labeled(
//!     "Fruit",
//!     vec![
//!         MenuItem::new("Apple", "apple"),
//!         MenuItem::new("Banana", "banana").with_disabled(true),
//!         MenuItem::new("Cherry", "cherry"),
//!     ],
//! )];
//!
//! let mut menu = MenuController::new(MenuConfig::default()).unwrap();
//! let mut events: Vec<MenuEvent> = Vec::new();
//! menu.open(&mut events);
//!
//! let pass = menu.prepare(&groups);
//! let MenuContent::Nested(nested) = menu.content(&pass, Selection::Single(None)) else {
//!     unreachable!("short, unsearched menus render nested");
//! };
//! assert_eq!(nested[0].label, Some("Fruit"));
//!
//! // Arrow-Down twice skips the disabled item; Enter selects and closes.
//! menu.handle_key(Key::ArrowDown, &pass, &mut events);
//! menu.handle_key(Key::ArrowDown, &pass, &mut events);
//! menu.handle_key(Key::Enter, &pass, &mut events);
//! assert_eq!(
//!     events,
//!     vec![
//!         MenuEvent::OpenChange(true),
//!         MenuEvent::Select("cherry".into()),
//!         MenuEvent::OpenChange(false),
//!     ]
//! );
//! ```
//!
//! Selection is never mutated here: `on_select` reports the value, and the caller
//! toggles or replaces its own state before the next [`MenuController::content`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod callbacks;
mod config;
mod controller;
mod error;
mod filter;
mod flatten;
mod item;
mod keyboard;
mod navigation;
mod pass;
mod selection;
mod view;
mod window;

pub use callbacks::{MenuCallbacks, MenuEvent, NoCallbacks};
pub use config::MenuConfig;
pub use controller::{Activation, KeyOutcome, MenuController, MenuFocus, MenuState};
pub use error::{ConfigError, ConfigResult};
pub use filter::{
    DEFAULT_CUSTOM_VALUE_LABEL, MAX_SUBMENU_DEPTH, Searched, apply_search, custom_value_item,
    filter, has_exact_match, wants_custom_value,
};
pub use flatten::{EntryId, EntryKind, FlatEntry, flatten};
pub use item::{ItemPath, ItemSlots, MenuGroup, MenuItem, SlotSymbol, item_at, item_count};
pub use keyboard::{Key, KeyEvent, Modifiers};
pub use navigation::{Navigation, navigate};
pub use pass::{MenuPass, PassStatus};
pub use selection::{
    Decoration, Selection, SelectionLookup, SelectionMode, is_selected, resolve_decoration,
};
pub use view::{
    ItemRow, MenuContent, NestedGroup, RowKind, SubmenuView, VirtualRow, WindowedRows,
};
