// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render-ready output of the menu controller.

use alloc::vec::Vec;

use crate::flatten::EntryId;
use crate::item::{ItemPath, MenuItem};
use crate::selection::{Decoration, SelectionLookup, SelectionMode, resolve_decoration};

/// An item together with everything needed to draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemRow<'p> {
    /// The item. Labels and values may be empty.
    pub item: &'p MenuItem,
    /// Address of the item within the filtered groups.
    pub path: ItemPath,
    /// Whether the item's value is selected.
    pub selected: bool,
    /// Selection control to draw at the trailing edge.
    pub decoration: Decoration,
    /// Whether the item has keyboard focus.
    pub focused: bool,
    /// Whether this is the synthesized custom-value entry.
    pub custom_value: bool,
    /// Whether this item's submenu is currently open.
    pub submenu_open: bool,
}

/// Row content in the windowed list.
#[derive(Clone, Debug, PartialEq)]
pub enum RowKind<'p> {
    /// Group heading.
    Label(&'p str),
    /// Separator between groups.
    Separator,
    /// Selectable item.
    Item(ItemRow<'p>),
}

/// A realized row of the windowed list, positioned in list coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct VirtualRow<'p> {
    /// Index of the row in the flattened sequence.
    pub index: usize,
    /// Per-pass identifier, usable as a render key.
    pub id: EntryId,
    /// Offset of the top of the row from the top of the content.
    pub top: f64,
    /// Row height.
    pub height: f64,
    /// Row content.
    pub kind: RowKind<'p>,
}

/// The realized slice of a virtualized menu.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowedRows<'p> {
    /// Rows to draw, in order.
    pub rows: Vec<VirtualRow<'p>>,
    /// Spacer above the first row.
    pub before_extent: f64,
    /// Spacer below the last row.
    pub after_extent: f64,
    /// Height of the whole list.
    pub content_extent: f64,
    /// Current scroll offset.
    pub scroll_offset: f64,
}

/// A group rendered in its natural, non-flattened form.
#[derive(Clone, Debug, PartialEq)]
pub struct NestedGroup<'p> {
    /// Heading.
    pub label: Option<&'p str>,
    /// Items in order.
    pub items: Vec<ItemRow<'p>>,
    /// Whether to draw a separator after this group (never after the last one).
    pub separator: bool,
}

/// The children of an open submenu.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmenuView<'p> {
    /// The item that opened this submenu.
    pub trigger: &'p MenuItem,
    /// Path of the trigger.
    pub path: ItemPath,
    /// Child rows.
    pub items: Vec<ItemRow<'p>>,
}

/// What the host should draw inside the open menu surface.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuContent<'p> {
    /// Placeholder: the menu has no items.
    NoItems,
    /// Placeholder: the search matched nothing.
    NoResults,
    /// Groups drawn directly, with native nesting and traversal.
    Nested(Vec<NestedGroup<'p>>),
    /// The realized window of the flattened rows.
    Windowed(WindowedRows<'p>),
}

/// Shared inputs for building [`ItemRow`]s during one content call.
pub(crate) struct RowContext<'s> {
    pub(crate) lookup: SelectionLookup<'s>,
    pub(crate) mode: SelectionMode,
    pub(crate) focused: Option<ItemPath>,
    pub(crate) open_trigger: Option<ItemPath>,
}

impl RowContext<'_> {
    pub(crate) fn item_row<'p>(
        &self,
        item: &'p MenuItem,
        path: ItemPath,
        custom_value: bool,
    ) -> ItemRow<'p> {
        let selected = self.lookup.contains(&item.value);
        ItemRow {
            item,
            selected,
            decoration: resolve_decoration(self.mode, selected, item),
            focused: self.focused.as_ref() == Some(&path),
            custom_value,
            submenu_open: self.open_trigger.as_ref() == Some(&path),
            path,
        }
    }
}
