// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu data model: groups, items, and nested submenus.

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

/// Opaque handle for host-rendered slot content (icons, avatars, badges, buttons).
///
/// The engine never interprets it; hosts map symbols to whatever they render,
/// for example through an interned table or an enum-to-symbol mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotSymbol(pub u64);

/// The four optional decoration slots of an item.
///
/// When the menu is selectable, the selection decoration (see
/// [`Decoration`](crate::Decoration)) is drawn in addition to `end`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSlots {
    /// Leading slot.
    pub start: Option<SlotSymbol>,
    /// Second leading slot, drawn after `start`.
    pub start_secondary: Option<SlotSymbol>,
    /// Trailing slot.
    pub end: Option<SlotSymbol>,
    /// Second trailing slot, drawn before `end`.
    pub end_secondary: Option<SlotSymbol>,
}

/// A single selectable row.
///
/// `value` is the only key used for selection; `label` is display text and is never
/// compared for equality. Both may be empty: such an item still renders (with no
/// text) and still reports its empty value when selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItem {
    /// Display text.
    pub label: String,
    /// Selection key.
    pub value: String,
    /// Secondary text shown under or beside the label. Searched like the label.
    pub sub_label: Option<String>,
    /// Host-rendered decorations.
    pub slots: ItemSlots,
    /// Disabled items are skipped by keyboard navigation and never selected.
    pub disabled: bool,
    /// Tooltip text, forwarded to the host tooltip primitive.
    pub tooltip: Option<String>,
    /// Child items shown as a nested menu.
    pub submenu: Option<Vec<MenuItem>>,
    /// Suppresses label truncation.
    pub no_truncate: bool,
}

impl MenuItem {
    /// Creates an enabled item with the given label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the sub-label.
    #[must_use]
    pub fn with_sub_label(mut self, sub_label: impl Into<String>) -> Self {
        self.sub_label = Some(sub_label.into());
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the tooltip.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Attaches a submenu.
    #[must_use]
    pub fn with_submenu(mut self, items: Vec<Self>) -> Self {
        self.submenu = Some(items);
        self
    }

    /// Sets the decoration slots.
    #[must_use]
    pub fn with_slots(mut self, slots: ItemSlots) -> Self {
        self.slots = slots;
        self
    }

    /// Returns `true` if this item opens a non-empty submenu instead of being selected.
    #[must_use]
    pub fn has_submenu(&self) -> bool {
        self.submenu.as_ref().is_some_and(|items| !items.is_empty())
    }

    /// Child items, or an empty slice.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        self.submenu.as_deref().unwrap_or_default()
    }
}

/// An ordered cluster of items with an optional heading and trailing separator.
///
/// Groups have no identity beyond their position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuGroup {
    /// Heading rendered above the items.
    pub label: Option<String>,
    /// Items in display order.
    pub items: Vec<MenuItem>,
    /// Whether a separator follows this group. Ignored on the last group.
    pub separator: bool,
}

impl MenuGroup {
    /// Creates an unlabeled group without a separator.
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            label: None,
            items,
            separator: false,
        }
    }

    /// Creates a labeled group without a separator.
    pub fn labeled(label: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            label: Some(label.into()),
            items,
            separator: false,
        }
    }

    /// Requests a separator after this group.
    #[must_use]
    pub fn with_separator(mut self) -> Self {
        self.separator = true;
        self
    }
}

/// Address of an item: `[group, item, child, grandchild, ...]`.
pub type ItemPath = SmallVec<[usize; 4]>;

/// Resolves an [`ItemPath`] against `groups`.
///
/// Returns `None` for paths shorter than two segments or pointing outside the data.
#[must_use]
pub fn item_at<'a>(groups: &'a [MenuGroup], path: &[usize]) -> Option<&'a MenuItem> {
    let [group, index, rest @ ..] = path else {
        return None;
    };
    let mut item = groups.get(*group)?.items.get(*index)?;
    for &child in rest {
        item = item.children().get(child)?;
    }
    Some(item)
}

/// Total number of top-level items across all groups.
#[must_use]
pub fn item_count(groups: &[MenuGroup]) -> usize {
    groups.iter().map(|group| group.items.len()).sum()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use smallvec::smallvec;

    use super::*;

    fn fixture() -> Vec<MenuGroup> {
        vec![
            MenuGroup::labeled("Fruit", vec![MenuItem::new("Apple", "a")]),
            MenuGroup::new(vec![
                MenuItem::new("Banana", "b"),
                MenuItem::new("More", "more").with_submenu(vec![
                    MenuItem::new("Cherry", "c"),
                    MenuItem::new("Citrus", "citrus")
                        .with_submenu(vec![MenuItem::new("Lime", "l")]),
                ]),
            ]),
        ]
    }

    #[test]
    fn paths_resolve_through_submenus() {
        let groups = fixture();
        let lime: ItemPath = smallvec![1, 1, 1, 0];
        assert_eq!(item_at(&groups, &lime).map(|i| i.value.as_str()), Some("l"));
        assert_eq!(item_at(&groups, &[0, 0]).map(|i| i.value.as_str()), Some("a"));
        assert!(item_at(&groups, &[0]).is_none());
        assert!(item_at(&groups, &[1, 0, 0]).is_none());
        assert!(item_at(&groups, &[5, 0]).is_none());
    }

    #[test]
    fn empty_submenu_is_not_a_submenu() {
        let item = MenuItem::new("Empty", "e").with_submenu(Vec::new());
        assert!(!item.has_submenu());
        assert!(item.children().is_empty());
        assert!(fixture()[1].items[1].has_submenu());
    }

    #[test]
    fn malformed_items_default_to_empty_text() {
        let item = MenuItem::default();
        assert!(item.label.is_empty());
        assert!(item.value.is_empty());
        assert!(!item.disabled);
    }

    #[test]
    fn counts_top_level_items_only() {
        assert_eq!(item_count(&fixture()), 3);
        assert_eq!(item_count(&[]), 0);
    }
}
