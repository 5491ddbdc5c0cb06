// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One render pass: filtered groups plus their flattened rows.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use smallvec::smallvec;

use crate::config::MenuConfig;
use crate::filter::apply_search;
use crate::flatten::{EntryKind, FlatEntry, flatten};
use crate::item::{ItemPath, MenuGroup, MenuItem, item_at, item_count};

/// What a pass has to show.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PassStatus {
    /// The caller supplied no items.
    NoItems,
    /// Items exist but the search matched none of them.
    NoResults,
    /// There are rows to render.
    Rows,
}

/// Derived, read-only view of the menu for one set of inputs.
///
/// Built from `{groups, search text, configuration}` and discarded when any of
/// them changes. With an empty search the filtered groups are the caller's
/// groups, borrowed.
#[derive(Clone, Debug)]
pub struct MenuPass<'g> {
    groups: Cow<'g, [MenuGroup]>,
    entries: Vec<FlatEntry>,
    virtualized: bool,
    search_active: bool,
    custom_value: bool,
    source_items: usize,
}

impl<'g> MenuPass<'g> {
    /// Filters and flattens `groups` for `search` under `config`.
    ///
    /// `search` is ignored unless search is enabled.
    #[must_use]
    pub fn new(groups: &'g [MenuGroup], search: &str, config: &MenuConfig) -> Self {
        let search = if config.enable_search { search } else { "" };
        let searched = apply_search(groups, search, config.custom_value_template());
        let entries = flatten(&searched.groups);
        Self {
            groups: searched.groups,
            entries,
            virtualized: config.enable_virtualization || !search.is_empty(),
            search_active: !search.is_empty(),
            custom_value: searched.custom_value,
            source_items: item_count(groups),
        }
    }

    /// The filtered groups.
    #[must_use]
    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// The flattened rows of [`groups`](Self::groups).
    #[must_use]
    pub fn entries(&self) -> &[FlatEntry] {
        &self.entries
    }

    /// Whether rows go through the virtual list.
    ///
    /// True when virtualization is enabled or a search is in progress.
    #[must_use]
    pub const fn is_virtualized(&self) -> bool {
        self.virtualized
    }

    /// Whether a non-empty search produced this pass.
    #[must_use]
    pub const fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// Whether the last group holds a synthesized custom-value entry.
    #[must_use]
    pub const fn has_custom_value(&self) -> bool {
        self.custom_value
    }

    /// Overall display state.
    #[must_use]
    pub fn status(&self) -> PassStatus {
        if self
            .entries
            .iter()
            .any(|entry| matches!(entry.kind, EntryKind::Item { .. }))
        {
            PassStatus::Rows
        } else if self.source_items == 0 {
            PassStatus::NoItems
        } else {
            PassStatus::NoResults
        }
    }

    /// The item shown on row `row`, if that row is an item.
    #[must_use]
    pub fn item(&self, row: usize) -> Option<&MenuItem> {
        self.entries.get(row)?.item(&self.groups)
    }

    /// Returns `true` if row `row` can take keyboard focus and be selected.
    #[must_use]
    pub fn is_row_eligible(&self, row: usize) -> bool {
        self.item(row).is_some_and(|item| !item.disabled)
    }

    /// Returns `true` if row `row` is the custom-value entry.
    #[must_use]
    pub fn is_custom_value_row(&self, row: usize) -> bool {
        self.custom_value
            && matches!(
                self.entries.get(row).map(|entry| entry.kind),
                Some(EntryKind::Item { group, .. }) if group + 1 == self.groups.len()
            )
    }

    /// Path of the item on row `row`.
    #[must_use]
    pub fn row_path(&self, row: usize) -> Option<ItemPath> {
        match self.entries.get(row)?.kind {
            EntryKind::Item { group, index } => Some(smallvec![group, index]),
            EntryKind::Label { .. } | EntryKind::Separator { .. } => None,
        }
    }

    /// Row showing the top-level item at `path`, if any.
    #[must_use]
    pub fn row_of(&self, path: &[usize]) -> Option<usize> {
        let [group, index] = path else {
            return None;
        };
        self.entries.iter().position(|entry| {
            entry.kind
                == EntryKind::Item {
                    group: *group,
                    index: *index,
                }
        })
    }

    /// Returns `true` if the item at `path` and every submenu trigger above it
    /// exist and are enabled.
    #[must_use]
    pub fn is_path_enabled(&self, path: &[usize]) -> bool {
        path.len() >= 2
            && (2..=path.len())
                .all(|end| self.item_at(&path[..end]).is_some_and(|item| !item.disabled))
    }

    /// Resolves an item path against the filtered groups.
    #[must_use]
    pub fn item_at(&self, path: &[usize]) -> Option<&MenuItem> {
        item_at(&self.groups, path)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    fn fruit() -> Vec<MenuGroup> {
        vec![MenuGroup::new(vec![
            MenuItem::new("Apple", "a"),
            MenuItem::new("Banana", "b").with_disabled(true),
        ])]
    }

    fn searchable() -> MenuConfig {
        MenuConfig {
            enable_search: true,
            ..MenuConfig::default()
        }
    }

    #[test]
    fn virtualization_follows_search_text() {
        let groups = fruit();
        let config = searchable();
        assert!(!MenuPass::new(&groups, "", &config).is_virtualized());
        assert!(MenuPass::new(&groups, "a", &config).is_virtualized());

        let config = MenuConfig {
            enable_virtualization: true,
            ..MenuConfig::default()
        };
        assert!(MenuPass::new(&groups, "", &config).is_virtualized());
    }

    #[test]
    fn search_is_ignored_when_disabled() {
        let groups = fruit();
        let pass = MenuPass::new(&groups, "zz", &MenuConfig::default());
        assert!(!pass.is_search_active());
        assert_eq!(pass.entries().len(), 2);
    }

    #[test]
    fn status_distinguishes_empty_input_from_no_matches() {
        let config = searchable();
        assert_eq!(MenuPass::new(&[], "", &config).status(), PassStatus::NoItems);
        assert_eq!(
            MenuPass::new(&[MenuGroup::labeled("Empty", Vec::new())], "", &config).status(),
            PassStatus::NoItems
        );

        let groups = fruit();
        assert_eq!(
            MenuPass::new(&groups, "zz", &config).status(),
            PassStatus::NoResults
        );
        assert_eq!(MenuPass::new(&groups, "", &config).status(), PassStatus::Rows);
    }

    #[test]
    fn custom_value_row_is_last() {
        let groups = fruit();
        let config = MenuConfig {
            allow_custom_value: true,
            ..searchable()
        };
        let pass = MenuPass::new(&groups, "zz", &config);
        assert!(pass.has_custom_value());
        assert_eq!(pass.status(), PassStatus::Rows);
        assert_eq!(pass.entries().len(), 1);
        assert!(pass.is_custom_value_row(0));
        assert_eq!(pass.item(0).map(|i| i.value.as_str()), Some("zz"));

        let pass = MenuPass::new(&groups, "apple", &config);
        assert!(!pass.has_custom_value());
        assert!(!pass.is_custom_value_row(0));
    }

    #[test]
    fn whitespace_search_offers_a_custom_value() {
        let groups = vec![MenuGroup::new(vec![MenuItem::new("Apple", "a")])];
        let config = MenuConfig {
            allow_custom_value: true,
            ..searchable()
        };
        let pass = MenuPass::new(&groups, "  ", &config);
        assert!(pass.has_custom_value());
        assert_eq!(pass.status(), PassStatus::Rows);
        assert_eq!(pass.item(0).map(|i| i.value.as_str()), Some("  "));
    }

    #[test]
    fn custom_value_requires_search_enabled() {
        let groups = fruit();
        let config = MenuConfig {
            allow_custom_value: true,
            enable_virtualization: true,
            ..MenuConfig::default()
        };
        let pass = MenuPass::new(&groups, "zz", &config);
        assert!(!pass.has_custom_value());
        assert_eq!(pass.entries().len(), 2);
    }

    #[test]
    fn rows_map_to_paths_and_back() {
        let groups = vec![
            MenuGroup::labeled("Fruit", vec![MenuItem::new("Apple", "a")]).with_separator(),
            MenuGroup::new(vec![MenuItem::new("Carrot", "c")]),
        ];
        let pass = MenuPass::new(&groups, "", &MenuConfig::default());
        // Label, Apple, separator, Carrot.
        assert_eq!(pass.row_path(0), None);
        assert_eq!(pass.row_path(3).as_deref(), Some(&[1, 0][..]));
        assert_eq!(pass.row_of(&[1, 0]), Some(3));
        assert_eq!(pass.row_of(&[1, 0, 0]), None);
        assert!(pass.is_row_eligible(1));
        assert!(!pass.is_row_eligible(2));
    }

    #[test]
    fn disabled_triggers_disable_their_children() {
        let groups = vec![MenuGroup::new(vec![
            MenuItem::new("Locked", "locked")
                .with_disabled(true)
                .with_submenu(vec![MenuItem::new("Inner", "inner")]),
            MenuItem::new("Open", "open").with_submenu(vec![
                MenuItem::new("Kept", "kept"),
                MenuItem::new("Off", "off").with_disabled(true),
            ]),
        ])];
        let pass = MenuPass::new(&groups, "", &MenuConfig::default());
        assert!(!pass.is_path_enabled(&[0, 0, 0]));
        assert!(pass.is_path_enabled(&[0, 1, 0]));
        assert!(!pass.is_path_enabled(&[0, 1, 1]));
        assert!(!pass.is_path_enabled(&[0, 1, 9]));
        assert!(!pass.is_path_enabled(&[0]));
    }

    #[test]
    fn disabled_items_are_not_eligible() {
        let groups = fruit();
        let pass = MenuPass::new(&groups, "", &MenuConfig::default());
        assert!(pass.is_row_eligible(0));
        assert!(!pass.is_row_eligible(1));
        assert!(!pass.is_row_eligible(7));
    }
}
