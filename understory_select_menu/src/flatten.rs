// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening groups into a linear, addressable row sequence.

use alloc::vec::Vec;

use crate::item::{MenuGroup, MenuItem};

/// Synthetic identifier of a flattened row.
///
/// Identifiers increase monotonically within one flattening pass and carry no
/// meaning across passes: the same item gets a different id after the search
/// text changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u32);

/// What a flattened row shows.
///
/// Rows store positions rather than references so they can sit next to the
/// groups they index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Heading of group `group`.
    Label {
        /// Group index.
        group: usize,
    },
    /// Separator after group `group`.
    Separator {
        /// Group index.
        group: usize,
    },
    /// Item `index` of group `group`.
    Item {
        /// Group index.
        group: usize,
        /// Item index within the group.
        index: usize,
    },
}

/// One row of the flattened sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlatEntry {
    /// Per-pass identifier.
    pub id: EntryId,
    /// Row content.
    pub kind: EntryKind,
}

impl FlatEntry {
    /// Resolves an item row against the groups it was flattened from.
    #[must_use]
    pub fn item<'a>(&self, groups: &'a [MenuGroup]) -> Option<&'a MenuItem> {
        match self.kind {
            EntryKind::Item { group, index } => groups.get(group)?.items.get(index),
            EntryKind::Label { .. } | EntryKind::Separator { .. } => None,
        }
    }

    /// Resolves a label row to its heading text.
    #[must_use]
    pub fn label<'a>(&self, groups: &'a [MenuGroup]) -> Option<&'a str> {
        match self.kind {
            EntryKind::Label { group } => groups.get(group)?.label.as_deref(),
            EntryKind::Item { .. } | EntryKind::Separator { .. } => None,
        }
    }
}

/// Flattens `groups` into rows.
///
/// For each group in order: a [`EntryKind::Label`] if the group has a label, one
/// [`EntryKind::Item`] per item, then a [`EntryKind::Separator`] if the group asks
/// for one and is not the last group. Submenus are not expanded; they open as
/// nested menus from their trigger row.
#[must_use]
pub fn flatten(groups: &[MenuGroup]) -> Vec<FlatEntry> {
    let mut entries = Vec::with_capacity(
        groups
            .iter()
            .map(|group| group.items.len() + 2)
            .sum::<usize>(),
    );
    let mut next_id = 0_u32;
    let mut push = |kind: EntryKind| {
        entries.push(FlatEntry {
            id: EntryId(next_id),
            kind,
        });
        next_id = next_id.wrapping_add(1);
    };

    let last = groups.len().saturating_sub(1);
    for (group_index, group) in groups.iter().enumerate() {
        if group.label.is_some() {
            push(EntryKind::Label { group: group_index });
        }
        for index in 0..group.items.len() {
            push(EntryKind::Item {
                group: group_index,
                index,
            });
        }
        if group.separator && group_index != last {
            push(EntryKind::Separator { group: group_index });
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn groups() -> Vec<MenuGroup> {
        vec![
            MenuGroup::labeled(
                "Fruit",
                vec![MenuItem::new("Apple", "a"), MenuItem::new("Banana", "b")],
            )
            .with_separator(),
            MenuGroup::new(vec![
                MenuItem::new("Carrot", "c")
                    .with_submenu(vec![MenuItem::new("Baby carrot", "bc")]),
            ])
            .with_separator(),
        ]
    }

    #[test]
    fn emits_labels_items_and_inner_separators() {
        let entries = flatten(&groups());
        let kinds: Vec<_> = entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::Label { group: 0 },
                EntryKind::Item { group: 0, index: 0 },
                EntryKind::Item { group: 0, index: 1 },
                EntryKind::Separator { group: 0 },
                // Submenu children are not flattened and the last separator is dropped.
                EntryKind::Item { group: 1, index: 0 },
            ]
        );
        let ids: Vec<_> = entries.iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn flattening_is_deterministic() {
        let groups = groups();
        let first = flatten(&groups);
        let second = flatten(&groups);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.item(&groups), b.item(&groups));
            assert_eq!(a.label(&groups), b.label(&groups));
        }
    }

    #[test]
    fn rows_resolve_to_their_content() {
        let groups = groups();
        let entries = flatten(&groups);
        assert_eq!(entries[0].label(&groups), Some("Fruit"));
        assert!(entries[0].item(&groups).is_none());
        assert_eq!(
            entries[2].item(&groups).map(|i| i.value.as_str()),
            Some("b")
        );
        assert!(entries[3].item(&groups).is_none());
    }

    #[test]
    fn empty_input_flattens_to_nothing() {
        assert!(flatten(&[]).is_empty());
        assert!(flatten(&[MenuGroup::default()]).is_empty());
    }
}
