// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Search filtering and custom-value synthesis.
//!
//! Matching is a case-insensitive substring test against an item's label and
//! sub-label. Items with submenus match recursively: an item whose own text does
//! not match is still retained when any descendant matches, and its submenu is
//! narrowed to those descendants.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use tracing::{trace, warn};

use crate::item::{MenuGroup, MenuItem};

/// Submenu nesting depth beyond which filtering and exact matching stop descending.
///
/// Deeper levels are treated as non-matching.
pub const MAX_SUBMENU_DEPTH: usize = 32;

/// Default wording of the custom-value entry, rendered as `Specify "query"`.
pub const DEFAULT_CUSTOM_VALUE_LABEL: &str = "Specify";

/// Filters `groups` by `search`.
///
/// An empty `search` returns the input unchanged and borrowed. Otherwise groups
/// whose item list becomes empty are dropped; group labels themselves are not
/// searched.
#[must_use]
pub fn filter<'a>(groups: &'a [MenuGroup], search: &str) -> Cow<'a, [MenuGroup]> {
    if search.is_empty() {
        return Cow::Borrowed(groups);
    }

    let needle = search.to_lowercase();
    let mut depth_exceeded = false;
    let filtered: Vec<MenuGroup> = groups
        .iter()
        .filter_map(|group| {
            let items: Vec<MenuItem> = group
                .items
                .iter()
                .filter_map(|item| filter_item(item, &needle, 0, &mut depth_exceeded))
                .collect();
            (!items.is_empty()).then(|| MenuGroup {
                label: group.label.clone(),
                items,
                separator: group.separator,
            })
        })
        .collect();

    if depth_exceeded {
        warn!(
            max_depth = MAX_SUBMENU_DEPTH,
            "submenu nesting exceeds the search depth; deeper items were skipped"
        );
    }
    trace!(
        search,
        groups_in = groups.len(),
        groups_out = filtered.len(),
        "filter pass"
    );
    Cow::Owned(filtered)
}

/// Returns `true` if any item's label or value equals `search`, ignoring case and
/// surrounding whitespace. Submenus are searched recursively.
#[must_use]
pub fn has_exact_match(search: &str, groups: &[MenuGroup]) -> bool {
    let query = search.trim().to_lowercase();
    groups
        .iter()
        .any(|group| any_exact(&group.items, &query, 0))
}

/// Builds the synthetic item offered when the search text matches nothing exactly.
///
/// Its value is the raw `search` text; its label interpolates the trimmed query
/// into `template`, e.g. `Specify "zz"`.
#[must_use]
pub fn custom_value_item(search: &str, template: &str) -> MenuItem {
    MenuItem {
        label: format!("{template} \"{}\"", search.trim()),
        value: String::from(search),
        ..MenuItem::default()
    }
}

/// Result of [`apply_search`].
#[derive(Clone, Debug, PartialEq)]
pub struct Searched<'a> {
    /// Filtered groups, with the custom-value group last when one was added.
    pub groups: Cow<'a, [MenuGroup]>,
    /// Whether a custom-value entry was appended.
    pub custom_value: bool,
}

/// Filters `groups` and, when `custom_value_label` is `Some`, appends a trailing
/// unlabeled group holding the custom-value entry.
///
/// The entry is only synthesized when `search` is non-empty and
/// [`has_exact_match`] finds nothing in the unfiltered `groups`.
#[must_use]
pub fn apply_search<'a>(
    groups: &'a [MenuGroup],
    search: &str,
    custom_value_label: Option<&str>,
) -> Searched<'a> {
    let mut filtered = filter(groups, search);
    match custom_value_label {
        Some(template) if wants_custom_value(search, groups) => {
            filtered
                .to_mut()
                .push(MenuGroup::new(vec![custom_value_item(search, template)]));
            Searched {
                groups: filtered,
                custom_value: true,
            }
        }
        _ => Searched {
            groups: filtered,
            custom_value: false,
        },
    }
}

/// Returns `true` if a custom-value entry should be offered for `search`.
///
/// Any non-empty search qualifies, including one made only of whitespace, unless
/// it matches an item exactly.
#[must_use]
pub fn wants_custom_value(search: &str, groups: &[MenuGroup]) -> bool {
    !search.is_empty() && !has_exact_match(search, groups)
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn item_matches(item: &MenuItem, needle: &str) -> bool {
    contains_folded(&item.label, needle)
        || item
            .sub_label
            .as_deref()
            .is_some_and(|sub| contains_folded(sub, needle))
}

fn filter_item(
    item: &MenuItem,
    needle: &str,
    depth: usize,
    depth_exceeded: &mut bool,
) -> Option<MenuItem> {
    if item_matches(item, needle) {
        return Some(item.clone());
    }
    let children = item.submenu.as_ref()?;
    if depth >= MAX_SUBMENU_DEPTH {
        *depth_exceeded = true;
        return None;
    }
    let kept: Vec<MenuItem> = children
        .iter()
        .filter_map(|child| filter_item(child, needle, depth + 1, depth_exceeded))
        .collect();
    (!kept.is_empty()).then(|| with_children(item, kept))
}

fn with_children(item: &MenuItem, children: Vec<MenuItem>) -> MenuItem {
    MenuItem {
        label: item.label.clone(),
        value: item.value.clone(),
        sub_label: item.sub_label.clone(),
        slots: item.slots.clone(),
        disabled: item.disabled,
        tooltip: item.tooltip.clone(),
        submenu: Some(children),
        no_truncate: item.no_truncate,
    }
}

fn any_exact(items: &[MenuItem], query: &str, depth: usize) -> bool {
    items.iter().any(|item| {
        item.label.trim().to_lowercase() == query
            || item.value.trim().to_lowercase() == query
            || (depth < MAX_SUBMENU_DEPTH && any_exact(item.children(), query, depth + 1))
    })
}
