// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection resolution and the per-item selection decoration.
//!
//! Selection state is owned by the caller and only ever read here. Changing it is
//! the caller's job, in response to [`MenuCallbacks::on_select`](crate::MenuCallbacks::on_select).

use alloc::string::String;

use hashbrown::HashSet;

use crate::item::MenuItem;

/// Single- or multi-select semantics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one value; committing a selection closes the menu.
    Single,
    /// Any number of values; the menu stays open while toggling.
    Multi,
}

/// Borrowed view of the caller's selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The selected value, if any.
    Single(Option<&'a str>),
    /// The selected values, in the caller's order.
    Multi(&'a [String]),
}

impl Selection<'_> {
    /// The mode implied by this selection.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        match self {
            Self::Single(_) => SelectionMode::Single,
            Self::Multi(_) => SelectionMode::Multi,
        }
    }
}

/// Returns `true` if `value` is selected.
///
/// Single-select compares for equality, multi-select tests membership. Only
/// values are compared, never labels.
#[must_use]
pub fn is_selected(value: &str, selection: Selection<'_>) -> bool {
    match selection {
        Selection::Single(selected) => selected == Some(value),
        Selection::Multi(selected) => selected.iter().any(|v| v == value),
    }
}

/// Hashed form of a [`Selection`] for rendering many rows against a large
/// multi-selection.
///
/// Always agrees with [`is_selected`].
#[derive(Clone, Debug)]
pub struct SelectionLookup<'a> {
    mode: SelectionMode,
    single: Option<&'a str>,
    multi: HashSet<&'a str>,
}

impl<'a> SelectionLookup<'a> {
    /// Builds the lookup for `selection`.
    #[must_use]
    pub fn new(selection: Selection<'a>) -> Self {
        match selection {
            Selection::Single(single) => Self {
                mode: SelectionMode::Single,
                single,
                multi: HashSet::new(),
            },
            Selection::Multi(values) => Self {
                mode: SelectionMode::Multi,
                single: None,
                multi: values.iter().map(String::as_str).collect(),
            },
        }
    }

    /// The selection mode.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns `true` if `value` is selected.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self.mode {
            SelectionMode::Single => self.single == Some(value),
            SelectionMode::Multi => self.multi.contains(value),
        }
    }
}

/// The selection control drawn at the trailing edge of an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Multi-select toggle, present on every item.
    Checkbox {
        /// Whether the box is ticked.
        checked: bool,
        /// Whether the box is greyed out.
        disabled: bool,
    },
    /// Single-select tick, present only on the selected item.
    Checkmark {
        /// Whether the tick is greyed out.
        disabled: bool,
    },
    /// Nothing to draw.
    None,
}

/// Maps mode and selection state to the item's selection control.
#[must_use]
pub fn resolve_decoration(mode: SelectionMode, selected: bool, item: &MenuItem) -> Decoration {
    match (mode, selected) {
        (SelectionMode::Multi, checked) => Decoration::Checkbox {
            checked,
            disabled: item.disabled,
        },
        (SelectionMode::Single, true) => Decoration::Checkmark {
            disabled: item.disabled,
        },
        (SelectionMode::Single, false) => Decoration::None,
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn single_select_is_equality() {
        assert!(is_selected("a", Selection::Single(Some("a"))));
        assert!(!is_selected("b", Selection::Single(Some("a"))));
        assert!(!is_selected("a", Selection::Single(None)));
        // An empty value is a value like any other.
        assert!(is_selected("", Selection::Single(Some(""))));
    }

    #[test]
    fn multi_select_is_membership() {
        let selected = vec!["a".to_string(), "c".to_string()];
        let selection = Selection::Multi(&selected);
        assert!(is_selected("a", selection));
        assert!(is_selected("c", selection));
        assert!(!is_selected("b", selection));
        assert!(!is_selected("a", Selection::Multi(&[])));
    }

    #[test]
    fn lookup_agrees_with_is_selected() {
        let values: Vec<_> = (0..50).map(|i| i.to_string()).collect();
        let picked: Vec<_> = values.iter().step_by(3).cloned().collect();
        let selections = [
            Selection::Multi(&picked),
            Selection::Single(Some("9")),
            Selection::Single(None),
        ];
        for selection in selections {
            let lookup = SelectionLookup::new(selection);
            assert_eq!(lookup.mode(), selection.mode());
            for value in &values {
                assert_eq!(lookup.contains(value), is_selected(value, selection));
            }
        }
    }

    #[test]
    fn multi_always_shows_a_checkbox() {
        let item = MenuItem::new("Apple", "a");
        assert_eq!(
            resolve_decoration(SelectionMode::Multi, false, &item),
            Decoration::Checkbox {
                checked: false,
                disabled: false
            }
        );
        let disabled = MenuItem::new("Apple", "a").with_disabled(true);
        assert_eq!(
            resolve_decoration(SelectionMode::Multi, true, &disabled),
            Decoration::Checkbox {
                checked: true,
                disabled: true
            }
        );
    }

    #[test]
    fn single_shows_a_checkmark_only_when_selected() {
        let item = MenuItem::new("Apple", "a");
        assert_eq!(
            resolve_decoration(SelectionMode::Single, true, &item),
            Decoration::Checkmark { disabled: false }
        );
        assert_eq!(
            resolve_decoration(SelectionMode::Single, false, &item),
            Decoration::None
        );
    }

    #[test]
    fn duplicate_values_highlight_every_copy() {
        let lookup = SelectionLookup::new(Selection::Single(Some("dup")));
        let first = MenuItem::new("First", "dup");
        let second = MenuItem::new("Second", "dup");
        assert!(lookup.contains(&first.value));
        assert!(lookup.contains(&second.value));
    }
}
