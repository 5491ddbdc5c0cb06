// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu state machine: open state, search text, focus, and submenus.
//!
//! A [`MenuController`] owns only interaction state. Items and selection stay
//! with the caller and are passed in on each call:
//!
//! - [`MenuController::prepare`] turns the caller's groups into a [`MenuPass`]
//!   for the current search text,
//! - [`MenuController::content`] describes what to draw for that pass,
//! - input methods ([`handle_key`](MenuController::handle_key),
//!   [`activate_row`](MenuController::activate_row),
//!   [`pointer_down`](MenuController::pointer_down), ...) report intent through
//!   [`MenuCallbacks`].
//!
//! A pass borrows the groups, so it must be rebuilt after anything that changes
//! the search text.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::callbacks::MenuCallbacks;
use crate::config::MenuConfig;
use crate::error::ConfigResult;
use crate::flatten::EntryKind;
use crate::item::{ItemPath, MenuGroup};
use crate::keyboard::{Key, KeyEvent};
use crate::navigation::{Navigation, navigate};
use crate::pass::{MenuPass, PassStatus};
use crate::selection::{Selection, SelectionLookup, SelectionMode};
use crate::view::{
    MenuContent, NestedGroup, RowContext, RowKind, SubmenuView, VirtualRow, WindowedRows,
};
use crate::window::MenuWindow;

/// Whether the menu surface is shown.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuState {
    /// Hidden.
    #[default]
    Closed,
    /// Shown.
    Open,
}

/// Where keyboard input goes at the top level of an open menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MenuFocus {
    /// Nothing focused yet.
    #[default]
    None,
    /// The search box. Text editing there belongs to the host's input field.
    SearchBox,
    /// A row of the current pass.
    Row(usize),
}

/// What [`MenuController::handle_key`] did with a key press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// Nothing.
    Ignored,
    /// Top-level focus moved.
    FocusMoved(MenuFocus),
    /// Focus moved within the innermost submenu, to the given child index.
    SubmenuFocusMoved(usize),
    /// A typed character was appended to the search text and the search box focused.
    SearchRedirected,
    /// An item was activated.
    Activated(Activation),
    /// A submenu opened.
    SubmenuOpened,
    /// The innermost submenu closed.
    SubmenuClosed,
    /// The menu closed.
    Closed,
}

/// Result of activating an item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Activation {
    /// Disabled, missing, or the menu is not interactive.
    Ignored,
    /// The item's submenu opened instead of selecting.
    SubmenuOpened,
    /// `on_select` fired and the menu stays open (multi-select).
    Selected,
    /// `on_select` fired and the menu closed (single-select).
    SelectedAndClosed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SubmenuFrame {
    path: ItemPath,
    focused: Option<usize>,
}

/// Interaction state for one menu instance.
#[derive(Debug)]
pub struct MenuController {
    config: MenuConfig,
    state: MenuState,
    search: String,
    focus: MenuFocus,
    submenus: SmallVec<[SubmenuFrame; 2]>,
    surfaces: SmallVec<[Rect; 2]>,
    has_more: bool,
    window: MenuWindow,
}

impl MenuController {
    /// Creates a closed menu, validating `config`.
    pub fn new(config: MenuConfig) -> ConfigResult<Self> {
        config.validate()?;
        let window = MenuWindow::new(&config);
        Ok(Self {
            config,
            state: MenuState::Closed,
            search: String::new(),
            focus: MenuFocus::None,
            submenus: SmallVec::new(),
            surfaces: SmallVec::new(),
            has_more: false,
            window,
        })
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Replaces the configuration. On error the previous one stays in effect.
    pub fn set_config(&mut self, config: MenuConfig) -> ConfigResult<()> {
        config.validate()?;
        if !config.enable_search {
            self.search.clear();
            if self.focus == MenuFocus::SearchBox {
                self.focus = MenuFocus::None;
            }
        }
        self.window.configure(&config);
        self.config = config;
        Ok(())
    }

    /// Current open state.
    #[must_use]
    pub const fn state(&self) -> MenuState {
        self.state
    }

    /// Returns `true` if the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Opens the menu. Returns `false` if it was already open or is disabled.
    pub fn open(&mut self, callbacks: &mut impl MenuCallbacks) -> bool {
        if !self.enter_open() {
            return false;
        }
        callbacks.on_open_change(true);
        true
    }

    /// Closes the menu and resets the session. Returns `false` if it was closed.
    pub fn close(&mut self, callbacks: &mut impl MenuCallbacks) -> bool {
        if !self.is_open() {
            return false;
        }
        self.enter_closed();
        callbacks.on_open_change(false);
        true
    }

    /// Opens a closed menu or closes an open one.
    pub fn toggle(&mut self, callbacks: &mut impl MenuCallbacks) -> bool {
        if self.is_open() {
            self.close(callbacks)
        } else {
            self.open(callbacks)
        }
    }

    /// Mirrors a caller-controlled open flag without firing `on_open_change`.
    pub fn sync_open(&mut self, open: bool) {
        match (open, self.state) {
            (true, MenuState::Closed) => {
                self.enter_open();
            }
            (false, MenuState::Open) => self.enter_closed(),
            _ => {}
        }
    }

    fn enter_open(&mut self) -> bool {
        if self.config.disabled {
            debug!("open suppressed: menu is disabled");
            return false;
        }
        if self.is_open() {
            return false;
        }
        self.state = MenuState::Open;
        self.focus = if self.config.enable_search {
            MenuFocus::SearchBox
        } else {
            MenuFocus::None
        };
        debug!("menu opened");
        true
    }

    fn enter_closed(&mut self) {
        self.state = MenuState::Closed;
        self.search.clear();
        self.focus = MenuFocus::None;
        self.submenus.clear();
        self.window.reset();
        debug!("menu closed");
    }

    /// Current search text. Always empty when search is disabled.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search
    }

    /// Replaces the search text, as typed into the host's search box.
    ///
    /// Row focus and open submenus are dropped and the list scrolls to the top.
    /// Returns `false` if search is disabled or the text is unchanged.
    pub fn set_search_text(&mut self, text: &str) -> bool {
        if !self.config.enable_search || self.search == text {
            return false;
        }
        self.search.clear();
        self.search.push_str(text);
        self.search_changed();
        true
    }

    fn search_changed(&mut self) {
        if matches!(self.focus, MenuFocus::Row(_)) {
            self.focus = MenuFocus::SearchBox;
        }
        self.submenus.clear();
        self.window.scroll_to(0.0);
        trace!(search = %self.search, "search changed");
    }

    /// Filters and flattens `groups` for the current search text.
    #[must_use]
    pub fn prepare<'g>(&self, groups: &'g [MenuGroup]) -> MenuPass<'g> {
        MenuPass::new(groups, &self.search, &self.config)
    }

    /// Text for the placeholder states, `None` when there are rows.
    #[must_use]
    pub fn placeholder_text(&self, status: PassStatus) -> Option<&str> {
        match status {
            PassStatus::NoItems => Some(&self.config.empty_text),
            PassStatus::NoResults => Some(&self.config.no_results_text),
            PassStatus::Rows => None,
        }
    }

    /// Current top-level focus.
    #[must_use]
    pub const fn focus(&self) -> MenuFocus {
        self.focus
    }

    /// Moves focus to the search box. Returns `false` if search is disabled.
    pub fn focus_search(&mut self) -> bool {
        if !self.config.enable_search {
            return false;
        }
        self.focus = MenuFocus::SearchBox;
        true
    }

    /// Focuses `row` (on pointer hover, for instance) if it is an enabled item.
    pub fn focus_row(&mut self, row: usize, pass: &MenuPass<'_>) -> bool {
        if !self.is_open() || !pass.is_row_eligible(row) {
            return false;
        }
        self.focus = MenuFocus::Row(row);
        true
    }

    /// Tells the controller whether the host can supply more items.
    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    /// Sets the height of the scrolling viewport.
    pub fn set_viewport_height(&mut self, height: f64) {
        self.window.set_viewport_height(height);
    }

    /// Current scroll offset of the windowed list.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_offset()
    }

    /// Scrolls the windowed list and fires `on_end_reached` when due.
    pub fn scroll_to(
        &mut self,
        offset: f64,
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) {
        self.window.sync_len(pass.entries().len());
        self.window.scroll_to(offset);
        self.poll_end_reached(pass, callbacks);
    }

    /// Fires `on_end_reached` if the viewport sits within the threshold of the
    /// end, more items are available, and it has not fired for this item count.
    ///
    /// Only windowed passes paginate.
    pub fn poll_end_reached(
        &mut self,
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) -> bool {
        if !self.is_open() || !pass.is_virtualized() || pass.status() != PassStatus::Rows {
            return false;
        }
        self.window.sync_len(pass.entries().len());
        if !self.window.poll_end_reached(self.has_more) {
            return false;
        }
        debug!(rows = pass.entries().len(), "end reached");
        callbacks.on_end_reached();
        true
    }

    /// Describes what to draw for `pass` given the caller's `selection`.
    ///
    /// Decorations follow the shape of `selection`. The configured
    /// [`SelectionMode`] only decides whether a commit closes the menu.
    pub fn content<'p>(
        &mut self,
        pass: &'p MenuPass<'_>,
        selection: Selection<'_>,
    ) -> MenuContent<'p> {
        match pass.status() {
            PassStatus::NoItems => return MenuContent::NoItems,
            PassStatus::NoResults => return MenuContent::NoResults,
            PassStatus::Rows => {}
        }

        let ctx = RowContext {
            lookup: SelectionLookup::new(selection),
            mode: selection.mode(),
            focused: match self.focus {
                MenuFocus::Row(row) => pass.row_path(row),
                MenuFocus::None | MenuFocus::SearchBox => None,
            },
            open_trigger: self.submenus.first().map(|frame| frame.path.clone()),
        };

        if !pass.is_virtualized() {
            return MenuContent::Nested(nested_groups(pass, &ctx));
        }

        self.window.sync_len(pass.entries().len());
        let strip = self.window.strip();
        let height = self.window.row_height();
        let mut rows = Vec::with_capacity(strip.len());
        for index in strip.start..strip.end {
            let Some(entry) = pass.entries().get(index) else {
                break;
            };
            let kind = match entry.kind {
                EntryKind::Label { .. } => {
                    RowKind::Label(entry.label(pass.groups()).unwrap_or_default())
                }
                EntryKind::Separator { .. } => RowKind::Separator,
                EntryKind::Item { group, index: item } => {
                    let Some(menu_item) = pass.item(index) else {
                        continue;
                    };
                    RowKind::Item(ctx.item_row(
                        menu_item,
                        [group, item].into_iter().collect(),
                        pass.is_custom_value_row(index),
                    ))
                }
            };
            rows.push(VirtualRow {
                index,
                id: entry.id,
                top: self.window.row_top(index),
                height,
                kind,
            });
        }

        MenuContent::Windowed(WindowedRows {
            rows,
            before_extent: strip.before_extent,
            after_extent: strip.after_extent,
            content_extent: strip.content_extent,
            scroll_offset: self.window.scroll_offset(),
        })
    }

    /// Handles a key press on the open menu.
    pub fn handle_key(
        &mut self,
        event: impl Into<KeyEvent>,
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) -> KeyOutcome {
        let event = event.into();
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        if !self.submenus.is_empty() {
            return self.handle_submenu_key(event, pass, callbacks);
        }
        if event.key == Key::Escape {
            self.close(callbacks);
            return KeyOutcome::Closed;
        }

        match self.focus {
            MenuFocus::SearchBox => match event.key {
                Key::ArrowDown | Key::ArrowUp => {
                    self.move_focus(pass, None, Navigation::First, callbacks)
                }
                _ => KeyOutcome::Ignored,
            },
            MenuFocus::Row(row) => {
                if event.is_activation() {
                    return KeyOutcome::Activated(self.activate_row(row, pass, callbacks));
                }
                if let Some(c) = event.typed_char() {
                    return self.redirect_to_search(c);
                }
                match event.key {
                    Key::ArrowDown => self.move_focus(pass, Some(row), Navigation::Next, callbacks),
                    Key::ArrowUp => {
                        let outcome = self.move_focus(pass, Some(row), Navigation::Prev, callbacks);
                        if outcome == KeyOutcome::Ignored && self.focus_search() {
                            KeyOutcome::FocusMoved(MenuFocus::SearchBox)
                        } else {
                            outcome
                        }
                    }
                    Key::Home => self.move_focus(pass, Some(row), Navigation::First, callbacks),
                    Key::End => self.move_focus(pass, Some(row), Navigation::Last, callbacks),
                    Key::ArrowRight => match pass.row_path(row) {
                        Some(path) if self.open_submenu(&path, pass) => KeyOutcome::SubmenuOpened,
                        _ => KeyOutcome::Ignored,
                    },
                    _ => KeyOutcome::Ignored,
                }
            }
            MenuFocus::None => {
                if let Some(c) = event.typed_char() {
                    return self.redirect_to_search(c);
                }
                match event.key {
                    Key::ArrowDown | Key::Home => {
                        self.move_focus(pass, None, Navigation::First, callbacks)
                    }
                    Key::ArrowUp | Key::End => {
                        self.move_focus(pass, None, Navigation::Last, callbacks)
                    }
                    _ => KeyOutcome::Ignored,
                }
            }
        }
    }

    fn redirect_to_search(&mut self, c: char) -> KeyOutcome {
        if !self.config.enable_search {
            return KeyOutcome::Ignored;
        }
        self.focus = MenuFocus::SearchBox;
        self.search.push(c);
        self.search_changed();
        KeyOutcome::SearchRedirected
    }

    fn move_focus(
        &mut self,
        pass: &MenuPass<'_>,
        origin: Option<usize>,
        direction: Navigation,
        callbacks: &mut impl MenuCallbacks,
    ) -> KeyOutcome {
        let Some(row) = navigate(
            pass.entries().len(),
            origin,
            direction,
            self.config.loop_focus,
            |i| pass.is_row_eligible(i),
        ) else {
            return KeyOutcome::Ignored;
        };
        self.focus = MenuFocus::Row(row);
        if pass.is_virtualized() {
            self.window.sync_len(pass.entries().len());
            self.window.scroll_into_view(row);
            self.poll_end_reached(pass, callbacks);
        }
        trace!(row, "row focused");
        KeyOutcome::FocusMoved(self.focus)
    }

    fn handle_submenu_key(
        &mut self,
        event: KeyEvent,
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) -> KeyOutcome {
        let Some(frame) = self.submenus.last() else {
            return KeyOutcome::Ignored;
        };
        let path = frame.path.clone();
        let focused = frame.focused;
        let Some(trigger) = pass.item_at(&path) else {
            // The pass no longer contains the trigger.
            self.submenus.clear();
            return KeyOutcome::Ignored;
        };
        let children = trigger.children();

        let direction = match event.key {
            Key::Escape | Key::ArrowLeft => {
                self.submenus.pop();
                return KeyOutcome::SubmenuClosed;
            }
            Key::ArrowRight => {
                return match focused {
                    Some(child) if self.open_submenu(&child_path(&path, child), pass) => {
                        KeyOutcome::SubmenuOpened
                    }
                    _ => KeyOutcome::Ignored,
                };
            }
            _ if event.is_activation() => {
                return match focused {
                    Some(child) => KeyOutcome::Activated(self.activate_path(
                        &child_path(&path, child),
                        pass,
                        callbacks,
                    )),
                    None => KeyOutcome::Ignored,
                };
            }
            Key::ArrowDown => Navigation::Next,
            Key::ArrowUp => Navigation::Prev,
            Key::Home => Navigation::First,
            Key::End => Navigation::Last,
            _ => return KeyOutcome::Ignored,
        };

        let next = navigate(
            children.len(),
            focused,
            direction,
            self.config.loop_focus,
            |i| !children[i].disabled,
        );
        match (next, self.submenus.last_mut()) {
            (Some(child), Some(frame)) => {
                frame.focused = Some(child);
                KeyOutcome::SubmenuFocusMoved(child)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Activates the item on `row`, as on click or Enter.
    pub fn activate_row(
        &mut self,
        row: usize,
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) -> Activation {
        let Some(path) = pass.row_path(row) else {
            return Activation::Ignored;
        };
        if self.is_open() && pass.is_row_eligible(row) {
            self.focus = MenuFocus::Row(row);
        }
        self.activate_path(&path, pass, callbacks)
    }

    /// Activates the item at `path`, including submenu children.
    ///
    /// Items with a submenu open it. Other enabled items fire `on_select`; in
    /// single-select mode the menu then closes.
    pub fn activate_path(
        &mut self,
        path: &[usize],
        pass: &MenuPass<'_>,
        callbacks: &mut impl MenuCallbacks,
    ) -> Activation {
        if !self.is_open() || self.config.disabled {
            return Activation::Ignored;
        }
        let Some(item) = pass.item_at(path) else {
            return Activation::Ignored;
        };
        if !pass.is_path_enabled(path) {
            trace!(value = %item.value, "disabled item ignored");
            return Activation::Ignored;
        }
        if item.has_submenu() {
            return if self.open_submenu(path, pass) {
                Activation::SubmenuOpened
            } else {
                Activation::Ignored
            };
        }

        debug!(value = %item.value, "item selected");
        callbacks.on_select(&item.value);
        match self.config.mode {
            SelectionMode::Single => {
                self.close(callbacks);
                Activation::SelectedAndClosed
            }
            SelectionMode::Multi => Activation::Selected,
        }
    }

    /// Number of open submenu levels.
    #[must_use]
    pub fn submenu_depth(&self) -> usize {
        self.submenus.len()
    }

    /// Opens the submenu of the item at `path`, focusing its first enabled child.
    ///
    /// Open levels that are not ancestors of `path` close first.
    pub fn open_submenu(&mut self, path: &[usize], pass: &MenuPass<'_>) -> bool {
        if !self.is_open() || path.len() < 2 {
            return false;
        }
        let Some(item) = pass.item_at(path) else {
            return false;
        };
        if !item.has_submenu() || !pass.is_path_enabled(path) {
            return false;
        }
        let children = item.children();
        let focused = navigate(children.len(), None, Navigation::First, false, |i| {
            !children[i].disabled
        });

        self.submenus
            .retain(|frame| frame.path.len() < path.len() && path.starts_with(&frame.path));
        if self.submenus.is_empty() {
            if let Some(row) = pass.row_of(&path[..2]) {
                self.focus = MenuFocus::Row(row);
            }
        }
        self.submenus.push(SubmenuFrame {
            path: path.iter().copied().collect(),
            focused,
        });
        debug!(depth = self.submenus.len(), "submenu opened");
        true
    }

    /// Closes the innermost submenu.
    pub fn close_submenu(&mut self) -> bool {
        self.submenus.pop().is_some()
    }

    /// Children of the open submenu at nesting `level` (0 is the outermost).
    pub fn submenu_content<'p>(
        &self,
        level: usize,
        pass: &'p MenuPass<'_>,
        selection: Selection<'_>,
    ) -> Option<SubmenuView<'p>> {
        let frame = self.submenus.get(level)?;
        let trigger = pass.item_at(&frame.path)?;
        let ctx = RowContext {
            lookup: SelectionLookup::new(selection),
            mode: selection.mode(),
            focused: frame.focused.map(|child| child_path(&frame.path, child)),
            open_trigger: self.submenus.get(level + 1).map(|next| next.path.clone()),
        };
        let items = trigger
            .children()
            .iter()
            .enumerate()
            .map(|(i, child)| ctx.item_row(child, child_path(&frame.path, i), false))
            .collect();
        Some(SubmenuView {
            trigger,
            path: frame.path.clone(),
            items,
        })
    }

    /// Registers the rectangles that count as "inside" the menu: the trigger
    /// and the open surfaces, in the host's coordinate space.
    pub fn set_surfaces(&mut self, surfaces: impl IntoIterator<Item = Rect>) {
        self.surfaces.clear();
        self.surfaces.extend(surfaces);
    }

    /// Closes the menu on a pointer press outside every registered surface.
    ///
    /// With no surfaces registered, nothing counts as outside.
    pub fn pointer_down(&mut self, point: Point, callbacks: &mut impl MenuCallbacks) -> bool {
        if !self.is_open() || self.surfaces.is_empty() {
            return false;
        }
        if self.surfaces.iter().any(|surface| surface.contains(point)) {
            return false;
        }
        debug!(x = point.x, y = point.y, "pointer down outside menu");
        self.close(callbacks)
    }

    /// Closes the menu when focus leaves it.
    pub fn focus_out(&mut self, callbacks: &mut impl MenuCallbacks) -> bool {
        self.close(callbacks)
    }
}

fn child_path(parent: &[usize], child: usize) -> ItemPath {
    let mut path: ItemPath = parent.iter().copied().collect();
    path.push(child);
    path
}

fn nested_groups<'p>(pass: &'p MenuPass<'_>, ctx: &RowContext<'_>) -> Vec<NestedGroup<'p>> {
    let groups = pass.groups();
    groups
        .iter()
        .enumerate()
        .map(|(g, group)| NestedGroup {
            label: group.label.as_deref(),
            items: group
                .items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let custom = pass.has_custom_value() && g + 1 == groups.len();
                    ctx.item_row(item, [g, i].into_iter().collect(), custom)
                })
                .collect(),
            separator: group.separator && g + 1 < groups.len(),
        })
        .collect()
}
