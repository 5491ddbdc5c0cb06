// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a select menu through a typical session without a UI.
//!
//! This example shows:
//! - a caller that owns its items and multi-selection and applies `on_select`,
//! - search redirection from a focused row, and the custom-value entry,
//! - virtualized rendering of a long list with end-reached pagination,
//! - closing on a pointer press outside the menu surfaces.
//!
//! Run:
//! - `RUST_LOG=understory_select_menu=debug cargo run -p understory_demos --example select_menu_walkthrough`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_select_menu::{
    Decoration, Key, MenuCallbacks, MenuConfig, MenuContent, MenuController, MenuGroup,
    MenuItem, RowKind, Selection, SelectionMode,
};

/// Host state: the items, the selection, and whether a page is in flight.
#[derive(Debug, Default)]
struct Host {
    selected: Vec<String>,
    wants_page: bool,
}

impl MenuCallbacks for Host {
    fn on_select(&mut self, value: &str) {
        if let Some(at) = self.selected.iter().position(|v| v == value) {
            self.selected.remove(at);
        } else {
            self.selected.push(value.to_string());
        }
        println!("  on_select({value:?}) -> selection {:?}", self.selected);
    }

    fn on_open_change(&mut self, open: bool) {
        println!("  on_open_change({open})");
    }

    fn on_end_reached(&mut self) {
        println!("  on_end_reached()");
        self.wants_page = true;
    }
}

fn page(start: usize, len: usize) -> Vec<MenuItem> {
    (start..start + len)
        .map(|i| MenuItem::new(format!("Contact {i}"), format!("contact-{i}")))
        .collect()
}

fn print_content(content: &MenuContent<'_>) {
    match content {
        MenuContent::NoItems => println!("  <no items>"),
        MenuContent::NoResults => println!("  <no results>"),
        MenuContent::Nested(groups) => {
            for group in groups {
                if let Some(label) = group.label {
                    println!("  [{label}]");
                }
                for row in &group.items {
                    println!(
                        "  {} {}{}",
                        if row.focused { '>' } else { ' ' },
                        row.item.label,
                        mark(row.decoration)
                    );
                }
                if group.separator {
                    println!("  ----");
                }
            }
        }
        MenuContent::Windowed(window) => {
            println!(
                "  rows {}..{} of {:.0}px (spacers {:.0}/{:.0})",
                window.rows.first().map_or(0, |r| r.index),
                window.rows.last().map_or(0, |r| r.index + 1),
                window.content_extent,
                window.before_extent,
                window.after_extent,
            );
            for row in &window.rows {
                match &row.kind {
                    RowKind::Label(label) => println!("  @{:>6.0} [{label}]", row.top),
                    RowKind::Separator => println!("  @{:>6.0} ----", row.top),
                    RowKind::Item(item) => println!(
                        "  @{:>6.0} {} {}{}",
                        row.top,
                        if item.focused { '>' } else { ' ' },
                        item.item.label,
                        mark(item.decoration)
                    ),
                }
            }
        }
    }
}

fn mark(decoration: Decoration) -> &'static str {
    match decoration {
        Decoration::Checkbox { checked: true, .. } => " [x]",
        Decoration::Checkbox { checked: false, .. } => " [ ]",
        Decoration::Checkmark { .. } => " ✓",
        Decoration::None => "",
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut host = Host::default();
    let groups = vec![
        MenuGroup::labeled(
            "Fruit",
            vec![
                MenuItem::new("Apple", "apple"),
                MenuItem::new("Banana", "banana").with_disabled(true),
                MenuItem::new("Cherry", "cherry").with_sub_label("Seasonal"),
            ],
        )
        .with_separator(),
        MenuGroup::labeled(
            "Vegetables",
            vec![
                MenuItem::new("Carrot", "carrot"),
                MenuItem::new("Greens", "greens").with_submenu(vec![
                    MenuItem::new("Kale", "kale"),
                    MenuItem::new("Spinach", "spinach"),
                ]),
            ],
        ),
    ];

    let config = MenuConfig {
        mode: SelectionMode::Multi,
        enable_search: true,
        allow_custom_value: true,
        ..MenuConfig::default()
    };
    let Ok(mut menu) = MenuController::new(config) else {
        return;
    };

    println!("== open, pick two items");
    menu.open(&mut host);
    let pass = menu.prepare(&groups);
    for key in [Key::ArrowDown, Key::Enter, Key::ArrowDown, Key::Enter] {
        menu.handle_key(key, &pass, &mut host);
    }
    print_content(&menu.content(&pass, Selection::Multi(&host.selected)));

    println!("== open a submenu");
    menu.handle_key(Key::End, &pass, &mut host);
    menu.handle_key(Key::ArrowRight, &pass, &mut host);
    menu.handle_key(Key::Enter, &pass, &mut host);
    if let Some(view) = menu.submenu_content(0, &pass, Selection::Multi(&host.selected)) {
        for row in &view.items {
            println!("    {}{}", row.item.label, mark(row.decoration));
        }
    }
    menu.handle_key(Key::Escape, &pass, &mut host);

    println!("== type to search");
    menu.handle_key(Key::Character('k'), &pass, &mut host);
    let pass = menu.prepare(&groups);
    print_content(&menu.content(&pass, Selection::Multi(&host.selected)));
    menu.set_search_text("durian");
    let pass = menu.prepare(&groups);
    print_content(&menu.content(&pass, Selection::Multi(&host.selected)));
    menu.activate_row(0, &pass, &mut host);

    println!("== click outside");
    menu.set_surfaces([Rect::new(0.0, 0.0, 240.0, 360.0)]);
    menu.pointer_down(Point::new(400.0, 20.0), &mut host);

    println!("== long list with pagination");
    let Ok(mut contacts) = MenuController::new(MenuConfig {
        enable_virtualization: true,
        virtual_list_item_height: 48.0,
        virtual_list_overscan: 2,
        viewport_height: 400.0,
        ..MenuConfig::default()
    }) else {
        return;
    };
    let mut items = page(0, 100);
    contacts.set_has_more(true);
    contacts.open(&mut host);
    let mut offset = 0.0;
    while items.len() < 300 {
        let groups = vec![MenuGroup::new(items.clone())];
        let pass = contacts.prepare(&groups);
        contacts.scroll_to(offset, &pass, &mut host);
        if host.wants_page {
            host.wants_page = false;
            print_content(&contacts.content(&pass, Selection::Single(None)));
            let next = page(items.len(), 100);
            items.extend(next);
        }
        offset += 240.0;
    }
    contacts.set_has_more(false);
    contacts.close(&mut host);
}
