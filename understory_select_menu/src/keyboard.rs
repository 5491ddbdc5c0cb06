// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input as seen by the menu.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT = 1 << 0;
        /// Control.
        const CONTROL = 1 << 1;
        /// Alt / Option.
        const ALT = 1 << 2;
        /// Meta / Command / Super.
        const META = 1 << 3;
    }
}

/// Logical key, already translated from the platform layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A text-producing key. Space is `Character(' ')`.
    Character(char),
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Anything the menu does not react to.
    Other,
}

/// A key press delivered to an open menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Held modifiers.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// A key press with the given modifiers.
    #[must_use]
    pub const fn with_modifiers(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// The character this press would type into a text field, if any.
    ///
    /// Shortcuts (Control, Alt, or Meta held) and control characters type nothing.
    #[must_use]
    pub fn typed_char(&self) -> Option<char> {
        match self.key {
            Key::Character(c)
                if !c.is_control()
                    && !self
                        .modifiers
                        .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Returns `true` for Enter and Space, the row activation keys.
    #[must_use]
    pub fn is_activation(&self) -> bool {
        matches!(self.key, Key::Enter | Key::Character(' '))
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_do_not_type() {
        assert_eq!(KeyEvent::new(Key::Character('a')).typed_char(), Some('a'));
        assert_eq!(
            KeyEvent::with_modifiers(Key::Character('A'), Modifiers::SHIFT).typed_char(),
            Some('A')
        );
        assert_eq!(
            KeyEvent::with_modifiers(Key::Character('c'), Modifiers::CONTROL).typed_char(),
            None
        );
        assert_eq!(
            KeyEvent::with_modifiers(Key::Character('k'), Modifiers::META | Modifiers::SHIFT)
                .typed_char(),
            None
        );
        assert_eq!(KeyEvent::new(Key::Character('\u{8}')).typed_char(), None);
        assert_eq!(KeyEvent::new(Key::ArrowDown).typed_char(), None);
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(KeyEvent::new(Key::Enter).is_activation());
        assert!(KeyEvent::new(Key::Character(' ')).is_activation());
        assert!(!KeyEvent::new(Key::Character('x')).is_activation());
    }
}
