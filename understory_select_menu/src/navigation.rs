// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear keyboard navigation over rows with ineligible gaps.
//!
//! Rows are addressed by index `0..len`. Which rows can take focus is decided by
//! the caller through a predicate (in the menu: enabled items, never headings or
//! separators).

/// Direction of a focus move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// The next eligible row after the origin (Arrow-Down).
    Next,
    /// The previous eligible row before the origin (Arrow-Up).
    Prev,
    /// The first eligible row (Home).
    First,
    /// The last eligible row (End).
    Last,
}

/// Computes the next focused row.
///
/// - Without an origin, [`Navigation::Next`] behaves like [`Navigation::First`] and
///   [`Navigation::Prev`] like [`Navigation::Last`].
/// - At the edges, `wrap` continues from the other end; otherwise the result is `None`.
/// - An origin that is itself ineligible still works as a starting point.
pub fn navigate(
    len: usize,
    origin: Option<usize>,
    direction: Navigation,
    wrap: bool,
    eligible: impl Fn(usize) -> bool,
) -> Option<usize> {
    let first = || (0..len).find(|&i| eligible(i));
    let last = || (0..len).rev().find(|&i| eligible(i));

    match (direction, origin) {
        (Navigation::First, _) | (Navigation::Next, None) => first(),
        (Navigation::Last, _) | (Navigation::Prev, None) => last(),
        (Navigation::Next, Some(origin)) => {
            let start = origin.saturating_add(1).min(len);
            (start..len)
                .find(|&i| eligible(i))
                .or_else(|| if wrap { first() } else { None })
        }
        (Navigation::Prev, Some(origin)) => (0..origin.min(len))
            .rev()
            .find(|&i| eligible(i))
            .or_else(|| if wrap { last() } else { None }),
    }
}

#[cfg(test)]
mod tests {
    use super::{Navigation, navigate};

    // Rows 0 and 3 are ineligible (say, a heading and a disabled item).
    const ELIGIBLE: [bool; 5] = [false, true, true, false, true];

    fn nav(origin: Option<usize>, direction: Navigation, wrap: bool) -> Option<usize> {
        navigate(ELIGIBLE.len(), origin, direction, wrap, |i| ELIGIBLE[i])
    }

    #[test]
    fn skips_ineligible_rows() {
        assert_eq!(nav(Some(1), Navigation::Next, false), Some(2));
        assert_eq!(nav(Some(2), Navigation::Next, false), Some(4));
        assert_eq!(nav(Some(4), Navigation::Prev, false), Some(2));
    }

    #[test]
    fn no_origin_starts_at_an_edge() {
        assert_eq!(nav(None, Navigation::Next, false), Some(1));
        assert_eq!(nav(None, Navigation::Prev, false), Some(4));
        assert_eq!(nav(Some(4), Navigation::First, false), Some(1));
        assert_eq!(nav(Some(1), Navigation::Last, false), Some(4));
    }

    #[test]
    fn wrap_controls_edge_behavior() {
        assert_eq!(nav(Some(4), Navigation::Next, false), None);
        assert_eq!(nav(Some(1), Navigation::Prev, false), None);
        assert_eq!(nav(Some(4), Navigation::Next, true), Some(1));
        assert_eq!(nav(Some(1), Navigation::Prev, true), Some(4));
    }

    #[test]
    fn nothing_eligible_yields_none() {
        assert_eq!(navigate(3, None, Navigation::First, true, |_| false), None);
        assert_eq!(navigate(0, Some(0), Navigation::Next, true, |_| true), None);
    }

    #[test]
    fn stale_origin_past_the_end_is_tolerated() {
        assert_eq!(nav(Some(40), Navigation::Prev, false), Some(4));
        assert_eq!(nav(Some(40), Navigation::Next, true), Some(1));
    }
}
