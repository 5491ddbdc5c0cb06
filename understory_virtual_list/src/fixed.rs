// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform rows: every index has the same height.

use crate::{ExtentModel, Scalar};

/// An [`ExtentModel`] whose rows all share one height.
///
/// Offsets are computed, not stored, so resizing is free.
#[derive(Debug, Clone, Copy)]
pub struct FixedExtentModel<S: Scalar> {
    rows: usize,
    row_height: S,
}

impl<S: Scalar> FixedExtentModel<S> {
    /// Creates `rows` rows of `row_height` each. Negative heights become zero.
    #[must_use]
    pub fn new(rows: usize, row_height: S) -> Self {
        Self {
            rows,
            row_height: non_negative(row_height),
        }
    }

    /// Changes the height shared by every row. Negative heights become zero.
    pub fn set_row_height(&mut self, row_height: S) {
        debug_assert!(
            row_height.is_finite(),
            "row height must be finite; got {row_height:?}"
        );
        self.row_height = non_negative(row_height);
    }

    /// Height shared by every row.
    #[must_use]
    pub const fn row_height(&self) -> S {
        self.row_height
    }
}

fn non_negative<S: Scalar>(value: S) -> S {
    if value.is_sign_negative() {
        S::zero()
    } else {
        value
    }
}

impl<S: Scalar> ExtentModel for FixedExtentModel<S> {
    type Scalar = S;

    fn len(&self) -> usize {
        self.rows
    }

    fn total_extent(&mut self) -> S {
        self.offset_of(self.rows)
    }

    fn extent_of(&mut self, _index: usize) -> S {
        self.row_height
    }

    fn offset_of(&mut self, index: usize) -> S {
        self.row_height * S::from_usize(index)
    }

    #[allow(
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        reason = "the row is clamped into 0..rows before converting back"
    )]
    fn index_at_offset(&mut self, offset: S) -> usize {
        let Some(last) = self.rows.checked_sub(1) else {
            return 0;
        };
        if self.row_height <= S::zero() {
            return 0;
        }
        (offset / self.row_height)
            .floor_to_isize()
            .clamp(0, last as isize) as usize
    }

    fn set_len(&mut self, len: usize) {
        self.rows = len;
    }
}

#[cfg(test)]
mod tests {
    use super::{ExtentModel, FixedExtentModel};

    #[test]
    fn rows_map_to_offsets_and_back() {
        let mut rows = FixedExtentModel::new(4, 36.0_f64);
        assert_eq!(rows.total_extent(), 144.0);
        assert_eq!(rows.offset_of(2), 72.0);
        assert_eq!(rows.index_at_offset(35.9), 0);
        assert_eq!(rows.index_at_offset(36.0), 1);
        assert_eq!(rows.index_at_offset(500.0), 3);
        assert_eq!(rows.index_at_offset(-8.0), 0);
    }

    #[test]
    fn degenerate_rows_resolve_to_the_first_index() {
        let mut empty = FixedExtentModel::new(0, 36.0_f64);
        assert_eq!(empty.total_extent(), 0.0);
        assert_eq!(empty.index_at_offset(100.0), 0);

        let mut flat = FixedExtentModel::new(3, -5.0_f64);
        assert_eq!(flat.row_height(), 0.0);
        assert_eq!(flat.index_at_offset(100.0), 0);

        flat.set_row_height(-1.0);
        assert_eq!(flat.row_height(), 0.0);
        flat.set_row_height(12.0);
        assert_eq!(flat.total_extent(), 36.0);
    }

    #[test]
    fn resizing_changes_total_extent() {
        let mut rows = FixedExtentModel::new(2, 48.0_f64);
        rows.set_len(10);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows.total_extent(), 480.0);
    }
}
