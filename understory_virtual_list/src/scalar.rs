// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction over `f32`/`f64`.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Floating-point scalar used for extents, offsets, and scroll positions.
///
/// Only the handful of operations the virtualization math needs are exposed, and
/// none of them require `std` or `libm`.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// Converts an item count or index into this scalar type.
    fn from_usize(value: usize) -> Self;

    /// Returns the larger of `self` and `other`.
    #[must_use]
    fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }

    /// Returns the smaller of `self` and `other`.
    #[must_use]
    fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Rounds toward negative infinity and converts to `isize`, saturating at the bounds.
    fn floor_to_isize(self) -> isize;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            fn zero() -> Self {
                0.0
            }

            #[allow(
                clippy::cast_precision_loss,
                reason = "Item counts beyond the mantissa are not meaningful for layout"
            )]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[allow(
                clippy::cast_possible_truncation,
                reason = "`as` saturates at the isize bounds, which is the documented behavior"
            )]
            fn floor_to_isize(self) -> isize {
                let truncated = self as isize;
                // `as` truncates toward zero; step down for negative fractions.
                if (truncated as Self) > self {
                    truncated - 1
                } else {
                    truncated
                }
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_rounds_toward_negative_infinity() {
        assert_eq!(2.7_f64.floor_to_isize(), 2);
        assert_eq!(2.0_f32.floor_to_isize(), 2);
        assert_eq!((-0.5_f64).floor_to_isize(), -1);
        assert_eq!((-2.0_f64).floor_to_isize(), -2);
    }

    #[test]
    fn min_max_pick_expected_operand() {
        assert_eq!(Scalar::max(1.0_f64, 3.0), 3.0);
        assert_eq!(Scalar::min(1.0_f64, 3.0), 1.0);
    }
}
