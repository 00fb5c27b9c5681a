//! Range width computation and strategy selection.
//!
//! The width `max - min + 1` is computed with checked arithmetic in the
//! native signed type. When it overflows, the range is routed to the
//! full-width strategy, which only ever looks at `max - min` reinterpreted
//! as the unsigned type of the same width.

use std::fmt;

use crate::error::RangeError;
use crate::primitive::PRIMITIVE_MAX_BOUND;

/// The platform's native integer, fixed at build time by the target's
/// pointer width.
pub type NativeInt = isize;

mod sealed {
    pub trait Sealed {}
}

/// Signed integer types a range can be drawn from.
pub trait RangeInt:
    Copy + Ord + fmt::Debug + fmt::Display + Send + Sync + sealed::Sealed
{
    /// Width of the type in bits.
    const BITS: u32;

    /// Returns `max - min + 1` if it fits the signed type, `None` otherwise.
    fn checked_width(min: Self, max: Self) -> Option<u64>;

    /// Returns `max - min` computed in the unsigned type of the same width.
    /// Requires `min <= max`.
    fn max_offset(min: Self, max: Self) -> u64;

    /// Returns `min + offset` with modular addition at the native width.
    fn offset_from(min: Self, offset: u64) -> Self;

    /// Widens the value for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_range_int {
    ($($signed:ty => $unsigned:ty),* $(,)?) => {$(
        impl sealed::Sealed for $signed {}

        impl RangeInt for $signed {
            const BITS: u32 = <$signed>::BITS;

            fn checked_width(min: Self, max: Self) -> Option<u64> {
                let width = max.checked_sub(min)?.checked_add(1)?;
                u64::try_from(width).ok()
            }

            #[allow(
                clippy::cast_sign_loss,
                clippy::cast_lossless,
                clippy::unnecessary_cast,
                trivial_numeric_casts
            )]
            fn max_offset(min: Self, max: Self) -> u64 {
                (max as $unsigned).wrapping_sub(min as $unsigned) as u64
            }

            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::unnecessary_cast,
                trivial_numeric_casts
            )]
            fn offset_from(min: Self, offset: u64) -> Self {
                min.wrapping_add(offset as $unsigned as $signed)
            }

            #[allow(clippy::cast_lossless)]
            fn to_i128(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_range_int!(i32 => u32, i64 => u64, isize => usize);

/// Number of bits needed to represent `value`, counted by shifting it right
/// until it reaches zero. `bit_width(0) == 0`.
#[must_use]
pub const fn bit_width(mut value: u64) -> u32 {
    let mut bits = 0;
    while value > 0 {
        value >>= 1;
        bits += 1;
    }
    bits
}

/// How a particular range is turned into primitive draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// `min == max`: no draws at all.
    Degenerate,
    /// The width fits a single primitive call.
    Direct {
        /// Width of the range, passed straight to the primitive.
        bound: u32,
    },
    /// The width fits the native signed type but not a single call.
    Assembled {
        /// Bits needed for `width - 1`.
        bits: u32,
        /// Largest accepted candidate (`width - 1`).
        max_offset: u64,
    },
    /// The width itself overflows the native signed type.
    FullWidth {
        /// Always the full bit width of the native type.
        bits: u32,
        /// Largest accepted candidate (`max - min` as unsigned).
        max_offset: u64,
    },
}

impl Plan {
    /// Chooses the strategy for `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::InvalidRange` if `min > max`.
    pub fn for_range<T: RangeInt>(min: T, max: T) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::InvalidRange {
                min: min.to_i128(),
                max: max.to_i128(),
            });
        }
        if min == max {
            return Ok(Self::Degenerate);
        }

        let plan = match T::checked_width(min, max) {
            Some(width) => match u32::try_from(width) {
                Ok(bound) if bound <= PRIMITIVE_MAX_BOUND => Self::Direct { bound },
                _ => Self::Assembled {
                    bits: bit_width(width - 1),
                    max_offset: width - 1,
                },
            },
            None => Self::FullWidth {
                bits: T::BITS,
                max_offset: T::max_offset(min, max),
            },
        };
        Ok(plan)
    }
}
