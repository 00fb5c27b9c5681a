//! Multi-draw candidate assembly.
//!
//! A candidate wider than one primitive call is built from 30-bit lanes:
//! draw `i` fills bits `30 * i .. 30 * i + 29`. The last lane is masked
//! down to the bits still missing, so the result is uniform over
//! `[0, 2^bits)`.

use crate::error::EntropyError;
use crate::primitive::BoundedUniform;

/// Bits contributed by one full lane.
pub const LANE_BITS: u32 = 30;

/// Bound passed to the primitive for every lane draw (2^30).
pub const LANE_BOUND: u32 = 1 << LANE_BITS;

/// Mask selecting a full lane.
pub const LANE_MASK: u32 = LANE_BOUND - 1;

/// Lanes needed to cover a 64-bit candidate.
pub const MAX_LANES: u32 = u64::BITS.div_ceil(LANE_BITS);

/// Assembles a candidate with exactly `bits` significant bits.
///
/// Issues one `draw_below(LANE_BOUND)` per lane that still has bits to fill
/// and stops at the first failing draw. Requires `bits <= 64`.
///
/// # Errors
///
/// Returns `EntropyError` if any draw fails.
pub fn assemble<P>(primitive: &mut P, bits: u32) -> Result<u64, EntropyError>
where
    P: BoundedUniform + ?Sized,
{
    debug_assert!(bits <= u64::BITS, "candidate wider than 64 bits");

    let mut candidate = 0_u64;
    let mut remaining = bits;
    let mut shift = 0;
    while remaining > 0 {
        let take = remaining.min(LANE_BITS);
        let mask = LANE_MASK >> (LANE_BITS - take);
        let draw = primitive.draw_below(LANE_BOUND)?;
        candidate |= u64::from(draw & mask) << shift;
        remaining -= take;
        shift += LANE_BITS;
    }
    Ok(candidate)
}
