//! Ranged uniform integer generator.
//!
//! Small ranges take a single primitive call. Wider ranges are assembled
//! from 30-bit lanes and filtered by rejection sampling, so every value of
//! `[min, max]` is equally likely. The rejection loop has no iteration cap:
//! the accepted fraction of the bit space is always above one half, so it
//! terminates with probability 1 after fewer than two rounds on average.

use tracing::{debug, trace};

use crate::error::{EntropyError, RangeError};
use crate::lanes::assemble;
use crate::primitive::BoundedUniform;
use crate::width::{NativeInt, Plan, RangeInt};

/// Returns an integer uniformly distributed on `[min, max]`.
///
/// No state survives between calls; every call starts from fresh draws.
///
/// # Errors
///
/// Returns `RangeError::InvalidRange` before drawing anything if
/// `min > max`, and `RangeError::EntropyUnavailable` as soon as the
/// primitive fails.
pub fn generate<T, P>(primitive: &mut P, min: T, max: T) -> Result<T, RangeError>
where
    T: RangeInt,
    P: BoundedUniform + ?Sized,
{
    let plan = Plan::for_range(min, max)?;
    debug!(%min, %max, ?plan, "generating ranged integer");

    match plan {
        Plan::Degenerate => Ok(min),
        Plan::Direct { bound } => {
            let draw = primitive.draw_below(bound)?;
            Ok(T::offset_from(min, u64::from(draw)))
        }
        Plan::Assembled { bits, max_offset } | Plan::FullWidth { bits, max_offset } => {
            let offset = sample_offset(primitive, bits, max_offset)?;
            Ok(T::offset_from(min, offset))
        }
    }
}

/// Returns an integer uniformly distributed on `[min, max]` for the
/// platform's native integer width.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_native<P>(
    primitive: &mut P,
    min: NativeInt,
    max: NativeInt,
) -> Result<NativeInt, RangeError>
where
    P: BoundedUniform + ?Sized,
{
    generate(primitive, min, max)
}

fn sample_offset<P>(primitive: &mut P, bits: u32, max_offset: u64) -> Result<u64, EntropyError>
where
    P: BoundedUniform + ?Sized,
{
    loop {
        let candidate = assemble(primitive, bits)?;
        if candidate <= max_offset {
            return Ok(candidate);
        }
        trace!(candidate, max_offset, "rejected candidate outside range");
    }
}
