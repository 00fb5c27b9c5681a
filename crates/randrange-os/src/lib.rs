//! Randrange OS — the production bounded uniform primitive.
//!
//! Draws 32-bit words from the operating system's CSPRNG and reduces them
//! to `[0, bound)` without modulo bias.

use rand::TryRngCore;
use rand::rngs::OsRng;
use randrange_core::{BoundedUniform, EntropyError, RangeError, RangeInt, generate};
use tracing::error;

/// Bounded uniform primitive backed by the operating system RNG.
///
/// Zero-sized and `Copy`; each thread can hold its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsPrimitive;

impl OsPrimitive {
    fn next_word() -> Result<u32, EntropyError> {
        OsRng.try_next_u32().map_err(|e| {
            error!(error = %e, "operating system entropy source failed");
            EntropyError(e.to_string())
        })
    }
}

impl BoundedUniform for OsPrimitive {
    /// Words below `2^32 mod bound` are redrawn so the remaining range is an
    /// exact multiple of `bound`. Bounds below 2 return `0` without drawing.
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        if bound < 2 {
            return Ok(0);
        }

        let threshold = bound.wrapping_neg() % bound;
        loop {
            let word = Self::next_word()?;
            if word >= threshold {
                return Ok(word % bound);
            }
        }
    }
}

/// Returns an integer uniformly distributed on `[min, max]` using the
/// operating system RNG.
///
/// # Errors
///
/// Returns `RangeError::InvalidRange` if `min > max` and
/// `RangeError::EntropyUnavailable` if the OS cannot supply entropy.
pub fn random_int<T: RangeInt>(min: T, max: T) -> Result<T, RangeError> {
    generate(&mut OsPrimitive, min, max)
}
