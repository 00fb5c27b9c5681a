//! Bounded uniform primitive abstraction.
//!
//! In production this wraps the operating system's CSPRNG. In tests a
//! scripted or seeded implementation is injected.

use crate::error::EntropyError;

/// Largest `bound` the primitive accepts in a single call (2^31 - 1).
pub const PRIMITIVE_MAX_BOUND: u32 = 0x7FFF_FFFF;

/// A source of uniformly distributed integers below a caller-supplied bound.
pub trait BoundedUniform: Send {
    /// Returns a value uniform on `[0, bound)`.
    ///
    /// Callers must pass `0 < bound <= PRIMITIVE_MAX_BOUND`.
    ///
    /// # Errors
    ///
    /// Returns `EntropyError` if no entropy is available. Implementations
    /// must never fall back to a default value.
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError>;
}

impl<P: BoundedUniform + ?Sized> BoundedUniform for &mut P {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        (**self).draw_below(bound)
    }
}

impl<P: BoundedUniform + ?Sized> BoundedUniform for Box<P> {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        (**self).draw_below(bound)
    }
}
