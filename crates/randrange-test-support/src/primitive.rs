//! Test primitives — deterministic `BoundedUniform` implementations for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use randrange_core::{BoundedUniform, EntropyError};

/// A primitive that always draws `0`. Suitable for tests that only care
/// about bounds, not about specific values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroPrimitive;

impl BoundedUniform for ZeroPrimitive {
    fn draw_below(&mut self, _bound: u32) -> Result<u32, EntropyError> {
        Ok(0)
    }
}

/// A primitive that returns values from a predetermined sequence and
/// records the bound of every call. Panics if the sequence is exhausted.
#[derive(Debug)]
pub struct SequencePrimitive {
    values: Vec<u32>,
    bounds: Vec<u32>,
}

impl SequencePrimitive {
    /// Create a new `SequencePrimitive` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self {
            values,
            bounds: Vec::new(),
        }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.bounds.len()
    }

    /// The bound passed to each draw, in call order.
    #[must_use]
    pub fn bounds(&self) -> &[u32] {
        &self.bounds
    }

    /// Whether every scripted value has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.bounds.len() == self.values.len()
    }
}

impl BoundedUniform for SequencePrimitive {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        let index = self.bounds.len();
        let Some(&value) = self.values.get(index) else {
            panic!("SequencePrimitive exhausted after {index} draws");
        };
        self.bounds.push(bound);
        Ok(value)
    }
}

/// A primitive whose entropy source is permanently unavailable. Useful for
/// testing error propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingPrimitive;

impl BoundedUniform for FailingPrimitive {
    fn draw_below(&mut self, _bound: u32) -> Result<u32, EntropyError> {
        Err(EntropyError("no entropy available".into()))
    }
}

/// Wraps another primitive and counts the draws made through it.
#[derive(Debug, Default)]
pub struct CountingPrimitive<P> {
    inner: P,
    calls: usize,
}

impl<P> CountingPrimitive<P> {
    /// Wrap `inner` with a zeroed counter.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self { inner, calls: 0 }
    }

    /// Draws made since creation or the last `reset`.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Zero the counter.
    pub fn reset(&mut self) {
        self.calls = 0;
    }

    /// Unwrap the inner primitive.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: BoundedUniform> BoundedUniform for CountingPrimitive<P> {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        self.calls += 1;
        self.inner.draw_below(bound)
    }
}

/// A reproducible primitive backed by a seeded `StdRng`. Used by the
/// statistical tests so a given seed always yields the same verdict.
#[derive(Debug)]
pub struct SeededPrimitive {
    rng: StdRng,
}

impl SeededPrimitive {
    /// Create a primitive from a 64-bit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BoundedUniform for SeededPrimitive {
    fn draw_below(&mut self, bound: u32) -> Result<u32, EntropyError> {
        Ok(self.rng.random_range(0..bound))
    }
}
