//! Shared test primitives and utilities for randrange.

mod primitive;
mod stats;

pub use primitive::{
    CountingPrimitive, FailingPrimitive, SeededPrimitive, SequencePrimitive, ZeroPrimitive,
};
pub use stats::{chi_square, tally};
