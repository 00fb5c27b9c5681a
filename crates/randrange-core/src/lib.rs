//! Randrange Core — unbiased integers in arbitrary inclusive ranges.
//!
//! This crate maps the output of a [`BoundedUniform`] primitive onto any
//! `[min, max]` range of a native signed integer type. It contains no
//! entropy source of its own; production and test primitives live in
//! sibling crates.

pub mod error;
pub mod generator;
pub mod lanes;
pub mod primitive;
pub mod width;

#[cfg(test)]
mod testing;

pub use error::{EntropyError, RangeError};
pub use generator::{generate, generate_native};
pub use primitive::BoundedUniform;
pub use width::{NativeInt, Plan, RangeInt};
