//! Randrange CLI — argument normalization and the `randrange` binary.

pub mod app;
pub mod bounds;
pub mod config;
pub mod error;
