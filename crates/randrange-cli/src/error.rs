//! Randrange CLI — error types.

use randrange_core::RangeError;
use thiserror::Error;

/// A caller-supplied bound could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input is not numeric, or falls outside the `i64` range.
    #[error("{name} must be an integer, got {input:?}")]
    NotAnInteger {
        /// Which bound was being parsed.
        name: &'static str,
        /// The raw input.
        input: String,
    },

    /// The bounds are in the wrong order.
    #[error("minimum value ({min}) must be less than or equal to the maximum value ({max})")]
    MinExceedsMax {
        /// The parsed lower bound.
        min: i64,
        /// The parsed upper bound.
        max: i64,
    },
}

/// Startup and runtime errors for the command-line tool.
#[derive(Debug, Error)]
pub enum AppError {
    /// An environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Wrong number of arguments.
    #[error("usage: {0}")]
    Usage(String),

    /// A bound failed normalization.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// Range generation failed.
    #[error("generation error: {0}")]
    Random(#[from] RangeError),

    /// Writing results failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Process exit code for this error, following `sysexits.h`.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 64,
            Self::Input(_) | Self::Random(RangeError::InvalidRange { .. }) => 65,
            Self::Random(RangeError::EntropyUnavailable(_)) => 69,
            Self::Output(_) => 74,
            Self::Config(_) => 78,
        }
    }
}
