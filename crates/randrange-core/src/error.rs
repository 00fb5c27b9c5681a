//! Error types.

use thiserror::Error;

/// The bounded uniform primitive could not produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entropy source unavailable: {0}")]
pub struct EntropyError(pub String);

/// Top-level error type for range generation.
#[derive(Debug, Error)]
pub enum RangeError {
    /// The caller passed `min > max`.
    #[error("invalid range: minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// The requested lower bound.
        min: i128,
        /// The requested upper bound.
        max: i128,
    },

    /// The primitive failed; never retried or replaced by a weaker source.
    #[error(transparent)]
    EntropyUnavailable(#[from] EntropyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_bounds() {
        let err = RangeError::InvalidRange { min: 10, max: -3 };
        assert_eq!(
            err.to_string(),
            "invalid range: minimum 10 is greater than maximum -3"
        );
    }

    #[test]
    fn test_entropy_error_converts_and_keeps_message() {
        let err: RangeError = EntropyError("getrandom returned EIO".into()).into();
        assert!(matches!(err, RangeError::EntropyUnavailable(_)));
        assert_eq!(
            err.to_string(),
            "entropy source unavailable: getrandom returned EIO"
        );
    }
}
