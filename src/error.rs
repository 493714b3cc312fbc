//! Error types for color parsing, input validation and the CLI.

use thiserror::Error;

/// Strict hex parsing failures. The lenient [`crate::color::hex_to_rgb`]
/// path never surfaces these; it substitutes black instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidDigit { index: usize, found: char },
}

/// A rejected counter field.
///
/// The `Display` output of each variant is the exact message shown to the
/// user, so callers can compare against it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Counter name cannot be empty")]
    NameEmpty,

    #[error("Counter name is too long (maximum 50 characters)")]
    NameTooLong,

    #[error("Target must be a valid number")]
    TargetNotANumber,

    #[error("Target must be a positive number")]
    TargetNegative,

    #[error("Target is too large (maximum 999,999)")]
    TargetTooLarge,

    #[error("Target must be a whole number")]
    TargetNotWhole,

    #[error("Increment must be a valid number")]
    IncrementNotANumber,

    #[error("Increment must be greater than 0")]
    IncrementNotPositive,

    #[error("Increment is too large (maximum 10,000)")]
    IncrementTooLarge,

    #[error("Increment must be a whole number")]
    IncrementNotWhole,

    #[error("Color must be a hex value like #RRGGBB")]
    ColorInvalid,
}

/// Errors surfaced by the `tallies` binary.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("usage: {0}")]
    Usage(String),
}

/// Convenience alias for `Result<T, TallyError>`.
pub type Result<T> = std::result::Result<T, TallyError>;
