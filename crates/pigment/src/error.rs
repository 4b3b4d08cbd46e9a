//! Error types for color parsing.

use thiserror::Error;

/// Error type for color parsing operations.
///
/// Parsing is the only fallible surface of the crate: setters sanitize
/// invalid input instead of failing. Each variant carries the diagnostic
/// detail of the failure (offending length, character position or
/// matched-group count).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Input string was empty or whitespace-only.
    #[error("cannot parse an empty string")]
    EmptyInput,

    /// Input did not start with any known color prefix.
    #[error("unrecognized color string format: {0}")]
    UnrecognizedFormat(String),

    /// Hex string had an invalid length (expected 3, 6 or 8 digits).
    #[error("invalid hex color length ({0})")]
    InvalidHexLength(usize),

    /// Hex string contained a non-hex character.
    #[error("hex color out of range for {value} at position {position}")]
    InvalidHexDigit {
        /// The offending hex body.
        value: String,
        /// Zero-based position of the first non-hex character.
        position: usize,
    },

    /// `rgb()`/`rgba()` input did not match the grammar.
    #[error("wrong rgb encoding: {parts} parts parsed, expected 4 or 5")]
    InvalidRgb {
        /// Number of matched groups, full match included; 0 when the
        /// pattern did not match at all.
        parts: usize,
    },

    /// `hsl()`/`hsla()` input did not match the grammar.
    #[error("wrong hsl encoding: {parts} parts parsed, expected 4 or 5")]
    InvalidHsl {
        /// Number of matched groups, full match included; 0 when the
        /// pattern did not match at all.
        parts: usize,
    },
}
