//! # Error Types
//!
//! Errors raised while parsing primitive values from text or raw bytes.

use thiserror::Error;

/// Errors that can occur when decoding a primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// The input was not valid hexadecimal.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The decoded byte length does not match the expected width.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The input was not a valid decimal integer.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}
