//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
///
/// The display strings of the signature variants are part of the bridge's
/// observable contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Signature is not exactly 65 bytes (r || s || v).
    #[error("invalid signature length")]
    InvalidSignatureLength {
        /// Actual length in bytes
        actual: usize,
    },

    /// Signature `s` lies in the upper half of the curve order.
    #[error("invalid signature 's' value")]
    InvalidSignatureS,

    /// Recovery byte is not one of 0, 1, 27, 28.
    #[error("invalid signature 'v' value")]
    InvalidSignatureV {
        /// The rejected recovery byte
        v: u8,
    },

    /// Scalars are out of range or no public key could be recovered.
    #[error("invalid signature")]
    InvalidSignature,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Input could not be decoded from hex
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}
