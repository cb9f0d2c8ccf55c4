//! # Shared Crypto - EVM-Compatible Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256, EIP-191 | Transfer digests, signed-message digests |
//! | `ecdsa` | secp256k1 (recoverable) | Holder signatures, signer recovery |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic, low-S enforced (EIP-2)
//! - **Recovery**: `v` in {0, 1, 27, 28}; malformed inputs fail with stable
//!   reason strings rather than recovering a garbage address

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{
    address_from_pubkey, recover_address, recover_message_signer, RecoverableSignature,
    Secp256k1KeyPair, SIGNATURE_LENGTH,
};
pub use errors::CryptoError;
pub use hashing::{
    contract_address, eth_signed_message_hash, keccak256, keccak256_concat,
    ETH_SIGNED_MESSAGE_PREFIX,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
