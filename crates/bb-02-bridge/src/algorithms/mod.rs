//! # Algorithms
//!
//! Pure functions: transfer hashing and redeem authorization.

pub mod codec;
pub mod signature;

pub use codec::{encode_transfer, transfer_hash, ENCODED_TRANSFER_LEN};
pub use signature::{recover_signer, verify_redeem_signature};
