//! # Keccak-256 Hashing
//!
//! The legacy (pre-NIST) Keccak-256 used by the EVM, plus the two derived
//! hashes the bridge relies on:
//!
//! - `eth_signed_message_hash`: the EIP-191 personal-message digest that
//!   wallets sign when asked to sign a 32-byte hash.
//! - `contract_address`: deterministic devnet contract addresses.

use sha3::{Digest, Keccak256};
use shared_types::{Address, ChainId, Hash};

/// EIP-191 prefix for a 32-byte personal message.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Keccak-256 of a single buffer.
pub fn keccak256(data: &[u8]) -> Hash {
    Keccak256::digest(data).into()
}

/// Keccak-256 over several buffers, as if they were concatenated.
pub fn keccak256_concat(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Digest a wallet actually signs for `personal_sign(hash)`.
pub fn eth_signed_message_hash(hash: &Hash) -> Hash {
    keccak256_concat(&[ETH_SIGNED_MESSAGE_PREFIX, hash])
}

/// Address assigned to the `nonce`-th contract a deployer creates on a chain.
///
/// The chain id is folded in so the same deployer gets distinct contract
/// addresses on each ledger of a devnet.
pub fn contract_address(deployer: &Address, chain_id: ChainId, nonce: u64) -> Address {
    let digest = keccak256_concat(&[
        deployer.as_bytes(),
        &chain_id.0.to_be_bytes(),
        &nonce.to_be_bytes(),
    ]);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&digest[12..]);
    Address(bytes)
}
