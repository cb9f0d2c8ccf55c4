//! Transfer message codec
//!
//! Produces the exact digest an EVM bridge computes with
//! `keccak256(abi.encode(sender, amount, nonce, remoteToken, chainId))`.
//!
//! # Byte Layout (160 bytes total)
//! - Bytes 0-31:    sender (address, left-padded with 12 zero bytes)
//! - Bytes 32-63:   amount (uint256, big-endian)
//! - Bytes 64-95:   nonce (uint256, big-endian)
//! - Bytes 96-127:  remoteToken (address, left-padded with 12 zero bytes)
//! - Bytes 128-159: sourceChainId (uint256, big-endian)

use shared_crypto::keccak256;
use shared_types::{u256_to_word, Address, ChainId, Hash, U256};

/// Size of the encoded transfer tuple.
pub const ENCODED_TRANSFER_LEN: usize = 5 * 32;

/// ABI-encode the transfer tuple.
pub fn encode_transfer(
    sender: &Address,
    amount: &U256,
    nonce: &U256,
    remote_token: &Address,
    source_chain_id: ChainId,
) -> [u8; ENCODED_TRANSFER_LEN] {
    let mut data = [0u8; ENCODED_TRANSFER_LEN];
    data[0..32].copy_from_slice(&sender.to_word());
    data[32..64].copy_from_slice(&u256_to_word(amount));
    data[64..96].copy_from_slice(&u256_to_word(nonce));
    data[96..128].copy_from_slice(&remote_token.to_word());
    data[128..160].copy_from_slice(&source_chain_id.to_word());
    data
}

/// Keccak-256 of the encoded transfer tuple.
pub fn transfer_hash(
    sender: &Address,
    amount: &U256,
    nonce: &U256,
    remote_token: &Address,
    source_chain_id: ChainId,
) -> Hash {
    keccak256(&encode_transfer(
        sender,
        amount,
        nonce,
        remote_token,
        source_chain_id,
    ))
}
