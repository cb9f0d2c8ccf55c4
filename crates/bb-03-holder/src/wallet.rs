//! Holder wallet: one secp256k1 account that swaps, signs and redeems.

use bb_02_bridge::TransferProof;
use shared_crypto::{RecoverableSignature, Secp256k1KeyPair};
use shared_types::{Address, Hash};

use crate::errors::HolderError;

/// A holder account.
#[derive(Debug)]
pub struct Wallet {
    keypair: Secp256k1KeyPair,
}

impl Wallet {
    /// Fresh random account.
    pub fn generate() -> Self {
        Self {
            keypair: Secp256k1KeyPair::generate(),
        }
    }

    /// Account from a hex private key (as found in `PRIVATE_KEY`).
    pub fn from_private_key(hex: &str) -> Result<Self, HolderError> {
        Ok(Self {
            keypair: Secp256k1KeyPair::from_hex(hex)?,
        })
    }

    /// Account address.
    pub fn address(&self) -> Address {
        self.keypair.address()
    }

    /// `personal_sign` a 32-byte hash.
    pub fn sign_hash(&self, hash: &Hash) -> Result<RecoverableSignature, HolderError> {
        Ok(self.keypair.sign_message_hash(hash)?)
    }

    /// Sign the hash of a swap proof, authorizing its redeem.
    pub fn sign_proof(&self, proof: &TransferProof) -> Result<RecoverableSignature, HolderError> {
        self.sign_hash(&proof.hash)
    }
}
