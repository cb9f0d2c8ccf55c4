//! # Recoverable ECDSA Signatures (secp256k1)
//!
//! Ethereum-style signatures: 65 bytes laid out as `r || s || v`, where `v`
//! selects which of the two candidate public keys produced the signature.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S enforcement (EIP-2): upper-half `s` values are rejected on recovery
//!   and never produced on signing
//! - `v` accepted as 0/1 or 27/28
//!
//! ## Address Derivation
//!
//! `address = keccak256(uncompressed_pubkey[1..])[12..]`

use std::fmt;
use std::str::FromStr;

use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use shared_types::{decode_hex, Address, Hash};
use zeroize::Zeroize;

use crate::hashing::{eth_signed_message_hash, keccak256};
use crate::CryptoError;

/// Length of an `r || s || v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// A 65-byte recoverable signature (`r || s || v`).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature([u8; SIGNATURE_LENGTH]);

impl RecoverableSignature {
    /// Wrap raw bytes without validation.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build from a slice, rejecting anything that is not 65 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let raw: [u8; SIGNATURE_LENGTH] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSignatureLength {
                    actual: bytes.len(),
                })?;
        Ok(Self(raw))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// The `r` scalar.
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    /// The `s` scalar.
    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// The recovery byte.
    pub fn v(&self) -> u8 {
        self.0[64]
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoverableSignature({self})")
    }
}

impl FromStr for RecoverableSignature {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = decode_hex(s).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl Serialize for RecoverableSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecoverableSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// secp256k1 keypair that signs in the Ethereum recoverable format.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Create from a hex secret key, with or without `0x`.
    pub fn from_hex(text: &str) -> Result<Self, CryptoError> {
        let mut bytes = decode_hex(text).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        let result = <[u8; 32]>::try_from(bytes.as_slice())
            .map_err(|_| CryptoError::InvalidPrivateKey)
            .and_then(Self::from_bytes);
        bytes.zeroize();
        result
    }

    /// Account address controlled by this key.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a 32-byte digest as-is.
    pub fn sign_prehash(&self, prehash: &Hash) -> Result<RecoverableSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(prehash)
            .map_err(|_| CryptoError::InvalidSignature)?;

        // Keep s in the lower half; flipping s mirrors the y parity
        let (sig, recid) = match sig.normalize_s() {
            Some(low) => (low, RecoveryId::new(!recid.is_y_odd(), recid.is_x_reduced())),
            None => (sig, recid),
        };

        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..64].copy_from_slice(&sig.to_bytes());
        bytes[64] = recid.to_byte() + 27;
        Ok(RecoverableSignature(bytes))
    }

    /// Sign a 32-byte hash the way `personal_sign` does (EIP-191 prefixed).
    pub fn sign_message_hash(&self, hash: &Hash) -> Result<RecoverableSignature, CryptoError> {
        self.sign_prehash(&eth_signed_message_hash(hash))
    }

    /// Get secret key bytes (for serialization).
    pub fn to_bytes(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }
}

impl fmt::Debug for Secp256k1KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secp256k1KeyPair")
            .field("address", &self.address())
            .finish_non_exhaustive()
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Recover the address that signed `prehash`.
///
/// Rejects upper-half `s`, unknown `v` and scalars outside `[1, n-1]`.
pub fn recover_address(
    prehash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    let recovery_id = parse_recovery_id(signature.v())?;

    let sig =
        Signature::from_slice(&signature.0[..64]).map_err(|_| CryptoError::InvalidSignature)?;
    if sig.normalize_s().is_some() {
        return Err(CryptoError::InvalidSignatureS);
    }

    let recovered = VerifyingKey::recover_from_prehash(prehash, &sig, recovery_id)
        .map_err(|_| CryptoError::InvalidSignature)?;
    Ok(address_from_pubkey(&recovered))
}

/// Recover the address that `personal_sign`ed a 32-byte hash.
pub fn recover_message_signer(
    hash: &Hash,
    signature: &RecoverableSignature,
) -> Result<Address, CryptoError> {
    recover_address(&eth_signed_message_hash(hash), signature)
}

/// Derive the Ethereum address of a public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let encoded = public_key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag
    let hash = keccak256(&encoded.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Address(address)
}

fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidSignatureV { v }),
    };
    RecoveryId::from_byte(id).ok_or(CryptoError::InvalidSignatureV { v })
}
