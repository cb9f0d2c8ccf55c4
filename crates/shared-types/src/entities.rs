//! # Core Value Types
//!
//! Defines the primitives shared by the ledger, bridge and holder crates.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `ChainId`
//! - **Integrity**: `Hash`, `Word`
//! - **Value**: `U256`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::TypeError;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

/// A 32-byte hash (Keccak-256 throughout the bridge).
pub type Hash = [u8; 32];

/// A single 32-byte ABI word.
pub type Word = [u8; 32];

/// Lays out a `U256` as a big-endian ABI word.
pub fn u256_to_word(value: &U256) -> Word {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Parses a decimal amount such as `"1000000"`.
pub fn parse_u256(text: &str) -> Result<U256, TypeError> {
    U256::from_dec_str(text.trim()).map_err(|_| TypeError::InvalidNumber(text.to_string()))
}

/// Strips an optional `0x`/`0X` prefix and decodes the rest as hex.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, TypeError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).map_err(|e| TypeError::InvalidHex(e.to_string()))
}

/// Renders bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// =============================================================================
// ADDRESS
// =============================================================================

/// A 20-byte Ethereum-style account or contract address.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The all-zero address.
    pub const ZERO: Address = Address([0u8; 20]);

    /// Wraps raw address bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Builds an address from a slice that must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let raw: [u8; 20] = bytes.try_into().map_err(|_| TypeError::InvalidLength {
            expected: 20,
            actual: bytes.len(),
        })?;
        Ok(Self(raw))
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns true for the zero address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Left-pads the address with 12 zero bytes into an ABI word.
    pub fn to_word(&self) -> Word {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(0x{})", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&decode_hex(s)?)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// CHAIN ID
// =============================================================================

/// Identifier of a ledger, as returned by the EVM `chainid` opcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Lays out the chain id as a big-endian ABI word.
    pub fn to_word(&self) -> Word {
        u256_to_word(&U256::from(self.0))
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ChainId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ChainId)
            .map_err(|_| TypeError::InvalidNumber(s.to_string()))
    }
}
