//! # Token-Mapping Registry
//!
//! Maps a token on this chain to its mirror on the peer chain. Keys are the
//! tokens this instance may burn; values are what the swap proof names as
//! `remote_token`. On redeem the key side is also what gets minted.
//!
//! The registry always has a primary pair, fixed at construction and
//! replaceable by the admin; swaps that do not name a token use it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Local-to-remote token table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRegistry {
    primary: Address,
    mappings: BTreeMap<Address, Address>,
}

impl TokenRegistry {
    /// Registry whose primary pair is `local -> remote`.
    pub fn new(local: Address, remote: Address) -> Self {
        let mut mappings = BTreeMap::new();
        mappings.insert(local, remote);
        Self {
            primary: local,
            mappings,
        }
    }

    /// Insert or overwrite a mapping, returning the previous remote.
    pub fn set(&mut self, local: Address, remote: Address) -> Option<Address> {
        self.mappings.insert(local, remote)
    }

    /// Whether `local` has a mapping.
    pub fn is_supported(&self, local: &Address) -> bool {
        self.mappings.contains_key(local)
    }

    /// Remote counterpart of `local`.
    pub fn remote_for(&self, local: &Address) -> Option<Address> {
        self.mappings.get(local).copied()
    }

    /// Local token of the primary pair.
    pub fn primary_local(&self) -> Address {
        self.primary
    }

    /// Remote token of the primary pair.
    pub fn primary_remote(&self) -> Address {
        // The primary key is inserted at construction and never removed
        self.mappings
            .get(&self.primary)
            .copied()
            .unwrap_or_default()
    }

    /// Replace the remote side of the primary pair.
    pub fn set_primary_remote(&mut self, remote: Address) -> Option<Address> {
        self.mappings.insert(self.primary, remote)
    }

    /// All mappings, ordered by local address.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Address)> {
        self.mappings.iter()
    }

    /// Number of mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Always false; the primary pair is never removed.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
