//! # Nonce Ledger
//!
//! Per-sender replay protection. Each bridge instance keeps one ledger for
//! swaps and one for redeems; the two chains never share nonce space.
//!
//! Each sender has a `next_nonce` (initially 0). A nonce `n` is rejected iff
//! `next_nonce > 0 && n == next_nonce - 1`. An accepted `n >= next_nonce`
//! advances `next_nonce` to `n + 1`; a lower `n` leaves it unchanged.
//! Under [`ReplayPolicy::UsedSet`] every accepted nonce is also recorded and
//! any repeat is rejected.
//!
//! Checking and committing are separate steps so the caller can run the
//! token side effect in between and only commit once it succeeded.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

use super::errors::BridgeError;
use super::value_objects::ReplayPolicy;

/// Replay state of one sender.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceState {
    /// Value returned by `next_nonce`.
    pub next_nonce: U256,
    /// Every accepted nonce (used-set policy only).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub used: BTreeSet<U256>,
}

impl NonceState {
    /// The most recently advanced nonce, once any nonce was accepted.
    pub fn high_water(&self) -> Option<U256> {
        if self.next_nonce.is_zero() {
            None
        } else {
            Some(self.next_nonce - U256::one())
        }
    }
}

/// A nonce that passed the check and is waiting to be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "an admission does nothing until committed"]
pub struct NonceAdmission {
    /// Sender the nonce belongs to.
    pub sender: Address,
    /// The admitted nonce.
    pub nonce: U256,
    /// New `next_nonce`, if the nonce moves the high-water mark.
    pub advance_to: Option<U256>,
}

/// Replay state of every sender seen by one bridge instance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceLedger {
    /// Acceptance rule.
    pub policy: ReplayPolicy,
    #[serde(default)]
    senders: BTreeMap<Address, NonceState>,
}

impl NonceLedger {
    /// Empty ledger with the given policy.
    pub fn new(policy: ReplayPolicy) -> Self {
        Self {
            policy,
            senders: BTreeMap::new(),
        }
    }

    /// Nonce a sender is expected to use next.
    pub fn next_nonce(&self, sender: &Address) -> U256 {
        self.senders
            .get(sender)
            .map(|s| s.next_nonce)
            .unwrap_or_default()
    }

    /// State of one sender, if it ever had a nonce accepted.
    pub fn state(&self, sender: &Address) -> Option<&NonceState> {
        self.senders.get(sender)
    }

    /// Number of senders with replay state.
    pub fn sender_count(&self) -> usize {
        self.senders.len()
    }

    /// Apply the acceptance rule without changing state.
    pub fn check(&self, sender: Address, nonce: U256) -> Result<NonceAdmission, BridgeError> {
        let state = self.senders.get(&sender);
        let next = state.map(|s| s.next_nonce).unwrap_or_default();

        let replayed_high_water = state.and_then(NonceState::high_water) == Some(nonce);
        let replayed_used = self.policy.tracks_used_nonces()
            && state.is_some_and(|s| s.used.contains(&nonce));
        if replayed_high_water || replayed_used {
            return Err(BridgeError::AlreadyProcessed { sender, nonce });
        }

        let advance_to = if nonce >= next {
            Some(nonce.checked_add(U256::one()).ok_or(BridgeError::NonceOverflow)?)
        } else {
            None
        };

        Ok(NonceAdmission {
            sender,
            nonce,
            advance_to,
        })
    }

    /// Record an admission produced by [`NonceLedger::check`].
    pub fn commit(&mut self, admission: NonceAdmission) {
        let tracks_used = self.policy.tracks_used_nonces();
        let state = self.senders.entry(admission.sender).or_default();
        if let Some(next) = admission.advance_to {
            state.next_nonce = next;
        }
        if tracks_used {
            state.used.insert(admission.nonce);
        }
    }

    /// Check and commit in one step.
    pub fn accept(&mut self, sender: Address, nonce: U256) -> Result<(), BridgeError> {
        let admission = self.check(sender, nonce)?;
        self.commit(admission);
        Ok(())
    }
}
