//! # Domain Value Objects
//!
//! Immutable value types for the bridge.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a bridge instance decides whether a nonce was already used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Single slot per sender: only the current high-water nonce is
    /// rejected. Lower nonces are accepted again without state change.
    #[default]
    HighWater,
    /// High-water slot plus a record of every accepted nonce; any nonce
    /// seen before is rejected.
    UsedSet,
}

impl ReplayPolicy {
    /// Whether accepted nonces must be remembered individually.
    pub fn tracks_used_nonces(&self) -> bool {
        matches!(self, ReplayPolicy::UsedSet)
    }
}

impl fmt::Display for ReplayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayPolicy::HighWater => write!(f, "high-water"),
            ReplayPolicy::UsedSet => write!(f, "used-set"),
        }
    }
}

impl FromStr for ReplayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high-water" | "highwater" => Ok(ReplayPolicy::HighWater),
            "used-set" | "usedset" => Ok(ReplayPolicy::UsedSet),
            other => Err(format!("unknown replay policy: {other}")),
        }
    }
}

/// Which bridge operation consumed a nonce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Source-side burn.
    Swap,
    /// Destination-side mint.
    Redeem,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Swap => write!(f, "swap"),
            Operation::Redeem => write!(f, "redeem"),
        }
    }
}
