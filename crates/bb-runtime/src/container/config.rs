//! # Runtime Configuration
//!
//! Settings for the devnet runtime, read from the environment.
//!
//! ## Security Requirements
//!
//! - The private key is never printed; `Debug` redacts it.
//! - Both networks must have distinct chain ids, or a signature made for one
//!   would describe a transfer "from" the chain it is redeemed on.

use std::env;
use std::fmt;
use std::path::PathBuf;

use bb_02_bridge::ReplayPolicy;
use shared_types::{parse_u256, ChainId, U256};
use thiserror::Error;

/// State file used when `BB_STATE_PATH` is unset.
pub const DEFAULT_STATE_PATH: &str = "./bridge-devnet.json";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `PRIVATE_KEY` is required but unset.
    #[error("PRIVATE_KEY is not set")]
    MissingPrivateKey,

    /// Both networks share a chain id.
    #[error("both networks use chain id {0}")]
    SameChainId(ChainId),

    /// Both networks share a name.
    #[error("both networks are named {0:?}")]
    SameNetworkName(String),

    /// A variable holds a value that cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Raw value.
        value: String,
    },
}

/// One network of the devnet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name, used to select it on the command line.
    pub name: String,
    /// Chain id.
    pub chain_id: ChainId,
}

impl NetworkConfig {
    /// Named network.
    pub fn new(name: impl Into<String>, chain_id: ChainId) -> Self {
        Self {
            name: name.into(),
            chain_id,
        }
    }
}

/// Complete runtime configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Hex private key of the deployer/holder account.
    pub private_key: Option<String>,
    /// Devnet state file.
    pub state_path: PathBuf,
    /// The two networks, A then B.
    pub networks: [NetworkConfig; 2],
    /// Replay policy for both bridges.
    pub replay_policy: ReplayPolicy,
    /// Supply minted to the deployer of each token at genesis.
    pub initial_supply: U256,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            networks: [
                NetworkConfig::new("rinkeby", ChainId(4)),
                NetworkConfig::new("bscTestnet", ChainId(97)),
            ],
            replay_policy: ReplayPolicy::default(),
            initial_supply: U256::from(1_000_000u64),
        }
    }
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("state_path", &self.state_path)
            .field("networks", &self.networks)
            .field("replay_policy", &self.replay_policy)
            .field("initial_supply", &self.initial_supply)
            .finish()
    }
}

impl RuntimeConfig {
    /// Read configuration from the process environment.
    ///
    /// # Environment Variables
    ///
    /// - `PRIVATE_KEY`: hex key of the deployer/holder
    /// - `BB_STATE_PATH`: state file (default: ./bridge-devnet.json)
    /// - `BB_CHAIN_A_NAME` / `BB_CHAIN_A_ID`: first network (rinkeby, 4)
    /// - `BB_CHAIN_B_NAME` / `BB_CHAIN_B_ID`: second network (bscTestnet, 97)
    /// - `BB_REPLAY_POLICY`: high-water or used-set (default: high-water)
    /// - `BB_INITIAL_SUPPLY`: decimal supply per token (default: 1000000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let [default_a, default_b] = defaults.networks;

        let invalid = |key: &'static str, value: &str| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        };
        let chain_id = |key: &'static str, default: ChainId| match lookup(key) {
            Some(value) => value.parse::<ChainId>().map_err(|_| invalid(key, &value)),
            None => Ok(default),
        };

        let networks = [
            NetworkConfig::new(
                lookup("BB_CHAIN_A_NAME").unwrap_or(default_a.name),
                chain_id("BB_CHAIN_A_ID", default_a.chain_id)?,
            ),
            NetworkConfig::new(
                lookup("BB_CHAIN_B_NAME").unwrap_or(default_b.name),
                chain_id("BB_CHAIN_B_ID", default_b.chain_id)?,
            ),
        ];

        let replay_policy = match lookup("BB_REPLAY_POLICY") {
            Some(value) => value
                .parse::<ReplayPolicy>()
                .map_err(|_| invalid("BB_REPLAY_POLICY", &value))?,
            None => defaults.replay_policy,
        };

        let initial_supply = match lookup("BB_INITIAL_SUPPLY") {
            Some(value) => parse_u256(&value).map_err(|_| invalid("BB_INITIAL_SUPPLY", &value))?,
            None => defaults.initial_supply,
        };

        Ok(Self {
            private_key: lookup("PRIVATE_KEY").filter(|key| !key.trim().is_empty()),
            state_path: lookup("BB_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.state_path),
            networks,
            replay_policy,
            initial_supply,
        })
    }

    /// Check the configuration before touching any state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.private_key.is_none() {
            return Err(ConfigError::MissingPrivateKey);
        }
        let [a, b] = &self.networks;
        if a.chain_id == b.chain_id {
            return Err(ConfigError::SameChainId(a.chain_id));
        }
        if a.name == b.name {
            return Err(ConfigError::SameNetworkName(a.name.clone()));
        }
        Ok(())
    }

    /// Private key, or an error if unset.
    pub fn private_key(&self) -> Result<&str, ConfigError> {
        self.private_key
            .as_deref()
            .ok_or(ConfigError::MissingPrivateKey)
    }

    /// Override the state file.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Override the private key.
    pub fn with_private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }
}
