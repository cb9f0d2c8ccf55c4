//! # Genesis Builder
//!
//! Creates both chains of the devnet from scratch.

use std::sync::Arc;

use bb_01_token_ledger::{InMemoryTokenLedger, TokenError, TokenParams};
use bb_02_bridge::{BridgeConfig, BridgeState, InMemoryEventLog, ReplayPolicy};
use shared_types::{Address, U256};
use thiserror::Error;
use tracing::info;

use crate::container::{Chain, Devnet, NetworkConfig, RuntimeConfig};

/// Token name deployed on both chains.
pub const TOKEN_NAME: &str = "Erc20my";

/// Token symbol deployed on both chains.
pub const TOKEN_SYMBOL: &str = "EMY";

/// Genesis creation errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Invalid genesis configuration.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),

    /// A token deployment step failed.
    #[error("Token setup failed: {0}")]
    Token(#[from] TokenError),
}

/// Genesis configuration.
#[derive(Debug, Clone)]
pub struct GenesisConfig {
    /// Token deployed on both chains.
    pub token: TokenParams,
    /// The two networks, A then B.
    pub networks: [NetworkConfig; 2],
    /// Replay policy of both bridges.
    pub replay_policy: ReplayPolicy,
}

impl GenesisConfig {
    /// Genesis for the networks and supply in `config`.
    pub fn from_runtime(config: &RuntimeConfig) -> Self {
        Self {
            token: TokenParams::new(TOKEN_NAME, TOKEN_SYMBOL, config.initial_supply),
            networks: config.networks.clone(),
            replay_policy: config.replay_policy,
        }
    }

    fn validate(&self) -> Result<(), GenesisError> {
        let [a, b] = &self.networks;
        if a.chain_id == b.chain_id {
            return Err(GenesisError::InvalidConfig(format!(
                "both networks use chain id {}",
                a.chain_id
            )));
        }
        if self.token.initial_supply.is_zero() {
            return Err(GenesisError::InvalidConfig(
                "initial supply must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for the devnet genesis.
pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    /// Create a builder.
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Override the initial token supply.
    pub fn with_initial_supply(mut self, supply: U256) -> Self {
        self.config.token.initial_supply = supply;
        self
    }

    /// Deploy everything with `owner` as deployer, token owner and admin.
    pub fn build(self, owner: Address) -> Result<Devnet, GenesisError> {
        self.config.validate()?;
        let GenesisConfig {
            token,
            networks,
            replay_policy,
        } = self.config;

        let ledgers = networks
            .clone()
            .map(|network| Arc::new(InMemoryTokenLedger::new(network.chain_id)));

        // Tokens first: each bridge needs the peer token's address
        let tokens = [
            ledgers[0].create_token(owner, token.clone()),
            ledgers[1].create_token(owner, token),
        ];

        let mut chains = Vec::with_capacity(2);
        for (i, (network, ledger)) in networks.into_iter().zip(ledgers).enumerate() {
            let (local, remote) = (tokens[i], tokens[1 - i]);
            let bridge = ledger.next_contract_address(owner);
            ledger.set_minter(&local, owner, bridge)?;

            info!(
                "[genesis] {} (chain {}): token {} bridge {} -> remote {}",
                network.name, network.chain_id, local, bridge, remote
            );

            let config = BridgeConfig::new(bridge, network.chain_id, owner, local, remote)
                .with_replay_policy(replay_policy);
            chains.push(Chain::new(
                network.name,
                ledger,
                Arc::new(InMemoryEventLog::new()),
                BridgeState::new(config),
            ));
        }

        let chains: [Chain; 2] = chains
            .try_into()
            .map_err(|_| GenesisError::InvalidConfig("expected two networks".to_string()))?;
        Ok(Devnet::new(owner, chains))
    }
}
