//! Local Chain Client
//!
//! Implements `ChainClient` by calling a `BridgeService` in-process.

use std::sync::Arc;

use async_trait::async_trait;
use bb_02_bridge::{
    BridgeApi, BridgeError, BridgeService, EventPublisher, RedeemRequest, Redemption, TokenLedger,
    TransferProof,
};
use shared_types::{Address, ChainId, U256};

use crate::errors::HolderError;
use crate::ports::ChainClient;

/// Client for a bridge running in the same process.
pub struct LocalChainClient<L: TokenLedger, E: EventPublisher> {
    name: String,
    bridge: Arc<BridgeService<L, E>>,
}

impl<L: TokenLedger, E: EventPublisher> LocalChainClient<L, E> {
    /// Wrap a bridge under a network name.
    pub fn new(name: impl Into<String>, bridge: Arc<BridgeService<L, E>>) -> Self {
        Self {
            name: name.into(),
            bridge,
        }
    }

    /// The wrapped bridge.
    pub fn bridge(&self) -> &Arc<BridgeService<L, E>> {
        &self.bridge
    }

    fn wrap(&self, source: BridgeError) -> HolderError {
        HolderError::Bridge {
            chain: self.bridge.chain_id(),
            source,
        }
    }
}

#[async_trait]
impl<L, E> ChainClient for LocalChainClient<L, E>
where
    L: TokenLedger + 'static,
    E: EventPublisher + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn chain_id(&self) -> ChainId {
        self.bridge.chain_id()
    }

    async fn next_nonce(&self, account: Address) -> Result<U256, HolderError> {
        Ok(self.bridge.next_nonce(&account))
    }

    async fn primary_token(&self) -> Result<Address, HolderError> {
        Ok(self.bridge.token())
    }

    async fn swap(
        &self,
        from: Address,
        amount: U256,
        nonce: U256,
        local_token: Option<Address>,
    ) -> Result<TransferProof, HolderError> {
        self.bridge
            .swap(from, amount, nonce, local_token)
            .map_err(|e| self.wrap(e))
    }

    async fn redeem(
        &self,
        from: Address,
        request: RedeemRequest,
    ) -> Result<Redemption, HolderError> {
        self.bridge.redeem(from, request).map_err(|e| self.wrap(e))
    }

    async fn balance_of(&self, token: Address, account: Address) -> Result<U256, HolderError> {
        self.bridge
            .balance_of(&token, &account)
            .map_err(|e| self.wrap(e))
    }

    async fn total_supply(&self, token: Address) -> Result<U256, HolderError> {
        self.bridge.total_supply(&token).map_err(|e| self.wrap(e))
    }
}
