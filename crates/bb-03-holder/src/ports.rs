//! # Chain Client Port
//!
//! What the holder needs from each chain. The two chains are reached
//! independently and never talk to each other.

use async_trait::async_trait;
use bb_02_bridge::{RedeemRequest, Redemption, TransferProof};
use shared_types::{Address, ChainId, U256};

use crate::errors::HolderError;

/// Access to one chain's bridge and tokens.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Network name (e.g. `rinkeby`).
    fn name(&self) -> &str;

    /// Chain id of the network.
    fn chain_id(&self) -> ChainId;

    /// Nonce the bridge expects from `account`.
    async fn next_nonce(&self, account: Address) -> Result<U256, HolderError>;

    /// Primary token of the bridge on this chain.
    async fn primary_token(&self) -> Result<Address, HolderError>;

    /// Swap as `from`. `None` selects the primary token.
    async fn swap(
        &self,
        from: Address,
        amount: U256,
        nonce: U256,
        local_token: Option<Address>,
    ) -> Result<TransferProof, HolderError>;

    /// Redeem as `from`.
    async fn redeem(
        &self,
        from: Address,
        request: RedeemRequest,
    ) -> Result<Redemption, HolderError>;

    /// Token balance of `account`.
    async fn balance_of(&self, token: Address, account: Address) -> Result<U256, HolderError>;

    /// Token total supply.
    async fn total_supply(&self, token: Address) -> Result<U256, HolderError>;
}
