//! # Inbound Ports
//!
//! API trait defining what a bridge instance can do.

use shared_types::{Address, ChainId, U256};

use crate::domain::{BridgeError, RedeemRequest, Redemption, TransferProof};

/// Bridge API - inbound port.
///
/// Each call is atomic: it either applies every effect or none.
pub trait BridgeApi: Send + Sync {
    /// Burn `amount` of `local_token` from `caller` and issue a proof.
    ///
    /// `None` selects the primary token.
    fn swap(
        &self,
        caller: Address,
        amount: U256,
        nonce: U256,
        local_token: Option<Address>,
    ) -> Result<TransferProof, BridgeError>;

    /// Mint to `caller` against a proof the caller signed.
    fn redeem(&self, caller: Address, request: RedeemRequest) -> Result<Redemption, BridgeError>;

    /// Nonce `sender` is expected to use next.
    fn next_nonce(&self, sender: &Address) -> U256;

    /// Admin only: map `local` to `remote`.
    fn add_other_token(
        &self,
        caller: Address,
        local: Address,
        remote: Address,
    ) -> Result<(), BridgeError>;

    /// Admin only: replace the remote side of the primary pair.
    fn set_other_token(&self, caller: Address, remote: Address) -> Result<(), BridgeError>;

    /// Remote side of the primary pair.
    fn other_token(&self) -> Address;

    /// Local side of the primary pair.
    fn token(&self) -> Address;

    /// Whether `local` can be swapped (and redeemed).
    fn is_supported(&self, local: &Address) -> bool;

    /// Remote counterpart of `local`.
    fn remote_token_for(&self, local: &Address) -> Option<Address>;

    /// Chain this instance runs on.
    fn chain_id(&self) -> ChainId;

    /// Address of this instance.
    fn address(&self) -> Address;
}
