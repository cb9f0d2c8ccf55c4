//! # Bridge Events
//!
//! Log entries emitted after a successful state change. A holder watching
//! `SwapInitialized` has everything needed to rebuild and sign the hash.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_types::{Address, ChainId, Hash, U256};

use super::entities::{Redemption, TransferProof};

/// Events emitted by a bridge instance.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum BridgeEvent {
    /// Tokens burned; field order matches the on-chain event.
    SwapInitialized {
        /// Account whose tokens were burned.
        sender: Address,
        /// Token to mint on the destination chain.
        remote_token: Address,
        /// Burned amount.
        amount: U256,
        /// Sender-chosen nonce.
        nonce: U256,
        /// Chain the burn happened on.
        source_chain_id: ChainId,
        /// Hash the holder must sign.
        #[serde_as(as = "Hex")]
        hash: Hash,
    },
    /// Tokens minted to the signer.
    Redeemed {
        /// Account credited.
        recipient: Address,
        /// Token minted.
        token: Address,
        /// Minted amount.
        amount: U256,
        /// Nonce consumed here.
        nonce: U256,
        /// Chain the burn happened on.
        source_chain_id: ChainId,
    },
    /// Admin changed a registry entry.
    TokenMapped {
        /// Local token.
        local: Address,
        /// New remote counterpart.
        remote: Address,
        /// Remote counterpart before the change.
        previous: Option<Address>,
    },
}

impl BridgeEvent {
    /// Event for a completed swap.
    pub fn swap_initialized(proof: &TransferProof) -> Self {
        BridgeEvent::SwapInitialized {
            sender: proof.sender,
            remote_token: proof.remote_token,
            amount: proof.amount,
            nonce: proof.nonce,
            source_chain_id: proof.source_chain_id,
            hash: proof.hash,
        }
    }

    /// Event for a completed redeem.
    pub fn redeemed(redemption: &Redemption) -> Self {
        BridgeEvent::Redeemed {
            recipient: redemption.recipient,
            token: redemption.token,
            amount: redemption.amount,
            nonce: redemption.nonce,
            source_chain_id: redemption.source_chain_id,
        }
    }

    /// Rebuild the proof carried by a `SwapInitialized` event.
    pub fn as_proof(&self) -> Option<TransferProof> {
        match self {
            BridgeEvent::SwapInitialized {
                sender,
                remote_token,
                amount,
                nonce,
                source_chain_id,
                hash,
            } => Some(TransferProof {
                sender: *sender,
                amount: *amount,
                nonce: *nonce,
                remote_token: *remote_token,
                source_chain_id: *source_chain_id,
                hash: *hash,
            }),
            _ => None,
        }
    }

    /// Short event name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            BridgeEvent::SwapInitialized { .. } => "SwapInitialized",
            BridgeEvent::Redeemed { .. } => "Redeemed",
            BridgeEvent::TokenMapped { .. } => "TokenMapped",
        }
    }
}
