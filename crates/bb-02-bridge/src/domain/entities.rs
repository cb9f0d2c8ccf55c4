//! # Domain Entities
//!
//! Core entities for the bridge: instance configuration, the proof a swap
//! emits, the request that redeems it, and the persisted instance state.

use serde::{Deserialize, Serialize};
use serde_with::{hex::Hex, serde_as};
use shared_crypto::RecoverableSignature;
use shared_types::{Address, ChainId, Hash, U256};

use super::nonce_ledger::NonceLedger;
use super::registry::TokenRegistry;
use super::value_objects::ReplayPolicy;
use crate::algorithms::codec::transfer_hash;

/// Static configuration of one bridge instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Address of the bridge itself; must be the minter of its tokens.
    pub address: Address,
    /// Chain the instance runs on, written into every proof it issues.
    pub chain_id: ChainId,
    /// Account allowed to change the registry.
    pub admin: Address,
    /// Primary token on this chain.
    pub local_token: Address,
    /// Mirror of `local_token` on the peer chain.
    pub remote_token: Address,
    /// Nonce acceptance rule.
    #[serde(default)]
    pub replay_policy: ReplayPolicy,
}

impl BridgeConfig {
    /// Configuration with the default replay policy.
    pub fn new(
        address: Address,
        chain_id: ChainId,
        admin: Address,
        local_token: Address,
        remote_token: Address,
    ) -> Self {
        Self {
            address,
            chain_id,
            admin,
            local_token,
            remote_token,
            replay_policy: ReplayPolicy::default(),
        }
    }

    /// Override the replay policy.
    pub fn with_replay_policy(mut self, policy: ReplayPolicy) -> Self {
        self.replay_policy = policy;
        self
    }
}

/// Evidence of a source-side burn, emitted by swap.
///
/// Only `hash` is signed; the other fields let the holder and the
/// destination bridge re-derive it.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferProof {
    /// Account whose tokens were burned.
    pub sender: Address,
    /// Burned amount in the token's smallest unit.
    pub amount: U256,
    /// Sender-chosen nonce.
    pub nonce: U256,
    /// Token to mint on the destination chain.
    pub remote_token: Address,
    /// Chain the burn happened on.
    pub source_chain_id: ChainId,
    /// Keccak-256 of the ABI-encoded tuple above.
    #[serde_as(as = "Hex")]
    pub hash: Hash,
}

impl TransferProof {
    /// Build a proof and derive its hash.
    pub fn new(
        sender: Address,
        amount: U256,
        nonce: U256,
        remote_token: Address,
        source_chain_id: ChainId,
    ) -> Self {
        let hash = transfer_hash(&sender, &amount, &nonce, &remote_token, source_chain_id);
        Self {
            sender,
            amount,
            nonce,
            remote_token,
            source_chain_id,
            hash,
        }
    }

    /// Whether `hash` matches the fields.
    pub fn is_consistent(&self) -> bool {
        self.hash
            == transfer_hash(
                &self.sender,
                &self.amount,
                &self.nonce,
                &self.remote_token,
                self.source_chain_id,
            )
    }
}

/// Arguments of a destination-side redeem.
///
/// The signature is kept as raw bytes so malformed input reaches the bridge
/// and is rejected there with a precise reason.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemRequest {
    /// Amount burned on the source chain.
    pub amount: U256,
    /// Nonce used on the source chain.
    pub nonce: U256,
    /// Chain the burn happened on.
    pub source_chain_id: ChainId,
    /// Token to mint here.
    pub remote_token: Address,
    /// `personal_sign` signature over the transfer hash.
    #[serde_as(as = "Hex")]
    pub signature: Vec<u8>,
}

impl RedeemRequest {
    /// Request that redeems `proof` with `signature`.
    pub fn from_proof(proof: &TransferProof, signature: &RecoverableSignature) -> Self {
        Self {
            amount: proof.amount,
            nonce: proof.nonce,
            source_chain_id: proof.source_chain_id,
            remote_token: proof.remote_token,
            signature: signature.as_bytes().to_vec(),
        }
    }
}

/// Outcome of a successful redeem.
#[serde_as]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redemption {
    /// Account credited; always the signer.
    pub recipient: Address,
    /// Token minted.
    pub token: Address,
    /// Minted amount.
    pub amount: U256,
    /// Nonce consumed on this chain.
    pub nonce: U256,
    /// Chain the burn happened on.
    pub source_chain_id: ChainId,
    /// Hash the signature covered.
    #[serde_as(as = "Hex")]
    pub hash: Hash,
}

/// Mutable state of one bridge instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeState {
    /// Instance configuration.
    pub config: BridgeConfig,
    /// Token mappings.
    pub registry: TokenRegistry,
    /// Replay protection for swaps. Backs `next_nonce`.
    pub swap_nonces: NonceLedger,
    /// Replay protection for redeems, kept apart from swaps so a proof
    /// from the other chain never collides with a local swap nonce.
    pub redeem_nonces: NonceLedger,
}

impl BridgeState {
    /// Fresh state for `config`.
    pub fn new(config: BridgeConfig) -> Self {
        let registry = TokenRegistry::new(config.local_token, config.remote_token);
        Self {
            swap_nonces: NonceLedger::new(config.replay_policy),
            redeem_nonces: NonceLedger::new(config.replay_policy),
            config,
            registry,
        }
    }
}
