//! Error types for the holder.

use bb_02_bridge::{BridgeError, TransferProof};
use shared_crypto::{CryptoError, RecoverableSignature};
use shared_types::ChainId;
use thiserror::Error;

/// Holder-side errors.
#[derive(Debug, Error)]
pub enum HolderError {
    /// A bridge call was rejected.
    #[error("chain {chain}: {source}")]
    Bridge {
        /// Chain that rejected the call.
        chain: ChainId,
        /// Bridge reason.
        #[source]
        source: BridgeError,
    },

    /// Source and destination resolve to the same chain.
    #[error("source and destination are the same chain ({0})")]
    SameChain(ChainId),

    /// The swap returned a proof whose hash does not match its fields.
    #[error("proof hash does not match its fields")]
    InconsistentProof {
        /// The rejected proof; tokens were already burned.
        proof: Box<TransferProof>,
    },

    /// Tokens were burned but the redeem did not go through.
    ///
    /// The proof and signature can be resubmitted later.
    #[error("redeem on chain {chain} failed after swap: {source}")]
    RedeemFailed {
        /// Destination chain.
        chain: ChainId,
        /// Proof of the completed burn.
        proof: Box<TransferProof>,
        /// Holder signature over the proof hash.
        signature: RecoverableSignature,
        /// Why the redeem failed.
        #[source]
        source: Box<HolderError>,
    },

    /// Key handling or signing failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

impl HolderError {
    /// Bridge rejection wrapped in this error, if any.
    pub fn bridge_error(&self) -> Option<&BridgeError> {
        match self {
            HolderError::Bridge { source, .. } => Some(source),
            HolderError::RedeemFailed { source, .. } => source.bridge_error(),
            _ => None,
        }
    }

    /// Proof of a burn that still needs redeeming, if any.
    pub fn pending_proof(&self) -> Option<&TransferProof> {
        match self {
            HolderError::InconsistentProof { proof } | HolderError::RedeemFailed { proof, .. } => {
                Some(proof.as_ref())
            }
            _ => None,
        }
    }
}
