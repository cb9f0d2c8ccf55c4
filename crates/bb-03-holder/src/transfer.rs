//! # Transfer Flow
//!
//! Drives one transfer across two chains:
//!
//! ```text
//! source.swap ──► proof ──► wallet.sign ──► destination.redeem
//! ```
//!
//! The steps are not atomic. Once the swap succeeds the tokens are burned;
//! if anything after it fails, the error carries the proof (and signature,
//! when one was made) so the redeem can be retried with [`redeem_proof`].

use bb_02_bridge::{RedeemRequest, Redemption, TransferProof};
use shared_crypto::RecoverableSignature;
use bb_telemetry::{component_span, log_transfer_event};
use shared_types::{Address, U256};
use tracing::{warn, Instrument};

use crate::errors::HolderError;
use crate::ports::ChainClient;
use crate::wallet::Wallet;

/// Everything produced by a completed transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Proof issued by the source chain.
    pub proof: TransferProof,
    /// Holder signature over `proof.hash`.
    pub signature: RecoverableSignature,
    /// Mint on the destination chain.
    pub redemption: Redemption,
}

/// Sign `proof` and redeem it on `destination`.
pub async fn redeem_proof(
    wallet: &Wallet,
    destination: &dyn ChainClient,
    proof: &TransferProof,
) -> Result<(RecoverableSignature, Redemption), HolderError> {
    let signature = wallet.sign_proof(proof)?;
    let request = RedeemRequest::from_proof(proof, &signature);

    match destination.redeem(wallet.address(), request).await {
        Ok(redemption) => Ok((signature, redemption)),
        Err(err) => Err(HolderError::RedeemFailed {
            chain: destination.chain_id(),
            proof: Box::new(proof.clone()),
            signature,
            source: Box::new(err),
        }),
    }
}

/// Move `amount` from `source` to `destination` for `wallet`.
///
/// `local_token` selects the token on the source chain; `None` uses the
/// bridge's primary token. The nonce is the one the source bridge expects.
pub async fn bridge_transfer(
    wallet: &Wallet,
    source: &dyn ChainClient,
    destination: &dyn ChainClient,
    amount: U256,
    local_token: Option<Address>,
) -> Result<TransferReceipt, HolderError> {
    if source.chain_id() == destination.chain_id() {
        return Err(HolderError::SameChain(source.chain_id()));
    }

    let span = component_span!(
        "holder",
        "bridge_transfer",
        from = source.name(),
        to = destination.name()
    );
    transfer(wallet, source, destination, amount, local_token)
        .instrument(span)
        .await
}

async fn transfer(
    wallet: &Wallet,
    source: &dyn ChainClient,
    destination: &dyn ChainClient,
    amount: U256,
    local_token: Option<Address>,
) -> Result<TransferReceipt, HolderError> {
    let account = wallet.address();
    let nonce = source.next_nonce(account).await?;

    log_transfer_event!(
        info,
        "holder",
        "[bb-03] Transfer started",
        source.chain_id(),
        account,
        nonce,
        amount = %amount
    );

    let proof = source.swap(account, amount, nonce, local_token).await?;
    if !proof.is_consistent() {
        warn!("[bb-03] {} returned a proof with a bad hash", source.name());
        return Err(HolderError::InconsistentProof {
            proof: Box::new(proof),
        });
    }

    let (signature, redemption) = redeem_proof(wallet, destination, &proof)
        .await
        .inspect_err(|err| warn!("[bb-03] Transfer left pending: {}", err))?;

    log_transfer_event!(
        info,
        "holder",
        "[bb-03] Transfer complete",
        destination.chain_id(),
        account,
        nonce,
        amount = %redemption.amount,
        token = %redemption.token
    );

    Ok(TransferReceipt {
        proof,
        signature,
        redemption,
    })
}
