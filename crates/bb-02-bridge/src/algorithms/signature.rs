//! Redeem authorization
//!
//! A redeem is authorized when the holder who calls it is the holder who
//! `personal_sign`ed the transfer hash. The hash is always re-derived from
//! the caller's own address, so a signature lifted from someone else's
//! proof recovers to an unrelated account.

use shared_crypto::{recover_message_signer, RecoverableSignature};
use shared_types::{Address, Hash};

use crate::domain::{invariant_signer_is_caller, BridgeError};

/// Recover the account that signed `hash`.
pub fn recover_signer(hash: &Hash, signature: &[u8]) -> Result<Address, BridgeError> {
    let signature = RecoverableSignature::from_slice(signature)?;
    Ok(recover_message_signer(hash, &signature)?)
}

/// Require that `caller` signed `hash`.
pub fn verify_redeem_signature(
    caller: &Address,
    hash: &Hash,
    signature: &[u8],
) -> Result<(), BridgeError> {
    let signer = recover_signer(hash, signature)?;
    invariant_signer_is_caller(caller, &signer)
}
