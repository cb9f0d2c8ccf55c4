//! # Domain Invariants
//!
//! Business rules checked before any state change.

use shared_types::{Address, U256};

use super::entities::BridgeConfig;
use super::errors::BridgeError;
use super::registry::TokenRegistry;

/// Invariant: swaps move a positive amount.
pub fn invariant_positive_amount(amount: U256) -> Result<(), BridgeError> {
    if amount.is_zero() {
        return Err(BridgeError::ZeroAmount);
    }
    Ok(())
}

/// Invariant: the token has a registry entry.
///
/// Returns the remote counterpart.
pub fn invariant_supported_token(
    registry: &TokenRegistry,
    token: &Address,
) -> Result<Address, BridgeError> {
    registry
        .remote_for(token)
        .ok_or(BridgeError::TokenNotSupported { token: *token })
}

/// Invariant: only the admin mutates the registry.
pub fn invariant_admin(config: &BridgeConfig, caller: &Address) -> Result<(), BridgeError> {
    if config.admin != *caller {
        return Err(BridgeError::NotAdmin { caller: *caller });
    }
    Ok(())
}

/// Invariant: the holder who signed is the holder who redeems.
pub fn invariant_signer_is_caller(caller: &Address, signer: &Address) -> Result<(), BridgeError> {
    if caller != signer {
        return Err(BridgeError::WrongSignature {
            expected: *caller,
            recovered: *signer,
        });
    }
    Ok(())
}
