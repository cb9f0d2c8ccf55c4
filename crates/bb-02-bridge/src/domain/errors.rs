//! # Domain Errors
//!
//! Error types for the bridge.
//!
//! Every rejected precondition maps to exactly one variant, and each variant
//! displays a fixed reason string that callers may match on.

use shared_crypto::CryptoError;
use shared_types::{Address, U256};
use thiserror::Error;

/// Coarse classification of a bridge failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Caller lacks admin rights, or the recovered signer is not the caller.
    Authorization,
    /// Zero amount, unsupported token, malformed signature.
    Validation,
    /// Nonce equals the current high-water mark.
    Replay,
    /// Balance or allowance shortfall reported by the token ledger.
    InsufficientResource,
}

/// Failure reported by the token collaborator.
///
/// Reasons are carried through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Debit larger than the holder's balance.
    #[error("not enough balance")]
    InsufficientBalance,

    /// Delegated debit larger than the allowance.
    #[error("not enough allowance")]
    InsufficientAllowance,

    /// The bridge is not the token's minter.
    #[error("caller is not the minter")]
    NotMinter,

    /// No token at the address on this chain.
    #[error("unknown token")]
    UnknownToken(Address),

    /// Any other ledger rejection, reason verbatim.
    #[error("{0}")]
    Rejected(String),
}

/// Bridge error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Swap of zero units.
    #[error("amount must be > 0")]
    ZeroAmount,

    /// Token has no entry in the registry.
    #[error("token not supported")]
    TokenNotSupported {
        /// The rejected token.
        token: Address,
    },

    /// Nonce equals the sender's high-water mark (or, under the used-set
    /// policy, was accepted before).
    #[error("transfer already processed")]
    AlreadyProcessed {
        /// Sender whose nonce was replayed.
        sender: Address,
        /// The replayed nonce.
        nonce: U256,
    },

    /// Recovered signer differs from the caller.
    #[error("wrong signature")]
    WrongSignature {
        /// The account that submitted the redeem.
        expected: Address,
        /// The account that actually signed.
        recovered: Address,
    },

    /// Admin-only operation from another account.
    #[error("not admin")]
    NotAdmin {
        /// Rejected caller.
        caller: Address,
    },

    /// Advancing past `U256::MAX`.
    #[error("nonce overflow")]
    NonceOverflow,

    /// Signature could not be parsed or recovered.
    #[error(transparent)]
    MalformedSignature(#[from] CryptoError),

    /// Token ledger rejected the burn or mint.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl BridgeError {
    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::NotAdmin { .. } | BridgeError::WrongSignature { .. } => {
                ErrorCategory::Authorization
            }
            BridgeError::ZeroAmount
            | BridgeError::TokenNotSupported { .. }
            | BridgeError::NonceOverflow
            | BridgeError::MalformedSignature(_) => ErrorCategory::Validation,
            BridgeError::AlreadyProcessed { .. } => ErrorCategory::Replay,
            BridgeError::Ledger(err) => match err {
                LedgerError::InsufficientBalance | LedgerError::InsufficientAllowance => {
                    ErrorCategory::InsufficientResource
                }
                LedgerError::NotMinter => ErrorCategory::Authorization,
                LedgerError::UnknownToken(_) | LedgerError::Rejected(_) => {
                    ErrorCategory::Validation
                }
            },
        }
    }

    /// Whether the failure is a replayed nonce.
    pub fn is_replay(&self) -> bool {
        self.category() == ErrorCategory::Replay
    }
}
