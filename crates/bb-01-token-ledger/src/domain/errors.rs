//! Error types for the token ledger.

use shared_types::Address;
use thiserror::Error;

/// Token ledger errors.
///
/// Display strings mirror the revert reasons of the deployed token and are
/// surfaced unchanged through the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Debit larger than the account balance.
    #[error("not enough balance")]
    InsufficientBalance {
        /// Account being debited.
        account: Address,
    },

    /// `transfer_from` larger than the remaining allowance.
    #[error("not enough allowance")]
    InsufficientAllowance {
        /// Token holder.
        owner: Address,
        /// Spender attempting the debit.
        spender: Address,
    },

    /// Mint or burn from an account other than the configured minter.
    #[error("caller is not the minter")]
    NotMinter {
        /// Rejected caller.
        caller: Address,
    },

    /// Owner-only operation from another account.
    #[error("caller is not the owner")]
    NotOwner {
        /// Rejected caller.
        caller: Address,
    },

    /// No token is deployed at the address.
    #[error("unknown token")]
    UnknownToken(Address),

    /// Mint would push total supply past `U256::MAX`.
    #[error("supply overflow")]
    SupplyOverflow,
}
