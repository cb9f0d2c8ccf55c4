//! Token Ledger Adapter
//!
//! Implements the `TokenLedger` port on top of the in-memory token ledger.

use bb_01_token_ledger::{InMemoryTokenLedger, TokenError};
use shared_types::{Address, U256};

use crate::domain::LedgerError;
use crate::ports::outbound::TokenLedger;

impl From<TokenError> for LedgerError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InsufficientBalance { .. } => LedgerError::InsufficientBalance,
            TokenError::InsufficientAllowance { .. } => LedgerError::InsufficientAllowance,
            TokenError::NotMinter { .. } => LedgerError::NotMinter,
            TokenError::UnknownToken(token) => LedgerError::UnknownToken(token),
            other => LedgerError::Rejected(other.to_string()),
        }
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn burn(
        &self,
        bridge: Address,
        token: &Address,
        from: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        InMemoryTokenLedger::burn(self, token, bridge, from, amount).map_err(LedgerError::from)
    }

    fn mint(
        &self,
        bridge: Address,
        token: &Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        InMemoryTokenLedger::mint(self, token, bridge, to, amount).map_err(LedgerError::from)
    }

    fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, LedgerError> {
        InMemoryTokenLedger::balance_of(self, token, account).map_err(LedgerError::from)
    }

    fn total_supply(&self, token: &Address) -> Result<U256, LedgerError> {
        InMemoryTokenLedger::total_supply(self, token).map_err(LedgerError::from)
    }
}
