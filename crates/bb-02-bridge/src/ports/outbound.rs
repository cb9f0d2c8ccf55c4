//! # Outbound Ports
//!
//! Dependencies the bridge needs from its host chain.

use std::sync::Arc;

use shared_types::{Address, U256};

use crate::domain::{BridgeEvent, LedgerError};

/// Token ledger - outbound port.
///
/// `bridge` is the calling contract; the ledger checks it is the minter.
pub trait TokenLedger: Send + Sync {
    /// Destroy `amount` of `token` held by `from`.
    fn burn(
        &self,
        bridge: Address,
        token: &Address,
        from: Address,
        amount: U256,
    ) -> Result<(), LedgerError>;

    /// Create `amount` of `token` for `to`.
    fn mint(
        &self,
        bridge: Address,
        token: &Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError>;

    /// Balance of `account`.
    fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, LedgerError>;

    /// Total supply of `token`.
    fn total_supply(&self, token: &Address) -> Result<U256, LedgerError>;
}

/// Event sink - outbound port.
pub trait EventPublisher: Send + Sync {
    /// Record an event. Called only after the state change committed.
    fn publish(&self, event: BridgeEvent);
}

impl<T: TokenLedger + ?Sized> TokenLedger for Arc<T> {
    fn burn(
        &self,
        bridge: Address,
        token: &Address,
        from: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        (**self).burn(bridge, token, from, amount)
    }

    fn mint(
        &self,
        bridge: Address,
        token: &Address,
        to: Address,
        amount: U256,
    ) -> Result<(), LedgerError> {
        (**self).mint(bridge, token, to, amount)
    }

    fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, LedgerError> {
        (**self).balance_of(token, account)
    }

    fn total_supply(&self, token: &Address) -> Result<U256, LedgerError> {
        (**self).total_supply(token)
    }
}

impl<T: EventPublisher + ?Sized> EventPublisher for Arc<T> {
    fn publish(&self, event: BridgeEvent) {
        (**self).publish(event)
    }
}

/// Publisher that drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEventPublisher;

impl EventPublisher for NoopEventPublisher {
    fn publish(&self, _event: BridgeEvent) {}
}
