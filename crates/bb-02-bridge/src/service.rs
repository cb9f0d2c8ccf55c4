//! # Bridge Service
//!
//! Implements `BridgeApi` for one bridge instance on one chain.
//!
//! ## Atomicity
//!
//! The instance state sits behind a single mutex held for the whole call,
//! which serializes operations the way a ledger serializes transactions.
//! Within a call the order is always: validate, check nonce, call the token
//! ledger, commit the nonce, publish the event. A ledger failure therefore
//! leaves the nonce untouched, and no event is published for a failed call.
//! Events are published before the lock is released, so the event log
//! follows commit order.
//!
//! Swaps and redeems are checked against separate nonce ledgers. A holder
//! can swap on both chains with the nonce each reports and redeem the two
//! proofs in either order.

use bb_telemetry::log_transfer_event;
use parking_lot::Mutex;
use shared_types::{Address, ChainId, U256};
use tracing::info;

use crate::algorithms::{transfer_hash, verify_redeem_signature};
use crate::domain::{
    invariant_admin, invariant_positive_amount, invariant_supported_token, BridgeConfig,
    BridgeError, BridgeEvent, BridgeState, Operation, RedeemRequest, Redemption,
    TransferProof,
};
use crate::ports::inbound::BridgeApi;
use crate::ports::outbound::{EventPublisher, TokenLedger};

/// A bridge instance bound to a token ledger and an event sink.
pub struct BridgeService<L: TokenLedger, E: EventPublisher> {
    state: Mutex<BridgeState>,
    ledger: L,
    events: E,
}

impl<L: TokenLedger, E: EventPublisher> BridgeService<L, E> {
    /// Deploy a fresh instance.
    pub fn new(config: BridgeConfig, ledger: L, events: E) -> Self {
        Self::from_state(BridgeState::new(config), ledger, events)
    }

    /// Resume an instance from persisted state.
    pub fn from_state(state: BridgeState, ledger: L, events: E) -> Self {
        info!(
            "[bb-02] Bridge {} on chain {}: {} token mapping(s), replay policy {}",
            state.config.address,
            state.config.chain_id,
            state.registry.len(),
            state.swap_nonces.policy
        );
        Self {
            state: Mutex::new(state),
            ledger,
            events,
        }
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> BridgeState {
        self.state.lock().clone()
    }

    /// Instance configuration.
    pub fn config(&self) -> BridgeConfig {
        self.state.lock().config.clone()
    }

    /// Token ledger this instance burns and mints on.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Event sink of this instance.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Balance of `account` in `token` on this chain.
    pub fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, BridgeError> {
        Ok(self.ledger.balance_of(token, account)?)
    }

    /// Total supply of `token` on this chain.
    pub fn total_supply(&self, token: &Address) -> Result<U256, BridgeError> {
        Ok(self.ledger.total_supply(token)?)
    }

    fn log_rejection(&self, op: Operation, caller: &Address, nonce: &U256, err: &BridgeError) {
        log_transfer_event!(
            warn,
            "bridge",
            "[bb-02] Transfer rejected",
            self.chain_id(),
            caller,
            nonce,
            operation = %op,
            reason = %err,
            category = ?err.category()
        );
    }

    fn try_swap(
        &self,
        caller: Address,
        amount: U256,
        nonce: U256,
        local_token: Option<Address>,
    ) -> Result<TransferProof, BridgeError> {
        let mut state = self.state.lock();

        invariant_positive_amount(amount)?;
        let local_token = local_token.unwrap_or_else(|| state.registry.primary_local());
        let remote_token = invariant_supported_token(&state.registry, &local_token)?;
        let admission = state.swap_nonces.check(caller, nonce)?;

        self.ledger
            .burn(state.config.address, &local_token, caller, amount)?;
        state.swap_nonces.commit(admission);

        let proof = TransferProof::new(caller, amount, nonce, remote_token, state.config.chain_id);
        log_transfer_event!(
            info,
            "bridge",
            "[bb-02] Swap burned tokens",
            state.config.chain_id,
            caller,
            nonce,
            amount = %amount,
            token = %local_token,
            remote_token = %remote_token
        );
        self.events.publish(BridgeEvent::swap_initialized(&proof));
        drop(state);
        Ok(proof)
    }

    fn try_redeem(
        &self,
        caller: Address,
        request: &RedeemRequest,
    ) -> Result<Redemption, BridgeError> {
        let mut state = self.state.lock();

        let hash = transfer_hash(
            &caller,
            &request.amount,
            &request.nonce,
            &request.remote_token,
            request.source_chain_id,
        );
        verify_redeem_signature(&caller, &hash, &request.signature)?;
        if !state.registry.is_supported(&request.remote_token) {
            return Err(BridgeError::TokenNotSupported {
                token: request.remote_token,
            });
        }
        let admission = state.redeem_nonces.check(caller, request.nonce)?;

        self.ledger.mint(
            state.config.address,
            &request.remote_token,
            caller,
            request.amount,
        )?;
        state.redeem_nonces.commit(admission);

        let redemption = Redemption {
            recipient: caller,
            token: request.remote_token,
            amount: request.amount,
            nonce: request.nonce,
            source_chain_id: request.source_chain_id,
            hash,
        };

        log_transfer_event!(
            info,
            "bridge",
            "[bb-02] Redeem minted tokens",
            state.config.chain_id,
            caller,
            redemption.nonce,
            amount = %redemption.amount,
            token = %redemption.token,
            source_chain = %redemption.source_chain_id
        );
        self.events.publish(BridgeEvent::redeemed(&redemption));
        drop(state);
        Ok(redemption)
    }

    fn map_token(&self, caller: Address, local: Address, remote: Address) -> Result<(), BridgeError> {
        let mut state = self.state.lock();
        invariant_admin(&state.config, &caller)?;
        let previous = state.registry.set(local, remote);

        info!("[bb-02] Token mapped: {} -> {}", local, remote);
        self.events.publish(BridgeEvent::TokenMapped {
            local,
            remote,
            previous,
        });
        drop(state);
        Ok(())
    }
}

impl<L: TokenLedger, E: EventPublisher> BridgeApi for BridgeService<L, E> {
    fn swap(
        &self,
        caller: Address,
        amount: U256,
        nonce: U256,
        local_token: Option<Address>,
    ) -> Result<TransferProof, BridgeError> {
        self.try_swap(caller, amount, nonce, local_token)
            .inspect_err(|err| self.log_rejection(Operation::Swap, &caller, &nonce, err))
    }

    fn redeem(&self, caller: Address, request: RedeemRequest) -> Result<Redemption, BridgeError> {
        self.try_redeem(caller, &request).inspect_err(|err| {
            self.log_rejection(Operation::Redeem, &caller, &request.nonce, err)
        })
    }

    fn next_nonce(&self, sender: &Address) -> U256 {
        self.state.lock().swap_nonces.next_nonce(sender)
    }

    fn add_other_token(
        &self,
        caller: Address,
        local: Address,
        remote: Address,
    ) -> Result<(), BridgeError> {
        self.map_token(caller, local, remote)
    }

    fn set_other_token(&self, caller: Address, remote: Address) -> Result<(), BridgeError> {
        let local = self.state.lock().registry.primary_local();
        self.map_token(caller, local, remote)
    }

    fn other_token(&self) -> Address {
        self.state.lock().registry.primary_remote()
    }

    fn token(&self) -> Address {
        self.state.lock().registry.primary_local()
    }

    fn is_supported(&self, local: &Address) -> bool {
        self.state.lock().registry.is_supported(local)
    }

    fn remote_token_for(&self, local: &Address) -> Option<Address> {
        self.state.lock().registry.remote_for(local)
    }

    fn chain_id(&self) -> ChainId {
        self.state.lock().config.chain_id
    }

    fn address(&self) -> Address {
        self.state.lock().config.address
    }
}
