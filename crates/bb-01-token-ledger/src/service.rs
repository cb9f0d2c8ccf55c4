//! # In-Memory Token Ledger
//!
//! Hosts every token deployed on one chain and serializes access to them.
//! Each call holds the write lock for its full duration, which gives the
//! same all-or-nothing semantics a transaction has on a real ledger.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_crypto::contract_address;
use shared_types::{Address, ChainId, U256};
use tracing::{debug, info};

use crate::domain::{Token, TokenError, TokenParams};

/// Serializable image of a ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Chain the ledger belongs to.
    pub chain_id: ChainId,
    /// Contracts created per deployer, used to derive new addresses.
    #[serde(default)]
    pub deploy_nonces: BTreeMap<Address, u64>,
    /// Deployed tokens by address.
    #[serde(default)]
    pub tokens: BTreeMap<Address, Token>,
}

/// Token ledger for a single chain.
pub struct InMemoryTokenLedger {
    state: RwLock<LedgerSnapshot>,
}

impl InMemoryTokenLedger {
    /// Create an empty ledger for `chain_id`.
    pub fn new(chain_id: ChainId) -> Self {
        Self::from_snapshot(LedgerSnapshot {
            chain_id,
            ..LedgerSnapshot::default()
        })
    }

    /// Restore a ledger from a snapshot.
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self {
            state: RwLock::new(snapshot),
        }
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.state.read().clone()
    }

    /// Chain this ledger runs on.
    pub fn chain_id(&self) -> ChainId {
        self.state.read().chain_id
    }

    /// Reserve the next contract address for `deployer`.
    ///
    /// Used for contracts that live outside the ledger, such as bridges.
    pub fn next_contract_address(&self, deployer: Address) -> Address {
        let mut state = self.state.write();
        Self::allocate_address(&mut state, deployer)
    }

    /// Deploy a token owned by `deployer` and return its address.
    pub fn create_token(&self, deployer: Address, params: TokenParams) -> Address {
        let mut state = self.state.write();
        let address = Self::allocate_address(&mut state, deployer);

        info!(
            "[bb-01] Deploying token {} ({}) at {} on chain {}, supply {}",
            params.name, params.symbol, address, state.chain_id, params.initial_supply
        );

        state
            .tokens
            .insert(address, Token::deploy(address, deployer, params));
        address
    }

    /// Read-only view of a token.
    pub fn token(&self, token: &Address) -> Result<Token, TokenError> {
        self.with_token(token, Token::clone)
    }

    /// Addresses of all deployed tokens.
    pub fn tokens(&self) -> Vec<Address> {
        self.state.read().tokens.keys().copied().collect()
    }

    /// Token name.
    pub fn name(&self, token: &Address) -> Result<String, TokenError> {
        self.with_token(token, |t| t.name.clone())
    }

    /// Token symbol.
    pub fn symbol(&self, token: &Address) -> Result<String, TokenError> {
        self.with_token(token, |t| t.symbol.clone())
    }

    /// Token decimals.
    pub fn decimals(&self, token: &Address) -> Result<u8, TokenError> {
        self.with_token(token, |t| t.decimals)
    }

    /// Current total supply.
    pub fn total_supply(&self, token: &Address) -> Result<U256, TokenError> {
        self.with_token(token, Token::total_supply)
    }

    /// Balance of `account`.
    pub fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, TokenError> {
        self.with_token(token, |t| t.balance_of(account))
    }

    /// Remaining allowance of `spender` over `owner`.
    pub fn allowance(
        &self,
        token: &Address,
        owner: &Address,
        spender: &Address,
    ) -> Result<U256, TokenError> {
        self.with_token(token, |t| t.allowance(owner, spender))
    }

    /// Current minter, if any.
    pub fn minter(&self, token: &Address) -> Result<Option<Address>, TokenError> {
        self.with_token(token, |t| t.minter)
    }

    /// Transfer from `caller` to `to`.
    pub fn transfer(
        &self,
        token: &Address,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| t.transfer(caller, to, amount))
    }

    /// Approve `spender` to move `amount` of `caller`'s balance.
    pub fn approve(
        &self,
        token: &Address,
        caller: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| {
            t.approve(caller, spender, amount);
            Ok(())
        })
    }

    /// Transfer on behalf of `from`, consuming `caller`'s allowance.
    pub fn transfer_from(
        &self,
        token: &Address,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| t.transfer_from(caller, from, to, amount))
    }

    /// Owner-only: set the minter.
    pub fn set_minter(
        &self,
        token: &Address,
        caller: Address,
        minter: Address,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| t.set_minter(caller, minter))?;
        info!("[bb-01] Minter of {} set to {}", token, minter);
        Ok(())
    }

    /// Minter-only: mint to `to`.
    pub fn mint(
        &self,
        token: &Address,
        caller: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| t.mint(caller, to, amount))?;
        debug!("[bb-01] Minted {} of {} to {}", amount, token, to);
        Ok(())
    }

    /// Minter-only: burn from `from`.
    pub fn burn(
        &self,
        token: &Address,
        caller: Address,
        from: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        self.with_token_mut(token, |t| t.burn(caller, from, amount))?;
        debug!("[bb-01] Burned {} of {} from {}", amount, token, from);
        Ok(())
    }

    fn allocate_address(state: &mut LedgerSnapshot, deployer: Address) -> Address {
        let nonce = state.deploy_nonces.entry(deployer).or_insert(0);
        let address = contract_address(&deployer, state.chain_id, *nonce);
        *nonce += 1;
        address
    }

    fn with_token<T>(&self, token: &Address, f: impl FnOnce(&Token) -> T) -> Result<T, TokenError> {
        let state = self.state.read();
        let entry = state
            .tokens
            .get(token)
            .ok_or(TokenError::UnknownToken(*token))?;
        Ok(f(entry))
    }

    fn with_token_mut<T>(
        &self,
        token: &Address,
        f: impl FnOnce(&mut Token) -> Result<T, TokenError>,
    ) -> Result<T, TokenError> {
        let mut state = self.state.write();
        let entry = state
            .tokens
            .get_mut(token)
            .ok_or(TokenError::UnknownToken(*token))?;
        f(entry)
    }
}
