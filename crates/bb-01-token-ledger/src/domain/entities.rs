//! Domain entities for the token ledger.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

use super::errors::TokenError;

/// Constructor arguments for a token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenParams {
    /// Human-readable name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display decimals.
    pub decimals: u8,
    /// Supply credited to the deployer.
    pub initial_supply: U256,
}

impl TokenParams {
    /// Create params with 18 decimals.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, initial_supply: U256) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals: 18,
            initial_supply,
        }
    }

    /// Override decimals.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }
}

/// A fungible token with one owner and at most one minter.
///
/// Every mutating method validates fully before touching any balance, so a
/// returned error leaves the token unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Contract address.
    pub address: Address,
    /// Human-readable name.
    pub name: String,
    /// Ticker symbol.
    pub symbol: String,
    /// Display decimals.
    pub decimals: u8,
    /// Deployer; may change the minter.
    pub owner: Address,
    /// Sole account allowed to mint and burn.
    pub minter: Option<Address>,
    total_supply: U256,
    #[serde(default)]
    balances: BTreeMap<Address, U256>,
    #[serde(default)]
    allowances: BTreeMap<Address, BTreeMap<Address, U256>>,
}

impl Token {
    /// Deploy a token, crediting the whole initial supply to `owner`.
    pub fn deploy(address: Address, owner: Address, params: TokenParams) -> Self {
        let mut balances = BTreeMap::new();
        if !params.initial_supply.is_zero() {
            balances.insert(owner, params.initial_supply);
        }
        Self {
            address,
            name: params.name,
            symbol: params.symbol,
            decimals: params.decimals,
            owner,
            minter: None,
            total_supply: params.initial_supply,
            balances,
            allowances: BTreeMap::new(),
        }
    }

    /// Sum of all balances.
    pub fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Balance of `account` (zero if never credited).
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Remaining amount `spender` may move on behalf of `owner`.
    pub fn allowance(&self, owner: &Address, spender: &Address) -> U256 {
        self.allowances
            .get(owner)
            .and_then(|spenders| spenders.get(spender))
            .copied()
            .unwrap_or_default()
    }

    /// Move `amount` from `from` to `to`.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        self.ensure_balance(&from, amount)?;
        self.debit(from, amount);
        self.credit(to, amount);
        Ok(())
    }

    /// Set the allowance of `spender` over `owner`'s balance.
    pub fn approve(&mut self, owner: Address, spender: Address, amount: U256) {
        self.allowances
            .entry(owner)
            .or_default()
            .insert(spender, amount);
    }

    /// Move `amount` from `from` to `to` using `spender`'s allowance.
    pub fn transfer_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        let allowed = self.allowance(&from, &spender);
        if allowed < amount {
            return Err(TokenError::InsufficientAllowance {
                owner: from,
                spender,
            });
        }
        self.ensure_balance(&from, amount)?;

        self.approve(from, spender, allowed - amount);
        self.debit(from, amount);
        self.credit(to, amount);
        Ok(())
    }

    /// Owner-only: hand minting rights to `minter`.
    pub fn set_minter(&mut self, caller: Address, minter: Address) -> Result<(), TokenError> {
        if caller != self.owner {
            return Err(TokenError::NotOwner { caller });
        }
        self.minter = Some(minter);
        Ok(())
    }

    /// Minter-only: create `amount` new units for `to`.
    pub fn mint(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        self.ensure_minter(&caller)?;
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(TokenError::SupplyOverflow)?;

        self.total_supply = supply;
        self.credit(to, amount);
        Ok(())
    }

    /// Minter-only: destroy `amount` units held by `from`.
    pub fn burn(&mut self, caller: Address, from: Address, amount: U256) -> Result<(), TokenError> {
        self.ensure_minter(&caller)?;
        self.ensure_balance(&from, amount)?;

        self.debit(from, amount);
        self.total_supply -= amount;
        Ok(())
    }

    fn ensure_minter(&self, caller: &Address) -> Result<(), TokenError> {
        match self.minter {
            Some(minter) if minter == *caller => Ok(()),
            _ => Err(TokenError::NotMinter { caller: *caller }),
        }
    }

    fn ensure_balance(&self, account: &Address, amount: U256) -> Result<(), TokenError> {
        if self.balance_of(account) < amount {
            return Err(TokenError::InsufficientBalance { account: *account });
        }
        Ok(())
    }

    // Callers must have checked the balance.
    fn debit(&mut self, account: Address, amount: U256) {
        let remaining = self.balance_of(&account) - amount;
        if remaining.is_zero() {
            self.balances.remove(&account);
        } else {
            self.balances.insert(account, remaining);
        }
    }

    // Balances never exceed total supply, so this cannot overflow.
    fn credit(&mut self, account: Address, amount: U256) {
        if amount.is_zero() {
            return;
        }
        let balance = self.balance_of(&account) + amount;
        self.balances.insert(account, balance);
    }
}
