//! # Token Ledger (Component 01)
//!
//! A fungible token contract as the bridge sees it: ERC-20 style balances and
//! allowances, one owner, and a single minter account that alone may mint and
//! burn. On a bridged deployment the minter is the local bridge instance.
//!
//! ## Architecture
//!
//! - **Domain**: `Token` entity and `TokenError`
//! - **Service**: `InMemoryTokenLedger`, hosting every token on one chain
//!
//! ## Guarantees
//!
//! - Failed calls never leave partial balance changes behind.
//! - `total_supply` always equals the sum of all balances.
//! - Only the configured minter can change `total_supply`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod service;

pub use domain::{Token, TokenError, TokenParams};
pub use service::{InMemoryTokenLedger, LedgerSnapshot};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
