//! # BB-02 Bridge
//!
//! Trustless burn/mint token transfer between two independent ledgers.
//!
//! **Component ID:** 02
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Move a token's value from chain A to its mirror on chain B without a
//! relayer or oracle:
//! - **Swap** (source): burn, then emit a proof naming sender, amount,
//!   nonce, remote token and source chain, plus its Keccak-256 hash
//! - **Sign** (off-chain): the holder `personal_sign`s the hash
//! - **Redeem** (destination): recover the signer, require it to be the
//!   caller, check replay state, then mint
//!
//! ## Security Properties
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Self-attested mint | Signer must equal caller; proofs cannot be redeemed by third parties |
//! | Chain-bound hash | Source chain id is part of the signed digest |
//! | Replay guard | Per-sender nonce ledger on each instance |
//! | Minter-only supply | Only the bridge can burn or mint its tokens |
//! | Atomic calls | Failures revert every effect of the call |
//!
//! ## Module Structure
//!
//! ```text
//! bb-02-bridge/
//! ├── domain/          # Config, proofs, registry, nonce ledger, events, errors
//! ├── algorithms/      # Transfer codec, redeem authorization
//! ├── ports/           # BridgeApi, TokenLedger, EventPublisher
//! ├── adapters/        # Token ledger binding, in-memory event log
//! └── service.rs       # BridgeService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::InMemoryEventLog;
pub use algorithms::{
    encode_transfer, recover_signer, transfer_hash, verify_redeem_signature,
    ENCODED_TRANSFER_LEN,
};
pub use domain::{
    invariant_admin, invariant_positive_amount, invariant_signer_is_caller,
    invariant_supported_token, BridgeConfig, BridgeError, BridgeEvent, BridgeState,
    ErrorCategory, LedgerError, NonceAdmission, NonceLedger, NonceState, Operation,
    RedeemRequest, Redemption, ReplayPolicy, TokenRegistry, TransferProof,
};
pub use ports::{BridgeApi, EventPublisher, NoopEventPublisher, TokenLedger};
pub use service::BridgeService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
