//! # Holder (Component 03)
//!
//! The off-chain half of the protocol. A holder watches its own swap on the
//! source chain, signs the resulting hash with the same key, and submits the
//! redeem on the destination chain.
//!
//! ## Module Structure
//!
//! ```text
//! bb-03-holder/
//! ├── wallet.rs      # Key, address, proof signing
//! ├── ports.rs       # ChainClient
//! ├── adapters.rs    # LocalChainClient (in-process bridge)
//! └── transfer.rs    # bridge_transfer, redeem_proof
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod errors;
pub mod ports;
pub mod transfer;
pub mod wallet;

pub use adapters::LocalChainClient;
pub use errors::HolderError;
pub use ports::ChainClient;
pub use transfer::{bridge_transfer, redeem_proof, TransferReceipt};
pub use wallet::Wallet;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
