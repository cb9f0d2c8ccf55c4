//! # Container
//!
//! Configuration and the running devnet: both chains with their ledger,
//! event log and bridge, wired to each other's tokens.

pub mod config;
pub mod devnet;

pub use config::{ConfigError, NetworkConfig, RuntimeConfig, DEFAULT_STATE_PATH};
pub use devnet::{
    Chain, ChainSnapshot, Devnet, DevnetError, DevnetSnapshot, LocalBridge, LocalClient,
};
