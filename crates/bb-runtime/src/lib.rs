//! # Bridge Runtime Library
//!
//! This library exposes the runtime's modules for testing. The entry point
//! is the `bridge-cli` binary in `main.rs`.
//!
//! ## Modular Structure
//!
//! - `container/` - Runtime configuration and the two-chain devnet
//! - `genesis/` - Initial deployment of tokens and bridges
//! - `commands` - The `bridge-cli` subcommands

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod container;
pub mod genesis;

pub use commands::{run, Cli, Command};
pub use container::{
    Chain, ConfigError, Devnet, DevnetError, DevnetSnapshot, NetworkConfig, RuntimeConfig,
};
pub use genesis::{GenesisBuilder, GenesisConfig, GenesisError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
