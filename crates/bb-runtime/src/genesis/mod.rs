//! # Genesis
//!
//! Deploys the initial devnet: one token per chain, one bridge per chain,
//! each bridge the minter of its local token and mapped to the peer token.

pub mod builder;

pub use builder::{GenesisBuilder, GenesisConfig, GenesisError};
