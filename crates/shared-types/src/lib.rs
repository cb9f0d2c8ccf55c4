//! # Shared Types Crate
//!
//! This crate contains the primitive value types that every bridge crate
//! agrees on: 20-byte account addresses, 32-byte hashes, chain identifiers
//! and 256-bit unsigned amounts.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-crate primitives are defined here.
//! - **Wire Friendly**: Addresses render as `0x`-prefixed lowercase hex and
//!   serialize as strings so they can key JSON maps.
//! - **EVM Word Layout**: Every primitive knows how to lay itself out as a
//!   32-byte ABI word.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
