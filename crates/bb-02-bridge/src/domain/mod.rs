//! # Domain Module
//!
//! Core domain types for the bridge.

pub mod entities;
pub mod errors;
pub mod events;
pub mod invariants;
pub mod nonce_ledger;
pub mod registry;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use events::*;
pub use invariants::*;
pub use nonce_ledger::*;
pub use registry::*;
pub use value_objects::*;
