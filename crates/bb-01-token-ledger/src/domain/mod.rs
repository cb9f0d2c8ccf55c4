//! Domain layer for the token ledger.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
