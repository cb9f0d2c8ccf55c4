//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod event_log;
pub mod token_ledger;

pub use event_log::InMemoryEventLog;
