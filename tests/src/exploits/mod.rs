//! # Attack Simulations
//!
//! Each test plays an attacker against a live devnet and checks what the
//! bridge lets through. Where the default replay policy is weaker than the
//! used-set policy, both are exercised side by side.

pub mod forgery;
pub mod replay;
