//! # Bridge Test Suite
//!
//! Cross-crate tests for the burn/mint bridge.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Devnet and signing helpers shared with benches
//! ├── integration/      # Swap -> sign -> redeem across both chains
//! │   ├── flows.rs
//! │   └── persistence.rs
//! └── exploits/         # Attack simulations
//!     ├── replay.rs     # Reusing nonces and proofs
//!     └── forgery.rs    # Signatures that should not mint
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bb-tests
//!
//! # By category
//! cargo test -p bb-tests integration::
//! cargo test -p bb-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p bb-tests
//! ```

pub mod exploits;
pub mod fixtures;
