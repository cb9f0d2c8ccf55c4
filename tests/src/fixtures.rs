//! Shared setup: a two-chain devnet owned by a known key.

use bb_02_bridge::{RedeemRequest, ReplayPolicy, TransferProof};
use bb_runtime::{Chain, Devnet, GenesisBuilder, GenesisConfig, RuntimeConfig};
use shared_crypto::Secp256k1KeyPair;
use shared_types::{Address, U256};

/// Supply minted to the owner on each chain.
pub const INITIAL_SUPPLY: u64 = 1_000_000;

/// Hardhat account #0.
pub const OWNER_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// The owner key.
pub fn owner() -> Secp256k1KeyPair {
    Secp256k1KeyPair::from_hex(OWNER_KEY).expect("valid key")
}

/// Fresh devnet (rinkeby = 4, bscTestnet = 97) deployed by `owner`.
pub fn devnet(owner: &Secp256k1KeyPair, policy: ReplayPolicy) -> Devnet {
    devnet_with_supply(owner, policy, U256::from(INITIAL_SUPPLY))
}

/// Fresh devnet with `supply` minted to `owner` on each chain.
pub fn devnet_with_supply(owner: &Secp256k1KeyPair, policy: ReplayPolicy, supply: U256) -> Devnet {
    let config = RuntimeConfig {
        replay_policy: policy,
        initial_supply: supply,
        ..RuntimeConfig::default()
    };
    GenesisBuilder::new(GenesisConfig::from_runtime(&config))
        .build(owner.address())
        .expect("genesis")
}

/// Redeem request for `proof` signed by `signer`.
pub fn signed_request(signer: &Secp256k1KeyPair, proof: &TransferProof) -> RedeemRequest {
    let signature = signer.sign_message_hash(&proof.hash).expect("sign");
    RedeemRequest::from_proof(proof, &signature)
}

/// Total supply of the chain's primary token.
pub fn supply(chain: &Chain) -> U256 {
    chain
        .ledger()
        .total_supply(&chain.token())
        .expect("known token")
}

/// Balance of `account` in the chain's primary token.
pub fn balance(chain: &Chain, account: Address) -> U256 {
    chain
        .ledger()
        .balance_of(&chain.token(), &account)
        .expect("known token")
}

/// Move `amount` of the primary token from the owner to `to`.
pub fn fund(chain: &Chain, owner: &Secp256k1KeyPair, to: Address, amount: u64) {
    chain
        .ledger()
        .transfer(&chain.token(), owner.address(), to, U256::from(amount))
        .expect("owner holds the supply");
}
