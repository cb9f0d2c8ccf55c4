//! # Replay Attacks
//!
//! Reusing a proof, or a nonce, to mint or burn twice.

#[cfg(test)]
mod tests {
    use bb_02_bridge::{BridgeApi, BridgeError, ErrorCategory, ReplayPolicy, TransferProof};
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::U256;

    use crate::fixtures::{balance, devnet, owner, signed_request, supply, INITIAL_SUPPLY};

    fn swap(
        chain: &bb_runtime::Chain,
        owner: &Secp256k1KeyPair,
        amount: u64,
        nonce: u64,
    ) -> TransferProof {
        chain
            .bridge()
            .swap(owner.address(), U256::from(amount), U256::from(nonce), None)
            .unwrap()
    }

    // =============================================================================
    // IMMEDIATE REPLAY
    // =============================================================================

    #[test]
    fn test_same_swap_twice_is_rejected() {
        for policy in [ReplayPolicy::HighWater, ReplayPolicy::UsedSet] {
            let owner = owner();
            let devnet = devnet(&owner, policy);
            let a = devnet.chain("rinkeby").unwrap();

            swap(a, &owner, 100, 0);
            let err = a
                .bridge()
                .swap(owner.address(), U256::from(100u64), U256::zero(), None)
                .unwrap_err();
            assert_eq!(err.to_string(), "transfer already processed", "{}", policy);
            assert_eq!(err.category(), ErrorCategory::Replay);
            assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 100), "{}", policy);
        }
    }

    #[test]
    fn test_same_redeem_twice_is_rejected() {
        for policy in [ReplayPolicy::HighWater, ReplayPolicy::UsedSet] {
            let owner = owner();
            let devnet = devnet(&owner, policy);
            let [a, b] = devnet.chains();

            let proof = swap(a, &owner, 100, 0);
            let request = signed_request(&owner, &proof);
            b.bridge().redeem(owner.address(), request.clone()).unwrap();

            let err = b.bridge().redeem(owner.address(), request).unwrap_err();
            assert!(
                matches!(err, BridgeError::AlreadyProcessed { .. }),
                "{}",
                policy
            );
            assert_eq!(supply(b), U256::from(INITIAL_SUPPLY + 100), "{}", policy);
        }
    }

    // =============================================================================
    // STALE REPLAY (below the high-water mark)
    // =============================================================================

    /// Only the latest nonce is remembered under the default policy, so an
    /// older proof can be redeemed again once a newer one has landed.
    #[test]
    fn test_stale_proof_replays_under_high_water() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();

        let first = swap(a, &owner, 100, 0);
        let second = swap(a, &owner, 1, 1);
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &first))
            .unwrap();
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &second))
            .unwrap();

        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &first))
            .unwrap();
        assert_eq!(balance(b, owner.address()), U256::from(INITIAL_SUPPLY + 201));
    }

    #[test]
    fn test_stale_proof_rejected_under_used_set() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::UsedSet);
        let [a, b] = devnet.chains();

        let first = swap(a, &owner, 100, 0);
        let second = swap(a, &owner, 1, 1);
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &first))
            .unwrap();
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &second))
            .unwrap();

        let err = b
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &first))
            .unwrap_err();
        assert!(err.is_replay());
        assert_eq!(balance(b, owner.address()), U256::from(INITIAL_SUPPLY + 101));
    }

    // =============================================================================
    // CROSS-INSTANCE REPLAY
    // =============================================================================

    /// A proof names the peer's token, which the source bridge does not
    /// support, so it cannot be redeemed where it was issued.
    #[test]
    fn test_proof_not_redeemable_on_source_chain() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let a = devnet.chain("rinkeby").unwrap();

        let proof = swap(a, &owner, 100, 0);
        let err = a
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap_err();
        assert!(matches!(err, BridgeError::TokenNotSupported { .. }));
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 100));
    }

    /// The token check runs before the replay check, so the answer does not
    /// depend on which nonces the bridge has already seen.
    #[test]
    fn test_unsupported_token_wins_over_spent_nonce() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::UsedSet);
        let [a, b] = devnet.chains();

        let proof = swap(a, &owner, 100, 0);
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap();

        // Same nonce, but naming a token bscTestnet does not map
        let stray = TransferProof::new(
            owner.address(),
            U256::from(100u64),
            U256::zero(),
            a.token(),
            proof.source_chain_id,
        );
        let err = b
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &stray))
            .unwrap_err();
        assert!(matches!(err, BridgeError::TokenNotSupported { .. }));
    }

    #[test]
    fn test_nonce_at_max_cannot_advance() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let a = devnet.chain("rinkeby").unwrap();

        let err = a
            .bridge()
            .swap(owner.address(), U256::one(), U256::MAX, None)
            .unwrap_err();
        assert_eq!(err, BridgeError::NonceOverflow);
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY));
    }
}
