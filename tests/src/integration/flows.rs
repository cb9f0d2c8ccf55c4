//! # Integration Test Flows
//!
//! Swap on one chain, sign the emitted hash off-chain, redeem on the other.
//!
//! ## Flows Tested:
//!
//! 1. **Manual transfer**: bridge calls driven directly, as the CLI does,
//!    including swaps on both chains before either redeem
//! 2. **Holder transfer**: the same flow through `bb-03-holder`
//! 3. **Extra token pairs**: admin mapping followed by a transfer of the new token
//! 4. **Event stream**: a watcher learns the hash from `SwapInitialized`

#[cfg(test)]
mod tests {
    use bb_01_token_ledger::TokenParams;
    use bb_02_bridge::{transfer_hash, BridgeApi, BridgeEvent, ReplayPolicy};
    use bb_03_holder::{bridge_transfer, Wallet};
    use shared_types::{ChainId, U256};

    use crate::fixtures::{balance, devnet, fund, owner, signed_request, supply, INITIAL_SUPPLY};

    // =============================================================================
    // MANUAL TRANSFER
    // =============================================================================

    /// Supply 1,000,000 on both sides; 100 moves from rinkeby to bscTestnet.
    #[tokio::test]
    async fn test_concrete_scenario() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();

        let nonce = a.bridge().next_nonce(&owner.address());
        assert_eq!(nonce, U256::zero());

        let proof = a
            .bridge()
            .swap(owner.address(), U256::from(100u64), nonce, None)
            .unwrap();
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 100));
        assert_eq!(balance(a, owner.address()), U256::from(INITIAL_SUPPLY - 100));

        // The event carries everything needed to rebuild the hash
        let event = a.events().events().pop().unwrap();
        let BridgeEvent::SwapInitialized {
            sender,
            remote_token,
            amount,
            nonce,
            source_chain_id,
            hash,
        } = event
        else {
            panic!("expected SwapInitialized");
        };
        assert_eq!(remote_token, b.token());
        assert_eq!(source_chain_id, ChainId(4));
        assert_eq!(
            hash,
            transfer_hash(&sender, &amount, &nonce, &remote_token, source_chain_id)
        );

        let redemption = b
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap();
        assert_eq!(redemption.recipient, owner.address());
        assert_eq!(redemption.token, b.token());
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY + 100));
        assert_eq!(balance(b, owner.address()), U256::from(INITIAL_SUPPLY + 100));
    }

    #[tokio::test]
    async fn test_round_trip_conserves_combined_supply() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();
        let combined = || supply(a) + supply(b);
        let before = combined();

        let there = a
            .bridge()
            .swap(owner.address(), U256::from(250u64), U256::zero(), None)
            .unwrap();
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &there))
            .unwrap();

        // Redeems do not consume swap nonces on bscTestnet
        let nonce = b.bridge().next_nonce(&owner.address());
        assert_eq!(nonce, U256::zero());
        let back = b
            .bridge()
            .swap(owner.address(), U256::from(250u64), nonce, None)
            .unwrap();
        a.bridge()
            .redeem(owner.address(), signed_request(&owner, &back))
            .unwrap();

        assert_eq!(combined(), before);
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY));
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY));
    }

    /// Both swaps land before either redeem, each using the nonce its own
    /// bridge reports.
    #[tokio::test]
    async fn test_swap_both_ways_then_redeem() {
        for policy in [ReplayPolicy::HighWater, ReplayPolicy::UsedSet] {
            let owner = owner();
            let devnet = devnet(&owner, policy);
            let [a, b] = devnet.chains();

            let nonce_a = a.bridge().next_nonce(&owner.address());
            let nonce_b = b.bridge().next_nonce(&owner.address());
            assert_eq!((nonce_a, nonce_b), (U256::zero(), U256::zero()));

            let there = a
                .bridge()
                .swap(owner.address(), U256::from(1_000u64), nonce_a, None)
                .unwrap();
            let back = b
                .bridge()
                .swap(owner.address(), U256::from(100u64), nonce_b, None)
                .unwrap();

            b.bridge()
                .redeem(owner.address(), signed_request(&owner, &there))
                .unwrap();
            a.bridge()
                .redeem(owner.address(), signed_request(&owner, &back))
                .unwrap();

            assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 1_000 + 100), "{}", policy);
            assert_eq!(balance(a, owner.address()), supply(a), "{}", policy);
            assert_eq!(supply(b), U256::from(INITIAL_SUPPLY - 100 + 1_000), "{}", policy);
            assert_eq!(balance(b, owner.address()), supply(b), "{}", policy);
        }
    }

    #[tokio::test]
    async fn test_round_trip_with_both_swaps_first() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();
        let amount = U256::from(250u64);

        let there = a
            .bridge()
            .swap(owner.address(), amount, U256::zero(), None)
            .unwrap();
        let back = b
            .bridge()
            .swap(owner.address(), amount, U256::zero(), None)
            .unwrap();
        assert_eq!(supply(a) + supply(b), U256::from(2 * INITIAL_SUPPLY - 500));

        a.bridge()
            .redeem(owner.address(), signed_request(&owner, &back))
            .unwrap();
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &there))
            .unwrap();

        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY));
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY));
    }

    #[tokio::test]
    async fn test_swap_with_higher_then_lower_nonce() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let a = devnet.chain("rinkeby").unwrap();

        a.bridge()
            .swap(owner.address(), U256::from(5u64), U256::from(100u64), None)
            .unwrap();
        a.bridge()
            .swap(owner.address(), U256::from(5u64), U256::one(), None)
            .unwrap();

        assert_eq!(a.bridge().next_nonce(&owner.address()), U256::from(101u64));
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 10));
    }

    #[tokio::test]
    async fn test_swap_more_than_balance_changes_nothing() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let a = devnet.chain("rinkeby").unwrap();
        let holder = Wallet::generate();
        fund(a, &owner, holder.address(), 10);

        let err = a
            .bridge()
            .swap(holder.address(), U256::from(11u64), U256::zero(), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "not enough balance");
        assert_eq!(balance(a, holder.address()), U256::from(10u64));
        // A failed swap does not consume the nonce
        assert_eq!(a.bridge().next_nonce(&holder.address()), U256::zero());
        assert!(a.events().proofs_for(&holder.address()).is_empty());
    }

    // =============================================================================
    // HOLDER TRANSFER
    // =============================================================================

    #[tokio::test]
    async fn test_holder_moves_funds_for_second_account() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::UsedSet);
        let [a, b] = devnet.chains();

        let holder = Wallet::generate();
        fund(a, &owner, holder.address(), 1_000);

        let receipt = bridge_transfer(
            &holder,
            &a.client(),
            &b.client(),
            U256::from(600u64),
            None,
        )
        .await
        .unwrap();

        assert_eq!(receipt.redemption.recipient, holder.address());
        assert_eq!(balance(a, holder.address()), U256::from(400u64));
        assert_eq!(balance(b, holder.address()), U256::from(600u64));
        assert_eq!(supply(a) + supply(b), U256::from(2 * INITIAL_SUPPLY));
    }

    #[tokio::test]
    async fn test_holder_interleaved_directions() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();
        let wallet = Wallet::from_private_key(crate::fixtures::OWNER_KEY).unwrap();
        let (client_a, client_b) = (a.client(), b.client());

        for round in 0..3u64 {
            bridge_transfer(&wallet, &client_a, &client_b, U256::from(10u64), None)
                .await
                .unwrap();
            bridge_transfer(&wallet, &client_b, &client_a, U256::from(3u64), None)
                .await
                .unwrap();
            assert_eq!(
                supply(b),
                U256::from(INITIAL_SUPPLY + 7 * (round + 1)),
                "round {}",
                round
            );
        }
        assert_eq!(supply(a) + supply(b), U256::from(2 * INITIAL_SUPPLY));
    }

    // =============================================================================
    // EXTRA TOKEN PAIRS
    // =============================================================================

    #[tokio::test]
    async fn test_mapped_token_pair_bridges() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();
        let params = TokenParams::new("Second", "SND", U256::from(500u64)).with_decimals(6);

        let second_a = a.ledger().create_token(owner.address(), params.clone());
        let second_b = b.ledger().create_token(owner.address(), params);
        a.ledger()
            .set_minter(&second_a, owner.address(), a.bridge().address())
            .unwrap();
        b.ledger()
            .set_minter(&second_b, owner.address(), b.bridge().address())
            .unwrap();

        assert!(!a.bridge().is_supported(&second_a));
        a.bridge()
            .add_other_token(owner.address(), second_a, second_b)
            .unwrap();
        b.bridge()
            .add_other_token(owner.address(), second_b, second_a)
            .unwrap();
        assert_eq!(a.bridge().remote_token_for(&second_a), Some(second_b));

        let proof = a
            .bridge()
            .swap(owner.address(), U256::from(50u64), U256::zero(), Some(second_a))
            .unwrap();
        assert_eq!(proof.remote_token, second_b);
        let redemption = b
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap();
        assert_eq!(redemption.token, second_b);

        assert_eq!(
            b.ledger().total_supply(&second_b).unwrap(),
            U256::from(550u64)
        );
        // The primary pair is untouched
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY));
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY));

        let mapped = a
            .events()
            .events()
            .into_iter()
            .filter(|event| matches!(event, BridgeEvent::TokenMapped { .. }))
            .count();
        assert_eq!(mapped, 1);
    }

    // =============================================================================
    // EVENT STREAM
    // =============================================================================

    #[tokio::test]
    async fn test_watcher_redeems_from_event_stream() {
        let owner = owner();
        let devnet = devnet(&owner, ReplayPolicy::HighWater);
        let [a, b] = devnet.chains();
        let mut stream = a.events().subscribe();

        a.bridge()
            .swap(owner.address(), U256::from(77u64), U256::from(3u64), None)
            .unwrap();

        let event = stream.recv().await.unwrap();
        let proof = event.as_proof().expect("swap event");
        assert!(proof.is_consistent());

        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap();
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY + 77));
        let state = b.bridge().snapshot();
        assert_eq!(state.redeem_nonces.next_nonce(&owner.address()), U256::from(4u64));
        assert_eq!(b.bridge().next_nonce(&owner.address()), U256::zero());
    }
}
