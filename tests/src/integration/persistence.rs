//! # Persistence Across Invocations
//!
//! The CLI reloads the devnet for every command. A transfer split across
//! a save and a load must behave exactly like one done in memory.

#[cfg(test)]
mod tests {
    use bb_02_bridge::{BridgeApi, ReplayPolicy};
    use bb_runtime::Devnet;
    use shared_types::U256;

    use crate::fixtures::{devnet, owner, signed_request, supply, INITIAL_SUPPLY};

    #[test]
    fn test_redeem_after_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        let owner = owner();

        let proof = {
            let devnet = devnet(&owner, ReplayPolicy::HighWater);
            let proof = devnet
                .chain("rinkeby")
                .unwrap()
                .bridge()
                .swap(owner.address(), U256::from(100u64), U256::zero(), None)
                .unwrap();
            devnet.save(&path).unwrap();
            proof
        };

        let devnet = Devnet::load(&path).unwrap();
        let b = devnet.chain("bscTestnet").unwrap();
        b.bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap();
        devnet.save(&path).unwrap();

        let devnet = Devnet::load(&path).unwrap();
        let [a, b] = devnet.chains();
        assert_eq!(supply(a), U256::from(INITIAL_SUPPLY - 100));
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY + 100));

        // Replay protection survives the reload too
        let err = b
            .bridge()
            .redeem(owner.address(), signed_request(&owner, &proof))
            .unwrap_err();
        assert_eq!(err.to_string(), "transfer already processed");
    }

    #[test]
    fn test_used_nonce_set_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        let owner = owner();

        let devnet = devnet(&owner, ReplayPolicy::UsedSet);
        let a = devnet.chain("rinkeby").unwrap();
        for nonce in [5u64, 9] {
            a.bridge()
                .swap(owner.address(), U256::one(), U256::from(nonce), None)
                .unwrap();
        }
        devnet.save(&path).unwrap();

        let devnet = Devnet::load(&path).unwrap();
        let a = devnet.chain("rinkeby").unwrap();
        assert_eq!(a.bridge().config().replay_policy, ReplayPolicy::UsedSet);
        let err = a
            .bridge()
            .swap(owner.address(), U256::one(), U256::from(5u64), None)
            .unwrap_err();
        assert!(err.is_replay());
        a.bridge()
            .swap(owner.address(), U256::one(), U256::from(6u64), None)
            .unwrap();
    }
}
