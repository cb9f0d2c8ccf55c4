//! # Signature Forgery
//!
//! Redeems whose signature does not come from the caller, or does not
//! cover the submitted fields.

#[cfg(test)]
mod tests {
    use bb_02_bridge::{BridgeApi, BridgeError, ErrorCategory, RedeemRequest, ReplayPolicy};
    use bb_runtime::Devnet;
    use shared_crypto::{CryptoError, Secp256k1KeyPair, SIGNATURE_LENGTH};
    use shared_types::{Address, ChainId, U256};

    use crate::fixtures::{balance, devnet, owner, signed_request, supply, INITIAL_SUPPLY};

    /// Devnet plus a signed A -> B request for 100 at nonce 0.
    fn pending_redeem(owner: &Secp256k1KeyPair) -> (Devnet, RedeemRequest) {
        let devnet = devnet(owner, ReplayPolicy::HighWater);
        let proof = devnet
            .chain("rinkeby")
            .unwrap()
            .bridge()
            .swap(owner.address(), U256::from(100u64), U256::zero(), None)
            .unwrap();
        let request = signed_request(owner, &proof);
        (devnet, request)
    }

    fn assert_nothing_minted(devnet: &Devnet) {
        let b = devnet.chain("bscTestnet").unwrap();
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY));
    }

    // =============================================================================
    // STOLEN SIGNATURE
    // =============================================================================

    /// An observer copies the holder's request and submits it as their own.
    #[test]
    fn test_third_party_cannot_redeem_holders_proof() {
        let owner = owner();
        let (devnet, request) = pending_redeem(&owner);
        let thief = Secp256k1KeyPair::generate();

        let b = devnet.chain("bscTestnet").unwrap();
        let err = b.bridge().redeem(thief.address(), request).unwrap_err();
        assert_eq!(err.to_string(), "wrong signature");
        assert_eq!(err.category(), ErrorCategory::Authorization);
        assert_eq!(balance(b, thief.address()), U256::zero());
        assert_nothing_minted(&devnet);
    }

    /// A failed redeem leaves the nonce free for the genuine one.
    #[test]
    fn test_rejected_redeem_does_not_burn_nonce() {
        let owner = owner();
        let (devnet, request) = pending_redeem(&owner);
        let b = devnet.chain("bscTestnet").unwrap();

        let mut tampered = request.clone();
        tampered.amount = U256::from(1_000u64);
        assert!(b.bridge().redeem(owner.address(), tampered).is_err());
        let state = b.bridge().snapshot();
        assert_eq!(state.redeem_nonces.next_nonce(&owner.address()), U256::zero());

        b.bridge().redeem(owner.address(), request).unwrap();
        assert_eq!(supply(b), U256::from(INITIAL_SUPPLY + 100));
    }

    // =============================================================================
    // TAMPERED FIELDS
    // =============================================================================

    #[test]
    fn test_tampered_fields_are_rejected() {
        let owner = owner();
        let tamperings: [(&str, fn(&mut RedeemRequest)); 4] = [
            ("amount", |r| r.amount = r.amount + U256::one()),
            ("nonce", |r| r.nonce = U256::from(7u64)),
            ("source chain", |r| r.source_chain_id = ChainId(1)),
            ("remote token", |r| r.remote_token = Address::new([0x42; 20])),
        ];

        for (field, tamper) in tamperings {
            let (devnet, mut request) = pending_redeem(&owner);
            tamper(&mut request);
            let b = devnet.chain("bscTestnet").unwrap();
            let err = b.bridge().redeem(owner.address(), request).unwrap_err();
            assert!(
                matches!(err, BridgeError::WrongSignature { .. }),
                "{}: {}",
                field,
                err
            );
            assert_nothing_minted(&devnet);
        }
    }

    /// Signing the raw hash instead of the prefixed message recovers a
    /// different key.
    #[test]
    fn test_unprefixed_signature_is_rejected() {
        let owner = owner();
        let (devnet, mut request) = pending_redeem(&owner);
        let proof = devnet
            .chain("rinkeby")
            .unwrap()
            .events()
            .last_proof_for(&owner.address())
            .unwrap();
        request.signature = owner.sign_prehash(&proof.hash).unwrap().as_bytes().to_vec();

        let b = devnet.chain("bscTestnet").unwrap();
        let err = b.bridge().redeem(owner.address(), request).unwrap_err();
        assert!(matches!(err, BridgeError::WrongSignature { .. }));
        assert_nothing_minted(&devnet);
    }

    // =============================================================================
    // MALFORMED SIGNATURES
    // =============================================================================

    #[test]
    fn test_malformed_signatures() {
        let owner = owner();

        let (devnet, mut request) = pending_redeem(&owner);
        request.signature.truncate(SIGNATURE_LENGTH - 1);
        let b = devnet.chain("bscTestnet").unwrap();
        let err = b.bridge().redeem(owner.address(), request).unwrap_err();
        assert_eq!(err.to_string(), "invalid signature length");
        assert_eq!(err.category(), ErrorCategory::Validation);

        let (devnet, mut request) = pending_redeem(&owner);
        request.signature[SIGNATURE_LENGTH - 1] = 29;
        let b = devnet.chain("bscTestnet").unwrap();
        let err = b.bridge().redeem(owner.address(), request).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::MalformedSignature(CryptoError::InvalidSignatureV { .. })
        ));

        let (devnet, mut request) = pending_redeem(&owner);
        request.signature = vec![0; SIGNATURE_LENGTH];
        request.signature[SIGNATURE_LENGTH - 1] = 27;
        let b = devnet.chain("bscTestnet").unwrap();
        assert!(b.bridge().redeem(owner.address(), request).is_err());
        assert_nothing_minted(&devnet);
    }
}
