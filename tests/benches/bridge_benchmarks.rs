//! # Bridge Benchmarks
//!
//! | Path | Work per call |
//! |------|---------------|
//! | Codec | 160-byte encoding plus one Keccak-256 |
//! | Signature recovery | One secp256k1 public key recovery |
//! | Swap | Nonce check, burn, event |
//! | Redeem | Hash, recovery, token check, nonce check, mint, event |

use bb_02_bridge::{transfer_hash, BridgeApi, ReplayPolicy};
use bb_tests::fixtures::{devnet_with_supply, owner, signed_request};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use shared_crypto::{recover_message_signer, Secp256k1KeyPair};
use shared_types::{Address, ChainId, U256};

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("bb-02-codec");
    let sender = Address::new(rand::thread_rng().gen());
    let token = Address::new(rand::thread_rng().gen());

    group.bench_function("transfer_hash", |b| {
        b.iter(|| {
            transfer_hash(
                black_box(&sender),
                black_box(&U256::from(100u64)),
                black_box(&U256::from(7u64)),
                black_box(&token),
                ChainId(4),
            )
        })
    });
    group.finish();
}

fn bench_signature_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared-crypto-recovery");
    let key = Secp256k1KeyPair::generate();
    let hash: [u8; 32] = rand::thread_rng().gen();
    let signature = key.sign_message_hash(&hash).expect("sign");

    group.bench_function("recover_message_signer", |b| {
        b.iter(|| recover_message_signer(black_box(&hash), black_box(&signature)))
    });
    group.finish();
}

fn bench_swap_redeem(c: &mut Criterion) {
    let mut group = c.benchmark_group("bb-02-bridge");
    let owner = owner();
    let supply = U256::from(u64::MAX);
    group.throughput(Throughput::Elements(1));

    for policy in [ReplayPolicy::HighWater, ReplayPolicy::UsedSet] {
        let devnet = devnet_with_supply(&owner, policy, supply);
        let [a, _] = devnet.chains();
        let mut nonce = U256::zero();

        group.bench_with_input(BenchmarkId::new("swap", policy), &policy, |b, _| {
            b.iter(|| {
                a.bridge()
                    .swap(owner.address(), U256::one(), nonce, None)
                    .expect("swap");
                nonce += U256::one();
            })
        });
    }

    let devnet = devnet_with_supply(&owner, ReplayPolicy::HighWater, supply);
    let [a, b] = devnet.chains();
    let mut nonce = U256::zero();

    // Swap and sign in setup so only the redeem is measured
    group.bench_function("redeem", |bencher| {
        bencher.iter_batched(
            || {
                let proof = a
                    .bridge()
                    .swap(owner.address(), U256::one(), nonce, None)
                    .expect("swap");
                nonce += U256::one();
                signed_request(&owner, &proof)
            },
            |request| {
                b.bridge()
                    .redeem(owner.address(), request)
                    .expect("redeem")
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_codec,
    bench_signature_recovery,
    bench_swap_redeem
);
criterion_main!(benches);
