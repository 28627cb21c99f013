use std::time::Duration;

use pqcd::{
    Algorithm, EcdhP256Provider, EcdsaP256Provider, KemProvider, MetricsCollector, MlDsa65Provider,
    Operation, SignatureProvider,
};

use proptest::prelude::*;

// Strategy for generating messages to sign
fn messages() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..2048)
}

// Strategy for generating latency samples in microseconds
fn latencies() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0..50_000u64, 1..200)
}

// Strategy for generating operation outcomes
fn outcomes() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), 1..200)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * b.abs().max(1.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn ecdsa_signs_any_message(message in messages()) {
        let provider = EcdsaP256Provider::new();
        let kp = provider.keygen().unwrap();
        let sig = provider.sign(&kp.private_key, &message).unwrap();
        prop_assert_eq!(sig.len(), 64);
        prop_assert!(provider.verify(&kp.public_key, &message, &sig).unwrap());
    }

    #[test]
    fn ecdsa_rejects_any_single_bit_flip(index in 0..64usize, bit in 0..8u8) {
        let provider = EcdsaP256Provider::new();
        let kp = provider.keygen().unwrap();
        let mut sig = provider.sign(&kp.private_key, b"fixed").unwrap();
        sig[index] ^= 1 << bit;
        prop_assert!(!provider.verify(&kp.public_key, b"fixed", &sig).unwrap());
    }

    #[test]
    fn mldsa_rejects_altered_message(message in messages(), index in any::<prop::sample::Index>()) {
        prop_assume!(!message.is_empty());
        let provider = MlDsa65Provider::new();
        let kp = provider.keygen().unwrap();
        let sig = provider.sign(&kp.private_key, &message).unwrap();
        prop_assert!(provider.verify(&kp.public_key, &message, &sig).unwrap());

        let mut altered = message.clone();
        altered[index.index(message.len())] ^= 0xFF;
        prop_assert!(!provider.verify(&kp.public_key, &altered, &sig).unwrap());
    }

    #[test]
    fn ecdh_agrees_for_fresh_keys(_seed in any::<u8>()) {
        let provider = EcdhP256Provider::new();
        let kp = provider.keygen().unwrap();
        let enc = provider.encapsulate(&kp.public_key).unwrap();
        let ss = provider.decapsulate(&kp.private_key, &enc.ciphertext).unwrap();
        prop_assert_eq!(ss, enc.shared_secret.clone());
    }

    #[test]
    fn running_mean_matches_arithmetic_mean(samples in latencies()) {
        let metrics = MetricsCollector::new();
        for &us in &samples {
            metrics.record_operation(Algorithm::Ecdh, Operation::KeyGen, Duration::from_micros(us), 33, 32, true);
        }

        let stat = metrics.stat(Algorithm::Ecdh, Operation::KeyGen).unwrap();
        let mean = samples.iter().sum::<u64>() as f64 / samples.len() as f64;
        prop_assert_eq!(stat.count, samples.len() as u64);
        prop_assert!(close(stat.avg_latency_micros, mean), "{} vs {}", stat.avg_latency_micros, mean);
        prop_assert_eq!(stat.min_latency_micros, *samples.iter().min().unwrap() as f64);
        prop_assert_eq!(stat.max_latency_micros, *samples.iter().max().unwrap() as f64);
    }

    #[test]
    fn success_rate_matches_fraction(outcomes in outcomes()) {
        let metrics = MetricsCollector::new();
        for &ok in &outcomes {
            metrics.record_operation(Algorithm::MlDsa65, Operation::Verify, Duration::from_micros(1), 1952, 3309, ok);
        }

        let stat = metrics.stat(Algorithm::MlDsa65, Operation::Verify).unwrap();
        let expected = outcomes.iter().filter(|&&ok| ok).count() as f64 / outcomes.len() as f64;
        prop_assert!(close(stat.success_rate, expected), "{} vs {}", stat.success_rate, expected);
        prop_assert!((0.0..=1.0).contains(&stat.success_rate));
    }
}
