use std::sync::Arc;

use pqcd::api::{
    DecapsulateRequest, EncapsulateRequest, Reply, SignRequest, VerifyRequest, dispatch_line,
};
use pqcd::{
    Algorithm, AlgorithmSizes, CryptoHandler, EcdhP256Provider, Encapsulation, Error, KemProvider,
    KeyPair, MetricsCollector, NamedProvider, Operation, ProviderRegistry, Result,
};

/// ECDH provider whose every call fails inside the primitive
struct BrokenEcdh;

impl NamedProvider for BrokenEcdh {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdh
    }

    fn sizes(&self) -> AlgorithmSizes {
        EcdhP256Provider::new().sizes()
    }
}

impl KemProvider for BrokenEcdh {
    fn keygen(&self) -> Result<KeyPair> {
        Err(Error::CryptoFailure {
            algorithm: Algorithm::Ecdh,
            operation: Operation::KeyGen,
            reason: "entropy source unavailable".into(),
        })
    }

    fn encapsulate(&self, _public_key: &[u8]) -> Result<Encapsulation> {
        Err(Error::CryptoFailure {
            algorithm: Algorithm::Ecdh,
            operation: Operation::Encapsulate,
            reason: "entropy source unavailable".into(),
        })
    }

    fn decapsulate(&self, _private_key: &[u8], _ciphertext: &[u8]) -> Result<Vec<u8>> {
        Err(Error::CryptoFailure {
            algorithm: Algorithm::Ecdh,
            operation: Operation::Decapsulate,
            reason: "entropy source unavailable".into(),
        })
    }
}

fn kem_cycle(handler: &CryptoHandler, tag: &str) -> Result<()> {
    let keys = handler.keygen(tag)?;
    let enc = handler.encapsulate(&EncapsulateRequest {
        public_key: keys.public_key.clone(),
        algorithm: tag.into(),
    })?;
    let dec = handler.decapsulate(&DecapsulateRequest {
        private_key: keys.private_key.clone(),
        ciphertext: enc.ciphertext.clone(),
        algorithm: tag.into(),
    })?;
    assert_eq!(dec.shared_secret, enc.shared_secret);
    Ok(())
}

fn signature_cycle(handler: &CryptoHandler, tag: &str, message: &str) -> Result<bool> {
    let keys = handler.keygen(tag)?;
    let signed = handler.sign(
        tag,
        &SignRequest {
            private_key: keys.private_key.clone(),
            message: message.into(),
        },
    )?;
    let verified = handler.verify(
        tag,
        &VerifyRequest {
            public_key: keys.public_key.clone(),
            message: message.into(),
            signature: signed.signature,
        },
    )?;
    Ok(verified.valid)
}

#[test]
fn test_full_cycles_record_every_operation() -> Result<()> {
    let handler = CryptoHandler::with_defaults();

    for _ in 0..3 {
        kem_cycle(&handler, "ml-kem-768")?;
        kem_cycle(&handler, "ecdh")?;
        assert!(signature_cycle(&handler, "ml-dsa-65", "hello")?);
        assert!(signature_cycle(&handler, "ecdsa", "hello")?);
    }

    // 2 KEMs x 3 ops + 2 signature schemes x 3 ops
    assert_eq!(handler.metrics().len(), 12);
    for stat in handler.stats() {
        assert_eq!(stat.count, 3, "{} {}", stat.algorithm, stat.operation);
        assert_eq!(stat.success_rate, 1.0);
    }
    Ok(())
}

#[test]
fn test_recorded_sizes_per_operation() -> Result<()> {
    let handler = CryptoHandler::with_defaults();
    kem_cycle(&handler, "ml-kem-768")?;
    signature_cycle(&handler, "ml-dsa-65", "sizes")?;
    kem_cycle(&handler, "ecdh")?;
    signature_cycle(&handler, "ecdsa", "sizes")?;

    let expect = |alg, op, input: f64, output: f64| {
        let stat = handler.metrics().stat(alg, op).unwrap();
        assert_eq!((stat.avg_input_bytes, stat.avg_output_bytes), (input, output), "{} {}", alg, op);
    };

    expect(Algorithm::MlKem768, Operation::KeyGen, 1184.0, 2400.0);
    expect(Algorithm::MlKem768, Operation::Encapsulate, 1184.0, 1088.0);
    expect(Algorithm::MlKem768, Operation::Decapsulate, 2400.0, 1088.0);
    expect(Algorithm::MlDsa65, Operation::KeyGen, 1952.0, 4032.0);
    expect(Algorithm::MlDsa65, Operation::Sign, 4032.0, 3309.0);
    expect(Algorithm::MlDsa65, Operation::Verify, 1952.0, 3309.0);
    expect(Algorithm::Ecdh, Operation::KeyGen, 33.0, 32.0);
    expect(Algorithm::Ecdh, Operation::Encapsulate, 33.0, 33.0);
    expect(Algorithm::Ecdh, Operation::Decapsulate, 32.0, 33.0);
    expect(Algorithm::Ecdsa, Operation::Sign, 32.0, 64.0);
    expect(Algorithm::Ecdsa, Operation::Verify, 33.0, 64.0);
    Ok(())
}

#[test]
fn test_empty_message_signs() -> Result<()> {
    let handler = CryptoHandler::with_defaults();
    assert!(signature_cycle(&handler, "ecdsa", "")?);
    assert!(signature_cycle(&handler, "ml-dsa-65", "")?);
    Ok(())
}

#[test]
fn test_verify_mismatch_is_valid_false_and_counts_as_success() -> Result<()> {
    let handler = CryptoHandler::with_defaults();
    let keys = handler.keygen("ecdsa")?;
    let signed = handler.sign(
        "ecdsa",
        &SignRequest {
            private_key: keys.private_key.clone(),
            message: "original".into(),
        },
    )?;

    let verified = handler.verify(
        "ecdsa",
        &VerifyRequest {
            public_key: keys.public_key.clone(),
            message: "forged".into(),
            signature: signed.signature,
        },
    )?;
    assert!(!verified.valid);

    let stat = handler.metrics().stat(Algorithm::Ecdsa, Operation::Verify).unwrap();
    assert_eq!(stat.count, 1);
    assert_eq!(stat.success_rate, 1.0);
    Ok(())
}

#[test]
fn test_provider_failures_are_recorded_as_failures() {
    let mut registry = ProviderRegistry::new();
    registry.register_kem(Arc::new(BrokenEcdh)).unwrap();
    let handler = CryptoHandler::new(Arc::new(registry), Arc::new(MetricsCollector::new()));

    let err = handler.keygen("ecdh").unwrap_err();
    assert!(!err.is_client_error());
    assert_eq!(err.status_code(), 500);

    let err = handler
        .encapsulate(&EncapsulateRequest {
            public_key: "02".repeat(33),
            algorithm: "ecdh".into(),
        })
        .unwrap_err();
    assert_eq!(err.kind(), "crypto_failure");

    let keygen = handler.metrics().stat(Algorithm::Ecdh, Operation::KeyGen).unwrap();
    assert_eq!(keygen.count, 1);
    assert_eq!(keygen.success_rate, 0.0);
    assert_eq!((keygen.avg_input_bytes, keygen.avg_output_bytes), (0.0, 0.0));

    let encapsulate = handler.metrics().stat(Algorithm::Ecdh, Operation::Encapsulate).unwrap();
    assert_eq!(encapsulate.avg_input_bytes, 33.0);
    assert_eq!(encapsulate.avg_output_bytes, 0.0);
}

#[test]
fn test_success_rate_mixes_outcomes() -> Result<()> {
    let handler = CryptoHandler::with_defaults();
    let keys = handler.keygen("ecdh")?;

    handler.encapsulate(&EncapsulateRequest {
        public_key: keys.public_key.clone(),
        algorithm: "ecdh".into(),
    })?;
    // Right length, not a curve point
    let bogus = format!("02{}", "ff".repeat(32));
    assert!(handler
        .encapsulate(&EncapsulateRequest {
            public_key: bogus,
            algorithm: "ecdh".into(),
        })
        .is_err());

    let stat = handler.metrics().stat(Algorithm::Ecdh, Operation::Encapsulate).unwrap();
    assert_eq!(stat.count, 2);
    assert_eq!(stat.success_rate, 0.5);
    Ok(())
}

#[test]
fn test_failed_decapsulate_and_verify_record_zero_output() -> Result<()> {
    let handler = CryptoHandler::with_defaults();

    let kem_keys = handler.keygen("ecdh")?;
    let uncompressed = format!("04{}", "11".repeat(64));
    assert!(handler
        .decapsulate(&DecapsulateRequest {
            private_key: kem_keys.private_key.clone(),
            ciphertext: uncompressed,
            algorithm: "ecdh".into(),
        })
        .is_err());

    let stat = handler.metrics().stat(Algorithm::Ecdh, Operation::Decapsulate).unwrap();
    assert_eq!(stat.success_rate, 0.0);
    assert_eq!(stat.avg_input_bytes, 32.0);
    assert_eq!(stat.avg_output_bytes, 0.0);

    let sig_keys = handler.keygen("ecdsa")?;
    assert!(handler
        .verify(
            "ecdsa",
            &VerifyRequest {
                public_key: sig_keys.public_key.clone(),
                message: "short".into(),
                signature: "ab".repeat(63),
            },
        )
        .is_err());

    let stat = handler.metrics().stat(Algorithm::Ecdsa, Operation::Verify).unwrap();
    assert_eq!(stat.success_rate, 0.0);
    assert_eq!(stat.avg_input_bytes, 33.0);
    assert_eq!(stat.avg_output_bytes, 0.0);
    Ok(())
}

#[test]
fn test_capability_mismatch_is_client_error_and_unrecorded() {
    let handler = CryptoHandler::with_defaults();
    let err = handler
        .encapsulate(&EncapsulateRequest {
            public_key: "00".into(),
            algorithm: "ml-dsa-65".into(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::ProviderNotFound { .. }));
    assert_eq!(err.status_code(), 400);
    assert!(handler.metrics().is_empty());
}

#[test]
fn test_keygen_response_shape() -> Result<()> {
    let handler = CryptoHandler::with_defaults();
    let keys = handler.keygen("ml-dsa-65")?;
    assert_eq!(keys.public_key.len(), 2 * 1952);
    assert_eq!(keys.private_key.len(), 2 * 4032);
    assert_eq!(keys.fingerprint.len(), 64);

    let json = serde_json::to_value(&keys)?;
    assert_eq!(json["algorithm"], "ml-dsa-65");
    assert!(json["publicKey"].is_string());
    assert!(json["generatedAt"].is_string());
    Ok(())
}

#[test]
fn test_dispatch_kem_round_trip() {
    let handler = CryptoHandler::with_defaults();
    let reply = |line: String| -> Reply { serde_json::from_str(&dispatch_line(&handler, &line)).unwrap() };

    let keys = reply(r#"{"op":"keygen","algorithm":"ml-kem-768"}"#.to_string());
    assert_eq!(keys.status, 200);

    let enc = reply(format!(
        r#"{{"op":"encapsulate","algorithm":"ml-kem-768","publicKey":"{}"}}"#,
        keys.body["publicKey"].as_str().unwrap()
    ));
    assert_eq!(enc.status, 200);

    let dec = reply(format!(
        r#"{{"op":"decapsulate","algorithm":"ml-kem-768","privateKey":"{}","ciphertext":"{}"}}"#,
        keys.body["privateKey"].as_str().unwrap(),
        enc.body["ciphertext"].as_str().unwrap()
    ));
    assert_eq!(dec.status, 200);
    assert_eq!(dec.body["sharedSecret"], enc.body["sharedSecret"]);

    let bad = reply(r#"{"op":"decapsulate","algorithm":"ml-kem-768","privateKey":"zz","ciphertext":"00"}"#.to_string());
    assert_eq!(bad.status, 400);
    assert_eq!(bad.body["kind"], "malformed_input");

    let health = reply(r#"{"op":"health"}"#.to_string());
    assert_eq!(health.body["kemAlgorithms"][0], "ml-kem-768");
}
