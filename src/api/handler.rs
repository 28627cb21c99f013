/*!
Request handlers.

Each handler resolves a provider from the registry, times the provider
call, and records the attempt in the metrics collector whether it
succeeded or failed. Requests rejected before reaching a provider (unknown
algorithm, undecodable hex) are not recorded since no operation ran.
*/

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use super::types::{
    DecapsulateRequest, DecapsulateResponse, EncapsulateRequest, EncapsulateResponse,
    HealthResponse, KeyGenResponse, SignRequest, SignResponse, VerifyRequest, VerifyResponse,
    decode_hex,
};
use crate::core::constants::VERSION;
use crate::core::crypto::types::{Algorithm, Capability, KeyPair};
use crate::core::crypto::ProviderRegistry;
use crate::core::error::{InputField, Result};
use crate::core::metrics::{MetricsCollector, Operation, OperationStat};

/// Handles crypto API requests
#[derive(Clone)]
pub struct CryptoHandler {
    registry: Arc<ProviderRegistry>,
    metrics: Arc<MetricsCollector>,
}

impl CryptoHandler {
    /// Create a new handler over an existing registry and collector
    pub fn new(registry: Arc<ProviderRegistry>, metrics: Arc<MetricsCollector>) -> Self {
        Self { registry, metrics }
    }

    /// Handler over the built-in providers and a fresh collector
    pub fn with_defaults() -> Self {
        Self::new(
            Arc::new(ProviderRegistry::with_defaults()),
            Arc::new(MetricsCollector::new()),
        )
    }

    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    pub fn metrics(&self) -> &Arc<MetricsCollector> {
        &self.metrics
    }

    /// Run `op`, time it, and record the attempt.
    ///
    /// `sizes` maps the result (None on failure) to `(input, output)` byte counts.
    fn timed<T>(
        &self,
        algorithm: Algorithm,
        operation: Operation,
        op: impl FnOnce() -> Result<T>,
        sizes: impl FnOnce(Option<&T>) -> (usize, usize),
    ) -> Result<T> {
        let start = Instant::now();
        let result = op();
        let elapsed = start.elapsed();

        let (input_size, output_size) = sizes(result.as_ref().ok());
        self.metrics
            .record_operation(algorithm, operation, elapsed, input_size, output_size, result.is_ok());

        if let Err(e) = &result {
            if e.is_client_error() {
                log::warn!("{} {} rejected: {}", algorithm, operation, e);
            } else {
                log::error!("{} {} failed: {}", algorithm, operation, e);
            }
        }
        result
    }

    /// Generate a key pair for any registered algorithm
    pub fn keygen(&self, algorithm: &str) -> Result<KeyGenResponse> {
        let algorithm: Algorithm = algorithm.parse()?;
        log::info!("handling key generation request: algorithm={}", algorithm);

        let key_pair = match algorithm.capability() {
            Capability::Kem => {
                let provider = self.registry.kem_provider(algorithm)?;
                self.timed(algorithm, Operation::KeyGen, || provider.keygen(), keygen_sizes)?
            }
            Capability::Signature => {
                let provider = self.registry.signature_provider(algorithm)?;
                self.timed(algorithm, Operation::KeyGen, || provider.keygen(), keygen_sizes)?
            }
        };

        Ok(KeyGenResponse {
            public_key: hex::encode(&key_pair.public_key),
            private_key: hex::encode(&key_pair.private_key),
            algorithm: key_pair.algorithm,
            fingerprint: key_pair.fingerprint(),
            generated_at: Utc::now(),
        })
    }

    /// Encapsulate against a public key
    pub fn encapsulate(&self, request: &EncapsulateRequest) -> Result<EncapsulateResponse> {
        let algorithm: Algorithm = request.algorithm.parse()?;
        log::info!("handling encapsulation request: algorithm={}", algorithm);

        let public_key = decode_hex(InputField::PublicKey, &request.public_key)?;
        let provider = self.registry.kem_provider(algorithm)?;

        let encapsulation = self.timed(
            algorithm,
            Operation::Encapsulate,
            || provider.encapsulate(&public_key),
            |enc| (public_key.len(), enc.map_or(0, |e| e.ciphertext.len())),
        )?;

        Ok(EncapsulateResponse {
            ciphertext: hex::encode(&encapsulation.ciphertext),
            shared_secret: hex::encode(&encapsulation.shared_secret),
        })
    }

    /// Recover a shared secret
    pub fn decapsulate(&self, request: &DecapsulateRequest) -> Result<DecapsulateResponse> {
        let algorithm: Algorithm = request.algorithm.parse()?;
        log::info!("handling decapsulation request: algorithm={}", algorithm);

        let private_key = decode_hex(InputField::PrivateKey, &request.private_key)?;
        let ciphertext = decode_hex(InputField::Ciphertext, &request.ciphertext)?;
        let provider = self.registry.kem_provider(algorithm)?;

        let shared_secret = self.timed(
            algorithm,
            Operation::Decapsulate,
            || provider.decapsulate(&private_key, &ciphertext),
            |ss| (private_key.len(), ss.map_or(0, |_| ciphertext.len())),
        )?;

        Ok(DecapsulateResponse {
            shared_secret: hex::encode(&shared_secret),
        })
    }

    /// Sign a message
    pub fn sign(&self, algorithm: &str, request: &SignRequest) -> Result<SignResponse> {
        let algorithm: Algorithm = algorithm.parse()?;
        log::info!("handling sign request: algorithm={}", algorithm);

        let private_key = decode_hex(InputField::PrivateKey, &request.private_key)?;
        let provider = self.registry.signature_provider(algorithm)?;

        let signature = self.timed(
            algorithm,
            Operation::Sign,
            || provider.sign(&private_key, request.message.as_bytes()),
            |sig| (private_key.len(), sig.map_or(0, Vec::len)),
        )?;

        Ok(SignResponse {
            signature: hex::encode(&signature),
        })
    }

    /// Verify a signature. A mismatch is a successful call with `valid: false`.
    pub fn verify(&self, algorithm: &str, request: &VerifyRequest) -> Result<VerifyResponse> {
        let algorithm: Algorithm = algorithm.parse()?;
        log::info!("handling verify request: algorithm={}", algorithm);

        let public_key = decode_hex(InputField::PublicKey, &request.public_key)?;
        let signature = decode_hex(InputField::Signature, &request.signature)?;
        let provider = self.registry.signature_provider(algorithm)?;

        let valid = self.timed(
            algorithm,
            Operation::Verify,
            || provider.verify(&public_key, request.message.as_bytes(), &signature),
            |valid| (public_key.len(), valid.map_or(0, |_| signature.len())),
        )?;

        Ok(VerifyResponse { valid })
    }

    /// Snapshot of all collected stats, sorted by algorithm then operation
    pub fn stats(&self) -> Vec<OperationStat> {
        let mut stats = self.metrics.all_stats();
        stats.sort_by_key(|s| (s.algorithm, s.operation));
        stats
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "ok".to_string(),
            version: VERSION.to_string(),
            kem_algorithms: self.registry.kem_algorithms(),
            signature_algorithms: self.registry.signature_algorithms(),
        }
    }
}

fn keygen_sizes(key_pair: Option<&KeyPair>) -> (usize, usize) {
    key_pair.map_or((0, 0), |kp| (kp.public_key.len(), kp.private_key.len()))
}
