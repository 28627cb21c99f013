/*!
# pqcd

Side-by-side benchmarking of post-quantum and classical public-key
primitives behind a uniform provider interface.

## Overview

- ML-KEM-768 and ECDH P-256 as key encapsulation mechanisms
- ML-DSA-65 and ECDSA P-256 as signature schemes
- An immutable registry resolving algorithm tags to providers
- A thread-safe metrics collector keeping running latency and size statistics
- Thin request handlers that time each provider call and record the outcome

## Example

```no_run
use pqcd::{Algorithm, CryptoHandler, Operation};

let handler = CryptoHandler::with_defaults();
let keys = handler.keygen("ml-kem-768").unwrap();
assert_eq!(keys.algorithm, Algorithm::MlKem768);

let stat = handler.metrics().stat(Algorithm::MlKem768, Operation::KeyGen).unwrap();
println!("keygen took {} us", stat.avg_latency_micros);
```
*/

// Providers, registry, metrics, errors
pub mod core;

// Request handlers and wire types
pub mod api;

// Benchmark configuration
pub mod config;

// Re-export commonly used types for convenience
pub use core::constants::VERSION;
pub use core::crypto::{
    Algorithm, AlgorithmSizes, Capability, Encapsulation, KemProvider, KeyPair, NamedProvider,
    ProviderRegistry, SignatureProvider, create_kem_provider, create_signature_provider,
};
pub use core::crypto::algorithms::{
    EcdhP256Provider, EcdsaP256Provider, MlDsa65Provider, MlKem768Provider,
};
pub use core::error::{Error, InputField, Result};
pub use core::metrics::{MetricsCollector, Operation, OperationStat};

pub use api::CryptoHandler;
#[cfg(feature = "async")]
pub use api::AsyncCryptoHandler;

pub use config::BenchConfig;
