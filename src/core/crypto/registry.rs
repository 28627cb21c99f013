/*!
Registry of cryptographic providers.

The registry maps an algorithm to the single provider instance that serves
it, with KEM-shaped and signature-shaped providers kept in separate tables.
It is populated once at startup and then shared read-only (typically as
`Arc<ProviderRegistry>`), so lookups need no synchronization.
*/

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::crypto::algorithms::{
    EcdhP256Provider, EcdsaP256Provider, MlDsa65Provider, MlKem768Provider,
};
use crate::core::crypto::traits::{KemProvider, SignatureProvider};
use crate::core::crypto::types::{Algorithm, Capability};
use crate::core::error::{Error, Result};

/// Lookup table from algorithm to provider
#[derive(Default)]
pub struct ProviderRegistry {
    /// Available KEM providers
    kem_providers: HashMap<Algorithm, Arc<dyn KemProvider>>,

    /// Available signature providers
    signature_providers: HashMap<Algorithm, Arc<dyn SignatureProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding one instance of every built-in provider
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.kem_providers.insert(Algorithm::MlKem768, Arc::new(MlKem768Provider::new()));
        registry.kem_providers.insert(Algorithm::Ecdh, Arc::new(EcdhP256Provider::new()));

        registry.signature_providers.insert(Algorithm::MlDsa65, Arc::new(MlDsa65Provider::new()));
        registry.signature_providers.insert(Algorithm::Ecdsa, Arc::new(EcdsaP256Provider::new()));

        log::debug!(
            "provider registry initialised: kem={:?} signature={:?}",
            registry.kem_algorithms(),
            registry.signature_algorithms()
        );
        registry
    }

    /// Register a KEM provider, replacing any previous one for the same algorithm.
    ///
    /// Fails if the provider claims a signature-shaped algorithm.
    pub fn register_kem(&mut self, provider: Arc<dyn KemProvider>) -> Result<()> {
        let algorithm = provider.algorithm();
        if algorithm.capability() != Capability::Kem {
            return Err(Error::ProviderNotFound {
                capability: Capability::Kem,
                algorithm,
            });
        }
        self.kem_providers.insert(algorithm, provider);
        Ok(())
    }

    /// Register a signature provider, replacing any previous one for the same algorithm.
    ///
    /// Fails if the provider claims a KEM-shaped algorithm.
    pub fn register_signature(&mut self, provider: Arc<dyn SignatureProvider>) -> Result<()> {
        let algorithm = provider.algorithm();
        if algorithm.capability() != Capability::Signature {
            return Err(Error::ProviderNotFound {
                capability: Capability::Signature,
                algorithm,
            });
        }
        self.signature_providers.insert(algorithm, provider);
        Ok(())
    }

    /// Look up the KEM provider for an algorithm
    pub fn kem_provider(&self, algorithm: Algorithm) -> Result<Arc<dyn KemProvider>> {
        self.kem_providers
            .get(&algorithm)
            .cloned()
            .ok_or(Error::ProviderNotFound {
                capability: Capability::Kem,
                algorithm,
            })
    }

    /// Look up the signature provider for an algorithm
    pub fn signature_provider(&self, algorithm: Algorithm) -> Result<Arc<dyn SignatureProvider>> {
        self.signature_providers
            .get(&algorithm)
            .cloned()
            .ok_or(Error::ProviderNotFound {
                capability: Capability::Signature,
                algorithm,
            })
    }

    /// Registered KEM algorithms, sorted
    pub fn kem_algorithms(&self) -> Vec<Algorithm> {
        let mut algorithms: Vec<_> = self.kem_providers.keys().copied().collect();
        algorithms.sort();
        algorithms
    }

    /// Registered signature algorithms, sorted
    pub fn signature_algorithms(&self) -> Vec<Algorithm> {
        let mut algorithms: Vec<_> = self.signature_providers.keys().copied().collect();
        algorithms.sort();
        algorithms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_defaults() {
        let registry = ProviderRegistry::with_defaults();

        assert_eq!(registry.kem_algorithms(), vec![Algorithm::MlKem768, Algorithm::Ecdh]);
        assert_eq!(registry.signature_algorithms(), vec![Algorithm::MlDsa65, Algorithm::Ecdsa]);

        for alg in Algorithm::kems() {
            assert_eq!(registry.kem_provider(alg).unwrap().algorithm(), alg);
        }
        for alg in Algorithm::signatures() {
            assert_eq!(registry.signature_provider(alg).unwrap().algorithm(), alg);
        }
    }

    #[test]
    fn test_capabilities_do_not_cross() {
        let registry = ProviderRegistry::with_defaults();

        for alg in Algorithm::signatures() {
            assert!(matches!(
                registry.kem_provider(alg),
                Err(Error::ProviderNotFound { capability: Capability::Kem, .. })
            ));
        }
        for alg in Algorithm::kems() {
            assert!(matches!(
                registry.signature_provider(alg),
                Err(Error::ProviderNotFound { capability: Capability::Signature, .. })
            ));
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new();
        assert!(registry.kem_provider(Algorithm::Ecdh).is_err());
        assert!(registry.kem_algorithms().is_empty());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ProviderRegistry::new();
        registry.register_kem(Arc::new(EcdhP256Provider::new())).unwrap();
        registry.register_kem(Arc::new(EcdhP256Provider::new())).unwrap();
        assert_eq!(registry.kem_algorithms(), vec![Algorithm::Ecdh]);
        assert!(registry.signature_algorithms().is_empty());
    }
}
