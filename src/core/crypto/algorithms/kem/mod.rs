/*!
Key encapsulation implementations.

This module provides the post-quantum and classical KEM providers.
*/

mod ecdh;
mod mlkem;

pub use ecdh::EcdhP256Provider;
pub use mlkem::MlKem768Provider;

use crate::core::crypto::traits::KemProvider;
use crate::core::crypto::types::{Algorithm, Capability};
use crate::core::error::{Error, Result};

/// Create a KEM provider for the specified algorithm
pub fn create_kem_provider(algorithm: Algorithm) -> Result<Box<dyn KemProvider>> {
    match algorithm {
        Algorithm::MlKem768 => Ok(Box::new(MlKem768Provider::new())),
        Algorithm::Ecdh => Ok(Box::new(EcdhP256Provider::new())),
        Algorithm::MlDsa65 | Algorithm::Ecdsa => Err(Error::ProviderNotFound {
            capability: Capability::Kem,
            algorithm,
        }),
    }
}
