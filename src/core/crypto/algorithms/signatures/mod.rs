/*!
Signature algorithm implementations.

This module provides the post-quantum and classical signature providers.
*/

mod ecdsa;
mod mldsa;

pub use ecdsa::EcdsaP256Provider;
pub use mldsa::MlDsa65Provider;

use crate::core::crypto::traits::SignatureProvider;
use crate::core::crypto::types::{Algorithm, Capability};
use crate::core::error::{Error, Result};

/// Create a signature provider for the specified algorithm
pub fn create_signature_provider(algorithm: Algorithm) -> Result<Box<dyn SignatureProvider>> {
    match algorithm {
        Algorithm::MlDsa65 => Ok(Box::new(MlDsa65Provider::new())),
        Algorithm::Ecdsa => Ok(Box::new(EcdsaP256Provider::new())),
        Algorithm::MlKem768 | Algorithm::Ecdh => Err(Error::ProviderNotFound {
            capability: Capability::Signature,
            algorithm,
        }),
    }
}
