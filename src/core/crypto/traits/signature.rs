/*!
Traits for signature operations.

This module defines the interface every signature provider implements.
*/

use crate::core::crypto::types::KeyPair;
use crate::core::error::Result;

use super::provider::NamedProvider;

/// Digital signature scheme
pub trait SignatureProvider: NamedProvider {
    /// Generate an independent key pair from a secure random source
    fn keygen(&self) -> Result<KeyPair>;

    /// Sign a message with the private key
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>>;

    /// Verify a signature.
    ///
    /// A well-formed signature that does not match returns `Ok(false)`;
    /// a signature of the wrong length is an error.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool>;
}
