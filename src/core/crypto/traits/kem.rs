/*!
Traits for key encapsulation operations.

This module defines the interface every KEM provider implements.
*/

use crate::core::crypto::types::{Encapsulation, KeyPair};
use crate::core::error::Result;

use super::provider::NamedProvider;

/// Key encapsulation mechanism
///
/// For any key pair produced by `keygen`,
/// `decapsulate(sk, encapsulate(pk).ciphertext)` yields the shared secret
/// of that same encapsulation.
pub trait KemProvider: NamedProvider {
    /// Generate an independent key pair from a secure random source
    fn keygen(&self) -> Result<KeyPair>;

    /// Produce a fresh ciphertext and shared secret for the receiver's public key (sender side)
    fn encapsulate(&self, public_key: &[u8]) -> Result<Encapsulation>;

    /// Recover the shared secret from a ciphertext (receiver side)
    fn decapsulate(&self, private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>>;
}
