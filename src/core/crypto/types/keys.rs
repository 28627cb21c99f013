/*!
Key material produced and consumed by providers.

Secret bytes (private keys, shared secrets) are wiped when the owning value
is dropped.
*/

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use super::algorithms::Algorithm;

/// A freshly generated key pair. The caller owns it outright.
#[derive(Clone)]
pub struct KeyPair {
    pub public_key: Vec<u8>,
    pub private_key: Vec<u8>,
    pub algorithm: Algorithm,
}

impl KeyPair {
    pub fn new(algorithm: Algorithm, public_key: Vec<u8>, private_key: Vec<u8>) -> Self {
        Self {
            public_key,
            private_key,
            algorithm,
        }
    }

    /// Hex SHA-256 of the public key
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(&self.public_key))
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("algorithm", &self.algorithm)
            .field("public_key_len", &self.public_key.len())
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Output of a single encapsulation
#[derive(Clone)]
pub struct Encapsulation {
    pub ciphertext: Vec<u8>,
    pub shared_secret: Vec<u8>,
}

impl Drop for Encapsulation {
    fn drop(&mut self) {
        self.shared_secret.zeroize();
    }
}

impl fmt::Debug for Encapsulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encapsulation")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("shared_secret", &"<redacted>")
            .finish()
    }
}

/// Fixed encoding sizes declared by a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSizes {
    pub public_key: usize,
    pub private_key: usize,
    /// Ciphertext length for KEMs, signature length for signature schemes
    pub ciphertext_or_signature: usize,
    /// Only KEMs produce a shared secret
    pub shared_secret: Option<usize>,
}
