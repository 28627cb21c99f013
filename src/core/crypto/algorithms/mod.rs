/*!
Implementations of cryptographic algorithms.

This module provides concrete implementations of the
provider contracts.
*/

// Key encapsulation algorithms
pub mod kem;

// Signature algorithms
pub mod signatures;

// P-256 key encodings
pub(crate) mod ec_encoding;

// Re-export factory functions
pub use kem::{EcdhP256Provider, MlKem768Provider, create_kem_provider};
pub use signatures::{EcdsaP256Provider, MlDsa65Provider, create_signature_provider};
