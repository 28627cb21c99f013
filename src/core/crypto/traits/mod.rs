/*!
Core traits for cryptographic operations.

This module defines the interfaces for the two capability contracts
supported by the registry.
*/

pub mod kem;
pub mod provider;
pub mod signature;

// Re-export core traits for easier access
pub use kem::KemProvider;
pub use provider::NamedProvider;
pub use signature::SignatureProvider;
