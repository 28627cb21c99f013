/*!
Cryptographic components for pqcd.

This module provides the provider contracts, the four concrete providers
(two post-quantum, two classical baselines) and the registry that maps
algorithm tags to them.
*/

// Algorithm identity, key material, sizes
pub mod types;

// Capability contracts
pub mod traits;

// Concrete providers
pub mod algorithms;

// Registry for provider lookup
pub mod registry;

// Re-export frequently used types
pub use algorithms::{create_kem_provider, create_signature_provider};
pub use registry::ProviderRegistry;
pub use traits::{KemProvider, NamedProvider, SignatureProvider};
pub use types::{Algorithm, AlgorithmSizes, Capability, Encapsulation, KeyPair};
