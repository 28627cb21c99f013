/*!
Core types for cryptographic operations.

This module provides the type definitions, enums, and constants
used throughout the cryptographic subsystem.
*/

pub mod algorithms;
pub mod constants;
pub mod keys;

// Re-export core types for easier access
pub use algorithms::{Algorithm, Capability};
pub use keys::{AlgorithmSizes, Encapsulation, KeyPair};
