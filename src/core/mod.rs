//! Core components for pqcd.
//!
//! This module contains the fundamental building blocks of the service:
//! cryptographic providers and their registry, the metrics collector,
//! and error handling.

// Export cryptographic functionality
pub mod crypto;

// Export performance metrics
pub mod metrics;

// Service constants
pub mod constants;

// Error handling
pub mod error;

// Re-exports for convenience
pub use self::constants::VERSION;
pub use self::error::{Error, InputField, Result};
