/*!
Error handling for pqcd.

Errors fall into two families: client-input errors (unknown algorithm,
malformed key/ciphertext/signature encoding, undecodable wire fields) and
internal errors (the underlying primitive failed). Handlers surface the two
differently so misuse can be told apart from implementation faults.
*/

use std::fmt;
use std::io;
use thiserror::Error;

use crate::core::crypto::types::algorithms::{Algorithm, Capability};
use crate::core::metrics::Operation;

/// Result type for pqcd
pub type Result<T> = std::result::Result<T, Error>;

/// Which input buffer failed to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    PublicKey,
    PrivateKey,
    Ciphertext,
    Signature,
}

impl InputField {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputField::PublicKey => "public key",
            InputField::PrivateKey => "private key",
            InputField::Ciphertext => "ciphertext",
            InputField::Signature => "signature",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for pqcd
#[derive(Error, Debug)]
pub enum Error {
    /// Wire tag does not name a known algorithm
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Registry has no provider of the requested capability for this algorithm
    #[error("{capability} provider not found: {algorithm}")]
    ProviderNotFound {
        capability: Capability,
        algorithm: Algorithm,
    },

    /// Key, ciphertext or signature bytes are not a valid encoding
    #[error("invalid {algorithm} {field}: {reason}")]
    MalformedInput {
        algorithm: Algorithm,
        field: InputField,
        reason: String,
    },

    /// A textual wire field could not be decoded into bytes
    #[error("invalid {field} format: {reason}")]
    InvalidEncoding {
        field: InputField,
        reason: String,
    },

    /// Malformed request envelope
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The primitive itself reported failure
    #[error("{algorithm} {operation} failed: {reason}")]
    CryptoFailure {
        algorithm: Algorithm,
        operation: Operation,
        reason: String,
    },

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Rejected configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a length mismatch on a fixed-size input.
    pub(crate) fn wrong_length(
        algorithm: Algorithm,
        field: InputField,
        expected: usize,
        actual: usize,
    ) -> Self {
        Error::MalformedInput {
            algorithm,
            field,
            reason: format!("expected {} bytes, got {}", expected, actual),
        }
    }

    pub(crate) fn malformed(algorithm: Algorithm, field: InputField, reason: impl fmt::Display) -> Self {
        Error::MalformedInput {
            algorithm,
            field,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn crypto(algorithm: Algorithm, operation: Operation, reason: impl fmt::Display) -> Self {
        Error::CryptoFailure {
            algorithm,
            operation,
            reason: reason.to_string(),
        }
    }

    /// Whether the caller supplied bad input (as opposed to an internal fault)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedAlgorithm(_)
                | Error::ProviderNotFound { .. }
                | Error::MalformedInput { .. }
                | Error::InvalidEncoding { .. }
                | Error::InvalidRequest(_)
                | Error::Config(_)
        )
    }

    /// HTTP-style status for the external transport layer
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() { 400 } else { 500 }
    }

    /// Short machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            Error::UnsupportedAlgorithm(_) | Error::ProviderNotFound { .. } => "unsupported_algorithm",
            Error::MalformedInput { .. } | Error::InvalidEncoding { .. } => "malformed_input",
            Error::InvalidRequest(_) => "invalid_request",
            Error::CryptoFailure { .. } => "crypto_failure",
            Error::Config(_) => "config",
            Error::Internal(_) | Error::Io(_) | Error::Json(_) => "internal",
        }
    }
}

/// Convert from Error to io::Error (for compatibility)
impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        match error {
            Error::Io(io_error) => io_error,
            other if other.is_client_error() => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
            other => io::Error::other(other.to_string()),
        }
    }
}
