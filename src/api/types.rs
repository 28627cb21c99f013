/*!
Wire types for the request handlers.

Byte fields travel as lowercase hex strings and field names are camelCase.
Messages to sign are UTF-8 text and are signed as their raw bytes.
*/

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::crypto::types::Algorithm;
use crate::core::error::{Error, InputField, Result};

/// Response for key generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyGenResponse {
    pub public_key: String,
    pub private_key: String,
    pub algorithm: Algorithm,
    /// Hex SHA-256 of the public key
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>,
}

/// Request for encapsulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncapsulateRequest {
    pub public_key: String,
    pub algorithm: String,
}

/// Response for encapsulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncapsulateResponse {
    pub ciphertext: String,
    pub shared_secret: String,
}

/// Request for decapsulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecapsulateRequest {
    pub private_key: String,
    pub ciphertext: String,
    pub algorithm: String,
}

/// Response for decapsulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecapsulateResponse {
    pub shared_secret: String,
}

/// Request for signing; the algorithm comes from the route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignRequest {
    pub private_key: String,
    #[serde(default)]
    pub message: String,
}

/// Response for signing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignResponse {
    pub signature: String,
}

/// Request for verification; the algorithm comes from the route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub public_key: String,
    #[serde(default)]
    pub message: String,
    pub signature: String,
}

/// Response for verification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub valid: bool,
}

/// Error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        Self {
            error: error.to_string(),
            kind: error.kind().to_string(),
        }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub kem_algorithms: Vec<Algorithm>,
    pub signature_algorithms: Vec<Algorithm>,
}

/// Decode a hex wire field into bytes
pub(crate) fn decode_hex(field: InputField, value: &str) -> Result<Vec<u8>> {
    hex::decode(value).map_err(|e| Error::InvalidEncoding {
        field,
        reason: e.to_string(),
    })
}
