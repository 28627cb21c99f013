/*!
Algorithm type definitions.

This module defines the closed set of algorithms the service can run.
The wire tag of each algorithm doubles as its registry and metrics key.
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::Error;

/// Supported algorithms, keyed by wire tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Algorithm {
    /// ML-KEM-768 lattice KEM
    #[serde(rename = "ml-kem-768")]
    MlKem768,
    /// Elliptic-curve Diffie-Hellman over P-256, used as a KEM
    #[serde(rename = "ecdh")]
    Ecdh,
    /// ML-DSA-65 lattice signature
    #[serde(rename = "ml-dsa-65")]
    MlDsa65,
    /// ECDSA over P-256 with SHA-256
    #[serde(rename = "ecdsa")]
    Ecdsa,
}

/// The two capability contracts a provider can satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Key encapsulation
    Kem,
    /// Digital signatures
    Signature,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Kem => f.write_str("KEM"),
            Capability::Signature => f.write_str("signature"),
        }
    }
}

impl Algorithm {
    /// Every supported algorithm
    pub const ALL: [Algorithm; 4] = [
        Algorithm::MlKem768,
        Algorithm::Ecdh,
        Algorithm::MlDsa65,
        Algorithm::Ecdsa,
    ];

    /// Wire tag, e.g. `ml-kem-768`
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::MlKem768 => "ml-kem-768",
            Algorithm::Ecdh => "ecdh",
            Algorithm::MlDsa65 => "ml-dsa-65",
            Algorithm::Ecdsa => "ecdsa",
        }
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::MlKem768 => "ML-KEM-768",
            Algorithm::Ecdh => "ECDH P-256",
            Algorithm::MlDsa65 => "ML-DSA-65",
            Algorithm::Ecdsa => "ECDSA P-256",
        }
    }

    /// Which contract this algorithm is served through
    pub fn capability(&self) -> Capability {
        match self {
            Algorithm::MlKem768 | Algorithm::Ecdh => Capability::Kem,
            Algorithm::MlDsa65 | Algorithm::Ecdsa => Capability::Signature,
        }
    }

    pub fn is_post_quantum(&self) -> bool {
        matches!(self, Algorithm::MlKem768 | Algorithm::MlDsa65)
    }

    /// KEM-shaped algorithms
    pub fn kems() -> impl Iterator<Item = Algorithm> {
        Self::ALL.into_iter().filter(|a| a.capability() == Capability::Kem)
    }

    /// Signature-shaped algorithms
    pub fn signatures() -> impl Iterator<Item = Algorithm> {
        Self::ALL.into_iter().filter(|a| a.capability() == Capability::Signature)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| Error::UnsupportedAlgorithm(s.to_string()))
    }
}
