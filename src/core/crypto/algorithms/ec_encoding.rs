/*!
Fixed-width P-256 key encodings shared by the classical providers.

Private keys are 32-byte big-endian scalars, public keys are 33-byte SEC1
compressed points.
*/

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};

use crate::core::crypto::types::Algorithm;
use crate::core::crypto::types::constants::p256 as sizes;
use crate::core::error::{Error, InputField, Result};

/// Decode a compressed point, rejecting anything but 33 bytes
pub(crate) fn decode_public_key(algorithm: Algorithm, field: InputField, bytes: &[u8]) -> Result<PublicKey> {
    if bytes.len() != sizes::PUBLIC_KEY_BYTES {
        return Err(Error::wrong_length(algorithm, field, sizes::PUBLIC_KEY_BYTES, bytes.len()));
    }
    PublicKey::from_sec1_bytes(bytes).map_err(|_| Error::malformed(algorithm, field, "not a valid P-256 point"))
}

/// Decode a 32-byte scalar; zero and values >= n are rejected
pub(crate) fn decode_secret_key(algorithm: Algorithm, bytes: &[u8]) -> Result<SecretKey> {
    if bytes.len() != sizes::SECRET_KEY_BYTES {
        return Err(Error::wrong_length(
            algorithm,
            InputField::PrivateKey,
            sizes::SECRET_KEY_BYTES,
            bytes.len(),
        ));
    }
    SecretKey::from_slice(bytes)
        .map_err(|_| Error::malformed(algorithm, InputField::PrivateKey, "scalar out of range"))
}

pub(crate) fn encode_public_key(public_key: &PublicKey) -> Vec<u8> {
    public_key.to_encoded_point(true).as_bytes().to_vec()
}

pub(crate) fn encode_secret_key(secret_key: &SecretKey) -> Vec<u8> {
    secret_key.to_bytes().to_vec()
}
