/*!
ECDSA over NIST P-256 with SHA-256.

Signatures are the fixed-width concatenation `r || s`, each component
left-padded with zeros to 32 bytes, so every signature is exactly 64 bytes.
*/

use p256::ecdsa::signature::{DigestSigner, DigestVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::SecretKey;
use rand_core::OsRng;
use sha2::{Digest, Sha256};

use crate::core::crypto::algorithms::ec_encoding;
use crate::core::crypto::traits::{NamedProvider, SignatureProvider};
use crate::core::crypto::types::constants::p256 as sizes;
use crate::core::crypto::types::{Algorithm, AlgorithmSizes, KeyPair};
use crate::core::error::{Error, InputField, Result};
use crate::core::metrics::Operation;

/// ECDSA P-256 provider
#[derive(Debug, Default, Clone, Copy)]
pub struct EcdsaP256Provider;

impl EcdsaP256Provider {
    pub fn new() -> Self {
        Self
    }
}

impl NamedProvider for EcdsaP256Provider {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdsa
    }

    fn sizes(&self) -> AlgorithmSizes {
        AlgorithmSizes {
            public_key: sizes::PUBLIC_KEY_BYTES,
            private_key: sizes::SECRET_KEY_BYTES,
            ciphertext_or_signature: sizes::SIGNATURE_BYTES,
            shared_secret: None,
        }
    }
}

impl SignatureProvider for EcdsaP256Provider {
    fn keygen(&self) -> Result<KeyPair> {
        let secret = SecretKey::random(&mut OsRng);
        Ok(KeyPair::new(
            Algorithm::Ecdsa,
            ec_encoding::encode_public_key(&secret.public_key()),
            ec_encoding::encode_secret_key(&secret),
        ))
    }

    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        let secret = ec_encoding::decode_secret_key(Algorithm::Ecdsa, private_key)?;

        // Building the signing key recomputes the public point as d·G; no
        // caller-supplied public key is involved.
        let signing_key = SigningKey::from(&secret);

        let signature: Signature = signing_key
            .try_sign_digest(Sha256::new_with_prefix(message))
            .map_err(|e| Error::crypto(Algorithm::Ecdsa, Operation::Sign, e))?;

        // `to_bytes` is already the zero-padded 32 + 32 layout
        Ok(signature.to_bytes().to_vec())
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        if signature.len() != sizes::SIGNATURE_BYTES {
            return Err(Error::wrong_length(
                Algorithm::Ecdsa,
                InputField::Signature,
                sizes::SIGNATURE_BYTES,
                signature.len(),
            ));
        }
        let public_key = ec_encoding::decode_public_key(Algorithm::Ecdsa, InputField::PublicKey, public_key)?;
        let verifying_key = VerifyingKey::from(&public_key);

        // r or s of zero or >= n cannot verify under any key
        let signature = match Signature::from_slice(signature) {
            Ok(sig) => sig,
            Err(_) => return Ok(false),
        };

        Ok(verifying_key
            .verify_digest(Sha256::new_with_prefix(message), &signature)
            .is_ok())
    }
}
