/*!
ML-DSA-65 signature implementation.

Signing draws its per-signature randomness from the system RNG inside the
scheme; verification is a pure function of key, message and signature.
*/

use pqcrypto_mldsa::mldsa65;
use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use crate::core::crypto::traits::{NamedProvider, SignatureProvider};
use crate::core::crypto::types::constants::mldsa65 as sizes;
use crate::core::crypto::types::{Algorithm, AlgorithmSizes, KeyPair};
use crate::core::error::{Error, InputField, Result};

/// ML-DSA-65 provider
#[derive(Debug, Default, Clone, Copy)]
pub struct MlDsa65Provider;

impl MlDsa65Provider {
    pub fn new() -> Self {
        Self
    }
}

impl NamedProvider for MlDsa65Provider {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MlDsa65
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

impl SignatureProvider for MlDsa65Provider {
    fn keygen(&self) -> Result<KeyPair> {
        let (pk, sk) = mldsa65::keypair();
        Ok(KeyPair::new(
            Algorithm::MlDsa65,
            pk.as_bytes().to_vec(),
            sk.as_bytes().to_vec(),
        ))
    }

    /// Sign data using an ML-DSA-65 signing key
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        if private_key.len() != sizes::SECRET_KEY_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlDsa65,
                InputField::PrivateKey,
                sizes::SECRET_KEY_BYTES,
                private_key.len(),
            ));
        }
        let sk = mldsa65::SecretKey::from_bytes(private_key)
            .map_err(|e| Error::malformed(Algorithm::MlDsa65, InputField::PrivateKey, e))?;

        let signature = mldsa65::detached_sign(message, &sk);
        Ok(signature.as_bytes().to_vec())
    }

    /// Verify a signature using an ML-DSA-65 verification key
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
        if public_key.len() != sizes::PUBLIC_KEY_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlDsa65,
                InputField::PublicKey,
                sizes::PUBLIC_KEY_BYTES,
                public_key.len(),
            ));
        }
        if signature.len() != sizes::SIGNATURE_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlDsa65,
                InputField::Signature,
                sizes::SIGNATURE_BYTES,
                signature.len(),
            ));
        }

        let pk = mldsa65::PublicKey::from_bytes(public_key)
            .map_err(|e| Error::malformed(Algorithm::MlDsa65, InputField::PublicKey, e))?;
        let sig = mldsa65::DetachedSignature::from_bytes(signature)
            .map_err(|e| Error::malformed(Algorithm::MlDsa65, InputField::Signature, e))?;

        Ok(mldsa65::verify_detached_signature(&sig, message, &pk).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_match_scheme() {
        assert_eq!(mldsa65::public_key_bytes(), sizes::PUBLIC_KEY_BYTES);
        assert_eq!(mldsa65::secret_key_bytes(), sizes::SECRET_KEY_BYTES);
        assert_eq!(mldsa65::signature_bytes(), sizes::SIGNATURE_BYTES);
    }

    #[test]
    fn test_sign_verify() {
        let provider = MlDsa65Provider::new();
        let kp = provider.keygen().unwrap();
        let sig = provider.sign(&kp.private_key, b"benchmark payload").unwrap();
        assert_eq!(sig.len(), sizes::SIGNATURE_BYTES);
        assert!(provider.verify(&kp.public_key, b"benchmark payload", &sig).unwrap());
        assert!(!provider.verify(&kp.public_key, b"benchmark payload!", &sig).unwrap());
    }

    #[test]
    fn test_truncated_signature_is_error() {
        let provider = MlDsa65Provider::new();
        let kp = provider.keygen().unwrap();
        let sig = provider.sign(&kp.private_key, b"").unwrap();
        let err = provider.verify(&kp.public_key, b"", &sig[..sig.len() - 1]).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { field: InputField::Signature, .. }));
    }
}
