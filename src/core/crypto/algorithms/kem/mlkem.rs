/*!
ML-KEM-768 key encapsulation.

Keys and ciphertexts use the scheme's own byte encoding; every input is
length-checked before it is handed to the decoder.
*/

use pqcrypto_mlkem::mlkem768;
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SecretKey as _, SharedSecret as _};

use crate::core::crypto::traits::{KemProvider, NamedProvider};
use crate::core::crypto::types::constants::mlkem768 as sizes;
use crate::core::crypto::types::{Algorithm, AlgorithmSizes, Encapsulation, KeyPair};
use crate::core::error::{Error, InputField, Result};

/// ML-KEM-768 provider
#[derive(Debug, Default, Clone, Copy)]
pub struct MlKem768Provider;

impl MlKem768Provider {
    pub fn new() -> Self {
        Self
    }

    fn parse_public_key(public_key: &[u8]) -> Result<mlkem768::PublicKey> {
        if public_key.len() != sizes::PUBLIC_KEY_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlKem768,
                InputField::PublicKey,
                sizes::PUBLIC_KEY_BYTES,
                public_key.len(),
            ));
        }
        mlkem768::PublicKey::from_bytes(public_key)
            .map_err(|e| Error::malformed(Algorithm::MlKem768, InputField::PublicKey, e))
    }

    fn parse_secret_key(private_key: &[u8]) -> Result<mlkem768::SecretKey> {
        if private_key.len() != sizes::SECRET_KEY_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlKem768,
                InputField::PrivateKey,
                sizes::SECRET_KEY_BYTES,
                private_key.len(),
            ));
        }
        mlkem768::SecretKey::from_bytes(private_key)
            .map_err(|e| Error::malformed(Algorithm::MlKem768, InputField::PrivateKey, e))
    }

    fn parse_ciphertext(ciphertext: &[u8]) -> Result<mlkem768::Ciphertext> {
        if ciphertext.len() != sizes::CIPHERTEXT_BYTES {
            return Err(Error::wrong_length(
                Algorithm::MlKem768,
                InputField::Ciphertext,
                sizes::CIPHERTEXT_BYTES,
                ciphertext.len(),
            ));
        }
        mlkem768::Ciphertext::from_bytes(ciphertext)
            .map_err(|e| Error::malformed(Algorithm::MlKem768, InputField::Ciphertext, e))
    }
}

impl NamedProvider for MlKem768Provider {
    fn algorithm(&self) -> Algorithm {
        Algorithm::MlKem768
    }

    fn sizes(&self) -> AlgorithmSizes {
        AlgorithmSizes {
            public_key: sizes::PUBLIC_KEY_BYTES,
            private_key: sizes::SECRET_KEY_BYTES,
            ciphertext_or_signature: sizes::CIPHERTEXT_BYTES,
            shared_secret: Some(sizes::SHARED_SECRET_BYTES),
        }
    }
}

impl KemProvider for MlKem768Provider {
    fn keygen(&self) -> Result<KeyPair> {
        let (pk, sk) = mlkem768::keypair();
        Ok(KeyPair::new(
            Algorithm::MlKem768,
            pk.as_bytes().to_vec(),
            sk.as_bytes().to_vec(),
        ))
    }

    fn encapsulate(&self, public_key: &[u8]) -> Result<Encapsulation> {
        let pk = Self::parse_public_key(public_key)?;
        let (ss, ct) = mlkem768::encapsulate(&pk);
        Ok(Encapsulation {
            ciphertext: ct.as_bytes().to_vec(),
            shared_secret: ss.as_bytes().to_vec(),
        })
    }

    fn decapsulate(&self, private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let sk = Self::parse_secret_key(private_key)?;
        let ct = Self::parse_ciphertext(ciphertext)?;
        let ss = mlkem768::decapsulate(&ct, &sk);
        Ok(ss.as_bytes().to_vec())
    }
}
