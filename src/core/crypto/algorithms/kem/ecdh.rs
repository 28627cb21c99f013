/*!
ECDH over NIST P-256, shaped as a KEM.

`encapsulate` draws a fresh ephemeral key pair, runs Diffie-Hellman against
the recipient's static public key and returns the ephemeral public point as
the "ciphertext". The ephemeral scalar never leaves the call. `decapsulate`
repeats the exchange from the recipient's side.
*/

use p256::ecdh::{EphemeralSecret, diffie_hellman};
use p256::SecretKey;
use rand_core::OsRng;

use crate::core::crypto::algorithms::ec_encoding;
use crate::core::crypto::traits::{KemProvider, NamedProvider};
use crate::core::crypto::types::constants::p256 as sizes;
use crate::core::crypto::types::{Algorithm, AlgorithmSizes, Encapsulation, KeyPair};
use crate::core::error::{InputField, Result};

/// ECDH P-256 provider
#[derive(Debug, Default, Clone, Copy)]
pub struct EcdhP256Provider;

impl EcdhP256Provider {
    pub fn new() -> Self {
        Self
    }
}

impl NamedProvider for EcdhP256Provider {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Ecdh
    }

    fn sizes(&self) -> AlgorithmSizes {
        AlgorithmSizes {
            public_key: sizes::PUBLIC_KEY_BYTES,
            private_key: sizes::SECRET_KEY_BYTES,
            ciphertext_or_signature: sizes::PUBLIC_KEY_BYTES,
            shared_secret: Some(sizes::SHARED_SECRET_BYTES),
        }
    }
}

impl KemProvider for EcdhP256Provider {
    fn keygen(&self) -> Result<KeyPair> {
        let secret = SecretKey::random(&mut OsRng);
        Ok(KeyPair::new(
            Algorithm::Ecdh,
            ec_encoding::encode_public_key(&secret.public_key()),
            ec_encoding::encode_secret_key(&secret),
        ))
    }

    fn encapsulate(&self, public_key: &[u8]) -> Result<Encapsulation> {
        let recipient = ec_encoding::decode_public_key(Algorithm::Ecdh, InputField::PublicKey, public_key)?;

        let ephemeral = EphemeralSecret::random(&mut OsRng);
        let shared = ephemeral.diffie_hellman(&recipient);

        Ok(Encapsulation {
            ciphertext: ec_encoding::encode_public_key(&ephemeral.public_key()),
            shared_secret: shared.raw_secret_bytes().to_vec(),
        })
    }

    fn decapsulate(&self, private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let secret = ec_encoding::decode_secret_key(Algorithm::Ecdh, private_key)?;
        let ephemeral = ec_encoding::decode_public_key(Algorithm::Ecdh, InputField::Ciphertext, ciphertext)?;

        let shared = diffie_hellman(secret.to_nonzero_scalar(), ephemeral.as_affine());
        Ok(shared.raw_secret_bytes().to_vec())
    }
}
