/*!
Constants for cryptographic operations.

Fixed byte lengths of every key, ciphertext, shared secret and signature
the providers produce. Providers check inputs against these before parsing.
*/

/// ML-KEM-768 constants
pub mod mlkem768 {
    /// Size of ML-KEM-768 encapsulation key in bytes
    pub const PUBLIC_KEY_BYTES: usize = 1184;

    /// Size of ML-KEM-768 decapsulation key in bytes
    pub const SECRET_KEY_BYTES: usize = 2400;

    /// Size of ML-KEM-768 ciphertext in bytes
    pub const CIPHERTEXT_BYTES: usize = 1088;

    /// Size of ML-KEM shared secret in bytes
    pub const SHARED_SECRET_BYTES: usize = 32;
}

/// ML-DSA-65 constants
pub mod mldsa65 {
    /// Size of ML-DSA-65 public key in bytes
    pub const PUBLIC_KEY_BYTES: usize = 1952;

    /// Size of ML-DSA-65 secret key in bytes
    pub const SECRET_KEY_BYTES: usize = 4032;

    /// Size of ML-DSA-65 signature in bytes
    pub const SIGNATURE_BYTES: usize = 3309;
}

/// NIST P-256 constants shared by ECDH and ECDSA
pub mod p256 {
    /// Big-endian scalar
    pub const SECRET_KEY_BYTES: usize = 32;

    /// SEC1 compressed point
    pub const PUBLIC_KEY_BYTES: usize = 33;

    /// ECDH x-coordinate
    pub const SHARED_SECRET_BYTES: usize = 32;

    /// Width of each of `r` and `s`
    pub const SCALAR_BYTES: usize = 32;

    /// `r || s`
    pub const SIGNATURE_BYTES: usize = 2 * SCALAR_BYTES;
}
