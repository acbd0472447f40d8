//! Trait definition for Key Encapsulation Mechanisms (KEM)
//!
//! This module provides a type-safe interface for key encapsulation
//! mechanisms, which are used for secure key exchange in public-key
//! cryptography.

use super::serialize::{Serialize, SerializeSecret};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for Key Encapsulation Mechanism (KEM) with domain-specific types.
pub trait Kem {
    /// Public key type.
    ///
    /// Implements `Serialize` to guarantee safe `from_bytes` and `to_bytes`
    /// methods.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// Implements `Zeroize` for secure memory cleanup and `SerializeSecret`
    /// for zeroizing byte export.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Shared secret type.
    ///
    /// Implements `Zeroize`; should be converted into application keys
    /// immediately after generation.
    type SharedSecret: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type for the encapsulated key.
    type Ciphertext: Clone + Serialize;

    /// Keypair type for storage of related keys. It is an intermediate type
    /// and does not carry a serialization contract itself.
    type KeyPair: Clone;

    /// Returns the KEM algorithm name.
    fn name() -> &'static str;

    /// Generate a new keypair.
    ///
    /// Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract public key from keypair.
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract secret key from keypair.
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Encapsulate a shared secret using the recipient's public key.
    ///
    /// Must validate the public key internally and use fresh randomness from
    /// the provided RNG.
    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Self::Ciphertext, Self::SharedSecret)>;

    /// Decapsulate a shared secret using the private key.
    ///
    /// Must be constant-time in the secret inputs and use implicit rejection
    /// for IND-CCA2 security where applicable.
    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::SharedSecret>;
}
