//! Core Saber KEM logic using the `api::Kem` trait.

use core::marker::PhantomData;

use api::{
    error::Error as ApiError, Kem as KemTrait, Result as ApiResult, SecretBytes, Serialize,
    SerializeSecret,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_keygen};
use super::params::{
    SaberVariant, SABER_KEY_BYTES, SABER_NOISE_SEED_BYTES, SABER_SEED_BYTES, SABER_SS_BYTES,
};

/// Saber public key (byte representation).
#[derive(Clone, Debug, Zeroize)]
pub struct SaberPublicKey(Vec<u8>);

impl SaberPublicKey {
    /// Creates a new public key from a byte vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the key and returns the inner byte vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl Serialize for SaberPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Saber secret key (byte representation).
///
/// Holds the PKE secret key, the public key, H(pk) and the implicit
/// rejection randomness; zeroized on drop.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct SaberSecretKey(Vec<u8>);

impl SaberSecretKey {
    /// Creates a new secret key from a byte vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns the length of the secret key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the secret key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the inner bytes.
    ///
    /// The returned slice is sensitive key material; prefer
    /// `to_bytes_zeroizing` where a copy is acceptable.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl SerializeSecret for SaberSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

/// Saber ciphertext (byte representation).
#[derive(Clone, Debug)]
pub struct SaberCiphertext(Vec<u8>);

impl SaberCiphertext {
    /// Creates a new ciphertext from a byte vector.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Returns a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Mutable access to the inner bytes, e.g. for transport buffers.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Returns the length of the ciphertext.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SaberCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

/// Saber shared secret.
///
/// Should be fed into a KDF immediately; zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaberSharedSecret(SecretBytes<SABER_SS_BYTES>);

impl SaberSharedSecret {
    /// Creates a new shared secret from a 32-byte array.
    pub fn new(bytes: [u8; SABER_SS_BYTES]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Returns a reference to the inner bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the length of the shared secret.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the shared secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl SerializeSecret for SaberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Ok(Self(SecretBytes::from_slice(bytes)?))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.as_ref().to_vec())
    }
}

impl core::fmt::Debug for SaberSharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SaberSharedSecret")
            .field("length", &self.len())
            .finish()
    }
}

/// Generic Saber KEM structure parameterized by a `SaberVariant`.
pub struct SaberKem<V: SaberVariant> {
    _params: PhantomData<V>,
}

impl<V: SaberVariant> SaberKem<V> {
    /// Deterministic key generation from the three 32-byte seeds.
    ///
    /// `seed_a` selects the public matrix, `seed_s` the secret vector, and
    /// `z` the implicit-rejection randomness stored in the secret key.
    pub fn keygen(
        seed_a: &[u8; SABER_SEED_BYTES],
        seed_s: &[u8; SABER_NOISE_SEED_BYTES],
        z: &[u8; SABER_KEY_BYTES],
    ) -> ApiResult<(SaberPublicKey, SaberSecretKey)> {
        let (pk_bytes, sk_bytes) = kem_keygen::<V>(seed_a, seed_s, z).map_err(ApiError::from)?;
        Ok((SaberPublicKey::new(pk_bytes), SaberSecretKey::new(sk_bytes)))
    }

    /// Deterministic encapsulation of the 32-byte input `m`.
    pub fn encaps(
        m: &[u8; SABER_KEY_BYTES],
        public_key: &SaberPublicKey,
    ) -> ApiResult<(SaberCiphertext, SaberSharedSecret)> {
        if public_key.as_bytes().len() != V::PUBLIC_KEY_BYTES {
            return Err(ApiError::InvalidKey {
                context: "Saber public key",
                message: format!(
                    "Incorrect length: expected {}, got {}",
                    V::PUBLIC_KEY_BYTES,
                    public_key.as_bytes().len()
                ),
            });
        }

        let (ct_bytes, ss_bytes) =
            kem_encaps::<V>(m, public_key.as_bytes()).map_err(ApiError::from)?;

        Ok((
            SaberCiphertext::new(ct_bytes),
            SaberSharedSecret::new(*ss_bytes),
        ))
    }

    /// Decapsulation; total on any ciphertext of the correct length.
    pub fn decaps(
        ciphertext: &SaberCiphertext,
        secret_key: &SaberSecretKey,
    ) -> ApiResult<SaberSharedSecret> {
        if secret_key.as_bytes().len() != V::SECRET_KEY_BYTES {
            return Err(ApiError::InvalidKey {
                context: "Saber secret key",
                message: format!(
                    "Incorrect length: expected {}, got {}",
                    V::SECRET_KEY_BYTES,
                    secret_key.as_bytes().len()
                ),
            });
        }
        if ciphertext.as_bytes().len() != V::CIPHERTEXT_BYTES {
            return Err(ApiError::InvalidCiphertext {
                context: "Saber ciphertext",
                message: format!(
                    "Incorrect length: expected {}, got {}",
                    V::CIPHERTEXT_BYTES,
                    ciphertext.as_bytes().len()
                ),
            });
        }

        let ss_bytes =
            kem_decaps::<V>(ciphertext.as_bytes(), secret_key.as_bytes()).map_err(ApiError::from)?;

        Ok(SaberSharedSecret::new(*ss_bytes))
    }
}

impl<V: SaberVariant> KemTrait for SaberKem<V> {
    type PublicKey = SaberPublicKey;
    type SecretKey = SaberSecretKey;
    type SharedSecret = SaberSharedSecret;
    type Ciphertext = SaberCiphertext;
    type KeyPair = (Self::PublicKey, Self::SecretKey);

    fn name() -> &'static str {
        V::NAME
    }

    fn keypair<R: RngCore + CryptoRng>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let mut seed_a = [0u8; SABER_SEED_BYTES];
        let mut seed_s = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
        let mut z = Zeroizing::new([0u8; SABER_KEY_BYTES]);
        rng.fill_bytes(&mut seed_a);
        rng.fill_bytes(seed_s.as_mut_slice());
        rng.fill_bytes(z.as_mut_slice());

        Self::keygen(&seed_a, &seed_s, &z)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: RngCore + CryptoRng>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let mut m = Zeroizing::new([0u8; SABER_KEY_BYTES]);
        rng.fill_bytes(m.as_mut_slice());

        Self::encaps(&m, public_key)
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        Self::decaps(ciphertext, secret_key)
    }
}
