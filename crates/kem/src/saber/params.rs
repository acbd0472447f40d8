//! Saber parameter definitions.

use params::pqc::saber as global_params;

/// Matrix seed size for all Saber variants.
pub const SABER_SEED_BYTES: usize = global_params::SABER_SEED_BYTES;
/// Secret seed size for all Saber variants.
pub const SABER_NOISE_SEED_BYTES: usize = global_params::SABER_NOISE_SEED_BYTES;
/// Implicit-rejection randomness size for all Saber variants.
pub const SABER_KEY_BYTES: usize = global_params::SABER_KEY_BYTES;
/// Shared secret size for all Saber variants.
pub const SABER_SS_BYTES: usize = global_params::SABER_SHARED_SECRET_SIZE;

/// Trait defining parameters for a specific Saber variant.
///
/// The six implementations below are the only valid parameter tuples; the
/// PKE and KEM routines are generic over this trait and therefore cannot be
/// instantiated outside the profile table.
pub trait SaberVariant: Send + Sync + 'static {
    /// Module rank l (dimension of vectors and the public matrix).
    const L: usize;
    /// Bits per coefficient of Rq, q = 2^EQ.
    const EQ: usize;
    /// Bits per coefficient of the rounded ring Rp, p = 2^EP.
    const EP: usize;
    /// Bits per coefficient of the message rounding ring RT, t = 2^ET.
    const ET: usize;
    /// Secret distribution parameter.
    const MU: usize;
    /// Uniform secret sampling instead of centered binomial.
    const UNIFORM: bool;

    /// Algorithm name string.
    const NAME: &'static str;
    /// Size of the public key in bytes.
    const PUBLIC_KEY_BYTES: usize;
    /// Size of the secret key in bytes.
    const SECRET_KEY_BYTES: usize;
    /// Size of the ciphertext in bytes.
    const CIPHERTEXT_BYTES: usize;
}

// Concrete parameter implementations for Saber variants.

pub struct LightSaberParamsImpl;
impl SaberVariant for LightSaberParamsImpl {
    const L: usize = global_params::LIGHTSABER.l;
    const EQ: usize = global_params::LIGHTSABER.eq;
    const EP: usize = global_params::LIGHTSABER.ep;
    const ET: usize = global_params::LIGHTSABER.et;
    const MU: usize = global_params::LIGHTSABER.mu;
    const UNIFORM: bool = global_params::LIGHTSABER.uniform_sampling;
    const NAME: &'static str = "LightSaber";
    const PUBLIC_KEY_BYTES: usize = global_params::LIGHTSABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::LIGHTSABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::LIGHTSABER.ciphertext_size;
}

pub struct SaberParamsImpl;
impl SaberVariant for SaberParamsImpl {
    const L: usize = global_params::SABER.l;
    const EQ: usize = global_params::SABER.eq;
    const EP: usize = global_params::SABER.ep;
    const ET: usize = global_params::SABER.et;
    const MU: usize = global_params::SABER.mu;
    const UNIFORM: bool = global_params::SABER.uniform_sampling;
    const NAME: &'static str = "Saber";
    const PUBLIC_KEY_BYTES: usize = global_params::SABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::SABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::SABER.ciphertext_size;
}

pub struct FireSaberParamsImpl;
impl SaberVariant for FireSaberParamsImpl {
    const L: usize = global_params::FIRESABER.l;
    const EQ: usize = global_params::FIRESABER.eq;
    const EP: usize = global_params::FIRESABER.ep;
    const ET: usize = global_params::FIRESABER.et;
    const MU: usize = global_params::FIRESABER.mu;
    const UNIFORM: bool = global_params::FIRESABER.uniform_sampling;
    const NAME: &'static str = "FireSaber";
    const PUBLIC_KEY_BYTES: usize = global_params::FIRESABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::FIRESABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::FIRESABER.ciphertext_size;
}

pub struct ULightSaberParamsImpl;
impl SaberVariant for ULightSaberParamsImpl {
    const L: usize = global_params::ULIGHTSABER.l;
    const EQ: usize = global_params::ULIGHTSABER.eq;
    const EP: usize = global_params::ULIGHTSABER.ep;
    const ET: usize = global_params::ULIGHTSABER.et;
    const MU: usize = global_params::ULIGHTSABER.mu;
    const UNIFORM: bool = global_params::ULIGHTSABER.uniform_sampling;
    const NAME: &'static str = "uLightSaber";
    const PUBLIC_KEY_BYTES: usize = global_params::ULIGHTSABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::ULIGHTSABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::ULIGHTSABER.ciphertext_size;
}

pub struct USaberParamsImpl;
impl SaberVariant for USaberParamsImpl {
    const L: usize = global_params::USABER.l;
    const EQ: usize = global_params::USABER.eq;
    const EP: usize = global_params::USABER.ep;
    const ET: usize = global_params::USABER.et;
    const MU: usize = global_params::USABER.mu;
    const UNIFORM: bool = global_params::USABER.uniform_sampling;
    const NAME: &'static str = "uSaber";
    const PUBLIC_KEY_BYTES: usize = global_params::USABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::USABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::USABER.ciphertext_size;
}

pub struct UFireSaberParamsImpl;
impl SaberVariant for UFireSaberParamsImpl {
    const L: usize = global_params::UFIRESABER.l;
    const EQ: usize = global_params::UFIRESABER.eq;
    const EP: usize = global_params::UFIRESABER.ep;
    const ET: usize = global_params::UFIRESABER.et;
    const MU: usize = global_params::UFIRESABER.mu;
    const UNIFORM: bool = global_params::UFIRESABER.uniform_sampling;
    const NAME: &'static str = "uFireSaber";
    const PUBLIC_KEY_BYTES: usize = global_params::UFIRESABER.public_key_size;
    const SECRET_KEY_BYTES: usize = global_params::UFIRESABER.secret_key_size;
    const CIPHERTEXT_BYTES: usize = global_params::UFIRESABER.ciphertext_size;
}
