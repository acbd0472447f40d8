//! Saber Key Encapsulation Mechanism (KEM).
//!
//! This module implements the Saber KEM, a lattice-based key encapsulation
//! mechanism built on Module Learning-With-Rounding. The power-of-two
//! moduli make every reduction a bit mask and polynomial multiplication
//! runs through Karatsuba rather than an NTT. IND-CCA2 security comes from
//! a Fujisaki-Okamoto transform with implicit rejection.

// Modules defining the Saber KEM logic and parameters.
mod consts;
mod gen;
mod hash;
mod ind_cca; // Implements the Fujisaki-Okamoto transform for CCA security
mod ind_cpa; // Defines the core CPA-secure PKE scheme
mod kem; // Defines the SaberKem struct and implements api::Kem
mod params;

// Concrete Saber variants
mod firesaber;
mod lightsaber;
mod saber;
mod ufiresaber;
mod ulightsaber;
mod usaber;

// Re-export the primary KEM types for each parameter profile.
pub use self::firesaber::FireSaber;
pub use self::lightsaber::LightSaber;
pub use self::saber::Saber;
pub use self::ufiresaber::UFireSaber;
pub use self::ulightsaber::ULightSaber;
pub use self::usaber::USaber;

// Re-export common key/ciphertext types if users need to name them directly.
pub use self::kem::{
    SaberCiphertext, SaberKem, SaberPublicKey, SaberSecretKey, SaberSharedSecret,
};

// Re-export the variant parameter trait and the shared-secret size.
pub use self::params::{SaberVariant, SABER_SS_BYTES};

// Deterministic PKE layer, exposed for tests and for callers that manage
// their own randomness.
pub use self::ind_cpa::{decrypt as pke_decrypt, encrypt as pke_encrypt, keygen as pke_keygen};
