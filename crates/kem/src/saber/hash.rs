//! Sponge collaborators for the CCA transform.
//!
//! H is SHA3-256, G is SHA3-512 (its 64-byte digest splits into the
//! pre-key and the encryption coins), and SHAKE-128 expands seeds into the
//! byte blocks the matrix and secret generators consume. All three come
//! from the `sha3` crate; this module only fixes their roles.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128};

use super::params::SABER_SS_BYTES;

/// Output length of G.
pub const G_BYTES: usize = 64;

/// H: SHA3-256 over the concatenation of `parts`.
pub fn h_parts(parts: &[&[u8]]) -> [u8; SABER_SS_BYTES] {
    let mut hasher = Sha3_256::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }

    let mut out = [0u8; SABER_SS_BYTES];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// G: SHA3-512 over the concatenation of `parts`.
pub fn g_parts(parts: &[&[u8]]) -> [u8; G_BYTES] {
    let mut hasher = Sha3_512::new();
    for part in parts {
        Digest::update(&mut hasher, part);
    }

    let mut out = [0u8; G_BYTES];
    out.copy_from_slice(&hasher.finalize());
    out
}

/// SHAKE-128 seed expansion: absorb `seed`, squeeze `out.len()` bytes.
pub fn xof_read(seed: &[u8], out: &mut [u8]) {
    let mut xof = Shake128::default();
    xof.update(seed);
    xof.finalize_xof().read(out);
}
