//! Saber IND-CCA2 KEM construction using the Fujisaki-Okamoto transform.
//!
//! Decapsulation re-encrypts the decrypted message and compares the result
//! against the received ciphertext with a full-width constant-time mask;
//! the session key is then derived from either the real pre-key or the
//! stored rejection randomness z, selected by that mask. There is no
//! branch on the comparison and no failure path: an invalid ciphertext
//! yields a deterministic pseudo-random key (implicit rejection).

use internal::constant_time::{ct_eq_mask, ct_select_bytes};
use params::pqc::saber::{
    kem_ciphertext_size, kem_public_key_size, kem_secret_key_size, pke_public_key_size,
    pke_secret_key_size,
};
use zeroize::Zeroizing;

use super::hash::{g_parts, h_parts};
use super::ind_cpa;
use super::params::{SaberVariant, SABER_KEY_BYTES, SABER_NOISE_SEED_BYTES, SABER_SEED_BYTES, SABER_SS_BYTES};
use crate::error::{Error, Result};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; SABER_SS_BYTES]>;

/// IND-CCA2 key generation.
///
/// The secret key stores, in order: the PKE secret key, the public key,
/// H(public key), and the rejection randomness z.
pub(crate) fn kem_keygen<V: SaberVariant>(
    seed_a: &[u8; SABER_SEED_BYTES],
    seed_s: &[u8; SABER_NOISE_SEED_BYTES],
    z: &[u8; SABER_KEY_BYTES],
) -> Result<(Vec<u8>, Vec<u8>)> {
    let (pk, sk_pke) = ind_cpa::keygen::<V>(seed_a, seed_s)?;
    let sk_pke = Zeroizing::new(sk_pke);

    let h_pk = h_parts(&[&pk]);

    let mut sk = Vec::with_capacity(kem_secret_key_size(V::L, V::EQ, V::EP));
    sk.extend_from_slice(&sk_pke);
    sk.extend_from_slice(&pk);
    sk.extend_from_slice(&h_pk);
    sk.extend_from_slice(z);

    Ok((pk, sk))
}

/// IND-CCA2 encapsulation of the 32-byte input m.
pub(crate) fn kem_encaps<V: SaberVariant>(
    m: &[u8; SABER_KEY_BYTES],
    pk: &[u8],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    if pk.len() != kem_public_key_size(V::L, V::EP) {
        return Err(Error::InvalidKey {
            key_type: "Saber KEM public",
            reason: "incorrect length",
        });
    }

    let hashed_m = Zeroizing::new(h_parts(&[m]));
    let hashed_pk = h_parts(&[pk]);

    // (k || r) = G(H(m) || H(pk))
    let rk = Zeroizing::new(g_parts(&[hashed_m.as_slice(), &hashed_pk]));
    let (k, r) = rk.split_at(SABER_SS_BYTES);

    let mut coins = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
    coins.copy_from_slice(r);
    let ct = ind_cpa::encrypt::<V>(&hashed_m, &coins, pk)?;

    let r_prime = h_parts(&[&ct]);
    let ss = h_parts(&[k, &r_prime]);

    Ok((ct, Zeroizing::new(ss)))
}

/// IND-CCA2 decapsulation.
///
/// Total on every ciphertext of the right length; never signals
/// authenticity to the caller.
pub(crate) fn kem_decaps<V: SaberVariant>(ct: &[u8], sk: &[u8]) -> Result<SharedSecretBytes> {
    if ct.len() != kem_ciphertext_size(V::L, V::EP, V::ET) {
        return Err(Error::InvalidCiphertext {
            algorithm: "Saber KEM",
            reason: "incorrect length",
        });
    }
    if sk.len() != kem_secret_key_size(V::L, V::EQ, V::EP) {
        return Err(Error::InvalidKey {
            key_type: "Saber KEM secret",
            reason: "incorrect length",
        });
    }

    // sk = sk_pke || pk || H(pk) || z
    let sk_pke_len = pke_secret_key_size(V::L, V::EQ);
    let pk_len = pke_public_key_size(V::L, V::EP);
    let (sk_pke, rest) = sk.split_at(sk_pke_len);
    let (pk, rest) = rest.split_at(pk_len);
    let (h_pk, z) = rest.split_at(SABER_SS_BYTES);

    let m = Zeroizing::new(ind_cpa::decrypt::<V>(ct, sk_pke)?);

    // (k || r) = G(m || H(pk))
    let rk = Zeroizing::new(g_parts(&[m.as_slice(), h_pk]));
    let (k, r) = rk.split_at(SABER_SS_BYTES);

    let mut coins = Zeroizing::new([0u8; SABER_NOISE_SEED_BYTES]);
    coins.copy_from_slice(r);
    let ct_prime = ind_cpa::encrypt::<V>(&m, &coins, pk)?;

    // Full-width mask; all-ones exactly when the re-encryption matches
    let mask = ct_eq_mask(&ct_prime, ct);
    let mut temp = Zeroizing::new([0u8; SABER_KEY_BYTES]);
    ct_select_bytes(mask, temp.as_mut_slice(), k, z);

    let r_prime = h_parts(&[ct]);
    let ss = h_parts(&[temp.as_slice(), &r_prime]);

    Ok(Zeroizing::new(ss))
}
