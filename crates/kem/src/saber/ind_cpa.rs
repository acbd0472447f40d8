//! Saber CPA-secure public key encryption.
//!
//! The three routines are deterministic in their seed inputs; the CCA
//! layer derives those seeds from its hash chain. Byte layouts are fixed
//! as pk = packed rounded vector || matrix seed and
//! ct = packed rounded vector || packed message rounding polynomial.

use algorithms::poly::serialize::poly_bytes_len;
use algorithms::poly::{Poly, PolyMatrix};
use params::pqc::saber::{pke_ciphertext_size, pke_public_key_size, pke_secret_key_size};
use zeroize::Zeroizing;

use super::consts;
use super::gen::{gen_matrix, gen_secret};
use super::hash::xof_read;
use super::params::{SaberVariant, SABER_NOISE_SEED_BYTES, SABER_SEED_BYTES};
use crate::error::{Error, Result};

/// Saber PKE key generation.
///
/// Expands `seed_a` through SHAKE-128 before use, so the public key carries
/// an already-hashed matrix seed. Returns (public key, secret key).
pub fn keygen<V: SaberVariant>(
    seed_a: &[u8; SABER_SEED_BYTES],
    seed_s: &[u8; SABER_NOISE_SEED_BYTES],
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut seed_a_prime = [0u8; SABER_SEED_BYTES];
    xof_read(seed_a, &mut seed_a_prime);

    let a = gen_matrix::<V>(&seed_a_prime)?;
    let s = Zeroizing::new(gen_secret::<V>(seed_s)?);
    let h = consts::vec_h::<V>();

    // b = (A^T s + h) mod q, rounded down to p bits
    let b = a.transpose().mat_vec_mul(&s).add(&h);
    let b_p = b.shr(V::EQ - V::EP).reduce(V::EP);

    let mut sk = vec![0u8; pke_secret_key_size(V::L, V::EQ)];
    s.write_bytes(V::EQ, &mut sk)?;

    let mut pk = vec![0u8; pke_public_key_size(V::L, V::EP)];
    let vec_len = pk.len() - SABER_SEED_BYTES;
    b_p.write_bytes(V::EP, &mut pk[..vec_len])?;
    pk[vec_len..].copy_from_slice(&seed_a_prime);

    Ok((pk, sk))
}

/// Saber PKE encryption of a 32-byte message under encryption coins
/// `seed_s`.
pub fn encrypt<V: SaberVariant>(
    msg: &[u8; 32],
    seed_s: &[u8; SABER_NOISE_SEED_BYTES],
    pk: &[u8],
) -> Result<Vec<u8>> {
    let pk_len = pke_public_key_size(V::L, V::EP);
    if pk.len() != pk_len {
        return Err(Error::InvalidKey {
            key_type: "Saber PKE public",
            reason: "incorrect length",
        });
    }
    let (b_bytes, seed_a) = pk.split_at(pk_len - SABER_SEED_BYTES);

    let a = gen_matrix::<V>(seed_a)?;
    let s_prime = Zeroizing::new(gen_secret::<V>(seed_s)?);
    let h = consts::vec_h::<V>();

    // b' = (A s' + h) mod q, rounded down to p bits
    let b_prime = a.mat_vec_mul(&s_prime).add(&h);
    let b_prime_p = b_prime.shr(V::EQ - V::EP).reduce(V::EP);

    // v' = <b, s' mod p>
    let b = PolyMatrix::from_bytes(V::L, V::EP, b_bytes)?;
    let v_prime = b.inner_prod(&s_prime.reduce(V::EP));

    // The message lifts to R2 and scales to the top bit of Rp
    let m = Poly::from_bytes(msg, 1)?;
    let m_p = (m << (V::EP - 1)).reduce(V::EP);

    let h1 = consts::poly_h1::<V>();
    let c_m = ((v_prime - m_p + h1.reduce(V::EP)) >> (V::EP - V::ET)).reduce(V::ET);

    let mut ct = vec![0u8; pke_ciphertext_size(V::L, V::EP, V::ET)];
    let bvec_len = V::L * poly_bytes_len(V::EP);
    b_prime_p.write_bytes(V::EP, &mut ct[..bvec_len])?;
    c_m.write_bytes(V::ET, &mut ct[bvec_len..])?;

    Ok(ct)
}

/// Saber PKE decryption, recovering the 32-byte message.
pub fn decrypt<V: SaberVariant>(ct: &[u8], sk: &[u8]) -> Result<[u8; 32]> {
    if ct.len() != pke_ciphertext_size(V::L, V::EP, V::ET) {
        return Err(Error::InvalidCiphertext {
            algorithm: "Saber PKE",
            reason: "incorrect length",
        });
    }
    if sk.len() != pke_secret_key_size(V::L, V::EQ) {
        return Err(Error::InvalidKey {
            key_type: "Saber PKE secret",
            reason: "incorrect length",
        });
    }

    let s = Zeroizing::new(PolyMatrix::from_bytes(V::L, V::EQ, sk)?);

    let bvec_len = V::L * poly_bytes_len(V::EP);
    let (b_bytes, cm_bytes) = ct.split_at(bvec_len);

    let c_m = Poly::from_bytes(cm_bytes, V::ET)? << (V::EP - V::ET);
    let b_prime = PolyMatrix::from_bytes(V::L, V::EP, b_bytes)?;

    // v = <b', s mod p>
    let v = b_prime.inner_prod(&s.reduce(V::EP));

    let h2 = consts::poly_h2::<V>();
    let m_p = ((v - c_m.reduce(V::EP) + h2.reduce(V::EP)) >> (V::EP - 1)).reduce(1);

    let mut msg = [0u8; 32];
    m_p.write_bytes(1, &mut msg)?;

    Ok(msg)
}
