//! Deterministic expansion of seeds into the public matrix and secrets.
//!
//! Both generators squeeze one SHAKE-128 stream per seed and partition it
//! into per-polynomial blocks, so identical seeds produce identical
//! structures on every platform.

use algorithms::poly::sampling::{self, sample_bytes_len};
use algorithms::poly::serialize::poly_bytes_len;
use algorithms::poly::{Poly, PolyMatrix};
use zeroize::Zeroizing;

use super::hash::xof_read;
use super::params::SaberVariant;
use crate::error::Result;

/// Expands a seed into the public matrix A in Rq^(l x l), row-major.
///
/// The XOF stream is cut into l*l blocks of EQ * N / 8 bytes, each decoded
/// as one matrix entry at width EQ.
pub(crate) fn gen_matrix<V: SaberVariant>(seed: &[u8]) -> Result<PolyMatrix> {
    let poly_blen = poly_bytes_len(V::EQ);
    let mut buf = vec![0u8; V::L * V::L * poly_blen];
    xof_read(seed, &mut buf);

    let mut polys = Vec::with_capacity(V::L * V::L);
    for block in buf.chunks_exact(poly_blen) {
        polys.push(Poly::from_bytes(block, V::EQ)?);
    }

    Ok(PolyMatrix::from_polys(V::L, V::L, polys)?)
}

/// Expands a seed into the secret vector s in Rq^(l x 1).
///
/// Each of the l blocks of MU * N / 8 squeezed bytes becomes one row, via
/// the centered binomial sampler or the uniform one per the profile.
pub(crate) fn gen_secret<V: SaberVariant>(seed: &[u8]) -> Result<PolyMatrix> {
    let poly_blen = sample_bytes_len(V::MU);
    let mut buf = Zeroizing::new(vec![0u8; V::L * poly_blen]);
    xof_read(seed, buf.as_mut_slice());

    let mut polys = Vec::with_capacity(V::L);
    for block in buf.chunks_exact(poly_blen) {
        let poly = if V::UNIFORM {
            sampling::uniform(block)?
        } else {
            sampling::cbd(block, V::MU)?
        };
        polys.push(poly);
    }

    Ok(PolyMatrix::from_polys(V::L, 1, polys)?)
}
