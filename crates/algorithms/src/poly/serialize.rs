//! Bit-packed codecs between degree-255 polynomials and byte strings
//!
//! A polynomial with eps-bit coefficients serializes to eps * N / 8 bytes:
//! coefficient i occupies bit range [i*eps, (i+1)*eps) of the little-endian
//! bit stream, with bit 0 of the coefficient at the least significant end.
//! Both directions process blocks of 8 coefficients against eps bytes
//! through a 128-bit accumulator, keeping the hot loop branch-free; at the
//! widest supported field (13 bits) a block spans 104 bits.

use super::zq::Zq;
use super::N;
use crate::error::{Error, Result};
use internal::endian::{u128_from_le_partial, u128_to_le_partial};

/// Coefficient widths the codec accepts, in bits.
pub const SUPPORTED_BITS: [usize; 8] = [1, 3, 4, 5, 6, 10, 12, 13];

/// Serialized byte length of a polynomial with `bits`-bit coefficients.
pub const fn poly_bytes_len(bits: usize) -> usize {
    (bits * N) / 8
}

fn ensure_supported(bits: usize) -> Result<()> {
    if SUPPORTED_BITS.contains(&bits) {
        Ok(())
    } else {
        Err(Error::Parameter {
            name: "bits",
            reason: "unsupported coefficient width",
        })
    }
}

/// Packs 256 coefficients at `bits` bits each into `out`.
///
/// Coefficients are masked to `bits` bits as they are packed, so carrier
/// values above the target modulus serialize as their reduced residues.
pub fn pack(coeffs: &[Zq; N], bits: usize, out: &mut [u8]) -> Result<()> {
    ensure_supported(bits)?;
    if out.len() != poly_bytes_len(bits) {
        return Err(Error::Length {
            context: "poly pack",
            expected: poly_bytes_len(bits),
            actual: out.len(),
        });
    }

    let mask = (1u128 << bits) - 1;
    for (block, chunk) in coeffs.chunks_exact(8).zip(out.chunks_exact_mut(bits)) {
        let mut word = 0u128;
        for (i, c) in block.iter().enumerate() {
            word |= ((c.raw() as u128) & mask) << (i * bits);
        }
        u128_to_le_partial(word, chunk);
    }

    Ok(())
}

/// Unpacks `bits`-bit fields from `bytes` into 256 coefficients.
pub fn unpack(bytes: &[u8], bits: usize) -> Result<[Zq; N]> {
    ensure_supported(bits)?;
    if bytes.len() != poly_bytes_len(bits) {
        return Err(Error::Length {
            context: "poly unpack",
            expected: poly_bytes_len(bits),
            actual: bytes.len(),
        });
    }

    let mask = (1u128 << bits) - 1;
    let mut coeffs = [Zq::ZERO; N];
    for (block, chunk) in coeffs.chunks_exact_mut(8).zip(bytes.chunks_exact(bits)) {
        let word = u128_from_le_partial(chunk);
        for (i, c) in block.iter_mut().enumerate() {
            *c = Zq::new(((word >> (i * bits)) & mask) as u16);
        }
    }

    Ok(coeffs)
}
