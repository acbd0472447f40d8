//! Secret samplers over XOF output blocks
//!
//! Both samplers are deterministic functions of their input block: the
//! caller squeezes mu * N / 8 bytes out of SHAKE-128 and hands them over.
//! The centered binomial sampler works word-parallel: the block is read as
//! packed mu-bit fields, the mu bit planes are summed with masked adds, and
//! each field then holds two popcounts whose difference is the coefficient.
//! Negative results wrap in the 16-bit carrier, which is exactly the
//! two's-complement residue later arithmetic expects.

use super::polynomial::Poly;
use super::zq::Zq;
use super::N;
use crate::error::{Error, Result};
use internal::endian::{u32_from_le_partial, u64_from_le_partial};

/// Block length in bytes consumed per polynomial for a given mu.
pub const fn sample_bytes_len(mu: usize) -> usize {
    (mu * N) / 8
}

/// Centered binomial sampling with parameter mu in {6, 8, 10}.
///
/// Coefficient i is popcount(field 2i) - popcount(field 2i+1) over mu/2-bit
/// halves, landing in [-mu/2, mu/2].
pub fn cbd(bytes: &[u8], mu: usize) -> Result<Poly> {
    if !matches!(mu, 6 | 8 | 10) {
        return Err(Error::Parameter {
            name: "mu",
            reason: "centered binomial sampling requires mu in {6, 8, 10}",
        });
    }
    if bytes.len() != sample_bytes_len(mu) {
        return Err(Error::Length {
            context: "cbd sample block",
            expected: sample_bytes_len(mu),
            actual: bytes.len(),
        });
    }

    let mut coeffs = [Zq::ZERO; N];

    match mu {
        6 => {
            // 3 bytes hold four 6-bit fields; bit planes summed into
            // 3-bit popcount lanes
            const MASK: u32 = 0b001_001_001_001_001_001_001_001;
            for (chunk, block) in bytes.chunks_exact(3).zip(coeffs.chunks_exact_mut(4)) {
                let word = u32_from_le_partial(chunk);
                let hw = (word & MASK) + ((word >> 1) & MASK) + ((word >> 2) & MASK);

                for (k, c) in block.iter_mut().enumerate() {
                    let a = ((hw >> (6 * k)) & 0x7) as u16;
                    let b = ((hw >> (6 * k + 3)) & 0x7) as u16;
                    *c = Zq::new(a) - Zq::new(b);
                }
            }
        }
        8 => {
            // 4 bytes hold four 8-bit fields; 4-bit popcount lanes
            const MASK: u32 = 0x1111_1111;
            for (chunk, block) in bytes.chunks_exact(4).zip(coeffs.chunks_exact_mut(4)) {
                let word = u32_from_le_partial(chunk);
                let hw =
                    (word & MASK) + ((word >> 1) & MASK) + ((word >> 2) & MASK) + ((word >> 3) & MASK);

                for (k, c) in block.iter_mut().enumerate() {
                    let a = ((hw >> (8 * k)) & 0xf) as u16;
                    let b = ((hw >> (8 * k + 4)) & 0xf) as u16;
                    *c = Zq::new(a) - Zq::new(b);
                }
            }
        }
        _ => {
            // 5 bytes hold four 10-bit fields; 5-bit popcount lanes
            const MASK: u64 = 0b00001_00001_00001_00001_00001_00001_00001_00001;
            for (chunk, block) in bytes.chunks_exact(5).zip(coeffs.chunks_exact_mut(4)) {
                let word = u64_from_le_partial(chunk);
                let hw = (word & MASK)
                    + ((word >> 1) & MASK)
                    + ((word >> 2) & MASK)
                    + ((word >> 3) & MASK)
                    + ((word >> 4) & MASK);

                for (k, c) in block.iter_mut().enumerate() {
                    let a = ((hw >> (10 * k)) & 0x1f) as u16;
                    let b = ((hw >> (10 * k + 5)) & 0x1f) as u16;
                    *c = Zq::new(a) - Zq::new(b);
                }
            }
        }
    }

    Ok(Poly::from_coeffs(coeffs))
}

/// Uniform-profile sampling, mu = 2.
///
/// Each coefficient is the centered difference of its two stream bits,
/// the degenerate form of the binomial sampler above.
pub fn uniform(bytes: &[u8]) -> Result<Poly> {
    if bytes.len() != sample_bytes_len(2) {
        return Err(Error::Length {
            context: "uniform sample block",
            expected: sample_bytes_len(2),
            actual: bytes.len(),
        });
    }

    let mut coeffs = [Zq::ZERO; N];
    for (byte, block) in bytes.iter().zip(coeffs.chunks_exact_mut(4)) {
        for (k, c) in block.iter_mut().enumerate() {
            let b0 = ((byte >> (2 * k)) & 1) as u16;
            let b1 = ((byte >> (2 * k + 1)) & 1) as u16;
            *c = Zq::new(b0) - Zq::new(b1);
        }
    }

    Ok(Poly::from_coeffs(coeffs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    // Bit-at-a-time reference for the word-parallel sampler.
    fn cbd_reference(bytes: &[u8], mu: usize) -> [i32; N] {
        let mut out = [0i32; N];
        let bit = |i: usize| ((bytes[i / 8] >> (i % 8)) & 1) as i32;

        for (i, c) in out.iter_mut().enumerate() {
            let base = i * mu;
            let mut a = 0;
            let mut b = 0;
            for j in 0..mu / 2 {
                a += bit(base + j);
                b += bit(base + mu / 2 + j);
            }
            *c = a - b;
        }
        out
    }

    fn as_signed(c: crate::poly::Zq) -> i32 {
        c.raw() as i16 as i32
    }

    #[test]
    fn matches_bit_reference_for_all_mu() {
        let mut rng = ChaChaRng::seed_from_u64(31);
        for mu in [6usize, 8, 10] {
            let mut bytes = vec![0u8; sample_bytes_len(mu)];
            rng.fill(bytes.as_mut_slice());

            let poly = cbd(&bytes, mu).unwrap();
            let reference = cbd_reference(&bytes, mu);
            for i in 0..N {
                assert_eq!(as_signed(poly.coeff(i)), reference[i]);
            }
        }
    }

    #[test]
    fn coefficients_stay_in_centered_range() {
        let mut rng = ChaChaRng::seed_from_u64(32);
        for mu in [6usize, 8, 10] {
            let mut bytes = vec![0u8; sample_bytes_len(mu)];
            rng.fill(bytes.as_mut_slice());

            let poly = cbd(&bytes, mu).unwrap();
            let bound = (mu / 2) as i32;
            for i in 0..N {
                let c = as_signed(poly.coeff(i));
                assert!(c >= -bound && c <= bound);
            }
        }
    }

    #[test]
    fn uniform_matches_degenerate_cbd() {
        let mut rng = ChaChaRng::seed_from_u64(33);
        let mut bytes = vec![0u8; sample_bytes_len(2)];
        rng.fill(bytes.as_mut_slice());

        let poly = uniform(&bytes).unwrap();
        let reference = cbd_reference(&bytes, 2);
        for i in 0..N {
            let c = as_signed(poly.coeff(i));
            assert_eq!(c, reference[i]);
            assert!((-1..=1).contains(&c));
        }
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(cbd(&[0u8; 64], 2).is_err());
        assert!(cbd(&[0u8; 100], 8).is_err());
        assert!(uniform(&[0u8; 63]).is_err());
    }
}
