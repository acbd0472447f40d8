//! Degree-255 polynomials in the quotient ring Zq[X]/(X^N + 1)
//!
//! The coefficient array is always fully initialised and lives in the
//! 16-bit carrier ring; see `zq` for the reduction discipline.

use core::ops::{Add, AddAssign, Mul, Neg, Shl, Shr, Sub};
use zeroize::Zeroize;

use super::karatsuba::karamul;
use super::serialize;
use super::zq::Zq;
use super::N;
use crate::error::Result;

/// Polynomial with N = 256 coefficients over the 16-bit carrier ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: [Zq; N],
}

impl Poly {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Poly {
            coeffs: [Zq::ZERO; N],
        }
    }

    /// Builds a polynomial from a full coefficient array.
    pub fn from_coeffs(coeffs: [Zq; N]) -> Self {
        Poly { coeffs }
    }

    /// Decodes a polynomial from a byte string of `bits`-bit fields.
    pub fn from_bytes(bytes: &[u8], bits: usize) -> Result<Self> {
        Ok(Poly {
            coeffs: serialize::unpack(bytes, bits)?,
        })
    }

    /// Encodes the polynomial into `out` at `bits` bits per coefficient.
    /// Coefficients are reduced to `bits` bits as they are packed.
    pub fn write_bytes(&self, bits: usize, out: &mut [u8]) -> Result<()> {
        serialize::pack(&self.coeffs, bits, out)
    }

    /// Encodes the polynomial into a fresh byte vector.
    pub fn to_bytes(&self, bits: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; serialize::poly_bytes_len(bits)];
        self.write_bytes(bits, &mut out)?;
        Ok(out)
    }

    /// Coefficient at index `idx`, which must be below N.
    #[inline(always)]
    pub fn coeff(&self, idx: usize) -> Zq {
        self.coeffs[idx]
    }

    /// View of the coefficient array.
    pub fn as_coeffs(&self) -> &[Zq; N] {
        &self.coeffs
    }

    /// Reduces every coefficient modulo 2^bits.
    pub fn reduce(&self, bits: usize) -> Self {
        let mut res = [Zq::ZERO; N];
        for (r, c) in res.iter_mut().zip(self.coeffs.iter()) {
            *r = c.reduce(bits);
        }
        Poly { coeffs: res }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for Poly {
    type Output = Poly;

    fn add(self, rhs: Poly) -> Poly {
        let mut res = [Zq::ZERO; N];
        for i in 0..N {
            res[i] = self.coeffs[i] + rhs.coeffs[i];
        }
        Poly { coeffs: res }
    }
}

impl AddAssign for Poly {
    fn add_assign(&mut self, rhs: Poly) {
        *self = *self + rhs;
    }
}

impl Sub for Poly {
    type Output = Poly;

    fn sub(self, rhs: Poly) -> Poly {
        let mut res = [Zq::ZERO; N];
        for i in 0..N {
            res[i] = self.coeffs[i] - rhs.coeffs[i];
        }
        Poly { coeffs: res }
    }
}

impl Neg for Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        let mut res = [Zq::ZERO; N];
        for i in 0..N {
            res[i] = -self.coeffs[i];
        }
        Poly { coeffs: res }
    }
}

impl Mul for Poly {
    type Output = Poly;

    /// Multiplication in the quotient ring, via Karatsuba.
    fn mul(self, rhs: Poly) -> Poly {
        let prod = karamul(&self.coeffs, &rhs.coeffs);
        let mut res = [Zq::ZERO; N];
        res.copy_from_slice(&prod);
        Poly { coeffs: res }
    }
}

impl Shl<usize> for Poly {
    type Output = Poly;

    fn shl(self, off: usize) -> Poly {
        let mut res = [Zq::ZERO; N];
        for i in 0..N {
            res[i] = self.coeffs[i] << off;
        }
        Poly { coeffs: res }
    }
}

impl Shr<usize> for Poly {
    type Output = Poly;

    fn shr(self, off: usize) -> Poly {
        let mut res = [Zq::ZERO; N];
        for i in 0..N {
            res[i] = self.coeffs[i] >> off;
        }
        Poly { coeffs: res }
    }
}
