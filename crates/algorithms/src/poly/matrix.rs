//! Matrix and vector operations over the quotient ring
//!
//! Row-major storage of rows x cols polynomials. The shapes used by the
//! KEM are the square l x l public matrix and l x 1 column vectors; shape
//! requirements (square lhs for products, single column for serialization
//! and inner products) are debug-asserted at the call sites, which all pass
//! statically known dimensions.

use zeroize::Zeroize;

use super::polynomial::Poly;
use super::serialize::poly_bytes_len;
use crate::error::{Error, Result};

/// Matrix of polynomials over the 16-bit carrier ring, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct PolyMatrix {
    rows: usize,
    cols: usize,
    polys: Vec<Poly>,
}

impl PolyMatrix {
    /// Creates a zero matrix of the given shape.
    pub fn zero(rows: usize, cols: usize) -> Self {
        PolyMatrix {
            rows,
            cols,
            polys: vec![Poly::zero(); rows * cols],
        }
    }

    /// Builds a matrix from row-major polynomials.
    pub fn from_polys(rows: usize, cols: usize, polys: Vec<Poly>) -> Result<Self> {
        if polys.len() != rows * cols {
            return Err(Error::Parameter {
                name: "polys",
                reason: "element count does not match matrix shape",
            });
        }
        Ok(PolyMatrix { rows, cols, polys })
    }

    /// Deserializes a column vector from the row-major concatenation of
    /// per-polynomial packings at `bits` bits per coefficient.
    pub fn from_bytes(rows: usize, bits: usize, bytes: &[u8]) -> Result<Self> {
        let poly_blen = poly_bytes_len(bits);
        if bytes.len() != rows * poly_blen {
            return Err(Error::Length {
                context: "poly vector unpack",
                expected: rows * poly_blen,
                actual: bytes.len(),
            });
        }

        let mut polys = Vec::with_capacity(rows);
        for chunk in bytes.chunks_exact(poly_blen) {
            polys.push(Poly::from_bytes(chunk, bits)?);
        }

        Ok(PolyMatrix {
            rows,
            cols: 1,
            polys,
        })
    }

    /// Serializes a column vector into `out`, one packed polynomial per row.
    pub fn write_bytes(&self, bits: usize, out: &mut [u8]) -> Result<()> {
        debug_assert_eq!(self.cols, 1);

        let poly_blen = poly_bytes_len(bits);
        if out.len() != self.rows * poly_blen {
            return Err(Error::Length {
                context: "poly vector pack",
                expected: self.rows * poly_blen,
                actual: out.len(),
            });
        }

        for (poly, chunk) in self.polys.iter().zip(out.chunks_exact_mut(poly_blen)) {
            poly.write_bytes(bits, chunk)?;
        }

        Ok(())
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at (row, col).
    pub fn entry(&self, row: usize, col: usize) -> &Poly {
        &self.polys[row * self.cols + col]
    }

    /// Mutable element at (row, col).
    pub fn entry_mut(&mut self, row: usize, col: usize) -> &mut Poly {
        &mut self.polys[row * self.cols + col]
    }

    /// Element-wise sum of two equally shaped matrices.
    pub fn add(&self, rhs: &PolyMatrix) -> PolyMatrix {
        debug_assert_eq!((self.rows, self.cols), (rhs.rows, rhs.cols));

        let polys = self
            .polys
            .iter()
            .zip(rhs.polys.iter())
            .map(|(a, b)| *a + *b)
            .collect();
        PolyMatrix {
            rows: self.rows,
            cols: self.cols,
            polys,
        }
    }

    /// Left shift of every coefficient of every element.
    pub fn shl(&self, off: usize) -> PolyMatrix {
        PolyMatrix {
            rows: self.rows,
            cols: self.cols,
            polys: self.polys.iter().map(|p| *p << off).collect(),
        }
    }

    /// Right shift of every coefficient of every element.
    pub fn shr(&self, off: usize) -> PolyMatrix {
        PolyMatrix {
            rows: self.rows,
            cols: self.cols,
            polys: self.polys.iter().map(|p| *p >> off).collect(),
        }
    }

    /// Reduces every coefficient modulo 2^bits.
    pub fn reduce(&self, bits: usize) -> PolyMatrix {
        PolyMatrix {
            rows: self.rows,
            cols: self.cols,
            polys: self.polys.iter().map(|p| p.reduce(bits)).collect(),
        }
    }

    /// Transpose of a square matrix.
    pub fn transpose(&self) -> PolyMatrix {
        debug_assert_eq!(self.rows, self.cols);

        let mut res = PolyMatrix::zero(self.cols, self.rows);
        for i in 0..self.cols {
            for j in 0..self.rows {
                *res.entry_mut(i, j) = *self.entry(j, i);
            }
        }
        res
    }

    /// Product of a square matrix with a column vector.
    pub fn mat_vec_mul(&self, vec: &PolyMatrix) -> PolyMatrix {
        debug_assert_eq!(self.rows, self.cols);
        debug_assert_eq!(vec.cols, 1);
        debug_assert_eq!(self.cols, vec.rows);

        let mut res = PolyMatrix::zero(self.rows, 1);
        for i in 0..self.rows {
            let mut acc = Poly::zero();
            for j in 0..self.cols {
                acc += *self.entry(i, j) * *vec.entry(j, 0);
            }
            *res.entry_mut(i, 0) = acc;
        }
        res
    }

    /// Inner product of two column vectors.
    pub fn inner_prod(&self, rhs: &PolyMatrix) -> Poly {
        debug_assert_eq!(self.cols, 1);
        debug_assert_eq!(rhs.cols, 1);
        debug_assert_eq!(self.rows, rhs.rows);

        let mut acc = Poly::zero();
        for i in 0..self.rows {
            acc += *self.entry(i, 0) * *rhs.entry(i, 0);
        }
        acc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly::{Zq, N};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaChaRng;

    fn random_vec<R: Rng>(rng: &mut R, rows: usize, bits: usize) -> PolyMatrix {
        let polys = (0..rows)
            .map(|_| {
                Poly::from_coeffs(core::array::from_fn(|_| {
                    Zq::new(rng.gen::<u16>() & ((1 << bits) - 1))
                }))
            })
            .collect();
        PolyMatrix::from_polys(rows, 1, polys).unwrap()
    }

    fn identity(l: usize) -> PolyMatrix {
        let mut m = PolyMatrix::zero(l, l);
        for i in 0..l {
            let mut one = [Zq::ZERO; N];
            one[0] = Zq::new(1);
            *m.entry_mut(i, i) = Poly::from_coeffs(one);
        }
        m
    }

    #[test]
    fn vector_codec_round_trip() {
        let mut rng = ChaChaRng::seed_from_u64(21);
        for rows in [2usize, 3, 4] {
            for bits in [1usize, 3, 4, 5, 6, 10, 12, 13] {
                let v = random_vec(&mut rng, rows, bits);

                let mut bytes = vec![0u8; rows * poly_bytes_len(bits)];
                v.write_bytes(bits, &mut bytes).unwrap();
                let decoded = PolyMatrix::from_bytes(rows, bits, &bytes).unwrap();
                assert_eq!(decoded, v);
            }
        }
    }

    #[test]
    fn identity_times_vector_is_vector() {
        let mut rng = ChaChaRng::seed_from_u64(22);
        for l in [2usize, 3, 4] {
            let v = random_vec(&mut rng, l, 13);
            assert_eq!(identity(l).mat_vec_mul(&v), v);
        }
    }

    #[test]
    fn transpose_involutes() {
        let mut rng = ChaChaRng::seed_from_u64(23);
        let polys = (0..9)
            .map(|_| Poly::from_coeffs(core::array::from_fn(|_| Zq::new(rng.gen()))))
            .collect();
        let m = PolyMatrix::from_polys(3, 3, polys).unwrap();

        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().entry(1, 2), m.entry(2, 1));
    }

    #[test]
    fn shifts_and_reduce_are_elementwise() {
        let v = PolyMatrix::from_polys(2, 1, vec![Poly::from_coeffs([Zq::new(0x3ff); N]); 2])
            .unwrap();

        let shifted = v.shl(3);
        assert_eq!(shifted.entry(0, 0).coeff(0).raw(), 0x3ff << 3);

        let reduced = shifted.reduce(10);
        assert_eq!(reduced.entry(1, 0).coeff(255).raw(), (0x3ff << 3) & 0x3ff);

        assert_eq!(v.shr(5).entry(0, 0).coeff(7).raw(), 0x3ff >> 5);
    }

    #[test]
    fn from_polys_rejects_shape_mismatch() {
        assert!(PolyMatrix::from_polys(2, 2, vec![Poly::zero(); 3]).is_err());
    }
}
