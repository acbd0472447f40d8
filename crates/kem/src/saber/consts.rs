//! Constant rounding polynomials.
//!
//! h1 and h2 recenter the floor divisions that the power-of-two rounding
//! steps perform; h is the l-row vector of h1 added before the public-key
//! rounding.

use algorithms::poly::{Poly, PolyMatrix, Zq, N};

use super::params::SaberVariant;

/// h1: every coefficient is 2^(EQ - EP - 1).
pub fn poly_h1<V: SaberVariant>() -> Poly {
    let coeff = Zq::new(1u16 << (V::EQ - V::EP - 1));
    Poly::from_coeffs([coeff; N])
}

/// h: the l-row column vector whose rows are all h1.
pub fn vec_h<V: SaberVariant>() -> PolyMatrix {
    let h1 = poly_h1::<V>();
    let mut h = PolyMatrix::zero(V::L, 1);
    for i in 0..V::L {
        *h.entry_mut(i, 0) = h1;
    }
    h
}

/// h2: every coefficient is 2^(EP - 2) - 2^(EP - ET - 1) + 2^(EQ - EP - 1).
pub fn poly_h2<V: SaberVariant>() -> Poly {
    let v = (1u16 << (V::EP - 2)) - (1u16 << (V::EP - V::ET - 1)) + (1u16 << (V::EQ - V::EP - 1));
    Poly::from_coeffs([Zq::new(v); N])
}
