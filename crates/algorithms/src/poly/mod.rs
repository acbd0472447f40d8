//! Polynomial arithmetic over power-of-two moduli
//!
//! The quotient ring is Zq[X]/(X^N + 1) with N = 256 and q = 2^eps for
//! eps <= 13. Coefficients live in a 16-bit carrier; reduction to the true
//! modulus is a bit mask applied at serialization or modulus-switch time.

pub mod karatsuba;
pub mod matrix;
pub mod polynomial;
pub mod sampling;
pub mod serialize;
pub mod zq;

/// Degree bound of the quotient ring: every polynomial has N coefficients.
pub const N: usize = 256;

pub use matrix::PolyMatrix;
pub use polynomial::Poly;
pub use zq::Zq;
