//! Lattice arithmetic primitives for the Saber key encapsulation mechanism
//!
//! This crate carries the algebra the KEM is assembled from: ring elements
//! over power-of-two moduli, degree-255 polynomials with Karatsuba
//! multiplication, bit-packed serialization, polynomial matrices/vectors,
//! and the secret samplers. Everything here is deterministic in its byte
//! inputs; randomness and hashing live with the callers.

pub mod error;
pub mod poly;

pub use error::{Error, Result};
