//! Internal utilities shared across the Saber KEM workspace
//!
//! Nothing in this crate is algorithm-specific: it carries the
//! constant-time byte primitives and the little-endian word codecs that
//! the lattice arithmetic and the CCA transform are built on.

pub mod constant_time;
pub mod endian;
