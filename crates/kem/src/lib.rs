//! Saber Key Encapsulation Mechanism
//!
//! This crate implements the Saber KEM, a lattice-based key encapsulation
//! mechanism built on the Module Learning-With-Rounding problem. It
//! provides IND-CCA2 security via a Fujisaki-Okamoto transform with
//! implicit rejection.

pub mod error;
pub mod saber;

// Re-exports
pub use saber::{FireSaber, LightSaber, Saber, UFireSaber, ULightSaber, USaber};
