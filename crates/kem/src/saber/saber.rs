//! Saber KEM (NIST PQC security level 3).

use super::kem::SaberKem;
use super::params::SaberParamsImpl;

/// Saber KEM, implementing `api::Kem`.
pub type Saber = SaberKem<SaberParamsImpl>;
