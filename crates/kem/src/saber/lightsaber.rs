//! LightSaber KEM (NIST PQC security level 1).

use super::kem::SaberKem;
use super::params::LightSaberParamsImpl;

/// LightSaber KEM, implementing `api::Kem`.
pub type LightSaber = SaberKem<LightSaberParamsImpl>;
