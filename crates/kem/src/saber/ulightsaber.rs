//! uLightSaber KEM (LightSaber with uniform secrets and q = 2^12).

use super::kem::SaberKem;
use super::params::ULightSaberParamsImpl;

/// uLightSaber KEM, implementing `api::Kem`.
pub type ULightSaber = SaberKem<ULightSaberParamsImpl>;
