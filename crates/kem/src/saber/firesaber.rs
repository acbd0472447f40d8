//! FireSaber KEM (NIST PQC security level 5).

use super::kem::SaberKem;
use super::params::FireSaberParamsImpl;

/// FireSaber KEM, implementing `api::Kem`.
pub type FireSaber = SaberKem<FireSaberParamsImpl>;
