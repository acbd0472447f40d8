//! uFireSaber KEM (FireSaber with uniform secrets and q = 2^12).

use super::kem::SaberKem;
use super::params::UFireSaberParamsImpl;

/// uFireSaber KEM, implementing `api::Kem`.
pub type UFireSaber = SaberKem<UFireSaberParamsImpl>;
