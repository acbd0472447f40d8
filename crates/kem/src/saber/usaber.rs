//! uSaber KEM (Saber with uniform secrets and q = 2^12).

use super::kem::SaberKem;
use super::params::USaberParamsImpl;

/// uSaber KEM, implementing `api::Kem`.
pub type USaber = SaberKem<USaberParamsImpl>;
