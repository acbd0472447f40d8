//! Constants for the SABER key encapsulation mechanism

/// SABER polynomial degree
pub const SABER_N: usize = 256;

/// Seed size for matrix generation in bytes
pub const SABER_SEED_BYTES: usize = 32;

/// Seed size for secret generation in bytes
pub const SABER_NOISE_SEED_BYTES: usize = 32;

/// Size of the implicit-rejection randomness `z` in bytes
pub const SABER_KEY_BYTES: usize = 32;

/// SHA3-256 digest size, the session key size for every variant
pub const SABER_SHARED_SECRET_SIZE: usize = 32;

/// Byte length of the inner PKE public key: packed rounded vector plus the
/// 32-byte matrix seed
pub const fn pke_public_key_size(l: usize, ep: usize) -> usize {
    (l * ep * SABER_N) / 8 + SABER_SEED_BYTES
}

/// Byte length of the inner PKE secret key: the packed secret vector
pub const fn pke_secret_key_size(l: usize, eq: usize) -> usize {
    (l * eq * SABER_N) / 8
}

/// Byte length of the PKE ciphertext: packed rounded vector plus the packed
/// message rounding polynomial
pub const fn pke_ciphertext_size(l: usize, ep: usize, et: usize) -> usize {
    (l * ep * SABER_N) / 8 + (et * SABER_N) / 8
}

/// Byte length of the KEM public key (identical to the PKE public key)
pub const fn kem_public_key_size(l: usize, ep: usize) -> usize {
    pke_public_key_size(l, ep)
}

/// Byte length of the KEM secret key:
/// PKE secret key, PKE public key, H(public key), and `z`
pub const fn kem_secret_key_size(l: usize, eq: usize, ep: usize) -> usize {
    pke_secret_key_size(l, eq)
        + pke_public_key_size(l, ep)
        + SABER_SHARED_SECRET_SIZE
        + SABER_KEY_BYTES
}

/// Byte length of the KEM ciphertext (identical to the PKE ciphertext)
pub const fn kem_ciphertext_size(l: usize, ep: usize, et: usize) -> usize {
    pke_ciphertext_size(l, ep, et)
}

/// Structure containing the parameters of one SABER variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberParams {
    /// Number of polynomials per vector (module rank)
    pub l: usize,

    /// Bits per coefficient of the ring Rq, q = 2^eq
    pub eq: usize,

    /// Bits per coefficient of the rounded ring Rp, p = 2^ep
    pub ep: usize,

    /// Bits per coefficient of the message rounding ring RT, t = 2^et
    pub et: usize,

    /// Secret distribution parameter
    pub mu: usize,

    /// Whether secrets are drawn with the uniform sampler instead of the
    /// centered binomial one
    pub uniform_sampling: bool,

    /// Public key size in bytes
    pub public_key_size: usize,

    /// Secret key size in bytes
    pub secret_key_size: usize,

    /// Ciphertext size in bytes
    pub ciphertext_size: usize,

    /// Shared secret size in bytes
    pub shared_secret_size: usize,
}

/// LightSABER parameters (128-bit security)
pub const LIGHTSABER: SaberParams = SaberParams {
    l: 2,
    eq: 13,
    ep: 10,
    et: 3,
    mu: 10,
    uniform_sampling: false,
    public_key_size: kem_public_key_size(2, 10),
    secret_key_size: kem_secret_key_size(2, 13, 10),
    ciphertext_size: kem_ciphertext_size(2, 10, 3),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// SABER parameters (192-bit security)
pub const SABER: SaberParams = SaberParams {
    l: 3,
    eq: 13,
    ep: 10,
    et: 4,
    mu: 8,
    uniform_sampling: false,
    public_key_size: kem_public_key_size(3, 10),
    secret_key_size: kem_secret_key_size(3, 13, 10),
    ciphertext_size: kem_ciphertext_size(3, 10, 4),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// FireSABER parameters (256-bit security)
pub const FIRESABER: SaberParams = SaberParams {
    l: 4,
    eq: 13,
    ep: 10,
    et: 6,
    mu: 6,
    uniform_sampling: false,
    public_key_size: kem_public_key_size(4, 10),
    secret_key_size: kem_secret_key_size(4, 13, 10),
    ciphertext_size: kem_ciphertext_size(4, 10, 6),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// uLightSABER parameters (LightSABER with uniform secrets, q = 2^12)
pub const ULIGHTSABER: SaberParams = SaberParams {
    l: 2,
    eq: 12,
    ep: 10,
    et: 3,
    mu: 2,
    uniform_sampling: true,
    public_key_size: kem_public_key_size(2, 10),
    secret_key_size: kem_secret_key_size(2, 12, 10),
    ciphertext_size: kem_ciphertext_size(2, 10, 3),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// uSABER parameters (SABER with uniform secrets, q = 2^12)
pub const USABER: SaberParams = SaberParams {
    l: 3,
    eq: 12,
    ep: 10,
    et: 4,
    mu: 2,
    uniform_sampling: true,
    public_key_size: kem_public_key_size(3, 10),
    secret_key_size: kem_secret_key_size(3, 12, 10),
    ciphertext_size: kem_ciphertext_size(3, 10, 4),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// uFireSABER parameters (FireSABER with uniform secrets, q = 2^12)
pub const UFIRESABER: SaberParams = SaberParams {
    l: 4,
    eq: 12,
    ep: 10,
    et: 6,
    mu: 2,
    uniform_sampling: true,
    public_key_size: kem_public_key_size(4, 10),
    secret_key_size: kem_secret_key_size(4, 12, 10),
    ciphertext_size: kem_ciphertext_size(4, 10, 6),
    shared_secret_size: SABER_SHARED_SECRET_SIZE,
};

/// All named parameter sets, in increasing security order per family
pub const ALL_PARAMS: [SaberParams; 6] = [
    LIGHTSABER, SABER, FIRESABER, ULIGHTSABER, USABER, UFIRESABER,
];

/// Checks whether a parameter tuple is one of the six named profiles.
///
/// Every keygen/encrypt/decrypt and encaps/decaps operation is only defined
/// for these tuples; anything else must be rejected before any arithmetic
/// runs.
pub const fn is_valid_profile(
    l: usize,
    eq: usize,
    ep: usize,
    et: usize,
    mu: usize,
    uniform_sampling: bool,
) -> bool {
    (!uniform_sampling && l == 2 && eq == 13 && ep == 10 && et == 3 && mu == 10)
        || (!uniform_sampling && l == 3 && eq == 13 && ep == 10 && et == 4 && mu == 8)
        || (!uniform_sampling && l == 4 && eq == 13 && ep == 10 && et == 6 && mu == 6)
        || (uniform_sampling && l == 2 && eq == 12 && ep == 10 && et == 3 && mu == 2)
        || (uniform_sampling && l == 3 && eq == 12 && ep == 10 && et == 4 && mu == 2)
        || (uniform_sampling && l == 4 && eq == 12 && ep == 10 && et == 6 && mu == 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_profile_sizes() {
        assert_eq!(LIGHTSABER.public_key_size, 672);
        assert_eq!(LIGHTSABER.secret_key_size, 1568);
        assert_eq!(LIGHTSABER.ciphertext_size, 736);

        assert_eq!(SABER.public_key_size, 992);
        assert_eq!(SABER.secret_key_size, 2304);
        assert_eq!(SABER.ciphertext_size, 1088);

        assert_eq!(FIRESABER.public_key_size, 1312);
        assert_eq!(FIRESABER.secret_key_size, 3040);
        assert_eq!(FIRESABER.ciphertext_size, 1472);

        // The uniform variants store eq = 12 in the inner PKE secret key
        assert_eq!(ULIGHTSABER.secret_key_size, 1504);
        assert_eq!(USABER.secret_key_size, 2208);
        assert_eq!(UFIRESABER.secret_key_size, 2912);

        assert_eq!(ULIGHTSABER.public_key_size, 672);
        assert_eq!(USABER.ciphertext_size, 1088);
        assert_eq!(UFIRESABER.public_key_size, 1312);
    }

    #[test]
    fn profile_table_is_closed() {
        for p in ALL_PARAMS {
            assert!(is_valid_profile(
                p.l,
                p.eq,
                p.ep,
                p.et,
                p.mu,
                p.uniform_sampling
            ));
        }

        // Off-by-one tuples fall outside the table
        assert!(!is_valid_profile(3, 13, 10, 4, 8, true));
        assert!(!is_valid_profile(3, 12, 10, 4, 8, false));
        assert!(!is_valid_profile(5, 13, 10, 6, 6, false));
        assert!(!is_valid_profile(3, 13, 10, 5, 8, false));
    }
}
