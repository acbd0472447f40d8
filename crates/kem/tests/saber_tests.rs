//! End-to-end tests for the Saber KEM through the `api::Kem` trait.

use api::{Kem, Serialize, SerializeSecret};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use saber_kem::{FireSaber, LightSaber, Saber, UFireSaber, ULightSaber, USaber};

fn exercise_kem<K: Kem>(expected_pk: usize, expected_sk: usize, expected_ct: usize) {
    let mut rng = ChaChaRng::seed_from_u64(42);

    let keypair = K::keypair(&mut rng).unwrap();
    let pk = K::public_key(&keypair);
    let sk = K::secret_key(&keypair);

    let pk_bytes = pk.to_bytes();
    let sk_bytes = sk.to_bytes_zeroizing();
    assert_eq!(pk_bytes.len(), expected_pk);
    assert_eq!(sk_bytes.len(), expected_sk);

    let (ct, ss_sender) = K::encapsulate(&mut rng, &pk).unwrap();
    assert_eq!(ct.to_bytes().len(), expected_ct);

    let ss_recipient = K::decapsulate(&sk, &ct).unwrap();
    assert_eq!(
        ss_sender.to_bytes_zeroizing().as_slice(),
        ss_recipient.to_bytes_zeroizing().as_slice()
    );

    // Keys survive a serialization round trip
    let pk2 = <K::PublicKey as Serialize>::from_bytes(&pk_bytes).unwrap();
    let sk2 = <K::SecretKey as SerializeSecret>::from_bytes(&sk_bytes).unwrap();
    let (ct2, ss2) = K::encapsulate(&mut rng, &pk2).unwrap();
    let ss3 = K::decapsulate(&sk2, &ct2).unwrap();
    assert_eq!(
        ss2.to_bytes_zeroizing().as_slice(),
        ss3.to_bytes_zeroizing().as_slice()
    );
}

#[test]
fn lightsaber_kem_flow() {
    exercise_kem::<LightSaber>(672, 1568, 736);
}

#[test]
fn saber_kem_flow() {
    exercise_kem::<Saber>(992, 2304, 1088);
}

#[test]
fn firesaber_kem_flow() {
    exercise_kem::<FireSaber>(1312, 3040, 1472);
}

#[test]
fn ulightsaber_kem_flow() {
    exercise_kem::<ULightSaber>(672, 1504, 736);
}

#[test]
fn usaber_kem_flow() {
    exercise_kem::<USaber>(992, 2208, 1088);
}

#[test]
fn ufiresaber_kem_flow() {
    exercise_kem::<UFireSaber>(1312, 2912, 1472);
}

#[test]
fn algorithm_names() {
    assert_eq!(LightSaber::name(), "LightSaber");
    assert_eq!(Saber::name(), "Saber");
    assert_eq!(FireSaber::name(), "FireSaber");
    assert_eq!(ULightSaber::name(), "uLightSaber");
    assert_eq!(USaber::name(), "uSaber");
    assert_eq!(UFireSaber::name(), "uFireSaber");
}

#[test]
fn fresh_encapsulations_disagree() {
    let mut rng = ChaChaRng::seed_from_u64(1);
    let (pk, _) = Saber::keypair(&mut rng).unwrap();

    let (ct_a, ss_a) = Saber::encapsulate(&mut rng, &pk).unwrap();
    let (ct_b, ss_b) = Saber::encapsulate(&mut rng, &pk).unwrap();

    assert_ne!(ct_a.to_bytes(), ct_b.to_bytes());
    assert_ne!(
        ss_a.to_bytes_zeroizing().as_slice(),
        ss_b.to_bytes_zeroizing().as_slice()
    );
}
