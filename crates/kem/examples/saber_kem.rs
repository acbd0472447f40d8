//! Example using the Saber KEM

use api::Kem;
use rand::rngs::OsRng;
use saber_kem::Saber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Saber KEM Example");
    println!("=================");

    let mut rng = OsRng;

    // Peer 1 generates a Saber keypair
    println!("Generating Saber keypair...");
    let (public_key, secret_key) = Saber::keypair(&mut rng)?;

    println!("Public key size: {} bytes", public_key.as_bytes().len());
    println!("Secret key size: {} bytes", secret_key.len());

    // Peer 0 uses peer 1's public key to encapsulate a session key
    println!("Encapsulating shared secret...");
    let (ciphertext, shared_secret_sender) = Saber::encapsulate(&mut rng, &public_key)?;

    println!("Ciphertext size: {} bytes", ciphertext.len());

    // Peer 1 decapsulates the ciphertext with its secret key
    println!("Decapsulating shared secret...");
    let shared_secret_recipient = Saber::decapsulate(&secret_key, &ciphertext)?;

    assert_eq!(
        shared_secret_sender.as_bytes(),
        shared_secret_recipient.as_bytes()
    );

    println!("Public key  : {}...", &hex::encode(public_key.as_bytes())[..64]);
    println!("Ciphertext  : {}...", &hex::encode(ciphertext.as_bytes())[..64]);
    println!("Session key : {}", hex::encode(shared_secret_sender.as_bytes()));
    println!("Shared secrets match!");

    Ok(())
}
