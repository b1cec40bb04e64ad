use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use msgseal::curve::{Curve, CurveError, CurveGroup, Point};
use msgseal::keys::KeyPair;
use msgseal::signatures::schnorr::{Schnorr, Signature};

fn secp256k1() -> CurveGroup {
    let p = BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap();
    let curve = Curve::new(p, BigUint::zero(), BigUint::from(7u8));

    let gx = BigUint::parse_bytes(
        b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        16,
    )
    .unwrap();
    let gy = BigUint::parse_bytes(
        b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        16,
    )
    .unwrap();
    let generator = curve.point(gx, gy).unwrap();

    let order = BigUint::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .unwrap();

    CurveGroup::new(curve, generator, order).unwrap()
}

#[test]
fn fixed_ephemeral_signature_matches_recorded_vector() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let private = BigUint::from(12345u32);

    // k = 1 commits to R = G; the rest of the signature is then fully
    // deterministic for SHA-256.
    let signature = scheme
        .sign_with_ephemeral(b"", &private, &BigUint::one())
        .unwrap();

    assert_eq!(signature.r, *scheme.group().generator());

    let expected_s = BigUint::parse_bytes(
        b"2F0261341B05D9C9B948C2D236890E36FDC94A221F208D057A878AB1DD2193B5",
        16,
    )
    .unwrap();
    assert_eq!(signature.s, expected_s, "cross-implementation vector mismatch");

    let keypair = KeyPair::from_private(scheme.group(), private).unwrap();
    assert!(scheme.verify(b"", &signature, keypair.public()).unwrap());
}

#[test]
fn honest_signatures_verify() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(10);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();
    let message = b"Hello Bob! This is a secure message from Alice.";

    let signature = scheme.sign(message, keypair.private(), &mut rng).unwrap();

    assert!(
        scheme.verify(message, &signature, keypair.public()).unwrap(),
        "signature should be valid"
    );
}

#[test]
fn modified_message_is_rejected() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(11);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();
    let signature = scheme.sign(b"original", keypair.private(), &mut rng).unwrap();

    let mut tampered = b"original".to_vec();
    tampered[3] ^= 0x01;

    assert!(
        !scheme.verify(&tampered, &signature, keypair.public()).unwrap(),
        "message modification must be detected"
    );
}

#[test]
fn mismatched_public_key_is_rejected() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(12);

    let signer = scheme.generate_keypair(&mut rng).unwrap();
    let stranger = scheme.generate_keypair(&mut rng).unwrap();

    let signature = scheme.sign(b"message", signer.private(), &mut rng).unwrap();

    assert!(!scheme.verify(b"message", &signature, stranger.public()).unwrap());
}

#[test]
fn tampered_signature_components_are_rejected() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(13);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();
    let signature = scheme.sign(b"message", keypair.private(), &mut rng).unwrap();

    let shifted_s = Signature {
        r: signature.r.clone(),
        s: (&signature.s + BigUint::one()) % scheme.group().order(),
    };
    assert!(!scheme.verify(b"message", &shifted_s, keypair.public()).unwrap());

    let shifted_r = Signature {
        r: scheme
            .group()
            .curve()
            .double(scheme.group().generator())
            .unwrap(),
        s: signature.s.clone(),
    };
    assert!(!scheme.verify(b"message", &shifted_r, keypair.public()).unwrap());
}

#[test]
fn identity_commitment_never_verifies() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(14);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();
    let bogus = Signature {
        r: Point::Infinity,
        s: BigUint::one(),
    };

    assert!(!scheme.verify(b"message", &bogus, keypair.public()).unwrap());
}

#[test]
fn out_of_range_scalars_are_domain_errors() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(15);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();

    // Response scalar at the group order.
    let malformed = Signature {
        r: scheme.group().generator().clone(),
        s: scheme.group().order().clone(),
    };
    assert_eq!(
        scheme.verify(b"message", &malformed, keypair.public()),
        Err(CurveError::ScalarOutOfRange)
    );

    // Ephemeral scalar of zero.
    assert_eq!(
        scheme.sign_with_ephemeral(b"message", keypair.private(), &BigUint::zero()),
        Err(CurveError::ScalarOutOfRange)
    );
}

#[test]
fn independent_messages_get_independent_signatures() {
    let scheme: Schnorr = Schnorr::new(secp256k1());
    let mut rng = ChaCha20Rng::seed_from_u64(16);

    let keypair = scheme.generate_keypair(&mut rng).unwrap();

    let first = scheme.sign(b"first", keypair.private(), &mut rng).unwrap();
    let second = scheme.sign(b"second", keypair.private(), &mut rng).unwrap();

    assert_ne!(first.r, second.r, "fresh ephemeral commitments must differ");
    assert!(scheme.verify(b"first", &first, keypair.public()).unwrap());
    assert!(scheme.verify(b"second", &second, keypair.public()).unwrap());
}
