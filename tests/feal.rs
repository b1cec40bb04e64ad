use msgseal::encryption::CipherError;
use msgseal::encryption::feal::Feal;

const KEY: &[u8] = b"SecretK1";

#[test]
fn zero_block_matches_recorded_vector() {
    let feal = Feal::new();

    let ciphertext = feal.encrypt_block(&[0u8; 8], KEY).unwrap();
    assert_eq!(
        ciphertext,
        [0xbd, 0xca, 0x08, 0xae, 0xd1, 0xb2, 0x97, 0x8f],
        "cross-implementation vector mismatch"
    );
}

#[test]
fn ascii_block_matches_recorded_vector() {
    let feal = Feal::new();

    let ciphertext = feal.encrypt_block(b"ABCDEFGH", KEY).unwrap();
    assert_eq!(ciphertext, [0x9a, 0x17, 0x1e, 0x65, 0x38, 0x68, 0x52, 0xc5]);
}

#[test]
fn decrypt_inverts_encrypt() {
    let feal = Feal::new();

    let blocks: [[u8; 8]; 4] = [
        [0u8; 8],
        [0xff; 8],
        *b"ABCDEFGH",
        [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
    ];
    let keys: [&[u8]; 3] = [b"SecretK1", b"\x00\x00\x00\x00\x00\x00\x00\x00", b"12345678"];

    for key in keys {
        for block in &blocks {
            let ciphertext = feal.encrypt_block(block, key).unwrap();
            let recovered = feal.decrypt_block(&ciphertext, key).unwrap();

            assert_eq!(recovered, *block, "round trip failed");
        }
    }
}

#[test]
fn encryption_is_deterministic() {
    let feal = Feal::new();

    let first = feal.encrypt_block(b"ABCDEFGH", KEY).unwrap();
    let second = feal.encrypt_block(b"ABCDEFGH", KEY).unwrap();

    assert_eq!(first, second);
}

#[test]
fn wrong_key_length_is_rejected() {
    let feal = Feal::new();

    assert_eq!(
        feal.encrypt_block(&[0u8; 8], b"short"),
        Err(CipherError::InvalidKeySize)
    );
    assert_eq!(
        feal.decrypt_block(&[0u8; 8], b"nine bytes"),
        Err(CipherError::InvalidKeySize)
    );
}

#[test]
fn wrong_block_length_is_rejected() {
    let feal = Feal::new();

    assert_eq!(
        feal.encrypt_block(&[0u8; 7], KEY),
        Err(CipherError::InvalidBlockLength)
    );
    assert_eq!(
        feal.decrypt_block(&[0u8; 9], KEY),
        Err(CipherError::InvalidBlockLength)
    );
}

#[test]
fn configurable_key_size_round_trips() {
    let feal = Feal::with_key_size(128);
    let key = b"0123456789abcdef";

    let ciphertext = feal.encrypt_block(b"ABCDEFGH", key).unwrap();
    let recovered = feal.decrypt_block(&ciphertext, key).unwrap();

    assert_eq!(&recovered, b"ABCDEFGH");
    assert_eq!(feal.encrypt_block(b"ABCDEFGH", KEY), Err(CipherError::InvalidKeySize));
}
