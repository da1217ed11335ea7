use base64::{engine::general_purpose::STANDARD, Engine};
use next_keygen::{BuyerId, Error, KeyPair, PrivateCredential, PublicCredential};
use ring::{rand::SystemRandom, test::rand::FixedSliceSequenceRandom};
use std::cell::UnsafeCell;

#[test]
fn pinned_encoding() {
    let buyer_id = BuyerId::from_bytes([1, 2, 3, 4, 5, 6, 7, 8]);
    let seed: [u8; 32] = core::array::from_fn(|i| i as u8);
    let key_pair = KeyPair::from_parts(buyer_id, &seed).unwrap();

    assert_eq!(
        key_pair.public().encode(),
        "AQIDBAUGBwgDoQe/884Qvh1w3RjnS8CZZ+TWMJulDV8d3IZkElUxuA=="
    );
    assert_eq!(
        key_pair.private().encode(),
        "AQIDBAUGBwgAAQIDBAUGBwgJCgsMDQ4PEBESExQVFhcYGRobHB0eHwOhB7/zzhC+HXDdGOdLwJln5NYwm6UNXx3chmQSVTG4"
    );

    let again = KeyPair::from_parts(buyer_id, &seed).unwrap();
    assert_eq!(next_keygen::render(&key_pair), next_keygen::render(&again));
}

#[test]
fn generate_draws_buyer_id_then_seed() {
    let rng = FixedSliceSequenceRandom {
        bytes: &[&[0; 8], &[7; 32]],
        current: UnsafeCell::new(0),
    };
    let key_pair = KeyPair::generate(&rng).unwrap();

    assert_eq!(key_pair.buyer_id(), BuyerId::from_bytes([0; 8]));
    assert_eq!(
        key_pair.public().encode(),
        "AAAAAAAAAADqSmxj4pxSCr71UHsTLsX5lUd2rr6+e5JCHuppFEbSLA=="
    );
    assert_eq!(
        key_pair.private().encode(),
        "AAAAAAAAAAAHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHBwcHB+pKbGPinFIKvvVQexMuxfmVR3auvr57kkIe6mkURtIs"
    );
}

#[test]
fn halves_share_buyer_id() {
    let key_pair = KeyPair::generate(&SystemRandom::new()).unwrap();

    let public = STANDARD.decode(key_pair.public().encode()).unwrap();
    let private = STANDARD.decode(key_pair.private().encode()).unwrap();

    assert_eq!(public.len(), 40);
    assert_eq!(private.len(), 72);
    assert_eq!(public[..8], private[..8]);
    assert_eq!(public[8..], private[40..]);
}

#[test]
fn decoded_halves_sign_and_verify() {
    let key_pair = KeyPair::generate(&SystemRandom::new()).unwrap();

    let public = PublicCredential::decode(&key_pair.public().encode()).unwrap();
    let private = PrivateCredential::decode(&key_pair.private().encode()).unwrap();
    assert_eq!(&public, key_pair.public());
    assert_eq!(private.to_bytes(), key_pair.private().to_bytes());
    private.matches(&public).unwrap();

    let nonce = b"nonce-0001";
    let signature = private.sign(nonce).unwrap();
    public.verify(nonce, &signature).unwrap();

    assert!(matches!(
        public.verify(b"nonce-0002", &signature),
        Err(Error::InvalidSignature)
    ));
}

#[test]
fn successive_runs_differ() {
    let rng = SystemRandom::new();
    let first = KeyPair::generate(&rng).unwrap();
    let second = KeyPair::generate(&rng).unwrap();

    assert_ne!(first.buyer_id(), second.buyer_id());
    assert_ne!(first.public().public_key(), second.public().public_key());
}

#[test]
fn encoding_is_canonical_base64() {
    let key_pair = KeyPair::generate(&SystemRandom::new()).unwrap();

    for encoded in [key_pair.public().encode(), key_pair.private().encode()] {
        let raw = STANDARD.decode(&encoded).unwrap();
        assert_eq!(STANDARD.encode(raw), encoded);
    }
}

#[test]
fn mismatched_pairs_are_rejected() {
    let seed = [5; 32];
    let a = KeyPair::from_parts(BuyerId::from_bytes([1; 8]), &seed).unwrap();
    let b = KeyPair::from_parts(BuyerId::from_bytes([2; 8]), &seed).unwrap();
    let c = KeyPair::from_parts(BuyerId::from_bytes([1; 8]), &[6; 32]).unwrap();

    assert!(matches!(
        a.private().matches(b.public()),
        Err(Error::BuyerIdMismatch { .. })
    ));
    assert!(matches!(
        a.private().matches(c.public()),
        Err(Error::KeyMismatch)
    ));
    assert_eq!(&a.private().public_credential(), a.public());
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let key_pair = KeyPair::from_parts(BuyerId::from_bytes([0; 8]), &[0; 32]).unwrap();
    let padded = format!("    {}\n", key_pair.public());

    assert_eq!(&PublicCredential::decode(&padded).unwrap(), key_pair.public());
}
