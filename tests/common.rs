extern crate offtarget;
extern crate rand;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use offtarget::common::{encode_dna, TwentyMer};
use offtarget::errors::ErrorKind;

fn random_sequence(rng: &mut StdRng) -> Vec<u8> {
    (0..20).map(|_| b"ACGT"[rng.random_range(0..4usize)]).collect()
}

#[test]
fn test_encode_extremes() {
    assert_eq!(encode_dna(b"AAAAAAAAAAAAAAAAAAAA").unwrap(), TwentyMer(0));
    assert_eq!(
        encode_dna(b"TTTTTTTTTTTTTTTTTTTT").unwrap(),
        TwentyMer((1 << 40) - 1)
    );
    assert_eq!(encode_dna(b"AAAAAAAAAAAAAAAAAAAC").unwrap(), TwentyMer(1));
    assert_eq!(encode_dna(b"CAAAAAAAAAAAAAAAAAAA").unwrap(), TwentyMer(1 << 38));
}

#[test]
fn test_encode_lowercase() {
    assert_eq!(
        encode_dna(b"acgtacgtacgtacgtacgt").unwrap(),
        encode_dna(b"ACGTACGTACGTACGTACGT").unwrap()
    );
}

#[test]
fn test_encode_invalid_symbol() {
    let err = encode_dna(b"ACGTACGTACGTACGTACGN").unwrap_err();

    match err.kind() {
        ErrorKind::InvalidSymbol(seq) => assert_eq!(seq, "ACGTACGTACGTACGTACGN"),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_encode_invalid_length() {
    assert!(encode_dna(b"").is_err());
    assert!(encode_dna(b"ACGTACGTACGTACGTACG").is_err());
    assert!(encode_dna(b"ACGTACGTACGTACGTACGTA").is_err());
}

#[test]
fn test_decode_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let seq = random_sequence(&mut rng);
        let code = encode_dna(&seq).unwrap();

        assert_eq!(code.decode().as_bytes(), &seq[..]);
        assert_eq!(code.prefix(20), code.0);
        assert_eq!(code.to_string(), code.decode());
    }
}

#[test]
fn test_prefix_zero_length() {
    let code = encode_dna(b"TTTTTTTTTTTTTTTTTTTT").unwrap();

    assert_eq!(code.prefix(0), 0);
    assert_eq!(code.prefix(1), 3);
}

#[test]
fn test_order_preserved() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..5000 {
        let a = random_sequence(&mut rng);
        let b = random_sequence(&mut rng);
        let (code_a, code_b) = (encode_dna(&a).unwrap(), encode_dna(&b).unwrap());

        assert_eq!(code_a.cmp(&code_b), a.cmp(&b));
    }
}

#[test]
fn test_prefix_order_preserved() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..2000 {
        let a = random_sequence(&mut rng);
        let mut b = random_sequence(&mut rng);
        // Share a random prefix so that short prefixes are frequently equal
        let shared = rng.random_range(0..20usize);
        b[..shared].copy_from_slice(&a[..shared]);

        let (code_a, code_b) = (encode_dna(&a).unwrap(), encode_dna(&b).unwrap());
        for len in 1..=20 {
            assert_eq!(
                code_a.prefix(len).cmp(&code_b.prefix(len)),
                a[..len].cmp(&b[..len]),
                "{:?} vs {:?} at {}",
                code_a,
                code_b,
                len
            );
        }
    }
}
