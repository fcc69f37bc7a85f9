use proptest::prelude::*;

use mini_pow_chain::crypto::sha256_hex;
use mini_pow_chain::mining::{meets_difficulty, search, verify};
use mini_pow_chain::SearchError;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Found digests always carry the required zero prefix.
    #[test]
    fn found_digest_meets_difficulty(
        base in "[A-Za-z0-9]{0,12}",
        difficulty in 0usize..=2,
    ) {
        let result = search(&base, difficulty).unwrap();
        prop_assert!(result.digest_hex.bytes().take(difficulty).all(|b| b == b'0'));
        prop_assert!(meets_difficulty(&result.digest_hex, difficulty));
    }

    /// The returned digest is the SHA-256 of the returned input.
    #[test]
    fn digest_matches_input(base in "[a-z]{1,8}", difficulty in 0usize..=2) {
        let result = search(&base, difficulty).unwrap();
        prop_assert_eq!(&result.digest_hex, &sha256_hex(result.input.as_bytes()));
        prop_assert_eq!(&result.input, &format!("{}{}", base, result.nonce));
        prop_assert!(verify(&result, difficulty));
    }

    /// Zero difficulty never looks past the first counter.
    #[test]
    fn zero_difficulty_returns_counter_zero(base in ".{0,16}") {
        let result = search(&base, 0).unwrap();
        prop_assert_eq!(result.nonce, 0);
        prop_assert_eq!(result.input, format!("{}0", base));
    }

    /// Same base and difficulty, same winner.
    #[test]
    fn search_is_deterministic(base in "[a-z]{1,8}", difficulty in 0usize..=2) {
        let first = search(&base, difficulty).unwrap();
        let second = search(&base, difficulty).unwrap();
        prop_assert_eq!(first.nonce, second.nonce);
        prop_assert_eq!(first.digest_hex, second.digest_hex);
    }

    /// The winner is the smallest counter that satisfies the target.
    #[test]
    fn winner_is_minimal(base in "[a-z]{1,6}") {
        let result = search(&base, 1).unwrap();
        for n in 0..result.nonce {
            let digest = sha256_hex(format!("{}{}", base, n).as_bytes());
            prop_assert!(!meets_difficulty(&digest, 1));
        }
    }

    /// Anything past the digest length is rejected up front.
    #[test]
    fn oversized_difficulty_rejected(difficulty in 65usize..1_000) {
        prop_assert_eq!(
            search("Lumos", difficulty).unwrap_err(),
            SearchError::DifficultyOutOfRange(difficulty, 64)
        );
    }
}

#[test]
fn lumos_zero_scenario() {
    let result = search("Lumos0", 0).unwrap();
    assert_eq!(result.input, "Lumos00");
    assert_eq!(result.digest_hex, sha256_hex(b"Lumos00"));
}
