//! Nonce search engine
//!
//! Appends an increasing decimal counter to a base string and hashes the
//! result with SHA-256 until the hex digest starts with the required
//! number of `'0'` characters. Difficulty counts hex characters, so each
//! step of difficulty demands four more zero bits.

use crate::crypto::{leading_hex_zeros, sha256_hex, SHA256_HEX_LEN};
use log::debug;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Nonce search errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Difficulty {0} out of range (max: {1} hex characters)")]
    DifficultyOutOfRange(usize, usize),
}

/// Outcome of a successful search
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Winning input: base string followed by the nonce
    pub input: String,
    /// Lowercase hex SHA-256 of `input`
    pub digest_hex: String,
    /// Counter value that produced the digest
    pub nonce: u64,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

impl SearchResult {
    /// Number of digests computed, the winning one included
    pub fn attempts(&self) -> u64 {
        self.nonce + 1
    }

    /// Hashes per second over the whole search
    pub fn hash_rate(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.attempts() as f64 / secs
        } else {
            self.attempts() as f64
        }
    }
}

/// State of a single search: the base string, the target and the counter
#[derive(Debug, Clone)]
pub struct NonceSearch {
    base: String,
    difficulty: usize,
    nonce: u64,
}

impl NonceSearch {
    /// Start a search at counter 0
    pub fn new(base: &str, difficulty: usize) -> Result<Self, SearchError> {
        check_difficulty(difficulty)?;

        Ok(Self {
            base: base.to_string(),
            difficulty,
            nonce: 0,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Current counter value
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Input for the current counter value
    pub fn candidate(&self) -> String {
        format!("{}{}", self.base, self.nonce)
    }

    /// Sweep the counter upwards until a digest meets the difficulty.
    ///
    /// Unbounded: expected work is `16^difficulty` hashes. The counter is
    /// left at the winning value.
    pub fn run(&mut self) -> SearchResult {
        debug!(
            "Searching for {} leading zeros over base {:?} from nonce {}",
            self.difficulty, self.base, self.nonce
        );

        let start = Instant::now();

        loop {
            let input = self.candidate();
            let digest_hex = sha256_hex(input.as_bytes());

            if meets_difficulty(&digest_hex, self.difficulty) {
                let result = SearchResult {
                    input,
                    digest_hex,
                    nonce: self.nonce,
                    elapsed: start.elapsed(),
                };

                debug!(
                    "Found nonce {} in {:?} ({:.2} H/s)",
                    result.nonce,
                    result.elapsed,
                    result.hash_rate()
                );

                return result;
            }

            self.nonce += 1;
        }
    }
}

/// Reject a difficulty longer than the digest, which no input can meet
pub fn check_difficulty(difficulty: usize) -> Result<(), SearchError> {
    if difficulty > SHA256_HEX_LEN {
        return Err(SearchError::DifficultyOutOfRange(difficulty, SHA256_HEX_LEN));
    }
    Ok(())
}

/// Search `base` for a digest with `difficulty` leading zero hex characters
pub fn search(base: &str, difficulty: usize) -> Result<SearchResult, SearchError> {
    Ok(NonceSearch::new(base, difficulty)?.run())
}

/// Check that the first `difficulty` characters of a hex digest are all `'0'`
pub fn meets_difficulty(digest_hex: &str, difficulty: usize) -> bool {
    leading_hex_zeros(digest_hex) >= difficulty
}

/// Recompute the digest of `result.input` and check it against the difficulty
pub fn verify(result: &SearchResult, difficulty: usize) -> bool {
    let digest_hex = sha256_hex(result.input.as_bytes());
    digest_hex == result.digest_hex && meets_difficulty(&digest_hex, difficulty)
}
