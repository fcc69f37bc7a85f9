//! Cryptographic hashing utilities
//!
//! SHA-256 helpers shared by the nonce search, block hashing and
//! the RSA signer.

use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest rendered as lowercase hex
pub const SHA256_HEX_LEN: usize = 64;

/// Computes SHA-256 hash of the input data
pub fn sha256(data: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Computes SHA-256 hash and returns it as a lowercase hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Counts the leading `'0'` characters of a hex digest
pub fn leading_hex_zeros(digest_hex: &str) -> usize {
    digest_hex.bytes().take_while(|b| *b == b'0').count()
}
