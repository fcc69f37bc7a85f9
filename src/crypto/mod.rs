//! Cryptographic utilities
//!
//! This module provides:
//! - SHA-256 hashing
//! - RSA key management (PKCS#1 v1.5 signatures, PEM files)

pub mod hash;
pub mod keys;

pub use hash::{leading_hex_zeros, sha256, sha256_hex, SHA256_HEX_LEN};
pub use keys::{
    verify_signature, KeyError, RsaKeyPair, DEFAULT_KEY_BITS, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE,
};
