//! Mini-PoW-Chain: proof-of-work demos in Rust
//!
//! This crate provides:
//! - A nonce search engine (SHA-256, leading zero hex characters)
//! - A toy blockchain whose blocks are mined with that search
//! - RSA key generation, PEM persistence and PKCS#1 v1.5 signatures
//!
//! # Example
//!
//! ```rust
//! use mini_pow_chain::mining::search;
//! use mini_pow_chain::core::{Blockchain, Transaction};
//!
//! // Find "Lumos<n>" whose SHA-256 starts with "00"
//! let result = search("Lumos", 2).unwrap();
//! assert!(result.digest_hex.starts_with("00"));
//!
//! // Mine a block
//! let mut blockchain = Blockchain::new(2).unwrap();
//! blockchain.add_transaction(Transaction::new("Alice", "Bob", 5.0));
//! let (block, _) = blockchain.mine_block().unwrap();
//! assert_eq!(block.index(), 1);
//! assert!(blockchain.is_valid());
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod crypto;
pub mod mining;

// Re-export commonly used types
pub use config::DemoConfig;
pub use core::{Block, Blockchain, BlockchainError, Transaction, DEFAULT_DIFFICULTY};
pub use crypto::{KeyError, RsaKeyPair};
pub use mining::{search, Miner, NonceSearch, SearchError, SearchResult};
