//! Core chain components
//!
//! This module contains the building blocks of the toy chain:
//! - Transactions (sender, recipient, amount)
//! - Blocks (cached SHA-256 over canonical JSON)
//! - Blockchain (genesis, pending transactions, proof-of-work mining)

pub mod block;
pub mod blockchain;
pub mod transaction;

pub use block::Block;
pub use blockchain::{
    Blockchain, BlockchainError, ChainStats, DEFAULT_DIFFICULTY, GENESIS_PREVIOUS_HASH,
    GENESIS_PROOF,
};
pub use transaction::Transaction;
