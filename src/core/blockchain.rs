//! Blockchain implementation
//!
//! Keeps the block list and the pending transactions, and mines new
//! blocks with the nonce search over the previous block's proof.

use crate::core::block::Block;
use crate::core::transaction::Transaction;
use crate::crypto::sha256_hex;
use crate::mining::search::{
    check_difficulty, meets_difficulty, search, SearchError, SearchResult,
};
use thiserror::Error;

/// Default mining difficulty (number of leading zero hex characters)
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Proof stored in the genesis block
pub const GENESIS_PROOF: u64 = 1;

/// Previous-hash marker of the genesis block
pub const GENESIS_PREVIOUS_HASH: &str = "0";

/// Blockchain-related errors
#[derive(Error, Debug)]
pub enum BlockchainError {
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// The chain of blocks plus the transactions waiting for the next one
#[derive(Debug, Clone)]
pub struct Blockchain {
    chain: Vec<Block>,
    current_transactions: Vec<Transaction>,
    difficulty: usize,
}

impl Blockchain {
    /// Create a new blockchain with its genesis block
    pub fn new(difficulty: usize) -> Result<Self, BlockchainError> {
        check_difficulty(difficulty)?;

        let genesis = Block::new(
            0,
            GENESIS_PROOF,
            GENESIS_PREVIOUS_HASH.to_string(),
            Vec::new(),
        )?;

        Ok(Self {
            chain: vec![genesis],
            current_transactions: Vec::new(),
            difficulty,
        })
    }

    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    pub fn blocks(&self) -> &[Block] {
        &self.chain
    }

    /// Transactions that will go into the next mined block
    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.current_transactions
    }

    /// Get blockchain height
    pub fn height(&self) -> u64 {
        (self.chain.len() as u64).saturating_sub(1)
    }

    /// Queue a transaction for the next block
    pub fn add_transaction(&mut self, tx: Transaction) {
        self.current_transactions.push(tx);
    }

    /// Get the latest block
    pub fn last_block(&self) -> &Block {
        self.chain
            .last()
            .expect("Blockchain should have at least genesis block")
    }

    /// Mine the pending transactions into a new block
    pub fn mine_block(&mut self) -> Result<(Block, SearchResult), BlockchainError> {
        let last = self.last_block();
        let index = last.index() + 1;
        let previous_hash = last.hash().to_string();
        let found = self.proof_of_work(last.proof())?;

        let transactions = std::mem::take(&mut self.current_transactions);
        let block = Block::new(index, found.nonce, previous_hash, transactions)?;
        self.chain.push(block.clone());

        Ok((block, found))
    }

    /// Find the smallest proof such that `last_proof ++ proof` meets the difficulty
    pub fn proof_of_work(&self, last_proof: u64) -> Result<SearchResult, BlockchainError> {
        Ok(search(&last_proof.to_string(), self.difficulty)?)
    }

    /// Check a proof against its predecessor's
    pub fn is_valid_proof(&self, last_proof: u64, proof: u64) -> bool {
        let guess = format!("{}{}", last_proof, proof);
        meets_difficulty(&sha256_hex(guess.as_bytes()), self.difficulty)
    }

    /// Validate the entire chain
    pub fn is_valid(&self) -> bool {
        if !self.chain.first().is_some_and(Block::verify_hash) {
            return false;
        }

        self.chain.windows(2).all(|pair| {
            let (previous, current) = (&pair[0], &pair[1]);
            current.index() == previous.index() + 1
                && current.previous_hash() == previous.hash()
                && current.verify_hash()
                && self.is_valid_proof(previous.proof(), current.proof())
        })
    }

    /// Get chain statistics
    pub fn stats(&self) -> ChainStats {
        ChainStats {
            height: self.height(),
            total_blocks: self.chain.len() as u64,
            total_transactions: self.chain.iter().map(|b| b.tx_count() as u64).sum(),
            pending_transactions: self.current_transactions.len() as u64,
            difficulty: self.difficulty,
            latest_hash: self.last_block().hash().to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn blocks_mut(&mut self) -> &mut Vec<Block> {
        &mut self.chain
    }
}

/// Chain statistics
#[derive(Debug, Clone)]
pub struct ChainStats {
    pub height: u64,
    pub total_blocks: u64,
    pub total_transactions: u64,
    pub pending_transactions: u64,
    pub difficulty: usize,
    pub latest_hash: String,
}
