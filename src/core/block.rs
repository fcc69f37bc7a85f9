//! Block implementation for the toy chain
//!
//! A block stores its transactions, the proof found by mining and the
//! hash of its predecessor. Its own hash is computed once at construction.

use crate::core::transaction::Transaction;
use crate::crypto::sha256_hex;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;

/// Hash input; fields are declared in sorted order so the JSON is canonical
#[derive(Serialize)]
struct HashInput<'a> {
    index: u64,
    previous_hash: &'a str,
    proof: u64,
    timestamp: i64,
    transactions: &'a [Transaction],
}

/// A block in the chain
#[derive(Debug, Clone)]
pub struct Block {
    index: u64,
    /// Creation time in nanoseconds since the unix epoch
    timestamp: i64,
    transactions: Vec<Transaction>,
    proof: u64,
    previous_hash: String,
    /// Cached so callers don't rehash on every read
    hash: String,
}

impl Block {
    /// Create a block stamped with the current time
    pub fn new(
        index: u64,
        proof: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> Result<Self, serde_json::Error> {
        let timestamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        Self::with_timestamp(index, timestamp, proof, previous_hash, transactions)
    }

    /// Create a block with an explicit timestamp
    pub fn with_timestamp(
        index: u64,
        timestamp: i64,
        proof: u64,
        previous_hash: String,
        transactions: Vec<Transaction>,
    ) -> Result<Self, serde_json::Error> {
        let mut block = Self {
            index,
            timestamp,
            transactions,
            proof,
            previous_hash,
            hash: String::new(),
        };
        block.hash = block.calculate_hash()?;
        Ok(block)
    }

    /// SHA-256 over the canonical JSON of every field except the hash
    pub fn calculate_hash(&self) -> Result<String, serde_json::Error> {
        let input = HashInput {
            index: self.index,
            previous_hash: &self.previous_hash,
            proof: self.proof,
            timestamp: self.timestamp,
            transactions: &self.transactions,
        };
        let bytes = serde_json::to_vec(&input)?;
        Ok(sha256_hex(&bytes))
    }

    /// Check the cached hash against a fresh computation
    pub fn verify_hash(&self) -> bool {
        matches!(self.calculate_hash(), Ok(hash) if hash == self.hash)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn proof(&self) -> u64 {
        self.proof
    }

    pub fn previous_hash(&self) -> &str {
        &self.previous_hash
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Get number of transactions in this block
    pub fn tx_count(&self) -> usize {
        self.transactions.len()
    }

    /// Timestamp in local time, millisecond precision
    pub fn format_time(&self) -> String {
        DateTime::from_timestamp_nanos(self.timestamp)
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S%.3f")
            .to_string()
    }

    #[cfg(test)]
    pub(crate) fn transactions_mut(&mut self) -> &mut Vec<Transaction> {
        &mut self.transactions
    }

    #[cfg(test)]
    pub(crate) fn set_proof(&mut self, proof: u64) {
        self.proof = proof;
    }
}
