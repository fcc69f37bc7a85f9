//! Mining engine for the toy chain
//!
//! Wraps block mining with timing statistics and logging.

use crate::core::{Block, Blockchain, BlockchainError};
use log::info;

/// Mining statistics
#[derive(Debug, Clone)]
pub struct MiningStats {
    /// Number of hash attempts
    pub hash_attempts: u64,
    /// Time taken in milliseconds
    pub time_ms: u128,
    /// Hash rate (hashes per second)
    pub hash_rate: f64,
}

/// Miner for creating new blocks
pub struct Miner {
    /// Name shown in the mining log
    pub name: String,
}

impl Miner {
    /// Create a new miner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Mine the blockchain's pending transactions into a new block
    pub fn mine_block(
        &self,
        blockchain: &mut Blockchain,
    ) -> Result<(Block, MiningStats), BlockchainError> {
        info!(
            "{} mining block {} with difficulty {} ({} pending tx)...",
            self.name,
            blockchain.height() + 1,
            blockchain.difficulty(),
            blockchain.pending_transactions().len()
        );

        let (block, found) = blockchain.mine_block()?;

        let stats = MiningStats {
            hash_attempts: found.attempts(),
            time_ms: found.elapsed.as_millis(),
            hash_rate: found.hash_rate(),
        };

        info!(
            "Block {} mined in {}ms ({} attempts, {:.2} H/s)",
            block.index(),
            stats.time_ms,
            stats.hash_attempts,
            stats.hash_rate
        );

        Ok((block, stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transaction;

    #[test]
    fn test_miner() {
        let mut blockchain = Blockchain::new(2).unwrap();
        blockchain.add_transaction(Transaction::new("Alice", "Bob", 5.0));
        let miner = Miner::new("test-miner");

        let (block, stats) = miner.mine_block(&mut blockchain).unwrap();

        assert_eq!(block.index(), 1);
        assert_eq!(block.tx_count(), 1);
        assert_eq!(stats.hash_attempts, block.proof() + 1);
        assert!(stats.hash_rate > 0.0);
    }

    #[test]
    fn test_mine_multiple_blocks() {
        let mut blockchain = Blockchain::new(2).unwrap();
        let miner = Miner::new("test-miner");

        for expected in 1..=3 {
            let (block, _) = miner.mine_block(&mut blockchain).unwrap();
            assert_eq!(block.index(), expected);
        }

        assert_eq!(blockchain.height(), 3);
        assert!(blockchain.is_valid());
    }
}
