//! CLI commands for the demos
//!
//! Each handler runs one demo end to end and narrates it on stdout.

use crate::config::DemoConfig;
use crate::core::{Blockchain, Transaction};
use crate::crypto::{RsaKeyPair, PRIVATE_KEY_FILE, PUBLIC_KEY_FILE};
use crate::mining::{search, Miner, SearchResult};
use log::warn;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

/// What the RSA demo produced
#[derive(Debug, Clone)]
pub struct SignedProof {
    pub result: SearchResult,
    pub signature: Vec<u8>,
    pub verified: bool,
}

/// Run the standalone search once per configured difficulty
pub fn cmd_pow(config: &DemoConfig) -> CliResult<Vec<SearchResult>> {
    let mut results = Vec::with_capacity(config.difficulties.len());

    for &difficulty in &config.difficulties {
        println!(
            "⛏️  Searching for a hash with {} leading zeros (base: {})...",
            difficulty, config.nickname
        );

        let result = search(&config.nickname, difficulty)?;
        print_search_result(&result);
        println!();

        results.push(result);
    }

    Ok(results)
}

/// Build the sample chain, mine two blocks and print it
pub fn cmd_chain(config: &DemoConfig) -> CliResult<Blockchain> {
    let mut blockchain = Blockchain::new(config.chain_difficulty)?;
    let miner = Miner::new(&config.nickname);

    println!("⛓️  Blockchain created (genesis block included)");
    println!("   Difficulty: {}", blockchain.difficulty());

    blockchain.add_transaction(Transaction::new("Alice", "Bob", 5.0));
    blockchain.add_transaction(Transaction::new("Bob", "Charlie", 2.5));

    println!("\n⛏️  Mining the first block...");
    let (block, stats) = miner.mine_block(&mut blockchain)?;
    println!(
        "   Block {} mined in {}ms ({} attempts)",
        block.index(),
        stats.time_ms,
        stats.hash_attempts
    );

    blockchain.add_transaction(Transaction::new("Charlie", "Alice", 1.0));
    blockchain.add_transaction(Transaction::new("Bob", "Dave", 0.5));

    println!("\n⛏️  Mining the second block...");
    let (block, stats) = miner.mine_block(&mut blockchain)?;
    println!(
        "   Block {} mined in {}ms ({} attempts)",
        block.index(),
        stats.time_ms,
        stats.hash_attempts
    );

    println!("\n🧱 Full chain:");
    print_chain(&blockchain);

    if blockchain.is_valid() {
        println!("✅ Chain is valid");
    } else {
        println!("❌ Chain is INVALID");
    }

    Ok(blockchain)
}

/// Generate RSA keys, save them, mine a proof and sign it
pub fn cmd_rsa(config: &DemoConfig) -> CliResult<SignedProof> {
    println!("🔐 Generating {}-bit RSA key pair...", config.key_bits);
    let keys = RsaKeyPair::generate(config.key_bits)?;

    println!("   📁 Key directory: {:?}", config.key_dir);

    // A failed save is reported; the rest of the demo still runs
    match keys.save_private_key(&config.key_dir, PRIVATE_KEY_FILE) {
        Ok(path) => println!("   🔑 Private key saved to {:?}", path),
        Err(e) => {
            warn!("Failed to save private key: {}", e);
            println!("   ❌ Failed to save private key: {}", e);
        }
    }
    match keys.save_public_key(&config.key_dir, PUBLIC_KEY_FILE) {
        Ok(path) => println!("   🔓 Public key saved to {:?}", path),
        Err(e) => {
            warn!("Failed to save public key: {}", e);
            println!("   ❌ Failed to save public key: {}", e);
        }
    }

    println!(
        "\n⛏️  Searching for a hash with {} leading zeros (base: {})...",
        config.rsa_difficulty, config.nickname
    );
    let result = search(&config.nickname, config.rsa_difficulty)?;
    print_search_result(&result);

    let signature = keys.sign(result.input.as_bytes())?;
    println!("\n✍️  Signature: {}", hex::encode(&signature));

    let verified = match keys.verify(result.input.as_bytes(), &signature) {
        Ok(()) => {
            println!("✅ Signature verified: content intact and origin trusted");
            true
        }
        Err(e) => {
            println!("❌ Signature verification failed: {}", e);
            false
        }
    };

    Ok(SignedProof {
        result,
        signature,
        verified,
    })
}

fn print_search_result(result: &SearchResult) {
    println!("   ├─ Time: {:?}", result.elapsed);
    println!("   ├─ Input: {}", result.input);
    println!("   ├─ Hash: {}", result.digest_hex);
    println!("   ├─ Nonce: {}", result.nonce);
    println!("   └─ Hash rate: {:.2} H/s", result.hash_rate());
}

fn print_chain(blockchain: &Blockchain) {
    for (i, block) in blockchain.blocks().iter().enumerate() {
        println!("   Block #{}:", i + 1);
        println!("   ├─ Index: {}", block.index());
        println!("   ├─ Time: {}", block.format_time());
        println!("   ├─ Timestamp (ns): {}", block.timestamp());
        println!("   ├─ Transactions: {}", block.tx_count());
        for tx in block.transactions() {
            println!("   │  └─ {}", tx);
        }
        println!("   ├─ Proof: {}", block.proof());
        println!("   ├─ Previous hash: {}", block.previous_hash());
        println!("   └─ Hash: {}\n", block.hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn fast_config() -> DemoConfig {
        DemoConfig {
            difficulties: vec![1, 2],
            chain_difficulty: 2,
            rsa_difficulty: 2,
            key_bits: 1024,
            ..DemoConfig::default()
        }
    }

    #[test]
    fn test_cmd_pow() {
        let results = cmd_pow(&fast_config()).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].digest_hex.starts_with('0'));
        assert!(results[1].digest_hex.starts_with("00"));
        assert!(results.iter().all(|r| r.input.starts_with("Lumos")));
    }

    #[test]
    fn test_cmd_pow_rejects_bad_difficulty() {
        let config = DemoConfig {
            difficulties: vec![65],
            ..fast_config()
        };
        assert!(cmd_pow(&config).is_err());
    }

    #[test]
    fn test_cmd_chain() {
        let blockchain = cmd_chain(&fast_config()).unwrap();

        assert_eq!(blockchain.blocks().len(), 3);
        assert_eq!(blockchain.blocks()[1].tx_count(), 2);
        assert_eq!(blockchain.blocks()[2].tx_count(), 2);
        assert!(blockchain.is_valid());
    }

    #[test]
    fn test_cmd_rsa() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            key_dir: dir.path().to_path_buf(),
            ..fast_config()
        };

        let signed = cmd_rsa(&config).unwrap();

        assert!(signed.verified);
        assert!(signed.result.digest_hex.starts_with("00"));
        assert!(dir.path().join(PRIVATE_KEY_FILE).exists());
        assert!(dir.path().join(PUBLIC_KEY_FILE).exists());
    }

    #[test]
    fn test_cmd_rsa_uses_its_own_difficulty() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            key_dir: dir.path().to_path_buf(),
            chain_difficulty: 64,
            rsa_difficulty: 1,
            ..fast_config()
        };

        let signed = cmd_rsa(&config).unwrap();

        assert!(signed.result.digest_hex.starts_with('0'));
        assert!(signed.verified);
    }

    #[test]
    fn test_cmd_rsa_survives_failed_save() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            key_dir: dir.path().join("missing"),
            ..fast_config()
        };

        let signed = cmd_rsa(&config).unwrap();
        assert!(signed.verified);
    }
}
