//! Demo configuration
//!
//! The values the demos run with. Command-line flags override individual
//! fields; anything left unset falls back to [`DemoConfig::default`].

use crate::core::DEFAULT_DIFFICULTY;
use crate::crypto::DEFAULT_KEY_BITS;
use std::path::PathBuf;

/// Nickname used as the search base string
pub const DEFAULT_NICKNAME: &str = "Lumos";

/// Demo configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Base string for the standalone search and the RSA demo
    pub nickname: String,
    /// Difficulties the standalone search runs through, in order
    pub difficulties: Vec<usize>,
    /// Difficulty of the toy chain
    pub chain_difficulty: usize,
    /// Difficulty of the search whose result the RSA demo signs
    pub rsa_difficulty: usize,
    /// RSA modulus size in bits
    pub key_bits: usize,
    /// Directory the PEM files are written to
    pub key_dir: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            nickname: DEFAULT_NICKNAME.to_string(),
            difficulties: vec![4, 5],
            chain_difficulty: DEFAULT_DIFFICULTY,
            rsa_difficulty: DEFAULT_DIFFICULTY,
            key_bits: DEFAULT_KEY_BITS,
            key_dir: PathBuf::from("."),
        }
    }
}

impl DemoConfig {
    /// Replace the nickname if one was given
    pub fn with_nickname(mut self, nickname: Option<String>) -> Self {
        if let Some(nickname) = nickname {
            self.nickname = nickname;
        }
        self
    }

    /// Replace the difficulty list if it is non-empty
    pub fn with_difficulties(mut self, difficulties: Vec<usize>) -> Self {
        if !difficulties.is_empty() {
            self.difficulties = difficulties;
        }
        self
    }

    pub fn with_chain_difficulty(mut self, difficulty: Option<usize>) -> Self {
        if let Some(difficulty) = difficulty {
            self.chain_difficulty = difficulty;
        }
        self
    }

    pub fn with_rsa_difficulty(mut self, difficulty: Option<usize>) -> Self {
        if let Some(difficulty) = difficulty {
            self.rsa_difficulty = difficulty;
        }
        self
    }

    pub fn with_key_bits(mut self, bits: Option<usize>) -> Self {
        if let Some(bits) = bits {
            self.key_bits = bits;
        }
        self
    }

    pub fn with_key_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.key_dir = dir;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.nickname, "Lumos");
        assert_eq!(config.difficulties, vec![4, 5]);
        assert_eq!(config.chain_difficulty, 4);
        assert_eq!(config.rsa_difficulty, 4);
        assert_eq!(config.key_bits, 2048);
        assert_eq!(config.key_dir, PathBuf::from("."));
    }

    #[test]
    fn test_overrides() {
        let config = DemoConfig::default()
            .with_nickname(Some("Nox".to_string()))
            .with_difficulties(vec![2])
            .with_chain_difficulty(Some(3))
            .with_key_bits(None)
            .with_key_dir(Some(PathBuf::from("/tmp/keys")));

        assert_eq!(config.nickname, "Nox");
        assert_eq!(config.difficulties, vec![2]);
        assert_eq!(config.chain_difficulty, 3);
        assert_eq!(config.key_bits, 2048);
        assert_eq!(config.key_dir, PathBuf::from("/tmp/keys"));
    }

    #[test]
    fn test_rsa_difficulty_is_independent() {
        let config = DemoConfig::default().with_rsa_difficulty(Some(2));
        assert_eq!(config.rsa_difficulty, 2);
        assert_eq!(config.chain_difficulty, 4);

        let config = DemoConfig::default().with_chain_difficulty(Some(6));
        assert_eq!(config.rsa_difficulty, 4);
        assert_eq!(config.chain_difficulty, 6);
    }

    #[test]
    fn test_empty_difficulties_keep_default() {
        let config = DemoConfig::default().with_difficulties(Vec::new());
        assert_eq!(config.difficulties, vec![4, 5]);
    }
}
