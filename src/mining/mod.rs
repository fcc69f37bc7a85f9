//! Mining module: the nonce search and block mining on top of it

pub mod miner;
pub mod search;

pub use miner::{Miner, MiningStats};
pub use search::{
    check_difficulty, meets_difficulty, search, verify, NonceSearch, SearchError, SearchResult,
};
