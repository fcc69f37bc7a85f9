//! Command-line interface handlers

pub mod commands;

pub use commands::{cmd_chain, cmd_pow, cmd_rsa, CliResult, SignedProof};
