//! Mini-PoW-Chain CLI Application
//!
//! Runs the proof-of-work, toy chain and RSA signing demos.

use clap::{Parser, Subcommand};
use mini_pow_chain::cli;
use mini_pow_chain::config::DemoConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "powchain")]
#[command(author = "Darshan")]
#[command(version = "0.1.0")]
#[command(about = "Proof-of-work, toy blockchain and RSA signing demos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for hashes with leading zeros
    Pow {
        /// Base string the nonce is appended to [default: Lumos]
        #[arg(short, long)]
        nickname: Option<String>,

        /// Required leading zero hex characters; repeat to run several searches [default: 4 5]
        #[arg(short, long)]
        difficulty: Vec<usize>,
    },

    /// Build and mine the sample blockchain
    Chain {
        /// Mining difficulty (leading zero hex characters) [default: 4]
        #[arg(short, long)]
        difficulty: Option<usize>,
    },

    /// Generate RSA keys, mine a proof and sign it
    Rsa {
        /// Base string the nonce is appended to [default: Lumos]
        #[arg(short, long)]
        nickname: Option<String>,

        /// Required leading zero hex characters [default: 4]
        #[arg(short, long)]
        difficulty: Option<usize>,

        /// RSA modulus size in bits [default: 2048]
        #[arg(short, long)]
        bits: Option<usize>,

        /// Directory for private_key.pem and public_key.pem [default: .]
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = DemoConfig::default();

    match cli.command {
        Commands::Pow {
            nickname,
            difficulty,
        } => {
            let config = config
                .with_nickname(nickname)
                .with_difficulties(difficulty);
            cli::cmd_pow(&config)?;
        }

        Commands::Chain { difficulty } => {
            let config = config.with_chain_difficulty(difficulty);
            cli::cmd_chain(&config)?;
        }

        Commands::Rsa {
            nickname,
            difficulty,
            bits,
            out_dir,
        } => {
            let config = config
                .with_nickname(nickname)
                .with_rsa_difficulty(difficulty)
                .with_key_bits(bits)
                .with_key_dir(out_dir);
            cli::cmd_rsa(&config)?;
        }
    }

    Ok(())
}
