//! Command-line interface for strictly_console.

use clap::Parser;
use std::path::PathBuf;
use strictly_console::{GameConfig, Player, SamplingStrategy};

/// Tic-tac-toe against a computer that plays random open squares
#[derive(Parser, Debug)]
#[command(name = "strictly_console")]
#[command(about = "Play tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (optional)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the computer samples open squares (rejection or uniform)
    #[arg(long)]
    pub sampling: Option<SamplingStrategy>,

    /// Mark for the human player (x or o); the human always moves first
    #[arg(long)]
    pub human_mark: Option<Player>,

    /// Log filter, overrides RUST_LOG (logs go to stderr)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(sampling) = self.sampling {
            config = config.with_sampling(sampling);
        }
        if let Some(mark) = self.human_mark {
            config = config.with_human_mark(mark);
        }
        config
    }
}
