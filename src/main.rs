//! Strictly Console - tic-tac-toe at the terminal.
//!
//! Prompts go to stdout, logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io;
use strictly_console::{GameConfig, HumanPlayer, Orchestrator, RandomPlayer};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    run_game(&config)
}

/// Run one game on the terminal
#[instrument(skip(config))]
fn run_game(config: &GameConfig) -> Result<()> {
    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
    let computer = match config.seed() {
        Some(seed) => {
            RandomPlayer::seeded(config.computer_name().clone(), *seed, *config.sampling())
        }
        None => RandomPlayer::from_entropy(config.computer_name().clone(), *config.sampling()),
    };

    let mut orchestrator = Orchestrator::new(
        *config.human_mark(),
        Box::new(human),
        Box::new(computer),
        io::stdout(),
    );
    let outcome = orchestrator.run().context("Game stopped before it finished")?;

    info!(%outcome, "Exiting");
    Ok(())
}

#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::default()
        }
    };
    Ok(cli.apply(config))
}

fn initialize_tracing(filter: Option<&str>) {
    let filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
