//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Headless auto-battle simulator
#[derive(Parser, Debug)]
#[command(name = "battle-sim")]
#[command(about = "Runs one AI-driven encounter and prints the outcome as JSON", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Content directory (creatures.ron, trainers.ron, items.ron, battle.toml).
    /// Defaults to the bundled content.
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Runtime config TOML to use instead of <DATA>/battle.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for engine rolls and AI policies (overrides config and BATTLE_SEED)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print every battle event to stdout as a JSON line
    #[arg(long)]
    pub events: bool,

    /// Player creatures by catalog name, comma separated; the first five battle
    #[arg(long, value_delimiter = ',', required = true)]
    pub team: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fight a CPU trainer listed in trainers.ron
    Trainer {
        /// Trainer name
        #[arg(long)]
        opponent: String,
    },

    /// Fight a wild catalog creature
    Wild {
        /// Creature template name
        #[arg(long)]
        creature: String,

        /// Ball from items.ron to throw once the creature is weakened
        #[arg(long)]
        ball: Option<String>,

        /// Throw when the wild creature's health fraction is at or below this
        #[arg(long, default_value_t = 0.5)]
        throw_below: f64,
    },
}
