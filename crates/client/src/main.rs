//! Battle simulator binary.
//!
//! Loads content, builds the player's trainer from `--team`, runs one trainer
//! or wild encounter with AI on both sides and prints a JSON summary to
//! stdout. Logs go to stderr (`RUST_LOG`, default `info`).
//!
//! # Examples
//!
//! ```bash
//! cargo run -p battle-client -- --team Emberhorn,Tidewhisker trainer --opponent Rowan
//! cargo run -p battle-client -- --team Emberhorn --events \
//!     wild --creature Gloomfin --ball "Great Ball"
//! ```

mod cli;
mod hunter;

use anyhow::{Result, anyhow};
use battle_content::{ConfigLoader, ContentFactory};
use battle_core::Trainer;
use battle_runtime::{
    BattleEvent, BattleRunner, RandomPolicyProvider, run_trainer_battle, run_wild_battle,
};
use clap::Parser;
use tokio::sync::broadcast;

use cli::{Cli, Command};
use hunter::HunterProvider;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse()).await
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn log_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

async fn run(cli: Cli) -> Result<()> {
    let factory = match &cli.data {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    };
    let config = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => factory.load_config()?,
    };
    let mut config = config.with_env_overrides()?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let seed = config.seed;
    tracing::info!(seed, data = %factory.data_dir().display(), "starting battle simulator");

    let catalog = factory.load_creatures()?;
    let creatures = cli
        .team
        .iter()
        .map(|name| catalog.spawn(name))
        .collect::<Result<Vec<_>>>()?;
    let mut player = Trainer::with_team("Player", creatures);

    let mut runner = BattleRunner::new(config);
    runner.set_team2_provider(RandomPolicyProvider::seeded(seed.wrapping_add(1)));
    let printer = cli
        .events
        .then(|| tokio::spawn(print_events(runner.events().subscribe_all())));

    let summary = match cli.command {
        Command::Trainer { opponent } => {
            let mut trainers = factory.load_trainers(&catalog)?;
            let cpu = trainers
                .iter_mut()
                .find(|t| t.name == opponent)
                .ok_or_else(|| anyhow!("Unknown trainer '{}'", opponent))?;

            runner.set_team1_provider(RandomPolicyProvider::seeded(seed));
            let outcome = run_trainer_battle(&mut runner, &mut player, cpu).await?;
            serde_json::json!({
                "report": outcome.report,
                "player": player_summary(&player),
                "player_levels_gained": outcome.player_levels,
                "opponent": { "name": cpu.name, "times_beaten": cpu.times_beaten },
            })
        }
        Command::Wild {
            creature,
            ball,
            throw_below,
        } => {
            let wild = catalog.spawn(&creature)?;
            match ball {
                Some(name) => {
                    let items = factory.load_items()?;
                    let ball = items
                        .ball(&name)
                        .cloned()
                        .ok_or_else(|| anyhow!("Unknown ball '{}'", name))?;
                    runner.set_team1_provider(HunterProvider::new(
                        ball,
                        throw_below,
                        RandomPolicyProvider::seeded(seed),
                    ));
                }
                None => runner.set_team1_provider(RandomPolicyProvider::seeded(seed)),
            }

            let outcome = run_wild_battle(&mut runner, &mut player, wild).await?;
            serde_json::json!({
                "report": outcome.report,
                "player": player_summary(&player),
                "player_levels_gained": outcome.player_levels,
                "captured": outcome.captured,
            })
        }
    };

    // Dropping the runner closes the event bus so the printer can finish.
    drop(runner);
    if let Some(printer) = printer {
        printer.await?;
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn player_summary(player: &Trainer) -> serde_json::Value {
    serde_json::json!({
        "name": player.name,
        "level": player.level,
        "coins": player.coins.to_string(),
        "exp": player.exp.to_string(),
        "roster": player.roster().iter().map(|c| &c.name).collect::<Vec<_>>(),
        "team": player.team_indices(),
    })
}

async fn print_events(mut events: broadcast::Receiver<BattleEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => match serde_json::to_string(&event) {
                Ok(line) => println!("{line}"),
                Err(err) => tracing::warn!(error = %err, "failed to encode event"),
            },
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "event printer fell behind");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}
