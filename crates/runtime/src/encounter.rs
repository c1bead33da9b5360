//! Encounters: a battle plus what happens to the trainers afterwards.
//!
//! The engine only reports outcomes. These helpers apply them: the player
//! collects the reward on a win (creature experience to surviving team
//! members only), a caught wild creature joins the player's roster, and a
//! beaten CPU trainer records the loss. Every participant comes back
//! restored.

use battle_core::{Battle, BattleReport, BattleStatus, Creature, Trainer};

use crate::api::Result;
use crate::runner::BattleRunner;

/// Result of a trainer battle.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerOutcome {
    pub report: BattleReport,
    /// Levels the player gained from the reward.
    pub player_levels: u32,
}

/// Result of a wild battle.
#[derive(Debug, Clone, PartialEq)]
pub struct WildOutcome {
    pub report: BattleReport,
    pub player_levels: u32,
    /// Roster index of the creature when it was caught.
    pub captured: Option<usize>,
}

/// Runs the player's battle team against a CPU trainer's battle team.
pub async fn run_trainer_battle(
    runner: &mut BattleRunner,
    player: &mut Trainer,
    cpu: &mut Trainer,
) -> Result<TrainerOutcome> {
    tracing::info!(player = %player.name, cpu = %cpu.name, "trainer battle");
    let config = runner.config().battle.clone();
    let battle = Battle::trainer(player.battle_team(), cpu.battle_team()).with_config(config);
    let report = runner.run(battle).await?;

    let player_levels = settle(player, &report);
    if report.status == BattleStatus::Team1Won {
        cpu.record_defeat();
        tracing::info!(cpu = %cpu.name, times_beaten = cpu.times_beaten, "cpu trainer beaten");
    }

    Ok(TrainerOutcome {
        report,
        player_levels,
    })
}

/// Runs the player's battle team against a wild creature.
///
/// A caught creature is moved into the player's roster, and into the battle
/// team if there is room.
pub async fn run_wild_battle(
    runner: &mut BattleRunner,
    player: &mut Trainer,
    mut wild: Creature,
) -> Result<WildOutcome> {
    tracing::info!(player = %player.name, wild = %wild.name, "wild battle");
    let config = runner.config().battle.clone();
    let battle = Battle::wild(player.battle_team(), &mut wild).with_config(config);
    let report = runner.run(battle).await?;

    let player_levels = settle(player, &report);
    let captured = (report.status == BattleStatus::Captured).then(|| {
        let name = wild.name.clone();
        let index = player.adopt(wild);
        tracing::info!(player = %player.name, creature = %name, index, "creature captured");
        index
    });

    Ok(WildOutcome {
        report,
        player_levels,
        captured,
    })
}

fn settle(player: &mut Trainer, report: &BattleReport) -> u32 {
    let Some(reward) = &report.reward else {
        return 0;
    };
    let before = player.level;
    player.apply_reward(reward, &report.survivors);
    player.level - before
}
