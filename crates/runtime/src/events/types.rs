//! Event payloads published by the runner.

use battle_core::{
    ActionOutcome, BattleAction, BattleKind, BattleStatus, CombatantId, Reward,
};
use serde::{Deserialize, Serialize};

use super::bus::Topic;

/// Something that happened during a battle.
///
/// `turn` is the number of completed turns when the event fired, so all
/// events of one turn share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BattleEvent {
    /// A battle was handed to the runner.
    Started {
        kind: BattleKind,
        team1: usize,
        team2: usize,
        /// Reward team1 receives on a win, fixed at construction.
        reward: Reward,
    },

    /// The scheduler selected a mover.
    TurnStarted {
        turn: u32,
        actor: CombatantId,
        gauge: f64,
    },

    /// An action resolved.
    ActionResolved {
        turn: u32,
        action: BattleAction,
        outcome: ActionOutcome,
    },

    /// The engine refused a provider's command; the turn was forfeited.
    CommandRejected {
        turn: u32,
        actor: CombatantId,
        code: String,
        reason: String,
    },

    /// A ball was thrown at the wild creature.
    CaptureAttempted {
        turn: u32,
        actor: CombatantId,
        ball: String,
        caught: bool,
    },

    /// Team1 ran from a wild battle.
    Fled { turn: u32, actor: CombatantId },

    /// The mover chose to do nothing.
    Passed { turn: u32, actor: CombatantId },

    /// The battle reached a terminal state and everyone was restored.
    Ended {
        status: BattleStatus,
        turns: u32,
        reward: Option<Reward>,
        survivors: Vec<usize>,
    },
}

impl BattleEvent {
    pub fn topic(&self) -> Topic {
        match self {
            Self::Started { .. } | Self::Ended { .. } => Topic::Lifecycle,
            Self::TurnStarted { .. } => Topic::Turn,
            Self::ActionResolved { .. }
            | Self::CommandRejected { .. }
            | Self::CaptureAttempted { .. }
            | Self::Fled { .. }
            | Self::Passed { .. } => Topic::Action,
        }
    }
}
