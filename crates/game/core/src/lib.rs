//! Deterministic battle rules for a creature-collecting RPG.
//!
//! `battle-core` holds the stat model, runes, skills, the action resolver, the
//! attack-gauge scheduler and the battle state machine. It performs no I/O and
//! never logs; randomness comes in through [`RngOracle`] so every outcome can be
//! pinned by a seed. Battle state flows through [`Battle`], which borrows the
//! callers' creatures for the length of one encounter.
pub mod action;
pub mod battle;
pub mod combat;
pub mod config;
pub mod creature;
pub mod error;
pub mod rng;
pub mod rune;
pub mod skill;
pub mod stats;
pub mod team;
pub mod trainer;

pub use bigdecimal::BigDecimal;

pub use action::{ActionError, ActionKind, ActionOutcome, BattleAction, Target};
pub use battle::{
    Battle, BattleError, BattleKind, BattleReport, BattleStatus, CaptureError, Reward, TurnError,
};
pub use combat::Ball;
pub use config::BattleConfig;
pub use creature::{Consumable, ConsumableError, Creature, CreatureKind};
pub use error::{BattleFault, ErrorSeverity};
pub use rng::{FixedRoll, PcgRng, RngOracle};
pub use rune::{Rune, RuneError, RuneSlots};
pub use skill::{DamageMultiplier, Skill, SkillCategory, SkillEffect};
pub use stats::{PercentModifiers, StatBlock, StatIncrease};
pub use team::{CombatantId, Side, Team};
pub use trainer::{Trainer, TrainerError};
