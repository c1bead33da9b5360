//! Async orchestration for battles.
//!
//! `battle-core` decides what a turn does; this crate decides who chooses it.
//! A [`BattleRunner`] drives one [`battle_core::Battle`] to completion, asking
//! an [`ActionProvider`] per side for each mover's command and publishing
//! [`BattleEvent`]s as it goes. The [`encounter`] functions wrap a run with the
//! bookkeeping around it: rewards, captured creatures and CPU trainer defeats.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types clients interact with
//! - [`providers`] holds the stock providers (random policy, scripted, fixed)
//! - [`events`] provides the topic-based event bus
//! - [`runner`] hosts the turn loop
//! - [`encounter`] applies battle outcomes to trainers
//! - [`config`] carries runtime tunables
pub mod api;
pub mod config;
pub mod encounter;
pub mod events;
pub mod providers;
pub mod runner;

pub use api::{ActionProvider, Result, RuntimeError, TurnCommand};
pub use config::RuntimeConfig;
pub use encounter::{TrainerOutcome, WildOutcome, run_trainer_battle, run_wild_battle};
pub use events::{BattleEvent, EventBus, Topic};
pub use providers::{BasicAttackProvider, PassProvider, RandomPolicyProvider, ScriptedProvider};
pub use runner::BattleRunner;
