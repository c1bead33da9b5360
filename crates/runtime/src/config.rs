//! Runtime configuration.

use std::str::FromStr;

use battle_core::BattleConfig;
use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};
use crate::events::EventBus;

/// Runtime configuration shared by the runner and encounter helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    /// Seed for the engine's roll source.
    pub seed: u64,
    /// Turns after which the runner gives up on a battle.
    pub max_turns: u32,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_SEED: u64 = 0x5EED;
    pub const DEFAULT_MAX_TURNS: u32 = 10_000;

    pub const ENV_SEED: &'static str = "BATTLE_SEED";
    pub const ENV_MAX_TURNS: &'static str = "BATTLE_MAX_TURNS";
    pub const ENV_EVENT_BUFFER: &'static str = "BATTLE_EVENT_BUFFER";

    /// Defaults overridden by the environment, see
    /// [`with_env_overrides`](Self::with_env_overrides).
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Applies `BATTLE_SEED`, `BATTLE_MAX_TURNS` and `BATTLE_EVENT_BUFFER`
    /// when set. A value that does not parse is an error, not a silent default.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(seed) = read_env(Self::ENV_SEED)? {
            self.seed = seed;
        }
        if let Some(max_turns) = read_env(Self::ENV_MAX_TURNS)? {
            self.max_turns = max_turns;
        }
        if let Some(size) = read_env(Self::ENV_EVENT_BUFFER)? {
            self.event_buffer_size = size;
        }
        Ok(self)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            seed: Self::DEFAULT_SEED,
            max_turns: Self::DEFAULT_MAX_TURNS,
            event_buffer_size: EventBus::DEFAULT_CAPACITY,
        }
    }
}

fn read_env<T: FromStr>(key: &'static str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| RuntimeError::InvalidEnv { key, value }),
        Err(_) => Ok(None),
    }
}
