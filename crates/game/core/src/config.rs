/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Upper bound on scheduler ticks spent looking for the next mover.
    /// Guards against rosters where nobody alive can ever fill their gauge.
    pub max_ticks_per_turn: u32,
}

impl BattleConfig {
    // ===== compile-time constants =====
    /// Attack gauge value at which a creature may act.
    pub const GAUGE_FULL: f64 = 1.0;
    /// Attack gauge value after `restore()`.
    pub const GAUGE_EMPTY: f64 = 0.0;
    /// Gauge gained per tick per point of attack speed.
    pub const GAUGE_TICK_RATE: f64 = 0.07;
    /// Lower bound of the debuff resist chance.
    pub const MIN_RESIST_CHANCE: f64 = 0.15;
    /// Fraction of max HP restored by a basic heal.
    pub const BASIC_HEAL_FRACTION: f64 = 0.05;
    /// A mover recovers `max_mp / MP_RECOVERY_DIVISOR` after its turn.
    pub const MP_RECOVERY_DIVISOR: u32 = 12;
    /// Attack speed gained per creature level.
    pub const LEVEL_UP_SPEED_BONUS: u32 = 2;
    /// Multiplier applied to each attack skill coefficient per skill level.
    pub const ATTACK_SKILL_LEVEL_FACTOR: f64 = 1.25;
    /// Maximum number of creatures in a battle team.
    pub const MAX_TEAM_SIZE: usize = 5;
    /// Number of rune slots per creature (numbered `1..=RUNE_SLOTS`).
    pub const RUNE_SLOTS: usize = 8;
    /// Experience required for the first level-up of creatures and trainers.
    pub const INITIAL_REQUIRED_EXP: u32 = 1_000_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_TICKS_PER_TURN: u32 = 100_000;

    pub fn new() -> Self {
        Self {
            max_ticks_per_turn: Self::DEFAULT_MAX_TICKS_PER_TURN,
        }
    }

    pub fn with_max_ticks_per_turn(max_ticks_per_turn: u32) -> Self {
        Self { max_ticks_per_turn }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
