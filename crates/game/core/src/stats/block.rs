//! Per-creature stat block.
//!
//! Holds base and derived numbers, the active percentage modifiers and the
//! attack gauge. Stat values are [`BigDecimal`]: they grow multiplicatively
//! (rune flats of `10^36`, evolution `× 10^5`, triangular level multipliers)
//! and rune removal has to undo rune placement to the last digit.

use bigdecimal::{BigDecimal, Signed, Zero};

use super::decimal::{decimal, percent_factor, pow10, to_f64};
use super::increase::StatIncrease;
use super::modifiers::PercentModifiers;
use crate::config::BattleConfig;

/// Triangular number `T(n) = n·(n−1)/2` used as the level-up stat multiplier.
pub fn triangular(n: u32) -> u64 {
    let n = u64::from(n);
    n * n.saturating_sub(1) / 2
}

/// Numeric attributes of a single creature.
///
/// Invariant: `hp <= max_hp` and `mp <= max_mp` after every operation in this
/// module. Damage may push `hp` below zero; fainting is judged by the battle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub hp: BigDecimal,
    pub max_hp: BigDecimal,
    pub mp: BigDecimal,
    pub max_mp: BigDecimal,
    pub attack: BigDecimal,
    pub defense: BigDecimal,
    pub attack_speed: u32,
    pub crit_rate: BigDecimal,
    pub crit_damage: BigDecimal,
    pub resistance: BigDecimal,
    pub accuracy: BigDecimal,
    pub modifiers: PercentModifiers,
    pub attack_gauge: f64,
    pub level: u32,
    pub exp: BigDecimal,
    pub required_exp: BigDecimal,
    pub has_evolved: bool,
}

impl StatBlock {
    pub const DEFAULT_CRIT_RATE: f64 = 0.15;
    pub const DEFAULT_CRIT_DAMAGE: f64 = 1.5;
    pub const DEFAULT_RESISTANCE: f64 = 0.15;
    pub const DEFAULT_ACCURACY: f64 = 0.0;

    const EVOLUTION_EXPONENT: u64 = 5;
    const EVOLUTION_SPEED_BONUS: u32 = 15;
    const EVOLUTION_CRIT_RATE_BONUS: f64 = 0.15;
    const EVOLUTION_CRIT_DAMAGE_BONUS: f64 = 0.5;
    const EVOLUTION_RESISTANCE_BONUS: f64 = 0.15;
    const EVOLUTION_ACCURACY_BONUS: f64 = 0.15;

    /// Creates a level 1 stat block at full HP/MP.
    pub fn new(
        max_hp: impl Into<BigDecimal>,
        max_mp: impl Into<BigDecimal>,
        attack: impl Into<BigDecimal>,
        defense: impl Into<BigDecimal>,
        attack_speed: u32,
    ) -> Self {
        let max_hp = max_hp.into();
        let max_mp = max_mp.into();
        Self {
            hp: max_hp.clone(),
            max_hp,
            mp: max_mp.clone(),
            max_mp,
            attack: attack.into(),
            defense: defense.into(),
            attack_speed,
            crit_rate: decimal(Self::DEFAULT_CRIT_RATE),
            crit_damage: decimal(Self::DEFAULT_CRIT_DAMAGE),
            resistance: decimal(Self::DEFAULT_RESISTANCE),
            accuracy: decimal(Self::DEFAULT_ACCURACY),
            modifiers: PercentModifiers::new(),
            attack_gauge: BattleConfig::GAUGE_EMPTY,
            level: 1,
            exp: BigDecimal::zero(),
            required_exp: BigDecimal::from(BattleConfig::INITIAL_REQUIRED_EXP),
            has_evolved: false,
        }
    }

    /// Sets resistance (builder pattern).
    #[must_use]
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = decimal(resistance);
        self
    }

    /// Sets accuracy (builder pattern).
    #[must_use]
    pub fn with_accuracy(mut self, accuracy: f64) -> Self {
        self.accuracy = decimal(accuracy);
        self
    }

    /// Sets the starting level (builder pattern). Stats are taken as given.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp.is_positive()
    }

    /// Attack after percentage modifiers.
    pub fn effective_attack(&self) -> BigDecimal {
        &self.attack * decimal(self.modifiers.attack_factor())
    }

    /// Defense after percentage modifiers.
    pub fn effective_defense(&self) -> BigDecimal {
        &self.defense * decimal(self.modifiers.defense_factor())
    }

    /// Fraction of max HP already lost, `1 - hp/max_hp`.
    pub fn hp_loss_fraction(&self) -> f64 {
        if !self.max_hp.is_positive() {
            return 1.0;
        }
        1.0 - to_f64(&(&self.hp / &self.max_hp))
    }

    /// Subtracts damage. HP may go negative.
    pub fn take_damage(&mut self, amount: &BigDecimal) {
        self.hp -= amount;
    }

    /// Adds HP, capped at `max_hp`. Returns the amount actually restored.
    pub fn heal(&mut self, amount: &BigDecimal) -> BigDecimal {
        let before = self.hp.clone();
        self.hp = (&self.hp + amount).min(self.max_hp.clone());
        (&self.hp - &before).max(BigDecimal::zero())
    }

    /// Spends MP. The caller has already checked affordability.
    pub fn spend_mp(&mut self, amount: &BigDecimal) {
        self.mp -= amount;
    }

    /// Regains `max_mp / 12`, capped at `max_mp`.
    pub fn recover_mp(&mut self) {
        let regen = &self.max_mp / &BigDecimal::from(BattleConfig::MP_RECOVERY_DIVISOR);
        self.mp = (&self.mp + regen).min(self.max_mp.clone());
    }

    /// Advances the attack gauge by one scheduler tick.
    pub fn tick_gauge(&mut self) {
        self.attack_gauge += f64::from(self.attack_speed) * BattleConfig::GAUGE_TICK_RATE;
    }

    pub fn gauge_is_full(&self) -> bool {
        self.attack_gauge >= BattleConfig::GAUGE_FULL
    }

    /// Empties the gauge, refills HP/MP and clears percentage modifiers.
    ///
    /// Level, experience and base stats are untouched.
    pub fn restore(&mut self) {
        self.attack_gauge = BattleConfig::GAUGE_EMPTY;
        self.hp = self.max_hp.clone();
        self.mp = self.max_mp.clone();
        self.modifiers.reset();
    }

    /// Folds a rune's increase into the block, then restores.
    ///
    /// Percentage first, flat second, for hp, mp, attack and defense.
    pub fn apply_increase(&mut self, inc: &StatIncrease) {
        grow(&mut self.max_hp, &inc.max_hp_pct, &inc.max_hp_flat);
        grow(&mut self.max_mp, &inc.max_mp_pct, &inc.max_mp_flat);
        grow(&mut self.attack, &inc.attack_pct, &inc.attack_flat);
        grow(&mut self.defense, &inc.defense_pct, &inc.defense_flat);
        self.attack_speed = self.attack_speed.saturating_add(inc.attack_speed);
        self.crit_rate += &inc.crit_rate;
        self.crit_damage += &inc.crit_damage;
        self.resistance += &inc.resistance;
        self.accuracy += &inc.accuracy;
        self.restore();
    }

    /// Exact inverse of [`apply_increase`](Self::apply_increase): subtract the
    /// flat term, then divide out the percentage term. Restores afterwards.
    pub fn remove_increase(&mut self, inc: &StatIncrease) {
        shrink(&mut self.max_hp, &inc.max_hp_pct, &inc.max_hp_flat);
        shrink(&mut self.max_mp, &inc.max_mp_pct, &inc.max_mp_flat);
        shrink(&mut self.attack, &inc.attack_pct, &inc.attack_flat);
        shrink(&mut self.defense, &inc.defense_pct, &inc.defense_flat);
        self.attack_speed = self.attack_speed.saturating_sub(inc.attack_speed);
        self.crit_rate -= &inc.crit_rate;
        self.crit_damage -= &inc.crit_damage;
        self.resistance -= &inc.resistance;
        self.accuracy -= &inc.accuracy;
        self.restore();
    }

    /// Adds experience without levelling.
    pub fn gain_exp(&mut self, amount: &BigDecimal) {
        self.exp += amount;
    }

    /// Levels up while `exp >= required_exp`. Returns the number of levels gained.
    ///
    /// Each level: `required_exp *= 10^level`, attack/hp/mp/defense `*= T(level)`,
    /// attack speed `+= 2`, then `restore()`.
    pub fn level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.exp >= self.required_exp {
            self.level += 1;
            self.required_exp *= pow10(u64::from(self.level));
            let factor = BigDecimal::from(triangular(self.level));
            self.attack *= &factor;
            self.max_hp *= &factor;
            self.max_mp *= &factor;
            self.defense *= &factor;
            self.attack_speed = self
                .attack_speed
                .saturating_add(BattleConfig::LEVEL_UP_SPEED_BONUS);
            self.restore();
            gained += 1;
        }
        gained
    }

    /// One-time evolution. Returns `false` (and changes nothing) if already evolved.
    pub fn evolve(&mut self) -> bool {
        if self.has_evolved {
            return false;
        }
        self.has_evolved = true;
        let factor = pow10(Self::EVOLUTION_EXPONENT);
        self.max_hp *= &factor;
        self.max_mp *= &factor;
        self.attack *= &factor;
        self.defense *= &factor;
        self.attack_speed = self
            .attack_speed
            .saturating_add(Self::EVOLUTION_SPEED_BONUS);
        self.crit_rate += decimal(Self::EVOLUTION_CRIT_RATE_BONUS);
        self.crit_damage += decimal(Self::EVOLUTION_CRIT_DAMAGE_BONUS);
        self.resistance += decimal(Self::EVOLUTION_RESISTANCE_BONUS);
        self.accuracy += decimal(Self::EVOLUTION_ACCURACY_BONUS);
        self.restore();
        true
    }
}

fn grow(stat: &mut BigDecimal, pct: &BigDecimal, flat: &BigDecimal) {
    *stat *= percent_factor(pct);
    *stat += flat;
}

fn shrink(stat: &mut BigDecimal, pct: &BigDecimal, flat: &BigDecimal) {
    *stat -= flat;
    let factor = percent_factor(pct);
    if !factor.is_zero() {
        *stat = &*stat / &factor;
    }
}
