//! Percentage buffs and debuffs accumulated during a battle.
//!
//! Values are whole percentages (`25.0` = +25%). They stack additively and are
//! never clamped; `restore()` is the only thing that clears them.

/// Active percentage modifiers on a creature.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentModifiers {
    pub attack_up: f64,
    pub attack_down: f64,
    pub defense_up: f64,
    pub defense_down: f64,
}

impl PercentModifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplier applied to attack: `1 + up/100 - down/100`.
    pub fn attack_factor(&self) -> f64 {
        1.0 + self.attack_up / 100.0 - self.attack_down / 100.0
    }

    /// Multiplier applied to defense: `1 + up/100 - down/100`.
    pub fn defense_factor(&self) -> f64 {
        1.0 + self.defense_up / 100.0 - self.defense_down / 100.0
    }

    /// Adds a self-buff.
    pub fn buff(&mut self, attack_pct: f64, defense_pct: f64) {
        self.attack_up += attack_pct;
        self.defense_up += defense_pct;
    }

    /// Adds a debuff.
    pub fn debuff(&mut self, attack_pct: f64, defense_pct: f64) {
        self.attack_down += attack_pct;
        self.defense_down += defense_pct;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }
}
