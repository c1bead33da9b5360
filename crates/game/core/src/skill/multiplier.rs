//! Linear damage coefficients for attack skills.

use bigdecimal::BigDecimal;

use crate::config::BattleConfig;
use crate::stats::{StatBlock, decimal};

/// Ten independent coefficients weighting the user's and target's stats.
///
/// ```text
/// raw = self.max_hp · self_max_hp + enemy.max_hp · enemy_max_hp
///     + self.atk · (self_attack_speed · self.speed) · self_attack
///     + enemy.atk · (enemy_attack_speed · enemy.speed) · enemy_attack
///     + self.def · self_defense + enemy.def · enemy_defense
///     + self.max_mp · self_max_mp + enemy.max_mp · enemy_max_mp
/// ```
///
/// Attack and defense terms use the modifier-adjusted values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageMultiplier {
    pub self_max_hp: f64,
    pub enemy_max_hp: f64,
    pub self_attack: f64,
    pub enemy_attack: f64,
    pub self_defense: f64,
    pub enemy_defense: f64,
    pub self_max_mp: f64,
    pub enemy_max_mp: f64,
    pub self_attack_speed: f64,
    pub enemy_attack_speed: f64,
}

impl DamageMultiplier {
    /// Multiplier that only scales the user's attack, `atk · speed · coefficient`.
    pub fn attack_scaling(coefficient: f64) -> Self {
        Self {
            self_attack: coefficient,
            self_attack_speed: 1.0,
            ..Self::default()
        }
    }

    /// Weighted sum of both creatures' stats, before the defense subtraction.
    pub fn weighted_sum(&self, user: &StatBlock, target: &StatBlock) -> BigDecimal {
        let speed = |coefficient: f64, attack_speed: u32| {
            decimal(coefficient) * BigDecimal::from(attack_speed)
        };
        [
            &user.max_hp * decimal(self.self_max_hp),
            &target.max_hp * decimal(self.enemy_max_hp),
            user.effective_attack()
                * speed(self.self_attack_speed, user.attack_speed)
                * decimal(self.self_attack),
            target.effective_attack()
                * speed(self.enemy_attack_speed, target.attack_speed)
                * decimal(self.enemy_attack),
            user.effective_defense() * decimal(self.self_defense),
            target.effective_defense() * decimal(self.enemy_defense),
            &user.max_mp * decimal(self.self_max_mp),
            &target.max_mp * decimal(self.enemy_max_mp),
        ]
        .into_iter()
        .sum()
    }

    /// Scales every coefficient by the attack-skill level factor.
    pub(crate) fn level_up(&mut self) {
        let f = BattleConfig::ATTACK_SKILL_LEVEL_FACTOR;
        self.self_max_hp *= f;
        self.enemy_max_hp *= f;
        self.self_attack *= f;
        self.enemy_attack *= f;
        self.self_defense *= f;
        self.enemy_defense *= f;
        self.self_max_mp *= f;
        self.enemy_max_mp *= f;
        self.self_attack_speed *= f;
        self.enemy_attack_speed *= f;
    }
}
