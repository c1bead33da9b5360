//! Stat increase carried by a rune.
//!
//! Percentage terms are whole percentages applied as `× (1 + pct/100)` before
//! the flat term is added. Crit, resistance and accuracy are fractions (0.01 = 1%).

use bigdecimal::BigDecimal;

use super::decimal::{hundredths, pow10};

/// Additive and percentage stat increases granted by an equipped rune.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatIncrease {
    pub max_hp_flat: BigDecimal,
    pub max_hp_pct: BigDecimal,
    pub max_mp_flat: BigDecimal,
    pub max_mp_pct: BigDecimal,
    pub attack_flat: BigDecimal,
    pub attack_pct: BigDecimal,
    pub defense_flat: BigDecimal,
    pub defense_pct: BigDecimal,
    pub attack_speed: u32,
    pub crit_rate: BigDecimal,
    pub crit_damage: BigDecimal,
    pub resistance: BigDecimal,
    pub accuracy: BigDecimal,
}

impl StatIncrease {
    /// Standard increase for a rune of the given rating.
    ///
    /// ```text
    /// hp/mp flat      = 10^(6r)     attack/defense flat = 10^(5r)
    /// every pct       = 2r          attack speed        = 2r
    /// crit/res/acc    = 0.01r       crit damage         = 0.05r
    /// ```
    pub fn for_rating(rating: u8) -> Self {
        let r = u32::from(rating);
        let n = u64::from(rating);
        Self {
            max_hp_flat: pow10(6 * n),
            max_hp_pct: BigDecimal::from(2 * r),
            max_mp_flat: pow10(6 * n),
            max_mp_pct: BigDecimal::from(2 * r),
            attack_flat: pow10(5 * n),
            attack_pct: BigDecimal::from(2 * r),
            defense_flat: pow10(5 * n),
            defense_pct: BigDecimal::from(2 * r),
            attack_speed: 2 * r,
            crit_rate: hundredths(r),
            crit_damage: hundredths(5 * r),
            resistance: hundredths(r),
            accuracy: hundredths(r),
        }
    }

    /// Strengthens the increase by one rune level.
    pub(crate) fn level_up(&mut self, rating: u8) {
        let r = u32::from(rating);
        let scale = pow10(u64::from(rating));

        self.max_hp_flat *= &scale;
        self.max_hp_pct += BigDecimal::from(r);
        self.max_mp_flat *= &scale;
        self.max_mp_pct += BigDecimal::from(r);
        self.attack_flat *= &scale;
        self.attack_pct += BigDecimal::from(r);
        self.defense_flat *= &scale;
        self.defense_pct += BigDecimal::from(r);
        self.attack_speed += 2 * r;
        self.crit_rate += hundredths(r);
        self.crit_damage += hundredths(5 * r);
        self.resistance += hundredths(r);
        self.accuracy += hundredths(r);
    }
}
