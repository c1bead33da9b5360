//! Runes: equipment modifiers placed into numbered slots on a creature.
//!
//! A rune is an immutable description while equipped: it is moved into the
//! creature's [`RuneSlots`] and only handed back on removal, so its numbers
//! cannot change between folding them in and folding them out again.

mod error;
mod slots;

pub use error::RuneError;
pub use slots::RuneSlots;

use bigdecimal::{BigDecimal, Zero};

use crate::config::BattleConfig;
use crate::stats::{StatIncrease, pow10};

/// Equipment modifier item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rune {
    pub name: String,
    pub description: String,
    pub coin_cost: BigDecimal,
    rating: u8,
    slot: u8,
    level: u32,
    level_up_cost: BigDecimal,
    increase: StatIncrease,
}

impl Rune {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 6;
    pub const MIN_SLOT: u8 = 1;
    pub const MAX_SLOT: u8 = BattleConfig::RUNE_SLOTS as u8;

    /// Creates a rune whose stat increase is derived from its rating.
    ///
    /// A rating outside `1..=6` falls back to 1. The slot is kept as given and
    /// checked when the rune is placed.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        coin_cost: impl Into<BigDecimal>,
        rating: u8,
        slot: u8,
    ) -> Self {
        let rating = if (Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            rating
        } else {
            Self::MIN_RATING
        };
        let coin_cost = coin_cost.into();
        Self {
            name: name.into(),
            description: description.into(),
            level_up_cost: coin_cost.clone(),
            coin_cost,
            rating,
            slot,
            level: 1,
            increase: StatIncrease::for_rating(rating),
        }
    }

    /// Creates a rune with a hand-written stat increase.
    pub fn with_increase(name: impl Into<String>, slot: u8, increase: StatIncrease) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            coin_cost: BigDecimal::zero(),
            rating: Self::MIN_RATING,
            slot,
            level: 1,
            level_up_cost: BigDecimal::zero(),
            increase,
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn slot(&self) -> u8 {
        self.slot
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Coins needed for the next [`level_up`](Self::level_up).
    pub fn level_up_cost(&self) -> &BigDecimal {
        &self.level_up_cost
    }

    pub fn increase(&self) -> &StatIncrease {
        &self.increase
    }

    pub fn slot_in_range(&self) -> bool {
        (Self::MIN_SLOT..=Self::MAX_SLOT).contains(&self.slot)
    }

    /// Raises the rune level: cost `*= 10^level`, increase strengthened by rating.
    pub fn level_up(&mut self) {
        self.level += 1;
        self.level_up_cost *= pow10(u64::from(self.level));
        self.increase.level_up(self.rating);
    }
}
