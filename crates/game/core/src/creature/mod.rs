//! Creatures: identity, stats, owned skills and rune slots.

mod consumable;

pub use consumable::{Consumable, ConsumableError};

use bigdecimal::BigDecimal;

use crate::rune::{Rune, RuneError, RuneSlots};
use crate::skill::Skill;
use crate::stats::StatBlock;

/// Creature habitat type.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CreatureKind {
    #[default]
    Land,
    Water,
}

/// A legendary creature.
///
/// The creature exclusively owns its [`StatBlock`], its skill instances and
/// its runes. Battles borrow it mutably; changes are visible to the owner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub name: String,
    pub kind: CreatureKind,
    pub stats: StatBlock,
    skills: Vec<Skill>,
    #[cfg_attr(feature = "serde", serde(default))]
    runes: RuneSlots,
}

impl Creature {
    pub fn new(
        name: impl Into<String>,
        kind: CreatureKind,
        stats: StatBlock,
        skills: Vec<Skill>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            stats,
            skills,
            runes: RuneSlots::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }

    /// Levels the skill at `index`. Returns `false` when there is no such skill.
    pub fn level_up_skill(&mut self, index: usize) -> bool {
        match self.skills.get_mut(index) {
            Some(skill) => {
                skill.level_up();
                true
            }
            None => false,
        }
    }

    pub fn runes(&self) -> &RuneSlots {
        &self.runes
    }

    /// Equips `rune` in its slot.
    ///
    /// An occupied slot is emptied first (its increase fully reversed), and
    /// the displaced rune is returned. Out-of-range slots fail without
    /// touching the creature.
    pub fn place_rune(&mut self, rune: Rune) -> Result<Option<Rune>, RuneError> {
        if !rune.slot_in_range() {
            return Err(RuneError::SlotOutOfRange { slot: rune.slot() });
        }

        let displaced = match self.runes.take(rune.slot()) {
            Ok(old) => {
                self.stats.remove_increase(old.increase());
                Some(old)
            }
            Err(_) => None,
        };

        self.stats.apply_increase(rune.increase());
        self.runes.insert(rune)?;
        Ok(displaced)
    }

    /// Unequips the rune in `slot`, reversing its increase.
    pub fn remove_rune(&mut self, slot: u8) -> Result<Rune, RuneError> {
        let rune = self.runes.take(slot)?;
        self.stats.remove_increase(rune.increase());
        Ok(rune)
    }

    /// Adds experience and levels up as far as it allows.
    pub fn gain_exp(&mut self, amount: &BigDecimal) -> u32 {
        self.stats.gain_exp(amount);
        self.stats.level_up()
    }

    pub fn level_up(&mut self) -> u32 {
        self.stats.level_up()
    }

    pub fn evolve(&mut self) -> bool {
        self.stats.evolve()
    }

    pub fn recover_mp(&mut self) {
        self.stats.recover_mp();
    }

    pub fn restore(&mut self) {
        self.stats.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{StatIncrease, pow10};

    fn creature() -> Creature {
        Creature::new(
            "Aquarion",
            CreatureKind::Water,
            StatBlock::new(1000, 100, 200, 50, 100),
            vec![Skill::heal("Mend", 10.0, 100.0)],
        )
    }

    fn hp_rune(slot: u8, pct: u32, flat: u32) -> Rune {
        Rune::with_increase(
            "Vital",
            slot,
            StatIncrease {
                max_hp_pct: BigDecimal::from(pct),
                max_hp_flat: BigDecimal::from(flat),
                ..StatIncrease::default()
            },
        )
    }

    #[test]
    fn place_then_remove_round_trips() {
        let mut c = creature();
        assert_eq!(c.place_rune(hp_rune(1, 100, 500)), Ok(None));
        assert_eq!(c.stats.max_hp, 2500);

        let removed = c.remove_rune(1).unwrap();
        assert_eq!(removed.slot(), 1);
        assert_eq!(c.stats.max_hp, 1000);
        assert!(c.runes().is_empty());
    }

    #[test]
    fn placing_into_occupied_slot_reverses_first() {
        let mut c = creature();
        c.place_rune(hp_rune(3, 100, 0)).unwrap();
        let displaced = c.place_rune(hp_rune(3, 0, 100)).unwrap();

        assert!(displaced.is_some());
        assert_eq!(c.stats.max_hp, 1100);
        assert_eq!(c.runes().len(), 1);
    }

    #[test]
    fn out_of_range_slot_leaves_creature_untouched() {
        let mut c = creature();
        c.stats.hp = BigDecimal::from(10);
        let before = c.clone();

        assert_eq!(
            c.place_rune(hp_rune(9, 100, 0)),
            Err(RuneError::SlotOutOfRange { slot: 9 })
        );
        assert_eq!(c.remove_rune(2), Err(RuneError::SlotEmpty { slot: 2 }));
        assert_eq!(c, before);
    }

    #[test]
    fn every_rating_round_trips_exactly() {
        for rating in Rune::MIN_RATING..=Rune::MAX_RATING {
            let mut c = creature();
            let before = c.stats.clone();

            assert_eq!(c.place_rune(Rune::new("Rated", "", 10, rating, 5)), Ok(None));
            assert!(c.stats.max_hp > before.max_hp, "rating {rating}");

            c.remove_rune(5).unwrap();
            assert_eq!(c.stats, before, "rating {rating}");
        }
    }

    #[test]
    fn top_rating_keeps_the_base_hp_digits() {
        let mut c = creature();
        c.place_rune(Rune::new("Starfall", "", 10, 6, 8)).unwrap();

        // 1000 * 1.12 + 10^36
        assert_eq!(c.stats.max_hp, pow10(36) + BigDecimal::from(1120));
        assert_eq!(c.stats.attack, pow10(30) + BigDecimal::from(224));
    }

    #[test]
    fn displacing_a_rune_of_any_rating_restores_stats() {
        for rating in Rune::MIN_RATING..=Rune::MAX_RATING {
            let mut c = creature();
            c.place_rune(Rune::new("Anchor", "", 10, 3, 1)).unwrap();
            let anchored = c.stats.clone();

            c.place_rune(Rune::new("Old", "", 10, rating, 2)).unwrap();
            let other = Rune::MAX_RATING + 1 - rating;
            let displaced = c.place_rune(Rune::new("New", "", 10, other, 2)).unwrap();
            assert_eq!(displaced.map(|r| r.rating()), Some(rating));
            assert_eq!(c.runes().len(), 2);

            c.remove_rune(2).unwrap();
            assert_eq!(c.stats, anchored, "rating {rating}");
        }
    }

    #[test]
    fn skill_level_up_by_index() {
        let mut c = creature();
        assert!(c.level_up_skill(0));
        assert!(!c.level_up_skill(4));
        assert_eq!(c.skill(0).map(Skill::level), Some(2));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("WATER".parse::<CreatureKind>(), Ok(CreatureKind::Water));
        assert_eq!(CreatureKind::Land.to_string(), "land");
    }
}
