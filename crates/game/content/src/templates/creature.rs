//! Creature and rune templates.

use battle_core::stats::decimal;
use battle_core::{Creature, CreatureKind, Rune, RuneError, Skill, StatBlock};

/// Shop listing for a rune. The stat increase follows from the rating.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub coin_cost: f64,
    pub rating: u8,
    pub slot: u8,
}

impl RuneTemplate {
    pub fn build(&self) -> Rune {
        Rune::new(
            self.name.clone(),
            self.description.clone(),
            decimal(self.coin_cost),
            self.rating,
            self.slot,
        )
    }
}

/// Species description a creature is spawned from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: CreatureKind,
    pub max_hp: f64,
    pub max_mp: f64,
    pub attack: f64,
    pub defense: f64,
    pub attack_speed: u32,
    #[cfg_attr(feature = "serde", serde(default = "CreatureTemplate::default_level"))]
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<Skill>,
    /// Runes equipped on spawn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub runes: Vec<RuneTemplate>,
}

impl CreatureTemplate {
    fn default_level() -> u32 {
        1
    }

    /// Spawns a fresh creature at full HP/MP with its starting runes placed.
    pub fn build(&self) -> Result<Creature, RuneError> {
        let stats = StatBlock::new(
            decimal(self.max_hp),
            decimal(self.max_mp),
            decimal(self.attack),
            decimal(self.defense),
            self.attack_speed,
        )
        .with_level(self.level);
        let mut creature = Creature::new(self.name.clone(), self.kind, stats, self.skills.clone());
        for rune in &self.runes {
            creature.place_rune(rune.build())?;
        }
        Ok(creature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> CreatureTemplate {
        CreatureTemplate {
            name: "Tidecaller".into(),
            kind: CreatureKind::Water,
            max_hp: 1_000.0,
            max_mp: 200.0,
            attack: 80.0,
            defense: 40.0,
            attack_speed: 12,
            level: 3,
            skills: vec![Skill::heal("Mend", 40.0, 100.0)],
            runes: Vec::new(),
        }
    }

    #[test]
    fn build_spawns_full_creature() {
        let creature = template().build().unwrap();
        assert_eq!(creature.name, "Tidecaller");
        assert_eq!(creature.level(), 3);
        assert_eq!(creature.stats.hp, 1_000);
        assert_eq!(creature.skills().len(), 1);
        assert!(creature.runes().is_empty());
    }

    #[test]
    fn starting_runes_are_equipped() {
        let mut template = template();
        template.runes.push(RuneTemplate {
            name: "Guard".into(),
            description: String::new(),
            coin_cost: 10.0,
            rating: 1,
            slot: 2,
        });

        let creature = template.build().unwrap();
        assert!(creature.runes().is_occupied(2));
        assert!(creature.stats.max_hp > 1_000);
    }

    #[test]
    fn bad_rune_slot_fails_the_build() {
        let mut template = template();
        template.runes.push(RuneTemplate {
            name: "Nowhere".into(),
            description: String::new(),
            coin_cost: 10.0,
            rating: 1,
            slot: 9,
        });

        assert_eq!(template.build(), Err(RuneError::SlotOutOfRange { slot: 9 }));
    }
}
