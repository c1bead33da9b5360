//! CPU trainer loader.

use std::path::Path;

use battle_core::Trainer;
use battle_core::stats::decimal;
use serde::{Deserialize, Serialize};

use crate::loaders::{CreatureCatalog, LoadResult, read_file};
use crate::templates::TrainerTemplate;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrainerRoster {
    trainers: Vec<TrainerTemplate>,
}

/// Loader for CPU trainers from RON files.
pub struct TrainerLoader;

impl TrainerLoader {
    /// Load trainers, spawning their creatures from `catalog`.
    pub fn load(path: &Path, catalog: &CreatureCatalog) -> LoadResult<Vec<Trainer>> {
        let content = read_file(path)?;
        Self::parse(&content, catalog)
    }

    pub fn parse(content: &str, catalog: &CreatureCatalog) -> LoadResult<Vec<Trainer>> {
        let roster: TrainerRoster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse trainer RON: {}", e))?;

        roster
            .trainers
            .iter()
            .map(|template| Self::build(template, catalog))
            .collect()
    }

    /// Builds one trainer; the first five creatures form the battle team.
    pub fn build(template: &TrainerTemplate, catalog: &CreatureCatalog) -> LoadResult<Trainer> {
        let creatures = template
            .creatures
            .iter()
            .map(|name| catalog.spawn(name))
            .collect::<LoadResult<Vec<_>>>()
            .map_err(|e| anyhow::anyhow!("Failed to build trainer '{}': {}", template.name, e))?;

        let mut trainer = Trainer::with_team(template.name.clone(), creatures);
        trainer.coins = decimal(template.coins);
        Ok(trainer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::CreatureTemplate;
    use battle_core::CreatureKind;

    fn catalog() -> CreatureCatalog {
        let template = |name: &str| CreatureTemplate {
            name: name.into(),
            kind: CreatureKind::Land,
            max_hp: 100.0,
            max_mp: 10.0,
            attack: 10.0,
            defense: 5.0,
            attack_speed: 5,
            level: 1,
            skills: Vec::new(),
            runes: Vec::new(),
        };
        CreatureCatalog {
            creatures: vec![template("A"), template("B")],
        }
    }

    #[test]
    fn trainers_reference_catalog_creatures() {
        let trainers = TrainerLoader::parse(
            r#"(trainers: [(name: "Rival", creatures: ["A", "B", "A"], coins: 50.0)])"#,
            &catalog(),
        )
        .unwrap();

        let rival = &trainers[0];
        assert_eq!(rival.roster().len(), 3);
        assert_eq!(rival.team_indices(), &[0, 1, 2]);
        assert_eq!(rival.coins, 50);
    }

    #[test]
    fn unknown_creature_names_the_trainer() {
        let err = TrainerLoader::parse(
            r#"(trainers: [(name: "Rival", creatures: ["Z"])])"#,
            &catalog(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Rival"));
    }
}
