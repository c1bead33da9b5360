//! Creature catalog loader.

use std::collections::HashMap;
use std::path::Path;

use battle_core::Creature;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::templates::CreatureTemplate;

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureTemplate>,
}

impl CreatureCatalog {
    pub fn get(&self, name: &str) -> Option<&CreatureTemplate> {
        self.creatures.iter().find(|t| t.name == name)
    }

    /// Spawns a fresh creature from the template called `name`.
    pub fn spawn(&self, name: &str) -> LoadResult<Creature> {
        let template = self
            .get(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown creature template '{}'", name))?;
        template
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build creature '{}': {}", name, e))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creatures.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

/// Loader for the creature catalog from RON files.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load the creature catalog from a RON file.
    ///
    /// Template names must be unique and every template must build.
    pub fn load(path: &Path) -> LoadResult<CreatureCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CreatureCatalog> {
        let catalog: CreatureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        let mut seen = HashMap::new();
        for (index, template) in catalog.creatures.iter().enumerate() {
            if let Some(first) = seen.insert(template.name.as_str(), index) {
                anyhow::bail!(
                    "Duplicate creature template '{}' (entries {} and {})",
                    template.name,
                    first,
                    index
                );
            }
            template.build().map_err(|e| {
                anyhow::anyhow!("Invalid creature template '{}': {}", template.name, e)
            })?;
        }

        Ok(catalog)
    }
}
