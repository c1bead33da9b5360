//! Item catalog loader.

use std::path::Path;

use battle_core::{Ball, Consumable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    #[serde(default)]
    pub balls: Vec<Ball>,
    #[serde(default)]
    pub consumables: Vec<Consumable>,
}

impl ItemCatalog {
    pub fn ball(&self, name: &str) -> Option<&Ball> {
        self.balls.iter().find(|b| b.name == name)
    }
}

/// Loader for the item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load the item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }
}
