//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use battle_core::Trainer;
use battle_runtime::RuntimeConfig;

use crate::loaders::{
    ConfigLoader, CreatureCatalog, CreatureLoader, ItemCatalog, ItemLoader, LoadResult,
    RuneLoader, TrainerLoader,
};
use crate::templates::RuneTemplate;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── battle.toml
/// ├── creatures.ron
/// ├── runes.ron
/// ├── items.ron
/// └── trainers.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load runtime configuration from `battle.toml`; defaults when absent.
    pub fn load_config(&self) -> LoadResult<RuntimeConfig> {
        let path = self.data_dir.join("battle.toml");
        if !path.exists() {
            return Ok(RuntimeConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the creature catalog from `creatures.ron`.
    pub fn load_creatures(&self) -> LoadResult<CreatureCatalog> {
        CreatureLoader::load(&self.data_dir.join("creatures.ron"))
    }

    /// Load the rune catalog from `runes.ron`.
    pub fn load_runes(&self) -> LoadResult<Vec<RuneTemplate>> {
        RuneLoader::load(&self.data_dir.join("runes.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load CPU trainers from `trainers.ron`, spawning from `catalog`.
    pub fn load_trainers(&self, catalog: &CreatureCatalog) -> LoadResult<Vec<Trainer>> {
        TrainerLoader::load(&self.data_dir.join("trainers.ron"), catalog)
    }
}
