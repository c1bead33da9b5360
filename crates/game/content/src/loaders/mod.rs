//! Content loaders for reading game data from files.
//!
//! RON catalogs deserialize straight into the [`crate::templates`] types and
//! `battle-core` values; the TOML config deserializes into
//! [`battle_runtime::RuntimeConfig`].

pub mod config;
pub mod creature;
pub mod factory;
pub mod item;
pub mod rune;
pub mod trainer;

pub use config::ConfigLoader;
pub use creature::{CreatureCatalog, CreatureLoader};
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use rune::RuneLoader;
pub use trainer::TrainerLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
