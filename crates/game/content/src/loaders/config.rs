//! Runtime configuration loader.

use std::path::Path;

use battle_runtime::RuntimeConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for runtime configuration from TOML files.
///
/// Missing keys keep their defaults:
///
/// ```toml
/// seed = 7
/// max_turns = 5000
///
/// [battle]
/// max_ticks_per_turn = 20000
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RuntimeConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RuntimeConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
