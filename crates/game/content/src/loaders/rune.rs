//! Rune catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::templates::RuneTemplate;

/// Rune catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuneCatalog {
    pub runes: Vec<RuneTemplate>,
}

/// Loader for the rune catalog from RON files.
pub struct RuneLoader;

impl RuneLoader {
    /// Load the rune catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<RuneTemplate>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<RuneTemplate>> {
        let catalog: RuneCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rune catalog RON: {}", e))?;
        Ok(catalog.runes)
    }
}
