//! Data-driven content definitions and loaders.
//!
//! This crate houses the templates creatures, runes and trainers are built
//! from, and loaders for the RON/TOML files that list them:
//! - Creature catalog (data-driven via RON)
//! - Rune catalog (data-driven via RON)
//! - Item catalog: capture balls and consumables (data-driven via RON)
//! - CPU trainers (data-driven via RON, referencing catalog creatures)
//! - Runtime configuration (data-driven via TOML)
//!
//! Templates are plain descriptions; building one yields a fresh
//! `battle-core` value the caller then owns.

pub mod templates;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use templates::{CreatureTemplate, RuneTemplate, TrainerTemplate};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, CreatureCatalog, CreatureLoader, ItemCatalog, ItemLoader,
    LoadResult, RuneLoader, TrainerLoader,
};
