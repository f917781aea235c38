//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use skirmish_core::{ItemDefinition, RulesConfig};

use crate::loaders::{
    CharacterLoader, CharacterSpec, ConfigLoader, ItemLoader, LoadResult, SpellCatalog,
    SpellLoader,
};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── spells.ron
/// ├── items.ron
/// └── characters.ron
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

    /// Load rules configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<RulesConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the spell catalog from `spells.ron`.
    pub fn load_spells(&self) -> LoadResult<SpellCatalog> {
        SpellLoader::load(&self.data_dir.join("spells.ron"))
    }

    /// Load the consumable catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load character templates from `characters.ron`.
    pub fn load_characters(&self) -> LoadResult<Vec<CharacterSpec>> {
        CharacterLoader::load(&self.data_dir.join("characters.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
