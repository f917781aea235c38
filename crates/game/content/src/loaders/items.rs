//! Item catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::ItemDefinition;

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemDefinitions with unique names.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemDefinition>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        ensure_unique("item", catalog.items.iter().map(|item| item.name.as_str()))?;

        Ok(catalog.items)
    }
}
