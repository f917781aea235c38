//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into skirmish-core values. Catalog loaders
//! reject duplicate names so lookups by name are unambiguous.

pub mod characters;
pub mod config;
pub mod factory;
pub mod items;
pub mod spells;

pub use characters::{CharacterLoader, CharacterSpec};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use items::ItemLoader;
pub use spells::{SpellCatalog, SpellLoader, SpellSpec};

use std::collections::BTreeSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first name that appears twice.
pub(crate) fn ensure_unique<'a>(
    kind: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = BTreeSet::new();
    for name in names {
        if !seen.insert(name) {
            anyhow::bail!("Duplicate {} name '{}'", kind, name);
        }
    }
    Ok(())
}
