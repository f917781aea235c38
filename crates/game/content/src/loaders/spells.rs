//! Spell catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{Spell, SpellDefinition, SpellEffect};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// One catalog entry: what the spell is and what it does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellSpec {
    pub definition: SpellDefinition,
    pub effect: SpellEffect,
}

impl SpellSpec {
    /// A fresh castable spell with no cast state.
    pub fn build(&self) -> Spell {
        Spell::new(self.definition.clone(), self.effect.clone())
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// Spell catalog structure for RON files. Names are unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpellCatalog {
    pub spells: Vec<SpellSpec>,
}

impl SpellCatalog {
    pub fn get(&self, name: &str) -> Option<&SpellSpec> {
        self.spells.iter().find(|spec| spec.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spells.iter().map(SpellSpec::name)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }
}

/// Loader for the spell catalog from RON files.
pub struct SpellLoader;

impl SpellLoader {
    pub fn load(path: &Path) -> LoadResult<SpellCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpellCatalog> {
        let catalog: SpellCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spell catalog RON: {}", e))?;
        ensure_unique("spell", catalog.names())?;

        tracing::debug!(spells = catalog.len(), "spell catalog loaded");
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{ResourceType, SpellType, StatType};

    use super::*;

    const FIREBALL: &str = r#"(
        definition: (
            name: "Fireball",
            spell_type: Offense,
            target_type: Enemy,
            cast_text: "{0} hurls a fireball at {1}!",
            costs: { Mana: 5 },
        ),
        effect: Damage(power: 6, scaling: Intellect, accuracy: 0.85),
    )"#;

    #[test]
    fn parses_definition_and_effect() {
        let catalog = SpellLoader::parse(&format!("(spells: [{FIREBALL}])")).unwrap();
        let spec = catalog.get("Fireball").unwrap();
        assert_eq!(spec.definition.spell_type, SpellType::Offense);
        assert_eq!(spec.definition.cost(ResourceType::Mana), Some(5));
        assert!(spec.definition.is_enabled);
        assert_eq!(
            spec.effect,
            SpellEffect::Damage {
                power: 6,
                scaling: StatType::Intellect,
                accuracy: 0.85,
            }
        );

        let spell = spec.build();
        assert_eq!(spell.name(), "Fireball");
        assert_eq!(spell.result(), None);
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = SpellLoader::parse(&format!("(spells: [{FIREBALL}, {FIREBALL}])")).unwrap_err();
        assert!(err.to_string().contains("Duplicate spell name 'Fireball'"));
    }
}
