//! Character template loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use skirmish_core::{
    Character, CharacterId, ResourceSet, RulesConfig, SetMode, Stat, StatType, Stats,
};

use crate::loaders::{LoadResult, ensure_unique, read_file};

/// Template for one combatant.
///
/// Attributes initialize both value and ceiling. Pools start full. Spells and items
/// are referenced by catalog name, in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSpec {
    pub name: String,
    #[serde(default = "first_level")]
    pub level: u32,
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
    pub vitality: i32,
    pub health: i32,
    #[serde(default)]
    pub mana: Option<i32>,
    #[serde(default)]
    pub skill: Option<i32>,
    #[serde(default)]
    pub spells: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

fn first_level() -> u32 {
    1
}

impl CharacterSpec {
    /// Builds a ready character: stat sheet, full pools, an empty charge bar and an
    /// experience bar sized for its level.
    pub fn build(&self, id: CharacterId, config: &RulesConfig) -> LoadResult<Character> {
        let mut stats = Stats::new();
        stats.initialize_stats(
            self.level,
            self.strength,
            self.agility,
            self.intellect,
            self.vitality,
        );
        let _ = stats.set_to_stat(StatType::Health, SetMode::Max, self.health);
        if let Some(mana) = self.mana {
            stats.add_stat(Stat::new(StatType::Mana, mana, mana))?;
        }
        if let Some(skill) = self.skill {
            stats.add_stat(Stat::new(StatType::Skill, skill, skill))?;
        }
        stats.add_stat(Stat::new(
            StatType::Experience,
            0,
            config.experience_for_level(self.level),
        ))?;
        stats.initialize_resources();

        let resources = ResourceSet::from_stats(&stats);
        Ok(Character::new(id, self.name.clone())
            .with_stats(stats)
            .with_resources(resources))
    }
}

/// Character catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CharacterCatalog {
    pub characters: Vec<CharacterSpec>,
}

/// Loader for character templates from RON files.
pub struct CharacterLoader;

impl CharacterLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CharacterSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CharacterSpec>> {
        let catalog: CharacterCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse character catalog RON: {}", e))?;
        ensure_unique(
            "character",
            catalog.characters.iter().map(|spec| spec.name.as_str()),
        )?;

        Ok(catalog.characters)
    }
}

#[cfg(test)]
mod tests {
    use skirmish_core::{GetMode, ResourceType};

    use super::*;

    const MAGE: &str = r#"(characters: [(
        name: "Wren",
        level: 2,
        strength: 2,
        agility: 6,
        intellect: 9,
        vitality: 3,
        health: 24,
        mana: Some(18),
        spells: ["Fireball"],
    )])"#;

    #[test]
    fn builds_a_full_character() {
        let specs = CharacterLoader::parse(MAGE).unwrap();
        let config = RulesConfig::default();
        let wren = specs[0].build(CharacterId(3), &config).unwrap();

        assert_eq!(wren.id, CharacterId(3));
        assert_eq!(wren.stats.level, 2);
        assert_eq!(wren.stats.stat_count(GetMode::Mod, &[StatType::Intellect]), 9);
        assert_eq!(wren.stats.stat_count(GetMode::Max, &[StatType::Experience]), 200);
        assert!(!wren.stats.has_stat(StatType::Skill));

        assert_eq!(wren.resources.pending(ResourceType::Health), 24);
        assert_eq!(wren.resources.pending(ResourceType::Mana), 18);
        assert_eq!(wren.resources.pending(ResourceType::Charge), 0);
        assert!(!wren.resources.contains(ResourceType::Skill));
        assert!(wren.is_alive());
        assert_eq!(specs[0].items, Vec::<String>::new());
    }

    #[test]
    fn missing_attribute_is_a_parse_error() {
        let err = CharacterLoader::parse(r#"(characters: [(name: "X")])"#).unwrap_err();
        assert!(err.to_string().contains("character catalog"));
    }
}
