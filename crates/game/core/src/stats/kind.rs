//! Stat types and their classification.

use bitflags::bitflags;

use crate::config::RulesConfig;
use crate::splat::Color;

bitflags! {
    /// Classification tags for a [`StatType`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatTags: u8 {
        /// Raw attribute that stat points can be spent on.
        const ASSIGNABLE = 0b0000_0001;
        /// Pool drained and refilled during play.
        const RESOURCE = 0b0000_0010;
        /// Resource refilled to maximum by `initialize_resources`.
        const RESTORED = 0b0000_0100;
    }
}

/// Every stat a character sheet can hold.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatType {
    Strength,
    Agility,
    Intellect,
    Vitality,
    Health,
    Mana,
    Skill,
    Experience,
}

impl StatType {
    pub const ASSIGNABLES: [StatType; 4] = [
        StatType::Strength,
        StatType::Agility,
        StatType::Intellect,
        StatType::Vitality,
    ];

    pub const fn tags(self) -> StatTags {
        match self {
            Self::Strength | Self::Agility | Self::Intellect | Self::Vitality => {
                StatTags::ASSIGNABLE
            }
            Self::Health | Self::Mana | Self::Skill => {
                StatTags::RESOURCE.union(StatTags::RESTORED)
            }
            Self::Experience => StatTags::RESOURCE,
        }
    }

    pub const fn is_assignable(self) -> bool {
        self.tags().contains(StatTags::ASSIGNABLE)
    }

    pub const fn is_resource(self) -> bool {
        self.tags().contains(StatTags::RESOURCE)
    }

    pub const fn is_restored(self) -> bool {
        self.tags().contains(StatTags::RESTORED)
    }

    /// Display name used in character sheets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Agility => "Agility",
            Self::Intellect => "Intellect",
            Self::Vitality => "Vitality",
            Self::Health => "Health",
            Self::Mana => "Mana",
            Self::Skill => "Skill",
            Self::Experience => "Experience",
        }
    }

    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Agility => "AGI",
            Self::Intellect => "INT",
            Self::Vitality => "VIT",
            Self::Health => "HP",
            Self::Mana => "MP",
            Self::Skill => "SP",
            Self::Experience => "XP",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Strength => Color::ORANGE,
            Self::Agility => Color::GREEN,
            Self::Intellect => Color::CYAN,
            Self::Vitality => Color::YELLOW,
            Self::Health => Color::RED,
            Self::Mana => Color::BLUE,
            Self::Skill => Color::MAGENTA,
            Self::Experience => Color::WHITE,
        }
    }

    /// Splat color for a mutation of `amount`.
    pub const fn determine_color(self, amount: i32) -> Color {
        if amount > 0 {
            self.color()
        } else if amount < 0 {
            Color::RED
        } else {
            Color::GREY
        }
    }

    /// Passive per-turn regeneration applied by `Stat::update`.
    pub fn regen_per_turn(self, config: &RulesConfig) -> i32 {
        match self {
            Self::Mana => config.mana_regen_per_turn,
            Self::Skill => config.skill_regen_per_turn,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_stat_has_exactly_one_primary_class() {
        for kind in StatType::iter() {
            assert_ne!(kind.is_assignable(), kind.is_resource(), "{kind}");
        }
    }

    #[test]
    fn restored_stats_are_resources() {
        for kind in StatType::iter().filter(|k| k.is_restored()) {
            assert!(kind.is_resource());
        }
        assert!(!StatType::Experience.is_restored());
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("AGILITY".parse::<StatType>(), Ok(StatType::Agility));
        assert_eq!(StatType::Health.to_string(), "health");
    }

    #[test]
    fn only_mana_and_skill_regenerate() {
        let config = RulesConfig::default();
        assert_eq!(StatType::Skill.regen_per_turn(&config), 1);
        assert_eq!(StatType::Health.regen_per_turn(&config), 0);
        assert_eq!(StatType::Strength.regen_per_turn(&config), 0);
    }
}
