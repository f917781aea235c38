use crate::splat::Color;
use crate::stats::StatType;

/// Combat resource pools a character can spend or lose.
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
pub enum ResourceType {
    Health,
    Mana,
    /// Turn bar; spells need it full and drain it completely.
    Charge,
    Skill,
}

impl ResourceType {
    /// Stat on the character sheet that seeds this pool, if any.
    pub const fn stat(self) -> Option<StatType> {
        match self {
            Self::Health => Some(StatType::Health),
            Self::Mana => Some(StatType::Mana),
            Self::Skill => Some(StatType::Skill),
            Self::Charge => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Health => "Life",
            Self::Mana => "Mana",
            Self::Charge => "Charge",
            Self::Skill => "Skill",
        }
    }

    /// Color of the filled part of the bar.
    pub const fn over_color(self) -> Color {
        match self {
            Self::Health => Color::GREEN,
            Self::Mana => Color::BLUE,
            Self::Charge => Color::WHITE,
            Self::Skill => Color::YELLOW,
        }
    }

    /// Color of the empty part of the bar.
    pub const fn under_color(self) -> Color {
        match self {
            Self::Health => Color::RED,
            _ => Color::GREY,
        }
    }
}
