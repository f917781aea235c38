use std::collections::BTreeMap;

use crate::resources::ResourceType;

/// Broad role of a spell, used by AI and menus to pick candidates.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SpellType {
    Offense,
    Defense,
    Heal,
    Boost,
}

impl SpellType {
    pub const fn is_offensive(self) -> bool {
        matches!(self, Self::Offense)
    }

    pub const fn is_restorative(self) -> bool {
        matches!(self, Self::Heal)
    }
}

/// Who a spell may be aimed at.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetType {
    /// Only the caster.
    Caster,
    Ally,
    Enemy,
    Any,
}

/// Immutable description of a spell.
///
/// Equality is structural. Catalogs that key spells by name reject duplicates at load
/// time instead of relying on name-only equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub spell_type: SpellType,
    pub target_type: TargetType,
    #[cfg_attr(feature = "serde", serde(default = "enabled"))]
    pub is_enabled: bool,
    /// Template shown when the spell resolves. `{0}` caster, `{1}` target, `{2}` amount.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast_text: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub costs: BTreeMap<ResourceType, u32>,
}

#[cfg(feature = "serde")]
fn enabled() -> bool {
    true
}

impl SpellDefinition {
    pub fn new(name: impl Into<String>, spell_type: SpellType, target_type: TargetType) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            spell_type,
            target_type,
            is_enabled: true,
            cast_text: String::new(),
            costs: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_cast_text(mut self, cast_text: impl Into<String>) -> Self {
        self.cast_text = cast_text.into();
        self
    }

    /// Adds (or replaces) the cost for one resource.
    pub fn with_cost(mut self, resource: ResourceType, amount: u32) -> Self {
        self.costs.insert(resource, amount);
        self
    }

    pub fn cost(&self, resource: ResourceType) -> Option<u32> {
        self.costs.get(&resource).copied()
    }

    /// Costs shown to the player. Charge is always spent in full so it is never listed.
    pub fn visible_costs(&self) -> impl Iterator<Item = (ResourceType, u32)> + '_ {
        self.costs
            .iter()
            .filter(|(kind, _)| **kind != ResourceType::Charge)
            .map(|(kind, amount)| (*kind, *amount))
    }
}
