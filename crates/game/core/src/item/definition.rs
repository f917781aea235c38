use crate::calculation::{Calculation, PairedValue};
use crate::character::Character;
use crate::resources::ResourceType;
use crate::text;

use super::ConsumableItem;

/// Data-driven consumable that restores (or drains) one of the target's pools.
///
/// Text templates take `{0}` caster, `{1}` target and `{2}` amount.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub resource: ResourceType,
    pub amount: i32,
    pub self_use_text: String,
    pub other_use_text: String,
}

impl ItemDefinition {
    /// True when the item refills health.
    pub fn heals(&self) -> bool {
        self.resource == ResourceType::Health && self.amount > 0
    }

    fn text(
        &self,
        template: &str,
        caster: &Character,
        target: &Character,
        calc: &Calculation,
    ) -> String {
        text::fill(
            template,
            &[
                &caster.display_name(),
                &target.display_name(),
                &calc.target_amount(self.resource),
            ],
        )
    }
}

impl ConsumableItem for ItemDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn create_calculation(&self, _caster: &Character, _target: &Character) -> Calculation {
        Calculation::new().with_target(self.resource, PairedValue::pending(self.amount))
    }

    fn self_use_text(&self, caster: &Character, target: &Character, calc: &Calculation) -> String {
        self.text(&self.self_use_text, caster, target, calc)
    }

    fn other_use_text(
        &self,
        caster: &Character,
        target: &Character,
        calc: &Calculation,
    ) -> String {
        self.text(&self.other_use_text, caster, target, calc)
    }
}
