use crate::calculation::{Calculation, PairedValue};
use crate::character::Character;
use crate::resources::ResourceType;
use crate::text;

use super::ConsumableItem;

/// Heals a fixed amount of life.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Apple;

impl Apple {
    pub const NAME: &'static str = "Apple";
    pub const HEAL_AMOUNT: i32 = 10;
    pub const USE_TEXT_SELF: &'static str = "{1} eats an apple!\n{1} restores {2} life!";
    pub const USE_TEXT_OTHER: &'static str = "{0} uses an apple on {1}!\n{1} restores {2} life!";

    fn text(template: &str, caster: &Character, target: &Character, calc: &Calculation) -> String {
        text::fill(
            template,
            &[
                &caster.display_name(),
                &target.display_name(),
                &calc.target_amount(ResourceType::Health),
            ],
        )
    }
}

impl ConsumableItem for Apple {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> String {
        format!("Heal an ally for {} Life.", Self::HEAL_AMOUNT)
    }

    fn create_calculation(&self, _caster: &Character, _target: &Character) -> Calculation {
        Calculation::new().with_target(
            ResourceType::Health,
            PairedValue::pending(Self::HEAL_AMOUNT),
        )
    }

    fn self_use_text(&self, caster: &Character, target: &Character, calc: &Calculation) -> String {
        Self::text(Self::USE_TEXT_SELF, caster, target, calc)
    }

    fn other_use_text(
        &self,
        caster: &Character,
        target: &Character,
        calc: &Calculation,
    ) -> String {
        Self::text(Self::USE_TEXT_OTHER, caster, target, calc)
    }
}
