//! Consumable items.
//!
//! Items are lighter than spells: no costs, no charge, no hit roll. Computing an
//! item's [`Calculation`] is side-effect free; [`use_item`] is the step that applies
//! it and picks the flavor text.
mod apple;
mod definition;

pub use apple::Apple;
pub use definition::ItemDefinition;

use crate::calculation::Calculation;
use crate::character::{Character, CharacterId, Roster};
use crate::error::{CharacterNotFound, ErrorSeverity, GameError};

/// A one-shot effect applied from a caster to a target.
pub trait ConsumableItem: Send + Sync + core::fmt::Debug {
    fn name(&self) -> &str;

    fn description(&self) -> String;

    /// What using the item would change. Must not mutate anything.
    fn create_calculation(&self, caster: &Character, target: &Character) -> Calculation;

    /// Text shown when a character uses the item on themselves.
    fn self_use_text(&self, caster: &Character, target: &Character, calc: &Calculation) -> String;

    /// Text shown when the item is used on someone else.
    fn other_use_text(&self, caster: &Character, target: &Character, calc: &Calculation)
    -> String;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ItemError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),
}

impl From<CharacterNotFound> for ItemError {
    fn from(err: CharacterNotFound) -> Self {
        Self::CharacterNotFound(err.0)
    }
}

impl GameError for ItemError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound(_) => "ITEM_CHARACTER_NOT_FOUND",
        }
    }
}

/// Result of [`use_item`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemUse {
    /// The effect as computed.
    pub calculation: Calculation,
    /// The effect as applied, after clamping.
    pub applied: Calculation,
    pub text: String,
}

/// Uses `item` from `caster_id` on `target_id`.
///
/// # Errors
///
/// Returns [`ItemError::CharacterNotFound`] before mutating anything if either id is
/// unknown.
pub fn use_item(
    item: &(impl ConsumableItem + ?Sized),
    caster_id: CharacterId,
    target_id: CharacterId,
    roster: &mut Roster,
) -> Result<ItemUse, ItemError> {
    let caster = roster.get(caster_id)?;
    let target = roster.get(target_id)?;
    let calculation = item.create_calculation(caster, target);
    let text = if caster_id == target_id {
        item.self_use_text(caster, target, &calculation)
    } else {
        item.other_use_text(caster, target, &calculation)
    };

    let caster_resources = calculation
        .caster_resources
        .apply(&mut roster.get_mut(caster_id)?.resources);
    let target_resources = calculation.apply(&mut roster.get_mut(target_id)?.resources);

    tracing::debug!(item = item.name(), caster = %caster_id, target = %target_id, "item used");
    Ok(ItemUse {
        calculation,
        applied: Calculation {
            caster_resources,
            target_resources,
        },
        text,
    })
}
