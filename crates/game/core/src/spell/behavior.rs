//! Spell behaviors and the effects of a resolved cast.

use crate::calculation::{Calculation, PairedValue};
use crate::character::Character;
use crate::resources::ResourceType;
use crate::stats::{GetMode, StatType};

/// Hit chance gained (or lost) per point of agility advantage.
pub const AGILITY_HIT_WEIGHT: f64 = 0.02;

/// Smallest amount a landed damage spell deals.
pub const MIN_DAMAGE: i32 = 1;

/// The variable part of a spell.
///
/// Behaviors only describe effects. They receive read-only characters and return
/// [`Calculation`]s; the cast pipeline applies them.
pub trait SpellBehavior: Send + Sync + core::fmt::Debug {
    /// Probability in `[0, 1]` that the cast lands.
    fn hit_rate(&self, caster: &Character, target: &Character) -> f64;

    /// Magnitude of the effect on a hit.
    fn calculate_damage(&self, caster: &Character, target: &Character) -> i32;

    /// Effect applied on a hit.
    fn on_success(&self, caster: &Character, target: &Character, damage: i32) -> Calculation;

    /// Effect applied on a miss. Nothing by default.
    fn on_failure(&self, _caster: &Character, _target: &Character) -> Calculation {
        Calculation::new()
    }

    /// Effect that reverses `applied`, the deltas a hit actually produced.
    fn undo(&self, applied: &Calculation) -> Calculation {
        applied.inverse()
    }
}

/// Data-driven spell behaviors loaded from content.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpellEffect {
    /// Direct health damage that scales with one caster stat.
    Damage {
        power: i32,
        scaling: StatType,
        accuracy: f64,
    },
    /// Guaranteed refill of one of the target's pools.
    Restore { resource: ResourceType, amount: i32 },
    /// Moves health from the target to the caster.
    Drain { power: i32, accuracy: f64 },
}

impl SpellEffect {
    fn agility_hit_rate(accuracy: f64, caster: &Character, target: &Character) -> f64 {
        let edge = f64::from(stat(caster, StatType::Agility))
            - f64::from(stat(target, StatType::Agility));
        (accuracy + edge * AGILITY_HIT_WEIGHT).clamp(0.0, 1.0)
    }
}

fn stat(character: &Character, kind: StatType) -> i32 {
    character.stats.stat_count(GetMode::ModAndEquip, &[kind])
}

impl SpellBehavior for SpellEffect {
    /// # Formula
    ///
    /// ```text
    /// hit_rate = accuracy + (caster_agility - target_agility) * AGILITY_HIT_WEIGHT
    /// clamped to [0, 1]
    /// ```
    ///
    /// Restores always land.
    fn hit_rate(&self, caster: &Character, target: &Character) -> f64 {
        match self {
            Self::Damage { accuracy, .. } | Self::Drain { accuracy, .. } => {
                Self::agility_hit_rate(*accuracy, caster, target)
            }
            Self::Restore { .. } => 1.0,
        }
    }

    /// # Formula
    ///
    /// ```text
    /// damage  = max(power + caster[scaling] - target_vitality / 2, MIN_DAMAGE)
    /// drain   = max(power + caster_intellect - target_intellect / 2, MIN_DAMAGE)
    /// restore = amount + caster_intellect / 2
    /// ```
    fn calculate_damage(&self, caster: &Character, target: &Character) -> i32 {
        match self {
            Self::Damage { power, scaling, .. } => power
                .saturating_add(stat(caster, *scaling))
                .saturating_sub(stat(target, StatType::Vitality) / 2)
                .max(MIN_DAMAGE),
            Self::Drain { power, .. } => power
                .saturating_add(stat(caster, StatType::Intellect))
                .saturating_sub(stat(target, StatType::Intellect) / 2)
                .max(MIN_DAMAGE),
            Self::Restore { amount, .. } => amount
                .saturating_add(stat(caster, StatType::Intellect) / 2)
                .max(0),
        }
    }

    fn on_success(&self, _caster: &Character, _target: &Character, damage: i32) -> Calculation {
        match self {
            Self::Damage { .. } => {
                Calculation::new().with_target(ResourceType::Health, PairedValue::pending(-damage))
            }
            Self::Restore { resource, .. } => {
                Calculation::new().with_target(*resource, PairedValue::pending(damage))
            }
            Self::Drain { .. } => Calculation::new()
                .with_target(ResourceType::Health, PairedValue::pending(-damage))
                .with_caster(ResourceType::Health, PairedValue::pending(damage)),
        }
    }
}
