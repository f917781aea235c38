//! The cast pipeline.
//!
//! ```text
//! VALIDATE -> CantCast                      (nothing mutated, nothing logged)
//!          -> CONSUME -> RESOLVE -> Hit | Miss -> HISTORY
//! ```

use std::sync::Arc;

use crate::calculation::Calculation;
use crate::character::{Character, CharacterId, Roster};
use crate::env::{CastEnv, compute_seed};
use crate::resources::{ResourceSet, ResourceType};
use crate::text;

use super::behavior::SpellBehavior;
use super::definition::SpellDefinition;
use super::error::SpellError;

/// Roll context for the hit check within one cast.
const HIT_ROLL: u32 = 0;

/// Terminal classification of one cast attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SpellResult {
    Hit,
    Miss,
    CantCast,
}

/// Why a cast could not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CastBlocked {
    TargetNotTargetable(CharacterId),
    /// The caster has no pool of a resource the spell costs.
    MissingResource(ResourceType),
    InsufficientResource {
        resource: ResourceType,
        required: u32,
        available: u32,
    },
    ChargeNotFull {
        charge: u32,
        maximum: u32,
    },
}

impl core::fmt::Display for CastBlocked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TargetNotTargetable(id) => write!(f, "target {id} cannot be targeted"),
            Self::MissingResource(kind) => write!(f, "caster has no {}", kind.name()),
            Self::InsufficientResource {
                resource,
                required,
                available,
            } => write!(
                f,
                "not enough {}: need {required}, have {available}",
                resource.name()
            ),
            Self::ChargeNotFull { charge, maximum } => {
                write!(f, "charge not full ({charge}/{maximum})")
            }
        }
    }
}

/// Result of [`Spell::try_cast`].
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastOutcome {
    Hit { damage: i32 },
    Miss,
    CantCast(CastBlocked),
}

impl CastOutcome {
    pub const fn result(&self) -> SpellResult {
        match self {
            Self::Hit { .. } => SpellResult::Hit,
            Self::Miss => SpellResult::Miss,
            Self::CantCast(_) => SpellResult::CantCast,
        }
    }

    /// True for hits and misses: costs were paid and history was written.
    pub const fn completed(&self) -> bool {
        !matches!(self, Self::CantCast(_))
    }
}

/// Immutable snapshot of one completed cast, stored in both history logs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellRecord {
    pub definition: SpellDefinition,
    pub result: SpellResult,
    pub damage: i32,
    pub caster: CharacterId,
    pub target: CharacterId,
    /// Roster nonce the cast resolved under.
    pub nonce: u64,
    /// Deltas the cast actually produced after clamping.
    pub applied: Calculation,
}

/// Menu line for a spell with its visible costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpellLabel {
    pub name: String,
    pub castable: bool,
    pub costs: Vec<(ResourceType, u32)>,
}

impl core::fmt::Display for SpellLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)?;
        for (index, (_, cost)) in self.costs.iter().enumerate() {
            f.write_str(if index == 0 { " - " } else { "/" })?;
            write!(f, "{cost}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AppliedEffect {
    caster: CharacterId,
    target: CharacterId,
    applied: Calculation,
}

/// A castable spell: a definition, its behavior and the state of the last cast.
#[derive(Clone, Debug)]
pub struct Spell {
    definition: SpellDefinition,
    behavior: Arc<dyn SpellBehavior>,
    result: Option<SpellResult>,
    damage: i32,
    caster: Option<CharacterId>,
    target: Option<CharacterId>,
    last_hit: Option<AppliedEffect>,
}

impl Spell {
    pub fn new(definition: SpellDefinition, behavior: impl SpellBehavior + 'static) -> Self {
        Self::with_behavior(definition, Arc::new(behavior))
    }

    pub fn with_behavior(definition: SpellDefinition, behavior: Arc<dyn SpellBehavior>) -> Self {
        Self {
            definition,
            behavior,
            result: None,
            damage: 0,
            caster: None,
            target: None,
            last_hit: None,
        }
    }

    pub fn definition(&self) -> &SpellDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn behavior(&self) -> &dyn SpellBehavior {
        self.behavior.as_ref()
    }

    /// Outcome of the last attempt, or `None` before the first one.
    pub fn result(&self) -> Option<SpellResult> {
        self.result
    }

    /// Damage of the last hit; 0 after a miss.
    pub fn damage(&self) -> i32 {
        self.damage
    }

    pub fn caster(&self) -> Option<CharacterId> {
        self.caster
    }

    pub fn target(&self) -> Option<CharacterId> {
        self.target
    }

    pub fn can_undo(&self) -> bool {
        self.last_hit.is_some()
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Checks targeting, every cost and the charge bar, in that order.
    pub fn check_castable(
        &self,
        caster: &Character,
        target: &Character,
        env: &CastEnv<'_>,
    ) -> Result<(), CastBlocked> {
        if !env.targeting().is_targetable(target) {
            return Err(CastBlocked::TargetNotTargetable(target.id));
        }
        self.check_affordable(&caster.resources)
    }

    pub fn is_castable(&self, caster: &Character, target: &Character, env: &CastEnv<'_>) -> bool {
        self.check_castable(caster, target, env).is_ok()
    }

    /// Costs and charge only; no target involved.
    pub fn check_affordable(&self, resources: &ResourceSet) -> Result<(), CastBlocked> {
        for (&resource, &required) in &self.definition.costs {
            let pool = resources
                .get(resource)
                .ok_or(CastBlocked::MissingResource(resource))?;
            if !pool.can_afford(required) {
                return Err(CastBlocked::InsufficientResource {
                    resource,
                    required,
                    available: pool.pending(),
                });
            }
        }

        let charge = resources
            .get(ResourceType::Charge)
            .ok_or(CastBlocked::MissingResource(ResourceType::Charge))?;
        if !charge.is_maxed() {
            return Err(CastBlocked::ChargeNotFull {
                charge: charge.pending(),
                maximum: charge.maximum(),
            });
        }
        Ok(())
    }

    pub fn describe(&self, caster: &Character) -> SpellLabel {
        SpellLabel {
            name: self.definition.name.clone(),
            castable: self.check_affordable(&caster.resources).is_ok(),
            costs: self.definition.visible_costs().collect(),
        }
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    /// Runs one cast attempt of this spell from `caster_id` on `target_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::CharacterNotFound`] if either id is not in the roster.
    /// Blocked casts are not errors; they resolve to [`CastOutcome::CantCast`].
    pub fn try_cast(
        &mut self,
        caster_id: CharacterId,
        target_id: CharacterId,
        roster: &mut Roster,
        env: &CastEnv<'_>,
    ) -> Result<CastOutcome, SpellError> {
        let caster = roster.get(caster_id)?;
        let target = roster.get(target_id)?;
        if let Err(blocked) = self.check_castable(caster, target, env) {
            tracing::debug!(
                spell = %self.definition.name,
                caster = %caster_id,
                target = %target_id,
                %blocked,
                "cast blocked"
            );
            self.result = Some(SpellResult::CantCast);
            return Ok(CastOutcome::CantCast(blocked));
        }

        let nonce = roster.nonce();
        self.consume(&mut roster.get_mut(caster_id)?.resources);

        let caster = roster.get(caster_id)?;
        let target = roster.get(target_id)?;
        let hit_rate = self.behavior.hit_rate(caster, target).clamp(0.0, 1.0);
        let roll = env
            .rng()
            .roll_unit(compute_seed(env.seed(), nonce, caster_id.0, HIT_ROLL));

        let (result, damage, effect) = if roll < hit_rate {
            let damage = self.behavior.calculate_damage(caster, target);
            let effect = self.behavior.on_success(caster, target, damage);
            (SpellResult::Hit, damage, effect)
        } else {
            (SpellResult::Miss, 0, self.behavior.on_failure(caster, target))
        };
        let applied = apply_effect(&effect, caster_id, target_id, roster)?;

        self.result = Some(result);
        self.damage = damage;
        self.caster = Some(caster_id);
        self.target = Some(target_id);
        self.last_hit = (result == SpellResult::Hit).then(|| AppliedEffect {
            caster: caster_id,
            target: target_id,
            applied: applied.clone(),
        });

        let record = SpellRecord {
            definition: self.definition.clone(),
            result,
            damage,
            caster: caster_id,
            target: target_id,
            nonce,
            applied,
        };
        roster.get_mut(caster_id)?.cast_history.push(record.clone());
        roster.get_mut(target_id)?.received_history.push(record);
        roster.advance_nonce();

        tracing::debug!(
            spell = %self.definition.name,
            caster = %caster_id,
            target = %target_id,
            %result,
            damage,
            roll,
            hit_rate,
            "cast resolved"
        );

        Ok(match result {
            SpellResult::Hit => CastOutcome::Hit { damage },
            _ => CastOutcome::Miss,
        })
    }

    fn consume(&self, resources: &mut ResourceSet) {
        for (&resource, &cost) in &self.definition.costs {
            if let Some(pool) = resources.get_mut(resource) {
                pool.adjust_pending(-i32::try_from(cost).unwrap_or(i32::MAX));
            }
        }
        if let Some(charge) = resources.get_mut(ResourceType::Charge) {
            charge.clear_pending();
        }
    }

    /// Reverses the effect of the last hit. Costs are not refunded.
    ///
    /// Returns the deltas the reversal actually applied.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::NothingToUndo`] when the last completed cast was not a
    /// hit or its effect was already undone.
    pub fn undo(&mut self, roster: &mut Roster) -> Result<Calculation, SpellError> {
        let last = self.last_hit.as_ref().ok_or(SpellError::NothingToUndo)?;
        let reverse = self.behavior.undo(&last.applied);
        let applied = apply_effect(&reverse, last.caster, last.target, roster)?;
        self.last_hit = None;

        tracing::debug!(spell = %self.definition.name, "cast undone");
        Ok(applied)
    }

    /// Flavor text of the last cast with `{0}` caster, `{1}` target and `{2}` damage.
    pub fn cast_message(&self, caster: &str, target: &str) -> String {
        text::fill(&self.definition.cast_text, &[&caster, &target, &self.damage])
    }
}

/// Applies both sides of `effect`. Both characters are resolved before anything mutates.
fn apply_effect(
    effect: &Calculation,
    caster: CharacterId,
    target: CharacterId,
    roster: &mut Roster,
) -> Result<Calculation, SpellError> {
    roster.get(caster)?;
    roster.get(target)?;
    let caster_resources = effect
        .caster_resources
        .apply(&mut roster.get_mut(caster)?.resources);
    let target_resources = effect
        .target_resources
        .apply(&mut roster.get_mut(target)?.resources);
    Ok(Calculation {
        caster_resources,
        target_resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AliveTargeting, FixedRoll};
    use crate::resources::Resource;
    use crate::spell::{SpellEffect, SpellType, TargetType};

    fn fireball() -> Spell {
        Spell::new(
            SpellDefinition::new("Fireball", SpellType::Offense, TargetType::Enemy)
                .with_cost(ResourceType::Mana, 5)
                .with_cost(ResourceType::Skill, 3)
                .with_cost(ResourceType::Charge, 0),
            SpellEffect::Damage {
                power: 4,
                scaling: crate::stats::StatType::Intellect,
                accuracy: 1.0,
            },
        )
    }

    fn mage(mana: u32, charge: u32) -> Character {
        let resources = ResourceSet::new()
            .with(Resource::create(ResourceType::Health, 20))
            .with(Resource::create(ResourceType::Mana, mana))
            .with(Resource::create(ResourceType::Skill, 5))
            .with(Resource::create(ResourceType::Charge, charge));
        Character::new(CharacterId(1), "Mage").with_resources(resources)
    }

    #[test]
    fn label_lists_non_charge_costs() {
        let spell = fireball();
        let label = spell.describe(&mage(10, 100));
        assert!(label.castable);
        assert_eq!(label.to_string(), "Fireball - 5/3");

        let poor = spell.describe(&mage(2, 100));
        assert!(!poor.castable);

        let free = Spell::new(
            SpellDefinition::new("Wait", SpellType::Boost, TargetType::Caster),
            SpellEffect::Restore {
                resource: ResourceType::Skill,
                amount: 1,
            },
        );
        assert_eq!(free.describe(&mage(0, 0)).to_string(), "Wait");
    }

    #[test]
    fn validation_order_is_target_costs_charge() {
        let spell = fireball();
        let rng = FixedRoll(0.0);
        let env = CastEnv::new(&rng, &AliveTargeting, 0);
        let target = mage(10, 100);

        let mut dead = mage(10, 100);
        dead.resources
            .get_mut(ResourceType::Health)
            .unwrap()
            .set(0);
        assert_eq!(
            spell.check_castable(&target, &dead, &env),
            Err(CastBlocked::TargetNotTargetable(CharacterId(1)))
        );

        assert_eq!(
            spell.check_castable(&mage(3, 100), &target, &env),
            Err(CastBlocked::InsufficientResource {
                resource: ResourceType::Mana,
                required: 5,
                available: 3,
            })
        );
        assert_eq!(
            spell.check_castable(&mage(10, 60), &target, &env),
            Err(CastBlocked::ChargeNotFull {
                charge: 60,
                maximum: 100,
            })
        );

        let mut no_skill = mage(10, 100);
        no_skill.resources = ResourceSet::new()
            .with(Resource::create(ResourceType::Mana, 10))
            .with(Resource::create(ResourceType::Charge, 100));
        assert_eq!(
            spell.check_castable(&no_skill, &target, &env),
            Err(CastBlocked::MissingResource(ResourceType::Skill))
        );
        assert!(spell.is_castable(&target, &target, &env));
    }

    #[test]
    fn outcome_classification() {
        assert_eq!(CastOutcome::Hit { damage: 3 }.result(), SpellResult::Hit);
        assert!(CastOutcome::Miss.completed());
        assert!(
            !CastOutcome::CantCast(CastBlocked::MissingResource(ResourceType::Mana)).completed()
        );
    }
}
