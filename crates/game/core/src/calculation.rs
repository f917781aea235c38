//! Descriptive effect values produced by spells and items.
//!
//! A [`Calculation`] says what *would* change; building one never touches a
//! character. [`Calculation::apply`] is the separate step that mutates a
//! [`ResourceSet`] and reports what actually changed after clamping.

use std::collections::BTreeMap;

use crate::resources::{ResourceSet, ResourceType};

/// Pair of deltas, one per resource track.
///
/// `current` lands on the displayed track immediately; `pending` lands on the
/// authoritative track that display animates toward.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairedValue {
    pub current: i32,
    pub pending: i32,
}

impl PairedValue {
    pub const fn new(current: i32, pending: i32) -> Self {
        Self { current, pending }
    }

    /// Delta on the authoritative track only.
    pub const fn pending(delta: i32) -> Self {
        Self::new(0, delta)
    }

    pub const fn is_zero(&self) -> bool {
        self.current == 0 && self.pending == 0
    }

    pub const fn inverse(&self) -> Self {
        Self::new(self.current.saturating_neg(), self.pending.saturating_neg())
    }
}

/// Per-resource deltas for one side of an effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ResourceDeltas(BTreeMap<ResourceType, PairedValue>);

impl ResourceDeltas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: ResourceType, value: PairedValue) -> Self {
        self.insert(kind, value);
        self
    }

    /// Adds `value` onto whatever is already recorded for `kind`.
    pub fn insert(&mut self, kind: ResourceType, value: PairedValue) {
        let entry = self.0.entry(kind).or_default();
        entry.current += value.current;
        entry.pending += value.pending;
    }

    pub fn get(&self, kind: ResourceType) -> Option<&PairedValue> {
        self.0.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, PairedValue)> + '_ {
        self.0.iter().map(|(kind, value)| (*kind, *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(PairedValue::is_zero)
    }

    pub fn inverse(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(kind, value)| (*kind, value.inverse()))
                .collect(),
        )
    }

    /// Applies every delta to the matching pool. Pools the set lacks are skipped.
    ///
    /// Returns the deltas actually applied after clamping.
    pub fn apply(&self, resources: &mut ResourceSet) -> ResourceDeltas {
        let mut applied = ResourceDeltas::new();
        for (kind, value) in self.iter() {
            let Some(pool) = resources.get_mut(kind) else {
                tracing::trace!(resource = %kind, "delta skipped: pool missing");
                continue;
            };
            let current = pool.adjust_current(value.current);
            let pending = pool.adjust_pending(value.pending);
            applied.insert(kind, PairedValue::new(current, pending));
        }
        applied
    }
}

impl FromIterator<(ResourceType, PairedValue)> for ResourceDeltas {
    fn from_iter<T: IntoIterator<Item = (ResourceType, PairedValue)>>(iter: T) -> Self {
        let mut deltas = ResourceDeltas::new();
        for (kind, value) in iter {
            deltas.insert(kind, value);
        }
        deltas
    }
}

/// Numeric effects of one spell cast or item use.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calculation {
    pub caster_resources: ResourceDeltas,
    pub target_resources: ResourceDeltas,
}

impl Calculation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_target(target_resources: ResourceDeltas) -> Self {
        Self {
            caster_resources: ResourceDeltas::new(),
            target_resources,
        }
    }

    pub fn with_caster(mut self, kind: ResourceType, value: PairedValue) -> Self {
        self.caster_resources.insert(kind, value);
        self
    }

    pub fn with_target(mut self, kind: ResourceType, value: PairedValue) -> Self {
        self.target_resources.insert(kind, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.caster_resources.is_empty() && self.target_resources.is_empty()
    }

    /// Pending delta for a target resource, or 0.
    pub fn target_amount(&self, kind: ResourceType) -> i32 {
        self.target_resources.get(kind).map_or(0, |v| v.pending)
    }

    /// Applies the target side to `target`.
    pub fn apply(&self, target: &mut ResourceSet) -> ResourceDeltas {
        self.target_resources.apply(target)
    }

    pub fn inverse(&self) -> Self {
        Self {
            caster_resources: self.caster_resources.inverse(),
            target_resources: self.target_resources.inverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::Resource;

    #[test]
    fn building_has_no_side_effects_until_applied() {
        let mut set = ResourceSet::new().with(Resource::create(ResourceType::Health, 20));
        set.get_mut(ResourceType::Health).unwrap().set(5);
        let snapshot = set.clone();

        let calc = Calculation::new().with_target(ResourceType::Health, PairedValue::pending(10));
        assert_eq!(set, snapshot);

        let applied = calc.apply(&mut set);
        assert_eq!(
            applied.get(ResourceType::Health),
            Some(&PairedValue::new(0, 10))
        );
        assert_eq!(set.pending(ResourceType::Health), 15);
    }

    #[test]
    fn applied_deltas_are_clamped_and_reversible() {
        let mut set = ResourceSet::new().with(Resource::create(ResourceType::Mana, 10));
        set.get_mut(ResourceType::Mana).unwrap().set(8);

        let calc = Calculation::new().with_target(ResourceType::Mana, PairedValue::new(5, 5));
        let applied = calc.apply(&mut set);
        assert_eq!(applied.get(ResourceType::Mana), Some(&PairedValue::new(2, 2)));

        applied.inverse().apply(&mut set);
        let mana = set.get(ResourceType::Mana).unwrap();
        assert_eq!((mana.current(), mana.pending()), (8, 8));
    }

    #[test]
    fn missing_pools_are_skipped() {
        let mut set = ResourceSet::new();
        let calc = Calculation::new().with_target(ResourceType::Skill, PairedValue::pending(3));
        assert!(calc.apply(&mut set).is_empty());
        assert_eq!(calc.target_amount(ResourceType::Skill), 3);
    }

    #[test]
    fn inserting_same_kind_accumulates() {
        let deltas: ResourceDeltas = [
            (ResourceType::Health, PairedValue::pending(-4)),
            (ResourceType::Health, PairedValue::pending(-3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(deltas.get(ResourceType::Health), Some(&PairedValue::pending(-7)));
    }
}
