//! A single bounded attribute.

use crate::config::RulesConfig;

use super::kind::StatType;

/// One named numeric attribute: a current value (`modifier`) under a ceiling (`maximum`).
///
/// Bounded mutations keep `0 <= modifier <= maximum`. The unbound setters exist for
/// raw attribute assignment before the ceiling has been derived and for restoring saves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stat {
    kind: StatType,
    modifier: i32,
    maximum: i32,
}

impl Stat {
    /// Creates a stat with `modifier` clamped into `[0, maximum]`.
    pub fn new(kind: StatType, modifier: i32, maximum: i32) -> Self {
        let mut stat = Self::new_unbound(kind, modifier, maximum.max(0));
        stat.set_modifier(modifier);
        stat
    }

    /// Creates a stat holding exactly the given values.
    pub const fn new_unbound(kind: StatType, modifier: i32, maximum: i32) -> Self {
        Self {
            kind,
            modifier,
            maximum,
        }
    }

    pub const fn kind(&self) -> StatType {
        self.kind
    }

    pub const fn modifier(&self) -> i32 {
        self.modifier
    }

    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    pub const fn is_maxed(&self) -> bool {
        self.modifier >= self.maximum
    }

    /// Sets the current value, clamped into `[0, maximum]`.
    pub fn set_modifier(&mut self, value: i32) {
        self.modifier = value.clamp(0, self.maximum.max(0));
    }

    /// Sets the current value, skipping the clamp when `bound` is false.
    pub fn set_mod(&mut self, value: i32, bound: bool) {
        if bound {
            self.set_modifier(value);
        } else {
            self.modifier = value;
        }
    }

    pub fn add_modifier(&mut self, delta: i32) {
        self.set_modifier(self.modifier.saturating_add(delta));
    }

    pub fn add_modifier_unbound(&mut self, delta: i32) {
        self.modifier = self.modifier.saturating_add(delta);
    }

    /// Sets the ceiling (never below zero) and pulls the current value back inside it.
    pub fn set_maximum(&mut self, value: i32) {
        self.maximum = value.max(0);
        self.set_modifier(self.modifier);
    }

    pub fn add_maximum(&mut self, delta: i32) {
        self.set_maximum(self.maximum.saturating_add(delta));
    }

    /// Per-turn passive hook. Returns the delta actually applied.
    pub fn update(&mut self, config: &RulesConfig) -> i32 {
        let regen = self.kind.regen_per_turn(config);
        if regen == 0 {
            return 0;
        }
        let before = self.modifier;
        self.add_modifier(regen);
        self.modifier.saturating_sub(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_setter_clamps_both_sides() {
        let mut stat = Stat::new(StatType::Health, 5, 10);
        stat.set_modifier(50);
        assert_eq!(stat.modifier(), 10);
        stat.set_modifier(-3);
        assert_eq!(stat.modifier(), 0);
    }

    #[test]
    fn unbound_setter_keeps_raw_value() {
        let mut stat = Stat::new(StatType::Strength, 0, 0);
        stat.set_mod(12, false);
        assert_eq!(stat.modifier(), 12);
        assert_eq!(stat.maximum(), 0);

        stat.set_mod(12, true);
        assert_eq!(stat.modifier(), 0);
    }

    #[test]
    fn lowering_maximum_pulls_modifier_down() {
        let mut stat = Stat::new(StatType::Mana, 8, 10);
        stat.set_maximum(4);
        assert_eq!((stat.modifier(), stat.maximum()), (4, 4));

        stat.set_maximum(-5);
        assert_eq!((stat.modifier(), stat.maximum()), (0, 0));
    }

    #[test]
    fn skill_regenerates_up_to_cap() {
        let config = RulesConfig::default();
        let mut stat = Stat::new(StatType::Skill, 9, 10);
        assert_eq!(stat.update(&config), 1);
        assert_eq!(stat.update(&config), 0);
        assert!(stat.is_maxed());

        let mut health = Stat::new(StatType::Health, 1, 10);
        assert_eq!(health.update(&config), 0);
        assert_eq!(health.modifier(), 1);
    }
}
