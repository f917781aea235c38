//! The per-character stat collection.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::config::RulesConfig;
use crate::splat::{DiscardSplats, SplatDetails, SplatSink};

use super::error::StatsError;
use super::kind::StatType;
use super::stat::Stat;

/// Which part of a stat a set/add operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetMode {
    /// Current value, clamped into `[0, Max]`.
    Mod,
    /// Current value, stored as given.
    ModUnbound,
    /// Ceiling; the current value is pulled back inside it.
    Max,
}

/// Which part of a stat a query sums.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GetMode {
    Mod,
    /// Current value plus the injected equipment bonus.
    ModAndEquip,
    Max,
}

/// Liveness derived from the Health stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum LifeState {
    Alive,
    Dead,
}

/// Why a stat mutation did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The collection holds no stat of the requested type.
    MissingStat,
    /// Adding zero is a no-op.
    ZeroAmount,
}

/// Result of a stat mutation.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatChange {
    Applied { before: Stat, after: Stat },
    Skipped(SkipReason),
}

impl StatChange {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    /// Change of the current value, or 0 when skipped.
    pub const fn modifier_delta(&self) -> i32 {
        match self {
            Self::Applied { before, after } => after.modifier().saturating_sub(before.modifier()),
            Self::Skipped(_) => 0,
        }
    }
}

/// Resolves the equipment bonus for a stat.
///
/// Injected so the collection never depends on the equipment subsystem.
pub trait EquipmentBonus: Send + Sync {
    fn bonus(&self, stat: StatType) -> i32;
}

impl<F> EquipmentBonus for F
where
    F: Fn(StatType) -> i32 + Send + Sync,
{
    fn bonus(&self, stat: StatType) -> i32 {
        self(stat)
    }
}

/// Resolver for characters without equipment.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEquipment;

impl EquipmentBonus for NoEquipment {
    fn bonus(&self, _stat: StatType) -> i32 {
        0
    }
}

/// Mapping from stat type to [`Stat`] plus level bookkeeping.
///
/// # Invariants
///
/// - At most one stat per [`StatType`]
/// - Every applied mutation emits exactly one splat; skipped mutations emit none
///
/// Equality and hashing are structural over `level`, `stat_points` and the stat
/// values. The injected hooks do not participate.
#[derive(Clone)]
pub struct Stats {
    stats: BTreeMap<StatType, Stat>,
    pub level: u32,
    pub stat_points: u32,
    equipment: Arc<dyn EquipmentBonus>,
    splats: Arc<dyn SplatSink>,
}

impl Stats {
    /// Creates the default sheet: zeroed attributes and Health.
    pub fn new() -> Self {
        let mut stats = Self::empty();
        for kind in StatType::ASSIGNABLES {
            stats.stats.insert(kind, Stat::new(kind, 0, 0));
        }
        stats
            .stats
            .insert(StatType::Health, Stat::new(StatType::Health, 0, 0));
        stats
    }

    /// Creates a collection holding no stats at all.
    pub fn empty() -> Self {
        Self {
            stats: BTreeMap::new(),
            level: 0,
            stat_points: 0,
            equipment: Arc::new(NoEquipment),
            splats: Arc::new(DiscardSplats),
        }
    }

    pub fn with_equipment(mut self, equipment: Arc<dyn EquipmentBonus>) -> Self {
        self.equipment = equipment;
        self
    }

    pub fn with_splats(mut self, splats: Arc<dyn SplatSink>) -> Self {
        self.splats = splats;
        self
    }

    pub fn equipment_bonus(&self, kind: StatType) -> i32 {
        self.equipment.bonus(kind)
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Inserts a stat.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::DuplicateStat`] if a stat of the same type is present.
    pub fn add_stat(&mut self, stat: Stat) -> Result<(), StatsError> {
        let kind = stat.kind();
        match self.stats.entry(kind) {
            btree_map::Entry::Occupied(_) => return Err(StatsError::DuplicateStat(kind)),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(stat);
            }
        }
        self.splats.splat(SplatDetails::new(kind.color(), "+", kind));
        Ok(())
    }

    pub fn remove_stat(&mut self, kind: StatType) -> Option<Stat> {
        self.stats.remove(&kind)
    }

    pub fn has_stat(&self, kind: StatType) -> bool {
        self.stats.contains_key(&kind)
    }

    pub fn stat(&self, kind: StatType) -> Option<&Stat> {
        self.stats.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stat> {
        self.stats.values()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = &Stat> {
        self.iter().filter(|stat| stat.kind().is_resource())
    }

    pub fn assignables(&self) -> impl Iterator<Item = &Stat> {
        self.iter().filter(|stat| stat.kind().is_assignable())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Overwrites one part of a stat.
    ///
    /// Setting to zero is applied like any other value.
    pub fn set_to_stat(&mut self, kind: StatType, mode: SetMode, amount: i32) -> StatChange {
        let Some(stat) = self.stats.get_mut(&kind) else {
            tracing::trace!(stat = %kind, ?mode, amount, "set skipped: stat missing");
            return StatChange::Skipped(SkipReason::MissingStat);
        };

        let before = *stat;
        match mode {
            SetMode::Mod => stat.set_modifier(amount),
            SetMode::ModUnbound => stat.set_mod(amount, false),
            SetMode::Max => stat.set_maximum(amount),
        }
        let after = *stat;

        self.splats.splat(SplatDetails::new(
            kind.determine_color(amount),
            format!("={amount}"),
            kind,
        ));
        StatChange::Applied { before, after }
    }

    /// Adds to one part of a stat.
    pub fn add_to_stat(&mut self, kind: StatType, mode: SetMode, amount: i32) -> StatChange {
        let Some(stat) = self.stats.get_mut(&kind) else {
            tracing::trace!(stat = %kind, ?mode, amount, "add skipped: stat missing");
            return StatChange::Skipped(SkipReason::MissingStat);
        };
        if amount == 0 {
            return StatChange::Skipped(SkipReason::ZeroAmount);
        }

        let before = *stat;
        match mode {
            SetMode::Mod => stat.add_modifier(amount),
            SetMode::ModUnbound => stat.add_modifier_unbound(amount),
            SetMode::Max => stat.add_maximum(amount),
        }
        let after = *stat;

        self.splats.splat(SplatDetails::new(
            kind.determine_color(amount),
            format!("{amount:+}"),
            kind,
        ));
        StatChange::Applied { before, after }
    }

    /// Runs every stat's per-turn passive hook.
    pub fn update(&mut self, config: &RulesConfig) {
        for stat in self.stats.values_mut() {
            let delta = stat.update(config);
            if delta != 0 {
                tracing::trace!(stat = %stat.kind(), delta, "passive regeneration");
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Sums the requested stats. Absent stats contribute nothing.
    ///
    /// Unbound values can sit anywhere in `i32`, so the sum saturates.
    pub fn stat_count(&self, mode: GetMode, kinds: &[StatType]) -> i32 {
        kinds
            .iter()
            .filter_map(|kind| self.stats.get(kind))
            .map(|stat| match mode {
                GetMode::Mod => stat.modifier(),
                GetMode::ModAndEquip => stat
                    .modifier()
                    .saturating_add(self.equipment.bonus(stat.kind())),
                GetMode::Max => stat.maximum(),
            })
            .fold(0, i32::saturating_add)
    }

    pub fn state(&self) -> LifeState {
        if self.stat_count(GetMode::Mod, &[StatType::Health]) > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// True when the experience bar is full.
    pub fn can_level_up(&self) -> bool {
        self.stats
            .get(&StatType::Experience)
            .is_some_and(|experience| experience.modifier() >= experience.maximum())
    }

    /// Turn order: higher agility (with equipment) first, then higher level.
    ///
    /// `Less` means `self` acts before `other`.
    pub fn initiative_cmp(&self, other: &Stats) -> Ordering {
        let agility = |stats: &Stats| stats.stat_count(GetMode::ModAndEquip, &[StatType::Agility]);
        agility(other)
            .cmp(&agility(self))
            .then_with(|| other.level.cmp(&self.level))
    }

    // ========================================================================
    // Initialization & progression
    // ========================================================================

    /// Assigns level and the four attributes (both current value and ceiling).
    pub fn initialize_stats(&mut self, level: u32, str: i32, agi: i32, int: i32, vit: i32) {
        self.level = level;
        self.set_to_both(StatType::Strength, str);
        self.set_to_both(StatType::Agility, agi);
        self.set_to_both(StatType::Intellect, int);
        self.set_to_both(StatType::Vitality, vit);
    }

    /// Refills every restored resource to its ceiling.
    pub fn initialize_resources(&mut self) {
        for stat in self.stats.values_mut() {
            if stat.kind().is_restored() {
                stat.set_modifier(stat.maximum());
            }
        }
    }

    fn set_to_both(&mut self, kind: StatType, amount: i32) {
        let _ = self.set_to_stat(kind, SetMode::ModUnbound, amount);
        let _ = self.set_to_stat(kind, SetMode::Max, amount);
    }

    /// Advances one level. Returns the new level.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::CannotLevelUp`] unless the experience bar is full.
    pub fn level_up(&mut self, config: &RulesConfig) -> Result<u32, StatsError> {
        if !self.can_level_up() {
            return Err(StatsError::CannotLevelUp);
        }
        self.level += 1;
        self.stat_points += config.stat_points_per_level;

        let next = config.experience_for_level(self.level);
        let _ = self.set_to_stat(StatType::Experience, SetMode::Max, next);
        let _ = self.set_to_stat(StatType::Experience, SetMode::Mod, 0);

        tracing::debug!(level = self.level, stat_points = self.stat_points, "level up");
        Ok(self.level)
    }

    /// Spends one stat point on an assignable attribute (ceiling and current value +1).
    pub fn allocate_point(&mut self, kind: StatType) -> Result<(), StatsError> {
        if !kind.is_assignable() {
            return Err(StatsError::NotAssignable(kind));
        }
        if !self.has_stat(kind) {
            return Err(StatsError::MissingStat(kind));
        }
        if self.stat_points == 0 {
            return Err(StatsError::NoStatPoints);
        }
        self.stat_points -= 1;
        let _ = self.add_to_stat(kind, SetMode::Max, 1);
        let _ = self.add_to_stat(kind, SetMode::Mod, 1);
        Ok(())
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    /// Multi-line sheet: level, then assignables with equipment bonus, then resources.
    pub fn attribute_summary(&self) -> String {
        let mut assignables = Vec::new();
        let mut resources = Vec::new();
        for stat in self.stats.values() {
            let kind = stat.kind();
            if kind.is_assignable() {
                assignables.push(format!(
                    "{} {}/{} ({:+})",
                    kind.name(),
                    stat.modifier(),
                    stat.maximum(),
                    self.equipment.bonus(kind)
                ));
            } else if kind.is_resource() {
                resources.push(format!(
                    "{} {}/{}",
                    kind.name(),
                    stat.modifier(),
                    stat.maximum()
                ));
            }
        }

        let mut out = String::new();
        let _ = write!(
            out,
            "Level {}\n<Assignables>\n{}\n<Resources>\n{}",
            self.level,
            assignables.join("\n"),
            resources.join("\n")
        );
        out
    }

    pub(super) fn insert_unchecked(&mut self, stat: Stat) -> Option<Stat> {
        self.stats.insert(stat.kind(), stat)
    }

    pub(super) fn clear(&mut self) {
        self.stats.clear();
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Stats {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && self.stat_points == other.stat_points
            && self.stats == other.stats
    }
}

impl Eq for Stats {}

impl Hash for Stats {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.level.hash(state);
        self.stat_points.hash(state);
        self.stats.hash(state);
    }
}

impl core::fmt::Debug for Stats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stats")
            .field("level", &self.level)
            .field("stat_points", &self.stat_points)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a Stats {
    type Item = &'a Stat;
    type IntoIter = btree_map::Values<'a, StatType, Stat>;

    fn into_iter(self) -> Self::IntoIter {
        self.stats.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splat::{Color, SplatLog};

    fn sheet() -> Stats {
        let mut stats = Stats::new();
        stats.initialize_stats(2, 5, 7, 3, 4);
        stats.add_stat(Stat::new(StatType::Mana, 0, 10)).unwrap();
        let _ = stats.set_to_stat(StatType::Health, SetMode::Max, 20);
        stats.initialize_resources();
        stats
    }

    #[test]
    fn defaults_hold_attributes_and_health() {
        let stats = Stats::new();
        assert_eq!(stats.len(), 5);
        for kind in StatType::ASSIGNABLES {
            assert_eq!(stats.stat(kind), Some(&Stat::new(kind, 0, 0)));
        }
        assert!(stats.has_stat(StatType::Health));
        assert_eq!(stats.state(), LifeState::Dead);
    }

    #[test]
    fn duplicate_add_is_rejected() {
        let mut stats = Stats::new();
        let err = stats
            .add_stat(Stat::new(StatType::Health, 3, 3))
            .unwrap_err();
        assert_eq!(err, StatsError::DuplicateStat(StatType::Health));
        assert_eq!(stats.stat(StatType::Health).unwrap().maximum(), 0);
    }

    #[test]
    fn initialize_stats_sets_mod_and_max() {
        let stats = sheet();
        assert_eq!(stats.level, 2);
        let agility = stats.stat(StatType::Agility).unwrap();
        assert_eq!((agility.modifier(), agility.maximum()), (7, 7));
        assert_eq!(stats.stat_count(GetMode::Mod, &[StatType::Health]), 20);
        assert_eq!(stats.stat_count(GetMode::Mod, &[StatType::Mana]), 10);
    }

    #[test]
    fn bounded_modes_keep_mod_within_max() {
        let mut stats = sheet();
        let cases = [
            (SetMode::Mod, 500),
            (SetMode::Mod, -500),
            (SetMode::Max, 3),
            (SetMode::Max, -1),
            (SetMode::Max, 40),
        ];
        for (mode, amount) in cases {
            let _ = stats.set_to_stat(StatType::Health, mode, amount);
            let _ = stats.add_to_stat(StatType::Mana, mode, amount);
            for kind in [StatType::Health, StatType::Mana] {
                let stat = stats.stat(kind).unwrap();
                assert!(
                    (0..=stat.maximum()).contains(&stat.modifier()),
                    "{kind} out of bounds after {mode:?} {amount}: {stat:?}"
                );
            }
        }
    }

    #[test]
    fn unbound_mode_may_exceed_max() {
        let mut stats = sheet();
        let change = stats.add_to_stat(StatType::Strength, SetMode::ModUnbound, 10);
        assert_eq!(change.modifier_delta(), 10);
        let strength = stats.stat(StatType::Strength).unwrap();
        assert_eq!((strength.modifier(), strength.maximum()), (15, 5));
    }

    #[test]
    fn sums_saturate_at_unbound_extremes() {
        let mut stats = Stats::new().with_equipment(Arc::new(|_: StatType| 3));
        let _ = stats.set_to_stat(StatType::Strength, SetMode::ModUnbound, i32::MAX);
        let _ = stats.set_to_stat(StatType::Agility, SetMode::ModUnbound, 1);
        let both = [StatType::Strength, StatType::Agility];
        assert_eq!(stats.stat_count(GetMode::Mod, &both), i32::MAX);
        assert_eq!(stats.stat_count(GetMode::ModAndEquip, &both), i32::MAX);

        let _ = stats.set_to_stat(StatType::Strength, SetMode::ModUnbound, i32::MIN);
        let change = stats.set_to_stat(StatType::Strength, SetMode::ModUnbound, i32::MAX);
        assert_eq!(change.modifier_delta(), i32::MAX);
    }

    #[test]
    fn missing_and_zero_mutations_report_skips() {
        let mut stats = Stats::new();
        assert_eq!(
            stats.add_to_stat(StatType::Skill, SetMode::Mod, 3),
            StatChange::Skipped(SkipReason::MissingStat)
        );
        assert_eq!(
            stats.set_to_stat(StatType::Experience, SetMode::Max, 3),
            StatChange::Skipped(SkipReason::MissingStat)
        );
        assert_eq!(
            stats.add_to_stat(StatType::Health, SetMode::Mod, 0),
            StatChange::Skipped(SkipReason::ZeroAmount)
        );
    }

    #[test]
    fn set_to_zero_is_applied() {
        let mut stats = sheet();
        let change = stats.set_to_stat(StatType::Health, SetMode::Mod, 0);
        assert!(change.is_applied());
        assert_eq!(change.modifier_delta(), -20);
        assert_eq!(stats.state(), LifeState::Dead);
    }

    #[test]
    fn equipment_bonus_is_added_per_present_stat() {
        let stats = sheet().with_equipment(Arc::new(|kind: StatType| match kind {
            StatType::Strength => 3,
            StatType::Skill => 100,
            _ => 1,
        }));

        for kind in [StatType::Strength, StatType::Agility, StatType::Health] {
            assert_eq!(
                stats.stat_count(GetMode::ModAndEquip, &[kind]),
                stats.stat_count(GetMode::Mod, &[kind]) + stats.equipment_bonus(kind)
            );
        }
        // Skill is absent, so its bonus never applies.
        assert_eq!(stats.stat_count(GetMode::ModAndEquip, &[StatType::Skill]), 0);
        assert_eq!(
            stats.stat_count(GetMode::Mod, &[StatType::Strength, StatType::Agility]),
            12
        );
    }

    #[test]
    fn splats_follow_applied_mutations_only() {
        let log = Arc::new(SplatLog::new());
        let mut stats = Stats::new().with_splats(log.clone());

        let _ = stats.add_to_stat(StatType::Skill, SetMode::Mod, 5);
        let _ = stats.add_to_stat(StatType::Health, SetMode::Mod, 0);
        assert!(log.is_empty());

        let _ = stats.add_to_stat(StatType::Health, SetMode::Max, 5);
        let _ = stats.add_to_stat(StatType::Health, SetMode::Mod, -2);
        let _ = stats.set_to_stat(StatType::Health, SetMode::Mod, 4);
        stats.add_stat(Stat::new(StatType::Mana, 0, 0)).unwrap();

        let splats = log.drain();
        let texts: Vec<_> = splats.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["+5", "-2", "=4", "+"]);
        assert_eq!(splats[0].color, StatType::Health.color());
        assert_eq!(splats[1].color, Color::RED);
        assert_eq!(splats[3].icon, StatType::Mana);
    }

    #[test]
    fn insertion_order_does_not_affect_equality() {
        let mut a = Stats::empty();
        a.add_stat(Stat::new(StatType::Mana, 3, 10)).unwrap();
        a.add_stat(Stat::new(StatType::Health, 5, 20)).unwrap();

        let mut b = Stats::empty();
        b.add_stat(Stat::new(StatType::Health, 5, 20)).unwrap();
        b.add_stat(Stat::new(StatType::Mana, 3, 10)).unwrap();

        assert_eq!(a, b);

        let _ = b.add_to_stat(StatType::Mana, SetMode::Mod, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn initiative_prefers_agility_then_level() {
        let mut quick = Stats::new();
        quick.initialize_stats(1, 0, 9, 0, 0);
        let mut slow = Stats::new();
        slow.initialize_stats(5, 0, 4, 0, 0);
        assert_eq!(quick.initiative_cmp(&slow), Ordering::Less);
        assert_eq!(slow.initiative_cmp(&quick), Ordering::Greater);

        let mut veteran = Stats::new();
        veteran.initialize_stats(7, 0, 9, 0, 0);
        assert_eq!(veteran.initiative_cmp(&quick), Ordering::Less);
        assert_eq!(quick.initiative_cmp(&quick.clone()), Ordering::Equal);
    }

    #[test]
    fn level_up_requires_full_experience() {
        let config = RulesConfig::default();
        let mut stats = Stats::new();
        assert!(!stats.can_level_up());
        assert_eq!(stats.level_up(&config), Err(StatsError::CannotLevelUp));

        stats
            .add_stat(Stat::new(StatType::Experience, 100, 100))
            .unwrap();
        stats.level = 1;
        assert!(stats.can_level_up());
        assert_eq!(stats.level_up(&config), Ok(2));
        assert_eq!(stats.stat_points, 3);

        let experience = stats.stat(StatType::Experience).unwrap();
        assert_eq!((experience.modifier(), experience.maximum()), (0, 200));
        assert!(!stats.can_level_up());
    }

    #[test]
    fn allocating_points_raises_attribute() {
        let mut stats = sheet();
        assert_eq!(
            stats.allocate_point(StatType::Strength),
            Err(StatsError::NoStatPoints)
        );
        stats.stat_points = 1;
        assert_eq!(
            stats.allocate_point(StatType::Health),
            Err(StatsError::NotAssignable(StatType::Health))
        );
        stats.allocate_point(StatType::Strength).unwrap();
        assert_eq!(stats.stat_points, 0);
        let strength = stats.stat(StatType::Strength).unwrap();
        assert_eq!((strength.modifier(), strength.maximum()), (6, 6));
    }

    #[test]
    fn update_regenerates_skill() {
        let config = RulesConfig::default();
        let mut stats = Stats::new();
        stats.add_stat(Stat::new(StatType::Skill, 0, 2)).unwrap();
        stats.update(&config);
        stats.update(&config);
        stats.update(&config);
        assert_eq!(stats.stat_count(GetMode::Mod, &[StatType::Skill]), 2);
    }

    #[test]
    fn summary_lists_assignables_and_resources() {
        let stats = sheet().with_equipment(Arc::new(|kind: StatType| {
            if kind == StatType::Strength { 2 } else { 0 }
        }));
        let summary = stats.attribute_summary();
        assert!(summary.starts_with("Level 2\n<Assignables>\nStrength 5/5 (+2)\n"));
        assert!(summary.contains("Agility 7/7 (+0)"));
        assert!(summary.ends_with("<Resources>\nHealth 20/20\nMana 10/10"));
    }
}
