use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::config::RulesConfig;
use crate::stats::{SetMode, StatType, Stats};

use super::kind::ResourceType;
use super::meter::Resource;

/// The resource pools owned by one character, at most one per type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceSet {
    pools: BTreeMap<ResourceType, Resource>,
}

impl ResourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds pools from the stat sheet plus an empty charge bar.
    ///
    /// Every resource type with a stat counterpart present on the sheet becomes a pool
    /// with the stat's ceiling and current value.
    pub fn from_stats(stats: &Stats) -> Self {
        let mut set = Self::new();
        for stat in stats.resources() {
            let Some(kind) = Self::resource_for(stat.kind()) else {
                continue;
            };
            let mut pool = Resource::new(kind, stat.maximum().max(0) as u32);
            pool.set(stat.modifier().max(0) as u32);
            set.insert(pool);
        }
        set.insert(Resource::create(ResourceType::Charge, 0));
        set
    }

    fn resource_for(stat: StatType) -> Option<ResourceType> {
        use strum::IntoEnumIterator;
        ResourceType::iter().find(|kind| kind.stat() == Some(stat))
    }

    /// Writes every pool's pending value back onto its stat.
    pub fn write_back(&self, stats: &mut Stats) {
        for pool in self.pools.values() {
            if let Some(stat) = pool.kind().stat() {
                let _ = stats.set_to_stat(stat, SetMode::Mod, pool.pending() as i32);
            }
        }
    }

    /// Inserts or replaces a pool. Returns the replaced pool.
    pub fn insert(&mut self, resource: Resource) -> Option<Resource> {
        self.pools.insert(resource.kind(), resource)
    }

    pub fn with(mut self, resource: Resource) -> Self {
        self.insert(resource);
        self
    }

    pub fn get(&self, kind: ResourceType) -> Option<&Resource> {
        self.pools.get(&kind)
    }

    pub fn get_mut(&mut self, kind: ResourceType) -> Option<&mut Resource> {
        self.pools.get_mut(&kind)
    }

    pub fn contains(&self, kind: ResourceType) -> bool {
        self.pools.contains_key(&kind)
    }

    /// Pending value of a pool, or 0 when absent.
    pub fn pending(&self, kind: ResourceType) -> u32 {
        self.get(kind).map_or(0, Resource::pending)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.pools.values()
    }

    /// Fills the charge bar by one tick. Returns the charge actually gained.
    pub fn tick(&mut self, config: &RulesConfig) -> u32 {
        let gain = config.charge_per_tick.min(i32::MAX as u32) as i32;
        self.get_mut(ResourceType::Charge)
            .map_or(0, |charge| charge.adjust_pending(gain).max(0) as u32)
    }

    /// Runs the sheet's per-turn hook and adds whatever it regenerated to the pending
    /// tracks of the matching pools.
    pub fn regenerate(&mut self, stats: &mut Stats, config: &RulesConfig) {
        let before: Vec<(ResourceType, StatType, i32)> = self
            .pools
            .keys()
            .filter_map(|&kind| {
                let stat = kind.stat()?;
                Some((kind, stat, stats.stat(stat)?.modifier()))
            })
            .collect();
        stats.update(config);

        for (kind, stat, old) in before {
            let gained = stats
                .stat(stat)
                .map_or(0, |now| now.modifier().saturating_sub(old));
            if gained == 0 {
                continue;
            }
            if let Some(pool) = self.pools.get_mut(&kind) {
                pool.adjust_pending(gained);
            }
        }
    }

    pub fn reconcile_all(&mut self) {
        for pool in self.pools.values_mut() {
            pool.reconcile();
        }
    }
}

impl<'a> IntoIterator for &'a ResourceSet {
    type Item = &'a Resource;
    type IntoIter = btree_map::Values<'a, ResourceType, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.pools.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Stat;

    fn sheet() -> Stats {
        let mut stats = Stats::new();
        let _ = stats.set_to_stat(StatType::Health, SetMode::Max, 30);
        let _ = stats.set_to_stat(StatType::Health, SetMode::Mod, 12);
        stats.add_stat(Stat::new(StatType::Mana, 4, 9)).unwrap();
        stats
            .add_stat(Stat::new(StatType::Experience, 1, 100))
            .unwrap();
        stats
    }

    #[test]
    fn seeds_pools_from_sheet() {
        let set = ResourceSet::from_stats(&sheet());
        let health = set.get(ResourceType::Health).unwrap();
        assert_eq!((health.pending(), health.maximum()), (12, 30));
        assert_eq!(set.pending(ResourceType::Mana), 4);
        assert!(!set.contains(ResourceType::Skill));

        let charge = set.get(ResourceType::Charge).unwrap();
        assert_eq!((charge.pending(), charge.maximum()), (0, RulesConfig::CHARGE_MAX));
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn write_back_copies_pending_values() {
        let mut stats = sheet();
        let mut set = ResourceSet::from_stats(&stats);
        set.get_mut(ResourceType::Health).unwrap().adjust_pending(-12);
        set.get_mut(ResourceType::Mana).unwrap().adjust_pending(5);
        set.write_back(&mut stats);

        assert_eq!(stats.stat(StatType::Health).unwrap().modifier(), 0);
        assert_eq!(stats.stat(StatType::Mana).unwrap().modifier(), 9);
    }

    #[test]
    fn regeneration_runs_through_the_sheet() {
        let config = RulesConfig::default();
        let mut stats = sheet();
        stats.add_stat(Stat::new(StatType::Skill, 3, 5)).unwrap();
        let mut set = ResourceSet::from_stats(&stats);
        set.get_mut(ResourceType::Health).unwrap().adjust_pending(-2);

        set.regenerate(&mut stats, &config);
        assert_eq!(stats.stat(StatType::Skill).unwrap().modifier(), 4);
        let skill = set.get(ResourceType::Skill).unwrap();
        assert_eq!((skill.current(), skill.pending()), (3, 4));
        assert_eq!(set.pending(ResourceType::Health), 10);
        assert_eq!(set.pending(ResourceType::Mana), 4);

        set.regenerate(&mut stats, &config);
        set.regenerate(&mut stats, &config);
        assert_eq!(set.pending(ResourceType::Skill), 5);
    }

    #[test]
    fn tick_fills_charge_until_full() {
        let config = RulesConfig::default().with_charge_per_tick(40);
        let mut set = ResourceSet::new().with(Resource::create(ResourceType::Charge, 0));
        assert_eq!(set.tick(&config), 40);
        assert_eq!(set.tick(&config), 40);
        assert_eq!(set.tick(&config), 20);
        assert!(set.get(ResourceType::Charge).unwrap().is_maxed());
        assert_eq!(ResourceSet::new().tick(&config), 0);
    }
}
