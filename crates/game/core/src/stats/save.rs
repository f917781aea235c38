//! Save objects for the stat collection.
//!
//! The on-disk encoding is the caller's choice; these types only fix the shape
//! `{level, stat_points, [StatSave...]}` and round-trip every stat's type and values.

use super::collection::Stats;
use super::error::StatsError;
use super::kind::StatType;
use super::stat::Stat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSave {
    pub kind: StatType,
    pub modifier: i32,
    pub maximum: i32,
}

impl From<&Stat> for StatSave {
    fn from(stat: &Stat) -> Self {
        Self {
            kind: stat.kind(),
            modifier: stat.modifier(),
            maximum: stat.maximum(),
        }
    }
}

impl From<StatSave> for Stat {
    /// Restores the exact values, including unbound ones.
    fn from(save: StatSave) -> Self {
        Stat::new_unbound(save.kind, save.modifier, save.maximum)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSave {
    pub level: u32,
    pub stat_points: u32,
    pub stats: Vec<StatSave>,
}

impl Stats {
    pub fn to_save(&self) -> StatsSave {
        StatsSave {
            level: self.level,
            stat_points: self.stat_points,
            stats: self.iter().map(StatSave::from).collect(),
        }
    }

    /// Replaces the sheet with the save's contents. Hooks are kept.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::CorruptSave`] if the save lists a stat type twice; the
    /// collection is left untouched in that case.
    pub fn restore(&mut self, save: &StatsSave) -> Result<(), StatsError> {
        let mut seen = Vec::with_capacity(save.stats.len());
        for entry in &save.stats {
            if seen.contains(&entry.kind) {
                return Err(StatsError::CorruptSave(entry.kind));
            }
            seen.push(entry.kind);
        }

        self.level = save.level;
        self.stat_points = save.stat_points;
        self.clear();
        for entry in &save.stats {
            self.insert_unchecked(Stat::from(*entry));
        }
        Ok(())
    }

    /// Builds a collection from a save, with default hooks.
    pub fn from_save(save: &StatsSave) -> Result<Self, StatsError> {
        let mut stats = Stats::empty();
        stats.restore(save)?;
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::SetMode;

    #[test]
    fn save_round_trips_types_and_unbound_values() {
        let mut stats = Stats::new();
        stats.initialize_stats(4, 6, 5, 4, 3);
        stats.stat_points = 2;
        let _ = stats.set_to_stat(StatType::Intellect, SetMode::ModUnbound, 40);
        stats
            .add_stat(Stat::new(StatType::Experience, 30, 400))
            .unwrap();

        let save = stats.to_save();
        assert_eq!(save.level, 4);
        assert_eq!(save.stats.len(), 6);

        let restored = Stats::from_save(&save).unwrap();
        assert_eq!(restored, stats);
        assert_eq!(
            restored.stat(StatType::Intellect).map(|s| s.modifier()),
            Some(40)
        );
    }

    #[test]
    fn restore_replaces_defaults() {
        let save = StatsSave {
            level: 1,
            stat_points: 0,
            stats: vec![StatSave {
                kind: StatType::Mana,
                modifier: 2,
                maximum: 5,
            }],
        };
        let mut stats = Stats::new();
        stats.restore(&save).unwrap();
        assert_eq!(stats.len(), 1);
        assert!(!stats.has_stat(StatType::Health));
    }

    #[test]
    fn duplicate_entries_are_rejected_without_mutation() {
        let entry = StatSave {
            kind: StatType::Health,
            modifier: 1,
            maximum: 1,
        };
        let save = StatsSave {
            level: 9,
            stat_points: 0,
            stats: vec![entry, entry],
        };
        let mut stats = Stats::new();
        let before = stats.clone();
        assert_eq!(
            stats.restore(&save),
            Err(StatsError::CorruptSave(StatType::Health))
        );
        assert_eq!(stats, before);
    }
}
