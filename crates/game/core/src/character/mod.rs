//! Characters: the owners of stats, resource pools and spell history.
//!
//! Cross-character effects never share references; they are applied through a
//! [`Roster`] by id, one character at a time.

mod history;
mod roster;

pub use history::SpellLog;
pub use roster::{Roster, RosterError};

use crate::resources::{ResourceSet, ResourceType};
use crate::stats::{LifeState, Stats};

/// Unique identifier for a character within a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl core::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub stats: Stats,
    pub resources: ResourceSet,
    /// Spells this character cast (hit or miss).
    pub cast_history: SpellLog,
    /// Spells cast on this character (hit or miss).
    pub received_history: SpellLog,
}

impl Character {
    /// Creates a character with default stats and no resource pools.
    pub fn new(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stats: Stats::new(),
            resources: ResourceSet::new(),
            cast_history: SpellLog::new(),
            received_history: SpellLog::new(),
        }
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_resources(mut self, resources: ResourceSet) -> Self {
        self.resources = resources;
        self
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Alive while the health pool (or, without one, the Health stat) is above zero.
    pub fn is_alive(&self) -> bool {
        match self.resources.get(ResourceType::Health) {
            Some(health) => !health.is_empty(),
            None => self.stats.state() == LifeState::Alive,
        }
    }
}
