use arrayvec::ArrayVec;

use crate::config::RulesConfig;
use crate::spell::SpellRecord;

/// Append-only spell history with a fixed capacity.
///
/// Once [`RulesConfig::MAX_HISTORY`] entries are stored the oldest one is evicted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpellLog {
    entries: ArrayVec<SpellRecord, { RulesConfig::MAX_HISTORY }>,
    evicted: u64,
}

impl SpellLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: SpellRecord) {
        if self.entries.is_full() {
            self.entries.remove(0);
            self.evicted += 1;
        }
        self.entries.push(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total records ever appended, including evicted ones.
    pub fn total(&self) -> u64 {
        self.evicted + self.entries.len() as u64
    }

    pub fn last(&self) -> Option<&SpellRecord> {
        self.entries.last()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SpellRecord> {
        self.entries.iter()
    }
}
