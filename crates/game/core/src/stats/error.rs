//! Stat collection errors.

use crate::error::{ErrorSeverity, GameError};

use super::kind::StatType;

/// Errors raised by [`Stats`](super::Stats) operations that cannot be expressed as a no-op.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// The collection already holds a stat of this type.
    #[error("stat {0} already present")]
    DuplicateStat(StatType),

    /// The collection has no stat of this type.
    #[error("stat {0} not present")]
    MissingStat(StatType),

    /// Stat points can only be spent on assignable attributes.
    #[error("stat {0} is not assignable")]
    NotAssignable(StatType),

    /// No unspent stat points left.
    #[error("no stat points available")]
    NoStatPoints,

    /// Experience bar is not full.
    #[error("not enough experience to level up")]
    CannotLevelUp,

    /// A save object lists the same stat twice.
    #[error("save object contains stat {0} more than once")]
    CorruptSave(StatType),
}

impl GameError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        use StatsError::*;
        match self {
            DuplicateStat(_) | MissingStat(_) | NotAssignable(_) => ErrorSeverity::Validation,
            NoStatPoints | CannotLevelUp => ErrorSeverity::Recoverable,
            CorruptSave(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StatsError::*;
        match self {
            DuplicateStat(_) => "STATS_DUPLICATE_STAT",
            MissingStat(_) => "STATS_MISSING_STAT",
            NotAssignable(_) => "STATS_NOT_ASSIGNABLE",
            NoStatPoints => "STATS_NO_STAT_POINTS",
            CannotLevelUp => "STATS_CANNOT_LEVEL_UP",
            CorruptSave(_) => "STATS_CORRUPT_SAVE",
        }
    }
}
