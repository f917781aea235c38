//! Common error infrastructure for skirmish-core.
//!
//! This module provides the shared severity classification and trait used by every
//! error type in the crate. Domain-specific errors (e.g., `StatsError`, `SpellError`)
//! are defined in their respective modules alongside the operations they guard.
//!
//! # Design Principles
//!
//! - **Outcomes are values**: "nothing happened because X" is reported through
//!   [`StatChange`](crate::stats::StatChange) and [`CastOutcome`](crate::spell::CastOutcome),
//!   never through an error
//! - **Errors are misuse**: an error means the caller asked for something that cannot
//!   exist (unknown character, duplicate stat, undo without a prior hit)
//! - **Severity Classification**: errors are categorized for recovery strategies

use crate::character::{CharacterId, RosterError};
use crate::item::ItemError;
use crate::spell::SpellError;
use crate::stats::StatsError;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: temporary conditions that may succeed later (no stat points yet)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry once the game state has moved on.
    ///
    /// Examples: no unspent stat points, experience bar not full
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: character not found, duplicate stat type
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: save object containing the same stat twice
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all skirmish-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Stable identifier for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Lookup failure shared by every operation that resolves characters through a roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("character {0} not found")]
pub struct CharacterNotFound(pub CharacterId);

impl GameError for CharacterNotFound {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CHARACTER_NOT_FOUND"
    }
}

/// Views a type-erased error as a rules error when it is one.
///
/// Callers holding `anyhow` or `Box<dyn Error>` chains use this to recover the
/// severity and code of the underlying failure.
pub fn as_game_error<'a>(
    error: &'a (dyn std::error::Error + 'static),
) -> Option<&'a dyn GameError> {
    if let Some(err) = error.downcast_ref::<StatsError>() {
        return Some(err);
    }
    if let Some(err) = error.downcast_ref::<SpellError>() {
        return Some(err);
    }
    if let Some(err) = error.downcast_ref::<ItemError>() {
        return Some(err);
    }
    if let Some(err) = error.downcast_ref::<RosterError>() {
        return Some(err);
    }
    error
        .downcast_ref::<CharacterNotFound>()
        .map(|err| err as &dyn GameError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatType;

    fn classify(
        error: &(dyn std::error::Error + 'static),
    ) -> Option<(&'static str, ErrorSeverity)> {
        as_game_error(error).map(|err| (err.error_code(), err.severity()))
    }

    #[test]
    fn rules_errors_keep_code_and_severity() {
        assert_eq!(
            classify(&StatsError::NoStatPoints),
            Some(("STATS_NO_STAT_POINTS", ErrorSeverity::Recoverable))
        );
        assert_eq!(
            classify(&SpellError::NothingToUndo),
            Some(("SPELL_NOTHING_TO_UNDO", ErrorSeverity::Recoverable))
        );
        assert_eq!(
            classify(&ItemError::CharacterNotFound(CharacterId(3))),
            Some(("ITEM_CHARACTER_NOT_FOUND", ErrorSeverity::Validation))
        );
        assert_eq!(
            classify(&RosterError::DuplicateCharacter(CharacterId(1))),
            Some(("ROSTER_DUPLICATE_CHARACTER", ErrorSeverity::Validation))
        );
        assert_eq!(
            classify(&CharacterNotFound(CharacterId(9))),
            Some(("CHARACTER_NOT_FOUND", ErrorSeverity::Validation))
        );
        assert_eq!(
            classify(&StatsError::DuplicateStat(StatType::Mana)),
            Some(("STATS_DUPLICATE_STAT", ErrorSeverity::Validation))
        );
    }

    #[test]
    fn only_corrupt_saves_are_internal() {
        let corrupt = StatsError::CorruptSave(StatType::Health);
        assert_eq!(corrupt.severity().as_str(), "internal");
        assert!(corrupt.severity().is_internal());
        assert!(!StatsError::CannotLevelUp.severity().is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }

    #[test]
    fn foreign_errors_are_not_classified() {
        let io = std::io::Error::other("disk on fire");
        assert_eq!(classify(&io), None);
    }
}
