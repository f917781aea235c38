use crate::character::CharacterId;
use crate::error::{CharacterNotFound, ErrorSeverity, GameError};

/// Errors raised by the cast pipeline.
///
/// A cast that is merely not possible right now is not an error; it resolves to
/// [`CastOutcome::CantCast`](super::CastOutcome::CantCast).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error("no successful cast to undo")]
    NothingToUndo,
}

impl From<CharacterNotFound> for SpellError {
    fn from(err: CharacterNotFound) -> Self {
        Self::CharacterNotFound(err.0)
    }
}

impl GameError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CharacterNotFound(_) => ErrorSeverity::Validation,
            Self::NothingToUndo => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CharacterNotFound(_) => "SPELL_CHARACTER_NOT_FOUND",
            Self::NothingToUndo => "SPELL_NOTHING_TO_UNDO",
        }
    }
}
