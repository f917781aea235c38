use crate::error::{CharacterNotFound, ErrorSeverity, GameError};

use super::{Character, CharacterId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("character {0} already in roster")]
    DuplicateCharacter(CharacterId),
}

impl GameError for RosterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateCharacter(_) => "ROSTER_DUPLICATE_CHARACTER",
        }
    }
}

/// Every character taking part in an encounter.
///
/// The roster is the mutation boundary for casts and item uses: effects look
/// characters up by id and mutate them one at a time.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    characters: Vec<Character>,
    nonce: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, character: Character) -> Result<CharacterId, RosterError> {
        let id = character.id;
        if self.contains(id) {
            return Err(RosterError::DuplicateCharacter(id));
        }
        self.characters.push(character);
        Ok(id)
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.characters.iter().any(|c| c.id == id)
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn get(&self, id: CharacterId) -> Result<&Character, CharacterNotFound> {
        self.character(id).ok_or(CharacterNotFound(id))
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Result<&mut Character, CharacterNotFound> {
        self.character_mut(id).ok_or(CharacterNotFound(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.characters.iter_mut()
    }

    pub fn ids(&self) -> Vec<CharacterId> {
        self.characters.iter().map(|c| c.id).collect()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Sequence number of the next resolved cast; feeds RNG seeding.
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub(crate) fn advance_nonce(&mut self) {
        self.nonce += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let mut roster = Roster::new();
        roster.add(Character::new(CharacterId(1), "A")).unwrap();
        assert_eq!(
            roster.add(Character::new(CharacterId(1), "B")),
            Err(RosterError::DuplicateCharacter(CharacterId(1)))
        );
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(CharacterId(1)).unwrap().name, "A");
        assert_eq!(
            roster.get(CharacterId(2)).unwrap_err(),
            CharacterNotFound(CharacterId(2))
        );
    }
}
