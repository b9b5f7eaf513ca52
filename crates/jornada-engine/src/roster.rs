//! The ordered collection of characters that is saved and loaded as a unit.

use crate::character::Character;
use crate::error::{EngineError, EngineResult};

/// Characters in insertion order. Positions are stable only while loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a character and return its position.
    pub fn add(&mut self, character: Character) -> usize {
        tracing::info!(name = %character.name(), role = %character.role(), "character added");
        self.characters.push(character);
        self.characters.len() - 1
    }

    /// Remove and return the character at `index`.
    pub fn remove(&mut self, index: usize) -> EngineResult<Character> {
        if index >= self.characters.len() {
            return Err(EngineError::NoSuchCharacter(index));
        }
        let removed = self.characters.remove(index);
        tracing::info!(name = %removed.name(), "character removed");
        Ok(removed)
    }

    /// Rename the character at `index`.
    pub fn rename(&mut self, index: usize, name: &str) -> EngineResult<()> {
        self.get_mut(index)
            .ok_or(EngineError::NoSuchCharacter(index))?
            .rename(name)
    }

    /// The character at `index`.
    pub fn get(&self, index: usize) -> Option<&Character> {
        self.characters.get(index)
    }

    /// The character at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Character> {
        self.characters.get_mut(index)
    }

    /// Iterate in roster order.
    pub fn iter(&self) -> std::slice::Iter<'_, Character> {
        self.characters.iter()
    }

    /// Iterate mutably in roster order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Character> {
        self.characters.iter_mut()
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

impl From<Vec<Character>> for Roster {
    fn from(characters: Vec<Character>) -> Self {
        Self { characters }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Character;
    type IntoIter = std::slice::Iter<'a, Character>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::Role;

    fn two() -> Roster {
        let mut roster = Roster::new();
        roster.add(Character::new("Ana", Role::Vecino));
        roster.add(Character::new("Beto", Role::Narco));
        roster
    }

    #[test]
    fn add_preserves_order() {
        let roster = two();
        let names: Vec<&str> = roster.iter().map(Character::name).collect();
        assert_eq!(names, vec!["Ana", "Beto"]);
    }

    #[test]
    fn remove_shifts_positions() {
        let mut roster = two();
        let removed = roster.remove(0).unwrap();
        assert_eq!(removed.name(), "Ana");
        assert_eq!(roster.get(0).unwrap().name(), "Beto");
        assert!(matches!(
            roster.remove(5),
            Err(EngineError::NoSuchCharacter(5))
        ));
    }

    #[test]
    fn rename_validates() {
        let mut roster = two();
        roster.rename(1, "  Carla ").unwrap();
        assert_eq!(roster.get(1).unwrap().name(), "Carla");
        assert!(matches!(roster.rename(1, "   "), Err(EngineError::EmptyName)));
        assert!(matches!(
            roster.rename(2, "Dora"),
            Err(EngineError::NoSuchCharacter(2))
        ));
    }
}
