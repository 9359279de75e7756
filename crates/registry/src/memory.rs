//! In-memory registry.

use std::path::Path;

use crate::error::RegistryError;
use crate::types::Game;
use crate::GameRegistry;

/// Registry backed by a `Vec`, preserving insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    games: Vec<Game>,
}

impl MemoryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the given records.
    pub fn from_games(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Borrows the stored records.
    pub fn as_slice(&self) -> &[Game] {
        &self.games
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.games.iter().position(|g| g.name == name)
    }
}

impl GameRegistry for MemoryRegistry {
    fn games(&self) -> Result<Vec<Game>, RegistryError> {
        Ok(self.games.clone())
    }

    fn game_by_name(&self, name: &str) -> Result<Game, RegistryError> {
        self.position(name)
            .map(|i| self.games[i].clone())
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))
    }

    fn add_game(
        &mut self,
        name: &str,
        directory: &Path,
        executable: &Path,
    ) -> Result<Game, RegistryError> {
        if self.position(name).is_some() {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        let game = Game::new(name, directory.to_path_buf(), executable.to_path_buf());
        self.games.push(game.clone());
        Ok(game)
    }

    fn remove_game_by_name(&mut self, name: &str) -> Result<(), RegistryError> {
        let index = self
            .position(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        self.games.remove(index);
        Ok(())
    }
}
