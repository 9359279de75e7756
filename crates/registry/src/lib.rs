//! Game registry: the persistent list of user-registered games.
//!
//! The launcher addresses games by name only, so a registry must keep
//! names unique. Two stores are provided:
//!
//! - [`MemoryRegistry`] keeps records in insertion order, in memory.
//! - [`JsonRegistry`] does the same but writes every change to a
//!   pretty-printed JSON file.

pub mod error;
pub mod json;
pub mod memory;
pub mod types;

// Re-export primary types for convenience.
pub use error::RegistryError;
pub use json::JsonRegistry;
pub use memory::MemoryRegistry;
pub use types::Game;

use std::path::Path;

/// Storage contract for game records.
///
/// Iteration order of [`games`](GameRegistry::games) is the order records
/// were added; the library list displays them in that order.
pub trait GameRegistry {
    /// Returns every registered game in registry order.
    fn games(&self) -> Result<Vec<Game>, RegistryError>;

    /// Looks up a game by its unique name.
    ///
    /// Fails with [`RegistryError::NotFound`] if no record has that name.
    fn game_by_name(&self, name: &str) -> Result<Game, RegistryError>;

    /// Registers a new game and returns the stored record.
    fn add_game(
        &mut self,
        name: &str,
        directory: &Path,
        executable: &Path,
    ) -> Result<Game, RegistryError>;

    /// Deletes the game with the given name.
    fn remove_game_by_name(&mut self, name: &str) -> Result<(), RegistryError>;
}
