//! JSON-file registry.
//!
//! The whole library is a pretty-printed JSON array of [`Game`] records.
//! The file is read once on open and rewritten after every mutation.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::RegistryError;
use crate::memory::MemoryRegistry;
use crate::types::Game;
use crate::GameRegistry;

/// Registry persisted to a JSON file.
#[derive(Debug)]
pub struct JsonRegistry {
    path: PathBuf,
    games: MemoryRegistry,
}

impl JsonRegistry {
    /// Opens the registry at `path`, starting empty if the file is missing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();

        let games = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let games: Vec<Game> = if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str(&content)?
            };
            info!(path = %path.display(), count = games.len(), "game library loaded");
            games
        } else {
            debug!(path = %path.display(), "no game library yet, starting empty");
            Vec::new()
        };

        Ok(Self {
            path,
            games: MemoryRegistry::from_games(games),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), RegistryError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self.games.as_slice())?;
        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), "game library saved");
        Ok(())
    }

    /// Applies `change` to a copy, persists it, and only then commits it.
    fn mutate<T>(
        &mut self,
        change: impl FnOnce(&mut MemoryRegistry) -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        let previous = self.games.clone();
        let out = change(&mut self.games)?;

        if let Err(e) = self.save() {
            self.games = previous;
            return Err(e);
        }
        Ok(out)
    }
}

impl GameRegistry for JsonRegistry {
    fn games(&self) -> Result<Vec<Game>, RegistryError> {
        self.games.games()
    }

    fn game_by_name(&self, name: &str) -> Result<Game, RegistryError> {
        self.games.game_by_name(name)
    }

    fn add_game(
        &mut self,
        name: &str,
        directory: &Path,
        executable: &Path,
    ) -> Result<Game, RegistryError> {
        self.mutate(|games| games.add_game(name, directory, executable))
    }

    fn remove_game_by_name(&mut self, name: &str) -> Result<(), RegistryError> {
        self.mutate(|games| games.remove_game_by_name(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_file_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let reg = JsonRegistry::open(tmp.path().join("games.json")).unwrap();
        assert!(reg.games().unwrap().is_empty());
        assert!(!reg.path().exists());
    }

    #[test]
    fn changes_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested").join("games.json");

        {
            let mut reg = JsonRegistry::open(&path).unwrap();
            reg.add_game("A", Path::new("/a"), Path::new("/a/a")).unwrap();
            reg.add_game("B", Path::new("/b"), Path::new("/b/b")).unwrap();
            reg.add_game("C", Path::new("/c"), Path::new("/c/c")).unwrap();
            reg.remove_game_by_name("B").unwrap();
        }

        let reg = JsonRegistry::open(&path).unwrap();
        let names: Vec<String> = reg.games().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(reg.game_by_name("C").unwrap().executable, Path::new("/c/c"));
    }

    #[test]
    fn failed_change_does_not_touch_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("games.json");

        let mut reg = JsonRegistry::open(&path).unwrap();
        reg.add_game("A", Path::new("/a"), Path::new("/a/a")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(reg.add_game("A", Path::new("/z"), Path::new("/z/z")).is_err());
        assert!(reg.remove_game_by_name("missing").is_err());

        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn failed_save_rolls_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("games.json");

        let mut reg = JsonRegistry::open(&path).unwrap();
        reg.add_game("A", Path::new("/a"), Path::new("/a/a")).unwrap();

        // A directory in place of the file makes every write fail.
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let err = reg.add_game("B", Path::new("/b"), Path::new("/b/b")).unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
        assert!(reg.remove_game_by_name("A").is_err());

        let names: Vec<String> = reg.games().unwrap().into_iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["A"]);
        assert!(reg.game_by_name("B").unwrap_err().is_not_found());
    }

    #[test]
    fn empty_file_is_empty_library() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("games.json");
        std::fs::write(&path, "").unwrap();

        let reg = JsonRegistry::open(&path).unwrap();
        assert!(reg.games().unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("games.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonRegistry::open(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }
}
