//! Domain types for the game registry.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-registered game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    /// User-visible name, unique within a registry.
    pub name: String,
    /// Working directory the game is started in.
    pub directory: PathBuf,
    pub executable: PathBuf,
}

impl Game {
    /// Creates a record with a fresh identifier.
    pub fn new(name: impl Into<String>, directory: PathBuf, executable: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            directory,
            executable,
        }
    }
}
