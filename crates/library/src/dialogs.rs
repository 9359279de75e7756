//! User interaction seam.

use std::path::{Path, PathBuf};

/// Visual category of a message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Prompts and blocking message boxes supplied by the host toolkit.
///
/// Every prompt returns `None` when the user cancels it.
pub trait Dialogs {
    /// Asks for the display name of a new game.
    fn ask_game_name(&mut self) -> Option<String>;

    /// Asks for an existing file to execute.
    fn pick_executable(&mut self) -> Option<PathBuf>;

    /// Asks for the working directory, starting the browser at `start`.
    fn pick_working_dir(&mut self, start: &Path) -> Option<PathBuf>;

    /// Shows a modal message and returns once the user dismisses it.
    fn alert(&mut self, severity: Severity, title: &str, message: &str);
}
