//! Game process launcher.
//!
//! Starts one external executable at a time with a given working
//! directory, captures its standard output and error into fixed files,
//! and reports how it ended through an event channel.
//!
//! Outcomes are never returned from [`ProcessLauncher::run`]; they are
//! queued as [`LaunchEvent`]s and picked up by the UI thread with
//! [`ProcessLauncher::poll_event`], which is also where the session
//! returns to [`SessionState::NotRunning`].

pub mod error;
pub mod launcher;
pub mod platform;
pub mod types;

// Re-export primary types for convenience.
pub use error::LaunchError;
pub use launcher::ProcessLauncher;
pub use platform::{resolve_bundle, resolve_executable};
pub use types::{LaunchErrorKind, LaunchEvent, LaunchSession, SessionState};

use std::path::Path;

/// File receiving the child's standard output, inside its working directory.
pub const LOG_FILE: &str = "log.txt";

/// File receiving the child's standard error, inside its working directory.
pub const ERROR_FILE: &str = "error.txt";

/// Launcher seam used by the library panel.
///
/// [`ProcessLauncher`] is the real implementation; tests drive the panel
/// with a scripted one.
pub trait GameLauncher {
    /// Starts `executable` in `working_dir` unless a session is active.
    fn run(&mut self, executable: &Path, working_dir: &Path);

    /// True while a session is starting or running.
    fn is_running(&self) -> bool;

    /// Takes the next delivered outcome, if any, without blocking.
    fn poll_event(&mut self) -> Option<LaunchEvent>;
}
