//! Session and event types.

use std::path::PathBuf;

/// Lifecycle of the single launch session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotRunning,
    /// Launch requested, process not confirmed yet.
    Starting,
    Running,
}

impl SessionState {
    /// Starting counts as running: a second launch must be refused.
    pub fn is_active(self) -> bool {
        self != Self::NotRunning
    }
}

/// The in-flight launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSession {
    pub executable: PathBuf,
    pub working_dir: PathBuf,
    pub state: SessionState,
    /// OS process id once the child is running.
    pub pid: Option<u32>,
}

/// Process-level failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchErrorKind {
    /// The program could not be started (missing file, no permission,
    /// output files not writable).
    FailedToStart,
    /// The program was terminated abnormally, e.g. by a signal.
    Crashed,
    Timedout,
    ReadError,
    WriteError,
    /// The exit could not be observed.
    Unknown,
}

/// Outcome of a launch, delivered once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchEvent {
    /// The process exited on its own, successfully or not.
    Finished { exit_code: i32 },
    /// The process failed at the OS level.
    Failed(LaunchErrorKind),
}
