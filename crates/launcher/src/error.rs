//! Error types for launch setup.

use std::path::PathBuf;

/// Errors raised while preparing or spawning a child process.
///
/// These never reach the caller of `run`; they are logged and turned into
/// a [`LaunchErrorKind::FailedToStart`](crate::LaunchErrorKind) event.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("cannot create {path}: {source}")]
    OutputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot start {executable}: {source}")]
    Spawn {
        executable: PathBuf,
        source: std::io::Error,
    },
}
