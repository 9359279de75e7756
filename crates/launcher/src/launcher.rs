//! Child process launcher.
//!
//! The launcher owns the only [`LaunchSession`]. A spawned child is handed
//! to a watcher task that waits for the exit and sends exactly one
//! [`LaunchEvent`]; the watcher never touches the session itself.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use tokio::process::{Child, Command};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::error::LaunchError;
use crate::types::{LaunchErrorKind, LaunchEvent, LaunchSession, SessionState};
use crate::{ERROR_FILE, GameLauncher, LOG_FILE};

/// Pending outcome capacity. One session produces one event.
const EVENT_CAPACITY: usize = 16;

/// Launches one external process at a time.
pub struct ProcessLauncher {
    runtime: Handle,
    session: Option<LaunchSession>,
    events_tx: mpsc::Sender<LaunchEvent>,
    events_rx: mpsc::Receiver<LaunchEvent>,
}

impl ProcessLauncher {
    /// Creates an idle launcher whose watcher tasks run on `runtime`.
    pub fn new(runtime: Handle) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CAPACITY);
        Self {
            runtime,
            session: None,
            events_tx,
            events_rx,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.session
            .as_ref()
            .map(|s| s.state)
            .unwrap_or(SessionState::NotRunning)
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&LaunchSession> {
        self.session.as_ref()
    }

    /// True while starting or running.
    pub fn is_running(&self) -> bool {
        self.state().is_active()
    }

    /// Starts `executable` with `working_dir` as its current directory.
    ///
    /// Does nothing if a session is already active. Returns once the OS has
    /// started executing the program; a failure to start is queued as
    /// [`LaunchErrorKind::FailedToStart`] instead of being returned.
    pub fn run(&mut self, executable: &Path, working_dir: &Path) {
        if self.is_running() {
            warn!(executable = %executable.display(), "launch ignored, a session is active");
            return;
        }

        info!(
            executable = %executable.display(),
            working_dir = %working_dir.display(),
            "launching"
        );

        self.session = Some(LaunchSession {
            executable: executable.to_path_buf(),
            working_dir: working_dir.to_path_buf(),
            state: SessionState::Starting,
            pid: None,
        });

        match self.spawn(executable, working_dir) {
            Ok(child) => {
                let pid = child.id();
                if let Some(session) = self.session.as_mut() {
                    session.state = SessionState::Running;
                    session.pid = pid;
                }
                info!(pid, "process started");

                let events_tx = self.events_tx.clone();
                self.runtime.spawn(watch_exit(child, events_tx));
            }
            Err(e) => {
                warn!(error = %e, "process failed to start");
                self.deliver(LaunchEvent::Failed(LaunchErrorKind::FailedToStart));
            }
        }
    }

    /// Takes the next delivered outcome without blocking.
    ///
    /// Any outcome ends the session.
    pub fn poll_event(&mut self) -> Option<LaunchEvent> {
        let event = self.events_rx.try_recv().ok()?;
        self.observe(event);
        Some(event)
    }

    /// Waits for the next outcome.
    pub async fn next_event(&mut self) -> Option<LaunchEvent> {
        let event = self.events_rx.recv().await?;
        self.observe(event);
        Some(event)
    }

    fn observe(&mut self, event: LaunchEvent) {
        match self.session.take() {
            Some(session) => {
                info!(executable = %session.executable.display(), ?event, "session ended");
            }
            None => debug!(?event, "outcome received with no session"),
        }
    }

    fn deliver(&self, event: LaunchEvent) {
        if let Err(e) = self.events_tx.try_send(event) {
            error!(error = %e, "failed to queue launch event");
        }
    }

    fn spawn(&self, executable: &Path, working_dir: &Path) -> Result<Child, LaunchError> {
        let stdout = create_output(working_dir.join(LOG_FILE))?;
        let stderr = create_output(working_dir.join(ERROR_FILE))?;

        // The child reaper registers with the runtime's driver.
        let _guard = self.runtime.enter();

        Command::new(executable)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                executable: executable.to_path_buf(),
                source,
            })
    }
}

impl GameLauncher for ProcessLauncher {
    fn run(&mut self, executable: &Path, working_dir: &Path) {
        ProcessLauncher::run(self, executable, working_dir);
    }

    fn is_running(&self) -> bool {
        ProcessLauncher::is_running(self)
    }

    fn poll_event(&mut self) -> Option<LaunchEvent> {
        ProcessLauncher::poll_event(self)
    }
}

/// Creates or truncates an output capture file.
fn create_output(path: PathBuf) -> Result<File, LaunchError> {
    File::create(&path).map_err(|source| LaunchError::OutputFile { path, source })
}

/// Waits for the child to exit and reports the outcome once.
async fn watch_exit(mut child: Child, events_tx: mpsc::Sender<LaunchEvent>) {
    let pid = child.id();

    let event = match child.wait().await {
        Ok(status) => classify_exit(status),
        Err(e) => {
            warn!(pid, error = %e, "failed to wait for process");
            LaunchEvent::Failed(LaunchErrorKind::Unknown)
        }
    };

    debug!(pid, ?event, "process exited");

    if events_tx.send(event).await.is_err() {
        debug!(pid, "launcher dropped before the exit was reported");
    }
}

/// Maps an exit status to an outcome.
///
/// On Unix a status without an exit code means the process was terminated
/// by a signal. Windows always reports a code; abnormal terminations show
/// up as NTSTATUS error or warning values.
fn classify_exit(status: ExitStatus) -> LaunchEvent {
    match status.code() {
        #[cfg(windows)]
        Some(exit_code) if is_crash_status(exit_code as u32) => {
            warn!(status = %format!("{:#010x}", exit_code as u32), "process crashed");
            LaunchEvent::Failed(LaunchErrorKind::Crashed)
        }
        Some(exit_code) => LaunchEvent::Finished { exit_code },
        None => {
            #[cfg(unix)]
            {
                use std::os::unix::process::ExitStatusExt;
                warn!(signal = status.signal(), "process crashed");
            }
            LaunchEvent::Failed(LaunchErrorKind::Crashed)
        }
    }
}

/// True for Windows exit codes in the NTSTATUS warning and error ranges,
/// e.g. `0xC0000005` for an access violation.
#[cfg_attr(not(windows), allow(dead_code))]
fn is_crash_status(code: u32) -> bool {
    (0x8000_0000..0xD000_0000).contains(&code)
}
