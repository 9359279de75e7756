//! Library panel: business logic behind the game list screen.
//!
//! The panel owns the registry, the launcher and the dialog host. It only
//! reads the launcher's session; launch outcomes reach it through
//! [`LibraryPanel::pump_launch_events`], called from the host's UI loop.

use std::path::{Path, PathBuf};

use gameshelf_launcher::{GameLauncher, LaunchErrorKind, LaunchEvent, resolve_executable};
use gameshelf_registry::{GameRegistry, RegistryError};
use tracing::{debug, error, info, warn};

use crate::dialogs::{Dialogs, Severity};
use crate::list::GameList;
use crate::notice::{Notice, NoticeQueue};

const ALREADY_RUNNING: &str = "Error: an application is already running.";
const EMPTY_NAME: &str = "You must specify a game name!";
const FINISHED_WITH_ERROR: &str = "The game finished, but it claims to have encountered an error";
const FAILED_TO_START: &str =
    "Could not start the game. Please double check that you are using the correct file to launch it.";
const CRASHED: &str = "The launched game has crashed";

/// The game library screen.
pub struct LibraryPanel<R, L, D> {
    registry: R,
    launcher: L,
    dialogs: D,
    list: GameList,
    notices: NoticeQueue,
}

impl<R, L, D> LibraryPanel<R, L, D>
where
    R: GameRegistry,
    L: GameLauncher,
    D: Dialogs,
{
    /// Creates the panel and fills the list from the registry.
    pub fn new(registry: R, launcher: L, dialogs: D) -> Self {
        let mut panel = Self {
            registry,
            launcher,
            dialogs,
            list: GameList::new(),
            notices: NoticeQueue::new(),
        };

        if let Ok(games) = panel.registry.games() {
            for game in &games {
                debug!(
                    id = %game.id,
                    name = %game.name,
                    directory = %game.directory.display(),
                    executable = %game.executable.display(),
                    "registered game"
                );
            }
        }

        panel.refresh();
        panel
    }

    /// Launches the selected game unless one is already running.
    pub fn launch_selected(&mut self) {
        if self.launcher.is_running() {
            self.dialogs.alert(Severity::Critical, "Error", ALREADY_RUNNING);
            return;
        }

        let Some(name) = self.list.selected() else {
            return;
        };

        match self.registry.game_by_name(name) {
            Ok(game) => {
                info!(name = %game.name, "launching game");
                self.launcher.run(&game.executable, &game.directory);
            }
            Err(RegistryError::NotFound(name)) => {
                debug!(name = %name, "selected game no longer registered");
            }
            Err(e) => {
                error!(error = %e, "failed to look up game");
                self.report_registry_error(&e);
            }
        }
    }

    /// Walks the user through registering a new game.
    ///
    /// Cancelling any prompt leaves the registry untouched.
    pub fn add_game(&mut self) {
        let Some(name) = self.dialogs.ask_game_name() else {
            return;
        };

        let name = name.trim();
        if name.is_empty() {
            self.dialogs.alert(Severity::Critical, "Error", EMPTY_NAME);
            return;
        }
        let name = name.to_string();

        let Some(picked) = self.dialogs.pick_executable() else {
            debug!(name = %name, "add cancelled at executable prompt");
            return;
        };

        let start_dir = containing_dir(&picked);
        let executable = resolve_executable(&picked);

        let Some(directory) = self.dialogs.pick_working_dir(&start_dir) else {
            debug!(name = %name, "add cancelled at working directory prompt");
            return;
        };

        info!(
            name = %name,
            executable = %executable.display(),
            directory = %directory.display(),
            "adding game"
        );

        match self.registry.add_game(&name, &directory, &executable) {
            Ok(_) => self.refresh(),
            Err(e) => {
                warn!(name = %name, error = %e, "failed to add game");
                self.report_registry_error(&e);
            }
        }
    }

    /// Deletes the selected game.
    pub fn remove_selected(&mut self) {
        let Some(name) = self.list.selected().map(str::to_string) else {
            return;
        };

        match self.registry.remove_game_by_name(&name) {
            Ok(()) => info!(name = %name, "removed game"),
            Err(RegistryError::NotFound(_)) => {
                debug!(name = %name, "game already removed");
            }
            Err(e) => {
                error!(name = %name, error = %e, "failed to remove game");
                self.report_registry_error(&e);
                return;
            }
        }

        self.refresh();
    }

    /// Rebuilds the list from the registry, in registry order.
    pub fn refresh(&mut self) {
        match self.registry.games() {
            Ok(games) => self.list.replace(games.into_iter().map(|g| g.name)),
            Err(e) => {
                error!(error = %e, "failed to read game library");
                self.list.replace(Vec::new());
                self.report_registry_error(&e);
            }
        }
    }

    /// Reacts to a normal process exit.
    pub fn on_launch_finished(&mut self, exit_code: i32) {
        if exit_code != 0 {
            info!(exit_code, "game exited with an error code");
            self.notices.warning("Warning", FINISHED_WITH_ERROR);
        }
    }

    /// Reacts to a process-level failure.
    pub fn on_launch_failed(&mut self, kind: LaunchErrorKind) {
        match kind {
            LaunchErrorKind::FailedToStart => {
                self.dialogs.alert(Severity::Critical, "Error", FAILED_TO_START);
            }
            LaunchErrorKind::Crashed => {
                self.dialogs.alert(Severity::Warning, "Crash!", CRASHED);
            }
            // Not related to starting the game.
            other => debug!(kind = ?other, "ignoring launch error"),
        }
    }

    /// Dispatches every outcome the launcher has delivered.
    ///
    /// Returns how many outcomes were handled.
    pub fn pump_launch_events(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.launcher.poll_event() {
            match event {
                LaunchEvent::Finished { exit_code } => self.on_launch_finished(exit_code),
                LaunchEvent::Failed(kind) => self.on_launch_failed(kind),
            }
            handled += 1;
        }
        handled
    }

    fn report_registry_error(&mut self, e: &RegistryError) {
        let message = match e {
            RegistryError::Duplicate(name) => format!("A game named \"{name}\" already exists."),
            other => format!("The game library could not be updated: {other}"),
        };
        self.dialogs.alert(Severity::Critical, "Error", &message);
    }

    /// Selects an entry by name. Returns `false` if absent.
    pub fn select(&mut self, name: &str) -> bool {
        self.list.select(name)
    }

    /// Selects an entry by position. Returns `false` if out of range.
    pub fn select_index(&mut self, index: usize) -> bool {
        self.list.select_index(index)
    }

    pub fn clear_selection(&mut self) {
        self.list.clear_selection();
    }

    pub fn list(&self) -> &GameList {
        &self.list
    }

    pub fn is_running(&self) -> bool {
        self.launcher.is_running()
    }

    pub fn notices(&self) -> &NoticeQueue {
        &self.notices
    }

    /// Removes and returns pending notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }
}

/// Directory the working-directory prompt starts in.
fn containing_dir(picked: &Path) -> PathBuf {
    picked
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
