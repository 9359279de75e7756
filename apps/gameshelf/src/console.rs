//! Terminal + native dialog host for the library panel.
//!
//! Text input comes from stdin, read on a dedicated thread so the UI loop
//! can keep draining launch outcomes while the user is idle. File and
//! folder prompts and blocking messages use native dialogs via `rfd`.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use gameshelf_library::{Dialogs, Notice, Severity};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use tokio::sync::mpsc;

/// Buffered input lines.
const INPUT_CAPACITY: usize = 16;

pub struct Console {
    input: mpsc::Receiver<String>,
}

impl Console {
    /// Starts the stdin reader thread.
    pub fn spawn() -> Self {
        let (tx, input) = mpsc::channel(INPUT_CAPACITY);

        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
            tracing::debug!("stdin closed");
        });

        Self { input }
    }

    /// Waits for the next input line. `None` once stdin is closed.
    pub async fn next_line(&mut self) -> Option<String> {
        self.input.recv().await
    }

    /// Prints a non-blocking notice.
    pub fn show_notice(notice: &Notice) {
        println!("[{}] {}: {}", severity_label(notice.severity), notice.title, notice.message);
    }
}

impl Dialogs for Console {
    fn ask_game_name(&mut self) -> Option<String> {
        print_prompt("Game Name: ");
        // Called from the UI thread, outside the runtime.
        self.input.blocking_recv()
    }

    fn pick_executable(&mut self) -> Option<PathBuf> {
        FileDialog::new().set_title("Select Executable").pick_file()
    }

    fn pick_working_dir(&mut self, start: &Path) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Select Working Directory")
            .set_directory(start)
            .pick_folder()
    }

    fn alert(&mut self, severity: Severity, title: &str, message: &str) {
        tracing::debug!(?severity, title, "showing alert");
        println!("[{}] {title}: {message}", severity_label(severity));

        let level = match severity {
            Severity::Info => MessageLevel::Info,
            Severity::Warning => MessageLevel::Warning,
            Severity::Critical => MessageLevel::Error,
        };

        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Critical => "error",
    }
}

/// Prints `text` without a newline and flushes stdout.
pub fn print_prompt(text: &str) {
    use std::io::Write;

    print!("{text}");
    let _ = std::io::stdout().flush();
}
