//! GameShelf entry point.

mod app;
mod command;
mod config;
mod console;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize structured logging. The terminal UI owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting GameShelf");

    // Load configuration.
    let config = match config::Config::load() {
        Ok(c) => {
            tracing::info!(library = %c.library_path.display(), "configuration loaded");
            c
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            config::Config::default()
        }
    };

    // Child exits are awaited on this runtime; the UI loop stays on the
    // main thread.
    let rt = tokio::runtime::Runtime::new()?;
    app::run(&rt, config)?;

    tracing::info!("GameShelf shut down cleanly");
    Ok(())
}
