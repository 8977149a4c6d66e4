//! Terminal Minesweeper driven by vim motions.
mod app;
mod config;
mod event_loop;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vimsweep_core::FileScoreStore;

use crate::app::App;
use crate::config::{Args, Config, LOG_FILE};

fn main() -> Result<()> {
    let config = Config::from_args(Args::parse());
    let _log_guard = setup_logging(&config)?;

    let store = FileScoreStore::new(&config.scores_path);
    tracing::info!("Score store: {}", store.path().display());

    let mut app = App::new(store, config.seed);
    if let Some(mode) = config.start_mode {
        app.start_game(mode);
    }

    terminal::install_panic_hook();
    let mut terminal = terminal::init()?;
    let _terminal_guard = terminal::TerminalGuard;

    event_loop::run(&mut terminal, &mut app)
}

/// Logs go to a file only; the terminal belongs to the game. The returned
/// guard flushes the non-blocking writer when dropped.
fn setup_logging(config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log directory {}", config.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(
        "Logging initialized: {}",
        config.log_dir.join(LOG_FILE).display()
    );
    Ok(guard)
}
