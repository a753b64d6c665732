// Clippy configuration: enable pedantic but allow overly strict lints
#![allow(clippy::missing_errors_doc)] // Internal functions don't need # Errors docs
#![allow(clippy::missing_panics_doc)] // Internal functions don't need # Panics docs
#![allow(clippy::must_use_candidate)] // Not all getters need #[must_use]
#![allow(clippy::module_name_repetitions)] // e.g., NotifierBackend in notify module is fine
#![allow(clippy::doc_markdown)] // Don't require backticks around macOS, JSON, etc.
#![allow(clippy::needless_pass_by_value)] // Config is passed by value into the executor

//! claude-code-notification - desktop notifications for Claude Code
//!
//! Runs as a Claude Code `Notification` hook: reads the event JSON from stdin,
//! shows a native notification and plays a sound at the same time.
//!
//! Usage:
//!   claude-code-notification                    # Hook mode (Claude Code pipes JSON)
//!   claude-code-notification --sound Submarine  # Hook mode with another system sound
//!   claude-code-notification setup              # Install the hook into ~/.claude/settings.json
//!   claude-code-notification sounds             # List system sounds

mod cli;
mod config;
mod errors;
mod executor;
mod input;
mod notify;
mod player;
mod setup;
mod sound;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use config::HookConfig;
use executor::Backends;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Daily-rotated log file appender in `dir`
fn open_log_file(dir: &Path) -> Result<RollingFileAppender, String> {
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("claude-code-notification")
        .filename_suffix("log")
        .build(dir)
        .map_err(|e| e.to_string())
}

/// Set up stderr logging, plus rotating file logs when `--log-dir` is given
///
/// An unusable log directory only disables the file layer. The returned
/// guard flushes the file writer on drop; keep it alive until exit.
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let log_filter = format!("claude_code_notification={}", cli.log_level);

    let mut file_error = None;
    let (file_layer, guard) = match cli.log_dir.as_deref().map(open_log_file) {
        Some(Ok(file_appender)) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            file_error = Some(e);
            (None, None)
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    if let (Some(error), Some(dir)) = (file_error, &cli.log_dir) {
        tracing::warn!(dir = %dir.display(), %error, "File logging disabled");
    }

    guard
}

/// Print system sounds, marking the default
fn list_sounds() {
    for name in sound::available_system_sounds() {
        if name == sound::DEFAULT_SOUND {
            println!("{name} (default)");
        } else {
            println!("{name}");
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Parse CLI arguments
    let cli = Cli::parse();
    let _guard = init_logging(&cli);

    match &cli.command {
        Some(Commands::Setup {
            sound,
            settings,
            force,
        }) => {
            return Ok(setup::run(sound.as_deref(), settings.clone(), *force)?);
        }
        Some(Commands::Sounds) => {
            list_sounds();
            return Ok(());
        }
        Some(Commands::Completions { shell }) => {
            cli::print_completions(*shell);
            return Ok(());
        }
        None => {
            // Hook mode: read stdin JSON, notify and play
        }
    }

    let config = HookConfig::from(&cli);
    tracing::debug!(?config, "Hook configuration");
    let backends = Backends::from_config(&config);

    let stdin = std::io::stdin();
    let outcome = match executor::run(stdin.lock(), config, backends).await {
        Ok(outcome) => outcome,
        Err(e) if e.is_fatal() => {
            return Err(e).wrap_err("Claude Code notification hook could not read its input")
        }
        Err(e) => return Err(e).wrap_err("Claude Code notification hook failed"),
    };

    tracing::info!(
        notification = ?outcome.notification,
        playback = ?outcome.playback,
        "Hook finished"
    );
    Ok(())
}
