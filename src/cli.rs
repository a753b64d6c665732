//! CLI argument parsing
//!
//! Uses clap for argument parsing with derive macros. Running without a
//! subcommand is hook mode: Claude Code pipes the event JSON to stdin.

use crate::config::SoundRoute;
use crate::notify::NotifierBackend;
use crate::player::DEFAULT_PLAYER;
use crate::sound::DEFAULT_SOUND;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

/// Claude Code hook for displaying desktop notifications
#[derive(Parser, Debug)]
#[command(name = "claude-code-notification")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// System sound name (e.g. Glass, Submarine) or path to an audio file
    #[arg(
        long,
        value_name = "SOUND_NAME",
        env = "CLAUDE_NOTIFICATION_SOUND",
        default_value = DEFAULT_SOUND
    )]
    pub sound: String,

    /// Notification backend
    #[arg(long, value_enum, default_value_t = NotifierBackend::Native)]
    pub notifier: NotifierBackend,

    /// Playback command, called as `<PLAYER> <sound-path>`
    #[arg(
        long,
        value_name = "PROGRAM",
        env = "CLAUDE_NOTIFICATION_PLAYER",
        default_value = DEFAULT_PLAYER
    )]
    pub player: String,

    /// Where system sounds are played: by the playback command or by the notification itself
    #[arg(long, value_enum, default_value_t = SoundRoute::Player)]
    pub sound_via: SoundRoute,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Also write logs to daily-rotated files in this directory
    #[arg(long, env = "CLAUDE_NOTIFICATION_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure Claude Code settings to run this hook on notifications
    Setup {
        /// Sound the installed hook should play (prompts when omitted on a terminal)
        #[arg(long, value_name = "SOUND_NAME")]
        sound: Option<String>,

        /// Settings file to update (default: ~/.claude/settings.json)
        #[arg(long, value_name = "PATH")]
        settings: Option<PathBuf>,

        /// Replace all Notification hooks instead of merging
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List available system sounds
    Sounds,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Generate shell completions and print to stdout
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "claude-code-notification", &mut io::stdout());
}
