//! Hook configuration
//!
//! Built once from the parsed CLI at startup and passed by value into the
//! executor. Nothing reads flags or environment after this point.

use crate::cli::Cli;
use crate::notify::NotifierBackend;
use crate::player::DEFAULT_PLAYER;
use crate::sound::SoundSpec;
use clap::ValueEnum;

/// Who makes the noise for a system sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SoundRoute {
    /// Run the playback command alongside the notification
    #[default]
    Player,
    /// Attach the sound name to the notification and skip the player.
    /// Custom file paths still go to the player.
    Notification,
}

/// Runtime configuration for one hook invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookConfig {
    pub sound: SoundSpec,
    pub route: SoundRoute,
    /// Playback command
    pub player: String,
    pub notifier: NotifierBackend,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            sound: SoundSpec::default(),
            route: SoundRoute::default(),
            player: DEFAULT_PLAYER.to_string(),
            notifier: NotifierBackend::default(),
        }
    }
}

impl From<&Cli> for HookConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            sound: SoundSpec::parse(&cli.sound),
            route: cli.sound_via,
            player: cli.player.clone(),
            notifier: cli.notifier,
        }
    }
}

impl HookConfig {
    /// Sound name to attach to the notification, if any
    pub fn notification_sound(&self) -> Option<String> {
        match self.route {
            SoundRoute::Player => None,
            SoundRoute::Notification => self.sound.system_name().map(String::from),
        }
    }

    /// Argument for the playback command, or `None` when the player is skipped
    pub fn playback_argument(&self) -> Option<String> {
        match (self.route, &self.sound) {
            (SoundRoute::Notification, SoundSpec::System(_)) => None,
            _ => Some(self.sound.resolve()),
        }
    }
}
