//! Hook execution
//!
//! `Idle → Reading Input → {Notifying ∥ Playing Sound} → Done`
//!
//! Input errors are returned before anything is spawned. After that the
//! notification and the sound run as two independent blocking tasks joined
//! at one barrier. Each task logs its own failure; neither result is seen
//! by the other task or reflected in the exit status.

use crate::config::HookConfig;
use crate::errors::HookResult;
use crate::input::{self, NotificationRequest};
use crate::notify::Notifier;
use crate::player::{CommandPlayer, Player};
use std::io::Read;
use std::sync::Arc;
use tokio::task::JoinError;

/// The two side-effecting capabilities of a hook run
#[derive(Clone)]
pub struct Backends {
    pub notifier: Arc<dyn Notifier>,
    pub player: Arc<dyn Player>,
}

impl Backends {
    /// Platform implementations selected by the config
    pub fn from_config(config: &HookConfig) -> Self {
        Self {
            notifier: config.notifier.build(),
            player: Arc::new(CommandPlayer::new(config.player.clone())),
        }
    }
}

/// How one action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Done,
    /// Not attempted (sound routed through the notification)
    Skipped,
    /// Error or panic, already logged
    Failed,
}

/// Result of the fan-out, for logging and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub notification: ActionStatus,
    pub playback: ActionStatus,
}

/// Read the request from `input`, then notify and play
///
/// Only input errors are returned.
pub async fn run<R: Read>(input: R, config: HookConfig, backends: Backends) -> HookResult<Outcome> {
    let request = input::read_request(input)?;
    tracing::debug!(
        session_id = %request.session_id,
        transcript_path = %request.transcript_path,
        title = %request.title,
        "Hook request parsed"
    );
    Ok(dispatch(request, config, backends).await)
}

/// Show the notification and play the sound concurrently
pub async fn dispatch(request: NotificationRequest, config: HookConfig, backends: Backends) -> Outcome {
    let Backends { notifier, player } = backends;
    let notification_sound = config.notification_sound();
    let playback_argument = config.playback_argument();

    let notify_task = tokio::task::spawn_blocking(move || {
        let result = notifier.notify(
            &request.title,
            &request.message,
            notification_sound.as_deref(),
        );
        if let Err(e) = &result {
            tracing::warn!(backend = notifier.name(), error = %e, "Notification failed");
        }
        result.is_ok()
    });

    let play_task = tokio::task::spawn_blocking(move || {
        let Some(sound) = playback_argument else {
            return ActionStatus::Skipped;
        };
        match player.play(&sound) {
            Ok(()) => ActionStatus::Done,
            Err(e) => {
                tracing::warn!(program = player.program(), sound = %sound, error = %e, "Sound playback failed");
                ActionStatus::Failed
            }
        }
    });

    let (notified, played) = tokio::join!(notify_task, play_task);

    Outcome {
        notification: match notified {
            Ok(true) => ActionStatus::Done,
            Ok(false) => ActionStatus::Failed,
            Err(e) => joined_with_panic("notification", &e),
        },
        playback: match played {
            Ok(status) => status,
            Err(e) => joined_with_panic("playback", &e),
        },
    }
}

fn joined_with_panic(action: &str, error: &JoinError) -> ActionStatus {
    tracing::warn!(action, error = %error, "Hook task panicked");
    ActionStatus::Failed
}
