//! Sound playback through an external command
//!
//! `afplay` on macOS takes the resolved path as its only argument. Other
//! players with the same calling convention (`paplay`, `aplay`) can be
//! swapped in with `--player`.

use crate::errors::{HookError, HookResult};
use std::process::Command;

/// Default playback command
pub const DEFAULT_PLAYER: &str = "afplay";

/// Something that can play a resolved sound argument
pub trait Player: Send + Sync {
    /// Play `sound` (a path or player-specific name) to completion
    fn play(&self, sound: &str) -> HookResult<()>;

    /// Program name for logs
    fn program(&self) -> &str;
}

/// Runs `<program> <sound>` and waits for it to exit
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
}

impl Default for CommandPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER)
    }
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Player for CommandPlayer {
    fn play(&self, sound: &str) -> HookResult<()> {
        let output = Command::new(&self.program)
            .arg(sound)
            .output()
            .map_err(|e| HookError::Playback {
                program: self.program.clone(),
                sound: sound.to_string(),
                reason: format!("failed to execute: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match output.status.code() {
                Some(code) => format!("exit code {code}"),
                None => "terminated by signal".to_string(),
            };
            let reason = if stderr.trim().is_empty() {
                reason
            } else {
                format!("{reason}: {}", stderr.trim())
            };
            return Err(HookError::Playback {
                program: self.program.clone(),
                sound: sound.to_string(),
                reason,
            });
        }

        tracing::debug!(program = %self.program, sound, "Sound played");
        Ok(())
    }

    fn program(&self) -> &str {
        &self.program
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_program_is_afplay() {
        assert_eq!(CommandPlayer::default().program(), "afplay");
    }

    #[test]
    fn test_missing_program_is_playback_error() {
        let player = CommandPlayer::new("/nonexistent/afplay");
        let err = player.play("/System/Library/Sounds/Glass.aiff").unwrap_err();
        match err {
            HookError::Playback { program, sound, reason } => {
                assert_eq!(program, "/nonexistent/afplay");
                assert_eq!(sound, "/System/Library/Sounds/Glass.aiff");
                assert!(reason.starts_with("failed to execute"), "got {reason}");
            }
            other => panic!("expected playback error, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_playback_error() {
        // `false` ignores its argument and exits 1
        let player = CommandPlayer::new("false");
        let err = player.play("/nonexistent/file.wav").unwrap_err();
        assert!(err.to_string().contains("exit code 1"), "got {err}");
        assert!(!err.is_fatal());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command() {
        // `true` stands in for a player that finishes cleanly
        let player = CommandPlayer::new("true");
        assert!(player.play("/System/Library/Sounds/Glass.aiff").is_ok());
    }
}
