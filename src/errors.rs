//! Structured error types for the notification hook
//!
//! Uses thiserror for ergonomic error definitions with automatic Display
//! and Error trait implementations.
//!
//! `Read` and `Parse` are fatal (the hook exits non-zero before any side
//! effect). `Playback` and `Notification` are recoverable: the executor logs
//! them and the process still exits 0.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors in the notification hook
#[derive(Error, Debug)]
pub enum HookError {
    /// stdin could not be read or was not valid UTF-8
    #[error("Failed to read hook input: {0}")]
    Read(#[from] std::io::Error),

    /// stdin was not a valid JSON object
    #[error("Failed to parse hook JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Playback command missing or exited non-zero
    #[error("Failed to play sound '{sound}' with {program}: {reason}")]
    Playback {
        program: String,
        sound: String,
        reason: String,
    },

    /// Desktop notification facility failed
    #[error("Failed to show notification: {0}")]
    Notification(String),

    /// Settings installation failed
    #[error("Hook setup failed for '{}': {reason}", .path.display())]
    Setup { path: PathBuf, reason: String },

    /// Sound chosen during setup cannot be played
    #[error("Invalid sound '{sound}': {reason}")]
    InvalidSound { sound: String, reason: String },

    /// Interactive setup prompt failed or was aborted
    #[error("Setup prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl HookError {
    /// True for errors that abort the hook before any side effect
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Read(_) | Self::Parse(_))
    }
}

/// Convenience Result type using HookError
pub type HookResult<T> = std::result::Result<T, HookError>;

impl From<notify_rust::error::Error> for HookError {
    fn from(e: notify_rust::error::Error) -> Self {
        HookError::Notification(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let parse = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        assert!(HookError::from(parse).is_fatal());
        assert!(HookError::Read(std::io::Error::other("closed")).is_fatal());

        let playback = HookError::Playback {
            program: "afplay".to_string(),
            sound: "/nonexistent/file.wav".to_string(),
            reason: "exit code 1".to_string(),
        };
        assert!(!playback.is_fatal());
        assert!(!HookError::Notification("no daemon".to_string()).is_fatal());
    }

    #[test]
    fn test_playback_message_names_sound() {
        let err = HookError::Playback {
            program: "afplay".to_string(),
            sound: "/nonexistent/file.wav".to_string(),
            reason: "exit code 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to play sound '/nonexistent/file.wav' with afplay: exit code 1"
        );
    }
}
