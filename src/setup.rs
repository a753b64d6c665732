//! Hook installation into Claude Code settings
//!
//! Writes a `Notification` hook that runs this binary into
//! `~/.claude/settings.json` (or a given settings file). Merges with what is
//! already there: user keys and other hook events are kept, previous entries
//! for this tool are replaced.
//!
//! Without `--sound` on a terminal, the sound is picked interactively from
//! the system sounds or entered as a custom file path.
//!
//! # Configuration
//!
//! The binary path in the hook command can be configured via
//! `CLAUDE_NOTIFICATION_PATH`. Defaults to `claude-code-notification` (on PATH).

use crate::errors::{HookError, HookResult};
use crate::sound::{self, SoundSpec, DEFAULT_SOUND};
use dialoguer::{theme::ColorfulTheme, FuzzySelect, Input};
use serde_json::{json, Map, Value};
use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

/// Binary name matched when looking for our own hook entries
const BINARY_NAME: &str = "claude-code-notification";

/// Hook event this tool is installed under
const HOOK_EVENT: &str = "Notification";

/// Last entry of the interactive sound list
const CUSTOM_CHOICE: &str = "Custom file path...";

/// Default settings file: `~/.claude/settings.json`
pub fn default_settings_path() -> HookResult<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".claude").join("settings.json"))
        .ok_or_else(|| HookError::Setup {
            path: PathBuf::from("~/.claude/settings.json"),
            reason: "could not determine home directory".to_string(),
        })
}

/// Get the binary path from environment or default
fn binary_path() -> String {
    binary_or_default(std::env::var("CLAUDE_NOTIFICATION_PATH").ok())
}

/// An unset or empty override falls back to `BINARY_NAME`
fn binary_or_default(value: Option<String>) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| BINARY_NAME.to_string())
}

/// Quote a word for `sh` when it contains anything beyond `[A-Za-z0-9._-]`
///
/// Single quotes disable `$`, backticks and `"`; an embedded `'` becomes `'\''`.
fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Hook command line for a sound
pub fn hook_command(binary: &str, sound: &str) -> String {
    format!("{binary} --sound {}", shell_quote(sound))
}

/// True if a hook command runs this tool
///
/// Compares the program (first word) against the configured binary and
/// against any path whose file name is `BINARY_NAME`.
fn is_our_command(command: &str, binary: &str) -> bool {
    let Some(program) = command.split_whitespace().next() else {
        return false;
    };
    program == binary
        || Path::new(program)
            .file_name()
            .is_some_and(|name| name == BINARY_NAME)
}

/// True if a hook entry (`{"hooks": [{"command": ...}]}`) runs this tool
fn is_our_entry(entry: &Value, binary: &str) -> bool {
    entry
        .get("hooks")
        .and_then(Value::as_array)
        .is_some_and(|hooks| {
            hooks.iter().any(|h| {
                h.get("command")
                    .and_then(Value::as_str)
                    .is_some_and(|cmd| is_our_command(cmd, binary))
            })
        })
}

/// Merge our Notification hook into an existing settings object
fn merge_hook(settings: &mut Map<String, Value>, binary: &str, command: &str, force: bool) {
    let entry = json!({
        "hooks": [{ "type": "command", "command": command }]
    });

    let hooks = settings
        .entry("hooks")
        .or_insert_with(|| Value::Object(Map::new()));
    if !hooks.is_object() {
        tracing::warn!("Settings 'hooks' is not an object, replacing it");
        *hooks = Value::Object(Map::new());
    }
    let Some(hooks) = hooks.as_object_mut() else {
        return;
    };

    if !force {
        if let Some(existing) = hooks.get_mut(HOOK_EVENT).and_then(Value::as_array_mut) {
            existing.retain(|e| !is_our_entry(e, binary));
            existing.push(entry);
            return;
        }
    }
    hooks.insert(HOOK_EVENT.to_string(), Value::Array(vec![entry]));
}

/// Install the hook into `settings_path`, returning the command written
pub fn install(settings_path: &Path, sound: &str, force: bool) -> HookResult<String> {
    install_with(settings_path, &binary_path(), sound, force)
}

/// Install the hook for an explicit binary path
fn install_with(settings_path: &Path, binary: &str, sound: &str, force: bool) -> HookResult<String> {
    let setup_err = |reason: String| HookError::Setup {
        path: settings_path.to_path_buf(),
        reason,
    };

    if let Some(parent) = settings_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| setup_err(format!("Failed to create {}: {e}", parent.display())))?;
        }
    }

    let mut settings = if settings_path.exists() {
        let content = fs::read_to_string(settings_path)
            .map_err(|e| setup_err(format!("Failed to read existing settings: {e}")))?;
        if content.trim().is_empty() {
            Map::new()
        } else {
            match serde_json::from_str::<Value>(&content) {
                Ok(Value::Object(map)) => map,
                Ok(_) => return Err(setup_err("Existing settings are not a JSON object".to_string())),
                Err(e) => return Err(setup_err(format!("Failed to parse existing settings: {e}"))),
            }
        }
    } else {
        Map::new()
    };

    let command = hook_command(binary, sound);
    merge_hook(&mut settings, binary, &command, force);

    let formatted = serde_json::to_string_pretty(&Value::Object(settings))
        .map_err(|e| setup_err(format!("Failed to serialize settings: {e}")))?;
    fs::write(settings_path, formatted)
        .map_err(|e| setup_err(format!("Failed to write settings: {e}")))?;

    tracing::info!(path = %settings_path.display(), command = %command, "Installed notification hook");
    Ok(command)
}

/// Check that a sound can be played on this machine
///
/// Built-in system sounds are always accepted. Other names must exist in
/// the system sounds directory; custom paths must name an existing file.
pub fn validate_sound(sound: &SoundSpec) -> Result<(), String> {
    if sound.is_builtin() {
        return Ok(());
    }
    let resolved = sound.resolve();
    match sound {
        SoundSpec::Custom(_) if Path::new(&resolved).is_file() => Ok(()),
        SoundSpec::Custom(_) => Err(format!("Sound file {resolved} does not exist")),
        SoundSpec::System(_) if Path::new(&resolved).exists() => Ok(()),
        SoundSpec::System(_) => Err(format!("System sound {resolved} does not exist")),
    }
}

/// Validator for the custom path prompt
fn validate_custom_path(input: &str) -> Result<(), String> {
    if !sound::is_path(input) {
        return Err("Enter a path, e.g. ./sounds/ding.wav".to_string());
    }
    validate_sound(&SoundSpec::parse(input))
}

/// Pick a system sound or enter a custom file path
fn prompt_sound() -> HookResult<String> {
    let theme = ColorfulTheme::default();

    let mut choices = sound::available_system_sounds();
    let default = choices.iter().position(|s| s == DEFAULT_SOUND).unwrap_or(0);
    choices.push(CUSTOM_CHOICE.to_string());

    let selected = FuzzySelect::with_theme(&theme)
        .with_prompt("Select a notification sound")
        .items(&choices)
        .default(default)
        .interact()?;

    if choices[selected] != CUSTOM_CHOICE {
        return Ok(choices[selected].clone());
    }

    let path = Input::<String>::with_theme(&theme)
        .with_prompt("Path to your sound file (.wav, .aiff, .mp3, .m4a)")
        .validate_with(|input: &String| validate_custom_path(input))
        .interact_text()?;
    Ok(path)
}

/// Run the setup command
///
/// `sound` of `None` prompts on a terminal and uses the default otherwise.
pub fn run(sound: Option<&str>, settings: Option<PathBuf>, force: bool) -> HookResult<()> {
    let settings_path = match settings {
        Some(path) => path,
        None => default_settings_path()?,
    };

    let sound = match sound {
        Some(s) => s.to_string(),
        None if io::stdin().is_terminal() => prompt_sound()?,
        None => DEFAULT_SOUND.to_string(),
    };

    let spec = SoundSpec::parse(&sound);
    if let Err(reason) = validate_sound(&spec) {
        match spec {
            SoundSpec::Custom(_) => return Err(HookError::InvalidSound { sound, reason }),
            // System sounds are absent off macOS; the hook may still run elsewhere
            SoundSpec::System(_) => tracing::warn!(sound = %sound, "{reason}"),
        }
    }

    let command = install(&settings_path, &sound, force)?;

    println!("✓ Claude Code settings updated");
    println!("  Settings file: {}", settings_path.display());
    println!("  Hook command:  {command}");
    println!("  Sound:         {sound}");
    println!("\nVerify with: claude /hooks");
    Ok(())
}
