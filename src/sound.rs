//! Sound resolution
//!
//! A `--sound` value is either a macOS system sound name ("Glass") or a path
//! to an audio file ("./ding.wav"). Anything containing a path separator is a
//! path and is handed to the player verbatim; everything else is a system
//! sound and maps to `/System/Library/Sounds/<name>.aiff`. Nothing here
//! touches the filesystem except `available_system_sounds`.

use std::fmt;
use std::path::Path;

/// Directory holding the bundled macOS sounds
pub const SYSTEM_SOUNDS_DIR: &str = "/System/Library/Sounds";

/// Sound played when no `--sound` is given
pub const DEFAULT_SOUND: &str = "Glass";

/// Sounds shipped with every macOS install
pub const BUILTIN_SOUNDS: [&str; 14] = [
    "Basso",
    "Blow",
    "Bottle",
    "Frog",
    "Funk",
    "Glass",
    "Hero",
    "Morse",
    "Ping",
    "Pop",
    "Purr",
    "Sosumi",
    "Submarine",
    "Tink",
];

/// A classified `--sound` value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundSpec {
    /// Named system sound (no path separator)
    System(String),
    /// User-supplied audio file (contains a path separator)
    Custom(String),
}

impl Default for SoundSpec {
    fn default() -> Self {
        Self::System(DEFAULT_SOUND.to_string())
    }
}

impl SoundSpec {
    /// Classify a raw value. Total: every string is exactly one variant.
    pub fn parse(raw: &str) -> Self {
        if is_path(raw) {
            Self::Custom(raw.to_string())
        } else {
            Self::System(raw.to_string())
        }
    }

    /// The value as the user wrote it
    pub fn as_str(&self) -> &str {
        match self {
            Self::System(name) | Self::Custom(name) => name,
        }
    }

    /// Argument for the playback command
    ///
    /// No existence check: a missing file is a playback-time failure.
    pub fn resolve(&self) -> String {
        match self {
            Self::Custom(path) => path.clone(),
            Self::System(name) => format!("{SYSTEM_SOUNDS_DIR}/{name}.aiff"),
        }
    }

    /// System sound name, if this is one
    pub fn system_name(&self) -> Option<&str> {
        match self {
            Self::System(name) => Some(name),
            Self::Custom(_) => None,
        }
    }

    /// True for one of the sounds in `BUILTIN_SOUNDS`
    pub fn is_builtin(&self) -> bool {
        self.system_name()
            .is_some_and(|name| BUILTIN_SOUNDS.contains(&name))
    }
}

impl fmt::Display for SoundSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SoundSpec {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

/// True when the value should be treated as a filesystem path
pub fn is_path(raw: &str) -> bool {
    raw.contains(std::path::is_separator)
}

/// List system sounds found in `SYSTEM_SOUNDS_DIR`
pub fn available_system_sounds() -> Vec<String> {
    available_sounds_in(Path::new(SYSTEM_SOUNDS_DIR))
}

/// List `*.aiff` stems in `dir`, sorted
///
/// Falls back to `BUILTIN_SOUNDS` when the directory is missing or holds no
/// `.aiff` files (e.g. on Linux).
pub fn available_sounds_in(dir: &Path) -> Vec<String> {
    let mut sounds: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .filter_map(|entry| {
                    let name = entry.file_name();
                    name.to_str()
                        .and_then(|n| n.strip_suffix(".aiff"))
                        .filter(|stem| !stem.is_empty())
                        .map(String::from)
                })
                .collect()
        })
        .unwrap_or_default();

    if sounds.is_empty() {
        tracing::debug!(dir = %dir.display(), "No system sounds found, using built-in list");
        return BUILTIN_SOUNDS.iter().map(|s| (*s).to_string()).collect();
    }

    sounds.sort();
    sounds
}
