//! Configuration for brain directory watching.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the watched brain directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Root directory to watch recursively.
    pub root: PathBuf,

    /// Image file extensions to forward (matched case-insensitively,
    /// without the leading dot).
    pub extensions: Vec<String>,
}

impl WatchConfig {
    /// Create a config watching the given root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: Self::default_extensions(),
        }
    }

    /// Add an extension to the allowlist.
    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.extensions.push(ext.into());
        self
    }

    /// The per-user Antigravity brain directory,
    /// `<home>/.gemini/antigravity/brain`.
    pub fn default_root() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(".gemini")
            .join("antigravity")
            .join("brain")
    }

    /// Default image extensions produced by Antigravity.
    fn default_extensions() -> Vec<String> {
        vec!["png".to_string(), "jpg".to_string(), "jpeg".to_string()]
    }

    /// Check whether a path is an image this watcher should forward.
    pub fn matches(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };

        let ext = ext.to_lowercase();
        self.extensions.iter().any(|e| e.to_lowercase() == ext)
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self::new(Self::default_root())
    }
}
