//! Configuration for the image mover.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use antigravity_watcher::WatchConfig;

use crate::error::{ImportError, Result};

/// Default name of the folder created under the project root.
pub const DEFAULT_DESTINATION_FOLDER: &str = ".antigravity-images";

/// Default settle delay before copying, in milliseconds.
///
/// The creation notification can fire before the producing process has
/// flushed the file; this is a blind heuristic wait, not a stability
/// check.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Configuration for the mover.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MoverConfig {
    /// Whether importing is enabled. When false every event is dropped
    /// silently.
    pub enabled: bool,

    /// Name of the folder created under the first project root.
    pub destination_folder: String,

    /// Open project roots; the first one is the import target. Empty
    /// means no project is open and events are silently ignored.
    pub project_roots: Vec<PathBuf>,

    /// Delay between the creation event and the copy, in milliseconds.
    pub settle_delay_ms: u64,

    /// What to do when the destination filename already exists.
    pub on_collision: CollisionPolicy,

    /// Brain directory watch configuration.
    pub watch: WatchConfig,
}

impl MoverConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            enabled: true,
            destination_folder: DEFAULT_DESTINATION_FOLDER.to_string(),
            project_roots: Vec::new(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            on_collision: CollisionPolicy::default(),
            watch: WatchConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ImportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ImportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Add a project root.
    pub fn with_project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_roots.push(root.into());
        self
    }

    /// Set the destination folder name.
    pub fn with_destination_folder(mut self, name: impl Into<String>) -> Self {
        self.destination_folder = name.into();
        self
    }

    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the collision policy.
    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.on_collision = policy;
        self
    }

    /// Disable importing.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The settle delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// What to do when the destination filename already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Replace the existing file. Matches the original behavior: two
    /// sources sharing a basename race to whichever copy finishes last.
    #[default]
    Overwrite,

    /// Append `-1`, `-2`, … before the extension until the name is free.
    Uniquify,

    /// Leave the existing file untouched and drop the event.
    Skip,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = MoverConfig::new();

        assert!(config.enabled);
        assert_eq!(config.destination_folder, ".antigravity-images");
        assert!(config.project_roots.is_empty());
        assert_eq!(config.settle_delay(), Duration::from_millis(500));
        assert_eq!(config.on_collision, CollisionPolicy::Overwrite);
    }

    #[test]
    fn test_builder() {
        let config = MoverConfig::new()
            .with_project_root("/proj")
            .with_destination_folder("shots")
            .with_collision_policy(CollisionPolicy::Skip)
            .disabled();

        assert!(!config.enabled);
        assert_eq!(config.project_roots, vec![PathBuf::from("/proj")]);
        assert_eq!(config.destination_folder, "shots");
        assert_eq!(config.on_collision, CollisionPolicy::Skip);
    }

    #[test]
    fn test_parse_toml() {
        let config: MoverConfig = toml::from_str(
            r#"
            enabled = false
            destination_folder = "imports"
            project_roots = ["/proj"]
            settle_delay_ms = 50
            on_collision = "uniquify"

            [watch]
            root = "/tmp/brain"
            "#,
        )
        .unwrap();

        assert!(!config.enabled);
        assert_eq!(config.destination_folder, "imports");
        assert_eq!(config.settle_delay_ms, 50);
        assert_eq!(config.on_collision, CollisionPolicy::Uniquify);
        assert_eq!(config.watch.root, PathBuf::from("/tmp/brain"));
        // Unspecified fields fall back to defaults.
        assert_eq!(config.watch.extensions.len(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "destination_folder = \"pics\"\n").unwrap();

        let config = MoverConfig::load(&path).unwrap();
        assert_eq!(config.destination_folder, "pics");
        assert!(config.enabled);
    }

    #[test]
    fn test_load_missing_file() {
        let result = MoverConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ImportError::ConfigRead { .. })));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "on_collision = \"explode\"\n").unwrap();

        let result = MoverConfig::load(&path);
        assert!(matches!(result, Err(ImportError::ConfigParse { .. })));
    }
}
