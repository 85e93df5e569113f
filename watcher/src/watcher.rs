//! Brain watcher implementation.

use std::fs;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::WatchConfig;
use crate::error::{Result, WatcherError};
use crate::event::{FileEventKind, ImageEvent};

/// Watches the brain directory and forwards image creation events.
pub struct BrainWatcher {
    /// Watch configuration.
    config: WatchConfig,

    /// Internal notify watcher, present while running.
    watcher: Option<RecommendedWatcher>,

    /// Event sender, cloned into the notify callback.
    event_tx: mpsc::Sender<ImageEvent>,
}

impl BrainWatcher {
    /// Create a new brain watcher and the receiver its events arrive on.
    pub fn new(config: WatchConfig) -> (Self, mpsc::Receiver<ImageEvent>) {
        let (event_tx, event_rx) = mpsc::channel(1000);

        let watcher = Self {
            config,
            watcher: None,
            event_tx,
        };

        (watcher, event_rx)
    }

    /// Start watching the configured root.
    ///
    /// The root is created if it does not exist yet (the producing
    /// application may not have run on this machine). Starting a running
    /// watcher is a no-op.
    pub fn start(&mut self) -> Result<()> {
        if self.watcher.is_some() {
            return Ok(());
        }

        let root = self.config.root.clone();
        if !root.exists() {
            debug!("Creating missing watch root: {}", root.display());
            fs::create_dir_all(&root)?;
        }
        if !root.is_dir() {
            return Err(WatcherError::RootNotADirectory(root.display().to_string()));
        }

        let event_tx = self.event_tx.clone();
        let config = self.config.clone();

        let mut watcher = notify::recommended_watcher(
            move |res: std::result::Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    let kind = FileEventKind::from(event.kind);
                    if kind != FileEventKind::Created {
                        return;
                    }

                    for path in event.paths {
                        if !config.matches(&path) {
                            continue;
                        }

                        let image_event = ImageEvent::new(kind, path);
                        if let Err(e) = event_tx.blocking_send(image_event) {
                            error!("Failed to forward image event: {e}");
                        }
                    }
                }
                Err(e) => {
                    error!("Watch error: {e}");
                }
            },
        )?;

        watcher.watch(&root, RecursiveMode::Recursive)?;
        self.watcher = Some(watcher);

        info!("Started watching: {}", root.display());
        Ok(())
    }

    /// Stop watching. The event channel stays open until the watcher
    /// value itself is dropped.
    pub fn stop(&mut self) {
        if let Some(mut watcher) = self.watcher.take() {
            let _ = watcher.unwatch(&self.config.root);
            info!("Stopped watching: {}", self.config.root.display());
        }
    }

    /// Check whether the watcher is running.
    pub fn is_running(&self) -> bool {
        self.watcher.is_some()
    }

    /// Get the watch configuration.
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_watcher_creation() {
        let (watcher, _events) = BrainWatcher::new(WatchConfig::new("/brain"));
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn test_start_and_stop() {
        let temp_dir = TempDir::new().unwrap();
        let (mut watcher, _events) = BrainWatcher::new(WatchConfig::new(temp_dir.path()));

        watcher.start().unwrap();
        assert!(watcher.is_running());

        // Starting again is a no-op.
        watcher.start().unwrap();

        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[tokio::test]
    async fn test_start_creates_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("brain");
        let (mut watcher, _events) = BrainWatcher::new(WatchConfig::new(&root));

        watcher.start().unwrap();
        assert!(root.is_dir());
    }
}
