//! The watch-and-import handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::{debug, error, info};

use antigravity_watcher::ImageEvent;

use crate::config::{CollisionPolicy, MoverConfig};
use crate::error::{ImportError, Result};
use crate::notifier::Notifier;
use crate::workspace::Workspace;

/// Copies image creation events into the active project.
pub struct ImageImporter {
    /// Mover configuration.
    config: MoverConfig,

    /// Open project roots, derived from the configuration.
    workspace: Workspace,

    /// Success notification sink.
    notifier: Arc<dyn Notifier>,
}

/// What happened to a single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Importing is disabled; the event was dropped silently.
    Disabled,

    /// No project is open; the event was dropped silently.
    NoWorkspace,

    /// The image was copied to the destination.
    Copied { dest: PathBuf },

    /// The destination already existed and the policy is `skip`.
    SkippedExisting { dest: PathBuf },

    /// The copy failed; the error was logged and absorbed.
    Failed { error: String },
}

impl ImageImporter {
    /// Create an importer from a configuration and a notification sink.
    pub fn new(config: MoverConfig, notifier: Arc<dyn Notifier>) -> Self {
        let workspace = Workspace::new(config.project_roots.clone());

        Self {
            config,
            workspace,
            notifier,
        }
    }

    /// Handle one image creation event.
    ///
    /// Never returns an error: every failure is logged and absorbed here
    /// so the watcher subscription outlives any single bad event. The
    /// source file is never mutated or deleted.
    pub async fn import(&self, event: &ImageEvent) -> ImportOutcome {
        if !self.config.enabled {
            return ImportOutcome::Disabled;
        }

        let Some(root) = self.workspace.first_root() else {
            return ImportOutcome::NoWorkspace;
        };

        match self.copy_into(root, event).await {
            Ok(outcome) => {
                if let ImportOutcome::Copied { .. } = outcome {
                    let name = event.file_name().unwrap_or("image");
                    self.notifier.notify(&format!(
                        "Imported {name} into {}",
                        self.config.destination_folder
                    ));
                    info!("Imported {name} to {}", self.config.destination_folder);
                }
                outcome
            }
            Err(err) => {
                error!("Failed to import {}: {err}", event.path.display());
                ImportOutcome::Failed {
                    error: err.to_string(),
                }
            }
        }
    }

    async fn copy_into(&self, root: &Path, event: &ImageEvent) -> Result<ImportOutcome> {
        let name = event
            .file_name()
            .ok_or_else(|| ImportError::InvalidSource(event.path.clone()))?;

        let dest_dir = root.join(&self.config.destination_folder);
        fs::create_dir_all(&dest_dir)
            .await
            .map_err(|source| ImportError::Destination {
                dir: dest_dir.clone(),
                source,
            })?;

        let dest = match self.config.on_collision {
            CollisionPolicy::Overwrite => dest_dir.join(name),
            CollisionPolicy::Skip => {
                let dest = dest_dir.join(name);
                if dest.exists() {
                    debug!("Skipping {name}: destination already exists");
                    return Ok(ImportOutcome::SkippedExisting { dest });
                }
                dest
            }
            CollisionPolicy::Uniquify => unique_destination(&dest_dir, name),
        };

        // Blind wait for the producer to finish writing the source file.
        tokio::time::sleep(self.config.settle_delay()).await;

        fs::copy(&event.path, &dest)
            .await
            .map_err(|source| ImportError::Copy {
                src: event.path.clone(),
                dest: dest.clone(),
                source,
            })?;

        Ok(ImportOutcome::Copied { dest })
    }

    /// Get the mover configuration.
    pub fn config(&self) -> &MoverConfig {
        &self.config
    }

    /// Get the workspace imports target.
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}

/// First free destination path, appending `-1`, `-2`, … before the
/// extension.
fn unique_destination(dest_dir: &Path, name: &str) -> PathBuf {
    let direct = dest_dir.join(name);
    if !direct.exists() {
        return direct;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    let mut n = 1u64;
    loop {
        let candidate = match ext {
            Some(ext) => dest_dir.join(format!("{stem}-{n}.{ext}")),
            None => dest_dir.join(format!("{stem}-{n}")),
        };
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}
