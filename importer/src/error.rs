//! Error types for the importer.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for importer operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Errors that can occur while importing an image.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Destination directory could not be created.
    #[error("failed to prepare destination directory {dir}: {source}")]
    Destination {
        dir: PathBuf,
        source: std::io::Error,
    },

    /// The copy itself failed (missing source, permissions, disk space).
    #[error("failed to copy {src} to {dest}: {source}")]
    Copy {
        src: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },

    /// Source path has no usable filename.
    #[error("source path has no file name: {0}")]
    InvalidSource(PathBuf),

    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config file could not be parsed.
    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Watcher error.
    #[error("watcher error: {0}")]
    Watcher(#[from] antigravity_watcher::WatcherError),
}
