//! Error types for the brain watcher.

use thiserror::Error;

/// Result type alias for watcher operations.
pub type Result<T> = std::result::Result<T, WatcherError>;

/// Errors that can occur while watching the brain directory.
#[derive(Error, Debug)]
pub enum WatcherError {
    /// Watched root exists but is not a directory.
    #[error("watch root is not a directory: {0}")]
    RootNotADirectory(String),

    /// Notify error.
    #[error("notify error: {0}")]
    Notify(#[from] notify::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
