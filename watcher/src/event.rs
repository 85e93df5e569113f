//! Image events from brain directory watching.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file system event for an image under the watched brain directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageEvent {
    /// The kind of event.
    pub kind: FileEventKind,

    /// Path to the affected image.
    pub path: PathBuf,

    /// When the event occurred.
    pub timestamp: DateTime<Utc>,
}

impl ImageEvent {
    /// Create a new image event.
    pub fn new(kind: FileEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a creation event, the only kind the importer acts on.
    pub fn created(path: impl Into<PathBuf>) -> Self {
        Self::new(FileEventKind::Created, path)
    }

    /// Base filename of the source image.
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Kind of file event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileEventKind {
    /// File was created.
    Created,

    /// File was modified.
    Modified,

    /// File was removed.
    Removed,

    /// Any other event the platform watcher reports.
    Other,
}

impl From<notify::EventKind> for FileEventKind {
    fn from(kind: notify::EventKind) -> Self {
        match kind {
            notify::EventKind::Create(_) => Self::Created,
            notify::EventKind::Modify(_) => Self::Modified,
            notify::EventKind::Remove(_) => Self::Removed,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    #[test]
    fn test_image_event_creation() {
        let event = ImageEvent::created("/brain/abc/shot_1.png");
        assert_eq!(event.kind, FileEventKind::Created);
        assert_eq!(event.path, Path::new("/brain/abc/shot_1.png"));
    }

    #[test]
    fn test_file_name() {
        let event = ImageEvent::created("/brain/abc/shot_1.png");
        assert_eq!(event.file_name(), Some("shot_1.png"));

        let rootless = ImageEvent::created("/");
        assert_eq!(rootless.file_name(), None);
    }

    #[test]
    fn test_event_kind_conversion() {
        let created = notify::EventKind::Create(notify::event::CreateKind::File);
        assert_eq!(FileEventKind::from(created), FileEventKind::Created);

        let removed = notify::EventKind::Remove(notify::event::RemoveKind::File);
        assert_eq!(FileEventKind::from(removed), FileEventKind::Removed);

        let accessed = notify::EventKind::Access(notify::event::AccessKind::Any);
        assert_eq!(FileEventKind::from(accessed), FileEventKind::Other);
    }
}
