//! Open project roots that imports target.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The set of open project roots.
///
/// Imports always land under the first root. An empty workspace means no
/// project is open; the importer treats that as a deliberate no-op, not
/// an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workspace {
    roots: Vec<PathBuf>,
}

impl Workspace {
    /// Create a workspace from a list of project roots.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// The root imports are copied into.
    pub fn first_root(&self) -> Option<&Path> {
        self.roots.first().map(PathBuf::as_path)
    }

    /// Check whether any project is open.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_root() {
        let workspace = Workspace::new(vec!["/a".into(), "/b".into()]);
        assert_eq!(workspace.first_root(), Some(Path::new("/a")));
    }

    #[test]
    fn test_empty_workspace() {
        let workspace = Workspace::default();
        assert!(workspace.is_empty());
        assert_eq!(workspace.first_root(), None);
    }
}
