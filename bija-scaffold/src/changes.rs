//! The ordered log of what a generate or destroy run did to the project tree.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// What happened to a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A file or directory was created
    Create,
    /// An index file was patched
    Update,
    /// The file was already there and was left untouched
    Exists,
    /// A file or directory was removed
    Remove,
    /// An index file to patch was not found
    Missing,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Exists => "exists",
            Action::Remove => "remove",
            Action::Missing => "missing",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the change log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub action: Action,
    pub path: PathBuf,
}

impl Change {
    pub fn new(action: Action, path: impl Into<PathBuf>) -> Self {
        Self {
            action,
            path: path.into(),
        }
    }

    /// Path for display, without the leading `./`.
    pub fn display_path(&self) -> String {
        let path: &Path = self.path.strip_prefix(".").unwrap_or(&self.path);
        path.display().to_string()
    }
}
