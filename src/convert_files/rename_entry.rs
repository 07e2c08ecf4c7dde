use crate::utils::logical_path;
use std::path::{Path, PathBuf};

/// One converted document, as the manifest sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub old: String,
    pub new: String,
}

impl RenameEntry {
    pub fn new(root: &Path, old_path: &Path, new_path: &Path) -> Self {
        RenameEntry {
            old: logical_path(root, old_path),
            new: logical_path(root, new_path),
        }
    }
}

pub fn target_path(path: &Path, extension: &str) -> PathBuf {
    path.with_extension(extension)
}
