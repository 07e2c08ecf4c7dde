use crate::error::Result;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds every `*.<extension>` file below `root`, in glob order.
///
/// A file is left out when one of its path components below `root` is named
/// like an entry of `excluded_dirs`.
pub fn discover_files(
    root: &Path,
    extension: &str,
    excluded_dirs: &[&str],
) -> Result<Vec<PathBuf>> {
    let root_pattern = Pattern::escape(&root.to_string_lossy());
    let pattern = format!(
        "{}/**/*.{}",
        root_pattern.trim_end_matches('/'),
        Pattern::escape(extension)
    );
    debug!(%pattern, "discovering files");

    let mut files = Vec::new();
    for entry in glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        if is_excluded(root, &path, excluded_dirs) {
            debug!(path = %path.display(), "excluded");
            continue;
        }
        files.push(path);
    }

    debug!(count = files.len(), "discovery finished");
    Ok(files)
}

fn is_excluded(root: &Path, path: &Path, excluded_dirs: &[&str]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .any(|c| excluded_dirs.iter().any(|dir| c.as_os_str() == *dir))
}

/// The path of `path` relative to `root`, without its extension and with `/`
/// as separator. This is how the manifest refers to documents.
pub fn logical_path(root: &Path, path: &Path) -> String {
    let relative = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_owned());
    relative
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
