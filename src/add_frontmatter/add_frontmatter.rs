use super::{has_frontmatter, Frontmatter};
use crate::action::{Action, Summary};
use crate::error::{Error, Result};
use crate::utils::discover_files;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];
pub const DEFAULT_FALLBACK_DESCRIPTION: &str = "Documentation for SVYP platform";

#[derive(Debug, Clone)]
pub struct FrontmatterOptions {
    pub root: PathBuf,
    pub fallback_description: String,
}

impl FrontmatterOptions {
    pub fn new(root: PathBuf) -> Self {
        FrontmatterOptions {
            root,
            fallback_description: DEFAULT_FALLBACK_DESCRIPTION.to_owned(),
        }
    }
}

pub fn build_action(path: &Path, content: &str, fallback_description: &str) -> Action {
    if has_frontmatter(content) {
        return Action::Skip(path.to_owned(), "already has frontmatter");
    }
    let frontmatter = Frontmatter::derive(path, content, fallback_description);
    Action::Write(path.to_owned(), frontmatter.prepend_to(content))
}

pub fn add_frontmatter(options: &FrontmatterOptions, dry_run: bool) -> Result<Summary> {
    info!(root = %options.root.display(), dry_run, "adding frontmatter");

    let mut summary = Summary::default();
    for path in discover_files(&options.root, "md", EXCLUDED_DIRS)? {
        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let action = build_action(&path, &content, &options.fallback_description);
        match action {
            Action::Skip(..) => summary.skipped += 1,
            _ => summary.processed += 1,
        }
        action.perform(dry_run)?;
    }

    println!(
        "Added frontmatter to {} files, {} already had it",
        summary.processed, summary.skipped
    );
    Ok(summary)
}
