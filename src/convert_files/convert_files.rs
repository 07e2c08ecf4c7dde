use super::{rewrite_manifest, target_path, RenameEntry};
use crate::action::{Action, Summary};
use crate::error::{Error, Result};
use crate::utils::discover_files;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const EXCLUDED_DIRS: &[&str] = &[".git", "node_modules", "scripts"];

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub root: PathBuf,
    pub from: String,
    pub to: String,
    /// Relative to `root`.
    pub manifest: PathBuf,
    pub readme: String,
}

impl ConvertOptions {
    pub fn new(root: PathBuf) -> Self {
        ConvertOptions {
            root,
            from: "md".to_owned(),
            to: "mdx".to_owned(),
            manifest: PathBuf::from("docs.json"),
            readme: "README.md".to_owned(),
        }
    }
}

pub fn convert_files(options: &ConvertOptions, dry_run: bool) -> Result<Summary> {
    info!(root = %options.root.display(), from = %options.from, to = %options.to, dry_run, "converting files");

    let mut summary = Summary::default();
    let mut renames = Vec::new();

    for path in discover_files(&options.root, &options.from, EXCLUDED_DIRS)? {
        if path.file_name().map_or(false, |name| name == options.readme.as_str()) {
            Action::Skip(path, "README file").perform(dry_run)?;
            summary.skipped += 1;
            continue;
        }

        let target = target_path(&path, &options.to);
        if target == path {
            Action::Skip(path, "already converted").perform(dry_run)?;
            summary.skipped += 1;
            continue;
        }

        Action::Copy(path.clone(), target.clone()).perform(dry_run)?;
        renames.push(RenameEntry::new(&options.root, &path, &target));
        Action::Delete(path).perform(dry_run)?;
        summary.processed += 1;
    }

    update_manifest(options, &renames, dry_run)?;

    println!(
        "Converted {} files from {} to {} format",
        summary.processed, options.from, options.to
    );
    Ok(summary)
}

fn update_manifest(options: &ConvertOptions, renames: &[RenameEntry], dry_run: bool) -> Result<()> {
    let path = options.root.join(&options.manifest);
    if !path.is_file() {
        info!(manifest = %path.display(), "no manifest found, skipping update");
        return Ok(());
    }

    let manifest = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let rewritten = rewrite_manifest(&manifest, renames)?;
    Action::Write(path, rewritten).perform(dry_run)
}
