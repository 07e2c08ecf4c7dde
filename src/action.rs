use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::path::PathBuf;

pub enum Action {
    Skip(PathBuf, &'static str),
    Write(PathBuf, String),
    Copy(PathBuf, PathBuf),
    Delete(PathBuf),
}

impl Action {
    pub fn run(&self) -> Result<()> {
        match self {
            Action::Skip(..) => Ok(()),
            Action::Write(path, content) => fs::write(path, content).map_err(|e| Error::io(path, e)),
            Action::Copy(from, to) => {
                let content = fs::read(from).map_err(|e| Error::io(from, e))?;
                fs::write(to, content).map_err(|e| Error::io(to, e))
            }
            Action::Delete(path) => fs::remove_file(path).map_err(|e| Error::io(path, e)),
        }
    }

    /// Logs the action and runs it, unless this is a dry run.
    pub fn perform(&self, dry_run: bool) -> Result<()> {
        println!("{}", self);
        if !dry_run {
            self.run()?;
        }
        Ok(())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Skip(path, reason) => write!(f, "Skip \"{}\" ({})", path.display(), reason),
            Action::Write(path, _content) => write!(f, "Update \"{}\"", path.display()),
            Action::Copy(from, to) => {
                write!(f, "Copy \"{}\" to \"{}\"", from.display(), to.display())
            }
            Action::Delete(path) => write!(f, "Delete \"{}\"", path.display()),
        }
    }
}

/// What a run did, printed as its last line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub processed: usize,
    pub skipped: usize,
}
