//! Run-directory precondition.
//!
//! The generated site is meant to be committed and pushed to GitHub Pages, so
//! a run only proceeds from a repository root. The check looks for a `.git`
//! entry, either a directory (normal clone) or a file (worktree or submodule).
//! It happens before any directory is created, so a failed check writes
//! nothing.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreflightError {
    #[error("{} doesn't appear to be a Git repository", .0.display())]
    NotARepository(PathBuf),
}

/// Verify `root` looks like a version-controlled project root.
pub fn check(root: &Path) -> Result<(), PreflightError> {
    if root.join(".git").exists() {
        Ok(())
    } else {
        Err(PreflightError::NotARepository(root.to_path_buf()))
    }
}
