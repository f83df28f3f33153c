//! Repository discovery
//!
//! Walks a root directory and opens every git repository found below it.
//! Entries are visited in file name order so the resulting tree is stable
//! between runs.

use crate::errors::{GitreeError, Result};
use crate::vcs::git::GitRepo;
use crate::vcs::RepoAccess;
use log::{debug, warn};
use std::path::Path;
use walkdir::WalkDir;

/// Options controlling how the root directory is walked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOptions {
    /// Maximum directory depth below the root, unlimited if `None`
    pub max_depth: Option<usize>,
    /// Keep walking inside a repository's working tree to find nested ones
    pub nested: bool,
    /// Descend into hidden directories
    pub include_hidden: bool,
}

/// Whether `path` is the working tree of a git repository
///
/// `.git` may be a directory or, for worktrees and submodules, a file.
pub fn is_repository(path: &Path) -> bool {
    path.join(".git").exists()
}

/// Find all git repositories under `root`
pub fn find_repos(root: &Path, opts: &DiscoveryOptions) -> Result<Vec<GitRepo>> {
    if !root.is_dir() {
        return Err(GitreeError::RootNotFound(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root).follow_links(false).sort_by_file_name();
    if let Some(depth) = opts.max_depth {
        walker = walker.max_depth(depth);
    }

    let mut repos = Vec::new();
    let mut entries = walker.into_iter();
    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself is unreadable
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if name == ".git" {
            entries.skip_current_dir();
            continue;
        }
        if entry.depth() > 0 && !opts.include_hidden && name.starts_with('.') {
            entries.skip_current_dir();
            continue;
        }

        if !is_repository(entry.path()) {
            continue;
        }

        match GitRepo::open(entry.path()) {
            Ok(repo) => {
                debug!("Found repository at {}", repo.path().display());
                repos.push(repo);
            }
            Err(e) => warn!("Skipping {}: {}", entry.path().display(), e),
        }

        if !opts.nested {
            entries.skip_current_dir();
        }
    }

    Ok(repos)
}
