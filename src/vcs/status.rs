//! Repository status model
//!
//! [`RepoStatus`] is a plain value computed from the raw facts a
//! [`RepoAccess`] backend exposes. It is recomputed on every call and never
//! cached.

use crate::errors::Result;
use crate::vcs::traits::RepoAccess;
use crate::vcs::{Head, Upstream};
use serde::{Serialize, Serializer};
use std::fmt;

/// Rendered name of the current branch of a repository without commits
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Rendered name of the current branch when HEAD is detached
pub const DETACHED_BRANCH: &str = "detached";

/// The checked-out branch of a repository
///
/// Kept as a tagged variant so that a real branch called `unknown` or
/// `detached` is never confused with the sentinels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentBranch {
    Named(String),
    Unknown,
    Detached,
}

impl CurrentBranch {
    pub fn as_str(&self) -> &str {
        match self {
            CurrentBranch::Named(name) => name,
            CurrentBranch::Unknown => UNKNOWN_BRANCH,
            CurrentBranch::Detached => DETACHED_BRANCH,
        }
    }

    /// Branch name, if HEAD points at a branch
    pub fn name(&self) -> Option<&str> {
        match self {
            CurrentBranch::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl From<Head> for CurrentBranch {
    fn from(head: Head) -> Self {
        match head {
            Head::Unborn => CurrentBranch::Unknown,
            Head::Detached => CurrentBranch::Detached,
            Head::Branch(name) => CurrentBranch::Named(name),
        }
    }
}

impl fmt::Display for CurrentBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CurrentBranch {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Upstream tracking status of one local branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchStatus {
    pub name: String,
    /// `<remote>/<branch>`, empty when no upstream is configured
    pub upstream: String,
    pub ahead: usize,
    pub behind: usize,
}

impl BranchStatus {
    pub fn new(name: &str, upstream: Option<Upstream>) -> Self {
        match upstream {
            Some(upstream) => Self {
                name: name.to_string(),
                upstream: upstream.name,
                ahead: upstream.ahead,
                behind: upstream.behind,
            },
            None => Self {
                name: name.to_string(),
                upstream: String::new(),
                ahead: 0,
                behind: 0,
            },
        }
    }

    pub fn has_upstream(&self) -> bool {
        !self.upstream.is_empty()
    }

    pub fn is_up_to_date(&self) -> bool {
        self.ahead == 0 && self.behind == 0
    }
}

/// Status summary of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoStatus {
    pub has_untracked_files: bool,
    pub has_uncommitted_changes: bool,
    pub current_branch: CurrentBranch,
    /// `None` for a repository without commits
    pub branches: Option<Vec<BranchStatus>>,
}

impl RepoStatus {
    /// Compute the status of a repository
    ///
    /// Any failing query fails the whole computation; no partial status is
    /// returned.
    pub fn compute<R: RepoAccess + ?Sized>(repo: &R) -> Result<Self> {
        log::debug!("Computing status of {}", repo.path().display());

        let has_untracked_files = repo.has_untracked_files()?;
        let has_uncommitted_changes = repo.has_uncommitted_changes()?;

        let current_branch = match repo.head()? {
            Head::Unborn => {
                return Ok(Self {
                    has_untracked_files,
                    has_uncommitted_changes,
                    current_branch: CurrentBranch::Unknown,
                    branches: None,
                });
            }
            head => CurrentBranch::from(head),
        };

        let branches = repo
            .local_branches()?
            .iter()
            .map(|name| repo.branch_status(name))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            has_untracked_files,
            has_uncommitted_changes,
            current_branch,
            branches: Some(branches),
        })
    }

    /// No untracked files and no uncommitted changes
    pub fn is_clean(&self) -> bool {
        !self.has_untracked_files && !self.has_uncommitted_changes
    }
}
