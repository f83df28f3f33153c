/// Repository access layer - the raw facts every repository backend must expose
use crate::errors::Result;
use crate::vcs::status::{BranchStatus, CurrentBranch, RepoStatus};
use crate::vcs::{Head, Upstream};
use std::path::Path;

/// Trait that all repository backends must implement
///
/// The required methods each answer one question about the repository's
/// on-disk state. The provided methods build the status model on top of them
/// and are what the tree renderer consumes.
pub trait RepoAccess {
    /// Filesystem path the repository was opened from
    fn path(&self) -> &Path;

    /// Whether the working tree has files that are neither tracked nor ignored
    fn has_untracked_files(&self) -> Result<bool>;

    /// Whether the index or the working tree differs from HEAD
    ///
    /// Untracked files are not considered.
    fn has_uncommitted_changes(&self) -> Result<bool>;

    /// Resolve HEAD
    fn head(&self) -> Result<Head>;

    /// List local branch names in the backend's native order
    fn local_branches(&self) -> Result<Vec<String>>;

    /// Upstream of a local branch, or `None` if no upstream is configured
    fn upstream(&self, branch: &str) -> Result<Option<Upstream>>;

    /// Compute the full status of the repository
    fn status(&self) -> Result<RepoStatus> {
        RepoStatus::compute(self)
    }

    /// Current branch name or one of the `unknown`/`detached` sentinels
    fn current_branch(&self) -> Result<CurrentBranch> {
        Ok(self.head()?.into())
    }

    /// Local branch names, as listed by the backend
    fn branches(&self) -> Result<Vec<String>> {
        self.local_branches()
    }

    /// Upstream tracking status of a single local branch
    fn branch_status(&self, branch: &str) -> Result<BranchStatus> {
        Ok(BranchStatus::new(branch, self.upstream(branch)?))
    }
}
