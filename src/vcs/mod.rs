pub mod git;
pub mod status;
pub mod traits;

#[cfg(test)]
pub(crate) mod fake;

pub use status::{BranchStatus, CurrentBranch, RepoStatus};
pub use traits::RepoAccess;

/// State of HEAD as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// No commit has been made yet
    Unborn,
    /// HEAD points directly at a commit
    Detached,
    /// HEAD points at a local branch
    Branch(String),
}

/// Upstream tracking information for a local branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upstream {
    /// Short name, e.g. `origin/main`
    pub name: String,
    pub ahead: usize,
    pub behind: usize,
}
