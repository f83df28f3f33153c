//! In-memory repository backend for unit tests
use crate::errors::{GitreeError, Result};
use crate::vcs::traits::RepoAccess;
use crate::vcs::{Head, Upstream};
use std::path::{Path, PathBuf};

pub struct FakeRepo {
    path: PathBuf,
    untracked: bool,
    uncommitted: bool,
    head: Head,
    branches: Vec<(String, Option<Upstream>)>,
    failing_upstream: Option<String>,
    failing_head: bool,
    failing_branches: bool,
}

impl FakeRepo {
    pub fn new(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            untracked: false,
            uncommitted: false,
            head: Head::Unborn,
            branches: Vec::new(),
            failing_upstream: None,
            failing_head: false,
            failing_branches: false,
        }
    }

    pub fn unborn(mut self) -> Self {
        self.head = Head::Unborn;
        self
    }

    pub fn detached(mut self) -> Self {
        self.head = Head::Detached;
        self
    }

    pub fn on_branch(mut self, name: &str) -> Self {
        self.head = Head::Branch(name.to_string());
        self
    }

    pub fn untracked(mut self) -> Self {
        self.untracked = true;
        self
    }

    pub fn uncommitted(mut self) -> Self {
        self.uncommitted = true;
        self
    }

    pub fn branch(mut self, name: &str, upstream: Option<(&str, usize, usize)>) -> Self {
        let upstream = upstream.map(|(name, ahead, behind)| Upstream {
            name: name.to_string(),
            ahead,
            behind,
        });
        self.branches.push((name.to_string(), upstream));
        self
    }

    pub fn failing_upstream(mut self, branch: &str) -> Self {
        self.failing_upstream = Some(branch.to_string());
        self
    }

    pub fn failing_head(mut self) -> Self {
        self.failing_head = true;
        self
    }

    pub fn failing_branches(mut self) -> Self {
        self.failing_branches = true;
        self
    }
}

impl RepoAccess for FakeRepo {
    fn path(&self) -> &Path {
        &self.path
    }

    fn has_untracked_files(&self) -> Result<bool> {
        Ok(self.untracked)
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        Ok(self.uncommitted)
    }

    fn head(&self) -> Result<Head> {
        if self.failing_head {
            return Err(GitreeError::Git(git2::Error::from_str("reference 'HEAD' is corrupt")));
        }
        Ok(self.head.clone())
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        if self.failing_branches {
            return Err(GitreeError::Git(git2::Error::from_str("failed to list branches")));
        }
        Ok(self.branches.iter().map(|(name, _)| name.clone()).collect())
    }

    fn upstream(&self, branch: &str) -> Result<Option<Upstream>> {
        if self.failing_upstream.as_deref() == Some(branch) {
            return Err(GitreeError::Git(git2::Error::from_str(&format!(
                "upstream of '{}' not found",
                branch
            ))));
        }
        Ok(self
            .branches
            .iter()
            .find(|(name, _)| name == branch)
            .and_then(|(_, upstream)| upstream.clone()))
    }
}
