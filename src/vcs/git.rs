use crate::errors::{GitreeError, Result};
use crate::vcs::traits::RepoAccess;
use crate::vcs::{Head, Upstream};
use git2::{BranchType, ErrorCode, Repository, Status, StatusOptions};
use std::path::{Path, PathBuf};

/// Changes between HEAD, the index and the working tree (untracked excluded)
fn uncommitted_flags() -> Status {
    Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE
        | Status::WT_MODIFIED
        | Status::WT_DELETED
        | Status::WT_TYPECHANGE
        | Status::WT_RENAMED
        | Status::CONFLICTED
}

/// Shorten a full reference name, e.g. `refs/remotes/origin/main` -> `origin/main`
fn short_ref_name(refname: &str) -> &str {
    refname
        .strip_prefix("refs/remotes/")
        .or_else(|| refname.strip_prefix("refs/heads/"))
        .unwrap_or(refname)
}

/// A git repository on disk, accessed through libgit2
pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

impl GitRepo {
    /// Open the repository whose working tree is exactly `path`
    ///
    /// Unlike discovery this does not walk up to parent directories, so a
    /// plain subdirectory of a repository is rejected.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo =
            Repository::open(path).map_err(|_| GitreeError::NotARepository(path.to_path_buf()))?;
        Ok(Self {
            repo,
            path: path.to_path_buf(),
        })
    }

    /// Run a status query and report whether any entry matches `flags`
    fn any_status(&self, opts: &mut StatusOptions, flags: Status) -> Result<bool> {
        let statuses = self.repo.statuses(Some(opts))?;
        Ok(statuses.iter().any(|entry| entry.status().intersects(flags)))
    }
}

impl RepoAccess for GitRepo {
    fn path(&self) -> &Path {
        &self.path
    }

    fn has_untracked_files(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .include_ignored(false)
            .include_unmodified(false);
        self.any_status(&mut opts, Status::WT_NEW)
    }

    fn has_uncommitted_changes(&self) -> Result<bool> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(false)
            .include_ignored(false)
            .include_unmodified(false);
        self.any_status(&mut opts, uncommitted_flags())
    }

    fn head(&self) -> Result<Head> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if e.code() == ErrorCode::UnbornBranch => return Ok(Head::Unborn),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(Head::Detached);
        }

        let name = head
            .shorthand()
            .ok_or_else(|| git2::Error::from_str("HEAD branch name is not valid UTF-8"))?;
        Ok(Head::Branch(name.to_string()))
    }

    fn local_branches(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for branch in self.repo.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            let name = branch
                .name()?
                .ok_or_else(|| git2::Error::from_str("branch name is not valid UTF-8"))?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    fn upstream(&self, branch: &str) -> Result<Option<Upstream>> {
        let refname = format!("refs/heads/{}", branch);

        // NotFound here means no upstream is configured for the branch
        let upstream_ref = match self.repo.branch_upstream_name(&refname) {
            Ok(buf) => buf
                .as_str()
                .ok_or_else(|| git2::Error::from_str("upstream name is not valid UTF-8"))?
                .to_string(),
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let local = self.repo.refname_to_id(&refname)?;
        let remote = self.repo.refname_to_id(&upstream_ref)?;
        let (ahead, behind) = self.repo.graph_ahead_behind(local, remote)?;

        Ok(Some(Upstream {
            name: short_ref_name(&upstream_ref).to_string(),
            ahead,
            behind,
        }))
    }
}
