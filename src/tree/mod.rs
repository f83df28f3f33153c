//! Path tree of repositories
//!
//! Repositories are grouped by their filesystem path relative to a root: one
//! node per path segment, with repositories sharing a prefix sharing the
//! nodes along it. The tree borrows the repositories and is rebuilt for every
//! render.

pub mod print;
pub mod render;

use crate::vcs::RepoAccess;
use std::path::{Component, Path};

pub use render::TreePrinter;

/// One path segment in the repository tree
#[derive(Debug)]
pub struct PathTree<'a, R> {
    pub value: String,
    /// Insertion order, i.e. the order repositories were added in
    pub children: Vec<PathTree<'a, R>>,
    /// Set on the node of a repository's final path segment
    pub repo: Option<&'a R>,
}

impl<'a, R: RepoAccess> PathTree<'a, R> {
    /// Create a tree with only a root node
    pub fn root(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            children: Vec::new(),
            repo: None,
        }
    }

    /// Build the tree of `repos` relative to `root`
    ///
    /// The root node is labeled with `root` as given. A repository path that
    /// doesn't start with `root` is inserted with all of its segments.
    pub fn build(root: &str, repos: &'a [R]) -> Self {
        let mut tree = Self::root(root);
        for repo in repos {
            let segments = relative_segments(Path::new(root), repo.path());
            tree.insert(&segments, repo);
        }
        tree
    }

    fn insert(&mut self, segments: &[String], repo: &'a R) {
        let Some((first, rest)) = segments.split_first() else {
            self.repo = Some(repo);
            return;
        };

        let idx = match self.children.iter().position(|c| &c.value == first) {
            Some(idx) => idx,
            None => {
                self.children.push(Self::root(first.clone()));
                self.children.len() - 1
            }
        };
        self.children[idx].insert(rest, repo);
    }

    /// Find an immediate child by segment value
    pub fn child(&self, value: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.value == value)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Split `path` into its segments below `root`
///
/// Only normal components are kept, so leading/trailing separators and `.`
/// never produce empty segments.
fn relative_segments(root: &Path, path: &Path) -> Vec<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
