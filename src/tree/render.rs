//! Rendering of the repository tree
//!
//! Each repository node shows its current branch inline and every other local
//! branch as an annotation line below it. Status is queried live from the
//! repository while rendering; errors are embedded in the output at the
//! failing repository or branch instead of aborting the render.

use crate::errors::GitreeError;
use crate::tree::print::TextTree;
use crate::tree::PathTree;
use crate::vcs::{BranchStatus, CurrentBranch, RepoAccess};
use colored::{Color, Colorize};

/// Renders a list of repositories as a directory tree annotated with status
#[derive(Debug, Clone, Copy)]
pub struct TreePrinter {
    color: bool,
}

impl TreePrinter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render `repos` as a tree rooted at `root`
    pub fn print<R: RepoAccess>(&self, root: &str, repos: &[R]) -> String {
        if repos.is_empty() {
            return format!("There are no git repos under {}", root);
        }

        let tree = PathTree::build(root, repos);
        self.print_tree(&tree)
    }

    /// Render an already built tree
    pub fn print_tree<R: RepoAccess>(&self, tree: &PathTree<'_, R>) -> String {
        let mut out = TextTree::new(tree.value.clone());
        self.render_node(tree, &mut out);
        out.to_string()
    }

    fn render_node<R: RepoAccess>(&self, node: &PathTree<'_, R>, out: &mut TextTree) {
        if let Some(repo) = node.repo {
            self.render_repo(&node.value, repo, out);
        }

        for child in &node.children {
            let branch = out.add_branch(child.value.clone());
            self.render_node(child, branch);
        }
    }

    fn render_repo<R: RepoAccess>(&self, segment: &str, repo: &R, out: &mut TextTree) {
        out.set_value(format!("{} {}", segment, self.current_branch_line(repo)));

        let branches = match repo.branches() {
            Ok(branches) => branches,
            Err(e) => {
                out.add_node(self.error(&e));
                return;
            }
        };

        let current = match repo.current_branch() {
            Ok(current) => current,
            Err(e) => {
                out.add_node(self.error(&e));
                return;
            }
        };

        for branch in branches {
            // Already shown inline
            if current.name() == Some(branch.as_str()) {
                continue;
            }

            match repo.branch_status(&branch) {
                Ok(status) => out.add_node(format!(
                    "{} {}",
                    self.paint(&branch, Color::Blue),
                    self.branch_status(&status)
                )),
                Err(e) => out.add_node(self.error(&e)),
            }
        }
    }

    /// Current branch, its upstream status and working tree markers
    fn current_branch_line<R: RepoAccess>(&self, repo: &R) -> String {
        let current = match repo.current_branch() {
            Ok(current) => current,
            Err(e) => return self.error(&e),
        };

        let mut parts = Vec::new();
        match &current {
            CurrentBranch::Named(name) => {
                parts.push(self.paint(name, Color::Blue));
                match repo.branch_status(name) {
                    Ok(status) => parts.push(self.branch_status(&status)),
                    Err(e) => parts.push(self.error(&e)),
                }
            }
            sentinel => parts.push(self.paint(sentinel.as_str(), Color::Magenta)),
        }

        match repo.has_uncommitted_changes() {
            Ok(true) => parts.push(self.paint("[ uncommitted ]", Color::Red)),
            Ok(false) => {}
            Err(e) => parts.push(self.error(&e)),
        }
        match repo.has_untracked_files() {
            Ok(true) => parts.push(self.paint("[ untracked ]", Color::Red)),
            Ok(false) => {}
            Err(e) => parts.push(self.error(&e)),
        }

        parts.join(" ")
    }

    fn branch_status(&self, status: &BranchStatus) -> String {
        let text = branch_status_text(status);
        let color = if !status.has_upstream() {
            Color::BrightBlack
        } else if status.is_up_to_date() {
            Color::Green
        } else {
            Color::Yellow
        };
        self.paint(&text, color)
    }

    fn error(&self, err: &GitreeError) -> String {
        log::debug!("Rendering error annotation: {}", err);
        self.paint(&format!("error: {}", err), Color::Red)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for TreePrinter {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Human readable upstream status of a branch, without color
pub fn branch_status_text(status: &BranchStatus) -> String {
    if !status.has_upstream() {
        return "no upstream".to_string();
    }
    if status.is_up_to_date() {
        return format!("up to date with {}", status.upstream);
    }

    let mut counts = Vec::new();
    if status.ahead > 0 {
        counts.push(format!("{} ahead", status.ahead));
    }
    if status.behind > 0 {
        counts.push(format!("{} behind", status.behind));
    }
    format!("{} {}", counts.join(", "), status.upstream)
}
