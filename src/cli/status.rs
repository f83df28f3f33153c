use crate::errors::Result;
use crate::tree::render::branch_status_text;
use crate::vcs::git::GitRepo;
use crate::vcs::{RepoAccess, RepoStatus};
use colored::Colorize;
use std::path::Path;

/// Show the status of a single repository
pub fn run(path: &Path, json: bool) -> Result<()> {
    let repo = GitRepo::open(path)?;
    let status = repo.status()?;

    if json {
        let out = serde_json::to_string_pretty(&status)?;
        println!("{}", out);
    } else {
        print!("{}", format_status(repo.path(), &status));
    }

    Ok(())
}

/// Plain text report of a repository status
pub fn format_status(path: &Path, status: &RepoStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:<14} {}\n", "Path:".bold(), path.display()));
    out.push_str(&format!(
        "{:<14} {}\n",
        "Branch:".bold(),
        status.current_branch
    ));

    let mut changes = Vec::new();
    if status.has_uncommitted_changes {
        changes.push("uncommitted changes");
    }
    if status.has_untracked_files {
        changes.push("untracked files");
    }
    let working_tree = if changes.is_empty() {
        "clean".green().to_string()
    } else {
        changes.join(", ").yellow().to_string()
    };
    out.push_str(&format!("{:<14} {}\n", "Working tree:".bold(), working_tree));

    match &status.branches {
        None => out.push_str("No commits yet\n"),
        Some(branches) => {
            out.push_str(&format!("{}\n", "Branches:".bold()));
            for branch in branches {
                out.push_str(&format!(
                    "  {:<20} {}\n",
                    branch.name,
                    branch_status_text(branch)
                ));
            }
        }
    }

    out
}
