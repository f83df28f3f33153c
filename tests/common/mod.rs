/// Common test utilities for gitree integration tests
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking with its output on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .output()
        .expect("Failed to execute git");

    if !output.status.success() {
        panic!(
            "git {:?} failed in {}:\nstdout: {}\nstderr: {}",
            args,
            dir.display(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Set identity and disable signing so commits work on any machine
fn configure(dir: &Path) {
    git(dir, &["config", "user.name", "Test User"]);
    git(dir, &["config", "user.email", "test@example.com"]);
    git(dir, &["config", "commit.gpgsign", "false"]);
}

/// A test repository with temporary directory management
#[allow(dead_code)]
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub repo_path: PathBuf,
}

#[allow(dead_code)]
impl TestRepo {
    /// Create an initialized repository without commits, HEAD on `master`
    pub fn empty() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let repo_path = temp_dir.path().join("repo");
        init_at(&repo_path);

        TestRepo {
            temp_dir,
            repo_path,
        }
    }

    /// Create a repository with a single commit on `master`
    pub fn with_commit() -> Self {
        let repo = Self::empty();
        repo.create_and_commit("README.md", "# Test Repo\n", "Initial commit");
        repo
    }

    /// Clone this repository next to it; the clone's `master` tracks `origin/master`
    pub fn clone_to(&self, name: &str) -> PathBuf {
        let dest = self.temp_dir.path().join(name);
        git(
            self.temp_dir.path(),
            &[
                "clone",
                "-q",
                self.repo_path.to_str().unwrap(),
                dest.to_str().unwrap(),
            ],
        );
        configure(&dest);
        dest
    }

    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    pub fn git(&self, args: &[&str]) -> String {
        git(&self.repo_path, args)
    }

    pub fn write(&self, filename: &str, content: &str) {
        std::fs::write(self.repo_path.join(filename), content).expect("Failed to write file");
    }

    /// Create a file and commit it
    pub fn create_and_commit(&self, filename: &str, content: &str, message: &str) {
        commit_file(&self.repo_path, filename, content, message);
    }
}

/// `git init` at `path` with HEAD pointing at `master` regardless of user config
pub fn init_at(path: &Path) {
    std::fs::create_dir_all(path).expect("Failed to create repo directory");
    git(path, &["init", "-q"]);
    git(path, &["symbolic-ref", "HEAD", "refs/heads/master"]);
    configure(path);
}

/// Write a file in the repository at `dir` and commit it
pub fn commit_file(dir: &Path, filename: &str, content: &str, message: &str) {
    std::fs::write(dir.join(filename), content).expect("Failed to write file");
    git(dir, &["add", filename]);
    git(dir, &["commit", "-q", "-m", message]);
}

/// Result of running a command
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: Option<i32>,
}

/// Run the gitree binary with an isolated config
#[allow(dead_code)]
pub fn gitree(cwd: &Path, args: &[&str]) -> CommandResult {
    let output = Command::new(env!("CARGO_BIN_EXE_gitree"))
        .args(args)
        .current_dir(cwd)
        .env("GITREE_CONFIG", cwd.join("no-such-config.yml"))
        .env_remove("GITREE_ROOT")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute gitree command");

    CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
        exit_code: output.status.code(),
    }
}

#[allow(dead_code)]
impl CommandResult {
    /// Assert the command succeeded
    pub fn assert_success(&self) {
        if !self.success {
            panic!(
                "Command failed:\nstdout: {}\nstderr: {}\nexit code: {:?}",
                self.stdout, self.stderr, self.exit_code
            );
        }
    }

    /// Assert the command failed
    pub fn assert_failure(&self) {
        if self.success {
            panic!(
                "Command succeeded when it should have failed:\nstdout: {}\nstderr: {}",
                self.stdout, self.stderr
            );
        }
    }

    /// Assert stdout contains text
    pub fn assert_stdout_contains(&self, text: &str) {
        assert!(
            self.stdout.contains(text),
            "stdout does not contain '{}'\nstdout: {}",
            text,
            self.stdout
        );
    }

    /// Assert stderr contains text
    pub fn assert_stderr_contains(&self, text: &str) {
        assert!(
            self.stderr.contains(text),
            "stderr does not contain '{}'\nstderr: {}",
            text,
            self.stderr
        );
    }
}
