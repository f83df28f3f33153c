use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitreeError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    #[error("Repositories root '{}' does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitreeError>;
