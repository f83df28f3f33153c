// Library interface for gitree
// Exposes internal modules for testing and potential library usage

pub mod cli;
pub mod config;
pub mod discovery;
pub mod errors;
pub mod tree;
pub mod vcs;
