// Config command: show or initialize the gitree configuration
use crate::config::Config;
use crate::errors::{GitreeError, Result};
use colored::Colorize;
use std::fs;
use std::path::Path;

const TEMPLATE_CONFIG: &str = r#"# gitree configuration file
#
# Precedence: command line flags > GITREE_ROOT > this file > defaults.

# Directory under which git repositories are discovered
root: ~/repositories

# Maximum directory depth below the root (unlimited when omitted)
# max_depth: 4

# Also report repositories nested inside other repositories
nested: false

# Descend into hidden directories such as ~/.config
include_hidden: false

# auto | always | never
color: auto
"#;

/// Print the effective configuration
pub fn show(config: &Config) -> Result<()> {
    match Config::config_path() {
        Some(path) if path.exists() => {
            println!("{} {}", "Config file:".bold(), path.display())
        }
        Some(path) => println!(
            "{} {} {}",
            "Config file:".bold(),
            path.display(),
            "(not found, using defaults)".dimmed()
        ),
        None => println!("{} {}", "Config file:".bold(), "(none)".dimmed()),
    }
    println!();
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Write a commented template config file
pub fn init(force: bool) -> Result<()> {
    let path = Config::config_path().ok_or_else(|| {
        GitreeError::ConfigError("Could not determine the config directory".to_string())
    })?;

    write_template(&path, force)?;
    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GitreeError::ConfigError(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, TEMPLATE_CONFIG)?;
    Ok(())
}
