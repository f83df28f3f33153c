use crate::discovery::DiscoveryOptions;
use crate::errors::{GitreeError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "GITREE_CONFIG";

/// Environment variable overriding the repositories root
pub const ROOT_ENV: &str = "GITREE_ROOT";

const CONFIG_DIR: &str = "gitree";
const CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Directory under which repositories are discovered
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub nested: bool,
    #[serde(default)]
    pub include_hidden: bool,
    #[serde(default)]
    pub color: ColorChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            max_depth: None,
            nested: false,
            include_hidden: false,
            color: ColorChoice::Auto,
        }
    }
}

fn default_root() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join("repositories")
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

impl Config {
    /// Location of the config file: `$GITREE_CONFIG`, else the user config dir
    pub fn config_path() -> Option<PathBuf> {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// Load the effective config: file, then environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Config::default(),
        };

        if let Some(root) = env::var_os(ROOT_ENV).filter(|r| !r.is_empty()) {
            log::debug!("Using root from {}", ROOT_ENV);
            config.root = PathBuf::from(root);
        }

        config.root = expand_home(&config.root);
        Ok(config)
    }

    /// Load config from a YAML file
    ///
    /// A missing file yields the defaults.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(config_path)?;
        // An empty file deserializes as null
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let mut config: Config = serde_yml::from_str(&content).map_err(|e| {
            GitreeError::ConfigError(format!(
                "Failed to parse {}: {}",
                config_path.display(),
                e
            ))
        })?;
        config.root = expand_home(&config.root);

        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yml::to_string(self)
            .map_err(|e| GitreeError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            max_depth: self.max_depth,
            nested: self.nested,
            include_hidden: self.include_hidden,
        }
    }
}
