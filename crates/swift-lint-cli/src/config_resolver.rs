//! Finding and loading the configuration for a check run.
//!
//! The first match wins:
//!
//! 1. the file given with `--config`
//! 2. the nearest `swift-lint.toml` or `.swift-lint.toml`, searching from the
//!    checked path up through its ancestors
//! 3. `config.toml` in the global config directory
//! 4. built-in defaults

use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use swift_lint_core::Config;

/// Project config file names, in order of preference within one directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["swift-lint.toml", ".swift-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Environment variable overriding the global config directory.
const CONFIG_DIR_ENV: &str = "SWIFT_LINT_CONFIG_DIR";

/// Where the configuration of a run came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Passed with `--config`.
    Explicit(PathBuf),
    /// Found in the checked directory or one of its ancestors.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigOrigin {
    /// Path of the config file, if one was used.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit(p) => write!(f, "config {} (--config)", p.display()),
            Self::Project(p) => write!(f, "project config {}", p.display()),
            Self::Global(p) => write!(f, "global config {}", p.display()),
            Self::Default => write!(f, "default configuration"),
        }
    }
}

/// Config lookup for one invocation.
#[derive(Debug, Clone)]
pub struct ConfigLookup {
    explicit: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl ConfigLookup {
    /// Lookup honouring `--config` and the user's global config directory.
    #[must_use]
    pub fn new(explicit: Option<&Path>) -> Self {
        Self {
            explicit: explicit.map(Path::to_path_buf),
            global_dir: global_config_dir(),
        }
    }

    /// Decides which config file applies to `target` without reading it.
    ///
    /// An explicit path is returned as given, even if it does not exist.
    #[must_use]
    pub fn locate(&self, target: &Path) -> ConfigOrigin {
        if let Some(p) = &self.explicit {
            return ConfigOrigin::Explicit(p.clone());
        }
        if let Some(p) = nearest_project_config(target) {
            return ConfigOrigin::Project(p);
        }
        self.global_dir
            .as_deref()
            .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
            .filter(|p| p.is_file())
            .map_or(ConfigOrigin::Default, ConfigOrigin::Global)
    }

    /// Locates and parses the config that applies to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the located file cannot be read or parsed.
    pub fn load(&self, target: &Path) -> Result<(Config, ConfigOrigin)> {
        let origin = self.locate(target);
        let config = match origin.path() {
            Some(p) => Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?,
            None => Config::default(),
        };

        match &origin {
            ConfigOrigin::Project(_) | ConfigOrigin::Explicit(_) => {
                tracing::debug!("Using {}", origin);
            }
            ConfigOrigin::Global(_) | ConfigOrigin::Default => tracing::info!("Using {}", origin),
        }
        Ok((config, origin))
    }
}

/// Searches `target` (or the directory of a file target) and its ancestors.
fn nearest_project_config(target: &Path) -> Option<PathBuf> {
    let target = target.canonicalize().unwrap_or_else(|_| target.to_path_buf());
    let start = if target.is_file() {
        target.parent()?
    } else {
        target.as_path()
    };

    start.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory.
///
/// `$SWIFT_LINT_CONFIG_DIR` if set, otherwise `~/.swift-lint/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".swift-lint"))
}
