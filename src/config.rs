//! Configuration management for optdiff
//!
//! Settings live in `$XDG_CONFIG_HOME/optdiff/config.toml`:
//! - [diff] - default language, comment stripping and aligner
//! - [log] - log level and log directory
//!
//! Command line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::AlignStrategy;
use crate::error::OptdiffError;
use crate::model::Language;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

const APP_DIR: &str = "optdiff";
const CONFIG_FILE: &str = "config.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub diff: DiffConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            diff: DiffConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Defaults for each comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Language tag used when `--lang` is not given
    #[serde(default)]
    pub language: Language,

    /// Strip comments from the optimized listing
    #[serde(default = "default_strip_comments")]
    pub strip_comments: bool,

    #[serde(default)]
    pub strategy: AlignStrategy,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            strip_comments: default_strip_comments(),
            strategy: AlignStrategy::default(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive, e.g. `info` or `optdiff=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for the daily log files; `~/` is expanded
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_strip_comments() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Overrides collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<Language>,
    pub no_strip: bool,
    pub strategy: Option<AlignStrategy>,
    pub log_level: Option<String>,
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Parse configuration text, rejecting unknown schema versions
    pub fn parse(content: &str, path: &Path) -> Result<Self, OptdiffError> {
        let mut config: Config =
            toml::from_str(content).map_err(|source| OptdiffError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }
        if !config.is_version_supported() {
            return Err(OptdiffError::UnsupportedConfigVersion(config.version));
        }

        Ok(config)
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self, OptdiffError> {
        let content = fs::read_to_string(path).map_err(|source| OptdiffError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load the explicit path if given, otherwise the default file if it
    /// exists, otherwise defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, OptdiffError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply command line overrides (they win over the file)
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.diff.language = language;
        }
        if overrides.no_strip {
            self.diff.strip_comments = false;
        }
        if let Some(strategy) = overrides.strategy {
            self.diff.strategy = strategy;
        }
        if let Some(level) = overrides.log_level {
            self.log.level = level;
        }
        self
    }
}

impl LogConfig {
    /// Resolved log directory
    ///
    /// Falls back to the platform state directory, then the cache directory,
    /// then the system temp directory.
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return expand_home(dir);
        }

        dirs::state_dir()
            .or_else(dirs::cache_dir)
            .map(|base| base.join(APP_DIR))
            .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR))
    }
}

fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
