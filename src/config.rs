//! Tokenizer configuration
//!
//! Default delimiter lists can be stored in a TOML file so they need not be
//! repeated on every invocation. The user-level file lives at
//! `~/.config/listsplit/config.toml`.
//!
//! ```toml
//! separators = [",", " "]
//! spacers = [";"]
//! keep_empty = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tokenizer::Tokenizer;

/// Directory name under the user's config home
pub const CONFIG_DIR: &str = ".config/listsplit";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Delimiter lists and flags for a tokenize run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Patterns consumed and dropped
    #[serde(default)]
    pub separators: Vec<String>,
    /// Patterns consumed and emitted as their own tokens
    #[serde(default)]
    pub spacers: Vec<String>,
    /// Emit zero-length text runs next to delimiters
    #[serde(default)]
    pub keep_empty: bool,
}

impl TokenizerConfig {
    /// Path of the user-level config file
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Parse a config from TOML text
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&content, path)
    }

    /// Load `path` if given, else the user-level file, else defaults
    ///
    /// An explicit path must exist. A missing user-level file is not an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default = Self::default_path();
        if default.exists() {
            Self::load(&default)
        } else {
            debug!("no config at {}, using defaults", default.display());
            Ok(Self::default())
        }
    }

    /// Save config to disk, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(io_err)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_err)
    }

    /// Append extra patterns after the configured ones
    ///
    /// Configured patterns keep precedence since earlier entries win ties.
    #[must_use]
    pub fn extend(mut self, separators: &[String], spacers: &[String], keep_empty: bool) -> Self {
        self.separators.extend_from_slice(separators);
        self.spacers.extend_from_slice(spacers);
        self.keep_empty |= keep_empty;
        self
    }

    /// Tokenizer with this config's flags
    #[must_use]
    pub const fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new().with_keep_empty(self.keep_empty)
    }
}
