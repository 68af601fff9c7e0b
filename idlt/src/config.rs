//! Configuration module for the idlt CLI.
//!
//! This module handles locating and loading the `idlt.toml` settings file.
//! Command-line flags override anything read here.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use idlc_lex::LexerOptions;

use crate::error::{IdltError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "idlt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer behaviour.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token stream output.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Reject identifiers that match a keyword only case-insensitively.
    #[serde(default)]
    pub strict_keyword_case: bool,
}

impl LexerConfig {
    /// Lexer options for these settings, with `strict` forcing strict mode.
    pub fn options(&self, strict: bool) -> LexerOptions {
        LexerOptions {
            strict_keyword_case: strict || self.strict_keyword_case,
        }
    }
}

/// Output configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Prefix text output with `line:column`.
    #[serde(default)]
    pub show_spans: bool,
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_spans: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/idlt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IdltError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            IdltError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("idlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("idlt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
