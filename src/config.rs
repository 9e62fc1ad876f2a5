//! Server and console configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_hangman::Language;
use tracing::{debug, info, instrument};

/// Configuration shared by the HTTP server and the console game.
///
/// Every field has a default, so an empty or partial TOML file is valid.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct HangmanConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    host: String,

    /// Port the HTTP server binds to.
    #[serde(default = "default_port")]
    port: u16,

    /// Directory containing `<locale>.dict` word lists.
    #[serde(default = "default_dictionary_dir")]
    dictionary_dir: PathBuf,

    /// Language used when a request or command names none.
    #[serde(default)]
    default_language: Language,

    /// Mistakes a console player may make; one more loses the game.
    #[serde(default = "default_max_mistakes")]
    max_mistakes: u32,

    /// Fixed seed for reproducible word selection.
    #[serde(default)]
    rng_seed: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dictionary_dir() -> PathBuf {
    PathBuf::from("dictionaries")
}

fn default_max_mistakes() -> u32 {
    11
}

impl Default for HangmanConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dictionary_dir: default_dictionary_dir(),
            default_language: Language::default(),
            max_mistakes: default_max_mistakes(),
            rng_seed: None,
        }
    }
}

impl HangmanConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            port = config.port,
            dictionary_dir = %config.dictionary_dir.display(),
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
