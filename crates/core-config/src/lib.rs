//! Configuration loading and parsing.
//!
//! Parses `scribe.toml` (or an override path provided by the binary). Three
//! sections are recognized, all optional:
//!
//! ```toml
//! [keys]
//! save = "ctrl+s"
//! quit = "ctrl+q"
//! undo = "ctrl+z"
//! redo = "ctrl+y"
//! search = "ctrl+f"
//! replace = "ctrl+r"
//!
//! [syntax]
//! lexer = "plain"
//!
//! [history]
//! capacity = 100
//! ```
//!
//! Missing files and malformed TOML both fall back to defaults; malformed
//! input is logged at WARN. Unknown fields are ignored so older binaries keep
//! reading newer files. The loaded `Config` is immutable for the rest of the
//! session and is passed to whoever needs it; there is no global.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "scribe.toml";

/// Smallest history capacity that still leaves room above the baseline snapshot.
pub const MIN_HISTORY_CAPACITY: usize = 2;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct KeysConfig {
    pub save: String,
    pub quit: String,
    pub undo: String,
    pub redo: String,
    pub search: String,
    pub replace: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            save: "ctrl+s".into(),
            quit: "ctrl+q".into(),
            undo: "ctrl+z".into(),
            redo: "ctrl+y".into(),
            search: "ctrl+f".into(),
            replace: "ctrl+r".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SyntaxConfig {
    pub lexer: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            lexer: "plain".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub keys: KeysConfig,
    #[serde(default)]
    pub syntax: SyntaxConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub file: ConfigFile, // parsed (or default) data
    pub source: Option<PathBuf>,
}

/// Best-effort config path: working directory first, then the platform config dir.
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("scribe").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_not_found_using_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), lexer = %file.syntax.lexer, "config_loaded");
            Ok(Config {
                file,
                source: Some(path),
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed_using_defaults");
            Ok(Config::default())
        }
    }
}

impl Config {
    /// History capacity with the floor applied.
    pub fn history_capacity(&self) -> usize {
        let raw = self.file.history.capacity;
        if raw < MIN_HISTORY_CAPACITY {
            info!(target: "config", raw, clamped = MIN_HISTORY_CAPACITY, "history_capacity_clamped");
            return MIN_HISTORY_CAPACITY;
        }
        raw
    }

    pub fn keys(&self) -> &KeysConfig {
        &self.file.keys
    }

    pub fn lexer_id(&self) -> &str {
        &self.file.syntax.lexer
    }
}
