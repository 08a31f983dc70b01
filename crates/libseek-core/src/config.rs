//! Configuration types for libseek.
//!
//! [`Config::load`] reads `~/.config/libseek/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::matcher::{
    Thresholds, DEFAULT_MAX_DISTANCE, DEFAULT_SHORT_QUERY_LEN, DEFAULT_SHORT_QUERY_MAX_DISTANCE,
};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
short_query_len          = 4
short_query_max_distance = 40
max_distance             = 150

[index]
cache_path = "libraries"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/libseek/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub index: IndexConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_short_query_len")]
    pub short_query_len: usize,
    #[serde(default = "default_short_query_max_distance")]
    pub short_query_max_distance: usize,
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
}

fn default_short_query_len() -> usize { DEFAULT_SHORT_QUERY_LEN }
fn default_short_query_max_distance() -> usize { DEFAULT_SHORT_QUERY_MAX_DISTANCE }
fn default_max_distance() -> usize { DEFAULT_MAX_DISTANCE }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            short_query_len: default_short_query_len(),
            short_query_max_distance: default_short_query_max_distance(),
            max_distance: default_max_distance(),
        }
    }
}

impl From<&SearchConfig> for Thresholds {
    fn from(cfg: &SearchConfig) -> Self {
        Thresholds {
            short_query_len: cfg.short_query_len,
            short_query_max_distance: cfg.short_query_max_distance,
            max_distance: cfg.max_distance,
        }
    }
}

/// `[index]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Cache sub-directory recorded on every release's download resource.
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
}

fn default_cache_path() -> String { "libraries".to_string() }

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            cache_path: default_cache_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/libseek/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file over the built-in defaults. A missing
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::from(&self.search)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("libseek")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
