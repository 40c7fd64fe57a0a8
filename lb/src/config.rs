//! Library of Babel configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page display settings
    pub display: DisplayConfig,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub log: LogConfig,
}

impl Config {
    /// Config files searched when no explicit path is given, in order
    fn discovered_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".lb.yml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("libraryofbabel").join("lb.yml"));
        }
        paths
    }

    /// Read only `log.level`, before logging exists
    ///
    /// Lenient: any file that cannot be read or parsed yields no level, and the
    /// full load reports it once logging is up.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let paths = match config_path {
            Some(path) => vec![path.clone()],
            None => Self::discovered_paths(),
        };

        let path = paths.into_iter().find(|p| p.exists())?;
        let content = fs::read_to_string(path).ok()?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content).ok()?;
        value.get("log")?.get("level")?.as_str().map(str::to_string)
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try ./.lb.yml, then ~/.config/libraryofbabel/lb.yml
        for path in Self::discovered_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Page display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Symbols per printed line
    #[serde(rename = "line-width")]
    pub line_width: usize,

    /// Colour the located text when printing a search result page
    pub highlight: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            line_width: crate::CHARS_PER_LINE,
            highlight: true,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (text or json)
    pub format: OutputFormat,
}

/// Logging settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,
}
