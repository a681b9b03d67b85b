// rc file settings (~/.pipeview/rc)

use std::path::{Path, PathBuf};
use std::str::FromStr;
use anyhow::{Context, Result};
use thiserror::Error;
use crate::cli::output::{ColorMode, OutputFormat};
use crate::render::text::{MAX_WIDTH, MIN_WIDTH};

/// Accepted range for a configured width
pub const WIDTH_RANGE: std::ops::RangeInclusive<usize> = MIN_WIDTH..=MAX_WIDTH;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for '{key}' in {path} (line {line}): {reason}")]
    InvalidValue {
        path: String,
        line: usize,
        key: String,
        value: String,
        reason: String,
    },
    #[error("Malformed line {line} in {path}: expected key=value")]
    MalformedLine { path: String, line: usize },
}

/// Settings read from the rc file. Unset keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub color: Option<ColorMode>,
    pub width: Option<usize>,
    pub format: Option<OutputFormat>,
    pub title: Option<String>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".pipeview").join("rc"))
    }

    /// Load the rc file if there is one
    pub fn load() -> Result<Config> {
        let Some(path) = Self::config_path() else {
            log::debug!("No home directory; using built-in defaults");
            return Ok(Config::default());
        };
        if !path.exists() {
            log::debug!("No config file at {}", path.display());
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&contents, &path.display().to_string())?;
        log::debug!("Loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse rc contents. `origin` is only used in error messages.
    pub fn parse(contents: &str, origin: &str) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        for (idx, raw) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=')
                .ok_or_else(|| ConfigError::MalformedLine { path: origin.to_string(), line: line_no })?;
            let key = key.trim();
            let value = value.trim();

            let invalid = |reason: String| ConfigError::InvalidValue {
                path: origin.to_string(),
                line: line_no,
                key: key.to_string(),
                value: value.to_string(),
                reason,
            };

            match key {
                "color" => config.color = Some(ColorMode::from_str(value).map_err(invalid)?),
                "format" => config.format = Some(OutputFormat::from_str(value).map_err(invalid)?),
                "width" => {
                    let width = value.parse::<usize>()
                        .map_err(|_| invalid("width must be a number".to_string()))?;
                    if !WIDTH_RANGE.contains(&width) {
                        return Err(invalid(format!(
                            "width must be between {} and {}",
                            WIDTH_RANGE.start(),
                            WIDTH_RANGE.end()
                        )));
                    }
                    config.width = Some(width);
                }
                "title" => config.title = Some(value.to_string()),
                _ => log::warn!("Ignoring unknown config key '{}' in {} (line {})", key, origin, line_no),
            }
        }

        Ok(config)
    }
}
