use crate::error::{CatalogueError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LINE_WIDTH: usize = 100;
const MIN_LINE_WIDTH: usize = 20;

/// Environment variable overriding the catalogue home directory.
pub const HOME_ENV: &str = "CATALOGUE_HOME";

/// Keys accepted by `catalogue config`.
pub const CONFIG_KEYS: &[&str] = &["log-level", "line-width", "color"];

const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for the catalogue shell, stored in `<home>/config.json`.
///
/// File fields use the same kebab-case names as `catalogue config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CatalogueConfig {
    /// Log level for the file logger; "off" disables logging
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Maximum width of an item line in listings
    #[serde(default = "default_line_width")]
    pub line_width: usize,

    /// Whether to style terminal output
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

fn default_color() -> bool {
    true
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            line_width: default_line_width(),
            color: default_color(),
        }
    }
}

impl CatalogueConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: CatalogueConfig = serde_json::from_str(&content)?;
        config.log_level = parse_log_level(&config.log_level)?;
        config.line_width = check_line_width(config.line_width)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "log-level" => Ok(self.log_level.clone()),
            "line-width" => Ok(self.line_width.to_string()),
            "color" => Ok(self.color.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "log-level" => self.log_level = parse_log_level(value)?,
            "line-width" => {
                let width: usize = value.parse().map_err(|_| {
                    CatalogueError::Config(format!("line-width must be a number, got `{}`", value))
                })?;
                self.line_width = check_line_width(width)?;
            }
            "color" => {
                self.color = value.parse().map_err(|_| {
                    CatalogueError::Config(format!("color must be true or false, got `{}`", value))
                })?;
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).ok().map(|value| (*key, value)))
            .collect()
    }
}

fn parse_log_level(value: &str) -> Result<String> {
    let level = value.trim().to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(CatalogueError::Config(format!(
            "invalid log level `{}` (expected one of: {})",
            value,
            LOG_LEVELS.join(", ")
        )));
    }
    Ok(level)
}

fn check_line_width(width: usize) -> Result<usize> {
    if width < MIN_LINE_WIDTH {
        return Err(CatalogueError::Config(format!(
            "line-width must be at least {}, got {}",
            MIN_LINE_WIDTH, width
        )));
    }
    Ok(width)
}

fn unknown_key(key: &str) -> CatalogueError {
    CatalogueError::Config(format!(
        "unknown config key `{}` (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

/// Picks the home directory: explicit flag, then `CATALOGUE_HOME`, then the
/// platform data directory.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "catalogue", "catalogue")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| CatalogueError::Config("could not determine a home directory".into()))
}
