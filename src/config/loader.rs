#![warn(clippy::all, clippy::pedantic)]

use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Config;

// Fallback when the platform has no config directory
const CONFIG_FILE_PATH: &str = "config/stackfall.toml";

/// Environment variable that points at an alternative settings file.
pub const CONFIG_ENV_VAR: &str = "STACKFALL_CONFIG";

/// Loads settings from the default location, writing a default file first
/// if none exists yet.
pub fn load_config_from_file() -> Result<Config, ConfigError> {
    load_config_from_path(&config_file_path())
}

pub fn save_config_to_file(config: &Config) -> Result<(), ConfigError> {
    save_config_to_path(config, &config_file_path())
}

/// Loads settings from `path`. Missing keys keep their defaults.
pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        info!("No settings file at {}, writing defaults", path.display());
        let default_config = Config::default();
        save_config_to_path(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    info!("Loaded settings from {}", path.display());
    Ok(config)
}

pub fn save_config_to_path(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;
    Ok(())
}

/// Settings file location: the environment override, then the user's config
/// directory, then a path relative to the working directory.
#[must_use]
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("stackfall").join("config.toml")
    } else {
        warn!("No platform config directory, using {CONFIG_FILE_PATH}");
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "settings file I/O failed: {err}"),
            ConfigError::Parse(err) => write!(f, "settings file is not valid TOML: {err}"),
            ConfigError::Serialize(err) => write!(f, "could not serialize settings: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
