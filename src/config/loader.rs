// SPDX-License-Identifier: MIT

//! Configuration loading.

use crate::error::{ConfigError, Result, ScError};
use std::path::{Path, PathBuf};

use super::schema::ScConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &[".scrc.json", "sc.toml", ".sc.toml"];

/// Find the configuration file in the current directory or parent directories.
pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    find_config_file_from(&current_dir)
}

/// Find the configuration file starting from a specific directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        // Try parent directory
        if !current.pop() {
            break;
        }
    }

    // Also check user's home directory
    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.exists() {
                return Some(config_path);
            }
        }
    }

    // Check XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        let sc_config = config_dir.join("sc").join("config.json");
        if sc_config.exists() {
            return Some(sc_config);
        }
    }

    None
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<ScConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(ScConfig::default())
        }
    }
}

/// Load configuration from a specific path.
///
/// The format is chosen by file extension: `.json` or `.toml`.
pub fn load_config_from(path: &Path) -> Result<ScConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ScError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ScError::Config(ConfigError::ParseError {
            message: format!("Failed to read config file: {}", e),
        })
    })?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json_config(&content),
        Some("toml") => parse_toml_config(&content),
        _ => Err(ScError::Config(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })),
    }
}

/// Parse configuration from a JSON string.
pub fn parse_json_config(content: &str) -> Result<ScConfig> {
    serde_json::from_str(content).map_err(|e| {
        ScError::Config(ConfigError::ParseError {
            message: format!("Failed to parse JSON: {}", e),
        })
    })
}

/// Parse configuration from a TOML string.
pub fn parse_toml_config(content: &str) -> Result<ScConfig> {
    toml::from_str(content).map_err(|e| {
        ScError::Config(ConfigError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })
    })
}
