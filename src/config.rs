// Configuration loading and parsing (config/settings.toml).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

/// Top-level settings assembled from `config/settings.toml`.
///
/// Every section and field is optional in the file; missing pieces fall
/// back to the defaults below, and a missing file yields `Config::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub draw: DrawConfig,
    pub grouping: GroupingConfig,
    pub database: DatabaseConfig,
    pub export: ExportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            draw: DrawConfig::default(),
            grouping: GroupingConfig::default(),
            database: DatabaseConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DrawConfig {
    /// Initial winner count for the draw field.
    pub default_count: usize,
    /// Initial state of the allow-repeat toggle.
    pub allow_repeat: bool,
    /// Duration of the slot-machine roll. Zero reveals immediately.
    pub roll_duration_ms: u64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        DrawConfig {
            default_count: 1,
            allow_repeat: false,
            roll_duration_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Initial member count for the group-size field.
    pub default_size: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        GroupingConfig { default_size: 2 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit database path. When unset, the platform data directory is
    /// used (see `Config::resolve_db_path`).
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that export files are written into.
    pub directory: String,
    /// File name prefix; the current date and `.csv` are appended.
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: ".".to_string(),
            filename_prefix: "groups".to_string(),
        }
    }
}

impl Config {
    /// Resolve where the SQLite database lives.
    ///
    /// An explicit `database.path` wins. Otherwise the platform-specific
    /// data directory is used (e.g. `~/.local/share/namedraw/` on Linux),
    /// falling back to the working directory when no home is available.
    pub fn resolve_db_path(&self) -> PathBuf {
        if let Some(path) = &self.database.path {
            return PathBuf::from(path);
        }
        match directories::ProjectDirs::from("", "", "namedraw") {
            Some(dirs) => dirs.data_local_dir().join("namedraw.db"),
            None => PathBuf::from("namedraw.db"),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load configuration from `config/settings.toml` under `base_dir`.
///
/// A missing file is not an error: the built-in defaults are returned so a
/// fresh checkout runs without any setup.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join("settings.toml");
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Convenience wrapper: loads config relative to the current working
/// directory.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.draw.default_count == 0 {
        return Err(ConfigError::ValidationError {
            field: "draw.default_count".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.grouping.default_size == 0 {
        return Err(ConfigError::ValidationError {
            field: "grouping.default_size".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.export.filename_prefix.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "export.filename_prefix".into(),
            message: "must not be empty".into(),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
