//! TOML-based configuration for sqlident.
//!
//! Supports a config file (sqlident.toml) selecting the dialect and quoting
//! rules used by [`crate::Engine::from_settings`].
//!
//! Example configuration:
//! ```toml
//! [quoting]
//! dialect = "mysql"            # postgres, mysql, sqlite, tsql, duckdb, snowflake, bigquery
//! mode = "table_and_columns"   # table_and_columns, table_only, columns_only
//! policy = "add_reserved"      # add_always, no_add, add_reserved
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::dialect::Dialect;
use crate::quote::{QuoteMode, QuotePolicy};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "SQLIDENT_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "sqlident.toml";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Identifier quoting rules.
    pub quoting: QuotingSettings,
}

/// Identifier quoting configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct QuotingSettings {
    /// Target dialect (supplies quote characters and reserved words).
    pub dialect: Dialect,

    /// Which identifier kinds are quoted.
    pub mode: QuoteMode,

    /// When quoting is applied.
    pub policy: QuotePolicy,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Render settings as TOML text.
    pub fn to_toml_string(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string(self)?)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `SQLIDENT_CONFIG`
    /// 2. `./sqlident.toml`
    /// 3. `~/.config/sqlident/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        let env_path = env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_from(env_path.as_deref(), Path::new("."), dirs::config_dir().as_deref())
    }

    /// [`Settings::load`] with the three search locations passed in.
    ///
    /// An explicit path must exist. Missing local or user files fall through
    /// to the next location, then to defaults.
    pub fn load_from(
        explicit: Option<&Path>,
        working_dir: &Path,
        config_dir: Option<&Path>,
    ) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local_config = working_dir.join(LOCAL_CONFIG_FILE);
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = config_dir {
            let user_config = config_dir.join("sqlident").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Settings::default())
    }
}

impl QuotingSettings {
    /// Replace each field that has an override, keeping the rest.
    ///
    /// Command-line flags go through here so they win over file values.
    pub fn with_overrides(
        mut self,
        dialect: Option<Dialect>,
        mode: Option<QuoteMode>,
        policy: Option<QuotePolicy>,
    ) -> Self {
        if let Some(dialect) = dialect {
            self.dialect = dialect;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(policy) = policy {
            self.policy = policy;
        }
        self
    }
}
