//! Configuration module for sqlident.
//!
//! Handles the TOML config file and its search locations.

mod settings;

pub use settings::{QuotingSettings, Settings, SettingsError, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
