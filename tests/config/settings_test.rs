//! Loading settings from disk and building engines from them.

use std::fs;

use sqlident::config::{QuotingSettings, CONFIG_ENV_VAR, LOCAL_CONFIG_FILE};
use sqlident::{Dialect, Engine, QuoteMode, QuotePolicy, Quoter, Settings, SettingsError};
use tempfile::TempDir;

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("sqlident.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[quoting]
dialect = "tsql"
mode = "table_only"
policy = "add_always"
"#,
    );

    let settings = Settings::from_file(&path).unwrap();
    assert_eq!(
        settings.quoting,
        QuotingSettings {
            dialect: Dialect::TSql,
            mode: QuoteMode::TableOnly,
            policy: QuotePolicy::AddAlways,
        }
    );
}

#[test]
fn test_from_file_missing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.toml");

    match Settings::from_file(&missing) {
        Err(SettingsError::FileNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected FileNotFound, got {:?}", other),
    }
}

#[test]
fn test_from_file_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quoting]\npolicy = \"sometimes\"\n");

    let err = Settings::from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::ParseError(_)));
    assert!(err.to_string().starts_with("Failed to parse config file"));
}

#[test]
fn test_written_settings_load_back() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        quoting: QuotingSettings {
            dialect: Dialect::Snowflake,
            mode: QuoteMode::ColumnsOnly,
            policy: QuotePolicy::AddReserved,
        },
    };
    let path = write_config(&dir, &settings.to_toml_string().unwrap());

    assert_eq!(Settings::from_file(&path).unwrap(), settings);
}

#[test]
fn test_load_from_env_var() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quoting]\ndialect = \"mysql\"\npolicy = \"add_reserved\"\n");

    std::env::set_var(CONFIG_ENV_VAR, &path);
    let loaded = Settings::load();
    std::env::remove_var(CONFIG_ENV_VAR);

    let settings = loaded.unwrap();
    assert_eq!(settings.quoting.dialect, Dialect::MySql);
    assert_eq!(settings.quoting.mode, QuoteMode::TableAndColumns);
    assert_eq!(settings.quoting.policy, QuotePolicy::AddReserved);
}

fn write_user_config(config_dir: &TempDir, body: &str) {
    let dir = config_dir.path().join("sqlident");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), body).unwrap();
}

#[test]
fn test_load_prefers_local_file_over_user_config() {
    let working_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    fs::write(
        working_dir.path().join(LOCAL_CONFIG_FILE),
        "[quoting]\ndialect = \"duckdb\"\n",
    )
    .unwrap();
    write_user_config(&config_dir, "[quoting]\ndialect = \"bigquery\"\n");

    let settings =
        Settings::load_from(None, working_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(settings.quoting.dialect, Dialect::DuckDb);
}

#[test]
fn test_load_prefers_explicit_path_over_local_file() {
    let working_dir = TempDir::new().unwrap();
    let explicit = write_config(&working_dir, "[quoting]\ndialect = \"tsql\"\n");
    let other = TempDir::new().unwrap();
    fs::write(
        other.path().join(LOCAL_CONFIG_FILE),
        "[quoting]\ndialect = \"mysql\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(Some(explicit.as_path()), other.path(), None).unwrap();
    assert_eq!(settings.quoting.dialect, Dialect::TSql);
}

#[test]
fn test_load_explicit_path_must_exist() {
    let working_dir = TempDir::new().unwrap();
    fs::write(
        working_dir.path().join(LOCAL_CONFIG_FILE),
        "[quoting]\ndialect = \"mysql\"\n",
    )
    .unwrap();
    let missing = working_dir.path().join("missing.toml");

    let result = Settings::load_from(Some(missing.as_path()), working_dir.path(), None);
    assert!(matches!(result, Err(SettingsError::FileNotFound(_))));
}

#[test]
fn test_load_falls_back_to_user_config() {
    let working_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();
    write_user_config(&config_dir, "[quoting]\npolicy = \"no_add\"\n");

    let settings =
        Settings::load_from(None, working_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(settings.quoting.dialect, Dialect::Postgres);
    assert_eq!(settings.quoting.policy, QuotePolicy::NoAdd);
}

#[test]
fn test_load_defaults_when_nothing_found() {
    let working_dir = TempDir::new().unwrap();
    let config_dir = TempDir::new().unwrap();

    let settings =
        Settings::load_from(None, working_dir.path(), Some(config_dir.path())).unwrap();
    assert_eq!(settings, Settings::default());

    let settings = Settings::load_from(None, working_dir.path(), None).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_overrides_applied_to_loaded_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quoting]\ndialect = \"mysql\"\nmode = \"table_only\"\n");

    let quoting = Settings::from_file(&path)
        .unwrap()
        .quoting
        .with_overrides(None, None, Some(QuotePolicy::AddReserved));
    let engine = Engine::from_settings(&quoting);

    assert_eq!(engine.quotes(), ('`', '`'));
    assert_eq!(engine.quote_mode(), QuoteMode::TableOnly);
    assert_eq!(engine.quote("order", false), "`order`");
    assert_eq!(engine.quote("order", true), "order");
}

#[test]
fn test_engine_from_loaded_settings() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[quoting]\ndialect = \"mysql\"\npolicy = \"add_reserved\"\n");

    let settings = Settings::from_file(&path).unwrap();
    let engine = Engine::from_settings(&settings.quoting);

    assert_eq!(engine.quotes(), ('`', '`'));
    assert_eq!(engine.quote_policy(), QuotePolicy::AddReserved);
    assert_eq!(engine.quote_columns("id,order,name"), "id,`order`,name");
    assert_eq!(engine.quote("users", false), "users");
}
