//! sqlident CLI - Quote SQL identifiers for a target dialect
//!
//! Usage:
//!   sqlident [--dialect <dialect>] [--mode <mode>] [--policy <policy>] quote <values>... [--table]
//!   sqlident columns <list>
//!   sqlident unquote <values>...
//!   sqlident reserved <words>...
//!   sqlident dialects
//!
//! Examples:
//!   sqlident --dialect tsql quote dbo.users --table
//!   sqlident --dialect mysql --policy add-reserved columns "id,order,name"
//!   sqlident --format json unquote '"users"' '`orders`'

use clap::{Parser, Subcommand, ValueEnum};
use sqlident::config::Settings;
use sqlident::{Dialect, Engine, QuoteMode, QuotePolicy, Quoter, SqlDialect};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlident")]
#[command(about = "sqlident - Dialect-aware SQL identifier quoting")]
#[command(version)]
struct Cli {
    /// Config file (defaults to SQLIDENT_CONFIG, ./sqlident.toml, then the user config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQL dialect supplying quote characters and reserved words
    #[arg(short, long, global = true)]
    dialect: Option<DialectArg>,

    /// Which identifier kinds are quoted
    #[arg(short, long, global = true)]
    mode: Option<ModeArg>,

    /// When quoting is applied
    #[arg(short, long, global = true)]
    policy: Option<PolicyArg>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote identifiers (columns unless --table is given)
    Quote {
        /// Identifiers, possibly dotted or already quoted
        #[arg(required = true)]
        values: Vec<String>,

        /// Treat the values as table names
        #[arg(short, long)]
        table: bool,
    },

    /// Quote a comma-separated column list
    Columns {
        /// Column list, e.g. "id,name,created_at"
        list: String,
    },

    /// Strip quote characters from both ends of each value
    Unquote {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Check whether words are reserved in the dialect
    Reserved {
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// List built-in dialects and their quote characters
    Dialects,
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Postgres,
    Mysql,
    Sqlite,
    Tsql,
    Duckdb,
    Snowflake,
    Bigquery,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Postgres => Dialect::Postgres,
            DialectArg::Mysql => Dialect::MySql,
            DialectArg::Sqlite => Dialect::Sqlite,
            DialectArg::Tsql => Dialect::TSql,
            DialectArg::Duckdb => Dialect::DuckDb,
            DialectArg::Snowflake => Dialect::Snowflake,
            DialectArg::Bigquery => Dialect::BigQuery,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    TableAndColumns,
    TableOnly,
    ColumnsOnly,
}

impl From<ModeArg> for QuoteMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TableAndColumns => QuoteMode::TableAndColumns,
            ModeArg::TableOnly => QuoteMode::TableOnly,
            ModeArg::ColumnsOnly => QuoteMode::ColumnsOnly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    AddAlways,
    NoAdd,
    AddReserved,
}

impl From<PolicyArg> for QuotePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::AddAlways => QuotePolicy::AddAlways,
            PolicyArg::NoAdd => QuotePolicy::NoAdd,
            PolicyArg::AddReserved => QuotePolicy::AddReserved,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One result per line
    Text,
    /// JSON array
    Json,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let settings = match load_settings(cli.config.as_ref()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let quoting = settings.quoting.with_overrides(
        cli.dialect.map(Into::into),
        cli.mode.map(Into::into),
        cli.policy.map(Into::into),
    );
    let engine = Engine::from_settings(&quoting);

    let lines = match cli.command {
        Commands::Quote { values, table } => values
            .iter()
            .map(|value| engine.quote(value, !table))
            .collect(),
        Commands::Columns { list } => vec![engine.quote_columns(&list)],
        Commands::Unquote { values } => values
            .iter()
            .map(|value| engine.unquote(value).to_string())
            .collect(),
        Commands::Reserved { words } => words
            .iter()
            .map(|word| format!("{}\t{}", word, engine.is_reserved(word)))
            .collect(),
        Commands::Dialects => Dialect::ALL
            .iter()
            .map(|dialect| {
                let (prefix, suffix) = dialect.quote_pair();
                format!("{}\t{}{}", dialect, prefix, suffix)
            })
            .collect(),
    };

    emit(&lines, cli.format)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, sqlident::SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

fn emit(lines: &[String], format: OutputFormat) -> ExitCode {
    match format {
        OutputFormat::Text => {
            for line in lines {
                println!("{}", line);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(lines) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
