//! SQL Dialect definitions for identifier quoting.
//!
//! This module provides a trait-based abstraction for the two dialect facts
//! the quoting engine consumes:
//!
//! - Identifier delimiters: `"` (ANSI/PG/DuckDB/Snowflake), `` ` ``
//!   (MySQL/SQLite/BigQuery), `[]` (T-SQL)
//! - Reserved-word membership, used by the `AddReserved` quote policy
//!
//! # Usage
//!
//! ```
//! use sqlident::dialect::{Dialect, SqlDialect};
//!
//! let dialect = Dialect::TSql;
//! assert_eq!(dialect.quote_pair(), ('[', ']'));
//! assert!(dialect.is_reserved("select"));
//! ```
//!
//! Any type implementing [`SqlDialect`] can stand in for the built-ins, so a
//! statement builder with its own dialect registry only needs to expose
//! these two answers.

mod ansi;
mod bigquery;
mod duckdb;
pub mod helpers;
mod mysql;
mod postgres;
mod snowflake;
mod sqlite;
mod tsql;

// Note: Ansi is exported as a reference implementation for testing and documentation.
// It is NOT included in the Dialect enum because real databases rarely use pure ANSI SQL.
pub use ansi::Ansi;
pub use bigquery::BigQuery;
pub use duckdb::DuckDb;
pub use mysql::MySql;
pub use postgres::Postgres;
pub use snowflake::Snowflake;
pub use sqlite::Sqlite;
pub use tsql::TSql;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// SQL dialect trait - supplies quote characters and reserved words.
pub trait SqlDialect: std::fmt::Debug {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    /// Canonical identifier delimiters as `(prefix, suffix)`.
    ///
    /// - ANSI/PostgreSQL/DuckDB/Snowflake: `('"', '"')`
    /// - MySQL/SQLite/BigQuery: `` ('`', '`') ``
    /// - T-SQL: `('[', ']')`
    ///
    /// The pair must be the same for every call on a given value.
    fn quote_pair(&self) -> (char, char);

    /// Whether `value` collides with a reserved keyword.
    ///
    /// Built-in dialects match case-insensitively against the whole value.
    fn is_reserved(&self, value: &str) -> bool;
}

impl<T: SqlDialect + ?Sized> SqlDialect for &T {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn quote_pair(&self) -> (char, char) {
        (**self).quote_pair()
    }

    fn is_reserved(&self, value: &str) -> bool {
        (**self).is_reserved(value)
    }
}

impl<T: SqlDialect + ?Sized> SqlDialect for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn quote_pair(&self) -> (char, char) {
        (**self).quote_pair()
    }

    fn is_reserved(&self, value: &str) -> bool {
        (**self).is_reserved(value)
    }
}

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    MySql,
    #[serde(alias = "sqlite3")]
    Sqlite,
    #[serde(alias = "mssql", alias = "sqlserver")]
    TSql,
    DuckDb,
    Snowflake,
    BigQuery,
}

impl Dialect {
    /// Every built-in dialect, in declaration order.
    pub const ALL: [Dialect; 7] = [
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::Sqlite,
        Dialect::TSql,
        Dialect::DuckDb,
        Dialect::Snowflake,
        Dialect::BigQuery,
    ];

    /// Get the dialect implementation.
    pub fn dialect(&self) -> &'static dyn SqlDialect {
        match self {
            Dialect::Postgres => &Postgres,
            Dialect::MySql => &MySql,
            Dialect::Sqlite => &Sqlite,
            Dialect::TSql => &TSql,
            Dialect::DuckDb => &DuckDb,
            Dialect::Snowflake => &Snowflake,
            Dialect::BigQuery => &BigQuery,
        }
    }
}

// Implement SqlDialect for Dialect enum by delegating to concrete types
impl SqlDialect for Dialect {
    fn name(&self) -> &'static str {
        self.dialect().name()
    }

    fn quote_pair(&self) -> (char, char) {
        self.dialect().quote_pair()
    }

    fn is_reserved(&self, value: &str) -> bool {
        self.dialect().is_reserved(value)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dialect().name())
    }
}

/// Error returned when a dialect name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dialect: {0}")]
pub struct UnknownDialectError(pub String);

impl FromStr for Dialect {
    type Err = UnknownDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "mysql" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "tsql" | "mssql" | "sqlserver" => Ok(Dialect::TSql),
            "duckdb" => Ok(Dialect::DuckDb),
            "snowflake" => Ok(Dialect::Snowflake),
            "bigquery" => Ok(Dialect::BigQuery),
            _ => Err(UnknownDialectError(s.to_string())),
        }
    }
}
