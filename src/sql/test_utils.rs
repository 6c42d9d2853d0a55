//! Test utilities for quoted identifier validation.
//!
//! Provides helpers for validating that quoted identifiers are accepted by a
//! real SQL parser for the target dialect, using sqlparser-rs.

use sqlparser::dialect::{
    BigQueryDialect, DuckDbDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
    SQLiteDialect, SnowflakeDialect,
};
use sqlparser::parser::Parser;

use super::dialect::Dialect;

/// Validates that a SQL string is syntactically valid for the given dialect.
///
/// `tests/quote/cross_dialect_test.rs` carries a copy of this dialect mapping.
///
/// # Example
///
/// ```ignore
/// use crate::sql::test_utils::validate_sql;
/// use crate::sql::dialect::Dialect;
///
/// validate_sql("SELECT `id` FROM `users`", Dialect::MySql).unwrap();
/// ```
pub fn validate_sql(sql: &str, dialect: Dialect) -> Result<(), String> {
    let parser_dialect: Box<dyn sqlparser::dialect::Dialect> = match dialect {
        Dialect::Postgres => Box::new(PostgreSqlDialect {}),
        Dialect::MySql => Box::new(MySqlDialect {}),
        Dialect::Sqlite => Box::new(SQLiteDialect {}),
        Dialect::TSql => Box::new(MsSqlDialect {}),
        Dialect::DuckDb => Box::new(DuckDbDialect {}),
        Dialect::Snowflake => Box::new(SnowflakeDialect {}),
        Dialect::BigQuery => Box::new(BigQueryDialect {}),
    };

    Parser::parse_sql(&*parser_dialect, sql)
        .map(|_| ())
        .map_err(|e| format!("Invalid SQL for {:?}: {}\nSQL: {}", dialect, e, sql))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_validate_valid_sql() {
        validate_sql("SELECT * FROM users", Dialect::Postgres).unwrap();
        validate_sql("SELECT `id` FROM `users`", Dialect::MySql).unwrap();
        validate_sql("SELECT [id] FROM [dbo].[users]", Dialect::TSql).unwrap();
    }

    #[test]
    fn test_validate_invalid_sql() {
        let result = validate_sql("SELEC * FORM users", Dialect::Postgres);
        assert!(result.is_err());
    }

    #[test]
    fn test_reserved_identifiers_parse_once_quoted() {
        for dialect in Dialect::ALL {
            let engine = Engine::new(dialect);
            let sql = format!(
                "SELECT {} FROM {}",
                engine.quote_columns("id,order,select"),
                engine.quote("sales.table", false)
            );
            validate_sql(&sql, dialect).unwrap();
        }
    }
}
