//! Google BigQuery SQL dialect.
//!
//! BigQuery identifier rules:
//! - Backtick identifier quoting (`` `project.dataset.table` ``)
//! - Quoted identifiers may span several path parts; this crate still quotes
//!   each dot-separated part on its own
//! - Reserved keywords from the GoogleSQL lexical reference

use std::collections::HashSet;
use std::sync::LazyLock;

use super::helpers;
use super::SqlDialect;

const RESERVED_WORDS: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE",
    "EXISTS", "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP",
    "GROUPING", "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT",
    "INTERVAL", "INTO", "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE",
    "NATURAL", "NEW", "NO", "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER",
    "OVER", "PARTITION", "PRECEDING", "PROTO", "QUALIFY", "RANGE", "RECURSIVE", "RESPECT",
    "RIGHT", "ROLLUP", "ROWS", "SELECT", "SET", "SOME", "STRUCT", "TABLESAMPLE", "THEN",
    "TO", "TREAT", "TRUE", "UNBOUNDED", "UNION", "UNNEST", "USING", "WHEN", "WHERE",
    "WINDOW", "WITH", "WITHIN",
];

static RESERVED: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| helpers::keyword_set(RESERVED_WORDS));

/// BigQuery SQL dialect.
#[derive(Debug, Clone, Copy)]
pub struct BigQuery;

impl SqlDialect for BigQuery {
    fn name(&self) -> &'static str {
        "bigquery"
    }

    fn quote_pair(&self) -> (char, char) {
        helpers::BACKTICKS
    }

    fn is_reserved(&self, value: &str) -> bool {
        helpers::is_keyword(&RESERVED, value)
    }
}
