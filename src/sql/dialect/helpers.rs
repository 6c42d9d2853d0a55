//! Shared helper functions for SQL dialect implementations.
//!
//! This module provides reusable building blocks that dialects can compose
//! to implement the `SqlDialect` trait with minimal duplication.

use std::collections::HashSet;

// =============================================================================
// Quote Pairs
// =============================================================================

/// Backtick, accepted as an "already quoted" marker by every dialect.
pub const BACKTICK: char = '`';

/// Double quotes (ANSI style).
/// Used by: Postgres, DuckDB, Snowflake, ANSI
pub const DOUBLE_QUOTES: (char, char) = ('"', '"');

/// Backticks.
/// Used by: MySQL, SQLite, BigQuery
pub const BACKTICKS: (char, char) = (BACKTICK, BACKTICK);

/// Square brackets.
/// Used by: T-SQL (SQL Server, Azure Synapse)
pub const BRACKETS: (char, char) = ('[', ']');

// =============================================================================
// Reserved Words
// =============================================================================

/// Build a lookup set from an uppercase keyword table.
pub fn keyword_set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Case-insensitive membership test against an uppercase keyword set.
///
/// The value is matched as given; surrounding whitespace or quote characters
/// make it a non-keyword.
pub fn is_keyword(set: &HashSet<&'static str>, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    set.contains(value.to_ascii_uppercase().as_str())
}
