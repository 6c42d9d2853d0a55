//! Identifier quoting engine.
//!
//! Decides, per identifier occurrence, whether a table or column name gets
//! quoted, and rewrites dotted and possibly pre-quoted names into the active
//! dialect's canonical delimiters:
//!
//! ```text
//!   raw value + is_column
//!          │
//!          ▼ [policy]     QuoteMode × QuotePolicy × reserved-word test
//!   quote? ── no ──▶ value copied verbatim
//!          │
//!          ▼ [normalize]  per-segment rewrite with (prefix, suffix)
//!   `a`.b  ──▶  "a"."b"
//! ```
//!
//! - [`policy`] - the pure quote/no-quote decision
//! - [`normalize`] - the segment scanner
//! - [`batch`] - column lists, join helpers and [`unquote`]
//! - [`config`] - [`QuoteConfig`], a standalone [`Quoter`]

pub mod batch;
pub mod config;
pub mod normalize;
pub mod policy;

pub use batch::{quote_all, quote_columns, quote_join, quote_join_with, unquote};
pub use config::QuoteConfig;
pub use normalize::{normalize, normalize_into};
pub use policy::should_quote;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Quote Mode / Quote Policy
// =============================================================================

/// Which identifier kinds the quoting rules apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteMode {
    /// Tables and columns.
    #[default]
    TableAndColumns,
    /// Table-like identifiers only; columns pass through verbatim.
    TableOnly,
    /// Column-like identifiers only; tables pass through verbatim.
    ColumnsOnly,
}

impl QuoteMode {
    /// Whether quoting rules apply to a column (`true`) or table (`false`).
    pub fn applies_to(self, is_column: bool) -> bool {
        match self {
            QuoteMode::TableAndColumns => true,
            QuoteMode::TableOnly => !is_column,
            QuoteMode::ColumnsOnly => is_column,
        }
    }

    /// Config and display name, e.g. `table_only`.
    pub fn as_str(self) -> &'static str {
        match self {
            QuoteMode::TableAndColumns => "table_and_columns",
            QuoteMode::TableOnly => "table_only",
            QuoteMode::ColumnsOnly => "columns_only",
        }
    }
}

/// When quoting is applied to identifiers the mode covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotePolicy {
    /// Always quote.
    #[default]
    AddAlways,
    /// Never quote; values pass through untouched.
    NoAdd,
    /// Quote only values that are reserved words in the dialect.
    AddReserved,
}

impl QuotePolicy {
    /// Config and display name, e.g. `add_reserved`.
    pub fn as_str(self) -> &'static str {
        match self {
            QuotePolicy::AddAlways => "add_always",
            QuotePolicy::NoAdd => "no_add",
            QuotePolicy::AddReserved => "add_reserved",
        }
    }
}

impl fmt::Display for QuoteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for QuotePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a quote mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown quote mode: {0}")]
pub struct ParseQuoteModeError(pub String);

/// Error returned when a quote policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown quote policy: {0}")]
pub struct ParseQuotePolicyError(pub String);

/// Lowercase and unify `-` / `_` separators.
fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}

impl FromStr for QuoteMode {
    type Err = ParseQuoteModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "table_and_columns" => Ok(QuoteMode::TableAndColumns),
            "table_only" => Ok(QuoteMode::TableOnly),
            "columns_only" => Ok(QuoteMode::ColumnsOnly),
            _ => Err(ParseQuoteModeError(s.to_string())),
        }
    }
}

impl FromStr for QuotePolicy {
    type Err = ParseQuotePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "add_always" => Ok(QuotePolicy::AddAlways),
            "no_add" => Ok(QuotePolicy::NoAdd),
            "add_reserved" => Ok(QuotePolicy::AddReserved),
            _ => Err(ParseQuotePolicyError(s.to_string())),
        }
    }
}

// =============================================================================
// Quoting Capability
// =============================================================================

/// Anything that can answer the four questions the quoting pipeline asks.
///
/// Implemented by [`QuoteConfig`] (a borrowed dialect plus mode/policy) and
/// by [`crate::Engine`] (an owned dialect plus mode/policy).
pub trait Quoter {
    /// Canonical `(prefix, suffix)` delimiters of the active dialect.
    fn quotes(&self) -> (char, char);

    /// Which identifier kinds are quoted.
    fn quote_mode(&self) -> QuoteMode;

    /// When quoting is applied to an identifier the mode covers.
    fn quote_policy(&self) -> QuotePolicy;

    /// Reserved-word test of the active dialect.
    fn is_reserved(&self, value: &str) -> bool;
}

impl<T: Quoter + ?Sized> Quoter for &T {
    fn quotes(&self) -> (char, char) {
        (**self).quotes()
    }

    fn quote_mode(&self) -> QuoteMode {
        (**self).quote_mode()
    }

    fn quote_policy(&self) -> QuotePolicy {
        (**self).quote_policy()
    }

    fn is_reserved(&self, value: &str) -> bool {
        (**self).is_reserved(value)
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Quote a single identifier according to `quoter`'s mode and policy.
///
/// `value` may be dotted (`schema.table`) and may already carry canonical
/// or backtick quotes. When the mode or policy says no, `value` is returned
/// unchanged.
pub fn quote<Q: Quoter + ?Sized>(quoter: &Q, value: &str, is_column: bool) -> String {
    let mut buf = String::with_capacity(value.len() + 2);
    quote_to(quoter, &mut buf, value, is_column);
    buf
}

/// Like [`quote`], appending to `buf`.
pub fn quote_to<Q: Quoter + ?Sized>(quoter: &Q, buf: &mut String, value: &str, is_column: bool) {
    let quoted = should_quote(
        is_column,
        quoter.quote_mode(),
        quoter.quote_policy(),
        value,
        |v| quoter.is_reserved(v),
    );
    tracing::trace!(value, is_column, quoted, "identifier quote decision");

    if quoted {
        let (prefix, suffix) = quoter.quotes();
        normalize_into(buf, value, prefix, suffix);
    } else {
        buf.push_str(value);
    }
}
