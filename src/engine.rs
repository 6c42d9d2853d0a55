//! Engine: an owned dialect bound to a quote mode and policy.
//!
//! This is the entry point a statement builder holds on to:
//!
//! ```
//! use sqlident::{Dialect, Engine, QuotePolicy};
//!
//! let engine = Engine::new(Dialect::MySql).with_quote_policy(QuotePolicy::AddReserved);
//! assert_eq!(engine.quote("order", true), "`order`");
//! assert_eq!(engine.quote("amount", true), "amount");
//! assert_eq!(engine.quote_columns("id,key,name"), "id,`key`,name");
//! ```

use crate::config::QuotingSettings;
use crate::dialect::{Dialect, SqlDialect};
use crate::quote::{self, QuoteConfig, QuoteMode, QuotePolicy, Quoter};

/// Quoting engine over an owned dialect.
///
/// Mode and policy are fixed once the engine is built; the builder methods
/// consume `self`. `Engine<Dialect>` is `Send + Sync` and can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct Engine<D = Dialect> {
    dialect: D,
    quote_mode: QuoteMode,
    quote_policy: QuotePolicy,
}

impl<D: SqlDialect> Engine<D> {
    /// Create an engine that quotes tables and columns unconditionally.
    pub fn new(dialect: D) -> Self {
        Self::with_config(dialect, QuoteMode::default(), QuotePolicy::default())
    }

    /// Create an engine with an explicit mode and policy.
    pub fn with_config(dialect: D, quote_mode: QuoteMode, quote_policy: QuotePolicy) -> Self {
        tracing::debug!(
            dialect = dialect.name(),
            mode = %quote_mode,
            policy = %quote_policy,
            "quoting engine configured"
        );
        Self {
            dialect,
            quote_mode,
            quote_policy,
        }
    }

    /// Set the quote mode.
    pub fn with_quote_mode(self, quote_mode: QuoteMode) -> Self {
        Self::with_config(self.dialect, quote_mode, self.quote_policy)
    }

    /// Set the quote policy.
    pub fn with_quote_policy(self, quote_policy: QuotePolicy) -> Self {
        Self::with_config(self.dialect, self.quote_mode, quote_policy)
    }

    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// A standalone [`QuoteConfig`] borrowing this engine's dialect.
    pub fn quoter(&self) -> QuoteConfig<'_, D> {
        QuoteConfig::new(&self.dialect, self.quote_mode, self.quote_policy)
    }

    /// Quote a table (`is_column == false`) or column identifier.
    pub fn quote(&self, value: &str, is_column: bool) -> String {
        quote::quote(self, value, is_column)
    }

    /// Quote into an existing buffer.
    pub fn quote_to(&self, buf: &mut String, value: &str, is_column: bool) {
        quote::quote_to(self, buf, value, is_column)
    }

    /// Quote a comma-separated column list.
    pub fn quote_columns(&self, column_list: &str) -> String {
        quote::quote_columns(self, column_list)
    }

    /// Quote columns and join them with `,`.
    pub fn quote_join<S: AsRef<str>>(&self, columns: &[S]) -> String {
        quote::quote_join(self, columns)
    }

    /// Strip this dialect's quote characters from both ends of `value`.
    pub fn unquote<'a>(&self, value: &'a str) -> &'a str {
        quote::unquote(self, value)
    }
}

impl Engine<Dialect> {
    /// Build an engine from the `[quoting]` section of a settings file.
    pub fn from_settings(settings: &QuotingSettings) -> Self {
        Self::with_config(settings.dialect, settings.mode, settings.policy)
    }
}

impl Default for Engine<Dialect> {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl<D: SqlDialect> Quoter for Engine<D> {
    fn quotes(&self) -> (char, char) {
        self.dialect.quote_pair()
    }

    fn quote_mode(&self) -> QuoteMode {
        self.quote_mode
    }

    fn quote_policy(&self) -> QuotePolicy {
        self.quote_policy
    }

    fn is_reserved(&self, value: &str) -> bool {
        self.dialect.is_reserved(value)
    }
}
