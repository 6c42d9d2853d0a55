//! Standalone quoting capability over a borrowed dialect.

use super::{QuoteMode, QuotePolicy, Quoter};
use crate::dialect::SqlDialect;

/// A dialect paired with a quote mode and policy.
///
/// Borrows the dialect for its lifetime and never changes after
/// construction, so any number of configs with different mode/policy can
/// share one dialect across threads.
#[derive(Debug)]
pub struct QuoteConfig<'d, D: ?Sized = dyn SqlDialect> {
    dialect: &'d D,
    mode: QuoteMode,
    policy: QuotePolicy,
}

impl<'d, D: SqlDialect + ?Sized> QuoteConfig<'d, D> {
    pub fn new(dialect: &'d D, mode: QuoteMode, policy: QuotePolicy) -> Self {
        Self {
            dialect,
            mode,
            policy,
        }
    }

    /// The borrowed dialect.
    pub fn dialect(&self) -> &'d D {
        self.dialect
    }
}

impl<D: ?Sized> Clone for QuoteConfig<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: ?Sized> Copy for QuoteConfig<'_, D> {}

impl<D: SqlDialect + ?Sized> Quoter for QuoteConfig<'_, D> {
    fn quotes(&self) -> (char, char) {
        self.dialect.quote_pair()
    }

    fn quote_mode(&self) -> QuoteMode {
        self.mode
    }

    fn quote_policy(&self) -> QuotePolicy {
        self.policy
    }

    fn is_reserved(&self, value: &str) -> bool {
        self.dialect.is_reserved(value)
    }
}
