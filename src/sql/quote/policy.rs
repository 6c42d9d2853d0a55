//! The quote/no-quote decision.

use super::{QuoteMode, QuotePolicy};

/// Decide whether `value` must go through the segment normalizer.
///
/// `mode` gates the whole pipeline: when it excludes the identifier kind the
/// value is emitted verbatim, including any foreign quotes it carries.
/// `is_reserved` is only consulted under [`QuotePolicy::AddReserved`].
pub fn should_quote<F>(
    is_column: bool,
    mode: QuoteMode,
    policy: QuotePolicy,
    value: &str,
    is_reserved: F,
) -> bool
where
    F: FnOnce(&str) -> bool,
{
    if !mode.applies_to(is_column) {
        return false;
    }

    match policy {
        QuotePolicy::AddAlways => true,
        QuotePolicy::AddReserved => is_reserved(value),
        QuotePolicy::NoAdd => false,
    }
}
