//! Batch quoting and unquoting helpers.
//!
//! None of these rewrite their input; each builds a new sequence and joins
//! it.

use super::{quote, Quoter};
use crate::dialect::helpers::BACKTICK;

/// Quote every item with the full pipeline, producing a new vector.
pub fn quote_all<Q, S>(quoter: &Q, items: &[S], is_column: bool) -> Vec<String>
where
    Q: Quoter + ?Sized,
    S: AsRef<str>,
{
    items
        .iter()
        .map(|item| quote(quoter, item.as_ref(), is_column))
        .collect()
}

/// Quote every item as a column and join with `,`.
pub fn quote_join<Q, S>(quoter: &Q, items: &[S]) -> String
where
    Q: Quoter + ?Sized,
    S: AsRef<str>,
{
    quote_all(quoter, items, true).join(",")
}

/// Quote a comma-separated column list, e.g. `"id, name"` → `` `id`,`name` ``.
///
/// Segments are split on `,` only; whitespace around each is left for the
/// normalizer to trim (or kept verbatim when no quoting applies).
pub fn quote_columns<Q: Quoter + ?Sized>(quoter: &Q, column_list: &str) -> String {
    let columns: Vec<&str> = column_list.split(',').collect();
    quote_join(quoter, &columns)
}

/// Apply `quote_fn` to every item and join with `sep` followed by a space.
///
/// Used when the caller already holds a closure that captures its own
/// mode/policy, e.g. `|c| engine.quote(c, false)`.
pub fn quote_join_with<S, F>(items: &[S], mut quote_fn: F, sep: &str) -> String
where
    S: AsRef<str>,
    F: FnMut(&str) -> String,
{
    let quoted: Vec<String> = items.iter().map(|item| quote_fn(item.as_ref())).collect();
    quoted.join(&format!("{sep} "))
}

/// Strip the dialect's delimiters and backticks from both ends of `value`.
///
/// This is a trim over a character set, not a parse: `"a"."b"` becomes
/// `a"."b`.
pub fn unquote<'a, Q: Quoter + ?Sized>(quoter: &Q, value: &'a str) -> &'a str {
    let (prefix, suffix) = quoter.quotes();
    value.trim_matches(|c: char| c == prefix || c == suffix || c == BACKTICK)
}
